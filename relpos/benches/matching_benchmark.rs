use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gwac_relpos::algorithms::{compute_statistics, find_matches, relative, ReferenceAngles};
use gwac_relpos::core::{AngularSample, CameraId, FieldOfView, TimeSeries, SECONDS_PER_DAY};
use gwac_relpos::geometry::rotate_to_frame;
use gwac_relpos::services::{run, MatchSettings};
use qtty::{Degrees, Radians};
use std::hint::black_box;

/// First image of a simulated night, seconds of day
const NIGHT_START: f64 = 10_000.0;

/// A night of pointings drifting slowly in RA, one image every `cadence` seconds.
///
/// The cadence shrinks when `count` images would not fit before midnight.
fn night(field: FieldOfView, count: usize, cadence: f64, offset: f64) -> TimeSeries {
    let room = (SECONDS_PER_DAY - 1.0 - NIGHT_START - offset) / count.max(1) as f64;
    let cadence = cadence.min(room);
    let (camera, dec) = match field {
        FieldOfView::Jfov => ("041", 31.0),
        FieldOfView::Ffov => ("040", 30.0),
    };
    let samples = (0..count)
        .map(|i| {
            let t = NIGHT_START + offset + i as f64 * cadence;
            let ra = 150.0 + i as f64 * cadence * 15.0 / 3600.0;
            AngularSample::new(Degrees::new(ra), Degrees::new(dec), t, "img.fit", 171028)
                .expect("time within day")
        })
        .collect();
    TimeSeries::new(CameraId::parse(camera).expect("numeric id"), field, samples)
        .expect("ordered samples")
}

fn bench_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("matching");

    for &count in &[100usize, 1_000, 5_000] {
        let jfov = night(FieldOfView::Jfov, count, 15.0, 0.3);
        let ffov = night(FieldOfView::Ffov, count * 3 / 2, 10.0, 0.0);
        group.bench_with_input(BenchmarkId::new("find_matches", count), &count, |b, _| {
            b.iter(|| find_matches(black_box(&jfov), black_box(&ffov), 10.0))
        });
    }

    group.finish();
}

fn bench_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection");

    group.bench_function("rotate_to_frame", |b| {
        b.iter(|| {
            for i in 0..1000 {
                let lon = Radians::new(i as f64 * 1e-3);
                black_box(rotate_to_frame(
                    black_box(Radians::new(2.6)),
                    black_box(Radians::new(0.52)),
                    lon,
                    Radians::new(0.54),
                ));
            }
        });
    });

    let jfov = night(FieldOfView::Jfov, 1_000, 15.0, 0.3);
    let ffov = night(FieldOfView::Ffov, 1_500, 10.0, 0.0);
    let pairs = find_matches(&jfov, &ffov, 10.0).expect("non-empty FFoV");
    let reference = ReferenceAngles::default();
    group.bench_function("compute_and_aggregate", |b| {
        b.iter(|| {
            let results: Vec<_> = pairs
                .iter()
                .map(|pair| relative::compute(pair, &reference))
                .collect();
            black_box(compute_statistics(&results))
        });
    });

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let jfov = night(FieldOfView::Jfov, 2_000, 15.0, 0.3);
    let ffov = night(FieldOfView::Ffov, 3_000, 10.0, 0.0);
    let settings = MatchSettings::default();

    c.bench_function("pipeline_2000", |b| {
        b.iter(|| run(black_box(&jfov), black_box(&ffov), &settings))
    });
}

criterion_group!(benches, bench_matching, bench_projection, bench_pipeline);
criterion_main!(benches);
