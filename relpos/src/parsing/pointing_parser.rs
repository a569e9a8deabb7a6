use anyhow::{anyhow, Context, Result};
use std::path::Path;

/// One line of a pointing list: field center and the image it was solved from.
#[derive(Debug, Clone, PartialEq)]
pub struct PointingRecord {
    /// Right ascension in degrees
    pub ra: f64,
    /// Declination in degrees
    pub dec: f64,
    pub filename: String,
}

/// Parse a pointing list file
pub fn parse_pointing_file(path: &Path) -> Result<Vec<PointingRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read pointing file: {}", path.display()))?;

    parse_pointing_str(&content)
        .with_context(|| format!("Failed to parse pointing file: {}", path.display()))
}

/// Parse pointing list content.
///
/// Blank lines and lines starting with `#` are skipped. Fields beyond the
/// third are ignored.
pub fn parse_pointing_str(content: &str) -> Result<Vec<PointingRecord>> {
    let mut records = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line_no = index + 1;
        if let Some(record) =
            parse_pointing_line(line).with_context(|| format!("Line {}: {:?}", line_no, line))?
        {
            records.push(record);
        }
    }

    Ok(records)
}

/// Parse a single line; `Ok(None)` for blank and comment lines
pub fn parse_pointing_line(line: &str) -> Result<Option<PointingRecord>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let mut tokens = trimmed.split_whitespace();
    let ra = parse_angle(tokens.next(), "right ascension")?;
    let dec = parse_angle(tokens.next(), "declination")?;
    let filename = tokens
        .next()
        .ok_or_else(|| anyhow!("Missing FITS filename"))?
        .to_string();

    if !(-90.0..=90.0).contains(&dec) {
        return Err(anyhow!("Declination out of range: {}", dec));
    }

    Ok(Some(PointingRecord { ra, dec, filename }))
}

fn parse_angle(token: Option<&str>, what: &str) -> Result<f64> {
    let token = token.ok_or_else(|| anyhow!("Missing {}", what))?;
    let value: f64 = token
        .parse()
        .with_context(|| format!("Invalid {}: {:?}", what, token))?;
    if !value.is_finite() {
        return Err(anyhow!("Non-finite {}: {}", what, token));
    }
    Ok(value)
}
