use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use super::model::{Catalog, ScoringRecord};
use crate::config::Config;
use crate::error::{IapsError, Result};

// ---------------------------------------------------------------------------
// Wire format of the tech-report export
// ---------------------------------------------------------------------------

/// Preamble lines before the header-less data rows.
const PREAMBLE_LINES: usize = 7;

/// desc, IAPS id, valence mean/sd, arousal mean/sd, two dominance variants
/// mean/sd, picture set.
const COLUMNS: usize = 11;

/// Pictures that ship with an uppercase `.JPG` extension.
const UPPERCASE_JPG: &[&str] = &["6570", "6570.1", "6561", "6560"];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the scoring table named by `config` and resolve picture paths
/// against its image directory.
///
/// A missing or unreadable table is fatal; individual blank ratings (`.`)
/// are not.
pub fn load_scoring(config: &Config) -> Result<Catalog> {
    let text = fs::read_to_string(&config.scoring_path).map_err(|source| IapsError::Read {
        path: config.scoring_path.clone(),
        source,
    })?;
    let catalog = parse_scoring(&text, &config.images_dir)?;
    info!(
        "loaded {} scoring records from {}",
        catalog.len(),
        config.scoring_path.display()
    );
    Ok(catalog)
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

fn parse_scoring(text: &str, images_dir: &Path) -> Result<Catalog> {
    // Everything after the preamble is tab-separated rows.
    let body = text.splitn(PREAMBLE_LINES + 1, '\n').nth(PREAMBLE_LINES).unwrap_or("");

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(body.as_bytes());

    let mut records = Vec::new();
    for (i, row) in reader.records().enumerate() {
        let line = PREAMBLE_LINES + i + 1;
        let row = row?;
        if row.len() == 1 && row.get(0).map_or(true, |f| f.trim().is_empty()) {
            continue;
        }
        if row.len() < COLUMNS {
            return Err(IapsError::Malformed {
                line,
                message: format!("expected {COLUMNS} columns, found {}", row.len()),
            });
        }

        let image_id = normalize_image_id(row.get(1).unwrap_or("").trim());
        let path = image_path(images_dir, &image_id);
        records.push(ScoringRecord {
            description: row.get(0).unwrap_or("").trim().to_string(),
            image_id,
            valence_mean: parse_score(&row, 2, line)?,
            valence_sd: parse_score(&row, 3, line)?,
            arousal_mean: parse_score(&row, 4, line)?,
            arousal_sd: parse_score(&row, 5, line)?,
            dominance1_mean: parse_score(&row, 6, line)?,
            dominance1_sd: parse_score(&row, 7, line)?,
            dominance2_mean: parse_score(&row, 8, line)?,
            dominance2_sd: parse_score(&row, 9, line)?,
            picture_set: parse_set(row.get(10).unwrap_or(""), line)?,
            path,
        });
    }

    Ok(Catalog::from_records(records))
}

/// A rating cell. The tech report marks not-available as `.`.
fn parse_score(row: &csv::StringRecord, idx: usize, line: usize) -> Result<Option<f64>> {
    let field = row.get(idx).unwrap_or("").trim();
    if field.is_empty() || field == "." {
        return Ok(None);
    }
    field.parse::<f64>().map(Some).map_err(|_| IapsError::Malformed {
        line,
        message: format!("column {idx}: '{field}' is not a number"),
    })
}

/// The set column carries a trailing backslash (`20\`).
fn parse_set(field: &str, line: usize) -> Result<u32> {
    let trimmed = field.trim().trim_end_matches('\\');
    trimmed.parse::<u32>().map_err(|_| IapsError::Malformed {
        line,
        message: format!("picture set '{field}' is not an integer"),
    })
}

/// IDs are numeric: integral ones print without a decimal part ("6570"),
/// variants keep exactly one ("6570.1").
fn normalize_image_id(raw: &str) -> String {
    match raw.parse::<f64>() {
        Ok(v) if v.fract() == 0.0 => format!("{}", v as i64),
        Ok(v) => format!("{v:.1}"),
        Err(_) => raw.to_string(),
    }
}

fn image_path(images_dir: &Path, image_id: &str) -> PathBuf {
    let ext = if UPPERCASE_JPG.contains(&image_id) { "JPG" } else { "jpg" };
    images_dir.join(format!("{image_id}.{ext}"))
}
