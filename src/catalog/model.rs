use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ScoringRecord – one row of the normative-score table
// ---------------------------------------------------------------------------

/// One picture's normative ratings.
///
/// Means and standard deviations are on the 1–9 SAM scale; `None` marks a
/// rating the tech report leaves blank (`.` in the table).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringRecord {
    /// Short picture description ("Puppies", "Zipper").
    pub description: String,
    /// Normalized picture identifier ("2050", "6570.1").
    pub image_id: String,
    pub valence_mean: Option<f64>,
    pub valence_sd: Option<f64>,
    pub arousal_mean: Option<f64>,
    pub arousal_sd: Option<f64>,
    /// The table carries two dominance scoring variants.
    pub dominance1_mean: Option<f64>,
    pub dominance1_sd: Option<f64>,
    pub dominance2_mean: Option<f64>,
    pub dominance2_sd: Option<f64>,
    /// Picture set (1–20) the image was normed in.
    pub picture_set: u32,
    /// Resolved picture file below the configured image directory. Existence
    /// on disk is not checked.
    pub path: PathBuf,
}

// ---------------------------------------------------------------------------
// Catalog – the complete loaded table
// ---------------------------------------------------------------------------

/// The loaded scoring table. Immutable after load.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<ScoringRecord>,
}

impl Catalog {
    pub fn from_records(records: Vec<ScoringRecord>) -> Self {
        Catalog { records }
    }

    /// All records, in table order.
    pub fn records(&self) -> &[ScoringRecord] {
        &self.records
    }

    /// Number of pictures in the table.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
