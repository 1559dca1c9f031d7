use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, IapsError>;

/// Everything that can go wrong loading the scoring table or drawing a sample.
#[derive(Debug, Error)]
pub enum IapsError {
    /// The requested label is not part of the affect taxonomy.
    #[error("unknown affect category '{0}' (expected positive, negative or neutral)")]
    UnknownCategory(String),

    /// A valence range with a non-finite bound or min above max.
    #[error("invalid valence range {min}..{max}")]
    InvalidRange { min: f64, max: f64 },

    /// Fewer matching pictures exist than were requested. All-or-nothing:
    /// no partial set is returned.
    #[error("requested {requested} images but only {available} match the filter")]
    InsufficientData { requested: usize, available: usize },

    /// The scoring table could not be read from disk.
    #[error("reading scoring table {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parsing scoring table: {0}")]
    Csv(#[from] csv::Error),

    /// A row that does not follow the tech-report layout.
    #[error("scoring table line {line}: {message}")]
    Malformed { line: usize, message: String },
}
