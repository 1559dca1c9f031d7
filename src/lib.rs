//! Stimulus sampling for the International Affective Picture System (IAPS).
//!
//! IAPS is a licensed research dataset of pictures, each with normative
//! affect ratings (valence, arousal, dominance). This crate reads the
//! normative-scores table of a locally installed copy and draws random
//! picture paths by affect category, for stimulus selection in experiments.
//! It returns paths only; decoding and display are left to whatever image
//! library the caller already uses.
//!
//! ```no_run
//! let paths = iaps_sampler::sample_positive_images(10)?;
//! // hand `paths` to your image library of choice
//! # Ok::<(), iaps_sampler::IapsError>(())
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod sampler;

pub use catalog::filter::{AffectCategory, Selection, ValenceBand};
pub use catalog::loader::load_scoring;
pub use catalog::model::{Catalog, ScoringRecord};
pub use config::Config;
pub use error::{IapsError, Result};
pub use sampler::{
    init_shared, sample_images, sample_negative_images, sample_neutral_images, sample_paths,
    sample_positive_images, sample_valence_range, shared_catalog,
};
