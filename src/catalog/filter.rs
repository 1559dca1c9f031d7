use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::model::{Catalog, ScoringRecord};
use crate::error::{IapsError, Result};

// ---------------------------------------------------------------------------
// Affect taxonomy over the valence mean
// ---------------------------------------------------------------------------

/// SAM ratings run 1 (most negative) to 9 (most positive).
pub const SCALE_MIN: f64 = 1.0;
pub const SCALE_MAX: f64 = 9.0;

/// Valence cut-offs for the coarse affect buckets.
pub const POSITIVE_MIN: f64 = 7.0;
pub const NEGATIVE_MAX: f64 = 3.0;
pub const NEUTRAL_MIN: f64 = 4.0;
pub const NEUTRAL_MAX: f64 = 6.0;

/// Coarse affect label derived from a picture's valence mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AffectCategory {
    Positive,
    Negative,
    Neutral,
}

impl AffectCategory {
    /// The valence interval that defines this bucket.
    pub fn band(self) -> ValenceBand {
        match self {
            AffectCategory::Positive => ValenceBand { min: POSITIVE_MIN, max: SCALE_MAX },
            AffectCategory::Negative => ValenceBand { min: SCALE_MIN, max: NEGATIVE_MAX },
            AffectCategory::Neutral => ValenceBand { min: NEUTRAL_MIN, max: NEUTRAL_MAX },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AffectCategory::Positive => "positive",
            AffectCategory::Negative => "negative",
            AffectCategory::Neutral => "neutral",
        }
    }
}

impl fmt::Display for AffectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AffectCategory {
    type Err = IapsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(AffectCategory::Positive),
            "negative" => Ok(AffectCategory::Negative),
            "neutral" => Ok(AffectCategory::Neutral),
            _ => Err(IapsError::UnknownCategory(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// ValenceBand – inclusive interval on the valence mean
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValenceBand {
    pub min: f64,
    pub max: f64,
}

impl ValenceBand {
    pub fn new(min: f64, max: f64) -> Result<Self> {
        let band = ValenceBand { min, max };
        band.validate()?;
        Ok(band)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(IapsError::InvalidRange { min: self.min, max: self.max });
        }
        Ok(())
    }

    /// Inclusive at both ends.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

// ---------------------------------------------------------------------------
// Selection – what to sample
// ---------------------------------------------------------------------------

/// A named affect bucket or an explicit valence band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selection {
    Category(AffectCategory),
    Valence(ValenceBand),
}

impl Selection {
    pub(crate) fn validate(&self) -> Result<()> {
        match self {
            Selection::Category(_) => Ok(()),
            Selection::Valence(band) => band.validate(),
        }
    }

    fn band(&self) -> ValenceBand {
        match self {
            Selection::Category(category) => category.band(),
            Selection::Valence(band) => *band,
        }
    }

    /// Whether a record falls in the selection's band. Pictures without a
    /// valence rating never match.
    pub fn matches(&self, record: &ScoringRecord) -> bool {
        match record.valence_mean {
            Some(valence) => self.band().contains(valence),
            None => false,
        }
    }
}

impl From<AffectCategory> for Selection {
    fn from(category: AffectCategory) -> Self {
        Selection::Category(category)
    }
}

impl FromStr for Selection {
    type Err = IapsError;

    fn from_str(s: &str) -> Result<Self> {
        s.parse::<AffectCategory>().map(Selection::Category)
    }
}

/// Indices of records matching the selection, in table order.
pub fn matching_indices(catalog: &Catalog, selection: &Selection) -> Vec<usize> {
    catalog
        .records()
        .iter()
        .enumerate()
        .filter(|(_, record)| selection.matches(record))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn record(id: &str, valence: Option<f64>) -> ScoringRecord {
        ScoringRecord {
            description: format!("Stim {id}"),
            image_id: id.to_string(),
            valence_mean: valence,
            valence_sd: Some(1.0),
            arousal_mean: Some(5.0),
            arousal_sd: Some(2.0),
            dominance1_mean: None,
            dominance1_sd: None,
            dominance2_mean: None,
            dominance2_sd: None,
            picture_set: 1,
            path: PathBuf::from(format!("/data/images/{id}.jpg")),
        }
    }

    #[test]
    fn labels_parse_case_insensitively() {
        assert_eq!("positive".parse::<AffectCategory>().unwrap(), AffectCategory::Positive);
        assert_eq!("Negative".parse::<AffectCategory>().unwrap(), AffectCategory::Negative);
        assert_eq!(" NEUTRAL ".parse::<AffectCategory>().unwrap(), AffectCategory::Neutral);
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = "happy".parse::<AffectCategory>().unwrap_err();
        assert!(matches!(err, IapsError::UnknownCategory(label) if label == "happy"));
    }

    #[test]
    fn category_bands_match_the_cutoffs() {
        assert!(AffectCategory::Positive.band().contains(7.0));
        assert!(!AffectCategory::Positive.band().contains(6.99));
        assert!(AffectCategory::Negative.band().contains(3.0));
        assert!(!AffectCategory::Negative.band().contains(3.01));
        assert!(AffectCategory::Neutral.band().contains(5.0));
        assert!(!AffectCategory::Neutral.band().contains(6.5));
    }

    #[test]
    fn degenerate_bands_are_invalid() {
        assert!(ValenceBand::new(6.0, 4.0).is_err());
        assert!(ValenceBand::new(f64::NAN, 5.0).is_err());
        assert!(ValenceBand::new(2.0, 2.0).is_ok());
    }

    #[test]
    fn unrated_pictures_never_match() {
        let catalog = Catalog::from_records(vec![
            record("1000", Some(7.5)),
            record("1001", None),
            record("1002", Some(2.1)),
        ]);
        let positive = matching_indices(&catalog, &AffectCategory::Positive.into());
        assert_eq!(positive, vec![0]);
        let everything = matching_indices(
            &catalog,
            &Selection::Valence(ValenceBand::new(SCALE_MIN, SCALE_MAX).unwrap()),
        );
        assert_eq!(everything, vec![0, 2]);
    }
}
