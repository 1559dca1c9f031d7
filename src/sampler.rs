use std::path::PathBuf;
use std::sync::OnceLock;

use rand::prelude::*;

use crate::catalog::filter::{matching_indices, AffectCategory, Selection, ValenceBand};
use crate::catalog::loader::load_scoring;
use crate::catalog::model::Catalog;
use crate::config::Config;
use crate::error::{IapsError, Result};

// ---------------------------------------------------------------------------
// Core draw
// ---------------------------------------------------------------------------

/// Draw `n` distinct picture paths matching `selection`, uniformly at random
/// and without replacement. Order is not specified.
///
/// All-or-nothing: if fewer than `n` pictures match, the call fails with
/// `InsufficientData` instead of returning a short set.
pub fn sample_paths<R: Rng + ?Sized>(
    catalog: &Catalog,
    selection: &Selection,
    n: usize,
    rng: &mut R,
) -> Result<Vec<PathBuf>> {
    selection.validate()?;
    let matching = matching_indices(catalog, selection);
    if matching.len() < n {
        return Err(IapsError::InsufficientData {
            requested: n,
            available: matching.len(),
        });
    }
    let records = catalog.records();
    Ok(matching
        .choose_multiple(rng, n)
        .map(|&i| records[i].path.clone())
        .collect())
}

// ---------------------------------------------------------------------------
// Shared process-wide catalog
// ---------------------------------------------------------------------------

static SHARED: OnceLock<Catalog> = OnceLock::new();

/// Install the shared catalog from an explicit config.
///
/// Load-or-reuse: whoever gets there first wins, later calls return the
/// already-installed table. After installation all access is read-only, so
/// concurrent callers need no locking.
pub fn init_shared(config: &Config) -> Result<&'static Catalog> {
    if let Some(catalog) = SHARED.get() {
        return Ok(catalog);
    }
    let loaded = load_scoring(config)?;
    Ok(SHARED.get_or_init(|| loaded))
}

/// The shared catalog, loading from `Config::default()` on first use.
pub fn shared_catalog() -> Result<&'static Catalog> {
    init_shared(&Config::default())
}

// ---------------------------------------------------------------------------
// Module-level convenience
// ---------------------------------------------------------------------------

/// Sample `n` pictures by category label ("positive", "negative", "neutral")
/// from the shared catalog.
pub fn sample_images(category: &str, n: usize) -> Result<Vec<PathBuf>> {
    let selection: Selection = category.parse()?;
    sample_paths(shared_catalog()?, &selection, n, &mut rand::rng())
}

/// Sample `n` pictures whose valence mean lies in `[min, max]`.
pub fn sample_valence_range(min: f64, max: f64, n: usize) -> Result<Vec<PathBuf>> {
    let selection = Selection::Valence(ValenceBand::new(min, max)?);
    sample_paths(shared_catalog()?, &selection, n, &mut rand::rng())
}

pub fn sample_positive_images(n: usize) -> Result<Vec<PathBuf>> {
    sample_paths(
        shared_catalog()?,
        &AffectCategory::Positive.into(),
        n,
        &mut rand::rng(),
    )
}

pub fn sample_negative_images(n: usize) -> Result<Vec<PathBuf>> {
    sample_paths(
        shared_catalog()?,
        &AffectCategory::Negative.into(),
        n,
        &mut rand::rng(),
    )
}

pub fn sample_neutral_images(n: usize) -> Result<Vec<PathBuf>> {
    sample_paths(
        shared_catalog()?,
        &AffectCategory::Neutral.into(),
        n,
        &mut rand::rng(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::model::ScoringRecord;
    use std::collections::HashSet;
    use std::path::Path;

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

    /// Five positive pictures, three negative, one unrated.
    fn fixture() -> Catalog {
        Catalog::from_records(vec![
            record("p1", Some(7.2)),
            record("p2", Some(8.1)),
            record("p3", Some(7.9)),
            record("p4", Some(7.0)),
            record("p5", Some(8.3)),
            record("n1", Some(1.8)),
            record("n2", Some(2.5)),
            record("n3", Some(3.0)),
            record("u1", None),
        ])
    }

    #[test]
    fn draws_exactly_n_distinct_matching_paths() {
        let catalog = fixture();
        let mut rng = StdRng::seed_from_u64(42);
        let positive: HashSet<PathBuf> = ["p1", "p2", "p3", "p4", "p5"]
            .iter()
            .map(|id| PathBuf::from(format!("/data/images/{id}.jpg")))
            .collect();

        for _ in 0..20 {
            let drawn =
                sample_paths(&catalog, &AffectCategory::Positive.into(), 3, &mut rng).unwrap();
            assert_eq!(drawn.len(), 3);
            let unique: HashSet<&PathBuf> = drawn.iter().collect();
            assert_eq!(unique.len(), 3);
            assert!(drawn.iter().all(|p| positive.contains(p)));
        }
    }

    #[test]
    fn zero_is_a_valid_count() {
        let catalog = fixture();
        let mut rng = StdRng::seed_from_u64(42);
        let drawn = sample_paths(&catalog, &AffectCategory::Negative.into(), 0, &mut rng).unwrap();
        assert!(drawn.is_empty());
    }

    #[test]
    fn requesting_more_than_available_fails() {
        let catalog = fixture();
        let mut rng = StdRng::seed_from_u64(42);
        let err =
            sample_paths(&catalog, &AffectCategory::Positive.into(), 10, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            IapsError::InsufficientData { requested: 10, available: 5 }
        ));
    }

    #[test]
    fn invalid_band_fails_before_counting() {
        let catalog = fixture();
        let mut rng = StdRng::seed_from_u64(42);
        let selection = Selection::Valence(ValenceBand { min: 8.0, max: 2.0 });
        let err = sample_paths(&catalog, &selection, 0, &mut rng).unwrap_err();
        assert!(matches!(err, IapsError::InvalidRange { .. }));
    }

    #[test]
    fn explicit_band_draws_from_that_band_only() {
        let catalog = fixture();
        let mut rng = StdRng::seed_from_u64(7);
        let selection = Selection::Valence(ValenceBand::new(1.0, 3.0).unwrap());
        let drawn = sample_paths(&catalog, &selection, 3, &mut rng).unwrap();
        assert_eq!(drawn.len(), 3);
        assert!(drawn
            .iter()
            .all(|p| p.starts_with(Path::new("/data/images")) && p.to_string_lossy().contains("/n")));
    }

    // The only test touching the process-wide catalog, so the OnceLock state
    // stays predictable under the parallel test runner.
    #[test]
    fn shared_catalog_installs_once_and_reuses() {
        use std::io::Write;

        let dir = tempfile::TempDir::new().expect("tempdir");
        let scoring_path = dir.path().join("AllSubjects_1-20.txt");
        let mut file = std::fs::File::create(&scoring_path).expect("create");
        write!(
            file,
            "1\n2\n3\n4\n5\n6\n7\n\
             Puppies\t1710\t8.34\t1.12\t5.41\t2.34\t6.49\t2.10\t.\t.\t1\\\n\
             Snake\t1050\t3.46\t2.15\t6.87\t1.68\t3.70\t2.06\t.\t.\t1\\\n"
        )
        .expect("write");

        let config = Config {
            scoring_path,
            images_dir: dir.path().join("images"),
        };
        let first = init_shared(&config).unwrap();
        assert_eq!(first.len(), 2);

        // Later inits reuse the installed table, unreadable config or not.
        let stale = Config {
            scoring_path: PathBuf::from("/nonexistent/AllSubjects_1-20.txt"),
            images_dir: PathBuf::from("/nonexistent/images"),
        };
        let second = init_shared(&stale).unwrap();
        assert!(std::ptr::eq(first, second));

        // The module-level entry points draw from the same table.
        let drawn = sample_images("positive", 1).unwrap();
        assert_eq!(drawn, vec![dir.path().join("images").join("1710.jpg")]);
        assert!(matches!(
            sample_images("happy", 1),
            Err(IapsError::UnknownCategory(_))
        ));
        assert!(matches!(
            sample_negative_images(5),
            Err(IapsError::InsufficientData { requested: 5, available: 0 })
        ));
    }

    #[test]
    fn seeded_draws_are_reproducible() {
        let catalog = fixture();
        let a = sample_paths(
            &catalog,
            &AffectCategory::Positive.into(),
            4,
            &mut StdRng::seed_from_u64(99),
        )
        .unwrap();
        let b = sample_paths(
            &catalog,
            &AffectCategory::Positive.into(),
            4,
            &mut StdRng::seed_from_u64(99),
        )
        .unwrap();
        assert_eq!(a, b);
    }
}
