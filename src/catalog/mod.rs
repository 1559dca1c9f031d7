/// Catalog layer: scoring records, loading, and affect filtering.
///
/// Architecture:
/// ```text
///  AllSubjects_1-20.txt
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse table → Catalog
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Catalog  │  Vec<ScoringRecord>, resolved picture paths
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  valence band predicate → matching indices
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
