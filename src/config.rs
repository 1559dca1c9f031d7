use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Dataset locations
// ---------------------------------------------------------------------------

/// Where the locally installed IAPS distribution lives.
///
/// The 2008 distribution unpacks into a single root with the normative
/// scores under `IAPS Tech Report/` and the pictures under
/// `IAPS 1-20 Images/`. Both paths can also be set independently for
/// non-standard layouts.
#[derive(Debug, Clone)]
pub struct Config {
    /// Tab-separated normative scores (`AllSubjects_1-20.txt`).
    pub scoring_path: PathBuf,
    /// Directory holding the `.jpg` pictures.
    pub images_dir: PathBuf,
}

impl Config {
    /// Standard layout below an unpacked dataset root.
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            scoring_path: root.join("IAPS Tech Report").join("AllSubjects_1-20.txt"),
            images_dir: root.join("IAPS 1-20 Images"),
        }
    }
}

impl Default for Config {
    /// `~/data/IAPS 2008 1-20`.
    fn default() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::from_root(home.join("data").join("IAPS 2008 1-20"))
    }
}
