use std::path::{Path, PathBuf};

/// Identifies one discovery request: which folder, and whether the walk
/// descends into subfolders. Two keys are equal iff both fields are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryKey {
    pub folder: PathBuf,
    pub recursive: bool,
}

/// Memoizes the most recent folder scan.
///
/// The UI re-runs the whole evaluation pass on every widget event, so
/// without this a page change would re-walk the entire folder tree. The
/// cache holds exactly one entry (one active folder per session); a
/// request with a different key replaces it. There is no freshness check
/// against the filesystem — changing the folder or the recursive flag is
/// the only thing that invalidates it.
#[derive(Debug, Default)]
pub struct DiscoveryCache {
    last_key: Option<DiscoveryKey>,
    last_result: Vec<PathBuf>,
}

impl DiscoveryCache {
    /// Create an empty cache (first request always scans).
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached scan result for `(folder, recursive)`, running
    /// `discover` only when the key changed.
    ///
    /// Quirk kept from the original behavior: an empty cached result
    /// counts as a miss, so a genuinely empty folder is re-scanned on
    /// every interaction. Caching emptiness by key presence alone would
    /// fix that, but the wasteful re-scan is what ships.
    pub fn get_or_discover<F>(&mut self, folder: &Path, recursive: bool, discover: F) -> &[PathBuf]
    where
        F: FnOnce(&Path, bool) -> Vec<PathBuf>,
    {
        let key = DiscoveryKey {
            folder: folder.to_path_buf(),
            recursive,
        };

        let hit = self.last_key.as_ref() == Some(&key) && !self.last_result.is_empty();
        if !hit {
            self.last_result = discover(folder, recursive);
            self.last_key = Some(key);
        }

        &self.last_result
    }
}
