use std::path::{Path, PathBuf};
use thiserror::Error;

use super::discovery::IMAGE_EXTENSIONS;

/// Why an explicitly listed path was not accepted into the gallery.
///
/// These are per-path diagnostics, not failures: the remaining paths are
/// still processed and the rejects are shown to the user with the reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("does not exist, please remove it from the list")]
    DoesNotExist,
    #[error("is a folder, please remove it from the list")]
    IsAFolder,
    #[error("is not a supported image type (jpg, jpeg, png)")]
    UnsupportedExtension,
}

/// A path the filter refused, paired with the reason for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedPath {
    pub path: PathBuf,
    pub reason: RejectReason,
}

/// Split the raw text block into one candidate path per non-blank line.
pub fn parse_path_input(text: &str) -> Vec<PathBuf> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| PathBuf::from(line.trim()))
        .collect()
}

/// Classify explicit paths into displayable images and rejects.
///
/// A path is accepted iff it exists, is not a directory, and carries one
/// of the allowed image extensions (case-sensitive). Both output lists
/// keep the input order. Only read-only stat calls are made; a missing
/// file is a classification outcome, never an error.
pub fn classify_paths(paths: &[PathBuf]) -> (Vec<PathBuf>, Vec<RejectedPath>) {
    let mut valid = Vec::new();
    let mut rejected = Vec::new();

    for path in paths {
        match check_path(path) {
            None => valid.push(path.clone()),
            Some(reason) => rejected.push(RejectedPath {
                path: path.clone(),
                reason,
            }),
        }
    }

    (valid, rejected)
}

fn check_path(path: &Path) -> Option<RejectReason> {
    if !path.exists() {
        return Some(RejectReason::DoesNotExist);
    }
    if path.is_dir() {
        return Some(RejectReason::IsAFolder);
    }

    let allowed = path
        .extension()
        .is_some_and(|ext| IMAGE_EXTENSIONS.iter().any(|e| ext == *e));
    if !allowed {
        return Some(RejectReason::UnsupportedExtension);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_parse_input_drops_blank_lines() {
        let parsed = parse_path_input("/a/x.png\n\n   \n/b/y.jpg\n");
        assert_eq!(
            parsed,
            vec![PathBuf::from("/a/x.png"), PathBuf::from("/b/y.jpg")]
        );
    }

    #[test]
    fn test_parse_input_of_empty_text_is_empty() {
        assert!(parse_path_input("").is_empty());
        assert!(parse_path_input("   \n  ").is_empty());
    }

    #[test]
    fn test_classification_keeps_input_order() {
        let dir = tempdir().expect("failed to create temp dir");
        let existing = dir.path().join("x.png");
        fs::write(&existing, b"fake image data").expect("failed to create test file");
        let missing = dir.path().join("missing.png");
        let folder = dir.path().join("sub");
        fs::create_dir(&folder).expect("failed to create sub dir");

        let input = vec![existing.clone(), missing.clone(), folder.clone()];
        let (valid, rejected) = classify_paths(&input);

        assert_eq!(valid, vec![existing]);
        assert_eq!(rejected.len(), 2);
        assert_eq!(rejected[0].path, missing);
        assert_eq!(rejected[0].reason, RejectReason::DoesNotExist);
        assert_eq!(rejected[1].path, folder);
        assert_eq!(rejected[1].reason, RejectReason::IsAFolder);
    }

    #[test]
    fn test_existing_file_with_wrong_extension_is_rejected() {
        let dir = tempdir().expect("failed to create temp dir");
        let text_file = dir.path().join("notes.txt");
        fs::write(&text_file, b"not an image").expect("failed to create test file");

        let (valid, rejected) = classify_paths(&[text_file.clone()]);

        assert!(valid.is_empty());
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].reason, RejectReason::UnsupportedExtension);
    }

    #[test]
    fn test_reject_reasons_read_like_messages() {
        assert_eq!(
            RejectReason::IsAFolder.to_string(),
            "is a folder, please remove it from the list"
        );
        assert_eq!(
            RejectReason::DoesNotExist.to_string(),
            "does not exist, please remove it from the list"
        );
    }
}
