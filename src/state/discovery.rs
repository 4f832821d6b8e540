use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Image file extensions the gallery recognizes.
///
/// Matching is case-sensitive: a file named `photo.JPG` is not picked up
/// unless its extension is added here explicitly. The order of this array
/// is the display order — all `jpg` files come first, then `jpeg`, then
/// `png` — so it also determines how images fall onto pages.
pub const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Enumerate the image files under `folder`.
///
/// With `recursive` set, the whole tree below `folder` is searched;
/// otherwise only its direct children. Results are grouped by extension
/// in the order of `IMAGE_EXTENSIONS`, and name-sorted within each group,
/// so the same folder always produces the same sequence.
///
/// A folder that does not exist or cannot be read simply yields an empty
/// list — the caller reports "no images found", it is not an error here.
pub fn find_images(folder: &Path, recursive: bool) -> Vec<PathBuf> {
    let max_depth = if recursive { usize::MAX } else { 1 };

    // One bucket per allowed extension, concatenated at the end.
    // This keeps the per-extension display order while walking only once.
    let mut buckets: Vec<Vec<PathBuf>> = vec![Vec::new(); IMAGE_EXTENSIONS.len()];

    for entry in WalkDir::new(folder)
        .max_depth(max_depth)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        // Only process files (not directories)
        if !path.is_file() {
            continue;
        }

        let Some(extension) = path.extension() else {
            continue;
        };

        if let Some(slot) = IMAGE_EXTENSIONS.iter().position(|e| extension == *e) {
            buckets[slot].push(path.to_path_buf());
        }
    }

    buckets.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"fake image data").expect("failed to create test file");
        path
    }

    #[test]
    fn test_only_allowed_extensions_are_found() {
        let dir = tempdir().expect("failed to create temp dir");
        touch(dir.path(), "a.jpg");
        touch(dir.path(), "b.png");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "c.gif");
        touch(dir.path(), "no_extension");

        let found = find_images(dir.path(), false);
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|p| {
            let ext = p.extension().unwrap();
            ext == "jpg" || ext == "png"
        }));
    }

    #[test]
    fn test_results_are_grouped_by_extension_order() {
        let dir = tempdir().expect("failed to create temp dir");
        // Created out of extension order on purpose
        touch(dir.path(), "a.png");
        touch(dir.path(), "b.jpeg");
        touch(dir.path(), "c.jpg");
        touch(dir.path(), "d.jpg");

        let found = find_images(dir.path(), false);
        let exts: Vec<_> = found
            .iter()
            .map(|p| p.extension().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(exts, ["jpg", "jpg", "jpeg", "png"]);
        // Name-sorted within one extension group
        assert!(found[0].ends_with("c.jpg"));
        assert!(found[1].ends_with("d.jpg"));
    }

    #[test]
    fn test_extension_match_is_case_sensitive() {
        let dir = tempdir().expect("failed to create temp dir");
        touch(dir.path(), "upper.JPG");
        touch(dir.path(), "lower.jpg");

        let found = find_images(dir.path(), false);
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("lower.jpg"));
    }

    #[test]
    fn test_non_recursive_skips_nested_folders() {
        let dir = tempdir().expect("failed to create temp dir");
        touch(dir.path(), "top.jpg");
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).expect("failed to create nested dir");
        touch(&nested, "deep.jpg");

        let found = find_images(dir.path(), false);
        assert_eq!(found.len(), 1);
        assert!(found[0].ends_with("top.jpg"));
    }

    #[test]
    fn test_recursive_is_superset_of_non_recursive() {
        let dir = tempdir().expect("failed to create temp dir");
        touch(dir.path(), "top.jpg");
        touch(dir.path(), "other.png");
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).expect("failed to create nested dir");
        touch(&nested, "deep.jpg");
        touch(&nested, "deeper.png");

        let flat = find_images(dir.path(), false);
        let deep = find_images(dir.path(), true);

        assert_eq!(flat.len(), 2);
        assert_eq!(deep.len(), 4);
        for p in &flat {
            assert!(deep.contains(p));
        }
    }

    #[test]
    fn test_missing_folder_yields_empty_result() {
        let found = find_images(Path::new("/nonexistent/gallery/folder"), true);
        assert!(found.is_empty());
    }
}
