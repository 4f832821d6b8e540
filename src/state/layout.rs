use std::path::PathBuf;

/// Assign each page image to a display column, round-robin.
///
/// The image at page position `i` lands in column `i % nb_columns`, so
/// images flow left to right, row by row. Pure function; the UI builds
/// its column widgets straight from this.
///
/// `nb_columns` must be at least 1 (the UI slider enforces it).
pub fn assign_columns(images: &[PathBuf], nb_columns: usize) -> Vec<(usize, &PathBuf)> {
    images
        .iter()
        .enumerate()
        .map(|(i, path)| (i % nb_columns, path))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_paths(n: usize) -> Vec<PathBuf> {
        (0..n).map(|i| PathBuf::from(format!("/g/{i}.jpg"))).collect()
    }

    #[test]
    fn test_seven_images_on_three_columns() {
        let paths = fake_paths(7);
        let cols: Vec<usize> = assign_columns(&paths, 3).iter().map(|(c, _)| *c).collect();
        assert_eq!(cols, [0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn test_single_column_takes_everything() {
        let paths = fake_paths(4);
        let assignments = assign_columns(&paths, 1);
        assert!(assignments.iter().all(|(c, _)| *c == 0));
        assert_eq!(assignments.len(), 4);
    }

    #[test]
    fn test_image_order_is_preserved() {
        let paths = fake_paths(5);
        let ordered: Vec<&PathBuf> = assign_columns(&paths, 2).iter().map(|(_, p)| *p).collect();
        let expected: Vec<&PathBuf> = paths.iter().collect();
        assert_eq!(ordered, expected);
    }

    #[test]
    fn test_no_images_means_no_assignments() {
        assert!(assign_columns(&[], 3).is_empty());
    }
}
