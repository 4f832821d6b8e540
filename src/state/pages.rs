use std::path::PathBuf;

/// Number of pages needed for `total` images at `max_per_page` each.
///
/// This is deliberately `total / max_per_page + 1`: an empty gallery
/// still has one (empty) page, and an exact multiple gets a trailing
/// empty page — 24 images at 12 per page select among 3 pages. The page
/// selector always has at least one entry this way.
///
/// `max_per_page` must be at least 1 (the UI slider enforces it).
pub fn page_count(total: usize, max_per_page: usize) -> usize {
    total / max_per_page + 1
}

/// The slice of `paths` shown on page `page_index` (0-based).
///
/// Out-of-range page indexes yield an empty slice instead of panicking;
/// the last page may be shorter than `max_per_page`.
pub fn paginate(paths: &[PathBuf], max_per_page: usize, page_index: usize) -> &[PathBuf] {
    let from = page_index.saturating_mul(max_per_page).min(paths.len());
    let to = from.saturating_add(max_per_page).min(paths.len());
    &paths[from..to]
}
