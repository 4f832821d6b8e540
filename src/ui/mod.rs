/// UI widget helpers
///
/// Free functions that turn state into iced elements:
/// - the paginated image grid (grid.rs)

pub mod grid;
