/// State management module
///
/// The non-UI half of the gallery. Everything here is either a pure
/// function or a small session-scoped state object, so the UI can re-run
/// the whole evaluation pass on every interaction:
/// - image discovery under a folder (discovery.rs)
/// - the single-entry scan cache (cache.rs)
/// - explicit path validation (filter.rs)
/// - pagination arithmetic (pages.rs)
/// - round-robin column assignment (layout.rs)
/// - persisted control values (settings.rs)

pub mod cache;
pub mod discovery;
pub mod filter;
pub mod layout;
pub mod pages;
pub mod settings;
