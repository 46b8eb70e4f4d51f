/// Application state modules
///
/// - `data`: the static job entries shown on the page
/// - `theme`: the persisted dark/light flag and named color theme
/// - `viewer`: the image selection / expansion / fullscreen state machine

pub mod data;
pub mod theme;
pub mod viewer;
