/// Widget modules
///
/// - `header`: wordmark, dark/light toggle, color-theme swatches
/// - `job`: one work-history section with its thumbnail strip
/// - `viewer`: the inline expanded image and the fullscreen overlay
/// - `effects`: the decorative canvas backdrop (cosmetic only)

pub mod effects;
pub mod header;
pub mod job;
pub mod viewer;
