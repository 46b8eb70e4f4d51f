use std::path::PathBuf;

/// Application error type.
///
/// Nothing here is fatal to the running app: configuration problems fall
/// back to defaults and missing images fall back to a placeholder. The
/// variants exist so the fallible plumbing (config I/O, manifest parsing,
/// image decoding) can propagate with `?` and be reported at the boundary.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Filesystem access failed (settings file, asset read)
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file could not be serialized
    #[error("settings serialization failed: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// The job manifest could not be parsed
    #[error("job manifest parse failed: {0}")]
    Manifest(#[from] serde_json::Error),

    /// An image file could not be decoded
    #[error("failed to decode image {path}: {source}")]
    ImageDecode {
        path: PathBuf,
        source: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
