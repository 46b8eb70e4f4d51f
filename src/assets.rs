/// Static asset loading
///
/// Job images and icons are plain files under an `assets/` directory next
/// to the working directory. Loading is asynchronous (spawned as tasks at
/// startup) and infallible from the UI's point of view: any missing or
/// undecodable file yields a generated gray placeholder, never an error.

use crate::error::Error;
use crate::state::data::Manifest;
use iced::widget::image::Handle;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use walkdir::WalkDir;

/// Image file extensions the asset scan recognizes.
const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "webp", "gif", "bmp"];

/// Placeholder panel dimensions (square, like the thumbnail slots).
const PLACEHOLDER_SIZE: u32 = 256;

/// Root directory for manifest-relative asset paths.
pub fn assets_root() -> PathBuf {
    PathBuf::from("assets")
}

/// Resolve a manifest-relative path against the assets root.
pub fn resolve(relative: &str) -> PathBuf {
    assets_root().join(relative)
}

/// Whether a path looks like an image file, by extension.
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Load an image file into a pixel handle, or the placeholder if the file
/// is missing or will not decode. Runs on the background runtime via
/// `Task::perform`.
pub async fn load_or_placeholder(path: PathBuf) -> Handle {
    match load_image(path).await {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("⚠️  {e}");
            placeholder()
        }
    }
}

async fn load_image(path: PathBuf) -> Result<Handle, Error> {
    let bytes = tokio::fs::read(&path).await?;
    let decoded = image::load_from_memory(&bytes)
        .map_err(|source| Error::ImageDecode {
            path: path.clone(),
            source,
        })?
        .to_rgba8();

    let (width, height) = decoded.dimensions();
    Ok(Handle::from_rgba(width, height, decoded.into_raw()))
}

/// The shared placeholder handle: a dark gray panel with a lighter border,
/// generated once.
pub fn placeholder() -> Handle {
    static PLACEHOLDER: OnceLock<Handle> = OnceLock::new();
    PLACEHOLDER
        .get_or_init(|| {
            let size = PLACEHOLDER_SIZE;
            let mut pixels = image::RgbaImage::new(size, size);
            for (x, y, pixel) in pixels.enumerate_pixels_mut() {
                let edge = x < 4 || y < 4 || x >= size - 4 || y >= size - 4;
                *pixel = if edge {
                    image::Rgba([90, 90, 94, 255])
                } else {
                    image::Rgba([52, 52, 56, 255])
                };
            }
            Handle::from_rgba(size, size, pixels.into_raw())
        })
        .clone()
}

/// Count the image files present under the assets root.
pub fn scan(root: &Path) -> usize {
    WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file() && is_image_file(e.path()))
        .count()
}

/// Check every image reference in the manifest against the filesystem and
/// report how many are unresolved. Missing files still render (as
/// placeholders); the count is only logged so packaging mistakes surface
/// in the console.
pub fn verify_manifest(manifest: &Manifest, root: &Path) -> usize {
    let mut missing = 0;
    for job in &manifest.jobs {
        let refs = job
            .images
            .iter()
            .chain(job.icon.as_ref());
        for reference in refs {
            if !root.join(reference).exists() {
                missing += 1;
            }
        }
    }
    if missing > 0 {
        eprintln!("⚠️  {missing} manifest image(s) missing under {}", root.display());
    }
    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_extension_filter() {
        assert!(is_image_file(Path::new("a/b.png")));
        assert!(is_image_file(Path::new("photo.JPEG")));
        assert!(!is_image_file(Path::new("notes.txt")));
        assert!(!is_image_file(Path::new("no_extension")));
    }

    #[test]
    fn test_resolve_joins_under_assets_root() {
        let path = resolve("pltr/deploy.png");
        assert!(path.starts_with(assets_root()));
        assert!(path.ends_with("pltr/deploy.png"));
    }

    #[test]
    fn test_scan_counts_only_images() {
        let dir = tempdir().expect("failed to create temp dir");
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("a.png"), b"x").unwrap();
        std::fs::write(dir.path().join("sub/b.jpg"), b"x").unwrap();
        std::fs::write(dir.path().join("readme.md"), b"x").unwrap();

        assert_eq!(scan(dir.path()), 2);
    }

    #[test]
    fn test_verify_manifest_counts_missing_refs() {
        use crate::state::data::load_manifest;

        let dir = tempdir().expect("failed to create temp dir");
        let manifest = load_manifest().unwrap();
        let total_refs: usize = manifest
            .jobs
            .iter()
            .map(|j| j.images.len() + usize::from(j.icon.is_some()))
            .sum();

        // Empty root: everything is missing
        assert_eq!(verify_manifest(&manifest, dir.path()), total_refs);

        // Materialize one reference and the count drops by one
        let first = manifest.jobs[0].images[0].clone();
        let path = dir.path().join(&first);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, b"x").unwrap();
        assert_eq!(verify_manifest(&manifest, dir.path()), total_refs - 1);
    }

    #[test]
    fn test_placeholder_is_shared() {
        // Two calls hand back the same cached handle
        assert_eq!(placeholder(), placeholder());
    }
}
