/// Static page content
///
/// The work-history entries are fixed configuration data, embedded at
/// compile time from `assets/jobs.json` and parsed once at startup. They
/// never change while the app runs; all mutable state lives in the viewer
/// and theme modules.

use crate::error::Result;
use serde::Deserialize;

/// The embedded manifest source.
const MANIFEST: &str = include_str!("../../assets/jobs.json");

/// The thumbnail strip shows at most this many images per job.
pub const MAX_THUMBNAILS: usize = 4;

/// Top-level manifest layout.
#[derive(Debug, Deserialize)]
pub struct Manifest {
    pub owner: String,
    pub tagline: String,
    pub jobs: Vec<JobEntry>,
}

/// One work-history entry and its image set.
#[derive(Debug, Clone, Deserialize)]
pub struct JobEntry {
    pub title: String,
    #[serde(default)]
    pub date: String,
    pub description: String,
    /// Round icon shown beside the title, relative to the assets root
    #[serde(default)]
    pub icon: Option<String>,
    /// Ordered image paths, relative to the assets root
    #[serde(default)]
    pub images: Vec<String>,
    /// Captions aligned with `images`; shorter lists render as empty
    #[serde(default)]
    pub captions: Vec<String>,
    /// Display position on the page, assigned after parsing
    #[serde(skip)]
    pub index: usize,
}

impl JobEntry {
    /// Images shown in the thumbnail strip (clamped to `MAX_THUMBNAILS`).
    pub fn display_images(&self) -> &[String] {
        let count = self.images.len().min(MAX_THUMBNAILS);
        &self.images[..count]
    }

    /// The caption for an image index, empty if none was provided.
    pub fn caption(&self, image: usize) -> &str {
        self.captions.get(image).map(String::as_str).unwrap_or("")
    }

    /// The image path for an index, if the manifest lists one.
    pub fn image(&self, image: usize) -> Option<&str> {
        self.images.get(image).map(String::as_str)
    }
}

/// Parse the embedded manifest and assign display indexes.
pub fn load_manifest() -> Result<Manifest> {
    let mut manifest: Manifest = serde_json::from_str(MANIFEST)?;
    for (index, job) in manifest.jobs.iter_mut().enumerate() {
        job.index = index;
    }
    Ok(manifest)
}

/// Load the manifest, degrading to an empty page on a malformed file.
/// A bad manifest is a packaging mistake, not a user error, so it is
/// logged and the app still starts.
pub fn load_manifest_or_empty() -> Manifest {
    match load_manifest() {
        Ok(manifest) => manifest,
        Err(e) => {
            eprintln!("⚠️  Failed to parse job manifest: {e}");
            Manifest {
                owner: String::new(),
                tagline: String::new(),
                jobs: Vec::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_manifest_parses() {
        let manifest = load_manifest().expect("embedded manifest must parse");
        assert_eq!(manifest.jobs.len(), 3);
        assert!(!manifest.owner.is_empty());
    }

    #[test]
    fn test_display_indexes_are_sequential() {
        let manifest = load_manifest().unwrap();
        for (i, job) in manifest.jobs.iter().enumerate() {
            assert_eq!(job.index, i);
        }
    }

    #[test]
    fn test_captions_align_with_images() {
        let manifest = load_manifest().unwrap();
        for job in &manifest.jobs {
            for i in 0..job.images.len() {
                // Never panics, even past the caption list
                let _ = job.caption(i);
            }
            assert_eq!(job.caption(job.images.len() + 10), "");
        }
    }

    #[test]
    fn test_thumbnail_strip_is_clamped() {
        let job = JobEntry {
            title: "test".into(),
            date: String::new(),
            description: String::new(),
            icon: None,
            images: (0..7).map(|i| format!("img-{i}.png")).collect(),
            captions: Vec::new(),
            index: 0,
        };
        assert_eq!(job.display_images().len(), MAX_THUMBNAILS);

        let empty = JobEntry { images: Vec::new(), ..job };
        assert!(empty.display_images().is_empty());
    }

    #[test]
    fn test_missing_image_index_is_none() {
        let manifest = load_manifest().unwrap();
        let job = &manifest.jobs[0];
        assert!(job.image(0).is_some());
        assert!(job.image(99).is_none());
    }
}
