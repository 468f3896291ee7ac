use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    buffer::{AlphaImage, NrgbaImage},
    foundation::error::DrawResult,
};

/// Resolves job asset sources to decoded buffers.
pub trait AssetLoader {
    /// Decode a straight-alpha raster.
    fn load_image(&mut self, source: &str) -> DrawResult<NrgbaImage>;

    /// Decode a raster whose luma becomes coverage.
    fn load_mask(&mut self, source: &str) -> DrawResult<AlphaImage>;
}

/// Loads assets from files under `root` using the `image` crate's format detection.
#[derive(Clone, Debug)]
pub struct FsAssetLoader {
    root: PathBuf,
}

impl FsAssetLoader {
    /// Resolve sources relative to `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory sources are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn open(&self, source: &str) -> DrawResult<image::DynamicImage> {
        let path = self.root.join(source);
        let img = image::open(&path).with_context(|| format!("decode '{}'", path.display()))?;
        tracing::debug!(path = %path.display(), width = img.width(), height = img.height(), "loaded asset");
        Ok(img)
    }
}

impl AssetLoader for FsAssetLoader {
    fn load_image(&mut self, source: &str) -> DrawResult<NrgbaImage> {
        NrgbaImage::from_image(&self.open(source)?.to_rgba8())
    }

    fn load_mask(&mut self, source: &str) -> DrawResult<AlphaImage> {
        AlphaImage::from_luma(&self.open(source)?.to_luma8())
    }
}
