//! Artwork discovery and loading into role-tagged layers
//!
//! Loading never fails as a whole: a missing or unreadable file simply leaves
//! its layer absent, and the compositor decides what to do with the rest.

use crate::io::configuration::{
    BASE_ASSET, FACE_ASSET, HEAD_MASK_ASSET, MOUTH_ASSET, SPECIAL_ASSET,
};
use crate::io::error::{Result, SpotError};
use crate::render::layers::{Layer, LayerRole, LayerSet};
use image::RgbaImage;
use std::path::{Path, PathBuf};

/// Source of the optional artwork layers
pub trait AssetProvider {
    /// Load every layer that is present and valid
    fn load_layers(&self) -> LayerSet;
}

/// Layer roles paired with their file names
pub const ASSET_FILES: [(LayerRole, &str); 5] = [
    (LayerRole::Base, BASE_ASSET),
    (LayerRole::Special, SPECIAL_ASSET),
    (LayerRole::HeadMask, HEAD_MASK_ASSET),
    (LayerRole::FaceOverlay, FACE_ASSET),
    (LayerRole::MouthOverlay, MOUTH_ASSET),
];

/// Loads the named asset files from one directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryAssets {
    root: Option<PathBuf>,
}

impl DirectoryAssets {
    /// Load from `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    /// Use the first existing directory in `candidates`
    pub fn discover<I, P>(candidates: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let root = candidates
            .into_iter()
            .map(|candidate| candidate.as_ref().to_path_buf())
            .find(|candidate| candidate.is_dir());

        match &root {
            Some(dir) => tracing::debug!(dir = %dir.display(), "using asset directory"),
            None => tracing::info!("no asset directory found, renders will use the placeholder"),
        }

        Self { root }
    }

    /// Directory assets are read from, if any
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }
}

impl AssetProvider for DirectoryAssets {
    fn load_layers(&self) -> LayerSet {
        let mut layers = LayerSet::empty();
        let Some(root) = &self.root else {
            return layers;
        };

        for (role, file_name) in ASSET_FILES {
            let path = root.join(file_name);
            if !path.is_file() {
                tracing::debug!(path = %path.display(), ?role, "asset not present");
                continue;
            }

            match load_rgba(&path) {
                Ok(pixels) => layers.insert(Layer::new(role, pixels)),
                Err(error) => tracing::warn!(%error, ?role, "skipping unreadable asset"),
            }
        }

        layers
    }
}

/// Decode an image file into RGBA pixels
///
/// # Errors
///
/// Returns `SpotError::ImageLoad` if the file cannot be opened or decoded
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    image::open(path)
        .map(|img| img.to_rgba8())
        .map_err(|e| SpotError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })
}
