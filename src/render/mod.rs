//! Rasterization and layered compositing

/// Artwork, mask, overlay, and spot canvas layering
pub mod compositor;
/// Placeholder render for missing artwork
pub mod fallback;
/// Role-tagged layers and the optional layer set
pub mod layers;
/// Spot fill and border colors
pub mod palette;
/// Ellipse rasterization and alpha blending
pub mod raster;

pub use compositor::{RenderRequest, render};
pub use layers::{Layer, LayerRole, LayerSet};
pub use palette::Palette;
