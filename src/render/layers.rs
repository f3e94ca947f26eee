//! Role-tagged image layers supplied to the compositor

use image::RgbaImage;

/// What a layer contributes to the final image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerRole {
    /// Spotless artwork, ordinary palette
    Base,
    /// Spotless artwork, special palette
    Special,
    /// Alpha mask clipping the spot canvas
    HeadMask,
    /// Drawn over the spots
    FaceOverlay,
    /// Drawn last
    MouthOverlay,
    /// Scratch canvas holding the rasterized spots
    SpotCanvas,
}

/// Immutable RGBA pixels tagged with a role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    role: LayerRole,
    pixels: RgbaImage,
}

impl Layer {
    /// Tag `pixels` with `role`
    pub const fn new(role: LayerRole, pixels: RgbaImage) -> Self {
        Self { role, pixels }
    }

    /// Role of this layer
    pub const fn role(&self) -> LayerRole {
        self.role
    }

    /// Pixel data
    pub const fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Take the pixel data
    pub fn into_pixels(self) -> RgbaImage {
        self.pixels
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }
}

/// Optional layer per role; any combination is valid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayerSet {
    /// Ordinary artwork
    pub base: Option<Layer>,
    /// Special artwork
    pub special: Option<Layer>,
    /// Head mask for the spot canvas
    pub head_mask: Option<Layer>,
    /// Face overlay
    pub face: Option<Layer>,
    /// Mouth overlay
    pub mouth: Option<Layer>,
}

impl LayerSet {
    /// No layers at all; renders take the fallback path
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether any artwork layer is present
    pub const fn has_artwork(&self) -> bool {
        self.base.is_some() || self.special.is_some()
    }

    /// Number of layers present
    pub fn len(&self) -> usize {
        [
            &self.base,
            &self.special,
            &self.head_mask,
            &self.face,
            &self.mouth,
        ]
        .iter()
        .filter(|layer| layer.is_some())
        .count()
    }

    /// Whether no layer is present
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert a layer into the slot for its role; spot canvases are not stored
    pub fn insert(&mut self, layer: Layer) {
        let slot = match layer.role() {
            LayerRole::Base => &mut self.base,
            LayerRole::Special => &mut self.special,
            LayerRole::HeadMask => &mut self.head_mask,
            LayerRole::FaceOverlay => &mut self.face,
            LayerRole::MouthOverlay => &mut self.mouth,
            LayerRole::SpotCanvas => return,
        };
        *slot = Some(layer);
    }
}
