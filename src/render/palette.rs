//! Spot colors for ordinary and special renders

use image::Rgba;

/// Fill and border color pair for spots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Spot interior
    pub fill: Rgba<u8>,
    /// One pixel spot outline
    pub border: Rgba<u8>,
}

/// Red spots on the ordinary artwork
pub const ORDINARY: Palette = Palette {
    fill: Rgba([255, 59, 79, 255]),
    border: Rgba([220, 40, 60, 255]),
};

/// Green spots on the special artwork
pub const SPECIAL: Palette = Palette {
    fill: Rgba([183, 199, 92, 255]),
    border: Rgba([150, 170, 70, 255]),
};

impl Palette {
    /// Select the palette for the special flag
    pub const fn for_special(special: bool) -> Self {
        if special { SPECIAL } else { ORDINARY }
    }
}
