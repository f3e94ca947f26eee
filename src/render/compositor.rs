//! Layered compositing of artwork, masked spots, and overlays
//!
//! Draw order: artwork copy, spot canvas (clipped by the head mask when one
//! is supplied), face overlay, mouth overlay. Rendering is a pure function of
//! the request and the layers.

use crate::io::configuration::SPOT_BORDER_WIDTH;
use crate::layout::spots::{SpotDescriptor, layout};
use crate::render::fallback::render_fallback;
use crate::render::layers::{Layer, LayerRole, LayerSet};
use crate::render::palette::Palette;
use crate::render::raster::{Ellipse, Stroke, composite_over, draw_ellipse};
use crate::seed::codec::Seed;
use image::{Rgba, RgbaImage};

/// Immutable input to one render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderRequest {
    /// Seed driving the spot layout
    pub seed: Seed,
    /// Use the special artwork and palette
    pub special: bool,
}

impl RenderRequest {
    /// Request a render of `seed`
    pub const fn new(seed: Seed, special: bool) -> Self {
        Self { seed, special }
    }
}

/// Which rendering path a layer set supports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pipeline<'a> {
    /// Artwork present; spots are drawn over it
    Full {
        /// Artwork selected for the request
        artwork: &'a Layer,
    },
    /// No artwork; draw the placeholder
    Fallback,
}

/// Decide between the full and fallback pipelines
///
/// Special artwork wins when the flag is set and it exists; otherwise base
/// artwork, and as a last resort special artwork even for ordinary renders.
pub fn select_pipeline(special: bool, layers: &LayerSet) -> Pipeline<'_> {
    let preferred = if special {
        layers.special.as_ref().or(layers.base.as_ref())
    } else {
        layers.base.as_ref().or(layers.special.as_ref())
    };

    preferred.map_or(Pipeline::Fallback, |artwork| Pipeline::Full { artwork })
}

/// Render the final image for `request`
pub fn render(request: &RenderRequest, layers: &LayerSet) -> RgbaImage {
    match select_pipeline(request.special, layers) {
        Pipeline::Fallback => render_fallback(request.seed, request.special),
        Pipeline::Full { artwork } => {
            tracing::debug!(
                seed = %request.seed,
                special = request.special,
                artwork = ?artwork.role(),
                masked = layers.head_mask.is_some(),
                "rendering spot pattern"
            );
            render_full(request, artwork, layers)
        }
    }
}

fn render_full(request: &RenderRequest, artwork: &Layer, layers: &LayerSet) -> RgbaImage {
    let mut output = artwork.pixels().clone();

    let spots = layout(request.seed, artwork.width());
    let canvas = render_spot_canvas(
        &spots,
        Palette::for_special(request.special),
        output.width(),
        output.height(),
    );

    match &layers.head_mask {
        Some(mask) => composite_over(&mut output, &apply_mask(canvas.pixels(), mask.pixels())),
        None => composite_over(&mut output, canvas.pixels()),
    }

    for overlay in [&layers.face, &layers.mouth].into_iter().flatten() {
        composite_over(&mut output, overlay.pixels());
    }

    output
}

/// Rasterize spots onto a transparent canvas of the given size
pub fn render_spot_canvas(
    spots: &[SpotDescriptor],
    palette: Palette,
    width: u32,
    height: u32,
) -> Layer {
    let mut canvas = RgbaImage::new(width, height);
    let stroke = Stroke {
        color: palette.border,
        width: SPOT_BORDER_WIDTH,
    };

    for spot in spots {
        let ellipse = Ellipse::from_bounds(
            spot.ellipse_bounds(),
            spot.effective_spot_rotation().unwrap_or(0.0),
        );
        draw_ellipse(&mut canvas, &ellipse, Some(palette.fill), Some(stroke));
    }

    Layer::new(LayerRole::SpotCanvas, canvas)
}

/// Scale one spot pixel's alpha by the mask alpha, leaving RGB untouched
pub const fn mask_pixel(spot: Rgba<u8>, mask_alpha: u8) -> Rgba<u8> {
    let [r, g, b, a] = spot.0;
    if a == 0 || mask_alpha == 0 {
        return Rgba([0, 0, 0, 0]);
    }
    let alpha = (a as u32 * mask_alpha as u32) / 255;
    Rgba([r, g, b, alpha as u8])
}

/// Clip `spots` by the alpha channel of `mask`
///
/// Coordinates outside the mask count as fully transparent mask pixels.
/// Each row depends only on the same row of both inputs.
pub fn apply_mask(spots: &RgbaImage, mask: &RgbaImage) -> RgbaImage {
    let mut masked = RgbaImage::new(spots.width(), spots.height());

    for (y, row) in masked.rows_mut().enumerate() {
        let y = y as u32;
        for (x, pixel) in row.enumerate() {
            let x = x as u32;
            let mask_alpha = mask.get_pixel_checked(x, y).map_or(0, |m| m.0[3]);
            if let Some(&spot) = spots.get_pixel_checked(x, y) {
                *pixel = mask_pixel(spot, mask_alpha);
            }
        }
    }

    masked
}
