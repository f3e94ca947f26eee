//! Placeholder render used when no artwork is available

use crate::io::configuration::{FALLBACK_CANVAS_SIZE, FALLBACK_SPOT_DIAMETER};
use crate::render::palette::Palette;
use crate::render::raster::{Ellipse, draw_ellipse};
use crate::seed::codec::Seed;
use image::{Rgba, RgbaImage};
use kurbo::{Point, Rect};

/// Background of the placeholder canvas
pub const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
/// Head and ear silhouette color
pub const BODY_COLOR: Rgba<u8> = Rgba([245, 235, 215, 255]);

/// Head then ears, as (x, y, width, height)
pub const SILHOUETTE: [(f64, f64, f64, f64); 3] = [
    (100.0, 100.0, 100.0, 100.0),
    (80.0, 60.0, 60.0, 60.0),
    (160.0, 60.0, 60.0, 60.0),
];

/// Spot anchors, least-significant seed byte first
pub const SPOT_ANCHORS: [(f64, f64); 4] = [
    (120.0, 140.0),
    (180.0, 140.0),
    (100.0, 80.0),
    (200.0, 80.0),
];

/// Top-left corner of the fallback spot driven by `byte`
///
/// Low nibble shifts horizontally, high nibble vertically, both by -8..=7.
pub fn spot_origin(byte: u8, anchor: (f64, f64)) -> Point {
    let x_offset = i32::from(byte & 0x0F) - 8;
    let y_offset = i32::from((byte >> 4) & 0x0F) - 8;
    Point::new(
        anchor.0 + f64::from(x_offset),
        anchor.1 + f64::from(y_offset),
    )
}

/// Render the placeholder for `seed`
pub fn render_fallback(seed: Seed, special: bool) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(FALLBACK_CANVAS_SIZE, FALLBACK_CANVAS_SIZE, BACKGROUND);

    for (x, y, width, height) in SILHOUETTE {
        let bounds = Rect::new(x, y, x + width, y + height);
        let silhouette = Ellipse::from_bounds(bounds, 0.0);
        draw_ellipse(&mut canvas, &silhouette, Some(BODY_COLOR), None);
    }

    let fill = Palette::for_special(special).fill;
    let bytes = seed.value().to_le_bytes();

    for (byte, anchor) in bytes.into_iter().zip(SPOT_ANCHORS) {
        let origin = spot_origin(byte, anchor);
        let bounds =
            Rect::from_origin_size(origin, (FALLBACK_SPOT_DIAMETER, FALLBACK_SPOT_DIAMETER));
        let spot = Ellipse::from_bounds(bounds, 0.0);
        draw_ellipse(&mut canvas, &spot, Some(fill), None);
    }

    tracing::debug!(seed = %seed, special, "rendered fallback placeholder");
    canvas
}
