//! Maps decoded digit pairs to drawable spot descriptors

use crate::io::configuration::{REACHABLE_SPAN_PERCENT, ROTATION_EPSILON_DEGREES};
use crate::layout::regions::{CONTAINERS, Container, Region};
use crate::seed::codec::{DigitPair, SPOT_COUNT, Seed, decode};
use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Everything needed to draw one spot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotDescriptor {
    /// Region the spot belongs to
    pub region: Region,
    /// Container box as fractions of the image size
    pub container: Rect,
    /// Container rotation in degrees
    pub container_rotation_degrees: f64,
    /// Spot size as fractions of the container
    pub spot_fraction: Size,
    /// Spot ellipse rotation in degrees
    pub spot_rotation_degrees: f64,
    /// Horizontal (x) and vertical (y) offset within the container, in percent
    pub offset_percent: Vec2,
    /// Spot center in image pixels
    pub center: Point,
    /// Spot width and height in image pixels
    pub size: Size,
}

impl SpotDescriptor {
    /// Unrotated bounding box of the ellipse
    pub fn ellipse_bounds(&self) -> Rect {
        Rect::from_center_size(self.center, self.size)
    }

    /// Spot rotation in radians, `None` when below the rotation threshold
    pub fn effective_spot_rotation(&self) -> Option<f64> {
        effective_radians(self.spot_rotation_degrees)
    }
}

/// Convert a digit (0-15) into a percentage of the reachable container span
pub fn digit_percent(digit: u8) -> f64 {
    f64::from(digit & 0xF) / 15.0 * REACHABLE_SPAN_PERCENT
}

fn effective_radians(degrees: f64) -> Option<f64> {
    (degrees.abs() > ROTATION_EPSILON_DEGREES).then(|| degrees.to_radians())
}

/// Place one spot inside its container for a square image of edge `image_size`
pub fn place_spot(container: &Container, pair: DigitPair, image_size: f64) -> SpotDescriptor {
    let offset_percent = Vec2::new(digit_percent(pair.col), digit_percent(pair.row));
    let bounds = container.pixel_bounds(image_size);

    let offset = Vec2::new(
        offset_percent.x / 100.0 * bounds.width(),
        offset_percent.y / 100.0 * bounds.height(),
    );
    let unrotated = bounds.origin() + offset;

    // Container rotation only moves the center; the ellipse turns separately
    let center = effective_radians(container.rotation_degrees).map_or(unrotated, |angle| {
        Affine::rotate_about(angle, bounds.center()) * unrotated
    });

    let size = Size::new(
        bounds.width() * container.spot_fraction.width,
        bounds.height() * container.spot_fraction.height,
    );

    SpotDescriptor {
        region: container.region,
        container: container.bounds,
        container_rotation_degrees: container.rotation_degrees,
        spot_fraction: container.spot_fraction,
        spot_rotation_degrees: container.spot_rotation_degrees,
        offset_percent,
        center,
        size,
    }
}

/// Lay out all four spots of a seed, in seed byte order
pub fn layout(seed: Seed, image_size: u32) -> [SpotDescriptor; SPOT_COUNT] {
    let [right_face, left_face, right_ear, left_ear] = decode(seed);
    let [c0, c1, c2, c3] = &CONTAINERS;
    let size = f64::from(image_size);
    [
        place_spot(c0, right_face, size),
        place_spot(c1, left_face, size),
        place_spot(c2, right_ear, size),
        place_spot(c3, left_ear, size),
    ]
}
