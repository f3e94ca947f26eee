//! Fixed anatomical containers that bound each spot

use kurbo::{Rect, Size};

/// Anatomical region a spot belongs to, in seed byte order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Driven by the most-significant seed byte
    RightFace,
    /// Second seed byte
    LeftFace,
    /// Third seed byte
    RightEar,
    /// Least-significant seed byte
    LeftEar,
}

/// Geometry of one container, all lengths as fractions of the image size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Container {
    /// Region this container covers
    pub region: Region,
    /// Container box in image fractions
    pub bounds: Rect,
    /// Rotation applied to the spot center about the container center, degrees
    pub rotation_degrees: f64,
    /// Spot width and height as fractions of the container
    pub spot_fraction: Size,
    /// Rotation of the spot ellipse about its own center, degrees
    pub spot_rotation_degrees: f64,
}

/// Box from its top-left corner and size
const fn fraction_box(left: f64, top: f64, width: f64, height: f64) -> Rect {
    Rect::new(left, top, left + width, top + height)
}

/// The four containers, indexed like the decoded digit pairs
pub const CONTAINERS: [Container; 4] = [
    Container {
        region: Region::RightFace,
        bounds: fraction_box(0.40, 0.43, 0.40, 0.40),
        rotation_degrees: 6.0,
        spot_fraction: Size::new(0.39, 0.41),
        spot_rotation_degrees: 6.0,
    },
    Container {
        region: Region::LeftFace,
        bounds: fraction_box(0.20, 0.39, 0.39, 0.39),
        rotation_degrees: 0.0,
        spot_fraction: Size::new(0.35, 0.39),
        spot_rotation_degrees: -6.0,
    },
    Container {
        region: Region::RightEar,
        bounds: fraction_box(0.57, 0.24, 0.39, 0.39),
        rotation_degrees: 30.0,
        spot_fraction: Size::new(0.38, 0.41),
        spot_rotation_degrees: 6.0,
    },
    Container {
        region: Region::LeftEar,
        bounds: fraction_box(0.17, 0.12, 0.40, 0.40),
        rotation_degrees: 0.0,
        spot_fraction: Size::new(0.33, 0.36),
        spot_rotation_degrees: -6.0,
    },
];

impl Container {
    /// Container box in pixels for a square image of edge `image_size`
    pub fn pixel_bounds(&self, image_size: f64) -> Rect {
        self.bounds.scale_from_origin(image_size)
    }
}
