//! Anti-aliased ellipse rasterization and straight-alpha pixel blending
//!
//! Coverage is estimated with a fixed grid of sub-samples per pixel, so the
//! output depends only on the shape and the canvas, never on draw history
//! beyond source-over blending.

use crate::io::configuration::SUPERSAMPLING;
use image::{Rgba, RgbaImage};
use kurbo::{Affine, Point, Rect, Vec2};

/// Ellipse with an optional rotation about its center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    /// Center in canvas pixels
    pub center: Point,
    /// Half width and half height before rotation
    pub radii: Vec2,
    /// Rotation about the center in radians
    pub rotation: f64,
}

/// Outline drawn centered on the ellipse boundary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Outline color
    pub color: Rgba<u8>,
    /// Outline width in pixels
    pub width: f64,
}

impl Ellipse {
    /// Ellipse inscribed in `bounds`, rotated by `rotation` radians
    pub fn from_bounds(bounds: Rect, rotation: f64) -> Self {
        Self {
            center: bounds.center(),
            radii: Vec2::new(bounds.width() / 2.0, bounds.height() / 2.0),
            rotation,
        }
    }

    /// Axis-aligned box enclosing the ellipse at any rotation, grown by `margin`
    pub fn coverage_bounds(&self, margin: f64) -> Rect {
        let reach = self.radii.x.max(self.radii.y) + margin;
        Rect::from_center_size(self.center, (reach * 2.0, reach * 2.0))
    }

    /// Approximate signed distance to the boundary, negative inside
    ///
    /// First-order estimate `F / |grad F|` of the implicit form, exact on the
    /// boundary and accurate within a pixel of it.
    pub fn signed_distance(&self, point: Point) -> f64 {
        let local = Affine::rotate(-self.rotation) * (point - self.center).to_point();
        let nx = local.x / self.radii.x;
        let ny = local.y / self.radii.y;
        let implicit = nx.mul_add(nx, ny * ny) - 1.0;

        let gx = 2.0 * nx / self.radii.x;
        let gy = 2.0 * ny / self.radii.y;
        let gradient = gx.hypot(gy);

        if gradient <= f64::EPSILON {
            return -self.radii.x.min(self.radii.y);
        }
        implicit / gradient
    }

    const fn is_degenerate(&self) -> bool {
        !(self.radii.x > 0.0 && self.radii.y > 0.0)
    }
}

/// Straight-alpha source-over of one pixel onto another
pub fn blend_over(dst: Rgba<u8>, src: Rgba<u8>) -> Rgba<u8> {
    let [sr, sg, sb, sa] = src.0;
    let [dr, dg, db, da] = dst.0;

    if sa == 255 || da == 0 {
        return src;
    }
    if sa == 0 {
        return dst;
    }

    // Weights are alpha scaled by 255 so the math stays in integers
    let src_weight = u32::from(sa) * 255;
    let dst_weight = u32::from(da) * (255 - u32::from(sa));
    let total = src_weight + dst_weight;

    let channel = |s: u8, d: u8| {
        ((u32::from(s) * src_weight + u32::from(d) * dst_weight + total / 2) / total) as u8
    };

    Rgba([
        channel(sr, dr),
        channel(sg, dg),
        channel(sb, db),
        ((total + 127) / 255) as u8,
    ])
}

/// Composite `src` over `dst` across their shared extent, anchored at the origin
pub fn composite_over(dst: &mut RgbaImage, src: &RgbaImage) {
    let width = dst.width().min(src.width());
    let height = dst.height().min(src.height());

    for y in 0..height {
        for x in 0..width {
            let (Some(&top), Some(bottom)) =
                (src.get_pixel_checked(x, y), dst.get_pixel_mut_checked(x, y))
            else {
                continue;
            };
            *bottom = blend_over(*bottom, top);
        }
    }
}

/// Draw an ellipse with optional fill and outline onto `canvas`
///
/// The outline sits over the fill where both cover a sub-sample.
pub fn draw_ellipse(
    canvas: &mut RgbaImage,
    ellipse: &Ellipse,
    fill: Option<Rgba<u8>>,
    stroke: Option<Stroke>,
) {
    if ellipse.is_degenerate() || (fill.is_none() && stroke.is_none()) {
        return;
    }

    let half_stroke = stroke.map_or(0.0, |s| s.width / 2.0);
    let Some((x_range, y_range)) =
        clip_to_canvas(ellipse.coverage_bounds(half_stroke + 1.0), canvas)
    else {
        return;
    };

    let samples = SUPERSAMPLING.max(1);
    let step = 1.0 / f64::from(samples);

    for y in y_range {
        for x in x_range.clone() {
            let mut stroke_hits = 0u32;
            let mut fill_hits = 0u32;

            for sy in 0..samples {
                for sx in 0..samples {
                    let sample = Point::new(
                        (f64::from(sx) + 0.5).mul_add(step, f64::from(x)),
                        (f64::from(sy) + 0.5).mul_add(step, f64::from(y)),
                    );
                    let distance = ellipse.signed_distance(sample);

                    if stroke.is_some() && distance.abs() <= half_stroke {
                        stroke_hits += 1;
                    } else if fill.is_some() && distance <= 0.0 {
                        fill_hits += 1;
                    }
                }
            }

            let covered = coverage_color(
                stroke.map(|s| (s.color, stroke_hits)),
                fill.map(|f| (f, fill_hits)),
                samples * samples,
            );

            if let (Some(color), Some(pixel)) = (covered, canvas.get_pixel_mut_checked(x, y)) {
                *pixel = blend_over(*pixel, color);
            }
        }
    }
}

// Average the sub-sample colors, weighting each by its own alpha
fn coverage_color(
    stroke: Option<(Rgba<u8>, u32)>,
    fill: Option<(Rgba<u8>, u32)>,
    sample_count: u32,
) -> Option<Rgba<u8>> {
    let mut weight_sum = 0u32;
    let mut channels = [0u32; 3];

    for (color, hits) in [stroke, fill].into_iter().flatten() {
        let [r, g, b, a] = color.0;
        let weight = hits * u32::from(a);
        weight_sum += weight;
        for (acc, value) in channels.iter_mut().zip([r, g, b]) {
            *acc += weight * u32::from(value);
        }
    }

    if weight_sum == 0 {
        return None;
    }

    let [r, g, b] = channels.map(|c| ((c + weight_sum / 2) / weight_sum) as u8);
    let alpha = (weight_sum + sample_count / 2) / sample_count;
    Some(Rgba([r, g, b, alpha.min(255) as u8]))
}

fn clip_to_canvas(
    bounds: Rect,
    canvas: &RgbaImage,
) -> Option<(std::ops::Range<u32>, std::ops::Range<u32>)> {
    let x0 = bounds.x0.floor().max(0.0) as u32;
    let y0 = bounds.y0.floor().max(0.0) as u32;
    let x1 = (bounds.x1.ceil().max(0.0) as u32).min(canvas.width());
    let y1 = (bounds.y1.ceil().max(0.0) as u32).min(canvas.height());

    (x0 < x1 && y0 < y1).then_some((x0..x1, y0..y1))
}
