//! Stroke and shape-outline rasterization.
//!
//! DESIGN
//! ======
//! A pixel at integer coordinate `(x, y)` belongs to a stroke when its
//! distance to the stroked geometry is at most half the brush width. Every
//! shape reduces to segments under that test, which gives round caps and
//! round joins for free and keeps the output a pure function of the inputs —
//! the determinism the replay engine depends on. Curves (the oval) are
//! flattened to a closed polyline whose point count derives only from the
//! radii.

#[cfg(test)]
#[path = "stroke_test.rs"]
mod stroke_test;

use std::f64::consts::TAU;

use events::{BlendMode, Point};

use crate::surface::Surface;

/// Paint one line segment of the given brush width.
pub fn stroke_segment(
    surface: &mut Surface,
    a: Point,
    b: Point,
    rgb: [u8; 3],
    width: u32,
    mode: BlendMode,
) {
    if !(a.x.is_finite() && a.y.is_finite() && b.x.is_finite() && b.y.is_finite()) {
        return;
    }
    let radius = f64::from(width) / 2.0;
    let radius_sq = radius * radius;

    let min_x = ((a.x.min(b.x) - radius).floor() as i64).max(0);
    let min_y = ((a.y.min(b.y) - radius).floor() as i64).max(0);
    let max_x = ((a.x.max(b.x) + radius).ceil() as i64).min(i64::from(surface.width()) - 1);
    let max_y = ((a.y.max(b.y) + radius).ceil() as i64).min(i64::from(surface.height()) - 1);

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            if dist_sq_to_segment(x as f64, y as f64, a, b) <= radius_sq {
                surface.paint(x, y, rgb, mode);
            }
        }
    }
}

/// Paint a continuous polyline through every point. A single point paints a
/// round dot of the brush width.
pub fn stroke_polyline(
    surface: &mut Surface,
    points: &[Point],
    rgb: [u8; 3],
    width: u32,
    mode: BlendMode,
) {
    match points {
        [] => {}
        [p] => stroke_segment(surface, *p, *p, rgb, width, mode),
        _ => {
            for pair in points.windows(2) {
                stroke_segment(surface, pair[0], pair[1], rgb, width, mode);
            }
        }
    }
}

/// Paint an axis-aligned rectangle outline with opposite corners `a` and
/// `b`. Negative extents (corner `b` up/left of `a`) draw the same outline.
pub fn stroke_rectangle(
    surface: &mut Surface,
    a: Point,
    b: Point,
    rgb: [u8; 3],
    width: u32,
    mode: BlendMode,
) {
    let corners = [
        a,
        Point::new(b.x, a.y),
        b,
        Point::new(a.x, b.y),
        a,
    ];
    stroke_polyline(surface, &corners, rgb, width, mode);
}

/// Paint an ellipse outline inscribed in the bounding box with opposite
/// corners `a` and `b`.
pub fn stroke_oval(
    surface: &mut Surface,
    a: Point,
    b: Point,
    rgb: [u8; 3],
    width: u32,
    mode: BlendMode,
) {
    let center_x = (a.x + b.x) / 2.0;
    let center_y = (a.y + b.y) / 2.0;
    let radius_x = (b.x - a.x).abs() / 2.0;
    let radius_y = (b.y - a.y).abs() / 2.0;
    if !(center_x.is_finite() && center_y.is_finite() && radius_x.is_finite() && radius_y.is_finite())
    {
        return;
    }

    // Chord length stays well under a pixel at 4 segments per radius unit.
    let steps = ((radius_x.max(radius_y) * 4.0).ceil()).clamp(32.0, 2048.0) as usize;
    let outline: Vec<Point> = (0..=steps)
        .map(|i| {
            let theta = TAU * (i as f64) / (steps as f64);
            Point::new(center_x + radius_x * theta.cos(), center_y + radius_y * theta.sin())
        })
        .collect();
    stroke_polyline(surface, &outline, rgb, width, mode);
}

/// Paint an isoceles triangle outline: apex at `apex`, base from `base` to
/// `base` mirrored horizontally through the apex.
pub fn stroke_triangle(
    surface: &mut Surface,
    apex: Point,
    base: Point,
    rgb: [u8; 3],
    width: u32,
    mode: BlendMode,
) {
    let mirrored = Point::new(2.0 * apex.x - base.x, base.y);
    let outline = [apex, base, mirrored, apex];
    stroke_polyline(surface, &outline, rgb, width, mode);
}

/// Squared distance from `(px, py)` to the closest point on segment `a..b`.
fn dist_sq_to_segment(px: f64, py: f64, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq == 0.0 {
        0.0
    } else {
        (((px - a.x) * dx + (py - a.y) * dy) / len_sq).clamp(0.0, 1.0)
    };
    let closest_x = a.x + t * dx;
    let closest_y = a.y + t * dy;
    (px - closest_x) * (px - closest_x) + (py - closest_y) * (py - closest_y)
}
