//! Hand-authored foreground geometry: hill silhouettes and accent triangles.
//!
//! Coordinates are reference-frame literals; the outer hill vertices sit on the canvas edges so
//! every silhouette keeps the bottom edge as its baseline after scaling.

use crate::{
    foundation::core::{Canvas, Point, Rgb8},
    scene::model::{Polygon, SolidTriangle},
};

pub type HillOutline = (u32, &'static [(f64, f64)]);

/// Back to front; later hills occlude the skyline of earlier ones.
pub const HILLS: [HillOutline; 3] = [
    (
        0x1e293b,
        &[
            (0.0, 420.0),
            (120.0, 380.0),
            (280.0, 400.0),
            (450.0, 360.0),
            (600.0, 390.0),
            (800.0, 370.0),
            (800.0, 800.0),
            (0.0, 800.0),
        ],
    ),
    (
        0x334155,
        &[
            (0.0, 520.0),
            (200.0, 460.0),
            (400.0, 500.0),
            (550.0, 450.0),
            (720.0, 480.0),
            (800.0, 440.0),
            (800.0, 800.0),
            (0.0, 800.0),
        ],
    ),
    (
        0x0f172a,
        &[
            (0.0, 620.0),
            (80.0, 580.0),
            (240.0, 610.0),
            (380.0, 560.0),
            (520.0, 600.0),
            (680.0, 570.0),
            (800.0, 590.0),
            (800.0, 800.0),
            (0.0, 800.0),
        ],
    ),
];

pub const ACCENTS: [(u32, [(f64, f64); 3]); 3] = [
    (0x4ade80, [(120.0, 680.0), (155.0, 600.0), (190.0, 680.0)]),
    (0x38bdf8, [(380.0, 690.0), (415.0, 610.0), (450.0, 690.0)]),
    (0xf97316, [(600.0, 685.0), (635.0, 615.0), (670.0, 685.0)]),
];

fn map(canvas: Canvas, (x, y): (f64, f64)) -> Point {
    canvas.from_reference(Point::new(x, y))
}

pub fn hills(canvas: Canvas) -> Vec<Polygon> {
    HILLS
        .iter()
        .map(|&(fill, outline)| {
            Polygon::new(
                outline.iter().map(|&p| map(canvas, p)).collect(),
                Rgb8::from_u32(fill),
            )
        })
        .collect()
}

pub fn accents(canvas: Canvas) -> Vec<SolidTriangle> {
    ACCENTS
        .iter()
        .map(|&(fill, [a, b, c])| {
            SolidTriangle::new(
                map(canvas, a),
                map(canvas, b),
                map(canvas, c),
                Rgb8::from_u32(fill),
            )
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/layers/hills.rs"]
mod tests;
