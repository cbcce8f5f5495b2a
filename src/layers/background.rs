//! Two-tone sky: each canvas half is split along its diagonal into two triangles.

use crate::{
    foundation::core::{Canvas, Point, Rgb8},
    scene::model::SolidTriangle,
};

pub const UPPER_FILL: Rgb8 = Rgb8::from_u32(0x0a0e1a);
pub const LOWER_FILL: Rgb8 = Rgb8::from_u32(0x141c28);

/// Four triangles covering the canvas, upper half first.
pub fn background(canvas: Canvas) -> [SolidTriangle; 4] {
    let (w, h) = (canvas.w(), canvas.h());
    let mid = h * 0.5;

    let tl = Point::new(0.0, 0.0);
    let tr = Point::new(w, 0.0);
    let ml = Point::new(0.0, mid);
    let mr = Point::new(w, mid);
    let bl = Point::new(0.0, h);
    let br = Point::new(w, h);

    [
        SolidTriangle::new(tl, tr, ml, UPPER_FILL),
        SolidTriangle::new(tr, mr, ml, UPPER_FILL),
        SolidTriangle::new(ml, mr, bl, LOWER_FILL),
        SolidTriangle::new(mr, br, bl, LOWER_FILL),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/layers/background.rs"]
mod tests;
