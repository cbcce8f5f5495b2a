use crate::{
    foundation::core::{Canvas, Point, Rgb8, Vec2},
    foundation::error::{TrivistaError, TrivistaResult},
    scene::model::SolidTriangle,
};

pub const DIAMOND_PALETTE: [Rgb8; 3] = [
    Rgb8::from_u32(0x2a314d),
    Rgb8::from_u32(0x3e405a),
    Rgb8::from_u32(0x524f66),
];

/// Smallest accepted `step`, in reference units.
pub const MIN_STEP: f64 = 1.0;

/// Upper bound on cells along either canvas axis.
pub const MAX_AXIS_CELLS: f64 = 256.0;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Offset diamond grid parameters; `step` is in reference units.
pub struct DiamondParams {
    pub step: f64,
    /// Diamond half-width as a fraction of `step`; below 0.5 so neighbours never touch.
    pub half_ratio: f64,
    /// Fraction of the canvas height the grid extends over.
    pub coverage: f64,
    pub palette: Vec<Rgb8>,
}

impl Default for DiamondParams {
    fn default() -> Self {
        Self {
            step: 28.0,
            half_ratio: 0.45,
            coverage: 1.0,
            palette: DIAMOND_PALETTE.to_vec(),
        }
    }
}

impl DiamondParams {
    pub fn validate(&self) -> TrivistaResult<()> {
        if !(self.step.is_finite() && self.step >= MIN_STEP) {
            return Err(TrivistaError::validation(format!(
                "diamond step must be >= {MIN_STEP}"
            )));
        }
        if !(self.half_ratio > 0.0 && self.half_ratio < 0.5) {
            return Err(TrivistaError::validation(
                "diamond half_ratio must be in (0, 0.5)",
            ));
        }
        if !(self.coverage > 0.0 && self.coverage <= 1.0) {
            return Err(TrivistaError::validation(
                "diamond coverage must be in (0, 1]",
            ));
        }
        if self.palette.is_empty() {
            return Err(TrivistaError::validation(
                "diamond palette must be non-empty",
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// A visited grid cell.
pub struct DiamondCell {
    pub row: u32,
    pub col: u32,
    pub center: Point,
}

/// Grid resolved onto a canvas.
#[derive(Clone, Copy, Debug)]
pub struct DiamondGrid {
    pub step: f64,
    pub half: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl DiamondGrid {
    /// Resolve `params` onto `canvas`. The step follows canvas area and never drops below
    /// `1 / MAX_AXIS_CELLS` of the longer side.
    pub fn new(canvas: Canvas, params: &DiamondParams) -> Self {
        let floor = canvas.w().max(canvas.h()) / MAX_AXIS_CELLS;
        let step = (params.step * canvas.area_scale()).max(floor);
        Self {
            step,
            half: step * params.half_ratio,
            max_x: canvas.w() + step * 0.5,
            max_y: canvas.h() * params.coverage + step * 0.5,
        }
    }

    /// Cells whose centre lies within the half-cell margin, row-major.
    pub fn cells(&self, canvas: Canvas) -> Vec<DiamondCell> {
        let step = self.step;
        if !(step > 0.0 && step.is_finite()) {
            return Vec::new();
        }
        // Float-to-int casts saturate.
        let rows = ((canvas.h() / step).floor() + 2.0).min(MAX_AXIS_CELLS + 2.0) as u32;
        let cols = ((canvas.w() / step).floor() + 2.0).min(MAX_AXIS_CELLS + 2.0) as u32;

        let mut out = Vec::new();
        for row in 0..rows {
            let shift = if row % 2 == 1 { step * 0.5 } else { 0.0 };
            let cy = f64::from(row) * step + step * 0.5;
            if cy > self.max_y {
                continue;
            }
            for col in 0..cols {
                let cx = f64::from(col) * step + shift + step * 0.5;
                if cx > self.max_x {
                    continue;
                }
                out.push(DiamondCell {
                    row,
                    col,
                    center: Point::new(cx, cy),
                });
            }
        }
        out
    }
}

/// Four quadrant wedges around `center`, walking the cardinal arms in order.
pub fn cell_triangles(center: Point, half: f64, fill: Rgb8) -> [SolidTriangle; 4] {
    let arms = [
        Vec2::new(half, 0.0),
        Vec2::new(0.0, half),
        Vec2::new(-half, 0.0),
        Vec2::new(0.0, -half),
    ];
    std::array::from_fn(|k| {
        SolidTriangle::new(center, center + arms[k], center + arms[(k + 1) % 4], fill)
    })
}

pub fn diamonds(canvas: Canvas, params: &DiamondParams) -> Vec<SolidTriangle> {
    let grid = DiamondGrid::new(canvas, params);
    let cells = grid.cells(canvas);

    let palette: &[Rgb8] = if params.palette.is_empty() {
        &DIAMOND_PALETTE
    } else {
        &params.palette
    };

    let mut out = Vec::with_capacity(cells.len() * 4);
    for cell in cells {
        let fill = palette[(cell.row as usize + cell.col as usize) % palette.len()];
        out.extend(cell_triangles(cell.center, grid.half, fill));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/layers/diamonds.rs"]
mod tests;
