use std::f64::consts::TAU;

use crate::{
    foundation::core::{Canvas, Point, Rgb8},
    foundation::error::{TrivistaError, TrivistaResult},
    foundation::math::{lerp, polar},
    scene::model::SolidTriangle,
};

pub const SPIRAL_PALETTE: [Rgb8; 7] = [
    Rgb8::from_u32(0x3b82f6),
    Rgb8::from_u32(0x8b5cf6),
    Rgb8::from_u32(0xec4899),
    Rgb8::from_u32(0xf43f5e),
    Rgb8::from_u32(0xf97316),
    Rgb8::from_u32(0xeab308),
    Rgb8::from_u32(0x22c55e),
];

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// How the third vertex of a wedge is pulled toward the centre.
pub enum Pinch {
    /// Mid-parameter radius minus a fixed reference-unit distance.
    Inset(f64),
    /// Mid-parameter radius multiplied by a factor in `(0, 1]`.
    Scale(f64),
}

impl Pinch {
    fn apply(self, r_mid: f64, scale: f64) -> f64 {
        match self {
            Pinch::Inset(d) => r_mid - d * scale,
            Pinch::Scale(k) => r_mid * k,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Spiral tessellation parameters, lengths in reference units.
pub struct SpiralParams {
    pub center: Point,
    pub num_arms: u32,
    pub segments_per_arm: u32,
    pub r_min: f64,
    pub r_max: f64,
    /// Full turns each arm makes from `r_min` to `r_max`.
    pub turns: f64,
    pub pinch: Pinch,
    pub palette: Vec<Rgb8>,
}

impl Default for SpiralParams {
    fn default() -> Self {
        Self {
            center: Point::new(400.0, 360.0),
            num_arms: 7,
            segments_per_arm: 24,
            r_min: 40.0,
            r_max: 260.0,
            turns: 2.0,
            pinch: Pinch::Inset(15.0),
            palette: SPIRAL_PALETTE.to_vec(),
        }
    }
}

impl SpiralParams {
    pub fn validate(&self) -> TrivistaResult<()> {
        if self.num_arms == 0 || self.segments_per_arm == 0 {
            return Err(TrivistaError::validation(
                "spiral num_arms and segments_per_arm must be > 0",
            ));
        }
        if !(self.r_min >= 0.0 && self.r_max >= self.r_min) {
            return Err(TrivistaError::validation(
                "spiral radii must satisfy 0 <= r_min <= r_max",
            ));
        }
        if !self.turns.is_finite() || self.turns <= 0.0 {
            return Err(TrivistaError::validation("spiral turns must be > 0"));
        }
        match self.pinch {
            Pinch::Inset(d) if !(d >= 0.0 && d.is_finite()) => {
                return Err(TrivistaError::validation("spiral pinch inset must be >= 0"));
            }
            Pinch::Scale(k) if !(k > 0.0 && k <= 1.0) => {
                return Err(TrivistaError::validation(
                    "spiral pinch scale must be in (0, 1]",
                ));
            }
            _ => {}
        }
        if self.palette.is_empty() {
            return Err(TrivistaError::validation("spiral palette must be non-empty"));
        }
        Ok(())
    }

    pub fn wedge_count(&self) -> usize {
        self.num_arms as usize * self.segments_per_arm as usize
    }
}

/// Arm geometry resolved onto a concrete canvas.
struct ArmFrame {
    center: Point,
    r_min: f64,
    r_max: f64,
    sweep: f64,
    base_angle: f64,
}

impl ArmFrame {
    fn radius(&self, t: f64) -> f64 {
        lerp(self.r_min, self.r_max, t)
    }

    fn angle(&self, t: f64) -> f64 {
        self.base_angle + t * self.sweep
    }

    fn outer(&self, t: f64) -> Point {
        polar(self.center, self.radius(t), self.angle(t))
    }
}

/// Wedges arm by arm; within an arm, wedge `i + 1` starts where wedge `i` ends.
pub fn spiral(canvas: Canvas, params: &SpiralParams) -> Vec<SolidTriangle> {
    let scale = canvas.uniform_scale();
    let center = canvas.from_reference(params.center);
    let arms = params.num_arms;
    let segments = params.segments_per_arm;
    let palette: &[Rgb8] = if params.palette.is_empty() {
        &SPIRAL_PALETTE
    } else {
        &params.palette
    };

    let mut out = Vec::with_capacity(params.wedge_count());
    for arm in 0..arms {
        let frame = ArmFrame {
            center,
            r_min: params.r_min * scale,
            r_max: params.r_max * scale,
            sweep: TAU * params.turns,
            base_angle: TAU * f64::from(arm) / f64::from(arms),
        };
        let fill = palette[arm as usize % palette.len()];

        for i in 0..segments {
            let t0 = f64::from(i) / f64::from(segments);
            let t1 = f64::from(i + 1) / f64::from(segments);
            let t_mid = (t0 + t1) * 0.5;

            let r_pinch = params.pinch.apply(frame.radius(t_mid), scale);
            let pinch = polar(center, r_pinch, frame.angle(t_mid));

            out.push(SolidTriangle::new(frame.outer(t0), frame.outer(t1), pinch, fill));
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/layers/spiral.rs"]
mod tests;
