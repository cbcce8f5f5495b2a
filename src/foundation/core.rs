use std::fmt;

use crate::foundation::error::{TrivistaError, TrivistaResult};

pub use kurbo::{Point, Rect, Vec2};

/// Side length of the square frame all layers are authored in.
pub const REFERENCE_SIZE: f64 = 800.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Output canvas dimensions in document units.
pub struct Canvas {
    /// Width in units (`px` in the emitted document).
    pub width: u32,
    /// Height in units.
    pub height: u32,
}

impl Canvas {
    /// Build a canvas, rejecting zero dimensions.
    pub fn new(width: u32, height: u32) -> TrivistaResult<Self> {
        if width == 0 || height == 0 {
            return Err(TrivistaError::validation(
                "canvas width/height must be > 0",
            ));
        }
        Ok(Self { width, height })
    }

    /// The 800×800 canvas the reference scene is defined on.
    pub const fn reference() -> Self {
        Self {
            width: 800,
            height: 800,
        }
    }

    /// Width as `f64`.
    pub fn w(self) -> f64 {
        f64::from(self.width)
    }

    /// Height as `f64`.
    pub fn h(self) -> f64 {
        f64::from(self.height)
    }

    /// Per-axis scale from the reference frame onto this canvas.
    pub fn reference_scale(self) -> Vec2 {
        Vec2::new(self.w() / REFERENCE_SIZE, self.h() / REFERENCE_SIZE)
    }

    /// Scale for radial/isotropic quantities (the smaller axis factor).
    pub fn uniform_scale(self) -> f64 {
        let s = self.reference_scale();
        s.x.min(s.y)
    }

    /// Scale for tiled quantities: the geometric mean of the axis factors, so the number of
    /// tiles tracks canvas area rather than aspect ratio.
    pub fn area_scale(self) -> f64 {
        let s = self.reference_scale();
        (s.x * s.y).sqrt()
    }

    /// Map a point authored in the reference frame onto this canvas.
    pub fn from_reference(self, p: Point) -> Point {
        let s = self.reference_scale();
        Point::new(p.x * s.x, p.y * s.y)
    }

    /// Map an axis-aligned reference rectangle onto this canvas.
    pub fn rect_from_reference(self, r: Rect) -> Rect {
        Rect::from_points(
            self.from_reference(Point::new(r.x0, r.y0)),
            self.from_reference(Point::new(r.x1, r.y1)),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Normalized texture coordinate.
pub struct Uv {
    pub u: f64,
    pub v: f64,
}

impl Uv {
    pub const fn new(u: f64, v: f64) -> Self {
        Self { u, v }
    }

    /// Both components lie in `[0, 1]`.
    pub fn is_normalized(self) -> bool {
        (0.0..=1.0).contains(&self.u) && (0.0..=1.0).contains(&self.v)
    }
}

/// Opaque sRGB fill colour, written as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` literal.
    pub const fn from_u32(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    /// Parse `#rrggbb` (the leading `#` is optional, case-insensitive).
    pub fn parse_hex(s: &str) -> TrivistaResult<Self> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(TrivistaError::validation(format!(
                "invalid hex colour '{s}', expected #rrggbb"
            )));
        }
        let rgb = u32::from_str_radix(hex, 16)
            .map_err(|e| TrivistaError::validation(format!("invalid hex colour '{s}': {e}")))?;
        Ok(Self::from_u32(rgb))
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Rgb8 {
    type Error = TrivistaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&value)
    }
}

impl From<Rgb8> for String {
    fn from(value: Rgb8) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
