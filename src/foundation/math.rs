use crate::foundation::core::Point;

pub(crate) const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// FNV-1a 64 run over the same byte stream in two independently seeded lanes.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DualFnv {
    lanes: [u64; 2],
}

impl DualFnv {
    pub(crate) fn new(seeds: [u64; 2]) -> Self {
        Self { lanes: seeds }
    }

    pub(crate) fn bytes(&mut self, bytes: &[u8]) {
        for lane in &mut self.lanes {
            *lane = bytes
                .iter()
                .fold(*lane, |h, &b| (h ^ u64::from(b)).wrapping_mul(FNV_PRIME));
        }
    }

    pub(crate) fn byte(&mut self, v: u8) {
        self.bytes(&[v]);
    }

    pub(crate) fn word(&mut self, v: u64) {
        self.bytes(&v.to_le_bytes());
    }

    /// Exact bit pattern, so `0.0` and `-0.0` differ.
    pub(crate) fn float(&mut self, v: f64) {
        self.word(v.to_bits());
    }

    /// Length-prefixed, so adjacent strings cannot alias.
    pub(crate) fn text(&mut self, s: &str) {
        self.word(s.len() as u64);
        self.bytes(s.as_bytes());
    }

    pub(crate) fn finish(self) -> [u64; 2] {
        self.lanes
    }
}

#[inline]
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Point at `radius` from `center` along `angle` (radians, y-down canvas space).
#[inline]
pub(crate) fn polar(center: Point, radius: f64, angle: f64) -> Point {
    let (sin, cos) = angle.sin_cos();
    Point::new(center.x + radius * cos, center.y + radius * sin)
}

/// Unsigned area of the triangle `a, b, c`.
pub(crate) fn triangle_area(a: Point, b: Point, c: Point) -> f64 {
    ((b - a).cross(c - a) * 0.5).abs()
}

/// Signed shoelace area of a closed outline (positive for clockwise in y-down space).
pub(crate) fn polygon_signed_area(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut acc = 0.0;
    for (i, p) in points.iter().enumerate() {
        let q = points[(i + 1) % points.len()];
        acc += p.x * q.y - q.x * p.y;
    }
    acc * 0.5
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
