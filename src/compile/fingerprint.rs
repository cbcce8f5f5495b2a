use std::fmt;

use crate::{
    foundation::core::{Point, Rgb8},
    foundation::math::{DualFnv, FNV_OFFSET},
    scene::model::{Scene, Shape},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// 128-bit digest of a scene's exact geometry.
pub struct SceneFingerprint {
    pub hi: u64,
    pub lo: u64,
}

impl fmt::Display for SceneFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Hash canvas, textures and every primitive's layer, kind, colour, coordinates and UVs.
pub fn fingerprint_scene(scene: &Scene) -> SceneFingerprint {
    let mut h = DualFnv::new([FNV_OFFSET, 0x9ae1_6a3b_2f90_404f]);

    h.word(u64::from(scene.canvas.width));
    h.word(u64::from(scene.canvas.height));

    h.word(scene.textures.len() as u64);
    for tex in &scene.textures {
        h.text(&tex.id);
        h.text(&tex.path);
    }

    h.word(scene.primitives.len() as u64);
    for prim in &scene.primitives {
        h.byte(prim.layer.tag());
        match &prim.shape {
            Shape::Triangle(t) => {
                h.byte(0);
                hash_fill(&mut h, t.fill);
                hash_points(&mut h, &t.points);
            }
            Shape::Polygon(p) => {
                h.byte(1);
                hash_fill(&mut h, p.fill);
                hash_points(&mut h, &p.points);
            }
            Shape::Textured(t) => {
                h.byte(2);
                h.text(&t.texture);
                hash_points(&mut h, &t.points);
                for uv in &t.uvs {
                    h.float(uv.u);
                    h.float(uv.v);
                }
            }
        }
    }

    let [hi, lo] = h.finish();
    SceneFingerprint { hi, lo }
}

fn hash_points(h: &mut DualFnv, points: &[Point]) {
    h.word(points.len() as u64);
    for p in points {
        h.float(p.x);
        h.float(p.y);
    }
}

fn hash_fill(h: &mut DualFnv, c: Rgb8) {
    h.bytes(&[c.r, c.g, c.b]);
}

#[cfg(test)]
#[path = "../../tests/unit/compile/fingerprint.rs"]
mod tests;
