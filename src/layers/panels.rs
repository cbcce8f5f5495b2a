use crate::{
    foundation::core::{Canvas, Point, Rect, Uv},
    foundation::error::{TrivistaError, TrivistaResult},
    scene::model::TexturedTriangle,
};

/// Corner order shared by canvas rectangles and UV rectangles.
const TL: usize = 0;
const TR: usize = 1;
const BR: usize = 2;
const BL: usize = 3;

/// Split along the TL-BR diagonal.
const QUAD_SPLIT: [[usize; 3]; 2] = [[TL, TR, BR], [TL, BR, BL]];

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One textured panel: a reference-frame rectangle and the texture region mapped onto it.
pub struct PanelSpec {
    pub rect: Rect,
    pub uv_min: Uv,
    pub uv_max: Uv,
}

impl PanelSpec {
    pub const fn new(rect: Rect, uv_min: Uv, uv_max: Uv) -> Self {
        Self {
            rect,
            uv_min,
            uv_max,
        }
    }

    pub fn validate(&self) -> TrivistaResult<()> {
        if !(self.rect.width() > 0.0 && self.rect.height() > 0.0) {
            return Err(TrivistaError::validation(
                "panel rect must have positive width and height",
            ));
        }
        if !self.uv_min.is_normalized() || !self.uv_max.is_normalized() {
            return Err(TrivistaError::validation("panel uvs must lie in [0, 1]"));
        }
        Ok(())
    }
}

pub fn default_panels() -> Vec<PanelSpec> {
    vec![
        PanelSpec::new(
            Rect::new(120.0, 464.0, 340.0, 624.0),
            Uv::new(0.2, 0.25),
            Uv::new(0.55, 0.6),
        ),
        PanelSpec::new(
            Rect::new(416.0, 496.0, 596.0, 626.0),
            Uv::new(0.5, 0.1),
            Uv::new(0.9, 0.5),
        ),
        PanelSpec::new(
            Rect::new(544.0, 416.0, 634.0, 511.0),
            Uv::new(0.1, 0.6),
            Uv::new(0.35, 0.9),
        ),
    ]
}

/// Corners of `rect` in TL, TR, BR, BL order.
pub fn rect_corners(rect: Rect) -> [Point; 4] {
    [
        Point::new(rect.x0, rect.y0),
        Point::new(rect.x1, rect.y0),
        Point::new(rect.x1, rect.y1),
        Point::new(rect.x0, rect.y1),
    ]
}

/// UV corners of the region `min..max`, in the same order as [`rect_corners`].
pub fn uv_corners(min: Uv, max: Uv) -> [Uv; 4] {
    [
        Uv::new(min.u, min.v),
        Uv::new(max.u, min.v),
        Uv::new(max.u, max.v),
        Uv::new(min.u, max.v),
    ]
}

/// Decompose a quad into two textured triangles sharing the corner-0/corner-2 diagonal.
pub fn quad_to_triangles(texture: &str, corners: [Point; 4], uvs: [Uv; 4]) -> [TexturedTriangle; 2] {
    QUAD_SPLIT.map(|idx| {
        TexturedTriangle::from_corners(texture, idx.map(|i| (corners[i], uvs[i])))
    })
}

pub fn panels(canvas: Canvas, texture: &str, specs: &[PanelSpec]) -> Vec<TexturedTriangle> {
    specs
        .iter()
        .flat_map(|spec| {
            let rect = canvas.rect_from_reference(spec.rect);
            quad_to_triangles(texture, rect_corners(rect), uv_corners(spec.uv_min, spec.uv_max))
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/layers/panels.rs"]
mod tests;
