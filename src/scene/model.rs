use crate::foundation::{
    core::{Canvas, Point, Rgb8, Uv},
    error::{TrivistaError, TrivistaResult},
    math::{polygon_signed_area, triangle_area},
};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
/// Visual layer a primitive belongs to, in back-to-front draw order.
pub enum Layer {
    Background,
    Spiral,
    Diamonds,
    Panels,
    Hills,
    Accents,
}

impl Layer {
    /// All layers in draw order.
    pub const ALL: [Layer; 6] = [
        Layer::Background,
        Layer::Spiral,
        Layer::Diamonds,
        Layer::Panels,
        Layer::Hills,
        Layer::Accents,
    ];

    /// Human-readable caption used for document comments.
    pub fn caption(self) -> &'static str {
        match self {
            Layer::Background => "Background sky gradient",
            Layer::Spiral => "Spiral of triangles (geometric antialiasing)",
            Layer::Diamonds => "Tiled diamond pattern",
            Layer::Panels => "Textured panels (texture antialiasing)",
            Layer::Hills => "Stylized hills (layered polygons)",
            Layer::Accents => "Foreground accent triangles",
        }
    }

    pub(crate) fn tag(self) -> u8 {
        self as u8
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Solid-filled triangle.
pub struct SolidTriangle {
    pub points: [Point; 3],
    pub fill: Rgb8,
}

impl SolidTriangle {
    pub fn new(a: Point, b: Point, c: Point, fill: Rgb8) -> Self {
        Self {
            points: [a, b, c],
            fill,
        }
    }

    pub fn area(&self) -> f64 {
        let [a, b, c] = self.points;
        triangle_area(a, b, c)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Triangle sampled from a declared texture.
///
/// `points[i]` pairs with `uvs[i]`; the arrays are never reordered independently.
pub struct TexturedTriangle {
    pub texture: String,
    pub points: [Point; 3],
    pub uvs: [Uv; 3],
}

impl TexturedTriangle {
    /// Build from `(point, uv)` pairs so the correspondence cannot drift.
    pub fn from_corners(texture: impl Into<String>, corners: [(Point, Uv); 3]) -> Self {
        Self {
            texture: texture.into(),
            points: corners.map(|(p, _)| p),
            uvs: corners.map(|(_, uv)| uv),
        }
    }

    /// Iterate `(point, uv)` pairs in vertex order.
    pub fn corners(&self) -> impl Iterator<Item = (Point, Uv)> + '_ {
        self.points.iter().copied().zip(self.uvs.iter().copied())
    }

    pub fn area(&self) -> f64 {
        let [a, b, c] = self.points;
        triangle_area(a, b, c)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Simple (possibly concave) solid outline; triangulation is left to the consumer.
pub struct Polygon {
    pub points: Vec<Point>,
    pub fill: Rgb8,
}

impl Polygon {
    pub fn new(points: Vec<Point>, fill: Rgb8) -> Self {
        Self { points, fill }
    }

    pub fn area(&self) -> f64 {
        polygon_signed_area(&self.points).abs()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Texture declared once per document and referenced by id.
pub struct TextureRef {
    pub id: String,
    /// Path relative to the project root; made document-relative at write time.
    pub path: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Geometry payload of a draw record.
pub enum Shape {
    Triangle(SolidTriangle),
    Polygon(Polygon),
    Textured(TexturedTriangle),
}

impl Shape {
    /// Vertices in emission order.
    pub fn points(&self) -> &[Point] {
        match self {
            Shape::Triangle(t) => &t.points,
            Shape::Polygon(p) => &p.points,
            Shape::Textured(t) => &t.points,
        }
    }
}

impl From<SolidTriangle> for Shape {
    fn from(value: SolidTriangle) -> Self {
        Shape::Triangle(value)
    }
}

impl From<Polygon> for Shape {
    fn from(value: Polygon) -> Self {
        Shape::Polygon(value)
    }
}

impl From<TexturedTriangle> for Shape {
    fn from(value: TexturedTriangle) -> Self {
        Shape::Textured(value)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One draw record: a shape tagged with its layer.
pub struct Primitive {
    pub layer: Layer,
    pub shape: Shape,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Complete, ordered scene handed to the serializer.
pub struct Scene {
    pub canvas: Canvas,
    pub textures: Vec<TextureRef>,
    /// Painter's order: later entries are drawn on top.
    pub primitives: Vec<Primitive>,
}

impl Scene {
    /// Primitives of one layer, in draw order.
    pub fn layer_primitives(&self, layer: Layer) -> impl Iterator<Item = &Shape> + '_ {
        self.primitives
            .iter()
            .filter(move |p| p.layer == layer)
            .map(|p| &p.shape)
    }

    pub fn count_in(&self, layer: Layer) -> usize {
        self.layer_primitives(layer).count()
    }

    pub fn textured_count(&self) -> usize {
        self.primitives
            .iter()
            .filter(|p| matches!(p.shape, Shape::Textured(_)))
            .count()
    }

    pub fn texture(&self, id: &str) -> Option<&TextureRef> {
        self.textures.iter().find(|t| t.id == id)
    }

    pub fn validate(&self) -> TrivistaResult<()> {
        Canvas::new(self.canvas.width, self.canvas.height)?;

        for (i, t) in self.textures.iter().enumerate() {
            if t.id.trim().is_empty() {
                return Err(TrivistaError::validation("texture id must be non-empty"));
            }
            if self.textures[..i].iter().any(|prev| prev.id == t.id) {
                return Err(TrivistaError::validation(format!(
                    "duplicate texture id '{}'",
                    t.id
                )));
            }
        }

        let mut prev_layer = Layer::Background;
        for (index, prim) in self.primitives.iter().enumerate() {
            if prim.layer < prev_layer {
                return Err(TrivistaError::validation(format!(
                    "primitive {index} on layer {:?} drawn after layer {prev_layer:?}",
                    prim.layer
                )));
            }
            prev_layer = prim.layer;

            let points = prim.shape.points();
            if points.len() < 3 {
                return Err(TrivistaError::validation(format!(
                    "primitive {index} has {} points, need at least 3",
                    points.len()
                )));
            }
            if !points.iter().all(|p| p.is_finite()) {
                return Err(TrivistaError::validation(format!(
                    "primitive {index} has non-finite coordinates"
                )));
            }

            if let Shape::Textured(t) = &prim.shape {
                if self.texture(&t.texture).is_none() {
                    return Err(TrivistaError::validation(format!(
                        "primitive {index} references undeclared texture '{}'",
                        t.texture
                    )));
                }
                if !t.uvs.iter().all(|uv| uv.is_normalized()) {
                    return Err(TrivistaError::validation(format!(
                        "primitive {index} has uvs outside [0, 1]"
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
