use crate::{
    foundation::core::Canvas,
    foundation::error::{TrivistaError, TrivistaResult},
    scene::model::{Layer, Primitive, Scene, Shape, TextureRef},
};

/// Incremental scene assembly in painter's order.
pub struct SceneBuilder {
    canvas: Canvas,
    textures: Vec<TextureRef>,
    primitives: Vec<Primitive>,
}

impl SceneBuilder {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            textures: Vec::new(),
            primitives: Vec::new(),
        }
    }

    pub fn texture(
        mut self,
        id: impl Into<String>,
        path: impl Into<String>,
    ) -> TrivistaResult<Self> {
        let id = id.into();
        if self.textures.iter().any(|t| t.id == id) {
            return Err(TrivistaError::validation(format!("duplicate texture id '{id}'")));
        }
        self.textures.push(TextureRef {
            id,
            path: path.into(),
        });
        Ok(self)
    }

    /// Declare a texture the caller guarantees is unique.
    pub(crate) fn declare_texture(mut self, texture: TextureRef) -> Self {
        self.textures.push(texture);
        self
    }

    pub fn push(mut self, layer: Layer, shape: impl Into<Shape>) -> Self {
        self.primitives.push(Primitive {
            layer,
            shape: shape.into(),
        });
        self
    }

    pub fn extend<S, I>(mut self, layer: Layer, shapes: I) -> Self
    where
        S: Into<Shape>,
        I: IntoIterator<Item = S>,
    {
        self.primitives.extend(shapes.into_iter().map(|s| Primitive {
            layer,
            shape: s.into(),
        }));
        self
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn build(self) -> TrivistaResult<Scene> {
        let scene = self.build_unchecked();
        scene.validate()?;
        Ok(scene)
    }

    /// Assemble without validation; the composer produces well-formed scenes by construction.
    pub(crate) fn build_unchecked(self) -> Scene {
        Scene {
            canvas: self.canvas,
            textures: self.textures,
            primitives: self.primitives,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/builder.rs"]
mod tests;
