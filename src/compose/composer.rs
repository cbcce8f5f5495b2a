use crate::{
    config::SceneConfig,
    foundation::core::Canvas,
    foundation::error::TrivistaResult,
    layers::{background::background, diamonds::diamonds, hills, panels::panels, spiral::spiral},
    scene::builder::SceneBuilder,
    scene::model::{Layer, Scene, TextureRef},
};

/// Compose the reference scene for a `width × height` canvas.
///
/// Pure and deterministic: equal inputs give identical primitive sequences. Any positive size
/// is accepted; layers authored on the 800×800 reference frame are scaled onto the canvas.
pub fn compose(width: u32, height: u32) -> Scene {
    compose_with(&SceneConfig::default(), Canvas { width, height })
}

/// Compose with explicit parameters. `config` is trusted; external input goes through
/// [`try_compose`].
#[tracing::instrument(skip(config))]
pub(crate) fn compose_with(config: &SceneConfig, canvas: Canvas) -> Scene {
    let texture = TextureRef {
        id: config.texture.id.clone(),
        path: config.texture.path.clone(),
    };

    let back = background(canvas);
    let wedges = spiral(canvas, &config.spiral);
    let tiles = diamonds(canvas, &config.diamonds);
    let quads = panels(canvas, &texture.id, &config.panels);
    let ridges = hills::hills(canvas);
    let accents = hills::accents(canvas);

    tracing::debug!(
        background = back.len(),
        spiral = wedges.len(),
        diamonds = tiles.len(),
        panels = quads.len(),
        hills = ridges.len(),
        accents = accents.len(),
        "layers generated"
    );

    SceneBuilder::new(canvas)
        .declare_texture(texture)
        .extend(Layer::Background, back)
        .extend(Layer::Spiral, wedges)
        .extend(Layer::Diamonds, tiles)
        .extend(Layer::Panels, quads)
        .extend(Layer::Hills, ridges)
        .extend(Layer::Accents, accents)
        .build_unchecked()
}

/// Validate canvas and configuration, then compose.
pub fn try_compose(config: &SceneConfig, width: u32, height: u32) -> TrivistaResult<Scene> {
    let canvas = Canvas::new(width, height)?;
    config.validate()?;
    let scene = compose_with(config, canvas);
    scene.validate()?;
    Ok(scene)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/composer.rs"]
mod tests;
