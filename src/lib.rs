//! trivista procedurally composes a static triangle scene for stress-testing a rasterizer's
//! antialiasing, and serializes it as an SVG document.
//!
//! # Pipeline overview
//!
//! 1. **Compose**: `SceneConfig + Canvas -> Scene` (pure, deterministic geometry, five layers
//!    drawn back to front: background, spiral, diamonds, textured panels, hills + accents)
//! 2. **Serialize**: `Scene -> markup` (`<polygon>`, `<texture>`, `<textri>` records)
//!
//! Layers are authored on an 800×800 reference frame and scaled onto other canvas sizes.
//! `compose(800, 800)` reproduces the reference scene coordinate for coordinate.
#![forbid(unsafe_code)]

mod compile;
mod compose;
mod config;
mod foundation;
mod layers;
mod scene;
mod serialize;

pub use compile::fingerprint::{SceneFingerprint, fingerprint_scene};
pub use compose::composer::{compose, try_compose};
pub use config::{SceneConfig, TextureConfig};
pub use foundation::core::{Canvas, Point, REFERENCE_SIZE, Rect, Rgb8, Uv, Vec2};
pub use foundation::error::{TrivistaError, TrivistaResult};
pub use layers::background::{LOWER_FILL, UPPER_FILL, background};
pub use layers::diamonds::{
    DIAMOND_PALETTE, DiamondCell, DiamondGrid, DiamondParams, MAX_AXIS_CELLS, MIN_STEP,
    cell_triangles, diamonds,
};
pub use layers::hills::{ACCENTS, HILLS, HillOutline, accents, hills};
pub use layers::panels::{
    PanelSpec, default_panels, panels, quad_to_triangles, rect_corners, uv_corners,
};
pub use layers::spiral::{Pinch, SPIRAL_PALETTE, SpiralParams, spiral};
pub use scene::builder::SceneBuilder;
pub use scene::model::{
    Layer, Polygon, Primitive, Scene, Shape, SolidTriangle, TextureRef, TexturedTriangle,
};
pub use serialize::paths::{normalize_rel_path, relative_to_document};
pub use serialize::svg::{
    SvgOptions, SvgWriter, fmt_points, fmt_points_spaced, fmt_uvs, to_svg_string, write_svg,
};
