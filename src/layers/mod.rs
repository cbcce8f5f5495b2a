//! Per-layer geometry generators. Each is a pure function of the canvas and its parameters.

pub(crate) mod background;
pub(crate) mod diamonds;
pub(crate) mod hills;
pub(crate) mod panels;
pub(crate) mod spiral;
