use super::*;
use crate::foundation::core::{Point, Rgb8};
use crate::scene::model::SolidTriangle;

fn tri() -> SolidTriangle {
    SolidTriangle::new(
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(0.0, 1.0),
        Rgb8::new(0, 0, 0),
    )
}

#[test]
fn duplicate_texture_id_is_rejected() {
    let b = SceneBuilder::new(Canvas::reference())
        .texture("map", "a.png")
        .unwrap();
    assert!(b.texture("map", "b.png").is_err());
}

#[test]
fn extend_preserves_order_and_layer() {
    let b = SceneBuilder::new(Canvas::reference())
        .push(Layer::Background, tri())
        .extend(Layer::Spiral, vec![tri(), tri(), tri()]);
    assert_eq!(b.len(), 4);
    let scene = b.build().unwrap();
    let layers: Vec<_> = scene.primitives.iter().map(|p| p.layer).collect();
    assert_eq!(
        layers,
        vec![Layer::Background, Layer::Spiral, Layer::Spiral, Layer::Spiral]
    );
}

#[test]
fn empty_builder_builds_empty_scene() {
    let b = SceneBuilder::new(Canvas::new(10, 20).unwrap());
    assert!(b.is_empty());
    let scene = b.build().unwrap();
    assert!(scene.primitives.is_empty());
    assert_eq!(scene.canvas.height, 20);
}

#[test]
fn build_rejects_zero_canvas() {
    let canvas = Canvas {
        width: 0,
        height: 10,
    };
    assert!(SceneBuilder::new(canvas).build().is_err());
}
