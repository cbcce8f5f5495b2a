use super::*;
use crate::scene::builder::SceneBuilder;

fn tri(fill: u32) -> SolidTriangle {
    SolidTriangle::new(
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(0.0, 10.0),
        Rgb8::from_u32(fill),
    )
}

fn textured(texture: &str) -> TexturedTriangle {
    TexturedTriangle::from_corners(
        texture,
        [
            (Point::new(0.0, 0.0), Uv::new(0.0, 0.0)),
            (Point::new(4.0, 0.0), Uv::new(1.0, 0.0)),
            (Point::new(4.0, 4.0), Uv::new(1.0, 1.0)),
        ],
    )
}

#[test]
fn from_corners_keeps_point_uv_alignment() {
    let t = textured("map");
    let pairs: Vec<_> = t.corners().collect();
    assert_eq!(pairs[1], (Point::new(4.0, 0.0), Uv::new(1.0, 0.0)));
    assert_eq!(pairs[2], (Point::new(4.0, 4.0), Uv::new(1.0, 1.0)));
    assert_eq!(t.area(), 8.0);
}

#[test]
fn counts_by_layer_and_kind() {
    let scene = SceneBuilder::new(Canvas::reference())
        .texture("map", "tex.png")
        .unwrap()
        .push(Layer::Background, tri(0x000000))
        .push(Layer::Background, tri(0x111111))
        .push(Layer::Panels, textured("map"))
        .push(Layer::Accents, tri(0x222222))
        .build()
        .unwrap();

    assert_eq!(scene.count_in(Layer::Background), 2);
    assert_eq!(scene.count_in(Layer::Spiral), 0);
    assert_eq!(scene.count_in(Layer::Accents), 1);
    assert_eq!(scene.textured_count(), 1);
    assert_eq!(scene.texture("map").unwrap().path, "tex.png");
}

#[test]
fn validate_rejects_undeclared_texture() {
    let res = SceneBuilder::new(Canvas::reference())
        .push(Layer::Panels, textured("missing"))
        .build();
    assert!(res.is_err());
}

#[test]
fn validate_rejects_out_of_order_layers() {
    let res = SceneBuilder::new(Canvas::reference())
        .push(Layer::Accents, tri(0x000000))
        .push(Layer::Background, tri(0x000000))
        .build();
    assert!(res.is_err());
}

#[test]
fn validate_rejects_short_polygons_and_nan() {
    let short = Polygon::new(vec![Point::ZERO, Point::new(1.0, 1.0)], Rgb8::new(0, 0, 0));
    assert!(
        SceneBuilder::new(Canvas::reference())
            .push(Layer::Hills, short)
            .build()
            .is_err()
    );

    let mut bad = tri(0x000000);
    bad.points[1].x = f64::NAN;
    assert!(
        SceneBuilder::new(Canvas::reference())
            .push(Layer::Background, bad)
            .build()
            .is_err()
    );
}

#[test]
fn validate_rejects_uvs_outside_unit_square() {
    let mut t = textured("map");
    t.uvs[0] = Uv::new(1.5, 0.0);
    let res = SceneBuilder::new(Canvas::reference())
        .texture("map", "tex.png")
        .unwrap()
        .push(Layer::Panels, t)
        .build();
    assert!(res.is_err());
}

#[test]
fn polygon_area_ignores_winding() {
    let cw = Polygon::new(
        vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(3.0, 2.0),
            Point::new(0.0, 2.0),
        ],
        Rgb8::new(1, 2, 3),
    );
    let mut ccw = cw.clone();
    ccw.points.reverse();
    assert_eq!(cw.area(), 6.0);
    assert_eq!(ccw.area(), 6.0);
}

#[test]
fn json_roundtrip_preserves_scene() {
    let scene = SceneBuilder::new(Canvas::reference())
        .texture("map", "tex.png")
        .unwrap()
        .push(Layer::Spiral, tri(0x3b82f6))
        .push(Layer::Panels, textured("map"))
        .build()
        .unwrap();
    let s = serde_json::to_string_pretty(&scene).unwrap();
    let de: Scene = serde_json::from_str(&s).unwrap();
    assert_eq!(de, scene);
    assert!(s.contains("\"#3b82f6\""));
    assert!(s.contains("\"spiral\""));
}
