use super::*;

#[test]
fn canvas_rejects_zero_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert_eq!(Canvas::new(800, 800).unwrap(), Canvas::reference());
}

#[test]
fn reference_mapping_is_identity_at_800() {
    let c = Canvas::reference();
    let p = Point::new(123.5, 456.25);
    assert_eq!(c.from_reference(p), p);
    assert_eq!(c.uniform_scale(), 1.0);
}

#[test]
fn reference_mapping_scales_per_axis() {
    let c = Canvas::new(400, 1600).unwrap();
    assert_eq!(c.from_reference(Point::new(800.0, 800.0)), Point::new(400.0, 1600.0));
    assert_eq!(c.uniform_scale(), 0.5);
    assert_eq!(c.area_scale(), 1.0);

    let r = c.rect_from_reference(Rect::new(100.0, 100.0, 200.0, 300.0));
    assert_eq!(r, Rect::new(50.0, 200.0, 100.0, 600.0));
}

#[test]
fn hex_colour_parse_and_display() {
    let c = Rgb8::parse_hex("#3B82F6").unwrap();
    assert_eq!(c, Rgb8::new(0x3b, 0x82, 0xf6));
    assert_eq!(c.to_string(), "#3b82f6");
    assert_eq!(Rgb8::parse_hex("0a0e1a").unwrap(), Rgb8::from_u32(0x0a0e1a));
}

#[test]
fn hex_colour_rejects_malformed_input() {
    for bad in ["", "#fff", "#12345g", "#1234567", "red"] {
        assert!(Rgb8::parse_hex(bad).is_err(), "accepted {bad:?}");
    }
}

#[test]
fn colour_serializes_as_hex_string() {
    let json = serde_json::to_string(&Rgb8::from_u32(0x22c55e)).unwrap();
    assert_eq!(json, "\"#22c55e\"");
    let back: Rgb8 = serde_json::from_str("\"#f97316\"").unwrap();
    assert_eq!(back, Rgb8::from_u32(0xf97316));
    assert!(serde_json::from_str::<Rgb8>("\"nope\"").is_err());
}

#[test]
fn uv_normalized_bounds() {
    assert!(Uv::new(0.0, 1.0).is_normalized());
    assert!(!Uv::new(-0.01, 0.5).is_normalized());
    assert!(!Uv::new(0.5, 1.5).is_normalized());
}
