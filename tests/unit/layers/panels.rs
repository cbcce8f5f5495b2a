use super::*;

#[test]
fn three_default_panels_make_six_triangles() {
    let tris = panels(Canvas::reference(), "map", &default_panels());
    assert_eq!(tris.len(), 6);
    assert!(tris.iter().all(|t| t.texture == "map"));
}

#[test]
fn first_panel_matches_reference_literals() {
    let tris = panels(Canvas::reference(), "map", &default_panels());
    assert_eq!(
        tris[0].points,
        [
            Point::new(120.0, 464.0),
            Point::new(340.0, 464.0),
            Point::new(340.0, 624.0)
        ]
    );
    assert_eq!(
        tris[0].uvs,
        [Uv::new(0.2, 0.25), Uv::new(0.55, 0.25), Uv::new(0.55, 0.6)]
    );
    assert_eq!(
        tris[1].points,
        [
            Point::new(120.0, 464.0),
            Point::new(340.0, 624.0),
            Point::new(120.0, 624.0)
        ]
    );
    assert_eq!(
        tris[1].uvs,
        [Uv::new(0.2, 0.25), Uv::new(0.55, 0.6), Uv::new(0.2, 0.6)]
    );
}

#[test]
fn pair_covers_rectangle_once_via_shared_diagonal() {
    let canvas = Canvas::new(1024, 768).unwrap();
    let specs = default_panels();
    let tris = panels(canvas, "map", &specs);
    for (spec, pair) in specs.iter().zip(tris.chunks(2)) {
        let rect = canvas.rect_from_reference(spec.rect);
        let sum = pair[0].area() + pair[1].area();
        assert!((sum - rect.area()).abs() < 1e-6);

        // Shared diagonal: corner 0 and corner 2 of the quad.
        assert_eq!(pair[0].points[0], pair[1].points[0]);
        assert_eq!(pair[0].points[2], pair[1].points[1]);
        assert_eq!(pair[0].uvs[0], pair[1].uvs[0]);
        assert_eq!(pair[0].uvs[2], pair[1].uvs[1]);
    }
}

#[test]
fn uv_index_tracks_logical_corner() {
    let rect = Rect::new(10.0, 20.0, 30.0, 60.0);
    let spec = PanelSpec::new(rect, Uv::new(0.1, 0.2), Uv::new(0.3, 0.4));
    let tris = panels(Canvas::reference(), "map", &[spec]);
    let corners = rect_corners(rect);
    let uvs = uv_corners(spec.uv_min, spec.uv_max);
    for t in &tris {
        for (p, uv) in t.corners() {
            let k = corners.iter().position(|c| *c == p).unwrap();
            assert_eq!(uv, uvs[k]);
        }
    }
}

#[test]
fn validate_rejects_degenerate_panels() {
    for spec in default_panels() {
        assert!(spec.validate().is_ok());
    }
    let flat = PanelSpec::new(
        Rect::new(0.0, 0.0, 10.0, 0.0),
        Uv::new(0.0, 0.0),
        Uv::new(1.0, 1.0),
    );
    assert!(flat.validate().is_err());
    let bad_uv = PanelSpec::new(
        Rect::new(0.0, 0.0, 10.0, 10.0),
        Uv::new(0.0, 0.0),
        Uv::new(1.2, 1.0),
    );
    assert!(bad_uv.validate().is_err());
}
