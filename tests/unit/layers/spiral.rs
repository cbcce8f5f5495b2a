use super::*;

#[test]
fn emits_arms_times_segments() {
    let params = SpiralParams::default();
    let tris = spiral(Canvas::reference(), &params);
    assert_eq!(tris.len(), 7 * 24);
    assert_eq!(tris.len(), params.wedge_count());

    let small = SpiralParams {
        num_arms: 3,
        segments_per_arm: 5,
        ..SpiralParams::default()
    };
    assert_eq!(spiral(Canvas::new(320, 200).unwrap(), &small).len(), 15);
}

#[test]
fn adjacent_wedges_share_outer_vertex() {
    let params = SpiralParams::default();
    let tris = spiral(Canvas::reference(), &params);
    let m = params.segments_per_arm as usize;
    for arm in tris.chunks(m) {
        for pair in arm.windows(2) {
            assert_eq!(pair[1].points[0], pair[0].points[1]);
        }
    }
}

#[test]
fn arms_share_a_single_colour_cycling_the_palette() {
    let params = SpiralParams {
        num_arms: 9,
        ..SpiralParams::default()
    };
    let tris = spiral(Canvas::reference(), &params);
    let m = params.segments_per_arm as usize;
    for (arm, wedges) in tris.chunks(m).enumerate() {
        let expected = SPIRAL_PALETTE[arm % SPIRAL_PALETTE.len()];
        assert!(wedges.iter().all(|t| t.fill == expected));
    }
}

#[test]
fn arm_starts_at_r_min_on_its_base_angle() {
    let params = SpiralParams::default();
    let tris = spiral(Canvas::reference(), &params);
    let first = tris[0].points[0];
    assert!((first.x - 440.0).abs() < 1e-9);
    assert!((first.y - 360.0).abs() < 1e-9);

    // Two full turns bring the last wedge back to the base angle at r_max.
    let last = tris[23].points[1];
    assert!((last.x - 660.0).abs() < 1e-9);
    assert!((last.y - 360.0).abs() < 1e-9);
}

#[test]
fn pinch_point_sits_inside_the_outer_edge() {
    let center = Point::new(400.0, 360.0);
    for pinch in [Pinch::Inset(15.0), Pinch::Scale(0.85)] {
        let params = SpiralParams {
            pinch,
            ..SpiralParams::default()
        };
        for t in spiral(Canvas::reference(), &params) {
            let r0 = t.points[0].distance(center);
            let r1 = t.points[1].distance(center);
            let rp = t.points[2].distance(center);
            assert!(rp < (r0 + r1) * 0.5, "{pinch:?}");
        }
    }
}

#[test]
fn inset_pinch_radius_is_exact() {
    let params = SpiralParams::default();
    let tris = spiral(Canvas::reference(), &params);
    let center = Point::new(400.0, 360.0);
    // Segment 0: t_mid = 1/48, r = 40 + 220/48, minus 15.
    let expected = 40.0 + 220.0 / 48.0 - 15.0;
    assert!((tris[0].points[2].distance(center) - expected).abs() < 1e-9);
}

#[test]
fn radii_scale_with_smaller_canvas_side() {
    let params = SpiralParams::default();
    let tris = spiral(Canvas::new(400, 1600).unwrap(), &params);
    let center = Point::new(200.0, 720.0);
    assert!((tris[0].points[0].distance(center) - 20.0).abs() < 1e-9);
}

#[test]
fn validate_rejects_bad_params() {
    assert!(SpiralParams::default().validate().is_ok());
    let cases = [
        SpiralParams {
            num_arms: 0,
            ..SpiralParams::default()
        },
        SpiralParams {
            segments_per_arm: 0,
            ..SpiralParams::default()
        },
        SpiralParams {
            r_min: 300.0,
            ..SpiralParams::default()
        },
        SpiralParams {
            turns: 0.0,
            ..SpiralParams::default()
        },
        SpiralParams {
            pinch: Pinch::Scale(1.5),
            ..SpiralParams::default()
        },
        SpiralParams {
            palette: vec![],
            ..SpiralParams::default()
        },
    ];
    for c in cases {
        assert!(c.validate().is_err(), "{c:?}");
    }
}

#[test]
fn empty_palette_falls_back_to_default_colours() {
    let canvas = Canvas::reference();
    let params = SpiralParams {
        palette: vec![],
        ..SpiralParams::default()
    };
    assert_eq!(spiral(canvas, &params), spiral(canvas, &SpiralParams::default()));
}
