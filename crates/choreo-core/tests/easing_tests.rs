use choreo_core::easing::{cubic_in_out, Easing};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn cubic_in_out_hits_anchor_points() {
    assert!(approx(cubic_in_out(0.0), 0.0));
    assert!(approx(cubic_in_out(0.5), 0.5));
    assert!(approx(cubic_in_out(1.0), 1.0));
    assert!(approx(Easing::CubicInOut.apply(0.25), 0.0625));
}

#[test]
fn cubic_in_out_is_point_symmetric_about_center() {
    for i in 0..=100 {
        let t = i as f32 / 100.0;
        let lhs = cubic_in_out(t);
        let rhs = 1.0 - cubic_in_out(1.0 - t);
        assert!(approx(lhs, rhs), "asymmetric at t={t}: {lhs} vs {rhs}");
    }
}

#[test]
fn every_curve_maps_endpoints() {
    for easing in Easing::ALL {
        assert!(approx(easing.apply(0.0), 0.0), "{easing:?} at 0");
        assert!(approx(easing.apply(1.0), 1.0), "{easing:?} at 1");
    }
}

#[test]
fn monotonic_curves_never_move_backwards() {
    for easing in Easing::ALL.into_iter().filter(|e| e.is_monotonic()) {
        let mut prev = easing.apply(0.0);
        for i in 1..=200 {
            let v = easing.apply(i as f32 / 200.0);
            assert!(v + 1e-6 >= prev, "{easing:?} decreased at step {i}");
            assert!((0.0..=1.0 + 1e-6).contains(&v), "{easing:?} left [0,1]");
            prev = v;
        }
    }
}

#[test]
fn overshooting_curves_leave_unit_range() {
    let peak = (1..100)
        .map(|i| Easing::BackOut.apply(i as f32 / 100.0))
        .fold(f32::MIN, f32::max);
    assert!(peak > 1.0);
    assert!(!Easing::ElasticOut.is_monotonic());
}

#[test]
fn input_outside_unit_range_is_clamped() {
    assert_eq!(Easing::QuadIn.apply(-2.0), 0.0);
    assert_eq!(Easing::QuadIn.apply(3.0), 1.0);
    assert_eq!(Easing::Linear.apply(f32::NAN), 0.0);
}

#[test]
fn names_and_timeline_aliases_deserialize() {
    let e: Easing = serde_json::from_str("\"cubicInOut\"").unwrap();
    assert_eq!(e, Easing::CubicInOut);
    let e: Easing = serde_json::from_str("\"power2.inOut\"").unwrap();
    assert_eq!(e, Easing::CubicInOut);
    let e: Easing = serde_json::from_str("\"none\"").unwrap();
    assert_eq!(e, Easing::Linear);
    assert!(serde_json::from_str::<Easing>("\"bounce\"").is_err());
}
