use choreo_core::visibility::{evaluate_visibility, Visibility, VisibilityRule, VisibilityWindow};
use choreo_core::{ActorId, ConfigError};

fn rule(windows: Vec<VisibilityWindow>) -> Result<VisibilityRule, ConfigError> {
    VisibilityRule::new(ActorId::new("panel"), windows)
}

#[test]
fn fade_in_ramps_then_holds() {
    let r = rule(vec![VisibilityWindow::new(0.2, 0.35).fade_in(0.15)]).unwrap();
    let at_start = r.evaluate(0.2);
    assert_eq!(at_start.opacity, 0.0);
    assert!(!at_start.visible);
    let mid = r.evaluate(0.275);
    assert!((mid.opacity - 0.5).abs() < 1e-4);
    assert!(mid.visible);
    let end = r.evaluate(0.35);
    assert!((end.opacity - 1.0).abs() < 1e-4);
    assert!(end.visible);
}

#[test]
fn outside_every_window_is_hidden() {
    let r = rule(vec![VisibilityWindow::new(0.2, 0.35)]).unwrap();
    assert_eq!(r.evaluate(0.1), Visibility::HIDDEN);
    assert_eq!(r.evaluate(0.36), Visibility::HIDDEN);
}

#[test]
fn fade_out_reaches_zero_at_end() {
    let r = rule(vec![VisibilityWindow::new(0.0, 0.1).fade_out(0.1)]).unwrap();
    assert_eq!(r.evaluate(0.0).opacity, 1.0);
    assert!((r.evaluate(0.05).opacity - 0.5).abs() < 1e-4);
    assert!(r.evaluate(0.1).opacity.abs() < 1e-6);
}

#[test]
fn overlapping_windows_are_rejected() {
    let err = rule(vec![
        VisibilityWindow::new(0.5, 0.8),
        VisibilityWindow::new(0.2, 0.6),
    ])
    .unwrap_err();
    match err {
        ConfigError::OverlappingWindows {
            first_start,
            second_start,
            ..
        } => {
            assert_eq!(first_start, 0.2);
            assert_eq!(second_start, 0.5);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn touching_windows_hand_over_to_the_later_one() {
    let r = rule(vec![
        VisibilityWindow::new(0.0, 0.5).fade_out(0.1),
        VisibilityWindow::new(0.5, 1.0),
    ])
    .unwrap();
    assert_eq!(r.evaluate(0.5), Visibility::SHOWN);
    assert_eq!(r.windows()[0].start, 0.0);
}

#[test]
fn malformed_windows_are_rejected() {
    for w in [
        VisibilityWindow::new(0.4, 0.4),
        VisibilityWindow::new(0.2, 1.5),
        VisibilityWindow::new(0.2, 0.3).fade_in(0.5),
        VisibilityWindow::new(0.2, 0.3).fade_out(-0.1),
    ] {
        assert!(matches!(
            rule(vec![w]),
            Err(ConfigError::InvalidWindow { .. })
        ));
    }
}

#[test]
fn actors_without_rules_are_always_shown() {
    assert_eq!(evaluate_visibility(None, 0.9), Visibility::SHOWN);
}

#[test]
fn windows_parse_with_optional_fades() {
    let w: VisibilityWindow =
        serde_json::from_str(r#"{ "start": 0.8, "end": 1.0, "fadeIn": 0.15 }"#).unwrap();
    assert_eq!(w, VisibilityWindow::new(0.8, 1.0).fade_in(0.15));
}
