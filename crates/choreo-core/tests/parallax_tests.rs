use choreo_core::parallax::{
    normalize_pointer, overlay, AmbientSway, ParallaxBinding, ParallaxConfig, ParallaxState,
};
use choreo_core::scroll::{clamp_progress, ScrollState};
use choreo_core::Smoothing;
use glam::{Vec2, Vec3};

fn no_sway() -> ParallaxConfig {
    ParallaxConfig {
        intensity: 0.05,
        follow: Smoothing::instant(),
        ambient: AmbientSway::NONE,
    }
}

#[test]
fn pointer_is_normalized_with_y_up() {
    let viewport = Vec2::new(800.0, 600.0);
    assert_eq!(normalize_pointer(Vec2::new(400.0, 300.0), viewport), Vec2::ZERO);
    assert_eq!(normalize_pointer(Vec2::new(0.0, 0.0), viewport), Vec2::new(-1.0, 1.0));
    assert_eq!(normalize_pointer(Vec2::new(800.0, 600.0), viewport), Vec2::new(1.0, -1.0));
    assert_eq!(normalize_pointer(Vec2::new(2000.0, -50.0), viewport), Vec2::new(1.0, 1.0));
}

#[test]
fn degenerate_viewport_gives_centered_pointer() {
    assert_eq!(normalize_pointer(Vec2::new(10.0, 10.0), Vec2::ZERO), Vec2::ZERO);
}

#[test]
fn overlay_maps_pointer_x_to_yaw_and_y_to_pitch() {
    let base = Vec3::new(0.1, 0.2, 0.3);
    let binding = ParallaxBinding {
        weight: Vec2::new(1.0, 0.5),
        ..ParallaxBinding::default()
    };
    let out = overlay(base, Vec2::new(1.0, 1.0), 0.0, &no_sway(), &binding);
    assert!((out.y - (0.2 + 0.05)).abs() < 1e-6);
    assert!((out.x - (0.1 + 0.025)).abs() < 1e-6);
    assert_eq!(out.z, 0.3);
}

#[test]
fn overlay_does_not_accumulate() {
    let base = Vec3::new(0.0, 0.4, 0.0);
    let config = ParallaxConfig::default();
    let binding = ParallaxBinding::default();
    let first = overlay(base, Vec2::new(0.5, -0.5), 2.0, &config, &binding);
    let second = overlay(base, Vec2::new(0.5, -0.5), 2.0, &config, &binding);
    assert_eq!(first, second);
    assert_eq!(overlay(base, Vec2::ZERO, 0.0, &no_sway(), &binding), base);
}

#[test]
fn ambient_sway_runs_without_pointer_input() {
    let config = ParallaxConfig::default();
    let binding = ParallaxBinding::default();
    let a = overlay(Vec3::ZERO, Vec2::ZERO, 1.0, &config, &binding);
    let b = overlay(Vec3::ZERO, Vec2::ZERO, 3.0, &config, &binding);
    assert_ne!(a, b);
    assert!(a.abs().max_element() < 0.01);
}

#[test]
fn smoothed_pointer_follows_target() {
    let mut state = ParallaxState::new();
    state.pointer_moved(Vec2::new(800.0, 300.0), Vec2::new(800.0, 600.0));
    assert_eq!(state.target(), Vec2::new(1.0, 0.0));
    let follow = Smoothing::per_second(4.0).unwrap();
    let mut prev = 0.0;
    for _ in 0..30 {
        state.advance(1.0 / 60.0, follow);
        assert!(state.smoothed().x > prev);
        assert!(state.smoothed().x < 1.0);
        prev = state.smoothed().x;
    }
    state.reset();
    assert_eq!(state.smoothed(), Vec2::ZERO);
}

#[test]
fn non_finite_pointer_is_ignored() {
    let mut state = ParallaxState::new();
    state.set_target(Vec2::new(0.5, 0.5));
    state.set_target(Vec2::new(f32::NAN, 0.0));
    assert_eq!(state.target(), Vec2::new(0.5, 0.5));
}

#[test]
fn binding_parses_with_defaults() {
    let binding: ParallaxBinding = serde_json::from_str(r#"{ "weight": [0.3, 0.2] }"#).unwrap();
    assert_eq!(binding.weight, Vec2::new(0.3, 0.2));
    assert_eq!(binding.ambient, Vec2::ONE);
}

#[test]
fn scroll_progress_is_clamped() {
    assert_eq!(clamp_progress(-0.3), 0.0);
    assert_eq!(clamp_progress(1.3), 1.0);
    assert_eq!(clamp_progress(f32::INFINITY), 0.0);

    let mut scroll = ScrollState::new(0.0);
    assert!(scroll.set_raw(1.02));
    assert!(!scroll.set_raw(0.4));
    scroll.advance(1.0 / 60.0);
    assert_eq!(scroll.progress(), 0.4);
}

#[test]
fn scroll_scrub_lags_then_catches_up() {
    let mut scroll = ScrollState::new(0.5);
    scroll.set_raw(0.0);
    scroll.set_raw(1.0);
    assert_eq!(scroll.progress(), 0.0);
    scroll.advance(0.5);
    let lagged = scroll.progress();
    assert!((lagged - (1.0 - (-1.0f32).exp())).abs() < 1e-5);
    scroll.snap();
    assert_eq!(scroll.progress(), 1.0);
}

#[test]
fn first_scroll_update_primes_the_follower() {
    let mut scroll = ScrollState::default();
    scroll.set_raw(0.6);
    assert_eq!(scroll.progress(), 0.6);
    assert_eq!(scroll.raw(), 0.6);
}
