use choreo_core::pose::{PartialPose, Pose};
use choreo_core::segment::{SegmentSpec, SegmentTable};
use choreo_core::smoothing::{advance, blend_toward, Smoothing};
use choreo_core::{Actor, ActorId, ConfigError};
use glam::Vec3;

fn still_actor() -> Actor {
    let id = ActorId::new("s");
    let table = SegmentTable::from_specs(&id, &Pose::default(), &[SegmentSpec::new(0.0, 1.0)])
        .unwrap();
    Actor::new(id, table)
}

fn target() -> Pose {
    PartialPose::new()
        .with_position(Vec3::new(1.0, -2.0, 0.5))
        .with_rotation(Vec3::new(0.0, 1.0, 0.0))
        .resolve(&Pose::default())
}

#[test]
fn distance_strictly_decreases_without_overshoot() {
    let mut actor = still_actor();
    let target = target();
    let smoothing = Smoothing::from_per_tick(0.1).unwrap();
    let mut prev = actor.actual().transform_distance(&target);
    for _ in 0..60 {
        let pose = advance(&mut actor, &target, 1.0 / 60.0, smoothing);
        let d = pose.transform_distance(&target);
        assert!(d < prev, "distance did not shrink: {d} >= {prev}");
        assert!(pose.position.x <= target.position.x);
        assert!(pose.position.y >= target.position.y);
        prev = d;
    }
}

#[test]
fn per_tick_rate_matches_fixed_blend_at_sixty_fps() {
    let smoothing = Smoothing::from_per_tick(0.1).unwrap();
    assert!((smoothing.factor(1.0 / 60.0) - 0.1).abs() < 1e-5);
}

#[test]
fn convergence_is_frame_rate_independent() {
    let smoothing = Smoothing::from_per_tick(0.1).unwrap();
    let target = target();

    let mut fast = still_actor();
    for _ in 0..120 {
        advance(&mut fast, &target, 1.0 / 120.0, smoothing);
    }
    let mut slow = still_actor();
    for _ in 0..30 {
        advance(&mut slow, &target, 1.0 / 30.0, smoothing);
    }
    assert!(fast.actual().transform_distance(slow.actual()) < 1e-4);
}

#[test]
fn zero_delta_leaves_pose_alone() {
    let mut actor = still_actor();
    let before = *actor.actual();
    let pose = advance(&mut actor, &target(), 0.0, Smoothing::from_per_tick(0.5).unwrap());
    assert_eq!(pose, before);
}

#[test]
fn actor_override_wins_over_scene_rate() {
    let mut actor = still_actor().with_smoothing(Smoothing::instant());
    let target = target();
    let pose = advance(&mut actor, &target, 1.0 / 60.0, Smoothing::from_per_tick(0.1).unwrap());
    assert_eq!(pose.position, target.position);
}

#[test]
fn blend_keeps_opacity_and_visibility() {
    let mut actual = Pose {
        opacity: 0.3,
        visible: false,
        ..Pose::default()
    };
    blend_toward(&mut actual, &target(), 1.0);
    assert_eq!(actual.opacity, 0.3);
    assert!(!actual.visible);
}

#[test]
fn invalid_rates_are_rejected() {
    for rate in [0.0, -0.1, 1.5, f32::NAN] {
        assert!(matches!(
            Smoothing::from_per_tick(rate),
            Err(ConfigError::InvalidTuning { .. })
        ));
    }
    assert!(Smoothing::per_second(0.0).is_err());
    assert_eq!(Smoothing::from_per_tick(1.0).unwrap().factor(0.016), 1.0);
}
