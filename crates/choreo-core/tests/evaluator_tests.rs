use choreo_core::evaluator::{evaluate_pose, scripted_pose};
use choreo_core::idle::{Flourish, IdleMixer, IdleModifier};
use choreo_core::pose::{PartialPose, Pose, PoseField};
use choreo_core::segment::{SegmentSpec, SegmentTable};
use choreo_core::{steve_scene, Actor, ActorId, Easing};
use glam::Vec3;

fn scenario_actor() -> Actor {
    let id = ActorId::new("A");
    let hold = PartialPose::new().with_position(Vec3::new(0.4, -0.2, 0.0));
    let specs = [
        SegmentSpec::new(0.0, 0.1).from(hold).to(hold),
        SegmentSpec::new(0.1, 0.25)
            .from(hold)
            .to(PartialPose::new().with_position(Vec3::new(-0.2, -0.1, 0.0)))
            .easing(Easing::CubicInOut),
    ];
    let table = SegmentTable::from_specs(&id, &Pose::default(), &specs).unwrap();
    Actor::new(id, table)
}

#[test]
fn midpoint_of_eased_segment_lands_halfway() {
    let mut actor = scenario_actor();
    let pose = evaluate_pose(&mut actor, 0.175, 0.0);
    assert!((pose.position - Vec3::new(0.1, -0.15, 0.0)).abs().max_element() < 1e-4);
}

#[test]
fn hold_segment_keeps_its_pose() {
    let actor = scenario_actor();
    for t in [0.0, 0.03, 0.09] {
        let pose = scripted_pose(&actor.table, t);
        assert_eq!(pose.position, Vec3::new(0.4, -0.2, 0.0));
    }
}

#[test]
fn progress_outside_unit_range_is_clamped() {
    let mut actor = scenario_actor();
    let below = evaluate_pose(&mut actor, -0.3, 1.0);
    let zero = evaluate_pose(&mut actor, 0.0, 1.0);
    assert_eq!(below, zero);
    let above = evaluate_pose(&mut actor, 1.3, 1.0);
    let one = evaluate_pose(&mut actor, 1.0, 1.0);
    assert_eq!(above, one);
    assert!((one.position - Vec3::new(-0.2, -0.1, 0.0)).abs().max_element() < 1e-6);
}

#[test]
fn evaluation_records_base_rotation() {
    let id = ActorId::new("spin");
    let specs = [SegmentSpec::new(0.0, 1.0).to(PartialPose::new().with_rotation(Vec3::Y))];
    let table = SegmentTable::from_specs(&id, &Pose::default(), &specs).unwrap();
    let mut actor = Actor::new(id, table);
    let pose = evaluate_pose(&mut actor, 0.5, 0.0);
    assert_eq!(actor.base_rotation(), pose.rotation);
    assert!((pose.rotation.y - 0.5).abs() < 1e-6);
}

#[test]
fn flourish_vanishes_at_segment_ends() {
    let id = ActorId::new("bounce");
    let specs = [SegmentSpec::new(0.0, 1.0).flourish(Flourish {
        field: PoseField::PositionY,
        amplitude: 0.5,
        half_cycles: 3,
    })];
    let table = SegmentTable::from_specs(&id, &Pose::default(), &specs).unwrap();
    assert!(scripted_pose(&table, 0.0).position.y.abs() < 1e-6);
    assert!(scripted_pose(&table, 1.0).position.y.abs() < 1e-5);
    let peak = scripted_pose(&table, 1.0 / 6.0).position.y;
    assert!((peak - 0.5).abs() < 1e-4);
}

#[test]
fn actor_idle_runs_on_time_not_progress() {
    let id = ActorId::new("idle");
    let table = SegmentTable::from_specs(&id, &Pose::default(), &[SegmentSpec::new(0.0, 1.0)])
        .unwrap();
    let mut actor = Actor::new(id, table).with_idle(IdleModifier::new(PoseField::RotationY, 0.1, 1.0));
    let a = evaluate_pose(&mut actor, 0.4, 0.25);
    let b = evaluate_pose(&mut actor, 0.4, 0.75);
    assert!((a.rotation.y - 0.1).abs() < 1e-5);
    assert!((b.rotation.y + 0.1).abs() < 1e-5);
}

#[test]
fn segment_idle_is_weighted_by_the_mixer() {
    let id = ActorId::new("mix");
    let specs = [
        SegmentSpec::new(0.0, 0.5).idle(IdleModifier::new(PoseField::PositionX, 1.0, 1.0)),
        SegmentSpec::new(0.5, 1.0),
    ];
    let table = SegmentTable::from_specs(&id, &Pose::default(), &specs).unwrap();
    let mut actor = Actor::new(id, table);
    assert_eq!(actor.idle_weights(), &[1.0, 0.0]);

    // Scrolled into the second segment, but the first idle set has not
    // faded yet.
    let pose = evaluate_pose(&mut actor, 0.75, 0.25);
    assert!((pose.position.x - 1.0).abs() < 1e-5);
}

#[test]
fn idle_mixer_crossfades_toward_active_segment() {
    let mut mixer = IdleMixer::new(3, 0);
    mixer.advance(2, 0.5);
    assert_eq!(mixer.weights(), &[0.5, 0.0, 0.5]);
    mixer.advance(2, 0.5);
    assert_eq!(mixer.weights(), &[0.25, 0.0, 0.75]);
    mixer.snap(1);
    assert_eq!(mixer.weights(), &[0.0, 1.0, 0.0]);
}

#[test]
fn built_in_scene_is_continuous_across_boundaries() {
    let scene = steve_scene().unwrap();
    let eps = 1e-5;
    for actor in &scene.actors {
        assert!(
            actor.table.boundary_mismatches().is_empty(),
            "{} has a pop",
            actor.id
        );
        for seg in actor.table.segments() {
            if seg.end >= 1.0 {
                continue;
            }
            let before = scripted_pose(&actor.table, seg.end - eps);
            let after = scripted_pose(&actor.table, seg.end + eps);
            let jump = before.transform_distance(&after);
            assert!(
                jump < 0.01,
                "{} jumps by {jump} at {}",
                actor.id,
                seg.end
            );
        }
    }
}
