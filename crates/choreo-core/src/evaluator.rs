//! Pose evaluation: scroll progress (plus wall-clock time for idle motion) to
//! a target pose.

use crate::actor::Actor;
use crate::constants::IDLE_WEIGHT_EPSILON;
use crate::idle::apply_idle;
use crate::pose::Pose;
use crate::scroll::clamp_progress;
use crate::segment::SegmentTable;

/// The authored trajectory alone: interpolation and flourishes, no idle.
pub fn scripted_pose(table: &SegmentTable, t: f32) -> Pose {
    let sample = table.sample(clamp_progress(t));
    let seg = &table.segments()[sample.index];
    let mut pose = seg.from.lerp_transform(&seg.to, sample.phase);
    for f in &seg.flourishes {
        pose.offset(f.field, f.sample(sample.phase));
    }
    pose
}

/// Target pose for `actor` at progress `t` and wall-clock `time` seconds.
///
/// Writes `actor.base_rotation`; the actual pose is left to the smoothing
/// layer. Segment idle sets are weighted by the actor's idle mixer, which the
/// driver advances in time before calling this.
pub fn evaluate_pose(actor: &mut Actor, t: f32, time: f32) -> Pose {
    let mut pose = scripted_pose(&actor.table, t);
    apply_idle(&mut pose, &actor.idle, time, 1.0);
    for (seg, &weight) in actor
        .table
        .segments()
        .iter()
        .zip(actor.mixer.weights())
    {
        if weight > IDLE_WEIGHT_EPSILON {
            apply_idle(&mut pose, &seg.idle, time, weight);
        }
    }
    actor.base_rotation = pose.rotation;
    pose
}
