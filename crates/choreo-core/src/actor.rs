use crate::evaluator::scripted_pose;
use crate::idle::{IdleMixer, IdleModifier};
use crate::parallax::ParallaxBinding;
use crate::pose::Pose;
use crate::segment::SegmentTable;
use crate::smoothing::Smoothing;
use glam::Vec3;
use serde::Deserialize;
use smallvec::SmallVec;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct ActorId(String);

impl ActorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ActorId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// An independently animated entity: the camera or one object group.
///
/// Created once at scene setup. `actual` is owned by the smoothing layer and
/// `base_rotation` is the evaluator's side channel for the parallax overlay.
#[derive(Clone, Debug)]
pub struct Actor {
    pub id: ActorId,
    pub table: SegmentTable,
    /// Applied in every segment.
    pub idle: SmallVec<[IdleModifier; 4]>,
    pub parallax: Option<ParallaxBinding>,
    /// Overrides the scene-wide smoothing rate.
    pub smoothing: Option<Smoothing>,
    pub(crate) actual: Pose,
    pub(crate) base_rotation: Vec3,
    pub(crate) mixer: IdleMixer,
}

impl Actor {
    pub fn new(id: ActorId, table: SegmentTable) -> Self {
        let start = scripted_pose(&table, 0.0);
        let mixer = IdleMixer::new(table.len(), table.sample(0.0).index);
        Self {
            id,
            table,
            idle: SmallVec::new(),
            parallax: None,
            smoothing: None,
            actual: start,
            base_rotation: start.rotation,
            mixer,
        }
    }

    pub fn with_idle(mut self, modifier: IdleModifier) -> Self {
        self.idle.push(modifier);
        self
    }

    pub fn with_parallax(mut self, binding: ParallaxBinding) -> Self {
        self.parallax = Some(binding);
        self
    }

    pub fn with_smoothing(mut self, smoothing: Smoothing) -> Self {
        self.smoothing = Some(smoothing);
        self
    }

    pub fn actual(&self) -> &Pose {
        &self.actual
    }

    pub fn base_rotation(&self) -> Vec3 {
        self.base_rotation
    }

    pub fn idle_weights(&self) -> &[f32] {
        self.mixer.weights()
    }

    /// Place the actor on its t = 0 pose without smoothing.
    pub fn snap_to_start(&mut self) {
        let start = scripted_pose(&self.table, 0.0);
        self.actual = start;
        self.base_rotation = start.rotation;
        self.mixer.snap(self.table.sample(0.0).index);
    }
}
