//! Segment tables: the per-actor, ordered list of progress ranges that drive
//! the pose evaluator.

use crate::actor::ActorId;
use crate::constants::{CONTINUITY_EPSILON, RANGE_EPSILON};
use crate::easing::Easing;
use crate::error::ConfigError;
use crate::idle::{Flourish, IdleModifier};
use crate::pose::{PartialPose, Pose};
use serde::Deserialize;
use smallvec::SmallVec;

/// A segment as written in a scene file. Missing `from` fields inherit the
/// previous segment's end pose; missing `to` fields hold `from`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SegmentSpec {
    pub start: f32,
    pub end: f32,
    #[serde(default)]
    pub from: PartialPose,
    #[serde(default)]
    pub to: PartialPose,
    #[serde(default)]
    pub easing: Easing,
    #[serde(default)]
    pub flourishes: SmallVec<[Flourish; 2]>,
    #[serde(default)]
    pub idle: SmallVec<[IdleModifier; 4]>,
}

impl SegmentSpec {
    pub fn new(start: f32, end: f32) -> Self {
        Self {
            start,
            end,
            ..Self::default()
        }
    }

    pub fn from(mut self, pose: PartialPose) -> Self {
        self.from = pose;
        self
    }

    pub fn to(mut self, pose: PartialPose) -> Self {
        self.to = pose;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn flourish(mut self, flourish: Flourish) -> Self {
        self.flourishes.push(flourish);
        self
    }

    pub fn idle(mut self, modifier: IdleModifier) -> Self {
        self.idle.push(modifier);
        self
    }
}

/// A resolved segment: both endpoint poses are complete.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub start: f32,
    pub end: f32,
    pub from: Pose,
    pub to: Pose,
    pub easing: Easing,
    pub flourishes: SmallVec<[Flourish; 2]>,
    pub idle: SmallVec<[IdleModifier; 4]>,
}

impl Segment {
    #[inline]
    pub fn span(&self) -> f32 {
        self.end - self.start
    }

    /// `clamp((t - start) / (end - start), 0, 1)`
    #[inline]
    pub fn local_phase(&self, t: f32) -> f32 {
        ((t - self.start) / self.span()).clamp(0.0, 1.0)
    }
}

/// Where a progress value lands in a table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentSample {
    pub index: usize,
    pub linear_phase: f32,
    /// `linear_phase` passed through the segment's easing.
    pub phase: f32,
}

/// Adjacent segments whose shared boundary values differ.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundaryMismatch {
    pub index: usize,
    pub progress: f32,
    pub distance: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SegmentTable {
    segments: Vec<Segment>,
}

impl SegmentTable {
    /// Validate an already-resolved list of segments.
    pub fn new(actor: &ActorId, segments: Vec<Segment>) -> Result<Self, ConfigError> {
        if segments.is_empty() {
            return Err(ConfigError::EmptySegmentTable {
                actor: actor.clone(),
            });
        }
        for (index, seg) in segments.iter().enumerate() {
            let in_range = seg.start.is_finite()
                && seg.end.is_finite()
                && seg.start >= 0.0
                && seg.end <= 1.0
                && seg.start < seg.end;
            if !in_range {
                return Err(ConfigError::InvalidSegmentRange {
                    actor: actor.clone(),
                    index,
                    start: seg.start,
                    end: seg.end,
                });
            }
        }
        for (index, pair) in segments.windows(2).enumerate() {
            if (pair[0].end - pair[1].start).abs() > RANGE_EPSILON {
                return Err(ConfigError::NonContiguous {
                    actor: actor.clone(),
                    index,
                    end: pair[0].end,
                    next_start: pair[1].start,
                });
            }
        }
        Ok(Self { segments })
    }

    /// Resolve authored specs against the actor's rest pose, then validate.
    pub fn from_specs(
        actor: &ActorId,
        rest: &Pose,
        specs: &[SegmentSpec],
    ) -> Result<Self, ConfigError> {
        let mut resolved = Vec::with_capacity(specs.len());
        let mut carry = *rest;
        for spec in specs {
            let from = spec.from.resolve(&carry);
            let to = spec.to.resolve(&from);
            resolved.push(Segment {
                start: spec.start,
                end: spec.end,
                from,
                to,
                easing: spec.easing,
                flourishes: spec.flourishes.clone(),
                idle: spec.idle.clone(),
            });
            carry = to;
        }
        Self::new(actor, resolved)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Pick the segment with `start <= t < end` (the last one also owns its
    /// end). Outside the table the nearest boundary segment holds at phase 0
    /// or 1; there is no extrapolation.
    pub fn sample(&self, t: f32) -> SegmentSample {
        let first = &self.segments[0];
        let last_index = self.segments.len() - 1;
        let last = &self.segments[last_index];
        if t < first.start {
            return SegmentSample {
                index: 0,
                linear_phase: 0.0,
                phase: 0.0,
            };
        }
        if t >= last.end {
            return SegmentSample {
                index: last_index,
                linear_phase: 1.0,
                phase: 1.0,
            };
        }
        let index = self
            .segments
            .partition_point(|s| s.end <= t)
            .min(last_index);
        let seg = &self.segments[index];
        let linear_phase = seg.local_phase(t);
        SegmentSample {
            index,
            linear_phase,
            phase: seg.easing.apply(linear_phase),
        }
    }

    /// Shared boundaries whose end/start poses differ by more than the
    /// continuity tolerance. Each one is a visible pop.
    pub fn boundary_mismatches(&self) -> Vec<BoundaryMismatch> {
        self.segments
            .windows(2)
            .enumerate()
            .filter_map(|(index, pair)| {
                let distance = pair[0].to.transform_distance(&pair[1].from);
                (distance > CONTINUITY_EPSILON).then_some(BoundaryMismatch {
                    index,
                    progress: pair[0].end,
                    distance,
                })
            })
            .collect()
    }
}
