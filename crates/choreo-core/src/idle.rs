//! Time-based idle motion and phase-based flourishes layered on top of the
//! interpolated pose.

use crate::pose::{Pose, PoseField};
use serde::Deserialize;
use std::f32::consts::{PI, TAU};

/// Sinusoidal wobble driven by wall-clock time only, so it keeps running while
/// the scroll position is still.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct IdleModifier {
    pub field: PoseField,
    pub amplitude: f32,
    /// Cycles per second.
    pub frequency: f32,
    #[serde(default)]
    pub phase: f32,
}

impl IdleModifier {
    pub fn new(field: PoseField, amplitude: f32, frequency: f32) -> Self {
        Self {
            field,
            amplitude,
            frequency,
            phase: 0.0,
        }
    }

    #[inline]
    pub fn sample(&self, time: f32) -> f32 {
        self.amplitude * (TAU * self.frequency * time + self.phase).sin()
    }
}

/// Bounce/nod over a segment's eased phase: `amplitude * sin(π * half_cycles * phase)`.
///
/// Whole half cycles are zero at both ends of the segment, which keeps
/// adjacent segments continuous.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Flourish {
    pub field: PoseField,
    pub amplitude: f32,
    pub half_cycles: u32,
}

impl Flourish {
    #[inline]
    pub fn sample(&self, phase: f32) -> f32 {
        self.amplitude * (PI * self.half_cycles as f32 * phase).sin()
    }
}

pub fn apply_idle(pose: &mut Pose, modifiers: &[IdleModifier], time: f32, weight: f32) {
    for m in modifiers {
        pose.offset(m.field, weight * m.sample(time));
    }
}

/// Per-segment weights for segment-scoped idle modifiers.
///
/// The active segment's weight follows 1 and every other weight follows 0 in
/// wall-clock time, so crossing a boundary fades idle sets instead of popping.
#[derive(Clone, Debug, PartialEq)]
pub struct IdleMixer {
    weights: Vec<f32>,
}

impl IdleMixer {
    pub fn new(segment_count: usize, active: usize) -> Self {
        let mut mixer = Self {
            weights: vec![0.0; segment_count],
        };
        mixer.snap(active);
        mixer
    }

    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Move every weight toward its goal by `factor` (already dt-adjusted).
    pub fn advance(&mut self, active: usize, factor: f32) {
        let factor = factor.clamp(0.0, 1.0);
        for (i, w) in self.weights.iter_mut().enumerate() {
            let goal = if i == active { 1.0 } else { 0.0 };
            *w += (goal - *w) * factor;
        }
    }

    pub fn snap(&mut self, active: usize) {
        for (i, w) in self.weights.iter_mut().enumerate() {
            *w = if i == active { 1.0 } else { 0.0 };
        }
    }
}
