//! Pointer parallax: a small rotation offset layered on top of the
//! scroll-driven rotation. The overlay is additive and is never stored back
//! into an actor, so re-evaluating every tick cannot accumulate drift.

use crate::constants::{
    AMBIENT_SWAY_AMPLITUDE, AMBIENT_SWAY_RATE, DEFAULT_PARALLAX_FOLLOW_PER_SEC,
    DEFAULT_PARALLAX_INTENSITY,
};
use crate::smoothing::{follow, Smoothing};
use glam::{Vec2, Vec3};
use serde::Deserialize;

/// Map window-space pointer coordinates to \[-1, 1\] with y pointing up.
#[inline]
pub fn normalize_pointer(position: Vec2, viewport: Vec2) -> Vec2 {
    if !(viewport.x > 0.0 && viewport.y > 0.0) {
        return Vec2::ZERO;
    }
    let x = (position.x / viewport.x) * 2.0 - 1.0;
    let y = -(position.y / viewport.y) * 2.0 + 1.0;
    Vec2::new(x, y).clamp(Vec2::NEG_ONE, Vec2::ONE)
}

/// Low-amplitude oscillation independent of pointer and scroll.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AmbientSway {
    pub amplitude: Vec2,
    /// Radians per second; x uses sine, y uses cosine.
    pub rate: Vec2,
}

impl Default for AmbientSway {
    fn default() -> Self {
        Self {
            amplitude: Vec2::from(AMBIENT_SWAY_AMPLITUDE),
            rate: Vec2::from(AMBIENT_SWAY_RATE),
        }
    }
}

impl AmbientSway {
    pub const NONE: AmbientSway = AmbientSway {
        amplitude: Vec2::ZERO,
        rate: Vec2::ZERO,
    };

    #[inline]
    pub fn sample(&self, time: f32) -> Vec2 {
        Vec2::new(
            self.amplitude.x * (self.rate.x * time).sin(),
            self.amplitude.y * (self.rate.y * time).cos(),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxConfig {
    /// Rotation offset in radians for a pointer at the viewport edge.
    pub intensity: f32,
    pub follow: Smoothing,
    pub ambient: AmbientSway,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            intensity: DEFAULT_PARALLAX_INTENSITY,
            follow: Smoothing::per_second(DEFAULT_PARALLAX_FOLLOW_PER_SEC)
                .unwrap_or_else(|_| Smoothing::instant()),
            ambient: AmbientSway::default(),
        }
    }
}

/// Which rotation the overlay is summed onto.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParallaxBase {
    /// The evaluator's unsmoothed target rotation (`base_rotation`).
    #[default]
    Target,
    /// The actor's smoothed rotation.
    Smoothed,
}

/// Per-actor parallax response. Pointer x drives yaw (rotation.y) and pointer
/// y drives pitch (rotation.x).
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ParallaxBinding {
    #[serde(default = "unit_vec2")]
    pub weight: Vec2,
    #[serde(default = "unit_vec2")]
    pub ambient: Vec2,
    #[serde(default)]
    pub base: ParallaxBase,
}

fn unit_vec2() -> Vec2 {
    Vec2::ONE
}

impl Default for ParallaxBinding {
    fn default() -> Self {
        Self {
            weight: Vec2::ONE,
            ambient: Vec2::ONE,
            base: ParallaxBase::Target,
        }
    }
}

/// Pointer target and its smoothed follower, one per mounted scene.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParallaxState {
    target: Vec2,
    smoothed: Vec2,
}

impl ParallaxState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn smoothed(&self) -> Vec2 {
        self.smoothed
    }

    pub fn set_target(&mut self, ndc: Vec2) {
        if ndc.is_finite() {
            self.target = ndc.clamp(Vec2::NEG_ONE, Vec2::ONE);
        }
    }

    pub fn pointer_moved(&mut self, position: Vec2, viewport: Vec2) {
        self.set_target(normalize_pointer(position, viewport));
    }

    pub fn advance(&mut self, dt: f32, rate: Smoothing) {
        let factor = rate.factor(dt);
        self.smoothed.x = follow(self.smoothed.x, self.target.x, factor);
        self.smoothed.y = follow(self.smoothed.y, self.target.y, factor);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// `base + smoothed * intensity * weight + sway * ambient`, as a new value.
#[inline]
pub fn overlay(
    base: Vec3,
    smoothed: Vec2,
    time: f32,
    config: &ParallaxConfig,
    binding: &ParallaxBinding,
) -> Vec3 {
    let influence = smoothed * config.intensity * binding.weight;
    let sway = config.ambient.sample(time) * binding.ambient;
    Vec3::new(
        base.x + influence.y + sway.y,
        base.y + influence.x + sway.x,
        base.z,
    )
}
