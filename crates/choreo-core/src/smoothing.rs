//! Exponential follow from an actor's actual pose toward its target.
//!
//! Each step covers `1 - exp(-k * dt)` of the remaining distance, so the same
//! rate produces the same motion at 30, 60 or 144 fps. The coefficient never
//! leaves \[0, 1\], which rules out overshoot.

use crate::actor::Actor;
use crate::constants::REFERENCE_FRAME_RATE;
use crate::error::ConfigError;
use crate::pose::Pose;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Smoothing {
    per_second: f32,
}

impl Smoothing {
    /// Convergence rate `k` in 1/s. Infinity snaps.
    pub fn per_second(k: f32) -> Result<Self, ConfigError> {
        if k.is_nan() || k <= 0.0 {
            return Err(ConfigError::InvalidTuning {
                name: "smoothing.perSecond",
                value: k,
            });
        }
        Ok(Self { per_second: k })
    }

    /// Convert a per-tick blend factor authored at the reference frame rate.
    ///
    /// `0.1` reproduces `actual += (target - actual) * 0.1` at 60 fps.
    pub fn from_per_tick(rate: f32) -> Result<Self, ConfigError> {
        if rate.is_nan() || rate <= 0.0 || rate > 1.0 {
            return Err(ConfigError::InvalidTuning {
                name: "smoothingRate",
                value: rate,
            });
        }
        if rate >= 1.0 {
            return Ok(Self::instant());
        }
        Ok(Self {
            per_second: -(1.0 - rate).ln() * REFERENCE_FRAME_RATE,
        })
    }

    pub fn instant() -> Self {
        Self {
            per_second: f32::INFINITY,
        }
    }

    pub fn rate(&self) -> f32 {
        self.per_second
    }

    /// Fraction of the remaining distance to cover over `dt` seconds.
    #[inline]
    pub fn factor(&self, dt: f32) -> f32 {
        if dt.is_nan() || dt <= 0.0 {
            return 0.0;
        }
        if self.per_second.is_infinite() {
            return 1.0;
        }
        (1.0 - (-self.per_second * dt).exp()).clamp(0.0, 1.0)
    }
}

#[inline]
pub fn follow(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// Blend the transform of `actual` toward `target`. Opacity and visibility
/// are untouched; the visibility gate owns them.
pub fn blend_toward(actual: &mut Pose, target: &Pose, factor: f32) {
    actual.position = actual.position.lerp(target.position, factor);
    actual.rotation = actual.rotation.lerp(target.rotation, factor);
    actual.scale = actual.scale.lerp(target.scale, factor);
}

/// Advance the actor's actual pose one tick toward `target`.
pub fn advance(actor: &mut Actor, target: &Pose, dt: f32, smoothing: Smoothing) -> Pose {
    let factor = actor.smoothing.unwrap_or(smoothing).factor(dt);
    blend_toward(&mut actor.actual, target, factor);
    actor.actual
}
