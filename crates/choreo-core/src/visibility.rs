//! Show/hide and fade gating per actor, independent of pose.

use crate::actor::ActorId;
use crate::constants::RANGE_EPSILON;
use crate::error::ConfigError;
use serde::Deserialize;

/// A progress range where the actor is shown. `end` is inclusive.
///
/// Opacity ramps 0 -> 1 over `[start, start + fade_in]`, holds at 1, and
/// ramps 1 -> 0 over `[end - fade_out, end]`. A zero span means no ramp on
/// that side.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct VisibilityWindow {
    pub start: f32,
    pub end: f32,
    #[serde(default)]
    pub fade_in: f32,
    #[serde(default)]
    pub fade_out: f32,
}

impl VisibilityWindow {
    pub fn new(start: f32, end: f32) -> Self {
        Self {
            start,
            end,
            fade_in: 0.0,
            fade_out: 0.0,
        }
    }

    pub fn fade_in(mut self, span: f32) -> Self {
        self.fade_in = span;
        self
    }

    pub fn fade_out(mut self, span: f32) -> Self {
        self.fade_out = span;
        self
    }

    #[inline]
    pub fn contains(&self, t: f32) -> bool {
        t >= self.start && t <= self.end
    }

    pub fn opacity_at(&self, t: f32) -> f32 {
        if !self.contains(t) {
            return 0.0;
        }
        let ramp_in = if self.fade_in > 0.0 {
            ((t - self.start) / self.fade_in).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let ramp_out = if self.fade_out > 0.0 {
            ((self.end - t) / self.fade_out).clamp(0.0, 1.0)
        } else {
            1.0
        };
        ramp_in.min(ramp_out)
    }

    fn check(&self) -> Result<(), &'static str> {
        let finite = [self.start, self.end, self.fade_in, self.fade_out]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err("non-finite value");
        }
        if self.start < 0.0 || self.end > 1.0 || self.start >= self.end {
            return Err("range must satisfy 0 <= start < end <= 1");
        }
        if self.fade_in < 0.0 || self.fade_out < 0.0 {
            return Err("fade spans must not be negative");
        }
        let span = self.end - self.start;
        if self.fade_in > span + RANGE_EPSILON || self.fade_out > span + RANGE_EPSILON {
            return Err("fade span longer than the window");
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visibility {
    pub opacity: f32,
    pub visible: bool,
}

impl Visibility {
    pub const HIDDEN: Visibility = Visibility {
        opacity: 0.0,
        visible: false,
    };
    pub const SHOWN: Visibility = Visibility {
        opacity: 1.0,
        visible: true,
    };

    #[inline]
    pub fn from_opacity(opacity: f32) -> Self {
        Self {
            opacity,
            visible: opacity > 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityRule {
    actor: ActorId,
    windows: Vec<VisibilityWindow>,
}

impl VisibilityRule {
    /// Windows are sorted by start. Overlapping windows are rejected; windows
    /// that only touch are allowed and the later one wins at the shared
    /// instant.
    pub fn new(actor: ActorId, mut windows: Vec<VisibilityWindow>) -> Result<Self, ConfigError> {
        for (index, w) in windows.iter().enumerate() {
            w.check().map_err(|reason| ConfigError::InvalidWindow {
                actor: actor.clone(),
                index,
                reason,
            })?;
        }
        windows.sort_by(|a, b| a.start.total_cmp(&b.start));
        for pair in windows.windows(2) {
            if pair[1].start < pair[0].end {
                return Err(ConfigError::OverlappingWindows {
                    actor: actor.clone(),
                    first_start: pair[0].start,
                    first_end: pair[0].end,
                    second_start: pair[1].start,
                    second_end: pair[1].end,
                });
            }
        }
        Ok(Self { actor, windows })
    }

    pub fn actor(&self) -> &ActorId {
        &self.actor
    }

    pub fn windows(&self) -> &[VisibilityWindow] {
        &self.windows
    }

    pub fn evaluate(&self, t: f32) -> Visibility {
        self.windows
            .iter()
            .rev()
            .find(|w| w.contains(t))
            .map(|w| Visibility::from_opacity(w.opacity_at(t)))
            .unwrap_or(Visibility::HIDDEN)
    }
}

/// Actors without a rule are always shown.
pub fn evaluate_visibility(rule: Option<&VisibilityRule>, t: f32) -> Visibility {
    rule.map(|r| r.evaluate(t)).unwrap_or(Visibility::SHOWN)
}
