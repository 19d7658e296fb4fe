//! Named easing curves.
//!
//! Every curve is a pure `f32 -> f32` map over the normalized phase. Input is
//! clamped to \[0, 1\]; `backOut` and `elasticOut` overshoot on purpose.

use serde::Deserialize;
use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
pub enum Easing {
    #[default]
    #[serde(rename = "linear", alias = "none")]
    Linear,
    #[serde(rename = "quadIn", alias = "power1.in")]
    QuadIn,
    #[serde(rename = "quadOut", alias = "power1.out")]
    QuadOut,
    #[serde(rename = "quadInOut", alias = "power1.inOut")]
    QuadInOut,
    #[serde(rename = "cubicIn", alias = "power2.in")]
    CubicIn,
    #[serde(rename = "cubicOut", alias = "power2.out")]
    CubicOut,
    #[serde(rename = "cubicInOut", alias = "power2.inOut")]
    CubicInOut,
    #[serde(rename = "quartIn", alias = "power3.in")]
    QuartIn,
    #[serde(rename = "quartOut", alias = "power3.out")]
    QuartOut,
    #[serde(rename = "quartInOut", alias = "power3.inOut")]
    QuartInOut,
    #[serde(rename = "sineInOut", alias = "sine.inOut")]
    SineInOut,
    #[serde(rename = "backOut", alias = "back.out")]
    BackOut,
    #[serde(rename = "elasticOut", alias = "elastic.out")]
    ElasticOut,
}

impl Easing {
    pub const ALL: [Easing; 13] = [
        Easing::Linear,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::QuadInOut,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::QuartIn,
        Easing::QuartOut,
        Easing::QuartInOut,
        Easing::SineInOut,
        Easing::BackOut,
        Easing::ElasticOut,
    ];

    /// Curves that stay inside \[0, 1\] and never move backwards.
    pub fn is_monotonic(self) -> bool {
        !matches!(self, Easing::BackOut | Easing::ElasticOut)
    }

    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Easing::Linear => t,
            Easing::QuadIn => t * t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::QuadInOut => in_out(t, 2),
            Easing::CubicIn => t * t * t,
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::CubicInOut => cubic_in_out(t),
            Easing::QuartIn => t.powi(4),
            Easing::QuartOut => 1.0 - (1.0 - t).powi(4),
            Easing::QuartInOut => in_out(t, 4),
            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Easing::BackOut => back_out(t),
            Easing::ElasticOut => elastic_out(t),
        }
    }
}

/// `t < 0.5 ? 4t³ : 1 - (-2t + 2)³ / 2`
#[inline]
pub fn cubic_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[inline]
fn in_out(t: f32, power: i32) -> f32 {
    if t < 0.5 {
        2.0_f32.powi(power - 1) * t.powi(power)
    } else {
        1.0 - (-2.0 * t + 2.0).powi(power) / 2.0
    }
}

#[inline]
fn back_out(t: f32) -> f32 {
    const C1: f32 = 1.701_58;
    const C3: f32 = C1 + 1.0;
    let u = t - 1.0;
    1.0 + C3 * u * u * u + C1 * u * u
}

#[inline]
fn elastic_out(t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let c4 = TAU / 3.0;
    2.0_f32.powf(-10.0 * t) * ((t * 10.0 - 0.75) * c4).sin() + 1.0
}
