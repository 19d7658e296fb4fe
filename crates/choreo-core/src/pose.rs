//! Pose value types.
//!
//! A [`Pose`] is recomputed every tick and never patched in place across
//! ticks: the evaluator produces a fresh target and the smoothing layer blends
//! the actor's actual pose toward it. [`PartialPose`] is the authored form used
//! by segment tables, where any field may be left to inherit.

use glam::Vec3;
use serde::Deserialize;

/// Full transform plus visibility of one actor at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    /// Euler angles in radians (XYZ).
    pub rotation: Vec3,
    /// Per-axis scale; uniform scale is stored splatted.
    pub scale: Vec3,
    pub opacity: f32,
    pub visible: bool,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            opacity: 1.0,
            visible: true,
        }
    }
}

impl Pose {
    /// Componentwise interpolation of the transform fields. Opacity and
    /// visibility are carried over from `self`.
    #[inline]
    pub fn lerp_transform(&self, other: &Pose, s: f32) -> Pose {
        Pose {
            position: self.position.lerp(other.position, s),
            rotation: self.rotation.lerp(other.rotation, s),
            scale: self.scale.lerp(other.scale, s),
            ..*self
        }
    }

    /// Largest absolute difference across every transform channel.
    pub fn transform_distance(&self, other: &Pose) -> f32 {
        let d = (self.position - other.position)
            .abs()
            .max((self.rotation - other.rotation).abs())
            .max((self.scale - other.scale).abs());
        d.max_element()
    }

    #[inline]
    pub fn get(&self, field: PoseField) -> f32 {
        match field {
            PoseField::PositionX => self.position.x,
            PoseField::PositionY => self.position.y,
            PoseField::PositionZ => self.position.z,
            PoseField::RotationX => self.rotation.x,
            PoseField::RotationY => self.rotation.y,
            PoseField::RotationZ => self.rotation.z,
            PoseField::Scale | PoseField::ScaleX => self.scale.x,
            PoseField::ScaleY => self.scale.y,
            PoseField::ScaleZ => self.scale.z,
        }
    }

    /// Add `delta` to one channel. `PoseField::Scale` offsets all three axes.
    #[inline]
    pub fn offset(&mut self, field: PoseField, delta: f32) {
        match field {
            PoseField::PositionX => self.position.x += delta,
            PoseField::PositionY => self.position.y += delta,
            PoseField::PositionZ => self.position.z += delta,
            PoseField::RotationX => self.rotation.x += delta,
            PoseField::RotationY => self.rotation.y += delta,
            PoseField::RotationZ => self.rotation.z += delta,
            PoseField::Scale => self.scale += Vec3::splat(delta),
            PoseField::ScaleX => self.scale.x += delta,
            PoseField::ScaleY => self.scale.y += delta,
            PoseField::ScaleZ => self.scale.z += delta,
        }
    }
}

/// Addresses a single scalar channel of a pose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub enum PoseField {
    #[serde(rename = "position.x")]
    PositionX,
    #[serde(rename = "position.y")]
    PositionY,
    #[serde(rename = "position.z")]
    PositionZ,
    #[serde(rename = "rotation.x")]
    RotationX,
    #[serde(rename = "rotation.y")]
    RotationY,
    #[serde(rename = "rotation.z")]
    RotationZ,
    #[serde(rename = "scale")]
    Scale,
    #[serde(rename = "scale.x")]
    ScaleX,
    #[serde(rename = "scale.y")]
    ScaleY,
    #[serde(rename = "scale.z")]
    ScaleZ,
}

/// Authored scale: a bare number in scene files means uniform scale.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scale {
    Uniform(f32),
    PerAxis(Vec3),
}

impl Scale {
    #[inline]
    pub fn to_vec3(self) -> Vec3 {
        match self {
            Scale::Uniform(s) => Vec3::splat(s),
            Scale::PerAxis(v) => v,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PartialPose {
    #[serde(default)]
    pub position: Option<Vec3>,
    #[serde(default)]
    pub rotation: Option<Vec3>,
    #[serde(default)]
    pub scale: Option<Scale>,
}

impl PartialPose {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = Some(rotation);
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = Some(Scale::PerAxis(scale));
        self
    }

    pub fn with_uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Some(Scale::Uniform(scale));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.position.is_none() && self.rotation.is_none() && self.scale.is_none()
    }

    /// Fill every missing field from `fallback`.
    pub fn resolve(&self, fallback: &Pose) -> Pose {
        Pose {
            position: self.position.unwrap_or(fallback.position),
            rotation: self.rotation.unwrap_or(fallback.rotation),
            scale: self.scale.map(Scale::to_vec3).unwrap_or(fallback.scale),
            ..*fallback
        }
    }
}
