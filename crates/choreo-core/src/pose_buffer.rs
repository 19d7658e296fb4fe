//! Flat pose export for hosts that pull poses instead of exposing nodes.

use crate::actor::ActorId;
use crate::host::{RenderNode, RenderTarget};
use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// One actor's pose as 11 contiguous floats:
/// position (3), rotation (3), scale (3), opacity, visible (0 or 1).
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct PackedPose {
    pub position: [f32; 3],
    pub rotation: [f32; 3],
    pub scale: [f32; 3],
    pub opacity: f32,
    pub visible: f32,
}

impl PackedPose {
    pub const FLOATS: usize = 11;
}

impl RenderNode for PackedPose {
    fn set_position(&mut self, position: Vec3) {
        self.position = position.to_array();
    }
    fn set_rotation(&mut self, rotation: Vec3) {
        self.rotation = rotation.to_array();
    }
    fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale.to_array();
    }
    fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
    }
    fn set_visible(&mut self, visible: bool) {
        self.visible = if visible { 1.0 } else { 0.0 };
    }
}

/// Fixed slots in the order the ids were given.
#[derive(Clone, Debug, Default)]
pub struct PoseBuffer {
    ids: Vec<ActorId>,
    slots: Vec<PackedPose>,
}

impl PoseBuffer {
    pub fn new(ids: impl IntoIterator<Item = ActorId>) -> Self {
        let ids: Vec<ActorId> = ids.into_iter().collect();
        let slots = vec![PackedPose::default(); ids.len()];
        Self { ids, slots }
    }

    pub fn ids(&self) -> &[ActorId] {
        &self.ids
    }

    pub fn slot(&self, id: &ActorId) -> Option<&PackedPose> {
        let i = self.ids.iter().position(|x| x == id)?;
        self.slots.get(i)
    }

    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.slots)
    }
}

impl RenderTarget for PoseBuffer {
    fn node_mut(&mut self, id: &ActorId) -> Option<&mut dyn RenderNode> {
        let i = self.ids.iter().position(|x| x == id)?;
        let slot = self.slots.get_mut(i)?;
        Some(slot)
    }
}
