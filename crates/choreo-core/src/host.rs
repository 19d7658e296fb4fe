//! Seams to the hosting layer: where progress, pointer and time come from, and
//! where finished poses go.
//!
//! Everything here is single-threaded. Sources push [`HostEvent`]s into a
//! shared [`EventSink`] whenever the host fires them; the engine drains the
//! sink once per tick so every actor sees the same progress snapshot.

use crate::actor::ActorId;
use crate::constants::MAX_FRAME_DELTA_SEC;
use crate::error::BindingError;
use crate::pose::Pose;
use glam::{Vec2, Vec3};
use instant::Instant;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Setters on one renderer-owned node.
pub trait RenderNode {
    fn set_position(&mut self, position: Vec3);
    fn set_rotation(&mut self, rotation: Vec3);
    fn set_scale(&mut self, scale: Vec3);
    fn set_opacity(&mut self, opacity: f32);
    fn set_visible(&mut self, visible: bool);
}

pub trait RenderTarget {
    fn node_mut(&mut self, id: &ActorId) -> Option<&mut dyn RenderNode>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostEvent {
    Progress(f32),
    /// Scroll geometry was re-measured (resize, orientation change).
    Refresh,
    PointerMoved {
        position: Vec2,
        viewport: Vec2,
    },
    /// Teardown asked for while the engine was busy; honoured on the next
    /// drain.
    Teardown,
}

#[derive(Clone, Debug, Default)]
pub struct EventSink {
    queue: Rc<RefCell<VecDeque<HostEvent>>>,
}

impl EventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: HostEvent) {
        self.queue.borrow_mut().push_back(event);
    }

    pub fn progress(&self, t: f32) {
        self.push(HostEvent::Progress(t));
    }

    pub fn refresh(&self) {
        self.push(HostEvent::Refresh);
    }

    pub fn pointer_moved(&self, position: Vec2, viewport: Vec2) {
        self.push(HostEvent::PointerMoved { position, viewport });
    }

    pub fn request_teardown(&self) {
        self.push(HostEvent::Teardown);
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    pub(crate) fn drain(&self) -> Vec<HostEvent> {
        self.queue.borrow_mut().drain(..).collect()
    }

    pub(crate) fn clear(&self) {
        self.queue.borrow_mut().clear();
    }
}

/// A host-level registration (event listener, frame callback) that the
/// engine releases on teardown. `cancel` must tolerate repeated calls.
pub trait Subscription {
    fn cancel(&mut self);
}

pub trait ScrollProgressSource {
    /// Start delivering `Progress` and `Refresh` events into `sink`.
    fn subscribe(&mut self, sink: EventSink) -> Box<dyn Subscription>;
}

pub trait PointerSource {
    /// Start delivering `PointerMoved` events into `sink`.
    fn subscribe(&mut self, sink: EventSink) -> Box<dyn Subscription>;
}

/// Time snapshot for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameClock {
    /// Seconds since the scene was mounted.
    pub elapsed: f32,
    /// Seconds since the previous tick.
    pub delta: f32,
}

impl FrameClock {
    pub fn new(elapsed: f32, delta: f32) -> Self {
        Self { elapsed, delta }
    }
}

/// Wall-clock [`FrameClock`] source. Deltas are capped so a stalled or
/// backgrounded frame does not teleport actors.
#[derive(Clone, Copy, Debug)]
pub struct InstantClock {
    origin: Instant,
    last: Instant,
}

impl Default for InstantClock {
    fn default() -> Self {
        Self::new()
    }
}

impl InstantClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            origin: now,
            last: now,
        }
    }

    pub fn tick(&mut self) -> FrameClock {
        let now = Instant::now();
        let delta = (now - self.last).as_secs_f32().min(MAX_FRAME_DELTA_SEC);
        self.last = now;
        FrameClock {
            elapsed: (now - self.origin).as_secs_f32(),
            delta,
        }
    }
}

/// One actor's output for one tick.
#[derive(Clone, Debug, PartialEq)]
pub struct ActorFrame {
    pub id: ActorId,
    pub pose: Pose,
}

/// Push a finished frame onto the renderer. Missing nodes are collected and
/// skipped; the remaining actors are still written.
pub fn write_frame(frames: &[ActorFrame], target: &mut dyn RenderTarget) -> Vec<BindingError> {
    let mut missing = Vec::new();
    for frame in frames {
        match target.node_mut(&frame.id) {
            Some(node) => {
                node.set_position(frame.pose.position);
                node.set_rotation(frame.pose.rotation);
                node.set_scale(frame.pose.scale);
                node.set_opacity(frame.pose.opacity);
                node.set_visible(frame.pose.visible);
            }
            None => missing.push(BindingError::MissingActor(frame.id.clone())),
        }
    }
    missing
}
