//! The per-scene driver.
//!
//! One [`Choreographer`] exists per mounted scene and owns every piece of
//! mutable choreography state: actors, scroll and parallax followers, the
//! event inbox and the host subscriptions. Nothing is global, so two scenes
//! mounted side by side never share state.

use crate::actor::{Actor, ActorId};
use crate::error::{BindingError, ConfigError};
use crate::evaluator::{evaluate_pose, scripted_pose};
use crate::host::{
    write_frame, ActorFrame, EventSink, FrameClock, HostEvent, PointerSource, RenderTarget,
    ScrollProgressSource, Subscription,
};
use crate::parallax::{overlay, ParallaxBase, ParallaxConfig, ParallaxState};
use crate::scene::Scene;
use crate::scroll::ScrollState;
use crate::smoothing::{advance, Smoothing};
use crate::visibility::{evaluate_visibility, VisibilityRule};
use fnv::{FnvHashMap, FnvHashSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Created,
    Mounted,
    TornDown,
}

pub struct Choreographer {
    name: String,
    actors: Vec<Actor>,
    visibility: FnvHashMap<ActorId, VisibilityRule>,
    smoothing: Smoothing,
    idle_crossfade: Smoothing,
    parallax_config: ParallaxConfig,
    parallax: ParallaxState,
    scroll: ScrollState,
    inbox: EventSink,
    subscriptions: Vec<Box<dyn Subscription>>,
    reported_missing: FnvHashSet<ActorId>,
    frame: Vec<ActorFrame>,
    lifecycle: Lifecycle,
}

impl Choreographer {
    pub fn new(scene: Scene) -> Self {
        let visibility = scene
            .visibility
            .into_iter()
            .map(|rule| (rule.actor().clone(), rule))
            .collect();
        let mut engine = Self {
            name: scene.name,
            actors: scene.actors,
            visibility,
            smoothing: scene.smoothing,
            idle_crossfade: scene.idle_crossfade,
            parallax_config: scene.parallax,
            parallax: ParallaxState::new(),
            scroll: ScrollState::new(scene.scroll_scrub),
            inbox: EventSink::new(),
            subscriptions: Vec::new(),
            reported_missing: FnvHashSet::default(),
            frame: Vec::new(),
            lifecycle: Lifecycle::Created,
        };
        engine.snap_to_start();
        engine
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(Scene::from_json(json)?))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Handle for collaborators that deliver events outside of `mount`.
    pub fn sink(&self) -> EventSink {
        self.inbox.clone()
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn actor(&self, id: &str) -> Option<&Actor> {
        self.actors.iter().find(|a| a.id.as_str() == id)
    }

    pub fn actor_ids(&self) -> impl Iterator<Item = &ActorId> {
        self.actors.iter().map(|a| &a.id)
    }

    /// Progress used by the most recent tick.
    pub fn progress(&self) -> f32 {
        self.scroll.progress()
    }

    pub fn parallax(&self) -> &ParallaxState {
        &self.parallax
    }

    /// The last frame produced by [`step`](Self::step).
    pub fn frame(&self) -> &[ActorFrame] {
        &self.frame
    }

    pub fn listener_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Subscribe to the host's scroll and pointer sources.
    pub fn mount(
        &mut self,
        scroll: &mut dyn ScrollProgressSource,
        pointer: &mut dyn PointerSource,
    ) {
        if self.lifecycle == Lifecycle::TornDown {
            log::warn!("[engine] `{}` mount after teardown ignored", self.name);
            return;
        }
        self.subscriptions.push(scroll.subscribe(self.inbox.clone()));
        self.subscriptions.push(pointer.subscribe(self.inbox.clone()));
        self.lifecycle = Lifecycle::Mounted;
        log::info!(
            "[engine] mounted `{}` actors={}",
            self.name,
            self.actors.len()
        );
    }

    /// Hand over any other host resource (frame loop, resize listener) so it
    /// is released with the scene.
    pub fn attach(&mut self, mut subscription: Box<dyn Subscription>) {
        if self.lifecycle == Lifecycle::TornDown {
            subscription.cancel();
            return;
        }
        self.subscriptions.push(subscription);
    }

    pub fn set_progress(&mut self, t: f32) {
        self.scroll.set_raw(t);
    }

    pub fn pointer_moved(&mut self, position: glam::Vec2, viewport: glam::Vec2) {
        self.parallax.pointer_moved(position, viewport);
    }

    /// Compute one tick as plain data. Nothing is written to a renderer.
    pub fn step(&mut self, clock: FrameClock) -> &[ActorFrame] {
        if self.lifecycle == Lifecycle::TornDown {
            self.frame.clear();
            return &self.frame;
        }

        let mut refreshed = false;
        let mut teardown = false;
        for event in self.inbox.drain() {
            match event {
                HostEvent::Progress(t) => {
                    self.scroll.set_raw(t);
                }
                HostEvent::Refresh => refreshed = true,
                HostEvent::PointerMoved { position, viewport } => {
                    self.parallax.pointer_moved(position, viewport)
                }
                HostEvent::Teardown => teardown = true,
            }
        }

        if teardown {
            log::debug!("[engine] `{}` deferred teardown", self.name);
            self.teardown();
            return &self.frame;
        }

        if refreshed {
            log::debug!("[engine] `{}` refresh, re-applying start pose", self.name);
            self.snap_to_start();
            return &self.frame;
        }

        let dt = clock.delta;
        let time = clock.elapsed;
        self.scroll.advance(dt);
        self.parallax.advance(dt, self.parallax_config.follow);

        // Single snapshot for every actor this tick.
        let t = self.scroll.progress();
        let idle_factor = self.idle_crossfade.factor(dt);
        let smoothed_pointer = self.parallax.smoothed();

        self.frame.clear();
        for actor in &mut self.actors {
            let active = actor.table.sample(t).index;
            actor.mixer.advance(active, idle_factor);
            let target = evaluate_pose(actor, t, time);
            let mut pose = advance(actor, &target, dt, self.smoothing);

            let gate = evaluate_visibility(self.visibility.get(&actor.id), t);
            pose.opacity = gate.opacity;
            pose.visible = gate.visible;

            if let Some(binding) = &actor.parallax {
                let base = match binding.base {
                    ParallaxBase::Smoothed => pose.rotation,
                    ParallaxBase::Target => actor.base_rotation,
                };
                pose.rotation =
                    overlay(base, smoothed_pointer, time, &self.parallax_config, binding);
            }

            self.frame.push(ActorFrame {
                id: actor.id.clone(),
                pose,
            });
        }
        &self.frame
    }

    /// `step` followed by the single write to the renderer.
    pub fn tick(&mut self, clock: FrameClock, target: &mut dyn RenderTarget) {
        if self.lifecycle == Lifecycle::TornDown {
            return;
        }
        self.step(clock);
        if self.lifecycle == Lifecycle::TornDown {
            return;
        }
        self.write(target);
    }

    /// Put every actor on its t = 0 pose immediately, without smoothing, and
    /// write it out.
    pub fn reset_to_start(&mut self, target: &mut dyn RenderTarget) {
        if self.lifecycle == Lifecycle::TornDown {
            return;
        }
        self.snap_to_start();
        self.write(target);
    }

    /// Release every host subscription. Safe to call any number of times;
    /// later ticks do nothing.
    pub fn teardown(&mut self) {
        if self.lifecycle == Lifecycle::TornDown {
            return;
        }
        let released = self.subscriptions.len();
        for mut sub in self.subscriptions.drain(..) {
            sub.cancel();
        }
        self.inbox.clear();
        self.frame.clear();
        self.lifecycle = Lifecycle::TornDown;
        log::info!(
            "[engine] tore down `{}` released={}",
            self.name,
            released
        );
    }

    fn snap_to_start(&mut self) {
        self.frame.clear();
        for actor in &mut self.actors {
            actor.snap_to_start();
            let mut pose = scripted_pose(&actor.table, 0.0);
            let gate = evaluate_visibility(self.visibility.get(&actor.id), 0.0);
            pose.opacity = gate.opacity;
            pose.visible = gate.visible;
            self.frame.push(ActorFrame {
                id: actor.id.clone(),
                pose,
            });
        }
    }

    fn write(&mut self, target: &mut dyn RenderTarget) {
        for err in write_frame(&self.frame, target) {
            let BindingError::MissingActor(id) = &err;
            if self.reported_missing.insert(id.clone()) {
                log::warn!("[engine] {err}");
            }
        }
    }
}

impl Drop for Choreographer {
    fn drop(&mut self) {
        self.teardown();
    }
}
