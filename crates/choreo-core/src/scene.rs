//! Scene configuration: choreography authored as data.

use crate::actor::{Actor, ActorId};
use crate::constants::{
    DEFAULT_IDLE_CROSSFADE_PER_SEC, DEFAULT_PARALLAX_FOLLOW_PER_SEC, DEFAULT_PARALLAX_INTENSITY,
    DEFAULT_SCROLL_SCRUB_SEC, DEFAULT_SMOOTHING_RATE,
};
use crate::error::ConfigError;
use crate::idle::IdleModifier;
use crate::parallax::{AmbientSway, ParallaxBinding, ParallaxConfig};
use crate::pose::{PartialPose, Pose};
use crate::segment::{SegmentSpec, SegmentTable};
use crate::smoothing::Smoothing;
use crate::visibility::{VisibilityRule, VisibilityWindow};
use fnv::FnvHashSet;
use serde::Deserialize;
use smallvec::SmallVec;

/// The scroll narrative shipped with the site.
pub static STEVE_SCENE_JSON: &str = include_str!("../scenes/steve.json");

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct Tuning {
    /// Per-tick blend factor at 60 fps, in (0, 1].
    pub smoothing_rate: f32,
    pub parallax_intensity: f32,
    /// Parallax follow rate, 1/s.
    pub parallax_follow: f32,
    /// Seconds the evaluated progress lags the scroll position.
    pub scroll_scrub: f32,
    /// Segment idle crossfade rate, 1/s.
    pub idle_crossfade: f32,
    pub ambient_sway: AmbientSway,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            smoothing_rate: DEFAULT_SMOOTHING_RATE,
            parallax_intensity: DEFAULT_PARALLAX_INTENSITY,
            parallax_follow: DEFAULT_PARALLAX_FOLLOW_PER_SEC,
            scroll_scrub: DEFAULT_SCROLL_SCRUB_SEC,
            idle_crossfade: DEFAULT_IDLE_CROSSFADE_PER_SEC,
            ambient_sway: AmbientSway::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ActorConfig {
    pub id: ActorId,
    #[serde(default)]
    pub rest: PartialPose,
    pub segments: Vec<SegmentSpec>,
    #[serde(default)]
    pub idle: SmallVec<[IdleModifier; 4]>,
    #[serde(default)]
    pub parallax: Option<ParallaxBinding>,
    #[serde(default)]
    pub smoothing_rate: Option<f32>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct VisibilityConfig {
    pub actor: ActorId,
    pub windows: Vec<VisibilityWindow>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SceneConfig {
    pub name: String,
    #[serde(default)]
    pub tuning: Tuning,
    pub actors: Vec<ActorConfig>,
    #[serde(default)]
    pub visibility: Vec<VisibilityConfig>,
}

/// A validated scene, ready to hand to the engine.
#[derive(Clone, Debug)]
pub struct Scene {
    pub name: String,
    pub actors: Vec<Actor>,
    pub visibility: Vec<VisibilityRule>,
    pub smoothing: Smoothing,
    pub parallax: ParallaxConfig,
    pub scroll_scrub: f32,
    pub idle_crossfade: Smoothing,
}

fn check_tuning(name: &'static str, value: f32, valid: bool) -> Result<(), ConfigError> {
    if value.is_finite() && valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidTuning { name, value })
    }
}

impl SceneConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn build(self) -> Result<Scene, ConfigError> {
        let t = self.tuning;
        check_tuning("parallaxIntensity", t.parallax_intensity, t.parallax_intensity >= 0.0)?;
        check_tuning("scrollScrub", t.scroll_scrub, t.scroll_scrub >= 0.0)?;
        let smoothing = Smoothing::from_per_tick(t.smoothing_rate)?;
        let follow = Smoothing::per_second(t.parallax_follow).map_err(|_| {
            ConfigError::InvalidTuning {
                name: "parallaxFollow",
                value: t.parallax_follow,
            }
        })?;
        let idle_crossfade = Smoothing::per_second(t.idle_crossfade).map_err(|_| {
            ConfigError::InvalidTuning {
                name: "idleCrossfade",
                value: t.idle_crossfade,
            }
        })?;

        if self.actors.is_empty() {
            return Err(ConfigError::EmptyScene);
        }

        let mut seen = FnvHashSet::default();
        let mut actors = Vec::with_capacity(self.actors.len());
        for config in self.actors {
            if !seen.insert(config.id.clone()) {
                return Err(ConfigError::DuplicateActor(config.id));
            }
            let rest = config.rest.resolve(&Pose::default());
            let table = SegmentTable::from_specs(&config.id, &rest, &config.segments)?;
            for m in table.boundary_mismatches() {
                log::warn!(
                    "[scene] `{}` pops by {:.4} at progress {:.3} (segment {})",
                    config.id,
                    m.distance,
                    m.progress,
                    m.index
                );
            }
            let mut actor = Actor::new(config.id, table);
            actor.idle = config.idle;
            actor.parallax = config.parallax;
            if let Some(rate) = config.smoothing_rate {
                actor.smoothing = Some(Smoothing::from_per_tick(rate)?);
            }
            actors.push(actor);
        }

        let mut ruled = FnvHashSet::default();
        let mut visibility = Vec::with_capacity(self.visibility.len());
        for rule in self.visibility {
            if !seen.contains(&rule.actor) {
                return Err(ConfigError::UnknownActor(rule.actor));
            }
            if !ruled.insert(rule.actor.clone()) {
                return Err(ConfigError::DuplicateVisibilityRule(rule.actor));
            }
            visibility.push(VisibilityRule::new(rule.actor, rule.windows)?);
        }

        log::info!(
            "[scene] built `{}`: actors={} visibility rules={}",
            self.name,
            actors.len(),
            visibility.len()
        );

        Ok(Scene {
            name: self.name,
            actors,
            visibility,
            smoothing,
            parallax: ParallaxConfig {
                intensity: t.parallax_intensity,
                follow,
                ambient: t.ambient_sway,
            },
            scroll_scrub: t.scroll_scrub,
            idle_crossfade,
        })
    }
}

impl Scene {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        SceneConfig::from_json(json)?.build()
    }
}

/// The built-in scroll narrative: camera, Steve, the geometric group, the
/// background bits and the overlay panels.
pub fn steve_scene() -> Result<Scene, ConfigError> {
    Scene::from_json(STEVE_SCENE_JSON)
}
