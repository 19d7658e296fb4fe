use crate::actor::ActorId;
use thiserror::Error;

/// Authored scene data is malformed. Raised while building a scene, never per tick.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("scene has no actors")]
    EmptyScene,

    #[error("actor `{actor}` has an empty segment table")]
    EmptySegmentTable { actor: ActorId },

    #[error("actor `{actor}` segment {index}: invalid progress range [{start}, {end}]")]
    InvalidSegmentRange {
        actor: ActorId,
        index: usize,
        start: f32,
        end: f32,
    },

    #[error("actor `{actor}` segment {index} ends at {end} but the next segment starts at {next_start}")]
    NonContiguous {
        actor: ActorId,
        index: usize,
        end: f32,
        next_start: f32,
    },

    #[error("actor `{actor}` visibility window {index}: {reason}")]
    InvalidWindow {
        actor: ActorId,
        index: usize,
        reason: &'static str,
    },

    #[error("actor `{actor}` visibility windows [{first_start}, {first_end}] and [{second_start}, {second_end}] overlap")]
    OverlappingWindows {
        actor: ActorId,
        first_start: f32,
        first_end: f32,
        second_start: f32,
        second_end: f32,
    },

    #[error("duplicate actor `{0}`")]
    DuplicateActor(ActorId),

    #[error("duplicate visibility rule for actor `{0}`")]
    DuplicateVisibilityRule(ActorId),

    #[error("visibility rule references unknown actor `{0}`")]
    UnknownActor(ActorId),

    #[error("invalid tuning value for `{name}`: {value}")]
    InvalidTuning { name: &'static str, value: f32 },

    #[error("failed to parse scene: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The render target has no node for a configured actor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    #[error("no render node bound for actor `{0}`")]
    MissingActor(ActorId),
}
