pub mod actor;
pub mod constants;
pub mod easing;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod host;
pub mod idle;
pub mod parallax;
pub mod pose;
pub mod pose_buffer;
pub mod scene;
pub mod scroll;
pub mod segment;
pub mod smoothing;
pub mod visibility;

pub use actor::{Actor, ActorId};
pub use easing::Easing;
pub use engine::{Choreographer, Lifecycle};
pub use error::{BindingError, ConfigError};
pub use evaluator::{evaluate_pose, scripted_pose};
pub use host::*;
pub use idle::{Flourish, IdleModifier};
pub use parallax::{ParallaxBase, ParallaxBinding, ParallaxConfig, ParallaxState};
pub use pose::{PartialPose, Pose, PoseField, Scale};
pub use pose_buffer::{PackedPose, PoseBuffer};
pub use scene::{steve_scene, Scene, SceneConfig, Tuning, STEVE_SCENE_JSON};
pub use scroll::ScrollState;
pub use segment::{SegmentSpec, SegmentTable};
pub use smoothing::Smoothing;
pub use visibility::{evaluate_visibility, Visibility, VisibilityRule, VisibilityWindow};
