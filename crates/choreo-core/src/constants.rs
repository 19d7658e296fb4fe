// Shared choreography tuning constants used by the engine and the web host.

// Smoothing
pub const REFERENCE_FRAME_RATE: f32 = 60.0; // per-tick blend factors are authored against this rate
pub const DEFAULT_SMOOTHING_RATE: f32 = 0.1; // fraction of the remaining distance covered per reference tick

// Scroll scrub (seconds the smoothed progress lags behind the raw scroll position)
pub const DEFAULT_SCROLL_SCRUB_SEC: f32 = 0.5;

// Pointer parallax
pub const DEFAULT_PARALLAX_INTENSITY: f32 = 0.05; // radians of rotation at the viewport edge
pub const DEFAULT_PARALLAX_FOLLOW_PER_SEC: f32 = 4.0;

// Ambient sway layered on parallax-bound actors, x drives yaw and y drives pitch
pub const AMBIENT_SWAY_AMPLITUDE: [f32; 2] = [0.005, 0.003];
pub const AMBIENT_SWAY_RATE: [f32; 2] = [0.5, 0.3]; // radians per second

// Idle motion
pub const DEFAULT_IDLE_CROSSFADE_PER_SEC: f32 = 3.0;
pub const IDLE_WEIGHT_EPSILON: f32 = 1e-4; // segment idle weights below this are skipped

// Clock
pub const MAX_FRAME_DELTA_SEC: f32 = 0.1; // cap after a stalled or backgrounded frame

// Table validation
pub const RANGE_EPSILON: f32 = 1e-5; // tolerance for contiguous segment boundaries
pub const CONTINUITY_EPSILON: f32 = 1e-4; // tolerance for shared boundary values
