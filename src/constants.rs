/// Page wiring and DOM panel constants for the web host.
///
/// Choreography tuning lives in `choreo_core::constants`; these only cover
/// how the host measures scroll and presents panels.

// Pinned scroll section
pub const PIN_ELEMENT_ID: &str = "steve-pin";
pub const PIN_SCROLL_LENGTH_VIEWPORTS: f32 = 8.0; // progress 0 -> 1 over this many viewport heights

// Panels
pub const PANEL_INTERACTIVE_OPACITY: f32 = 0.5; // panels accept clicks above this opacity
pub const PANEL_POSITION_UNIT: &str = "px";

// Event names
pub const SCROLL_EVENT: &str = "scroll";
pub const RESIZE_EVENT: &str = "resize";
pub const POINTER_MOVE_EVENT: &str = "pointermove";

// Default console log level for the wasm build
pub const LOG_LEVEL: log::Level = log::Level::Info;
