use glam::Vec3;

/// Pin geometry measured from the page, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollGeometry {
    /// Document offset of the pinned section's top edge.
    pub pin_top: f32,
    pub viewport_height: f32,
    /// Scroll distance over which progress runs from 0 to 1, in viewports.
    pub length_viewports: f32,
}

impl ScrollGeometry {
    #[inline]
    pub fn scroll_length(&self) -> f32 {
        self.viewport_height * self.length_viewports
    }

    /// Unclamped progress for a window scroll offset. The engine clamps.
    #[inline]
    pub fn progress(&self, scroll_y: f32) -> f32 {
        let length = self.scroll_length();
        if length <= 0.0 || !length.is_finite() {
            return 0.0;
        }
        (scroll_y - self.pin_top) / length
    }
}

#[inline]
pub fn panel_transform(position: Vec3, unit: &str) -> String {
    format!(
        "translate3d({:.2}{unit}, {:.2}{unit}, 0{unit})",
        position.x, position.y
    )
}

#[inline]
pub fn panel_is_interactive(opacity: f32, threshold: f32) -> bool {
    opacity > threshold
}

#[inline]
pub fn panel_pointer_events(opacity: f32, threshold: f32) -> &'static str {
    if panel_is_interactive(opacity, threshold) {
        "auto"
    } else {
        "none"
    }
}

#[inline]
pub fn css_visibility(visible: bool) -> &'static str {
    if visible {
        "visible"
    } else {
        "hidden"
    }
}

#[inline]
pub fn css_opacity(opacity: f32) -> String {
    format!("{:.3}", opacity.clamp(0.0, 1.0))
}
