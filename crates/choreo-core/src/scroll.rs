use crate::constants::DEFAULT_SCROLL_SCRUB_SEC;

/// Clamp a progress value to \[0, 1\]; non-finite input maps to 0.
#[inline]
pub fn clamp_progress(t: f32) -> f32 {
    if t.is_finite() {
        t.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Scroll progress as reported by the host plus a scrubbed follower.
///
/// The follower lags the raw value with an exponential time constant of
/// `scrub` seconds; zero disables the lag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollState {
    raw: f32,
    smoothed: f32,
    scrub: f32,
    primed: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_SCRUB_SEC)
    }
}

impl ScrollState {
    pub fn new(scrub: f32) -> Self {
        Self {
            raw: 0.0,
            smoothed: 0.0,
            scrub: scrub.max(0.0),
            primed: false,
        }
    }

    pub fn raw(&self) -> f32 {
        self.raw
    }

    /// The progress the engine evaluates.
    pub fn progress(&self) -> f32 {
        self.smoothed
    }

    /// Record a host update. Returns `true` when the value had to be clamped.
    pub fn set_raw(&mut self, t: f32) -> bool {
        let clamped = clamp_progress(t);
        let adjusted = clamped != t;
        if adjusted {
            log::debug!("[scroll] progress {t} out of range, clamped to {clamped}");
        }
        self.raw = clamped;
        if !self.primed {
            self.smoothed = clamped;
            self.primed = true;
        }
        adjusted
    }

    pub fn advance(&mut self, dt: f32) {
        if self.scrub <= 0.0 {
            self.smoothed = self.raw;
            return;
        }
        if dt > 0.0 {
            let alpha = 1.0 - (-dt / self.scrub).exp();
            self.smoothed += (self.raw - self.smoothed) * alpha;
        }
    }

    /// Jump the follower onto the raw value.
    pub fn snap(&mut self) {
        self.smoothed = self.raw;
    }
}
