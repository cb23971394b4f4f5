//! Visibility rule for the back-to-top control.

/// Default vertical offset, in CSS pixels, past which the control appears.
pub const DEFAULT_THRESHOLD: f64 = 500.0;

/// Decides whether the back-to-top control is shown for a scroll offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPolicy {
    threshold: f64,
}

impl Default for ScrollPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl ScrollPolicy {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Shown strictly past the threshold.
    #[must_use]
    pub fn shows_button(&self, offset: f64) -> bool {
        offset > self.threshold
    }
}
