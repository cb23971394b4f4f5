//! Back-to-top control state.

use folio_domain::scroll::ScrollPolicy;

/// Vertical offset the page returns to when the control is clicked.
pub const TOP: f64 = 0.0;

/// Tracks whether the back-to-top control is shown.
#[derive(Debug, Clone, Default)]
pub struct ScrollToTop {
    policy: ScrollPolicy,
    visible: bool,
}

impl ScrollToTop {
    #[must_use]
    pub fn new(policy: ScrollPolicy) -> Self {
        Self {
            policy,
            visible: false,
        }
    }

    /// Recompute visibility for the current offset. Safe to call on every
    /// scroll event.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        self.visible = self.policy.shows_button(offset);
        self.visible
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Offset to scroll to when the control is clicked.
    #[must_use]
    pub fn on_click(&self) -> f64 {
        TOP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_hidden() {
        assert!(!ScrollToTop::default().is_visible());
    }

    #[test]
    fn should_follow_offset_on_every_scroll() {
        let mut control = ScrollToTop::default();
        assert!(control.on_scroll(800.0));
        assert!(control.on_scroll(800.0));
        assert!(!control.on_scroll(120.0));
        assert!(!control.is_visible());
    }

    #[test]
    fn should_return_to_origin_when_clicked() {
        let control = ScrollToTop::new(ScrollPolicy::new(10.0));
        assert!(control.on_click().abs() < f64::EPSILON);
    }
}
