/// Scroll offset below which the navigation bar is always shown.
pub const NAV_REVEAL_THRESHOLD: f64 = 150.0;

/// Tracks scroll direction and derives whether the fixed navigation bar
/// should be on screen.
///
/// The bar hides only while the page moves down past the threshold; any
/// upward or stationary sample, or any sample near the top, shows it again.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollDirectionTracker {
    threshold: f64,
    last_position: f64,
    visible: bool,
}

impl Default for ScrollDirectionTracker {
    fn default() -> Self {
        Self::new(NAV_REVEAL_THRESHOLD)
    }
}

impl ScrollDirectionTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            last_position: 0.0,
            visible: true,
        }
    }

    /// Records a new scroll sample and returns the resulting visibility.
    pub fn on_scroll(&mut self, current: f64) -> bool {
        let scrolling_down = current > self.last_position;
        self.visible = !(scrolling_down && current > self.threshold);
        self.last_position = current;
        self.visible
    }

    /// Records a starting position without treating it as movement, so a
    /// page restored mid-scroll opens with the bar shown.
    pub fn seed(&mut self, position: f64) {
        self.last_position = position;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn last_position(&self) -> f64 {
        self.last_position
    }
}

/// Inline style values the nav bar renders for a visibility flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavStyle {
    pub transform: &'static str,
    pub pointer_events: &'static str,
}

impl NavStyle {
    pub fn for_visibility(visible: bool) -> Self {
        if visible {
            Self {
                transform: "translateY(0)",
                pointer_events: "auto",
            }
        } else {
            Self {
                transform: "translateY(-100%)",
                pointer_events: "none",
            }
        }
    }
}
