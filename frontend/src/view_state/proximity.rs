use std::collections::BTreeSet;

use super::theme::ThemeMode;

/// Vertical extent of an element relative to the top of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementBounds {
    pub top: f64,
    pub bottom: f64,
}

impl ElementBounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }
}

/// Insets applied to the viewport before testing for overlap, as fractions
/// of the viewport height. Negative values shrink the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMargin {
    pub top: f64,
    pub bottom: f64,
}

impl ViewportMargin {
    /// Collapses the viewport onto its horizontal centre line.
    pub const CENTER_LINE: Self = Self {
        top: -0.5,
        bottom: -0.5,
    };
    pub const NONE: Self = Self {
        top: 0.0,
        bottom: 0.0,
    };
}

/// Whether `bounds` crosses the vertical centre of the viewport.
pub fn evaluate(bounds: ElementBounds, viewport_height: f64) -> bool {
    evaluate_with_margin(bounds, viewport_height, ViewportMargin::CENTER_LINE)
}

/// Overlap test against the viewport shrunk (or grown) by `margin`.
/// Touching edges count as overlapping.
pub fn evaluate_with_margin(
    bounds: ElementBounds,
    viewport_height: f64,
    margin: ViewportMargin,
) -> bool {
    let window_top = -margin.top * viewport_height;
    let window_bottom = viewport_height + margin.bottom * viewport_height;
    if window_top > window_bottom || bounds.top > bounds.bottom {
        return false;
    }
    bounds.top <= window_bottom && bounds.bottom >= window_top
}

/// Geometry of one section, as measured after a scroll or resize.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSample {
    pub id: String,
    pub bounds: ElementBounds,
}

impl SectionSample {
    pub fn new(id: impl Into<String>, bounds: ElementBounds) -> Self {
        Self {
            id: id.into(),
            bounds,
        }
    }
}

/// Tracks whether any theme-trigger section sits on the viewport's centre
/// line. The theme is derived from that flag alone.
///
/// Samples are evaluated in the order given (document order). When more than
/// one trigger is on the centre line, the last one evaluated is reported as
/// the active section.
#[derive(Debug, Clone, PartialEq)]
pub struct ProximityDetector {
    triggers: Vec<String>,
    margin: ViewportMargin,
    active: Option<usize>,
}

impl ProximityDetector {
    pub fn new(triggers: Vec<String>) -> Self {
        Self {
            triggers,
            margin: ViewportMargin::CENTER_LINE,
            active: None,
        }
    }

    pub fn with_margin(mut self, margin: ViewportMargin) -> Self {
        self.margin = margin;
        self
    }

    pub fn update(&mut self, sections: &[SectionSample], viewport_height: f64) -> ThemeMode {
        self.active = None;
        for sample in sections {
            let Some(index) = self.triggers.iter().position(|id| *id == sample.id) else {
                continue;
            };
            if evaluate_with_margin(sample.bounds, viewport_height, self.margin) {
                self.active = Some(index);
            }
        }
        self.mode()
    }

    /// True while a trigger section is on the centre line.
    pub fn in_view(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active.map(|i| self.triggers[i].as_str())
    }

    pub fn mode(&self) -> ThemeMode {
        ThemeMode::from_proximity(self.in_view())
    }
}

/// Remembers which elements have entered the viewport at least once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevealLatch {
    revealed: BTreeSet<String>,
}

impl RevealLatch {
    /// Returns true if this sample revealed the element for the first time.
    pub fn observe(&mut self, sample: &SectionSample, viewport_height: f64) -> bool {
        if self.revealed.contains(&sample.id) {
            return false;
        }
        if evaluate_with_margin(sample.bounds, viewport_height, ViewportMargin::NONE) {
            self.revealed.insert(sample.id.clone());
            return true;
        }
        false
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    pub fn revealed(&self) -> &BTreeSet<String> {
        &self.revealed
    }
}
