//! Scroll-driven view state for the landing page.
//!
//! Everything in here is plain Rust with no DOM access: environment events
//! go in through [`ViewStateController::handle`], a [`ViewFrame`] comes out,
//! and the page renders the frame. The browser side lives in
//! `utils::browser`.

pub mod lightbox;
pub mod nav;
pub mod progress;
pub mod proximity;
pub mod signal;
pub mod theme;

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use serde::Deserialize;

use crate::error::ViewStateError;
use lightbox::{ImageId, LightboxState};
use nav::{ScrollDirectionTracker, NAV_REVEAL_THRESHOLD};
use progress::{scroll_progress, HeroCurve, HeroTransform};
use proximity::{ProximityDetector, RevealLatch, SectionSample};
use signal::{Signal, Subscription};
use theme::{Palette, ThemeMode, ThemeSet};

/// Knobs for the scroll effects.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewTuning {
    pub nav_threshold: f64,
    pub hero_range_end: f64,
    pub hero_min_scale: f64,
}

impl Default for ViewTuning {
    fn default() -> Self {
        Self {
            nav_threshold: NAV_REVEAL_THRESHOLD,
            hero_range_end: 0.15,
            hero_min_scale: 0.9,
        }
    }
}

/// Window metrics captured with every event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSample {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnvironmentEvent {
    /// Metrics read once at mount, before any real scroll.
    Initial(ViewportSample),
    Scroll(ViewportSample),
    Resize(ViewportSample),
}

impl EnvironmentEvent {
    pub fn sample(&self) -> ViewportSample {
        match self {
            Self::Initial(sample) | Self::Scroll(sample) | Self::Resize(sample) => *sample,
        }
    }
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewFrame {
    pub nav_visible: bool,
    pub theme: ThemeMode,
    pub hero: HeroTransform,
    pub lightbox: LightboxState,
    pub revealed: BTreeSet<String>,
}

impl ViewFrame {
    pub fn palette<'a>(&self, themes: &'a ThemeSet) -> &'a Palette {
        themes.select(self.theme)
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }
}

pub struct ViewStateController {
    nav: ScrollDirectionTracker,
    proximity: ProximityDetector,
    reveals: RevealLatch,
    curve: HeroCurve,
    progress: f64,
    lightbox: LightboxState,
}

impl ViewStateController {
    /// `triggers` are the ids of the sections that switch the page to the
    /// light palette while on the viewport's centre line.
    pub fn new(tuning: &ViewTuning, triggers: Vec<String>) -> Self {
        Self {
            nav: ScrollDirectionTracker::new(tuning.nav_threshold),
            proximity: ProximityDetector::new(triggers),
            reveals: RevealLatch::default(),
            curve: HeroCurve::new(tuning.hero_range_end, tuning.hero_min_scale),
            progress: 0.0,
            lightbox: LightboxState::Closed,
        }
    }

    pub fn frame(&self) -> ViewFrame {
        ViewFrame {
            nav_visible: self.nav.is_visible(),
            theme: self.proximity.mode(),
            hero: self.curve.transform(self.progress),
            lightbox: self.lightbox.clone(),
            revealed: self.reveals.revealed().clone(),
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Applies one environment event. Returns the new frame only when
    /// something rendered changed.
    pub fn handle(&mut self, event: &EnvironmentEvent, sections: &[SectionSample]) -> Option<ViewFrame> {
        let nav_before = self.nav.is_visible();
        let theme_before = self.proximity.mode();
        let hero_before = self.curve.transform(self.progress);
        // Reveals only ever grow, so the count detects a change.
        let revealed_before = self.reveals.revealed().len();
        let sample = event.sample();

        match event {
            EnvironmentEvent::Initial(_) => self.nav.seed(sample.scroll_y),
            EnvironmentEvent::Scroll(_) => {
                self.nav.on_scroll(sample.scroll_y);
            }
            EnvironmentEvent::Resize(_) => {}
        }
        self.progress = scroll_progress(
            sample.scroll_y,
            sample.document_height,
            sample.viewport_height,
        );
        self.proximity.update(sections, sample.viewport_height);
        for section in sections {
            if self.reveals.observe(section, sample.viewport_height) {
                log::debug!("revealed {}", section.id);
            }
        }

        let theme = self.proximity.mode();
        if theme != theme_before {
            log::info!(
                "theme -> {} ({})",
                theme.as_str(),
                self.proximity.active_section().unwrap_or("no trigger in view")
            );
        }
        let changed = self.nav.is_visible() != nav_before
            || theme != theme_before
            || self.curve.transform(self.progress) != hero_before
            || self.reveals.revealed().len() != revealed_before;
        changed.then(|| self.frame())
    }

    pub fn select_image(&mut self, id: &str) -> Result<ViewFrame, ViewStateError> {
        let id = ImageId::new(id)?;
        log::debug!("lightbox open: {id}");
        self.lightbox.select(id);
        Ok(self.frame())
    }

    pub fn dismiss_lightbox(&mut self) -> Option<ViewFrame> {
        if self.lightbox.dismiss() {
            log::debug!("lightbox closed");
            Some(self.frame())
        } else {
            None
        }
    }

    /// Feeds `signal` into `controller` until the returned subscription is
    /// dropped. `measure` reads the tracked sections at event time and
    /// `on_frame` receives every changed frame.
    pub fn attach(
        controller: Rc<RefCell<Self>>,
        signal: &Signal<EnvironmentEvent>,
        measure: impl Fn() -> Vec<SectionSample> + 'static,
        on_frame: impl Fn(ViewFrame) + 'static,
    ) -> Subscription {
        signal.subscribe(move |event| {
            let sections = measure();
            let changed = controller.borrow_mut().handle(event, &sections);
            if let Some(frame) = changed {
                on_frame(frame);
            }
        })
    }
}
