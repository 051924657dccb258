use std::cell::RefCell;
use std::rc::Rc;

use aether_site::view_state::lightbox::{ImageId, LightboxState};
use aether_site::view_state::nav::ScrollDirectionTracker;
use aether_site::view_state::progress::{scroll_progress, HeroCurve, HeroTransform};
use aether_site::view_state::proximity::{evaluate, ElementBounds, SectionSample};
use aether_site::view_state::signal::Signal;
use aether_site::view_state::theme::ThemeSet;
use aether_site::view_state::{EnvironmentEvent, ViewStateController, ViewTuning, ViewportSample};
use proptest::prelude::*;

fn scroll_event(y: f64) -> EnvironmentEvent {
    EnvironmentEvent::Scroll(ViewportSample {
        scroll_y: y,
        viewport_height: 900.0,
        document_height: 6000.0,
    })
}

proptest! {
    #[test]
    fn nav_always_visible_near_top(positions in prop::collection::vec(0.0f64..5000.0, 0..40), last in 0.0f64..=150.0) {
        let mut tracker = ScrollDirectionTracker::default();
        for p in positions {
            tracker.on_scroll(p);
        }
        prop_assert!(tracker.on_scroll(last));
    }

    #[test]
    fn nav_hidden_iff_moving_down_past_threshold(positions in prop::collection::vec(0.0f64..5000.0, 1..60)) {
        let mut tracker = ScrollDirectionTracker::default();
        let mut previous = 0.0;
        for p in positions {
            let visible = tracker.on_scroll(p);
            if p > 150.0 {
                prop_assert_eq!(!visible, p > previous);
            }
            previous = p;
        }
    }

    #[test]
    fn proximity_is_idempotent(top in -5000.0f64..5000.0, height in 0.0f64..4000.0, viewport in 1.0f64..3000.0) {
        let bounds = ElementBounds::new(top, top + height);
        prop_assert_eq!(evaluate(bounds, viewport), evaluate(bounds, viewport));
    }

    #[test]
    fn progress_monotonic_and_bounded(a in 0.0f64..10_000.0, b in 0.0f64..10_000.0, doc in 0.0f64..20_000.0, viewport in 1.0f64..3000.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let p_low = scroll_progress(low, doc, viewport);
        let p_high = scroll_progress(high, doc, viewport);
        prop_assert!(p_low <= p_high);
        prop_assert!((0.0..=1.0).contains(&p_low));
        prop_assert!((0.0..=1.0).contains(&p_high));
        if doc <= viewport {
            prop_assert_eq!(p_high, 0.0);
        }
    }

    #[test]
    fn hero_saturates_past_range(progress in 0.15f64..=1.0) {
        prop_assert_eq!(HeroCurve::default().transform(progress), HeroTransform { scale: 0.9, opacity: 0.0 });
    }

    #[test]
    fn hero_is_linear_inside_range(progress in 0.0f64..0.15) {
        let hero = HeroCurve::default().transform(progress);
        let t = progress / 0.15;
        prop_assert!((hero.scale - (1.0 - 0.1 * t)).abs() < 1e-9);
        prop_assert!((hero.opacity - (1.0 - t)).abs() < 1e-9);
    }

    #[test]
    fn palette_is_light_iff_crew_on_centre_line(
        top in -5000.0f64..5000.0,
        height in 0.0f64..4000.0,
        viewport in 1.0f64..3000.0,
        scroll_y in 0.0f64..5000.0,
    ) {
        let themes = ThemeSet::nord();
        let mut controller = ViewStateController::new(&ViewTuning::default(), vec!["about".to_string()]);
        let bounds = ElementBounds::new(top, top + height);
        let event = EnvironmentEvent::Scroll(ViewportSample {
            scroll_y,
            viewport_height: viewport,
            document_height: 8000.0,
        });
        controller.handle(&event, &[SectionSample::new("about", bounds)]);
        let frame = controller.frame();
        let expected = if evaluate(bounds, viewport) { &themes.light } else { &themes.dark };
        prop_assert_eq!(frame.palette(&themes), expected);
        prop_assert_eq!(frame.palette(&themes) == &themes.light, evaluate(bounds, viewport));
    }

    #[test]
    fn no_updates_after_teardown(before in prop::collection::vec(0.0f64..5000.0, 0..20), after in prop::collection::vec(0.0f64..5000.0, 1..20)) {
        let controller = Rc::new(RefCell::new(ViewStateController::new(
            &ViewTuning::default(),
            vec!["about".to_string()],
        )));
        let signal = Signal::new();
        let subscription = ViewStateController::attach(controller.clone(), &signal, Vec::new, |_| {});
        for y in before {
            signal.emit(&scroll_event(y));
        }
        drop(subscription);
        let frozen = controller.borrow().frame();
        for y in after {
            signal.emit(&scroll_event(y));
        }
        prop_assert_eq!(controller.borrow().frame(), frozen);
        prop_assert_eq!(signal.listener_count(), 0);
    }
}

#[test]
fn hero_reference_points() {
    let curve = HeroCurve::default();
    assert_eq!(curve.transform(0.0), HeroTransform { scale: 1.0, opacity: 1.0 });
    let mid = curve.transform(0.075);
    assert!((mid.scale - 0.95).abs() < 1e-9);
    assert!((mid.opacity - 0.5).abs() < 1e-9);
}

#[test]
fn lightbox_lifecycle() {
    let mut state = LightboxState::default();
    assert_eq!(state, LightboxState::Closed);
    state.select(ImageId::new("x.png").unwrap());
    assert_eq!(state, LightboxState::Open(ImageId::new("x.png").unwrap()));
    state.dismiss();
    assert_eq!(state, LightboxState::Closed);
    state.dismiss();
    assert_eq!(state, LightboxState::Closed);
}
