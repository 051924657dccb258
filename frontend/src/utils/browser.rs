use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

use crate::error::BridgeError;
use crate::view_state::proximity::{ElementBounds, SectionSample};
use crate::view_state::signal::Signal;
use crate::view_state::{EnvironmentEvent, ViewportSample};

/// Reads the current scroll offset and page/viewport heights.
pub fn sample_viewport() -> Option<ViewportSample> {
    let window = web_sys::window()?;
    let scroll_y = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let document_height = window
        .document()
        .and_then(|doc| doc.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(viewport_height);
    Some(ViewportSample {
        scroll_y,
        viewport_height,
        document_height,
    })
}

/// Measures the elements with the given ids, skipping any not in the DOM.
pub fn measure_sections(ids: &[String]) -> Vec<SectionSample> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    ids.iter()
        .filter_map(|id| {
            let rect = document.get_element_by_id(id)?.get_bounding_client_rect();
            Some(SectionSample::new(
                id.clone(),
                ElementBounds::new(rect.top(), rect.bottom()),
            ))
        })
        .collect()
}

/// A window event listener that is removed when dropped.
pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn Fn()>,
}

impl WindowListener {
    pub fn register(event: &'static str, handler: impl Fn() + 'static) -> Result<Self, BridgeError> {
        let window = web_sys::window().ok_or(BridgeError::NoWindow)?;
        let callback = Closure::<dyn Fn()>::new(handler);
        window
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| BridgeError::Listener {
                event,
                reason: format!("{:?}", e),
            })?;
        Ok(Self { event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
            {
                log::warn!("Failed to remove {} listener: {:?}", self.event, e);
            }
        }
    }
}

/// Forwards window scroll and resize events into a [`Signal`]. Both
/// listeners are released when the bridge is dropped.
pub struct BrowserBridge {
    _scroll: WindowListener,
    _resize: WindowListener,
}

impl BrowserBridge {
    pub fn attach(signal: Signal<EnvironmentEvent>) -> Result<Self, BridgeError> {
        let scroll = {
            let signal = signal.clone();
            WindowListener::register("scroll", move || {
                if let Some(sample) = sample_viewport() {
                    signal.emit(&EnvironmentEvent::Scroll(sample));
                }
            })?
        };
        let resize = {
            let signal = signal.clone();
            WindowListener::register("resize", move || {
                if let Some(sample) = sample_viewport() {
                    signal.emit(&EnvironmentEvent::Resize(sample));
                }
            })?
        };
        // Initial sample so a page restored mid-scroll renders correctly.
        if let Some(sample) = sample_viewport() {
            signal.emit(&EnvironmentEvent::Initial(sample));
        }
        Ok(Self {
            _scroll: scroll,
            _resize: resize,
        })
    }
}
