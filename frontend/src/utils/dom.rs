use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};
use yew::NodeRef;

pub fn now_ms() -> u64 {
    js_sys::Date::now().max(0.0) as u64
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_height().ok())
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0)
}

/// `(top, height)` of the referenced element relative to the viewport.
pub fn rect_of(node: &NodeRef) -> Option<(f64, f64)> {
    let element = node.cast::<Element>()?;
    let rect = element.get_bounding_client_rect();
    Some((rect.top(), rect.height()))
}

pub fn scroll_to_y(y: f64, smooth: bool) {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(y.max(0.0));
        options.set_behavior(if smooth {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Instant
        });
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn scroll_to_top() {
    scroll_to_y(0.0, true);
}

/// Smooth-scrolls so the element's top edge meets the viewport's.
pub fn scroll_to_node(node: &NodeRef) {
    if let Some(element) = node.cast::<Element>() {
        scroll_into_view(&element);
    }
}

pub fn scroll_to_id(id: &str) -> bool {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id));
    match element {
        Some(element) => {
            scroll_into_view(&element);
            true
        }
        None => false,
    }
}

fn scroll_into_view(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn set_body_scroll_locked(locked: bool) {
    let body = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body());
    if let Some(body) = body {
        let style = body.style();
        let _ = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
    }
}

pub fn location_hash() -> Option<String> {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .map(|hash| hash.trim_start_matches('#').to_string())
        .filter(|hash| !hash.is_empty())
}

/// A queued animation frame; dropping it cancels the callback if it has not
/// run yet.
pub struct AnimationFrame {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Drop for AnimationFrame {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(self.id);
        }
    }
}

pub fn request_animation_frame(callback: impl FnOnce() + 'static) -> Option<AnimationFrame> {
    let window = web_sys::window()?;
    let callback: Closure<dyn FnMut()> = Closure::once(callback);
    match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        Ok(id) => Some(AnimationFrame {
            id,
            _callback: callback,
        }),
        Err(e) => {
            log::warn!("requestAnimationFrame unavailable: {:?}", e);
            None
        }
    }
}
