use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

/// An event listener that removes itself when dropped. Keep it in an effect
/// and drop it from the teardown.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn Fn(Event)>,
}

impl Listener {
    pub fn new(target: &EventTarget, event: &'static str, handler: impl Fn(Event) + 'static) -> Option<Self> {
        let callback = Closure::<dyn Fn(Event)>::new(handler);
        match target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                target: target.clone(),
                event,
                callback,
            }),
            Err(e) => {
                log::error!("Could not listen for {}: {:?}", event, e);
                None
            }
        }
    }

    pub fn window(event: &'static str, handler: impl Fn(Event) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        Self::new(window.as_ref(), event, handler)
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
