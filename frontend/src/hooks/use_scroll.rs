use std::cell::RefCell;
use std::rc::Rc;

use dhyan_common::scroll::{is_on_screen, FrameGate, PinTrigger, TriggerEvent, TriggerSpan};
use yew::prelude::*;

use crate::utils::dom::{rect_of, request_animation_frame, scroll_y, viewport_height, AnimationFrame};
use crate::utils::listener::Listener;

/// Scroll, wheel and resize listeners plus the frame they have queued.
/// Dropping it removes the listeners and cancels a frame that has not run.
struct FrameListeners {
    _listeners: Vec<Listener>,
    pending: Rc<RefCell<Option<AnimationFrame>>>,
}

impl Drop for FrameListeners {
    fn drop(&mut self) {
        self.pending.borrow_mut().take();
    }
}

/// Runs `on_frame` at most once per animation frame while the window scrolls,
/// takes wheel input or resizes, plus once on mount.
fn frame_listeners(on_frame: Rc<dyn Fn()>) -> FrameListeners {
    let gate = Rc::new(RefCell::new(FrameGate::default()));
    let pending: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));
    let schedule = {
        let on_frame = on_frame.clone();
        let pending = pending.clone();
        move |_: web_sys::Event| {
            if !gate.borrow_mut().try_schedule() {
                return;
            }
            let frame_gate = gate.clone();
            let on_frame = on_frame.clone();
            let frame = request_animation_frame(move || {
                frame_gate.borrow_mut().frame_done();
                on_frame();
            });
            if frame.is_none() {
                gate.borrow_mut().frame_done();
            }
            // The previous frame has already run, so replacing it cancels nothing.
            *pending.borrow_mut() = frame;
        }
    };
    let schedule = Rc::new(schedule);
    let listeners = ["scroll", "wheel", "resize"]
        .into_iter()
        .filter_map(|event| {
            let schedule = schedule.clone();
            Listener::window(event, move |e| schedule(e))
        })
        .collect();
    on_frame();
    FrameListeners {
        _listeners: listeners,
        pending,
    }
}

/// Window scroll position, frame-coalesced.
#[hook]
pub fn use_window_scroll(on_scroll: Callback<f64>) {
    let latest = use_mut_ref(|| on_scroll.clone());
    *latest.borrow_mut() = on_scroll;

    use_effect_with_deps(
        move |_| {
            let listeners = frame_listeners(Rc::new(move || {
                let callback = latest.borrow().clone();
                callback.emit(scroll_y());
            }));
            move || drop(listeners)
        },
        (),
    );
}

/// Whether any part of the referenced element is inside the viewport.
/// Re-renders only when that flips.
#[hook]
pub fn use_on_screen(node: NodeRef) -> bool {
    let on_screen = use_state_eq(|| false);

    {
        let setter = on_screen.setter();
        use_effect_with_deps(
            move |node| {
                let node = node.clone();
                let listeners = frame_listeners(Rc::new(move || {
                    let visible = rect_of(&node)
                        .map(|(top, height)| is_on_screen(top, height, viewport_height()))
                        .unwrap_or(false);
                    setter.set(visible);
                }));
                move || drop(listeners)
            },
            node,
        );
    }

    *on_screen
}

/// Feeds the referenced section's position into a [`PinTrigger`] and reports
/// every batch of lifecycle events.
#[hook]
pub fn use_pin_trigger(node: NodeRef, span: TriggerSpan, on_events: Callback<Vec<TriggerEvent>>) {
    let latest = use_mut_ref(|| on_events.clone());
    *latest.borrow_mut() = on_events;

    use_effect_with_deps(
        move |node| {
            let node = node.clone();
            let trigger = RefCell::new(PinTrigger::new(span));
            let listeners = frame_listeners(Rc::new(move || {
                let Some((top, height)) = rect_of(&node) else {
                    return;
                };
                let events = trigger.borrow_mut().update(top, height, viewport_height());
                if !events.is_empty() {
                    let callback = latest.borrow().clone();
                    callback.emit(events);
                }
            }));
            move || drop(listeners)
        },
        node,
    );
}
