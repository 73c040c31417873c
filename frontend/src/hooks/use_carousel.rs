use std::cell::RefCell;
use std::rc::Rc;

use dhyan_common::{CarouselController, Mode, SectionTiming};
use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::utils::dom::now_ms;

struct Shared {
    controller: RefCell<CarouselController>,
    timer: RefCell<Option<Timeout>>,
    redraw: RefCell<Callback<()>>,
}

impl Shared {
    /// Arms one timeout for the controller's earliest deadline, replacing
    /// (and so cancelling) whatever was armed before.
    fn reschedule(self: &Rc<Self>) {
        let deadline = self.controller.borrow().next_deadline();
        let timeout = deadline.map(|at| {
            let delay = at.saturating_sub(now_ms()).min(u32::MAX as u64) as u32;
            let shared = Rc::clone(self);
            Timeout::new(delay, move || {
                let changed = shared.controller.borrow_mut().poll(now_ms());
                shared.reschedule();
                if changed {
                    shared.redraw.borrow().emit(());
                }
            })
        });
        *self.timer.borrow_mut() = timeout;
    }

    fn apply(self: &Rc<Self>, op: impl FnOnce(&mut CarouselController, u64) -> bool) {
        let changed = op(&mut self.controller.borrow_mut(), now_ms());
        self.reschedule();
        if changed {
            self.redraw.borrow().emit(());
        }
    }
}

/// Per-mount carousel state bound to browser timers.
#[derive(Clone)]
pub struct CarouselHandle {
    shared: Rc<Shared>,
    pub index: usize,
    pub len: usize,
    pub mode: Mode,
}

impl PartialEq for CarouselHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.shared, &other.shared)
            && self.index == other.index
            && self.len == other.len
            && self.mode == other.mode
    }
}

impl CarouselHandle {
    pub fn next(&self) {
        self.shared.apply(|c, now| c.next(now));
    }

    pub fn prev(&self) {
        self.shared.apply(|c, now| c.prev(now));
    }

    pub fn select(&self, index: usize) {
        self.shared.apply(|c, now| c.select(index, now));
    }

    pub fn scroll_progress(&self, progress: f64) {
        self.shared.apply(|c, now| c.on_scroll_progress(progress, now));
    }

    pub fn interact(&self) {
        self.shared.apply(|c, now| {
            c.interact(now);
            false
        });
    }

    pub fn on_select(&self) -> Callback<usize> {
        let handle = self.clone();
        Callback::from(move |index| handle.select(index))
    }
}

/// `len` is the current item count; when it changes the index resets.
/// `running` gates auto-advance (e.g. only while content is loaded).
#[hook]
pub fn use_carousel(timing: SectionTiming, len: usize, running: bool) -> CarouselHandle {
    let version = use_state(|| 0u32);
    let shared = (*use_state(|| {
        Rc::new(Shared {
            controller: RefCell::new(CarouselController::new(timing)),
            timer: RefCell::new(None),
            redraw: RefCell::new(Callback::noop()),
        })
    }))
    .clone();

    {
        let version = version.clone();
        *shared.redraw.borrow_mut() = Callback::from(move |_| version.set(*version + 1));
    }
    if shared.controller.borrow().len() != len {
        shared.controller.borrow_mut().set_len(len, now_ms());
    }

    {
        let shared = shared.clone();
        use_effect_with_deps(
            move |(_, running)| {
                if *running {
                    shared.controller.borrow_mut().start(now_ms());
                } else {
                    shared.controller.borrow_mut().stop();
                }
                shared.reschedule();
                move || {
                    shared.controller.borrow_mut().stop();
                    shared.timer.borrow_mut().take();
                }
            },
            (len, running),
        );
    }

    let controller = shared.controller.borrow();
    let (index, mode) = (controller.index(), controller.mode());
    drop(controller);
    CarouselHandle {
        shared,
        index,
        len,
        mode,
    }
}
