//! Index controller shared by every carousel-like section of the site.
//!
//! A [`CarouselController`] keeps a section's current item in sync with three
//! drivers: the auto-advance timer, the pinned scroll progress and manual
//! input. Time comes in as a millisecond count so the browser binding and the
//! tests drive exactly the same code.

use std::time::Duration;

/// Where the index lands when a new item list replaces the old one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialIndex {
    First,
    /// `floor(len / 2)`, used by the fanned testimonial cards.
    Centered,
}

impl InitialIndex {
    pub fn for_len(self, len: usize) -> usize {
        match self {
            InitialIndex::First => 0,
            InitialIndex::Centered => len / 2,
        }
    }
}

/// Current item of a fixed-length list. Every operation is a no-op on an
/// empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndexState {
    index: usize,
    len: usize,
}

impl IndexState {
    pub fn new(len: usize, initial: InitialIndex) -> Self {
        let mut state = Self::default();
        state.reset(len, initial);
        state
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current index, `0` while the list is empty.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<usize> {
        (!self.is_empty()).then_some(self.index)
    }

    /// Returns true when the index moved.
    pub fn advance(&mut self) -> bool {
        self.advance_by(1)
    }

    pub fn advance_by(&mut self, steps: u64) -> bool {
        if self.len == 0 {
            return false;
        }
        let len = self.len as u64;
        let next = (self.index as u64 + steps % len) % len;
        self.replace(next as usize)
    }

    pub fn retreat(&mut self) -> bool {
        if self.len == 0 {
            return false;
        }
        let prev = (self.index + self.len - 1) % self.len;
        self.replace(prev)
    }

    /// Out-of-range requests clamp to the last item.
    pub fn set_index(&mut self, index: usize) -> bool {
        if self.len == 0 {
            return false;
        }
        self.replace(index.min(self.len - 1))
    }

    pub fn reset(&mut self, len: usize, initial: InitialIndex) {
        self.len = len;
        self.index = if len == 0 { 0 } else { initial.for_len(len) };
    }

    fn replace(&mut self, index: usize) -> bool {
        let changed = self.index != index;
        self.index = index;
        changed
    }
}

/// Maps a pinned-scroll progress onto an item index.
///
/// `progress` is clamped into `[0, 1]` (NaN counts as 0) and `1.0` lands on
/// the last item, never one past it.
pub fn map_progress(progress: f64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let progress = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };
    let raw = (progress * len as f64).floor() as usize;
    Some(raw.min(len - 1))
}

/// Signed distance from `current` to `index` going the short way round.
pub fn wrapped_offset(index: usize, current: usize, len: usize) -> isize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    let mut offset = index as isize - current as isize;
    if 2 * offset > len {
        offset -= len;
    }
    if 2 * offset < -len {
        offset += len;
    }
    offset
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The timer drives the index.
    Auto,
    /// Recent manual input suppresses the timer.
    Manual,
}

/// Per-section timing constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionTiming {
    pub advance_every: Option<Duration>,
    /// Quiet period after manual input before the timer resumes. `None` keeps
    /// the section manual for the rest of the mount.
    pub suppress_for: Option<Duration>,
    /// Window after an index change during which click navigation is ignored
    /// and scroll targets are deferred.
    pub transition_lock: Option<Duration>,
    pub initial: InitialIndex,
}

impl SectionTiming {
    pub const FEATURES: SectionTiming = SectionTiming {
        advance_every: None,
        suppress_for: None,
        transition_lock: Some(Duration::from_millis(1_000)),
        initial: InitialIndex::First,
    };

    pub const SOCIAL: SectionTiming = SectionTiming {
        advance_every: Some(Duration::from_millis(4_000)),
        suppress_for: Some(Duration::from_millis(3_000)),
        transition_lock: None,
        initial: InitialIndex::First,
    };

    pub const TESTIMONIALS: SectionTiming = SectionTiming {
        advance_every: None,
        suppress_for: None,
        transition_lock: Some(Duration::from_millis(500)),
        initial: InitialIndex::Centered,
    };

    pub const HERO_PHONE: SectionTiming = SectionTiming {
        advance_every: Some(Duration::from_millis(5_000)),
        suppress_for: Some(Duration::from_millis(2_000)),
        transition_lock: None,
        initial: InitialIndex::First,
    };
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX).max(1)
}

/// Index state plus the auto-advance, suppression and transition-lock
/// deadlines of one mounted section.
///
/// Nothing here owns a timer. The caller asks [`next_deadline`] when to wake
/// up and calls [`poll`] at (or after) that time; dropping the caller's timer
/// is all it takes to stop the controller.
///
/// [`next_deadline`]: CarouselController::next_deadline
/// [`poll`]: CarouselController::poll
#[derive(Debug, Clone)]
pub struct CarouselController {
    items: IndexState,
    timing: SectionTiming,
    mode: Mode,
    running: bool,
    resume_at: Option<u64>,
    next_advance_at: Option<u64>,
    locked_until: Option<u64>,
    pending_target: Option<usize>,
}

impl CarouselController {
    pub fn new(timing: SectionTiming) -> Self {
        Self {
            items: IndexState::default(),
            timing,
            mode: Mode::Auto,
            running: false,
            resume_at: None,
            next_advance_at: None,
            locked_until: None,
            pending_target: None,
        }
    }

    pub fn timing(&self) -> SectionTiming {
        self.timing
    }

    pub fn index(&self) -> usize {
        self.items.index()
    }

    pub fn current(&self) -> Option<usize> {
        self.items.current()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Section became visible: arm the auto-advance timer.
    pub fn start(&mut self, now_ms: u64) {
        self.running = true;
        self.arm_advance(now_ms);
    }

    /// Section hidden or unmounting. The suppression deadline survives so a
    /// later `start` still honours it.
    pub fn stop(&mut self) {
        self.running = false;
        self.next_advance_at = None;
    }

    /// Replaces the item count. Returns true when the list actually changed
    /// length, in which case the index is reset to the section's initial one.
    pub fn set_len(&mut self, len: usize, now_ms: u64) -> bool {
        if len == self.items.len() {
            return false;
        }
        self.items.reset(len, self.timing.initial);
        self.locked_until = None;
        self.pending_target = None;
        self.arm_advance(now_ms);
        log::debug!(
            "carousel: item count now {} (index {})",
            len,
            self.items.index()
        );
        true
    }

    pub fn next(&mut self, now_ms: u64) -> bool {
        self.navigate(now_ms, IndexState::advance)
    }

    pub fn prev(&mut self, now_ms: u64) -> bool {
        self.navigate(now_ms, IndexState::retreat)
    }

    pub fn select(&mut self, index: usize, now_ms: u64) -> bool {
        self.navigate(now_ms, |items| items.set_index(index))
    }

    /// Feeds a pinned-scroll progress value. A different mapped index counts
    /// as manual navigation.
    pub fn on_scroll_progress(&mut self, progress: f64, now_ms: u64) -> bool {
        let changed = self.poll(now_ms);
        let Some(target) = map_progress(progress, self.items.len()) else {
            return changed;
        };
        if target == self.items.index() {
            self.pending_target = None;
            return changed;
        }
        self.interact(now_ms);
        if self.is_locked(now_ms) {
            self.pending_target = Some(target);
            return changed;
        }
        self.items.set_index(target);
        self.lock(now_ms);
        true
    }

    /// Manual input that does not by itself move the index (wheel, touch
    /// drag). Restarts the suppression window.
    pub fn interact(&mut self, now_ms: u64) {
        self.mode = Mode::Manual;
        self.next_advance_at = None;
        self.resume_at = self
            .timing
            .suppress_for
            .map(|window| now_ms.saturating_add(millis(window)));
    }

    /// Earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<u64> {
        [self.locked_until, self.resume_at, self.next_advance_at]
            .into_iter()
            .flatten()
            .min()
    }

    /// Processes every deadline due at `now_ms`, oldest first. Returns true
    /// when the index moved.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        let mut changed = false;
        while let Some(due) = self.next_deadline().filter(|due| *due <= now_ms) {
            if self.locked_until == Some(due) {
                self.locked_until = None;
                if let Some(target) = self.pending_target.take() {
                    if self.items.set_index(target) {
                        changed = true;
                        self.lock(due);
                    }
                }
            } else if self.resume_at == Some(due) {
                self.resume_at = None;
                self.mode = Mode::Auto;
                self.arm_advance(due);
            } else if let Some(at) = self.next_advance_at {
                let period = self.timing.advance_every.map_or(u64::MAX, millis);
                // A throttled tab may wake up several periods late; fold the
                // missed ticks into one move.
                let missed = (now_ms - at) / period + 1;
                changed |= self.items.advance_by(missed);
                self.next_advance_at = Some(at.saturating_add(missed.saturating_mul(period)));
            }
        }
        changed
    }

    fn navigate(&mut self, now_ms: u64, step: impl FnOnce(&mut IndexState) -> bool) -> bool {
        if self.items.is_empty() {
            return false;
        }
        let mut changed = self.poll(now_ms);
        self.interact(now_ms);
        if self.is_locked(now_ms) {
            return changed;
        }
        if step(&mut self.items) {
            self.pending_target = None;
            self.lock(now_ms);
            changed = true;
        }
        changed
    }

    fn is_locked(&self, now_ms: u64) -> bool {
        self.locked_until.is_some_and(|until| now_ms < until)
    }

    fn lock(&mut self, now_ms: u64) {
        self.locked_until = self
            .timing
            .transition_lock
            .map(|window| now_ms.saturating_add(millis(window)));
    }

    fn arm_advance(&mut self, now_ms: u64) {
        self.next_advance_at = match self.timing.advance_every {
            Some(period) if self.running && self.mode == Mode::Auto && !self.items.is_empty() => {
                Some(now_ms.saturating_add(millis(period)))
            }
            _ => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn social(len: usize) -> CarouselController {
        let mut carousel = CarouselController::new(SectionTiming::SOCIAL);
        carousel.start(0);
        carousel.set_len(len, 0);
        carousel
    }

    #[test]
    fn full_progress_maps_to_last_item() {
        assert_eq!(map_progress(1.0, 5), Some(4));
        assert_eq!(map_progress(0.0, 5), Some(0));
        assert_eq!(map_progress(0.5, 4), Some(2));
        assert_eq!(map_progress(0.2, 5), Some(1));
        assert_eq!(map_progress(f64::NAN, 3), Some(0));
        assert_eq!(map_progress(7.0, 3), Some(2));
        assert_eq!(map_progress(0.3, 0), None);
    }

    #[test]
    fn empty_list_ignores_every_operation() {
        let mut items = IndexState::default();
        assert!(!items.advance());
        assert!(!items.retreat());
        assert!(!items.set_index(2));
        assert_eq!(items.current(), None);

        let mut carousel = CarouselController::new(SectionTiming::SOCIAL);
        carousel.start(0);
        assert!(!carousel.next(10));
        assert!(!carousel.prev(20));
        assert!(!carousel.select(2, 30));
        assert!(!carousel.on_scroll_progress(0.7, 40));
        assert_eq!(carousel.next_deadline(), None);
        assert_eq!(carousel.mode(), Mode::Auto);
    }

    #[test]
    fn retreat_wraps_to_the_end() {
        let mut items = IndexState::new(3, InitialIndex::First);
        assert!(items.retreat());
        assert_eq!(items.index(), 2);
        assert!(items.set_index(0));
        assert!(items.set_index(10));
        assert_eq!(items.index(), 2);
    }

    #[test]
    fn content_arrival_resets_to_initial_index() {
        let mut testimonials = CarouselController::new(SectionTiming::TESTIMONIALS);
        assert_eq!(testimonials.current(), None);
        assert!(testimonials.set_len(6, 0));
        assert_eq!(testimonials.current(), Some(3));
        assert!(!testimonials.set_len(6, 10));

        let mut features = CarouselController::new(SectionTiming::FEATURES);
        features.set_len(5, 0);
        assert_eq!(features.current(), Some(0));
    }

    #[test]
    fn manual_scroll_then_auto_resume() {
        let mut carousel = social(4);

        assert!(carousel.next(0));
        assert_eq!((carousel.index(), carousel.mode()), (1, Mode::Manual));

        assert!(carousel.next(1_000));
        assert_eq!(carousel.index(), 2);
        assert_eq!(carousel.next_deadline(), Some(4_000));

        assert!(!carousel.poll(3_999));
        assert_eq!(carousel.mode(), Mode::Manual);

        assert!(!carousel.poll(4_000));
        assert_eq!(carousel.mode(), Mode::Auto);
        assert_eq!(carousel.next_deadline(), Some(8_000));

        assert!(!carousel.poll(7_999));
        assert!(carousel.poll(8_000));
        assert_eq!(carousel.index(), 3);
    }

    #[test]
    fn timer_is_silent_inside_the_suppression_window() {
        let mut carousel = social(5);
        carousel.select(2, 3_900);
        // The original 4s tick would have fired here.
        assert!(!carousel.poll(4_000));
        assert!(!carousel.poll(6_899));
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn interaction_restarts_the_window_instead_of_queueing() {
        let mut carousel = social(3);
        carousel.interact(0);
        carousel.interact(2_500);
        assert!(!carousel.poll(3_000));
        assert_eq!(carousel.mode(), Mode::Manual);
        carousel.poll(5_500);
        assert_eq!(carousel.mode(), Mode::Auto);
    }

    #[test]
    fn late_poll_folds_missed_ticks() {
        let mut carousel = social(4);
        // Ticks due at 4s, 8s and 12s collapse into one move of three.
        assert!(carousel.poll(13_000));
        assert_eq!(carousel.index(), 3);
        assert_eq!(carousel.next_deadline(), Some(16_000));
    }

    #[test]
    fn stopped_controller_does_not_advance() {
        let mut carousel = social(4);
        carousel.stop();
        assert!(!carousel.is_running());
        assert_eq!(carousel.next_deadline(), None);
        assert!(!carousel.poll(60_000));
        carousel.start(60_000);
        assert!(carousel.is_running());
        assert_eq!(carousel.next_deadline(), Some(64_000));
    }

    #[test]
    fn off_screen_pause_keeps_index_and_rearms_on_return() {
        let mut carousel = social(4);
        assert!(carousel.poll(4_000));
        assert_eq!(carousel.index(), 1);

        carousel.stop();
        assert!(!carousel.poll(12_000));
        assert_eq!(carousel.index(), 1);

        carousel.start(20_000);
        assert!(!carousel.poll(23_999));
        assert!(carousel.poll(24_000));
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn scroll_progress_counts_as_manual_navigation() {
        let mut carousel = social(4);
        assert!(!carousel.on_scroll_progress(0.1, 100));
        assert_eq!(carousel.mode(), Mode::Auto);
        assert!(carousel.on_scroll_progress(0.8, 200));
        assert_eq!((carousel.index(), carousel.mode()), (3, Mode::Manual));
    }

    #[test]
    fn locked_transition_defers_scroll_and_drops_clicks() {
        let mut features = CarouselController::new(SectionTiming::FEATURES);
        features.set_len(5, 0);

        assert!(features.on_scroll_progress(0.25, 0));
        assert_eq!(features.index(), 1);

        assert!(!features.on_scroll_progress(0.45, 300));
        assert!(!features.on_scroll_progress(0.65, 600));
        assert!(!features.next(700));
        assert_eq!(features.index(), 1);

        assert!(features.poll(1_000));
        assert_eq!(features.index(), 3);
        assert_eq!(features.next_deadline(), Some(2_000));
    }

    #[test]
    fn scrolling_back_cancels_a_deferred_target() {
        let mut features = CarouselController::new(SectionTiming::FEATURES);
        features.set_len(4, 0);
        features.on_scroll_progress(0.3, 0);
        features.on_scroll_progress(0.6, 100);
        features.on_scroll_progress(0.3, 200);
        assert!(!features.poll(1_000));
        assert_eq!(features.index(), 1);
    }

    #[test]
    fn section_without_suppression_window_stays_manual() {
        let mut testimonials = CarouselController::new(SectionTiming::TESTIMONIALS);
        testimonials.set_len(5, 0);
        testimonials.prev(0);
        assert_eq!(testimonials.index(), 1);
        assert_eq!(testimonials.mode(), Mode::Manual);
        testimonials.poll(1_000_000);
        assert_eq!(testimonials.mode(), Mode::Manual);
    }

    #[test]
    fn wrapped_offset_takes_the_short_way() {
        assert_eq!(wrapped_offset(0, 5, 6), 1);
        assert_eq!(wrapped_offset(5, 0, 6), -1);
        assert_eq!(wrapped_offset(3, 1, 6), 2);
        assert_eq!(wrapped_offset(4, 1, 6), 3);
        assert_eq!(wrapped_offset(2, 2, 6), 0);
        assert_eq!(wrapped_offset(1, 0, 0), 0);
    }

    proptest! {
        #[test]
        fn mapped_index_is_always_in_range(progress in 0.0f64..=1.0, len in 1usize..200) {
            let index = map_progress(progress, len).unwrap();
            prop_assert!(index < len);
            prop_assert_eq!(index, ((progress * len as f64).floor() as usize).min(len - 1));
        }

        #[test]
        fn advancing_len_times_returns_home(len in 1usize..64, start in 0usize..64) {
            let mut items = IndexState::new(len, InitialIndex::First);
            items.set_index(start);
            let origin = items.index();
            for _ in 0..len {
                items.advance();
            }
            prop_assert_eq!(items.index(), origin);
        }

        #[test]
        fn reset_never_leaves_the_range(len in 0usize..64, centered in any::<bool>()) {
            let initial = if centered { InitialIndex::Centered } else { InitialIndex::First };
            let items = IndexState::new(len, initial);
            prop_assert!(items.current().map_or(true, |index| index < len));
        }
    }
}
