//! Scroll choreography without the browser: pinned-range progress, trigger
//! lifecycle events, per-frame coalescing, the social section's delta stepper
//! and the hero auto-scroll latch.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Down,
    Up,
}

/// How far the trigger range extends below the section's top edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerSpan {
    /// Section stays pinned while its extra height scrolls by
    /// (`height - viewport`).
    Pinned,
    /// From the top edge reaching the viewport top until the bottom edge
    /// does (`height`).
    FullHeight,
}

impl TriggerSpan {
    fn range(self, height: f64, viewport: f64) -> f64 {
        let range = match self {
            TriggerSpan::Pinned => height - viewport,
            TriggerSpan::FullHeight => height,
        };
        range.max(0.0)
    }
}

/// Progress through a pinned section given its bounding-rect `top`.
pub fn pinned_progress(top: f64, height: f64, viewport: f64) -> f64 {
    progress_in(top, TriggerSpan::Pinned.range(height, viewport))
}

/// Whether any part of a section with this bounding rect is inside the
/// viewport.
pub fn is_on_screen(top: f64, height: f64, viewport: f64) -> bool {
    height > 0.0 && top < viewport && top + height > 0.0
}

fn progress_in(top: f64, range: f64) -> f64 {
    if range <= 0.0 {
        return if top <= 0.0 { 1.0 } else { 0.0 };
    }
    (-top / range).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriggerEvent {
    Enter,
    Leave,
    EnterBack,
    LeaveBack,
    Update {
        progress: f64,
        direction: ScrollDirection,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Zone {
    Before,
    Active,
    After,
}

/// Tracks one section against the viewport and reports what changed since
/// the previous measurement.
#[derive(Debug, Clone)]
pub struct PinTrigger {
    span: TriggerSpan,
    zone: Option<Zone>,
    last_top: Option<f64>,
    last_progress: Option<f64>,
}

impl PinTrigger {
    pub fn new(span: TriggerSpan) -> Self {
        Self {
            span,
            zone: None,
            last_top: None,
            last_progress: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.zone == Some(Zone::Active)
    }

    pub fn progress(&self) -> f64 {
        self.last_progress.unwrap_or(0.0)
    }

    /// `top` and `height` come from the section's bounding rect, `viewport`
    /// is the window's inner height.
    pub fn update(&mut self, top: f64, height: f64, viewport: f64) -> Vec<TriggerEvent> {
        let range = self.span.range(height, viewport);
        let zone = if top > 0.0 {
            Zone::Before
        } else if -top < range {
            Zone::Active
        } else {
            Zone::After
        };
        let direction = match self.last_top.replace(top) {
            Some(previous) if top > previous => ScrollDirection::Up,
            _ => ScrollDirection::Down,
        };
        let previous = self.zone.replace(zone).unwrap_or(Zone::Before);

        let (entered, left) = match (previous, zone) {
            (Zone::Before, Zone::Active) => (Some(TriggerEvent::Enter), None),
            (Zone::Before, Zone::After) => {
                (Some(TriggerEvent::Enter), Some(TriggerEvent::Leave))
            }
            (Zone::Active, Zone::After) => (None, Some(TriggerEvent::Leave)),
            (Zone::After, Zone::Active) => (Some(TriggerEvent::EnterBack), None),
            (Zone::After, Zone::Before) => {
                (Some(TriggerEvent::EnterBack), Some(TriggerEvent::LeaveBack))
            }
            (Zone::Active, Zone::Before) => (None, Some(TriggerEvent::LeaveBack)),
            _ => (None, None),
        };

        let mut events = Vec::with_capacity(3);
        events.extend(entered);
        if zone == Zone::Active || entered.is_some() || left.is_some() {
            let progress = progress_in(top, range);
            if self.last_progress != Some(progress) {
                self.last_progress = Some(progress);
                events.push(TriggerEvent::Update {
                    progress,
                    direction,
                });
            }
        }
        events.extend(left);
        events
    }
}

/// At most one handling pass per animation frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// True when the caller should request a frame; false while one is
    /// already queued.
    pub fn try_schedule(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn frame_done(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

pub const SOCIAL_STEP_THRESHOLD_PX: f64 = 50.0;

/// Turns window scroll positions into discrete next/previous steps when a
/// single handling pass moved further than `threshold` pixels.
#[derive(Debug, Clone)]
pub struct ScrollStepper {
    threshold: f64,
    last_y: Option<f64>,
}

impl ScrollStepper {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            last_y: None,
        }
    }

    pub fn observe(&mut self, y: f64) -> Option<ScrollDirection> {
        let previous = self.last_y.replace(y)?;
        let delta = y - previous;
        if delta.abs() <= self.threshold {
            return None;
        }
        Some(if delta > 0.0 {
            ScrollDirection::Down
        } else {
            ScrollDirection::Up
        })
    }
}

impl Default for ScrollStepper {
    fn default() -> Self {
        Self::new(SOCIAL_STEP_THRESHOLD_PX)
    }
}

/// One-shot hero → features auto-scroll, re-armed once the user is back near
/// the top of the page.
#[derive(Debug, Clone)]
pub struct AutoScrollLatch {
    threshold: f64,
    rearm_below_px: f64,
    triggered: bool,
    in_flight: bool,
}

impl Default for AutoScrollLatch {
    fn default() -> Self {
        Self {
            threshold: 0.8,
            rearm_below_px: 100.0,
            triggered: false,
            in_flight: false,
        }
    }
}

impl AutoScrollLatch {
    /// Feed hero trigger events; returns true when the auto-scroll should
    /// start now.
    pub fn on_event(&mut self, event: TriggerEvent) -> bool {
        match event {
            TriggerEvent::Update {
                progress,
                direction: ScrollDirection::Down,
            } if progress > self.threshold => self.fire(),
            TriggerEvent::Leave => self.fire(),
            _ => false,
        }
    }

    pub fn on_scroll_y(&mut self, y: f64) {
        if y < self.rearm_below_px {
            self.triggered = false;
        }
    }

    pub fn complete(&mut self) {
        self.in_flight = false;
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    fn fire(&mut self) -> bool {
        if self.triggered || self.in_flight {
            return false;
        }
        self.triggered = true;
        self.in_flight = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const VIEWPORT: f64 = 800.0;

    fn update(progress: f64, direction: ScrollDirection) -> TriggerEvent {
        TriggerEvent::Update {
            progress,
            direction,
        }
    }

    #[test]
    fn pinned_progress_clamps() {
        assert_eq!(pinned_progress(100.0, 4000.0, VIEWPORT), 0.0);
        assert_eq!(pinned_progress(-1600.0, 4000.0, VIEWPORT), 0.5);
        assert_eq!(pinned_progress(-5000.0, 4000.0, VIEWPORT), 1.0);
        assert_eq!(pinned_progress(-10.0, 600.0, VIEWPORT), 1.0);
    }

    #[test]
    fn trigger_reports_enter_update_leave() {
        let mut trigger = PinTrigger::new(TriggerSpan::Pinned);
        assert_eq!(trigger.update(400.0, 4000.0, VIEWPORT), vec![]);
        assert_eq!(
            trigger.update(-800.0, 4000.0, VIEWPORT),
            vec![TriggerEvent::Enter, update(0.25, ScrollDirection::Down)]
        );
        assert!(trigger.is_active());
        assert_eq!(trigger.update(-800.0, 4000.0, VIEWPORT), vec![]);
        assert_eq!(
            trigger.update(-3300.0, 4000.0, VIEWPORT),
            vec![update(1.0, ScrollDirection::Down), TriggerEvent::Leave]
        );
        assert!(!trigger.is_active());
        assert_eq!(
            trigger.update(-1600.0, 4000.0, VIEWPORT),
            vec![TriggerEvent::EnterBack, update(0.5, ScrollDirection::Up)]
        );
        assert_eq!(
            trigger.update(50.0, 4000.0, VIEWPORT),
            vec![update(0.0, ScrollDirection::Up), TriggerEvent::LeaveBack]
        );
    }

    #[test]
    fn jumping_over_the_range_fires_both_edges() {
        let mut trigger = PinTrigger::new(TriggerSpan::FullHeight);
        trigger.update(10.0, 900.0, VIEWPORT);
        assert_eq!(
            trigger.update(-2000.0, 900.0, VIEWPORT),
            vec![
                TriggerEvent::Enter,
                update(1.0, ScrollDirection::Down),
                TriggerEvent::Leave
            ]
        );
    }

    #[test]
    fn on_screen_means_overlapping_the_viewport() {
        assert!(is_on_screen(0.0, 900.0, 800.0));
        assert!(is_on_screen(799.0, 900.0, 800.0));
        assert!(is_on_screen(-899.0, 900.0, 800.0));
        assert!(!is_on_screen(800.0, 900.0, 800.0));
        assert!(!is_on_screen(-900.0, 900.0, 800.0));
        assert!(!is_on_screen(100.0, 0.0, 800.0));
    }

    #[test]
    fn frame_gate_coalesces_bursts() {
        let mut gate = FrameGate::default();
        assert!(gate.try_schedule());
        assert!(!gate.try_schedule());
        assert!(gate.is_pending());
        gate.frame_done();
        assert!(!gate.is_pending());
        assert!(gate.try_schedule());
    }

    #[test]
    fn stepper_needs_a_baseline_and_a_threshold() {
        let mut stepper = ScrollStepper::default();
        assert_eq!(stepper.observe(1200.0), None);
        assert_eq!(stepper.observe(1240.0), None);
        assert_eq!(stepper.observe(1300.0), Some(ScrollDirection::Down));
        assert_eq!(stepper.observe(1200.0), Some(ScrollDirection::Up));
    }

    #[test]
    fn auto_scroll_fires_once_until_rearmed() {
        let mut latch = AutoScrollLatch::default();
        assert!(!latch.on_event(update(0.5, ScrollDirection::Down)));
        assert!(!latch.on_event(update(0.9, ScrollDirection::Up)));
        assert!(latch.on_event(update(0.85, ScrollDirection::Down)));
        assert!(!latch.on_event(TriggerEvent::Leave));

        latch.complete();
        latch.on_scroll_y(500.0);
        assert!(!latch.on_event(TriggerEvent::Leave));

        latch.on_scroll_y(20.0);
        assert!(latch.on_event(TriggerEvent::Leave));
        assert!(latch.is_in_flight());
    }
}
