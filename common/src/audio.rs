//! Audio scrubber state for the article player. The `<audio>` element stays
//! the clock; this only mirrors what it reports and decides where to seek.

pub const SPEED_STEPS: [f64; 4] = [1.0, 1.5, 2.0, 0.5];
pub const SKIP_SECONDS: f64 = 5.0;

/// Everything that can change the player, from the media element or the
/// controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaybackEvent {
    Reset,
    Playing(bool),
    Duration(f64),
    Time(f64),
    Seek(f64),
    CycleSpeed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    playing: bool,
    current: f64,
    duration: f64,
    speed: f64,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            playing: false,
            current: 0.0,
            duration: 0.0,
            speed: SPEED_STEPS[0],
        }
    }
}

impl PlaybackState {
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn apply(&mut self, event: PlaybackEvent) {
        match event {
            PlaybackEvent::Reset => *self = Self::default(),
            PlaybackEvent::Playing(playing) => self.set_playing(playing),
            PlaybackEvent::Duration(duration) => self.set_duration(duration),
            PlaybackEvent::Time(current) => self.time_update(current),
            PlaybackEvent::Seek(target) => {
                self.seek(target);
            }
            PlaybackEvent::CycleSpeed => {
                self.cycle_speed();
            }
        }
    }

    /// Flips play/pause and returns the new playing flag.
    pub fn toggle(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    pub fn set_duration(&mut self, duration: f64) {
        self.duration = if duration.is_finite() {
            duration.max(0.0)
        } else {
            0.0
        };
        self.current = self.clamp(self.current);
    }

    pub fn time_update(&mut self, current: f64) {
        if current.is_finite() {
            self.current = current.max(0.0);
        }
    }

    /// Returns the position the element should jump to.
    pub fn seek(&mut self, target: f64) -> f64 {
        self.current = self.clamp(target);
        self.current
    }

    pub fn skip(&mut self, delta: f64) -> f64 {
        self.seek(self.current + delta)
    }

    /// Next entry of [`SPEED_STEPS`]; an unknown speed restarts the cycle.
    pub fn cycle_speed(&mut self) -> f64 {
        let next = SPEED_STEPS
            .iter()
            .position(|step| (*step - self.speed).abs() < f64::EPSILON)
            .map(|idx| (idx + 1) % SPEED_STEPS.len())
            .unwrap_or(0);
        self.speed = SPEED_STEPS[next];
        self.speed
    }

    pub fn label(&self) -> String {
        format!("{}x", self.speed)
    }

    fn clamp(&self, target: f64) -> f64 {
        if !target.is_finite() {
            return 0.0;
        }
        target.clamp(0.0, self.duration)
    }
}

/// `m:ss`; anything that isn't a finite, non-negative number reads `0:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let whole = seconds.floor() as u64;
    format!("{}:{:02}", whole / 60, whole % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn skip_is_clamped_to_the_track() {
        let mut state = PlaybackState::default();
        state.set_duration(12.0);
        assert_eq!(state.skip(-SKIP_SECONDS), 0.0);
        assert_eq!(state.skip(SKIP_SECONDS), 5.0);
        state.time_update(10.0);
        assert_eq!(state.skip(SKIP_SECONDS), 12.0);
    }

    #[test]
    fn speed_cycles_through_steps() {
        let mut state = PlaybackState::default();
        let seen: Vec<f64> = (0..4).map(|_| state.cycle_speed()).collect();
        assert_eq!(seen, vec![1.5, 2.0, 0.5, 1.0]);
        assert_eq!(state.label(), "1x");
    }

    #[test]
    fn unknown_duration_pins_position_to_zero() {
        let mut state = PlaybackState::default();
        state.set_duration(f64::NAN);
        assert_eq!(state.seek(30.0), 0.0);
    }

    #[test]
    fn time_is_minutes_and_padded_seconds() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(65.9), "1:05");
        assert_eq!(format_time(600.0), "10:00");
        assert_eq!(format_time(f64::NAN), "0:00");
    }

    #[test]
    fn events_in_one_tick_all_land() {
        let mut state = PlaybackState::default();
        for event in [
            PlaybackEvent::Duration(90.0),
            PlaybackEvent::Playing(true),
            PlaybackEvent::Time(12.5),
        ] {
            state.apply(event);
        }
        assert_eq!(state.duration(), 90.0);
        assert!(state.is_playing());
        assert_eq!(state.current(), 12.5);

        state.apply(PlaybackEvent::Seek(120.0));
        assert_eq!(state.current(), 90.0);
        state.apply(PlaybackEvent::CycleSpeed);
        assert_eq!(state.speed(), 1.5);
        state.apply(PlaybackEvent::Reset);
        assert_eq!(state, PlaybackState::default());
    }

    #[test]
    fn toggle_flips_playing() {
        let mut state = PlaybackState::default();
        assert!(state.toggle());
        assert!(!state.toggle());
    }
}
