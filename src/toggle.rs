//! Button conditioning primitives.
//!
//! Controller buttons come in as raw per-tick levels with no debouncing. These
//! types turn them into discrete events.

use core::time::Duration;

/// Fires while a button is held, at most once per `interval`.
///
/// Holding the button repeats at the interval's cadence. The first press of a
/// session always fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debouncer {
    interval: Duration,
    last_fired: Option<Duration>,
}

impl Debouncer {
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_fired: None,
        }
    }

    /// `now` is a monotonic timestamp, such as time since program start.
    pub fn should_fire(&mut self, pressed: bool, now: Duration) -> bool {
        if !pressed {
            return false;
        }

        let ready = match self.last_fired {
            Some(last) => now.saturating_sub(last) >= self.interval,
            None => true,
        };

        if ready {
            self.last_fired = Some(now);
        }

        ready
    }

    /// Timestamp of the last accepted press.
    pub const fn last_fired(&self) -> Option<Duration> {
        self.last_fired
    }
}

/// Flips a persistent boolean once per press.
///
/// The latch stays set while the button is held, so a long press only flips
/// the state on its rising edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EdgeToggle {
    active: bool,
    latch: bool,
}

impl EdgeToggle {
    pub const fn new() -> Self {
        Self {
            active: false,
            latch: false,
        }
    }

    /// Returns true on the tick the button goes down, flipping the toggle.
    pub fn should_fire(&mut self, pressed: bool, _now: Duration) -> bool {
        if !pressed {
            self.latch = false;
            return false;
        }

        if self.latch {
            return false;
        }

        self.latch = true;
        self.active = !self.active;
        true
    }

    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// True while the button that last fired is still held.
    pub const fn is_latched(&self) -> bool {
        self.latch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn debouncer_first_press_fires() {
        let mut debouncer = Debouncer::new(ms(100));
        assert!(debouncer.should_fire(true, ms(0)));
        assert_eq!(debouncer.last_fired(), Some(ms(0)));
    }

    #[test]
    fn debouncer_coalesces_presses_inside_window() {
        let mut debouncer = Debouncer::new(ms(100));
        assert!(debouncer.should_fire(true, ms(0)));
        assert!(!debouncer.should_fire(true, ms(20)));
        assert!(!debouncer.should_fire(true, ms(99)));
        assert!(debouncer.should_fire(true, ms(100)));
        assert!(!debouncer.should_fire(true, ms(140)));
        assert!(debouncer.should_fire(true, ms(200)));
    }

    #[test]
    fn debouncer_ignores_released_button() {
        let mut debouncer = Debouncer::new(ms(100));
        assert!(!debouncer.should_fire(false, ms(500)));
        assert_eq!(debouncer.last_fired(), None);
    }

    #[test]
    fn toggle_flips_once_per_press() {
        let mut toggle = EdgeToggle::new();

        assert!(toggle.should_fire(true, ms(0)));
        assert!(toggle.is_active());

        for tick in 1..10 {
            assert!(!toggle.should_fire(true, ms(tick * 20)));
        }
        assert!(toggle.is_active());

        assert!(!toggle.should_fire(false, ms(200)));
        assert!(toggle.should_fire(true, ms(220)));
        assert!(!toggle.is_active());
    }
}
