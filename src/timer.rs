//! Debounce Timer
//!
//! Keyboard state is polled every frame, so a held key would fire its bound
//! action once per frame. A `DebounceTimer` opens a short cooldown window after
//! each action; while the window is open, repeat input is ignored.

use std::time::{Duration, Instant};

/// Cooldown window gating repeat-fire of discrete menu actions
///
/// The timer never reads the clock itself. Callers pass a monotonic
/// `Instant` to both `activate` and `tick`, which keeps frame logic
/// deterministic under test.
///
/// # Example
///
/// ```ignore
/// let mut timer = DebounceTimer::new(Duration::from_millis(200));
/// let now = Instant::now();
///
/// timer.tick(now);
/// if !timer.is_active() {
///     timer.activate(now);
///     cursor.move_down();
/// }
/// ```
#[derive(Debug, Clone)]
pub struct DebounceTimer {
    duration: Duration,
    active: bool,
    start_time: Option<Instant>,
}

impl DebounceTimer {
    /// Creates an inactive timer with the given cooldown length
    pub fn new(duration: Duration) -> Self {
        DebounceTimer {
            duration,
            active: false,
            start_time: None,
        }
    }

    /// Opens the cooldown window at `now`
    ///
    /// Calling this while already active restarts the window.
    pub fn activate(&mut self, now: Instant) {
        self.active = true;
        self.start_time = Some(now);
    }

    /// Advances the timer; must be called once per frame
    ///
    /// Deactivates on the first tick where the elapsed time reaches the
    /// cooldown duration.
    pub fn tick(&mut self, now: Instant) {
        if !self.active {
            return;
        }

        if let Some(start) = self.start_time {
            if now.saturating_duration_since(start) >= self.duration {
                self.active = false;
                self.start_time = None;
            }
        }
    }

    /// True while the cooldown is in effect
    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COOLDOWN: Duration = Duration::from_millis(200);

    #[test]
    fn test_timer_starts_inactive() {
        let timer = DebounceTimer::new(COOLDOWN);
        assert!(!timer.is_active());
    }

    #[test]
    fn test_timer_stays_active_within_window() {
        let start = Instant::now();
        let mut timer = DebounceTimer::new(COOLDOWN);

        timer.activate(start);
        timer.tick(start + Duration::from_millis(16));
        assert!(timer.is_active());

        timer.tick(start + Duration::from_millis(199));
        assert!(timer.is_active());
    }

    #[test]
    fn test_timer_expires_at_duration() {
        let start = Instant::now();
        let mut timer = DebounceTimer::new(COOLDOWN);

        timer.activate(start);
        timer.tick(start + COOLDOWN);
        assert!(!timer.is_active());
    }

    #[test]
    fn test_reactivation_restarts_window() {
        let start = Instant::now();
        let mut timer = DebounceTimer::new(COOLDOWN);

        timer.activate(start);
        timer.activate(start + Duration::from_millis(150));

        // 200ms after the first activation, but only 50ms after the second
        timer.tick(start + COOLDOWN);
        assert!(timer.is_active());

        timer.tick(start + Duration::from_millis(350));
        assert!(!timer.is_active());
    }

    #[test]
    fn test_tick_while_inactive_is_noop() {
        let start = Instant::now();
        let mut timer = DebounceTimer::new(COOLDOWN);

        timer.tick(start);
        timer.tick(start + Duration::from_secs(5));
        assert!(!timer.is_active());
    }
}
