//! Button debouncing
//!
//! One debouncer per button, called from that button's edge handler. A press
//! is accepted if it is the first one ever seen or at least the debounce
//! window has passed since the last accepted press. Elapsed time uses
//! wrapping `u32` subtraction, so a tick counter overflow between two
//! presses is harmless.

use panel_hal::TickSource;
use panel_protocol::ButtonId;

use crate::traits::EdgeHandler;

/// Per-button press filter
pub struct ButtonDebouncer<T> {
    button: ButtonId,
    ticks: T,
    window_ms: u32,
    last_accepted: Option<u32>,
}

impl<T: TickSource> ButtonDebouncer<T> {
    pub fn new(button: ButtonId, ticks: T, window_ms: u32) -> Self {
        Self {
            button,
            ticks,
            window_ms,
            last_accepted: None,
        }
    }

    pub fn button(&self) -> ButtonId {
        self.button
    }

    /// Tick of the last accepted press
    pub fn last_accepted(&self) -> Option<u32> {
        self.last_accepted
    }

    /// Decide whether an edge at `now_ms` is a new press
    pub fn accept_at(&mut self, now_ms: u32) -> bool {
        let accepted = match self.last_accepted {
            None => true,
            Some(last) => now_ms.wrapping_sub(last) >= self.window_ms,
        };
        if accepted {
            self.last_accepted = Some(now_ms);
        }
        accepted
    }
}

impl<T: TickSource> EdgeHandler for ButtonDebouncer<T> {
    fn on_edge(&mut self) -> Option<ButtonId> {
        let now = self.ticks.now_ms();
        self.accept_at(now).then_some(self.button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panel_hal::mock::MockTicks;

    #[test]
    fn test_first_edge_accepted() {
        let ticks = MockTicks::new(0);
        let mut button = ButtonDebouncer::new(ButtonId::Button2, &ticks, 300);
        assert_eq!(button.on_edge(), Some(ButtonId::Button2));
        assert_eq!(button.last_accepted(), Some(0));
    }

    #[test]
    fn test_bounce_rejected() {
        let ticks = MockTicks::new(1_000);
        let mut button = ButtonDebouncer::new(ButtonId::Button0, &ticks, 300);
        assert!(button.on_edge().is_some());

        ticks.advance(100);
        assert_eq!(button.on_edge(), None);
        // Rejected edges do not restart the window
        ticks.advance(200);
        assert_eq!(button.on_edge(), Some(ButtonId::Button0));
    }

    #[test]
    fn test_window_boundary_is_inclusive() {
        let ticks = MockTicks::new(0);
        let mut button = ButtonDebouncer::new(ButtonId::Button1, &ticks, 300);
        button.on_edge();
        ticks.set(299);
        assert_eq!(button.on_edge(), None);
        ticks.set(300);
        assert_eq!(button.on_edge(), Some(ButtonId::Button1));
    }

    #[test]
    fn test_wraparound() {
        let ticks = MockTicks::new(u32::MAX - 50);
        let mut button = ButtonDebouncer::new(ButtonId::Button3, &ticks, 300);
        assert!(button.on_edge().is_some());

        ticks.set(100);
        assert_eq!(button.on_edge(), None);
        ticks.set(249);
        assert_eq!(button.on_edge(), Some(ButtonId::Button3));
    }
}
