//! Loading delay shown between route changes
//!
//! Times are seconds on the UI clock (`egui::InputState::time`), so the same
//! timer works natively and in the browser.

use std::time::Duration;

use crate::constants::ROUTE_TRANSITION_DELAY_MS;

#[derive(Debug, Clone, PartialEq)]
pub struct RouteTransition {
    delay: Duration,
    started_at: Option<f64>,
}

impl Default for RouteTransition {
    fn default() -> Self {
        Self::new(Duration::from_millis(ROUTE_TRANSITION_DELAY_MS))
    }
}

impl RouteTransition {
    pub fn new(delay: Duration) -> Self {
        Self { delay, started_at: None }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// (Re)start the timer; a pending one is superseded
    pub fn start(&mut self, now: f64) {
        if self.delay.is_zero() {
            self.started_at = None;
            return;
        }
        self.started_at = Some(now);
    }

    /// Drop a pending timer without letting it fire
    pub fn cancel(&mut self) {
        self.started_at = None;
    }

    /// Whether the loading screen should still be shown; clears the timer once it fires
    pub fn poll(&mut self, now: f64) -> bool {
        match self.started_at {
            Some(started) if now - started < self.delay.as_secs_f64() => true,
            Some(_) => {
                self.started_at = None;
                false
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.started_at.is_some()
    }

    /// Fraction of the delay elapsed, for the progress bar
    pub fn progress(&self, now: f64) -> f32 {
        match self.started_at {
            Some(started) => ((now - started) / self.delay.as_secs_f64()).clamp(0.0, 1.0) as f32,
            None => 1.0,
        }
    }
}
