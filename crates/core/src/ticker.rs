//! Fixed-period tick scheduler.
//!
//! The engine never reads the wall clock. Callers feed elapsed milliseconds
//! in and get back how many gravity ticks are due, so tests can drive
//! [`GameState::tick`](crate::GameState::tick) directly.

use crate::types::TICK_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticker {
    period_ms: u32,
    accumulated_ms: u32,
}

impl Ticker {
    /// A ticker firing every `period_ms` milliseconds. A zero period is
    /// treated as 1 ms.
    pub fn new(period_ms: u32) -> Self {
        Self {
            period_ms: period_ms.max(1),
            accumulated_ms: 0,
        }
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Account for `elapsed_ms` and return the number of ticks now due.
    ///
    /// The remainder carries over to the next call.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let total = self.accumulated_ms.saturating_add(elapsed_ms);
        self.accumulated_ms = total % self.period_ms;
        total / self.period_ms
    }

    /// Milliseconds until the next tick is due.
    pub fn until_next_ms(&self) -> u32 {
        self.period_ms - self.accumulated_ms
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TICK_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_period() {
        let mut t = Ticker::new(250);
        assert_eq!(t.advance(100), 0);
        assert_eq!(t.until_next_ms(), 150);
        assert_eq!(t.advance(150), 1);
        assert_eq!(t.until_next_ms(), 250);
    }

    #[test]
    fn carries_remainder_and_catches_up() {
        let mut t = Ticker::default();
        assert_eq!(t.advance(600), 2);
        assert_eq!(t.advance(150), 1);
        assert_eq!(t.until_next_ms(), 250);
    }

    #[test]
    fn zero_period_is_clamped() {
        let mut t = Ticker::new(0);
        assert_eq!(t.period_ms(), 1);
        assert_eq!(t.advance(3), 3);
    }
}
