//! Timer module - the depleting countdown behind Reveal and RoundEnd
//!
//! Each tick subtracts `DEPLETION_UNIT / ((board_size - 1) + level / 5)`.
//! The denominator grows with difficulty, so bigger boards and later levels
//! drain the bar more slowly and get more time to memorise the pattern.

use crate::types::{DEPLETION_UNIT, TIME_BUDGET};

/// Countdown reset to a fixed budget at the start of each timed phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timer {
    budget: f64,
    time_left: f64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new(TIME_BUDGET)
    }
}

/// Amount removed by one tick.
///
/// A non-positive denominator (board size 1 at level 0) drains the whole
/// budget in a single tick instead of dividing by zero.
pub fn depletion_per_tick(board_size: u32, level: u32, budget: f64) -> f64 {
    let denom = (board_size as f64 - 1.0) + level as f64 / 5.0;
    if denom <= 0.0 {
        return budget;
    }
    DEPLETION_UNIT / denom
}

impl Timer {
    pub fn new(budget: f64) -> Self {
        Self {
            budget,
            time_left: budget,
        }
    }

    /// Refill to the full budget.
    pub fn reset(&mut self) {
        self.time_left = self.budget;
    }

    /// Advance one frame and return the raw remaining time.
    pub fn tick(&mut self, board_size: u32, level: u32) -> f64 {
        self.time_left -= depletion_per_tick(board_size, level, self.budget);
        self.time_left
    }

    pub fn expired(&self) -> bool {
        self.time_left <= 0.0
    }

    /// Remaining time clamped to `[0, budget]`, for display.
    pub fn display(&self) -> f64 {
        self.time_left.clamp(0.0, self.budget)
    }

    /// Unclamped remaining time.
    pub fn raw(&self) -> f64 {
        self.time_left
    }

    pub fn budget(&self) -> f64 {
        self.budget
    }

    /// Remaining fraction of the budget in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        if self.budget <= 0.0 {
            return 0.0;
        }
        self.display() / self.budget
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_board_drains_in_120_ticks() {
        // 600 / (10 / 2) = 120
        let mut t = Timer::default();
        let mut ticks = 0;
        while !t.expired() {
            t.tick(3, 0);
            ticks += 1;
        }
        assert_eq!(ticks, 120);
    }

    #[test]
    fn harder_boards_drain_slower() {
        assert!(depletion_per_tick(4, 3, TIME_BUDGET) < depletion_per_tick(3, 0, TIME_BUDGET));
        assert!(depletion_per_tick(3, 5, TIME_BUDGET) < depletion_per_tick(3, 0, TIME_BUDGET));
    }

    #[test]
    fn level_contributes_a_fifth_per_level() {
        let d = depletion_per_tick(3, 7, TIME_BUDGET);
        assert!((d - 10.0 / (2.0 + 7.0 / 5.0)).abs() < 1e-12);
    }

    #[test]
    fn display_never_goes_negative() {
        let mut t = Timer::new(7.0);
        t.tick(3, 0);
        t.tick(3, 0);
        assert!(t.raw() < 0.0);
        assert_eq!(t.display(), 0.0);
        assert_eq!(t.fraction(), 0.0);
        assert!(t.expired());
    }

    #[test]
    fn degenerate_board_expires_in_one_tick() {
        let mut t = Timer::default();
        t.tick(1, 0);
        assert!(t.expired());
        assert_eq!(t.raw(), 0.0);
    }

    #[test]
    fn reset_refills_budget() {
        let mut t = Timer::default();
        t.tick(3, 0);
        t.reset();
        assert_eq!(t.raw(), TIME_BUDGET);
        assert_eq!(t.fraction(), 1.0);
    }
}
