use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::types::{Phase, Point, Rect, Reveal, START_BOARD_SIZE, START_LIVES, TIME_BUDGET};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellView {
    pub rect: Rect,
    pub reveal: Reveal,
}

/// Read-only view of a session for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub level: u32,
    pub board_size: u32,
    pub lives: i32,
    pub score: u32,
    /// Clamped to `[0, time_budget]`.
    pub time_left: f64,
    pub time_budget: f64,
    pub name: String,
    pub target_count: usize,
    pub found_count: usize,
    /// Empty on the home and game over screens.
    pub cells: Vec<CellView>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.phase = Phase::Home;
        self.level = 0;
        self.board_size = START_BOARD_SIZE;
        self.lives = START_LIVES;
        self.score = 0;
        self.time_left = TIME_BUDGET;
        self.time_budget = TIME_BUDGET;
        self.name.clear();
        self.target_count = 0;
        self.found_count = 0;
        self.cells.clear();
    }

    /// First cell (row-major) containing `p`.
    pub fn cell_at(&self, p: Point) -> Option<&CellView> {
        self.cells.iter().find(|c| c.rect.contains(p))
    }

    /// Remaining fraction of the timer in `[0, 1]`.
    pub fn time_fraction(&self) -> f64 {
        if self.time_budget <= 0.0 {
            return 0.0;
        }
        (self.time_left / self.time_budget).clamp(0.0, 1.0)
    }

    /// Hash of everything visible on screen, for render throttling.
    pub fn fingerprint(&self) -> u64 {
        let mut h = DefaultHasher::new();
        self.phase.hash(&mut h);
        self.level.hash(&mut h);
        self.board_size.hash(&mut h);
        self.lives.hash(&mut h);
        self.time_left.to_bits().hash(&mut h);
        self.name.hash(&mut h);
        self.cells.hash(&mut h);
        h.finish()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            phase: Phase::Home,
            level: 0,
            board_size: 0,
            lives: 0,
            score: 0,
            time_left: 0.0,
            time_budget: 0.0,
            name: String::new(),
            target_count: 0,
            found_count: 0,
            cells: Vec::new(),
        };
        s.clear();
        s
    }
}
