//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, leaderboard storage).
//!
//! # Logical Display
//!
//! All geometry is expressed in logical units on a fixed square display:
//!
//! - **Width**: 600 units
//! - **Height**: 600 units
//! - **Origin**: top-left corner, `y` grows downwards
//!
//! The terminal view maps its character cells onto this square, so the game
//! rules never see terminal coordinates.
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `TIME_BUDGET` | 600.0 | Timer value at the start of a timed phase |
//! | `DEPLETION_UNIT` | 10.0 | Numerator of the per-tick timer decrement |
//! | `START_BOARD_SIZE` | 3 | Board edge length at level 0 |
//! | `START_LIVES` | 3 | Lives at the start of every round |
//! | `NAME_MAX_LEN` | 16 | Maximum leaderboard name length in characters |
//! | `LEADERBOARD_TOP_N` | 3 | Entries shown on the game over screen |
//!
//! # Examples
//!
//! ```
//! use tui_tiles_types::{Point, Rect, Phase, PLAY_AGAIN_RECT};
//!
//! let rect = Rect::new(0, 0, 199, 199);
//! assert!(rect.contains(Point::new(0, 0)));
//! assert!(!rect.contains(Point::new(199, 0)));
//!
//! assert!(PLAY_AGAIN_RECT.contains(Point::new(300, 525)));
//! assert!(Phase::Reveal.is_timed());
//! ```

use std::fmt;

/// Logical display width in units.
pub const DISPLAY_WIDTH: i32 = 600;

/// Logical display height in units.
pub const DISPLAY_HEIGHT: i32 = 600;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Timer value at the start of each timed phase (the width of the timer bar).
pub const TIME_BUDGET: f64 = DISPLAY_WIDTH as f64;

/// Numerator of the per-tick timer decrement.
pub const DEPLETION_UNIT: f64 = 10.0;

/// Board edge length for a fresh game.
pub const START_BOARD_SIZE: u32 = 3;

/// Lives granted at the start of every round.
pub const START_LIVES: i32 = 3;

/// Maximum number of characters accepted in the name entry buffer.
pub const NAME_MAX_LEN: usize = 16;

/// Number of leaderboard entries shown on the game over screen.
pub const LEADERBOARD_TOP_N: usize = 3;

/// The "Play Again" control on the game over screen.
pub const PLAY_AGAIN_RECT: Rect = Rect::new(DISPLAY_WIDTH / 2 - 75, DISPLAY_HEIGHT - 100, 150, 50);

/// The name entry box on the game over screen.
pub const NAME_BOX_RECT: Rect = Rect::new(DISPLAY_WIDTH / 6, DISPLAY_HEIGHT * 2 / 3, 400, 50);

/// A point in logical display units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in logical display units.
///
/// Containment is half-open: the left/top edges are inside, the right/bottom
/// edges are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    /// First column past the rect.
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// First row past the rect.
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }
}

/// Round lifecycle phases.
///
/// The cycle goes: Home → Reveal → Play → (Reveal | RoundEnd) → GameOver → Reveal.
/// Exactly one phase is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Title screen; any pointer-down starts the game.
    #[default]
    Home,
    /// Targets are shown while the timer drains.
    Reveal,
    /// Targets are hidden; the player clicks cells.
    Play,
    /// Lives ran out; missed targets are shown while the timer drains again.
    RoundEnd,
    /// Final score, name entry and leaderboard.
    GameOver,
}

impl Phase {
    /// Phases in which the timer is ticked.
    pub fn is_timed(&self) -> bool {
        matches!(self, Phase::Reveal | Phase::RoundEnd)
    }

    /// Phases whose screen only changes in response to input.
    pub fn is_static(&self) -> bool {
        matches!(self, Phase::Home | Phase::GameOver)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Home => "home",
            Phase::Reveal => "reveal",
            Phase::Play => "play",
            Phase::RoundEnd => "roundEnd",
            Phase::GameOver => "gameOver",
        }
    }
}

/// Color tag carried by every board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileTag {
    /// Not part of the pattern.
    Neutral,
    /// Part of the pattern the player must recall.
    Target,
    /// A neutral cell the player clicked by mistake.
    Wrong,
}

/// What the player is allowed to see of a cell in the current phase.
///
/// - **Hidden**: drawn as an unknown tile
/// - **Target**: highlighted during Reveal
/// - **Found**: a target the player has clicked
/// - **Wrong**: a neutral cell the player has clicked
/// - **Missed**: an unfound target shown after lives run out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reveal {
    Hidden,
    Target,
    Found,
    Wrong,
    Missed,
}

/// Keyboard input the game cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// A printable character.
    Char(char),
    Backspace,
    Enter,
}

/// Raw input forwarded from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary pointer press at a logical position.
    PointerDown(Point),
    Key(KeyInput),
}

/// Fire-and-forget audio cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Correct,
    Incorrect,
}

/// A leaderboard record: player name and final level reached.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
}

impl LeaderboardEntry {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Displays as `name: score`, the leaderboard row format.
impl fmt::Display for LeaderboardEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.score)
    }
}
