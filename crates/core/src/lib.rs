//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on terminal, audio, or file I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical boards
//! - **Testable**: Unit tests for every rule and transition
//! - **Portable**: Can run behind any presentation layer (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: board generation, target counts, cell geometry and hit testing
//! - [`session`]: the round state machine and input resolution
//! - [`timer`]: the depleting countdown used by the timed phases
//! - [`name`]: bounded name entry buffer for the leaderboard
//! - [`rng`]: process-lifetime random source for target placement
//! - [`snapshot`]: read-only per-frame view for renderers
//!
//! # Game Rules
//!
//! - **Reveal**: a subset of tiles is highlighted while the timer drains
//! - **Play**: the player clicks the remembered tiles; a wrong tile costs a life
//! - **Progression**: clearing a board raises the level; every third level the
//!   board grows by one in each dimension
//! - **Round end**: with no lives left the missed tiles are shown, then the game
//!   is over and the level reached is the score
//!
//! # Example
//!
//! ```
//! use tui_tiles_core::Session;
//! use tui_tiles_types::{InputEvent, Phase, Point};
//!
//! let mut session = Session::new(12345);
//! session.handle(InputEvent::PointerDown(Point::new(10, 10)));
//! assert_eq!(session.phase(), Phase::Reveal);
//!
//! while session.phase() == Phase::Reveal {
//!     session.tick();
//! }
//! assert_eq!(session.phase(), Phase::Play);
//! ```
//!
//! # Timing
//!
//! The game uses a fixed timestep: call [`Session::tick`](session::Session::tick)
//! once per frame (`TICK_MS` = 16ms, about 60 FPS).

pub mod board;
pub mod name;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod timer;

pub use tui_tiles_types as types;

// Re-export commonly used types for convenience
pub use board::{target_count, Board, Cell};
pub use name::NameBuffer;
pub use rng::TileRng;
pub use session::{Effect, Session};
pub use snapshot::{CellView, GameSnapshot};
pub use timer::Timer;
