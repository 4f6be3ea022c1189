//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key and mouse events into game input: name entry keys,
//! quit requests and primary-button presses at terminal cells. Converting a
//! terminal cell into a logical board point is the view's job, since only the
//! view knows where the board is drawn.

pub mod map;

pub use tui_tiles_types as types;

pub use map::{map_event, map_key, pointer_down, should_quit, InputAction};
