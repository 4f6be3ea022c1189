//! TUI Tiles (workspace facade crate).
//!
//! The game itself lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_tiles::{core,input,store,term,types}` and adds the
//! runner's configuration and logging setup.

pub mod config;
pub mod logging;

pub use tui_tiles_core as core;
pub use tui_tiles_input as input;
pub use tui_tiles_store as store;
pub use tui_tiles_term as term;
pub use tui_tiles_types as types;
