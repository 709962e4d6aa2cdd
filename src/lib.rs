//! TUI Stacker (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and hosts the demo
//! board widget the binary plays with.

pub mod demo;

pub use tui_stacker_core as core;
pub use tui_stacker_input as input;
pub use tui_stacker_session as session;
pub use tui_stacker_term as term;
pub use tui_stacker_types as types;
