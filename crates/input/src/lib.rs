//! Terminal input module (session-facing).
//!
//! Maps `crossterm` events into the session event model
//! ([`crate::types::SessionEvent`]) and gathers one frame's worth of them.
//! Key repeats are dropped here, so the session only ever sees edges.

pub mod frame;
pub mod map;

pub use tui_stacker_types as types;

pub use frame::{poll_frame, FrameInput, FRAME_EVENT_CAPACITY};
pub use map::{map_event, map_key, should_quit};
