//! Single-player session flow.
//!
//! A session moves through four phases: an opening fade from black, a
//! three-beat countdown, active play, and pause. Exactly one phase is active
//! at a time. The [`SessionController`] owns it and swaps it out when the
//! phase asks for a transition.
//!
//! Everything here is framework-free. Rendering goes through [`Canvas`] and
//! [`Font`], sound through [`Audio`], and the board itself sits behind
//! [`Well`]. Time only advances through the `dt` passed to `update`.
//!
//! # Module Structure
//!
//! - [`phase`]: the four phases and their transitions
//! - [`controller`]: active-phase slot and transition handling
//! - [`data`]: score, goal, level, layout and popups shared by the phases
//! - [`popup`]: rising, fading score text
//! - [`widgets`]: board interface and side panels
//! - [`single_player`]: controller and data bundled into one session
//! - [`gfx`], [`audio`]: collaborator interfaces
//! - [`config`]: phase durations and session goals

pub mod audio;
pub mod config;
pub mod controller;
pub mod data;
pub mod gfx;
pub mod phase;
pub mod popup;
pub mod single_player;
pub mod widgets;

#[cfg(test)]
mod test_support;

pub use tui_stacker_types as types;

pub use audio::{AppContext, Audio, LoggingAudio, CUE_HISTORY};
pub use config::SessionConfig;
pub use controller::SessionController;
pub use data::SessionData;
pub use gfx::{Canvas, Font, Sprite};
pub use phase::{Phase, Transition};
pub use popup::TextPopup;
pub use single_player::SinglePlayer;
pub use widgets::{format_gametime, LeftPanel, RightPanel, Well, WellReport};
