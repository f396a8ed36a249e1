//! pomo-core - Timer engine for the pomo work/pause interval timer
//!
//! "Work, breathe, repeat."
//!
//! The engine owns every piece of mutable timer state and is driven by a
//! single entry point, [`Engine::update`], which consumes a [`Msg`] and returns
//! a [`Cmd`] describing the side effects the host should perform:
//! - scheduling the next one-second tick
//! - handing a [`PhaseCompleted`] signal to the notification consumer
//! - ending the process after a confirmed quit
//!
//! Nothing in this crate touches the terminal, the clock or the speakers, so
//! the whole state machine is testable by feeding it messages.

pub mod config;
pub mod countdown;
pub mod engine;
pub mod error;
pub mod format;
pub mod paths;
pub mod settings;
pub mod snapshot;
pub mod view;

pub use config::Config;
pub use countdown::Countdown;
pub use engine::{Cmd, Engine, Input, Msg, PhaseCompleted, TICK_INTERVAL};
pub use error::ConfigError;
pub use paths::Paths;
pub use settings::{SettingsEditor, SettingsField};
pub use snapshot::Snapshot;
pub use view::{Phase, QuitChoice, View};
