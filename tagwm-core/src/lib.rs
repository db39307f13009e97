//! Tag and client membership core of tagwm.
// We deny clippy pedantic lints, primarily to keep code as correct as possible
#![warn(clippy::pedantic)]
// Each of these lints are globally allowed because they otherwise make a lot
// of noise.
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]
pub mod config;
mod display_action;
pub mod display_servers;
pub mod errors;
mod handlers;
pub mod models;
mod signal;
pub mod state;

pub use config::Config;
pub use display_action::{Action, DisplayAction};
pub use display_servers::DisplayServer;
pub use errors::{Result, TagError};
pub use models::Manager;
pub use models::{ClientHandle, ScreenId, Tag, TagId};
pub use signal::{Signal, SignalKind, SignalTarget};
pub use state::State;
