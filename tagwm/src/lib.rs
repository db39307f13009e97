mod config;
mod display_server;
pub mod utils;

pub use config::*;
pub use display_server::TracingDisplayServer;
