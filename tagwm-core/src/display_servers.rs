#[cfg(test)]
mod mock_display_server;

use crate::config::Config;
use crate::display_action::DisplayAction;

#[cfg(test)]
pub use self::mock_display_server::MockDisplayServer;

/// The outside world of the tag core: banning, workarea computation and the
/// desktop protocol all live behind this trait.
pub trait DisplayServer {
    fn new(config: &impl Config) -> Self;

    /// Carry out a request. Requests arrive in the order they were queued.
    fn execute_action(&mut self, act: DisplayAction);

    /// Called once the queue has been drained.
    fn flush(&self) {}
}
