use tagwm_core::{Config, DisplayAction, DisplayServer};

/// A display server with no display: it logs what it is asked to do.
///
/// Used by the tooling to run the tag core without an X connection.
#[derive(Debug, Default)]
pub struct TracingDisplayServer {
    pub executed: usize,
}

impl DisplayServer for TracingDisplayServer {
    fn new(_config: &impl Config) -> Self {
        Self::default()
    }

    fn execute_action(&mut self, act: DisplayAction) {
        self.executed += 1;
        match act {
            DisplayAction::InvalidateBanning => tracing::debug!("Banning needs an update"),
            DisplayAction::UpdateWorkarea(screen) => {
                tracing::debug!("Workarea of {} needs an update", screen);
            }
            DisplayAction::UpdateClientDesktop(client) => {
                tracing::debug!("Desktop of client {} changed", client);
            }
            DisplayAction::UpdateDesktopCount | DisplayAction::UpdateDesktopNames => {
                tracing::debug!("Desktop list changed: {:?}", act);
            }
        }
    }

    fn flush(&self) {
        tracing::trace!("Executed {} display actions so far", self.executed);
    }
}
