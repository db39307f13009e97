use super::Config;
use super::DisplayServer;
use crate::display_action::DisplayAction;

/// Records every action it is asked to execute.
#[derive(Clone, Debug, Default)]
pub struct MockDisplayServer {
    pub executed: Vec<DisplayAction>,
}

impl DisplayServer for MockDisplayServer {
    fn new(_: &impl Config) -> Self {
        Self::default()
    }

    fn execute_action(&mut self, act: DisplayAction) {
        self.executed.push(act);
    }
}
