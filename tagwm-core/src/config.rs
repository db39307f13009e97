/// Settings the tag core reads at startup.
pub trait Config {
    /// Names of the tags created and activated when the manager starts.
    fn create_list_of_tags(&self) -> Vec<String>;

    /// Select the first startup tag so there is something to show.
    fn select_first_tag(&self) -> bool;

    /// Maximum number of queued effects delivered by one
    /// `Manager::dispatch`. Signal handlers that keep reacting to their own
    /// effects are cut off here instead of spinning forever.
    fn dispatch_budget(&self) -> usize;
}

#[cfg(test)]
#[allow(clippy::module_name_repetitions)]
pub struct TestConfig {
    pub tags: Vec<String>,
    pub select_first_tag: bool,
    pub dispatch_budget: usize,
}

#[cfg(test)]
impl Default for TestConfig {
    fn default() -> Self {
        Self {
            tags: vec![],
            select_first_tag: false,
            dispatch_budget: 1_000,
        }
    }
}

#[cfg(test)]
impl Config for TestConfig {
    fn create_list_of_tags(&self) -> Vec<String> {
        self.tags.clone()
    }
    fn select_first_tag(&self) -> bool {
        self.select_first_tag
    }
    fn dispatch_budget(&self) -> usize {
        self.dispatch_budget
    }
}
