//! `tagwm` general configuration

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// General configuration
///
/// # Example
///
/// In `config.toml`
///
/// ```toml
/// tags = ["web", "code", "chat"]
/// select_first_tag = true
/// log_level = "info,tagwm_core=trace"
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub tags: Vec<String>,
    pub select_first_tag: bool,
    pub dispatch_budget: usize,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tags: (1..=9).map(|i| i.to_string()).collect(),
            select_first_tag: true,
            dispatch_budget: 10_000,
            log_level: "info".to_string(),
        }
    }
}

impl tagwm_core::Config for Config {
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

impl Config {
    /// Print the problems a user would want to know about. Returns false if
    /// any were found.
    pub fn check_tags(&self, verbose: bool) -> bool {
        if verbose {
            println!("Checking the tag list.");
        }
        if self.tags.is_empty() {
            println!("No tags are configured, nothing can be shown until a tag is created.");
            return false;
        }
        let mut names = self.tags.clone();
        names.sort();
        names.dedup();
        if names.len() != self.tags.len() {
            println!("Note: some tag names are used more than once, they will be told apart by position only.");
        }
        if self.dispatch_budget == 0 {
            println!("dispatch_budget is 0, no signal will ever be delivered.");
            return false;
        }
        if verbose {
            println!("Tags are okay.");
        }
        true
    }

    pub fn check_log_level(&self, verbose: bool) -> bool {
        if verbose {
            println!("Trying to parse log_level.");
        }
        match EnvFilter::builder().parse(&self.log_level) {
            Ok(_) => {
                if verbose {
                    println!("Log level is ok.");
                }
                true
            }
            Err(err) => {
                println!("Log level is invalid: {err}");
                false
            }
        }
    }
}
