use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScreenId(pub usize);

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "screen {}", self.0)
    }
}

/// A physical output. Geometry lives with the display server.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub id: ScreenId,
    pub output: String,
}

impl Screen {
    #[must_use]
    pub fn new(id: ScreenId, output: &str) -> Self {
        Self {
            id,
            output: output.to_owned(),
        }
    }
}
