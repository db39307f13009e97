use thiserror::Error;

use crate::models::{ClientHandle, ScreenId, TagId};

pub type Result<T> = std::result::Result<T, TagError>;

/// Raised when a handle does not name a live object of the expected kind.
/// Nothing is mutated by the call that raises it.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TagError {
    #[error("No live tag for {0:?}")]
    UnknownTag(TagId),
    #[error("Nothing handed out holds {0:?}")]
    NotHeld(TagId),
    #[error("Not a managed client: {0}")]
    UnknownClient(ClientHandle),
    #[error("Unknown screen: {0}")]
    UnknownScreen(ScreenId),
}
