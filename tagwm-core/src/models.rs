//! Objects (such as tags and clients) used to develop `tagwm`.
mod client;
mod focus_manager;
mod manager;
mod registry;
mod screen;
mod tag;

pub mod dto;

pub use client::{Client, ClientHandle, Clients};
pub use focus_manager::FocusManager;
pub use manager::{Manager, SignalHandler};
pub use registry::Registry;
pub use screen::{Screen, ScreenId};
pub use tag::{Tag, TagId, Tags};
