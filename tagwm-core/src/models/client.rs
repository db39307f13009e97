//! Client Information
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ScreenId;
use crate::errors::{Result, TagError};

/// A backend handle to a managed window used to identify it.
///
/// Tags store these as non-owning references. A handle is only meaningful
/// while it is listed in [`Clients`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientHandle(pub u32);

impl fmt::Display for ClientHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// The parts of a managed window the tag core cares about.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub handle: ClientHandle,
    pub screen: ScreenId,
}

/// Liveness table of managed clients.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Clients {
    clients: Vec<Client>,
}

impl Clients {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the handle was already managed.
    pub(crate) fn insert(&mut self, handle: ClientHandle, screen: ScreenId) -> bool {
        if self.contains(handle) {
            return false;
        }
        self.clients.push(Client { handle, screen });
        true
    }

    pub(crate) fn remove(&mut self, handle: ClientHandle) -> Option<Client> {
        let index = self.clients.iter().position(|c| c.handle == handle)?;
        Some(self.clients.remove(index))
    }

    pub fn get(&self, handle: ClientHandle) -> Option<&Client> {
        self.clients.iter().find(|c| c.handle == handle)
    }

    pub fn contains(&self, handle: ClientHandle) -> bool {
        self.get(handle).is_some()
    }

    /// The screen of a live client, or why there is none.
    pub fn screen_of(&self, handle: ClientHandle) -> Result<ScreenId> {
        self.get(handle)
            .map(|c| c.screen)
            .ok_or(TagError::UnknownClient(handle))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Client> {
        self.clients.iter()
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}
