//! The context every tag operation runs against.

use crate::config::Config;
use crate::display_action::{Action, DisplayAction};
use crate::errors::{Result, TagError};
use crate::models::{
    ClientHandle, Clients, FocusManager, Registry, Screen, ScreenId, Tag, TagId, Tags,
};
use crate::Signal;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Everything the tag core knows about.
///
/// Operations mutate the structures first and then queue their side effects
/// in `actions`, so anything reacting to an effect sees the finished state.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct State {
    pub screens: Vec<Screen>,
    pub clients: Clients,
    pub tags: Tags,
    pub registry: Registry,
    pub focus_manager: FocusManager,
    pub actions: VecDeque<Action>,
}

impl State {
    pub fn new(config: &impl Config) -> Self {
        let mut state = Self::default();
        for name in config.create_list_of_tags() {
            let tag = state.new_tag(&name);
            // the registry becomes the only holder
            if let Err(err) = state.activate(tag).and_then(|()| state.release_tag(tag)) {
                tracing::error!("Unable to register tag {:?}: {}", name, err);
            }
        }
        if config.select_first_tag() {
            if let Some(first) = state.registry.first() {
                if let Err(err) = state.set_selected(first, true) {
                    tracing::error!("Unable to select the first tag: {}", err);
                }
            }
        }
        tracing::debug!("Started with {} tags", state.registry.len());
        state
    }

    pub fn tag(&self, id: TagId) -> Result<&Tag> {
        self.tags.lookup(id)
    }

    /// Number of live tag objects, activated or not.
    pub fn instances(&self) -> usize {
        self.tags.len()
    }

    pub fn add_screen(&mut self, output: &str) -> ScreenId {
        let id = ScreenId(self.screens.len());
        self.screens.push(Screen::new(id, output));
        id
    }

    /// Start tracking a client. Managing a live handle again does nothing.
    ///
    /// # Errors
    ///
    /// Will error if `screen` was never added.
    pub fn manage_client(&mut self, handle: ClientHandle, screen: ScreenId) -> Result<()> {
        if !self.screens.iter().any(|s| s.id == screen) {
            return Err(TagError::UnknownScreen(screen));
        }
        if !self.clients.insert(handle, screen) {
            tracing::trace!("Client {} is already managed", handle);
        }
        Ok(())
    }

    pub(crate) fn push_display(&mut self, act: DisplayAction) {
        self.actions.push_back(act.into());
    }

    pub(crate) fn emit(&mut self, signal: Signal) {
        self.actions.push_back(signal.into());
    }

    /// Drop one strong reference on `tag`, destroying it if it was the last.
    pub(crate) fn release_reference(&mut self, tag: TagId) -> Result<()> {
        if let Some(destroyed) = self.tags.release(tag)? {
            tracing::debug!(
                "Destroyed tag {:?} ({:?}) with {} clients",
                tag,
                destroyed.name,
                destroyed.clients.len()
            );
        }
        Ok(())
    }
}

#[cfg(test)]
impl State {
    /// A state with one screen and `clients` managed clients, numbered from 1.
    pub(crate) fn new_test(clients: u32) -> Self {
        let mut state = Self::default();
        let screen = state.add_screen("test");
        for handle in 1..=clients {
            state.manage_client(ClientHandle(handle), screen).unwrap();
        }
        state
    }

    /// An activated tag held only by the registry.
    pub(crate) fn new_test_tag(&mut self, name: &str) -> TagId {
        let tag = self.new_tag(name);
        self.activate(tag).unwrap();
        self.release_tag(tag).unwrap();
        self.actions.clear();
        tag
    }

    pub(crate) fn drain_actions(&mut self) -> Vec<Action> {
        self.actions.drain(..).collect()
    }
}
