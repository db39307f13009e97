use crate::errors::Result;
use crate::models::{ClientHandle, TagId};
use crate::state::State;

impl State {
    /// Mark a client as the globally focused one.
    ///
    /// # Errors
    ///
    /// Will error if the client is not managed.
    pub fn focus_client(&mut self, client: ClientHandle) -> Result<()> {
        self.clients.screen_of(client)?;
        self.focus_manager.focus(client);
        Ok(())
    }

    /// Remove focus from any client.
    pub fn unfocus(&mut self) {
        self.focus_manager.unfocus();
    }

    /// Get the registry index of the tag the user is working on.
    ///
    /// That is the first selected tag holding the focused client, or the
    /// first selected tag when there is no such tag. Falls back to `0`, also
    /// when the registry is empty, so `0` is not proof of a valid index.
    /// Use [`State::current_or_first_selected`] to tell the cases apart.
    pub fn current_or_first_selected_index(&self) -> usize {
        self.current_or_first_selected_position().unwrap_or(0)
    }

    /// Same as [`State::current_or_first_selected_index`] but resolved to a
    /// tag, `None` only when the registry is empty.
    pub fn current_or_first_selected(&self) -> Option<TagId> {
        self.registry.get(self.current_or_first_selected_index())
    }

    fn current_or_first_selected_position(&self) -> Option<usize> {
        let selected = |id: TagId| self.tags.get(id).is_some_and(|t| t.selected);
        if let Some(focused) = self.focus_manager.client() {
            let current = self
                .registry
                .iter()
                .position(|id| selected(id) && self.is_client_tagged(focused, id));
            if current.is_some() {
                return current;
            }
        }
        self.registry.iter().position(selected)
    }
}
