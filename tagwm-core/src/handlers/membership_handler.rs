use crate::display_action::DisplayAction;
use crate::errors::Result;
use crate::models::{ClientHandle, TagId};
use crate::state::State;
use crate::{Signal, SignalKind};

impl State {
    /// Tag a client. Tagging a client twice does nothing.
    ///
    /// The new edge holds a reference on the tag until it is untagged.
    ///
    /// # Errors
    ///
    /// Will error if the client is not managed or the tag no longer exists.
    pub fn tag_client(&mut self, tag: TagId, client: ClientHandle) -> Result<()> {
        let screen = self.clients.screen_of(client)?;
        self.tags.acquire(tag)?;

        let t = self.tags.lookup_mut(tag)?;
        if t.has_client(&client) {
            tracing::trace!("Client {} is already tagged with {:?}", client, tag);
            return self.release_reference(tag);
        }
        t.clients.push(client);

        self.push_display(DisplayAction::UpdateClientDesktop(client));
        self.push_display(DisplayAction::InvalidateBanning);
        self.push_display(DisplayAction::UpdateWorkarea(screen));
        self.emit_membership(tag, client, SignalKind::Tagged);
        Ok(())
    }

    /// Untag a client. Untagging a client which isn't a member does nothing.
    ///
    /// # Errors
    ///
    /// Will error if the client is not managed or the tag no longer exists.
    pub fn untag_client(&mut self, client: ClientHandle, tag: TagId) -> Result<()> {
        let screen = self.clients.screen_of(client)?;
        let t = self.tags.lookup_mut(tag)?;
        let Some(index) = t.clients.iter().position(|&c| c == client) else {
            return Ok(());
        };
        t.clients.remove(index);

        self.push_display(DisplayAction::InvalidateBanning);
        self.push_display(DisplayAction::UpdateClientDesktop(client));
        self.push_display(DisplayAction::UpdateWorkarea(screen));
        self.emit_membership(tag, client, SignalKind::Untagged);
        self.release_reference(tag)
    }

    /// Check if a client is tagged with the specified tag.
    pub fn is_client_tagged(&self, client: ClientHandle, tag: TagId) -> bool {
        self.tags.get(tag).is_some_and(|t| t.has_client(&client))
    }

    /// Untag a client from every tag and stop tracking it.
    ///
    /// # Errors
    ///
    /// Will error if the client is not managed.
    pub fn unmanage_client(&mut self, client: ClientHandle) -> Result<()> {
        self.clients.screen_of(client)?;
        let tagged: Vec<TagId> = self
            .tags
            .iter()
            .filter(|(_, t)| t.has_client(&client))
            .map(|(id, _)| id)
            .collect();
        for tag in tagged {
            self.untag_client(client, tag)?;
        }
        self.focus_manager.forget(client);
        self.clients.remove(client);
        tracing::debug!("Unmanaged client {}", client);
        Ok(())
    }

    // client side first, then tag side
    fn emit_membership(&mut self, tag: TagId, client: ClientHandle, kind: SignalKind) {
        self.emit(Signal::on_client(client, kind, tag));
        self.emit(Signal::on_tag(tag, kind, client));
    }
}
