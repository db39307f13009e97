use crate::display_action::DisplayAction;
use crate::errors::Result;
use crate::models::{Tag, TagId};
use crate::state::State;
use crate::{Signal, SignalKind};

impl State {
    /// Create a detached, inactive tag. The caller holds the returned
    /// reference and gives it back with [`State::release_tag`].
    pub fn new_tag(&mut self, name: &str) -> TagId {
        let id = self.tags.insert(Tag::new(name));
        tracing::debug!("Created tag {:?} named {:?}", id, name);
        id
    }

    /// Take an extra reference on a tag, keeping it alive past deactivation.
    ///
    /// # Errors
    ///
    /// Will error if the tag no longer exists.
    pub fn hold_tag(&mut self, tag: TagId) -> Result<()> {
        self.tags.hold(tag)
    }

    /// Give back a reference taken by [`State::new_tag`] or
    /// [`State::hold_tag`]. The tag is destroyed once nothing holds it.
    ///
    /// The references of the registry and of client edges are not
    /// reachable from here; they go with [`State::deactivate`] and
    /// [`State::untag_client`].
    ///
    /// # Errors
    ///
    /// Will error if the tag no longer exists or every handed out
    /// reference was already given back.
    pub fn release_tag(&mut self, tag: TagId) -> Result<()> {
        if let Some(destroyed) = self.tags.release_handle(tag)? {
            tracing::debug!("Destroyed tag {:?} ({:?})", tag, destroyed.name);
        }
        Ok(())
    }

    /// Insert a tag into the registry, making it usable.
    ///
    /// # Errors
    ///
    /// Will error if the tag no longer exists.
    pub fn activate(&mut self, tag: TagId) -> Result<()> {
        let t = self.tags.lookup_mut(tag)?;
        if t.activated {
            tracing::trace!("Tag {:?} is already activated", tag);
            return Ok(());
        }
        t.activated = true;
        self.tags.acquire(tag)?;
        self.registry.push(tag);

        self.push_display(DisplayAction::UpdateDesktopCount);
        self.push_display(DisplayAction::UpdateDesktopNames);
        self.emit(Signal::property(tag, SignalKind::PropertyActivated));
        Ok(())
    }

    /// Take a tag out of the registry. A selected tag is deselected first.
    ///
    /// The registry's reference is released, so the tag is destroyed here
    /// unless something else still holds it.
    ///
    /// # Errors
    ///
    /// Will error if the tag no longer exists.
    pub fn deactivate(&mut self, tag: TagId) -> Result<()> {
        if !self.tags.lookup(tag)?.activated {
            tracing::trace!("Tag {:?} is already deactivated", tag);
            return Ok(());
        }
        if !self.registry.remove(tag) {
            tracing::warn!("Activated tag {:?} was missing from the registry", tag);
        }
        let t = self.tags.lookup_mut(tag)?;
        t.activated = false;
        let was_selected = std::mem::replace(&mut t.selected, false);
        if was_selected {
            self.emit(Signal::property(tag, SignalKind::PropertySelected));
            self.push_display(DisplayAction::InvalidateBanning);
        }
        self.release_reference(tag)?;

        self.push_display(DisplayAction::UpdateDesktopCount);
        self.push_display(DisplayAction::UpdateDesktopNames);
        self.emit(Signal::property(tag, SignalKind::PropertyActivated));
        Ok(())
    }

    /// # Errors
    ///
    /// Will error if the tag no longer exists.
    pub fn set_activated(&mut self, tag: TagId, activated: bool) -> Result<()> {
        if activated {
            self.activate(tag)
        } else {
            self.deactivate(tag)
        }
    }
}
