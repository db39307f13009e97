use crate::display_action::DisplayAction;
use crate::errors::Result;
use crate::models::TagId;
use crate::state::State;
use crate::{Signal, SignalKind};

impl State {
    /// View or unview a tag.
    ///
    /// Every screen gets its workarea recomputed, not only the screens
    /// showing the tag. An inactive tag can't be selected.
    ///
    /// # Errors
    ///
    /// Will error if the tag no longer exists.
    pub fn set_selected(&mut self, tag: TagId, selected: bool) -> Result<()> {
        let t = self.tags.lookup_mut(tag)?;
        if t.selected == selected {
            return Ok(());
        }
        if selected && !t.activated {
            tracing::debug!("Refusing to select inactive tag {:?}", tag);
            return Ok(());
        }
        t.selected = selected;

        self.push_display(DisplayAction::InvalidateBanning);
        let screens: Vec<_> = self.screens.iter().map(|s| s.id).collect();
        for screen in screens {
            self.push_display(DisplayAction::UpdateWorkarea(screen));
        }
        self.emit(Signal::property(tag, SignalKind::PropertySelected));
        Ok(())
    }

    /// Rename a tag. Always notifies, even if the name is unchanged.
    ///
    /// # Errors
    ///
    /// Will error if the tag no longer exists.
    pub fn set_name(&mut self, tag: TagId, name: &str) -> Result<()> {
        self.tags.lookup_mut(tag)?.name = name.to_owned();
        self.emit(Signal::property(tag, SignalKind::PropertyName));
        self.push_display(DisplayAction::UpdateDesktopNames);
        Ok(())
    }
}
