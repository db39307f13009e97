use crate::models::ClientHandle;
use crate::models::ScreenId;
use crate::Signal;
use serde::{Deserialize, Serialize};

/// These are requests from the tag core to the outside world.
/// The display server should act on these actions.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayAction {
    /// Window stacking/visibility is stale and must be recomputed later.
    InvalidateBanning,

    /// Recompute the usable area of a screen.
    UpdateWorkarea(ScreenId),

    /// Tell the desktop protocol which desktops a client is on.
    UpdateClientDesktop(ClientHandle),

    /// Tell the desktop protocol how many desktops there are.
    UpdateDesktopCount,

    /// Tell the desktop protocol the names of the desktops.
    UpdateDesktopNames,
}

/// A queued side effect, delivered in order by `Manager::dispatch`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Display(DisplayAction),
    Emit(Signal),
}

impl From<DisplayAction> for Action {
    fn from(act: DisplayAction) -> Self {
        Self::Display(act)
    }
}

impl From<Signal> for Action {
    fn from(signal: Signal) -> Self {
        Self::Emit(signal)
    }
}
