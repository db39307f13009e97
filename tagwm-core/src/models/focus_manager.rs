use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::ClientHandle;

const HISTORY_LEN: usize = 10;

/// `FocusManager` stores the history of which clients had focus.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct FocusManager {
    pub client_history: VecDeque<Option<ClientHandle>>,
}

impl FocusManager {
    /// Return the currently focused client.
    pub fn client(&self) -> Option<ClientHandle> {
        self.client_history.front().copied().flatten()
    }

    pub fn focus(&mut self, handle: ClientHandle) {
        if self.client() != Some(handle) {
            self.push(Some(handle));
        }
    }

    /// Remove focus from any client.
    pub fn unfocus(&mut self) {
        if self.client().is_some() {
            self.push(None);
        }
    }

    fn push(&mut self, entry: Option<ClientHandle>) {
        // clean old history
        self.client_history.truncate(HISTORY_LEN);
        self.client_history.push_front(entry);
    }

    /// Drop a client from the history. If it held the focus nothing is
    /// focused afterwards.
    pub fn forget(&mut self, handle: ClientHandle) {
        if self.client() == Some(handle) {
            self.push(None);
        }
        self.client_history.retain(|&h| h != Some(handle));
    }
}
