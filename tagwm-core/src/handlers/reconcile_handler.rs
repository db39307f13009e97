use crate::errors::{Result, TagError};
use crate::models::{ClientHandle, TagId};
use crate::state::State;

impl State {
    /// Get the clients attached to a tag, in the order they were tagged.
    ///
    /// # Errors
    ///
    /// Will error if the tag no longer exists.
    pub fn clients(&self, tag: TagId) -> Result<Vec<ClientHandle>> {
        Ok(self.tags.lookup(tag)?.clients.clone())
    }

    /// Replace the clients of a tag with `requested`.
    ///
    /// Members missing from `requested` are untagged first, then every
    /// requested client is tagged in order. Clients that stay keep their
    /// relative order and new ones are appended, so the result is not
    /// necessarily in the order of `requested`. Duplicates collapse.
    ///
    /// Requested handles are checked while they are walked: each member is
    /// looked up in `requested` front to back, then `requested` is tagged in
    /// order. This is not atomic: the call stops at the first handle that
    /// is not a managed client, and the edges changed before it stay
    /// changed.
    ///
    /// # Errors
    ///
    /// Will error if the tag no longer exists or a requested client is not
    /// managed.
    pub fn set_clients(
        &mut self,
        tag: TagId,
        requested: &[ClientHandle],
    ) -> Result<Vec<ClientHandle>> {
        // keep the tag alive while its edges come and go
        self.tags.acquire(tag)?;
        let result = self.reconcile_clients(tag, requested);
        self.release_reference(tag)?;
        result
    }

    fn reconcile_clients(
        &mut self,
        tag: TagId,
        requested: &[ClientHandle],
    ) -> Result<Vec<ClientHandle>> {
        let current = self.clients(tag)?;
        for client in current {
            if !self.is_requested(requested, client)? {
                self.untag_client(client, tag)?;
            }
        }
        for &client in requested {
            self.tag_client(tag, client)?;
        }
        tracing::trace!("Reconciled {:?} to {} clients", tag, requested.len());
        self.clients(tag)
    }

    // stops at the first match, so handles past it are not checked yet
    fn is_requested(&self, requested: &[ClientHandle], member: ClientHandle) -> Result<bool> {
        for &client in requested {
            if !self.clients.contains(client) {
                return Err(TagError::UnknownClient(client));
            }
            if client == member {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use crate::display_action::Action;
    use crate::errors::TagError;
    use crate::models::ClientHandle;
    use crate::state::State;
    use crate::{Signal, SignalKind};

    const C1: ClientHandle = ClientHandle(1);
    const C2: ClientHandle = ClientHandle(2);
    const C3: ClientHandle = ClientHandle(3);
    const C4: ClientHandle = ClientHandle(4);

    fn signals(state: &mut State) -> Vec<Signal> {
        state
            .drain_actions()
            .into_iter()
            .filter_map(|act| match act {
                Action::Emit(signal) => Some(signal),
                Action::Display(_) => None,
            })
            .collect()
    }

    #[test]
    fn walkthrough_from_activation_to_deactivation() {
        let mut state = State::new_test(3);
        let tag = state.new_tag("t");
        state.activate(tag).unwrap();
        assert!(state.registry.contains(tag));

        state.tag_client(tag, C1).unwrap();
        state.tag_client(tag, C2).unwrap();
        assert_eq!(state.clients(tag).unwrap(), vec![C1, C2]);
        state.actions.clear();

        let result = state.set_clients(tag, &[C2, C3]).unwrap();
        assert_eq!(result, vec![C2, C3]);
        assert_eq!(
            signals(&mut state),
            vec![
                Signal::on_client(C1, SignalKind::Untagged, tag),
                Signal::on_tag(tag, SignalKind::Untagged, C1),
                Signal::on_client(C3, SignalKind::Tagged, tag),
                Signal::on_tag(tag, SignalKind::Tagged, C3),
            ]
        );

        state.set_selected(tag, true).unwrap();
        state.set_selected(tag, true).unwrap();
        assert_eq!(
            signals(&mut state),
            vec![Signal::property(tag, SignalKind::PropertySelected)]
        );

        state.deactivate(tag).unwrap();
        assert_eq!(
            signals(&mut state),
            vec![
                Signal::property(tag, SignalKind::PropertySelected),
                Signal::property(tag, SignalKind::PropertyActivated),
            ]
        );
        assert!(!state.registry.contains(tag));
        assert!(!state.tag(tag).unwrap().selected());
    }

    #[test]
    fn retained_clients_keep_their_order_and_new_ones_are_appended() {
        let mut state = State::new_test(4);
        let tag = state.new_test_tag("1");
        state.set_clients(tag, &[C1, C2, C3]).unwrap();

        let result = state.set_clients(tag, &[C4, C3, C1]).unwrap();

        assert_eq!(result, vec![C1, C3, C4]);
        assert_eq!(state.clients(tag).unwrap(), result);
    }

    #[test]
    fn duplicates_in_the_request_collapse() {
        let mut state = State::new_test(2);
        let tag = state.new_test_tag("1");

        let result = state.set_clients(tag, &[C2, C1, C2, C1]).unwrap();

        assert_eq!(result, vec![C2, C1]);
        let tagged = signals(&mut state)
            .iter()
            .filter(|s| s.kind == SignalKind::Tagged)
            .count();
        assert_eq!(tagged, 4);
    }

    #[test]
    fn an_empty_request_untags_everything() {
        let mut state = State::new_test(2);
        let tag = state.new_test_tag("1");
        state.set_clients(tag, &[C1, C2]).unwrap();

        assert!(state.set_clients(tag, &[]).unwrap().is_empty());
        assert!(!state.is_client_tagged(C1, tag));
        assert!(!state.is_client_tagged(C2, tag));
        // only the registry is left holding the tag
        assert_eq!(state.tags.refs(tag), 1);
    }

    #[test]
    fn an_unknown_client_aborts_without_rolling_back_earlier_edges() {
        let mut state = State::new_test(3);
        let tag = state.new_test_tag("1");
        state.set_clients(tag, &[C1, C2]).unwrap();
        let stranger = ClientHandle(42);

        let result = state.set_clients(tag, &[C2, stranger, C3]);

        assert_eq!(result, Err(TagError::UnknownClient(stranger)));
        // the search for C1 hits the stranger before C1 could be untagged
        assert_eq!(state.clients(tag).unwrap(), vec![C1, C2]);
        assert_eq!(state.tags.refs(tag), 3);
    }

    #[test]
    fn an_unknown_client_after_the_retained_members_keeps_the_edges_already_made() {
        let mut state = State::new_test(3);
        let tag = state.new_test_tag("1");
        state.set_clients(tag, &[C1]).unwrap();
        let stranger = ClientHandle(42);
        state.actions.clear();

        let result = state.set_clients(tag, &[C1, C3, stranger, C2]);

        assert_eq!(result, Err(TagError::UnknownClient(stranger)));
        // C3 stays tagged, C2 was never reached
        assert_eq!(state.clients(tag).unwrap(), vec![C1, C3]);
        assert_eq!(
            signals(&mut state),
            vec![
                Signal::on_client(C3, SignalKind::Tagged, tag),
                Signal::on_tag(tag, SignalKind::Tagged, C3),
            ]
        );
    }

    #[test]
    fn an_unknown_client_ahead_of_a_member_stops_before_any_untag() {
        let mut state = State::new_test(3);
        let tag = state.new_test_tag("1");
        state.set_clients(tag, &[C1, C2]).unwrap();
        state.actions.clear();

        let result = state.set_clients(tag, &[ClientHandle(42), C2]);

        assert_eq!(result, Err(TagError::UnknownClient(ClientHandle(42))));
        assert_eq!(state.clients(tag).unwrap(), vec![C1, C2]);
        assert!(state.actions.is_empty());
    }

    #[test]
    fn the_tag_survives_the_batch_even_if_nothing_else_holds_it() {
        let mut state = State::new_test(2);
        let tag = state.new_test_tag("1");
        state.set_clients(tag, &[C1]).unwrap();
        // only the edge to C1 holds the tag now
        state.deactivate(tag).unwrap();
        assert_eq!(state.tags.refs(tag), 1);

        let result = state.set_clients(tag, &[C2]).unwrap();

        assert_eq!(result, vec![C2]);
        assert!(state.tags.contains(tag));
    }

    #[test]
    fn reconciling_a_dead_tag_fails() {
        let mut state = State::new_test(1);
        let tag = state.new_test_tag("1");
        state.deactivate(tag).unwrap();
        assert_eq!(
            state.set_clients(tag, &[C1]),
            Err(TagError::UnknownTag(tag))
        );
    }
}
