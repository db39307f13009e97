use crate::config::Config;
use crate::display_action::Action;
use crate::display_servers::DisplayServer;
use crate::state::State;
use crate::Signal;

/// Reacts to a signal. Handlers may call back into any tag operation; the
/// effects they cause are queued behind the ones already pending.
pub type SignalHandler = Box<dyn FnMut(&mut State, &Signal)>;

/// Maintains current program state.
pub struct Manager<C, SERVER> {
    pub state: State,
    pub config: C,
    pub display_server: SERVER,
    handlers: Vec<(&'static str, SignalHandler)>,
}

impl<C, SERVER> Manager<C, SERVER>
where
    C: Config,
    SERVER: DisplayServer,
{
    pub fn new(config: C) -> Self {
        let display_server = SERVER::new(&config);

        Self {
            state: State::new(&config),
            config,
            display_server,
            handlers: Vec::new(),
        }
    }

    /// Call `handler` for every signal called `name`, e.g. `"tagged"`.
    pub fn connect<F>(&mut self, name: &'static str, handler: F)
    where
        F: FnMut(&mut State, &Signal) + 'static,
    {
        self.handlers.push((name, Box::new(handler)));
    }

    /// Deliver queued effects in the order they were queued.
    ///
    /// Display actions go to the display server, signals to the connected
    /// handlers. Effects queued by handlers are delivered in the same run
    /// until the configured budget is spent; whatever is left waits for the
    /// next call. Returns how many effects were delivered.
    pub fn dispatch(&mut self) -> usize {
        let budget = self.config.dispatch_budget();
        let mut delivered = 0;
        while delivered < budget {
            let Some(action) = self.state.actions.pop_front() else {
                break;
            };
            delivered += 1;
            match action {
                Action::Display(act) => {
                    tracing::trace!("DisplayAction: {:?}", act);
                    self.display_server.execute_action(act);
                }
                Action::Emit(signal) => {
                    tracing::trace!("Signal: {} on {:?}", signal.name(), signal.target);
                    for (name, handler) in &mut self.handlers {
                        if *name == signal.name() {
                            handler(&mut self.state, &signal);
                        }
                    }
                }
            }
        }
        if !self.state.actions.is_empty() {
            tracing::warn!(
                "Dispatch budget of {} spent, {} effects left queued",
                budget,
                self.state.actions.len()
            );
        }
        self.display_server.flush();
        delivered
    }
}

#[cfg(test)]
impl Manager<crate::config::TestConfig, crate::display_servers::MockDisplayServer> {
    pub fn new_test(tags: Vec<String>) -> Self {
        Self::new(crate::config::TestConfig {
            tags,
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TestConfig;
    use crate::display_action::DisplayAction;
    use crate::display_servers::MockDisplayServer;
    use crate::models::{ClientHandle, ScreenId};
    use crate::{SignalKind, SignalTarget};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn manager_with_clients(tags: &[&str], clients: u32) -> Manager<TestConfig, MockDisplayServer> {
        let mut manager = Manager::new_test(tags.iter().map(ToString::to_string).collect());
        let screen = manager.state.add_screen("test");
        for handle in 1..=clients {
            manager.state.manage_client(ClientHandle(handle), screen).unwrap();
        }
        manager.dispatch();
        manager.display_server.executed.clear();
        manager
    }

    #[test]
    fn startup_tags_are_announced_to_the_display_server() {
        let mut manager = Manager::new_test(vec!["1".to_string(), "2".to_string()]);
        assert_eq!(manager.dispatch(), 6);
        assert_eq!(
            manager.display_server.executed,
            vec![
                DisplayAction::UpdateDesktopCount,
                DisplayAction::UpdateDesktopNames,
                DisplayAction::UpdateDesktopCount,
                DisplayAction::UpdateDesktopNames,
            ]
        );
    }

    #[test]
    fn signals_reach_handlers_in_queue_order() {
        let mut manager = manager_with_clients(&["1"], 1);
        let tag = manager.state.registry.first().unwrap();
        let seen = Rc::new(RefCell::new(vec![]));
        let log = seen.clone();
        manager.connect("tagged", move |state, signal| {
            // the edge is already in place when anyone hears about it
            assert!(state.is_client_tagged(ClientHandle(1), tag));
            log.borrow_mut().push(signal.target);
        });

        manager.state.tag_client(tag, ClientHandle(1)).unwrap();
        manager.dispatch();

        assert_eq!(
            *seen.borrow(),
            vec![
                SignalTarget::Client(ClientHandle(1)),
                SignalTarget::Tag(tag)
            ]
        );
        assert_eq!(
            manager.display_server.executed,
            vec![
                DisplayAction::UpdateClientDesktop(ClientHandle(1)),
                DisplayAction::InvalidateBanning,
                DisplayAction::UpdateWorkarea(ScreenId(0)),
            ]
        );
    }

    #[test]
    fn handlers_can_mutate_the_state_they_are_told_about() {
        let mut manager = manager_with_clients(&["1", "2"], 1);
        let first = manager.state.registry.get(0).unwrap();
        let second = manager.state.registry.get(1).unwrap();
        // mirror every tag on the first tag onto the second
        manager.connect("tagged", move |state, signal| {
            if signal.target == SignalTarget::Tag(first) {
                if let Some(client) = signal.client() {
                    state.tag_client(second, client).unwrap();
                }
            }
        });

        manager.state.tag_client(first, ClientHandle(1)).unwrap();
        manager.dispatch();

        assert!(manager.state.is_client_tagged(ClientHandle(1), second));
        assert!(manager.state.actions.is_empty());
        let workarea_updates = manager
            .display_server
            .executed
            .iter()
            .filter(|act| matches!(act, DisplayAction::UpdateWorkarea(_)))
            .count();
        assert_eq!(workarea_updates, 2);
    }

    #[test]
    fn a_handler_feeding_itself_is_cut_off_by_the_budget() {
        let mut manager: Manager<TestConfig, MockDisplayServer> = Manager::new(TestConfig {
            tags: vec!["1".to_string()],
            dispatch_budget: 20,
            ..TestConfig::default()
        });
        manager.dispatch();
        let tag = manager.state.registry.first().unwrap();
        // flips the selection back every time it changes
        manager.connect("property.selected", move |state, _| {
            let selected = state.tag(tag).unwrap().selected();
            state.set_selected(tag, !selected).unwrap();
        });

        manager.state.set_selected(tag, true).unwrap();

        assert_eq!(manager.dispatch(), 20);
        assert!(!manager.state.actions.is_empty());
    }

    #[test]
    fn handlers_only_hear_the_signal_they_connected_to() {
        let mut manager = manager_with_clients(&["1"], 0);
        let tag = manager.state.registry.first().unwrap();
        let heard = Rc::new(RefCell::new(vec![]));
        let log = heard.clone();
        manager.connect("property.name", move |_, signal| {
            log.borrow_mut().push(signal.kind);
        });

        manager.state.set_selected(tag, true).unwrap();
        manager.state.set_name(tag, "www").unwrap();
        manager.dispatch();

        assert_eq!(*heard.borrow(), vec![SignalKind::PropertyName]);
    }
}
