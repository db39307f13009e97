use crate::models::ClientHandle;
use crate::state::State;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TagState {
    pub index: usize,
    pub name: String,
    pub selected: bool,
    pub current: bool,
    pub clients: Vec<ClientHandle>,
}

/// Serializable snapshot of the activated tags, in registry order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ManagerState {
    pub desktop_names: Vec<String>,
    pub current_tag: Option<usize>,
    pub focused_client: Option<ClientHandle>,
    pub tags: Vec<TagState>,
    pub instances: usize,
}

impl From<&State> for ManagerState {
    fn from(state: &State) -> Self {
        let current_tag = state
            .current_or_first_selected()
            .and_then(|id| state.registry.position(id));
        let tags: Vec<TagState> = state
            .registry
            .iter()
            .enumerate()
            .filter_map(|(index, id)| {
                let tag = state.tags.get(id)?;
                Some(TagState {
                    index,
                    name: tag.name().to_owned(),
                    selected: tag.selected(),
                    current: current_tag == Some(index),
                    clients: tag.clients().to_vec(),
                })
            })
            .collect();
        Self {
            desktop_names: tags.iter().map(|t| t.name.clone()).collect(),
            current_tag,
            focused_client: state.focus_manager.client(),
            tags,
            instances: state.instances(),
        }
    }
}
