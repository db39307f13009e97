use serde::{Deserialize, Serialize};

use super::TagId;

/// Ordered list of the activated tags, in activation order.
///
/// Membership here is what makes a tag usable. The registry owns one strong
/// reference on every tag it lists, see `State::activate`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    tags: Vec<TagId>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, tag: TagId) {
        self.tags.push(tag);
    }

    /// Remove the first entry for `tag`. Returns whether one was found.
    pub(crate) fn remove(&mut self, tag: TagId) -> bool {
        match self.position(tag) {
            Some(index) => {
                self.tags.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn position(&self, tag: TagId) -> Option<usize> {
        self.tags.iter().position(|&t| t == tag)
    }

    pub fn contains(&self, tag: TagId) -> bool {
        self.tags.contains(&tag)
    }

    pub fn get(&self, index: usize) -> Option<TagId> {
        self.tags.get(index).copied()
    }

    pub fn first(&self) -> Option<TagId> {
        self.tags.first().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = TagId> + '_ {
        self.tags.iter().copied()
    }

    pub fn as_slice(&self) -> &[TagId] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
