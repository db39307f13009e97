use serde::{Deserialize, Serialize};

use super::ClientHandle;
use crate::errors::{Result, TagError};

/// Handle to a tag stored in [`Tags`].
///
/// A handle stays valid for as long as the tag lives. Once the tag is
/// destroyed its slot may be reused, but the generation differs, so old
/// handles never resolve to the new occupant.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagId {
    index: usize,
    generation: u32,
}

/// A named workspace label grouping clients.
///
/// Identity is the [`TagId`], names may collide between tags.
#[derive(Default, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub(crate) name: String,
    pub(crate) selected: bool,
    pub(crate) activated: bool,
    // insertion ordered, never holds the same client twice
    pub(crate) clients: Vec<ClientHandle>,
}

impl Tag {
    #[must_use]
    pub fn new(name: &str) -> Tag {
        Tag {
            name: name.to_owned(),
            ..Tag::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the tag should be shown now.
    pub fn selected(&self) -> bool {
        self.selected
    }

    /// Whether the tag is live and tracked by the registry.
    pub fn activated(&self) -> bool {
        self.activated
    }

    pub fn clients(&self) -> &[ClientHandle] {
        &self.clients
    }

    pub fn has_client(&self, client: &ClientHandle) -> bool {
        self.clients.contains(client)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct Entry {
    tag: Tag,
    refs: usize,
    // the part of `refs` held through `insert`/`hold`
    handles: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct Slot {
    generation: u32,
    entry: Option<Entry>,
}

/// Arena owning every live tag.
///
/// Each tag carries a strong count. The arena hands out the first count on
/// [`Tags::insert`] as a handle; outside callers take more handles with
/// [`Tags::hold`] and give them back with [`Tags::release_handle`], which
/// refuses once no handle is left. The registry and membership edges use
/// [`Tags::acquire`] and [`Tags::release`]. The tag is destroyed by the
/// release that brings the count to zero.
/// Destroying a tag drops its client list, clients themselves are not
/// owned by tags.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Tags {
    slots: Vec<Slot>,
    free: Vec<usize>,
}

impl Tags {
    /// Create a new empty arena
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a tag, the caller holds the first reference to it.
    pub(crate) fn insert(&mut self, tag: Tag) -> TagId {
        let entry = Some(Entry {
            tag,
            refs: 1,
            handles: 1,
        });
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index];
            slot.entry = entry;
            return TagId {
                index,
                generation: slot.generation,
            };
        }
        self.slots.push(Slot {
            generation: 0,
            entry,
        });
        TagId {
            index: self.slots.len() - 1,
            generation: 0,
        }
    }

    fn entry(&self, id: TagId) -> Option<&Entry> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)?
            .entry
            .as_ref()
    }

    fn entry_mut(&mut self, id: TagId) -> Option<&mut Entry> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)?
            .entry
            .as_mut()
    }

    /// Get a tag by its id, `None` once it has been destroyed.
    pub fn get(&self, id: TagId) -> Option<&Tag> {
        self.entry(id).map(|entry| &entry.tag)
    }

    pub(crate) fn get_mut(&mut self, id: TagId) -> Option<&mut Tag> {
        self.entry_mut(id).map(|entry| &mut entry.tag)
    }

    pub(crate) fn lookup(&self, id: TagId) -> Result<&Tag> {
        self.get(id).ok_or(TagError::UnknownTag(id))
    }

    pub(crate) fn lookup_mut(&mut self, id: TagId) -> Result<&mut Tag> {
        self.get_mut(id).ok_or(TagError::UnknownTag(id))
    }

    pub fn contains(&self, id: TagId) -> bool {
        self.entry(id).is_some()
    }

    /// Number of strong references held on a tag, 0 if it is gone.
    pub fn refs(&self, id: TagId) -> usize {
        self.entry(id).map_or(0, |entry| entry.refs)
    }

    /// Number of references held by outside callers.
    pub fn handles(&self, id: TagId) -> usize {
        self.entry(id).map_or(0, |entry| entry.handles)
    }

    pub(crate) fn hold(&mut self, id: TagId) -> Result<()> {
        let entry = self.entry_mut(id).ok_or(TagError::UnknownTag(id))?;
        entry.refs += 1;
        entry.handles += 1;
        Ok(())
    }

    /// Give back a handle taken by `insert` or `hold`.
    pub(crate) fn release_handle(&mut self, id: TagId) -> Result<Option<Tag>> {
        let entry = self.entry_mut(id).ok_or(TagError::UnknownTag(id))?;
        if entry.handles == 0 {
            return Err(TagError::NotHeld(id));
        }
        entry.handles -= 1;
        self.release(id)
    }

    pub(crate) fn acquire(&mut self, id: TagId) -> Result<()> {
        let entry = self.entry_mut(id).ok_or(TagError::UnknownTag(id))?;
        entry.refs += 1;
        Ok(())
    }

    /// Drop one reference. Returns the tag if this was the last one.
    pub(crate) fn release(&mut self, id: TagId) -> Result<Option<Tag>> {
        let entry = self.entry_mut(id).ok_or(TagError::UnknownTag(id))?;
        entry.refs -= 1;
        if entry.refs > 0 {
            return Ok(None);
        }
        let slot = &mut self.slots[id.index];
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        Ok(slot.entry.take().map(|entry| entry.tag))
    }

    /// Ids of all live tags, in slot order.
    pub fn ids(&self) -> Vec<TagId> {
        self.iter().map(|(id, _)| id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TagId, &Tag)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            let entry = slot.entry.as_ref()?;
            let id = TagId {
                index,
                generation: slot.generation,
            };
            Some((id, &entry.tag))
        })
    }

    /// Get the amount of live tags
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.entry.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
