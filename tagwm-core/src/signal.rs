use crate::models::{ClientHandle, TagId};
use serde::{Deserialize, Serialize};

/// The object a signal is emitted on, or passed as its argument.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalTarget {
    Tag(TagId),
    Client(ClientHandle),
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    PropertyName,
    PropertySelected,
    PropertyActivated,
    Tagged,
    Untagged,
}

impl SignalKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::PropertyName => "property.name",
            Self::PropertySelected => "property.selected",
            Self::PropertyActivated => "property.activated",
            Self::Tagged => "tagged",
            Self::Untagged => "untagged",
        }
    }
}

/// An event published on an object.
///
/// Property signals carry no argument. Membership signals are emitted twice
/// per edge: once on the client with the tag as argument, then on the tag
/// with the client as argument.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Signal {
    pub target: SignalTarget,
    pub kind: SignalKind,
    pub arg: Option<SignalTarget>,
}

impl Signal {
    pub const fn property(tag: TagId, kind: SignalKind) -> Self {
        Self {
            target: SignalTarget::Tag(tag),
            kind,
            arg: None,
        }
    }

    /// The client side half of a membership change.
    pub const fn on_client(client: ClientHandle, kind: SignalKind, tag: TagId) -> Self {
        Self {
            target: SignalTarget::Client(client),
            kind,
            arg: Some(SignalTarget::Tag(tag)),
        }
    }

    /// The tag side half of a membership change.
    pub const fn on_tag(tag: TagId, kind: SignalKind, client: ClientHandle) -> Self {
        Self {
            target: SignalTarget::Tag(tag),
            kind,
            arg: Some(SignalTarget::Client(client)),
        }
    }

    pub const fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub const fn arg_count(&self) -> usize {
        if self.arg.is_some() {
            1
        } else {
            0
        }
    }

    /// The tag this signal concerns, either as target or argument.
    pub fn tag(&self) -> Option<TagId> {
        [Some(self.target), self.arg]
            .into_iter()
            .flatten()
            .find_map(|t| match t {
                SignalTarget::Tag(tag) => Some(tag),
                SignalTarget::Client(_) => None,
            })
    }

    /// The client this signal concerns, either as target or argument.
    pub fn client(&self) -> Option<ClientHandle> {
        [Some(self.target), self.arg]
            .into_iter()
            .flatten()
            .find_map(|t| match t {
                SignalTarget::Client(client) => Some(client),
                SignalTarget::Tag(_) => None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tags;
    use crate::Tag;

    #[test]
    fn membership_signals_carry_the_other_side_as_their_only_argument() {
        let mut tags = Tags::new();
        let tag = tags.insert(Tag::new("1"));
        let client = ClientHandle(7);

        let on_client = Signal::on_client(client, SignalKind::Tagged, tag);
        assert_eq!(on_client.name(), "tagged");
        assert_eq!(on_client.arg_count(), 1);
        assert_eq!(on_client.target, SignalTarget::Client(client));
        assert_eq!(on_client.tag(), Some(tag));

        let on_tag = Signal::on_tag(tag, SignalKind::Untagged, client);
        assert_eq!(on_tag.name(), "untagged");
        assert_eq!(on_tag.client(), Some(client));
    }

    #[test]
    fn property_signals_have_no_argument() {
        let mut tags = Tags::new();
        let tag = tags.insert(Tag::new("1"));
        let signal = Signal::property(tag, SignalKind::PropertySelected);
        assert_eq!(signal.name(), "property.selected");
        assert_eq!(signal.arg_count(), 0);
        assert_eq!(signal.client(), None);
    }
}
