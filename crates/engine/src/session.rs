//! Single-slot staging area for the record under edit.

/// How the staged draft came to be.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    /// A blank template from "add".
    New,
    /// A copy of a record already in the collection.
    Existing,
}

/// A staged draft. Owned: editing it never touches the collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Draft<T> {
    pub origin: Origin,
    pub record: T,
}

/// The edit session of one screen: closed, or open with exactly one draft.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditSession<T> {
    slot: Option<Draft<T>>,
}

impl<T> Default for EditSession<T> {
    fn default() -> Self {
        Self { slot: None }
    }
}

impl<T> EditSession<T> {
    /// Stage `record`, replacing whatever was staged before.
    pub fn open(&mut self, origin: Origin, record: T) {
        self.slot = Some(Draft { origin, record });
    }

    pub fn is_open(&self) -> bool {
        self.slot.is_some()
    }

    pub fn draft(&self) -> Option<&Draft<T>> {
        self.slot.as_ref()
    }

    pub fn record_mut(&mut self) -> Option<&mut T> {
        self.slot.as_mut().map(|draft| &mut draft.record)
    }

    pub fn origin(&self) -> Option<Origin> {
        self.slot.as_ref().map(|draft| draft.origin)
    }

    /// Close the session, returning the discarded draft.
    pub fn close(&mut self) -> Option<Draft<T>> {
        self.slot.take()
    }
}
