//! Per-screen state: collection, filter inputs and edit session.
//!
//! A [`Board`] is the only owner of a screen's data. Every change goes
//! through one of its methods and every read of the visible set is derived
//! afresh from the current inputs.

use crate::{
    Account, EngineError, Record, ResultEngine,
    accounts::next_account_id,
    collection::{Collection, Placement},
    filter::{self, Selector},
    session::{Draft, EditSession, Origin},
};

/// Result of [`Board::save`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveOutcome<Id> {
    /// The draft was written and the session closed.
    Committed { id: Id, placement: Placement },
    /// The draft failed validation. Nothing was written; the session is
    /// still open.
    Rejected,
    /// No session was open.
    NothingOpen,
}

#[derive(Clone, Debug)]
pub struct Board<T: Record> {
    collection: Collection<T>,
    query: String,
    selector: Selector<T::Kind>,
    session: EditSession<T>,
}

impl<T: Record> Board<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self {
            collection: Collection::new(records),
            query: String::new(),
            selector: Selector::All,
            session: EditSession::default(),
        }
    }

    pub fn records(&self) -> &[T] {
        self.collection.records()
    }

    /// The raw query, as typed.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query_mut(&mut self) -> &mut String {
        &mut self.query
    }

    pub fn selector(&self) -> Selector<T::Kind> {
        self.selector
    }

    pub fn set_selector(&mut self, selector: Selector<T::Kind>) {
        self.selector = selector;
    }

    pub fn visible(&self) -> Vec<&T> {
        filter::visible(self.collection.records(), &self.query, &self.selector)
    }

    pub fn visible_indices(&self) -> Vec<usize> {
        filter::visible_indices(self.collection.records(), &self.query, &self.selector)
    }

    /// Stage a copy of the record with `id`.
    pub fn open_edit(&mut self, id: T::Id) -> ResultEngine<()> {
        let record = self
            .collection
            .get(id)
            .cloned()
            .ok_or_else(|| EngineError::KeyNotFound(id.to_string()))?;
        self.session.open(Origin::Existing, record);
        Ok(())
    }

    pub fn session(&self) -> &EditSession<T> {
        &self.session
    }

    pub fn draft(&self) -> Option<&Draft<T>> {
        self.session.draft()
    }

    /// The staged record, for form input. Changes stay in the session until
    /// [`save`](Self::save).
    pub fn draft_mut(&mut self) -> Option<&mut T> {
        self.session.record_mut()
    }

    /// Discard the staged draft. Returns whether a session was open.
    pub fn cancel(&mut self) -> bool {
        self.session.close().is_some()
    }

    /// Commit the staged draft.
    ///
    /// The draft goes through [`Record::prepare_commit`] first; a rejected
    /// draft is a no-op that leaves the session open. A prepared draft
    /// replaces the record with the same id in place, or, for records that
    /// allow it, is inserted at the front.
    pub fn save(&mut self) -> ResultEngine<SaveOutcome<T::Id>> {
        let Some(draft) = self.session.draft() else {
            return Ok(SaveOutcome::NothingOpen);
        };
        let Some(prepared) = draft.record.clone().prepare_commit() else {
            tracing::debug!(id = %draft.record.id(), "draft rejected, session kept open");
            return Ok(SaveOutcome::Rejected);
        };

        let id = prepared.id();
        let placement = if T::INSERTS_NEW {
            self.collection.upsert(prepared)
        } else {
            match self.collection.replace(prepared) {
                Ok(index) => Placement::Replaced(index),
                Err(_) => return Err(EngineError::KeyNotFound(id.to_string())),
            }
        };
        self.session.close();
        tracing::debug!(%id, ?placement, "draft committed");

        Ok(SaveOutcome::Committed { id, placement })
    }
}

impl Board<Account> {
    /// Stage a blank resident with a fresh id. Returns the id.
    pub fn open_add(&mut self) -> u64 {
        let id = next_account_id(self.collection.records());
        self.session.open(Origin::New, Account::blank(id));
        id
    }
}
