//! Ordered in-memory store of one screen's records.

use crate::Record;

/// Where a committed record landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// A new record, inserted at index 0.
    Inserted,
    /// An existing record, replaced at its index.
    Replaced(usize),
}

/// The ordered records of one screen.
///
/// The only mutations are insert-at-front and replace-by-id; records are
/// never removed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Collection<T> {
    records: Vec<T>,
}

impl<T: Record> Collection<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn position(&self, id: T::Id) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Replace the record sharing `record`'s id, or insert it at the front
    /// when none does.
    pub fn upsert(&mut self, record: T) -> Placement {
        match self.position(record.id()) {
            Some(index) => {
                self.records[index] = record;
                Placement::Replaced(index)
            }
            None => {
                self.records.insert(0, record);
                Placement::Inserted
            }
        }
    }

    /// Replace the record sharing `record`'s id in place. Returns the record
    /// back when no such id exists.
    pub fn replace(&mut self, record: T) -> Result<usize, T> {
        match self.position(record.id()) {
            Some(index) => {
                self.records[index] = record;
                Ok(index)
            }
            None => Err(record),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Account, Role};

    fn collection() -> Collection<Account> {
        Collection::new(vec![
            Account::new(1, "Sahroni", Role::Resident),
            Account::new(2, "Petugas A", Role::Officer),
        ])
    }

    #[test]
    fn upsert_new_goes_to_front() {
        let mut collection = collection();
        let placement = collection.upsert(Account::new(9, "Budi", Role::Admin));
        assert_eq!(placement, Placement::Inserted);
        assert_eq!(collection.records()[0].id, 9);
        assert_eq!(collection.len(), 3);
    }

    #[test]
    fn upsert_existing_keeps_position() {
        let mut collection = collection();
        let placement = collection.upsert(Account::new(2, "Petugas B", Role::Officer));
        assert_eq!(placement, Placement::Replaced(1));
        assert_eq!(collection.records()[1].name, "Petugas B");
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn replace_unknown_hands_record_back() {
        let mut collection = collection();
        let stray = Account::new(5, "Stray", Role::Admin);
        assert_eq!(collection.replace(stray.clone()), Err(stray));
        assert_eq!(collection, self::collection());
    }
}
