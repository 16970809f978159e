//! Zero-or-one record holder.
//!
//! ```text
//! EMPTY   --put-->   HOLDING
//! HOLDING --put-->   HOLDING   (replace)
//! HOLDING --clear--> EMPTY
//! EMPTY   --clear--> EMPTY     (no-op)
//! ```

use serde::Serialize;
use thiserror::Error;

/// Store errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("No {0} available. Please create a new {0} first.")]
    NotFound(&'static str),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// A record kind the store can hold.
pub trait Record {
    /// Human-readable kind, used in messages and logs.
    const KIND: &'static str;

    /// Identifier of this record (bill id, invoice number).
    fn key(&self) -> &str;
}

/// Whether the store currently holds a record.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum StoreState {
    Empty,
    Holding,
}

/// Holds at most one record, replaced wholesale on each write.
#[derive(Debug, Clone)]
pub struct SingleRecordStore<T> {
    slot: Option<T>,
}

impl<T> Default for SingleRecordStore<T> {
    fn default() -> Self {
        Self { slot: None }
    }
}

impl<T: Record> SingleRecordStore<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a record, returning the one it replaced.
    pub fn put(&mut self, record: T) -> Option<T> {
        let previous = self.slot.replace(record);
        tracing::debug!(
            kind = T::KIND,
            key = self.slot.as_ref().map(Record::key),
            replaced = previous.as_ref().map(Record::key),
            "record stored"
        );
        previous
    }

    /// Get the held record.
    pub fn get(&self) -> StoreResult<&T> {
        self.slot.as_ref().ok_or(StoreError::NotFound(T::KIND))
    }

    /// Get the held record for in-place updates.
    pub fn get_mut(&mut self) -> StoreResult<&mut T> {
        self.slot.as_mut().ok_or(StoreError::NotFound(T::KIND))
    }

    /// Remove the held record. Clearing an empty store is a no-op.
    pub fn clear(&mut self) -> Option<T> {
        let removed = self.slot.take();
        tracing::debug!(
            kind = T::KIND,
            removed = removed.as_ref().map(Record::key),
            "store cleared"
        );
        removed
    }

    pub fn state(&self) -> StoreState {
        if self.slot.is_some() {
            StoreState::Holding
        } else {
            StoreState::Empty
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Note(String);

    impl Record for Note {
        const KIND: &'static str = "note";

        fn key(&self) -> &str {
            &self.0
        }
    }

    #[test]
    fn test_new_store_is_empty() {
        let store: SingleRecordStore<Note> = SingleRecordStore::new();
        assert!(store.is_empty());
        assert_eq!(store.state(), StoreState::Empty);
        assert_eq!(store.get(), Err(StoreError::NotFound("note")));
    }

    #[test]
    fn test_put_then_get() {
        let mut store = SingleRecordStore::new();
        assert_eq!(store.put(Note("a".into())), None);
        assert_eq!(store.state(), StoreState::Holding);
        assert_eq!(store.get().unwrap(), &Note("a".into()));
    }

    #[test]
    fn test_put_replaces() {
        let mut store = SingleRecordStore::new();
        store.put(Note("a".into()));
        let replaced = store.put(Note("b".into()));

        assert_eq!(replaced, Some(Note("a".into())));
        assert_eq!(store.get().unwrap().key(), "b");
        assert_eq!(store.state(), StoreState::Holding);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut store = SingleRecordStore::new();
        store.put(Note("a".into()));

        assert_eq!(store.clear(), Some(Note("a".into())));
        assert_eq!(store.state(), StoreState::Empty);
        assert!(store.get().is_err());

        assert_eq!(store.clear(), None);
        assert_eq!(store.state(), StoreState::Empty);
    }

    #[test]
    fn test_get_mut_updates_in_place() {
        let mut store = SingleRecordStore::new();
        assert!(store.get_mut().is_err());

        store.put(Note("a".into()));
        store.get_mut().unwrap().0.push('!');
        assert_eq!(store.get().unwrap().key(), "a!");
    }

    #[test]
    fn test_not_found_message() {
        let err = StoreError::NotFound("bill");
        assert_eq!(
            err.to_string(),
            "No bill available. Please create a new bill first."
        );
    }
}
