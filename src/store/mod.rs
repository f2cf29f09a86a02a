use std::collections::HashSet;

use thiserror::Error;
use uuid::Uuid;

use crate::models::Expat;

mod expats;
mod seed;

pub use seed::example_expats;

/// Errors raised by the record store
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("an expat with id {0} already exists")]
    DuplicateId(Uuid),
    #[error("id {0} belonged to a removed expat and cannot be reused")]
    RetiredId(Uuid),
    #[error("no expat matches id {0}")]
    NotFound(String),
    #[error("id prefix {0} is ambiguous")]
    AmbiguousId(String),
}

/// In-memory, ordered collection of expat records.
///
/// The store is the single owner of the records; the filter and statistics
/// engines only ever borrow `records()`.
#[derive(Debug, Default)]
pub struct Store {
    expats: Vec<Expat>,
    retired: HashSet<Uuid>,
}

impl Store {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the example expats shown on first launch
    pub fn with_examples() -> Self {
        let mut store = Self::new();
        for expat in example_expats() {
            // freshly generated ids, cannot collide
            store.expats.push(expat);
        }
        store
    }

    pub fn records(&self) -> &[Expat] {
        &self.expats
    }

    pub fn len(&self) -> usize {
        self.expats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expats.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let store = Store::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_with_examples() {
        let store = Store::with_examples();
        let names: Vec<&str> = store.records().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["John Doe", "Jane Smith", "Peter Jones"]);
    }
}
