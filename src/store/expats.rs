use tracing::debug;
use uuid::Uuid;

use super::{Store, StoreError};
use crate::models::{Expat, FieldUpdate};

impl Store {
    // ==================== CREATE ====================

    /// Append a default expat and return its new id
    pub fn add(&mut self) -> Uuid {
        let expat = Expat::new();
        let id = expat.id;
        self.expats.push(expat);
        debug!(%id, "added expat");
        id
    }

    /// Append a caller-built expat. Ids must be unique and never reused.
    pub fn insert(&mut self, expat: Expat) -> Result<Uuid, StoreError> {
        let id = expat.id;
        if self.retired.contains(&id) {
            return Err(StoreError::RetiredId(id));
        }
        if self.get(id).is_some() {
            return Err(StoreError::DuplicateId(id));
        }
        self.expats.push(expat);
        debug!(%id, "inserted expat");
        Ok(id)
    }

    // ==================== READ ====================

    pub fn get(&self, id: Uuid) -> Option<&Expat> {
        self.expats.iter().find(|e| e.id == id)
    }

    /// Resolve an expat from a full UUID or a unique prefix of its
    /// hyphen-less form
    pub fn find_by_prefix(&self, identifier: &str) -> Result<&Expat, StoreError> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(StoreError::NotFound(String::new()));
        }

        if let Ok(uuid) = Uuid::parse_str(identifier) {
            return self
                .get(uuid)
                .ok_or_else(|| StoreError::NotFound(identifier.to_string()));
        }

        let needle = identifier.to_lowercase().replace('-', "");
        let mut matches = self
            .expats
            .iter()
            .filter(|e| e.id.simple().to_string().starts_with(&needle));

        match (matches.next(), matches.next()) {
            (Some(expat), None) => Ok(expat),
            (Some(_), Some(_)) => Err(StoreError::AmbiguousId(identifier.to_string())),
            (None, _) => Err(StoreError::NotFound(identifier.to_string())),
        }
    }

    // ==================== UPDATE ====================

    /// Replace exactly one field of the expat with `id`.
    /// Returns false (and changes nothing) when no such expat exists.
    pub fn update(&mut self, id: Uuid, update: FieldUpdate) -> bool {
        let Some(expat) = self.expats.iter_mut().find(|e| e.id == id) else {
            debug!(%id, "update skipped, no such expat");
            return false;
        };
        let field = update.field();
        expat.apply(update);
        debug!(%id, field = field.as_str(), "updated expat");
        true
    }

    // ==================== DELETE ====================

    /// Remove the expat with `id`. Returns false when no such expat exists.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.expats.len();
        self.expats.retain(|e| e.id != id);
        let removed = self.expats.len() < before;
        if removed {
            self.retired.insert(id);
            debug!(%id, "removed expat");
        }
        removed
    }
}
