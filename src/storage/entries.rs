use crate::storage::random::IndexPicker;
use crate::storage::StoreError;
use serde::{Deserialize, Serialize};
use tracing::info;

/// A single fortune or joke record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: u64,
    pub text: String,
}

/// Ordered collection of text entries with a monotonic id sequence.
///
/// Backs both the fortune and joke resources; `kind` is the capitalized
/// resource label used in client-facing messages ("Fortune", "Joke").
/// Ids start at 1, are assigned in creation order, and are never reused,
/// even after a delete.
pub struct EntryStore {
    kind: &'static str,
    entries: Vec<Entry>,
    next_id: u64,
}

impl EntryStore {
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store pre-populated with seed texts.
    pub fn seeded(kind: &'static str, texts: &[&str]) -> Self {
        let mut store = Self::new(kind);
        for text in texts {
            // Seeds come from our own tables and are never blank.
            let _ = store.create(text);
        }
        store
    }

    /// Pick one entry uniformly at random.
    pub fn pick_random(&self, picker: &dyn IndexPicker) -> Result<&Entry, StoreError> {
        if self.entries.is_empty() {
            return Err(StoreError::NotFound(format!(
                "No {}s available",
                self.kind.to_lowercase()
            )));
        }
        let index = picker.pick_index(self.entries.len());
        Ok(&self.entries[index])
    }

    /// All entries in insertion order.
    pub fn list(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: u64) -> Result<&Entry, StoreError> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .ok_or_else(|| self.not_found())
    }

    /// Store a new entry with the next sequence id. The sequence advances
    /// permanently even though callers never observe gaps today.
    pub fn create(&mut self, text: &str) -> Result<Entry, StoreError> {
        let text = self.validate_text(text)?;

        let entry = Entry {
            id: self.next_id,
            text,
        };
        self.next_id += 1;
        self.entries.push(entry.clone());

        info!(kind = self.kind, id = entry.id, "Entry created");
        Ok(entry)
    }

    /// Rewrite an entry's text in place; id and list position are unchanged.
    pub fn update(&mut self, id: u64, text: &str) -> Result<Entry, StoreError> {
        let text = self.validate_text(text)?;
        let not_found = self.not_found();

        let entry = self
            .entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or(not_found)?;

        entry.text = text;
        info!(kind = self.kind, id, "Entry updated");
        Ok(entry.clone())
    }

    /// Remove an entry and return its final snapshot.
    pub fn remove(&mut self, id: u64) -> Result<Entry, StoreError> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or_else(|| self.not_found())?;

        let removed = self.entries.remove(index);
        info!(kind = self.kind, id, "Entry deleted");
        Ok(removed)
    }

    fn validate_text(&self, text: &str) -> Result<String, StoreError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(StoreError::InvalidInput(format!(
                "{} text is required",
                self.kind
            )));
        }
        Ok(trimmed.to_string())
    }

    fn not_found(&self) -> StoreError {
        StoreError::NotFound(format!("{} not found", self.kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::random::FixedPicker;

    fn store() -> EntryStore {
        EntryStore::new("Fortune")
    }

    #[test]
    fn create_trims_text_and_assigns_monotonic_ids() {
        let mut store = store();

        let first = store.create("  hi  ").unwrap();
        assert_eq!(first.text, "hi");
        assert_eq!(first.id, 1);

        let second = store.create("bye").unwrap();
        assert!(second.id > first.id);
        assert_eq!(store.get(first.id).unwrap().text, "hi");
    }

    #[test]
    fn create_rejects_blank_text() {
        let mut store = store();
        let err = store.create("   ").unwrap_err();
        assert_eq!(
            err,
            StoreError::InvalidInput("Fortune text is required".to_string())
        );
        assert!(store.is_empty());
    }

    #[test]
    fn deleted_ids_are_never_reused() {
        let mut store = store();
        let a = store.create("a").unwrap();
        let b = store.create("b").unwrap();

        let removed = store.remove(a.id).unwrap();
        assert_eq!(removed, a);
        assert_eq!(store.get(a.id).unwrap_err(), store.not_found());

        let c = store.create("c").unwrap();
        assert!(c.id > b.id);
        assert_ne!(c.id, a.id);
    }

    #[test]
    fn update_preserves_id_and_position() {
        let mut store = store();
        store.create("a").unwrap();
        let b = store.create("b").unwrap();
        store.create("c").unwrap();

        let updated = store.update(b.id, " beta ").unwrap();
        assert_eq!(updated.id, b.id);
        assert_eq!(updated.text, "beta");

        let ids: Vec<u64> = store.list().iter().map(|entry| entry.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn update_and_remove_missing_id_fail() {
        let mut store = store();
        assert_eq!(store.update(99, "x").unwrap_err(), store.not_found());
        assert_eq!(store.remove(99).unwrap_err(), store.not_found());
    }

    #[test]
    fn pick_random_uses_picker_index() {
        let mut store = store();
        store.create("a").unwrap();
        store.create("b").unwrap();
        store.create("c").unwrap();

        let picked = store.pick_random(&FixedPicker(1)).unwrap();
        assert_eq!(picked.text, "b");
    }

    #[test]
    fn pick_random_on_empty_store_fails() {
        let store = store();
        let err = store.pick_random(&FixedPicker(0)).unwrap_err();
        assert_eq!(
            err,
            StoreError::NotFound("No fortunes available".to_string())
        );
    }

    #[test]
    fn seeded_store_advances_the_sequence_past_the_seeds() {
        let mut store = EntryStore::seeded("Joke", &["one", "two"]);
        assert_eq!(store.len(), 2);
        let next = store.create("three").unwrap();
        assert_eq!(next.id, 3);
    }
}
