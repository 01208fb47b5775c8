use crate::storage::StoreError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

const FALLBACK_EMOJI: &str = "🤔";
const FALLBACK_HINT: &str = "Try mood=happy, tired, or stressed.";

/// The payload stored for one mood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vibe {
    pub emoji: String,
    pub message: String,
}

/// A vibe with its mood key inlined, as returned to clients.
#[derive(Debug, Clone, Serialize)]
pub struct VibeRecord {
    pub mood: String,
    #[serde(flatten)]
    pub vibe: Vibe,
}

/// Mood-keyed vibe collection. Keys are always lowercased before storage
/// and lookup, so mood matching is case-insensitive. Listings come back
/// in key order, which keeps `/api/vibe/all` stable regardless of when
/// each mood was added.
pub struct VibeStore {
    moods: BTreeMap<String, Vibe>,
}

impl VibeStore {
    pub fn new() -> Self {
        Self {
            moods: BTreeMap::new(),
        }
    }

    /// The three stock moods the service ships with.
    pub fn with_defaults() -> Self {
        let mut store = Self::new();
        for (mood, emoji, message) in [
            ("happy", "😄", "Keep going - you're shipping greatness!"),
            ("tired", "🥱", "Hydrate. Stretch. Then commit."),
            ("stressed", "😵‍💫", "Breathe. One bug at a time."),
        ] {
            store.moods.insert(
                mood.to_string(),
                Vibe {
                    emoji: emoji.to_string(),
                    message: message.to_string(),
                },
            );
        }
        store
    }

    /// Look up a mood. Unknown moods are a normal outcome, not an error:
    /// the caller gets a fallback record echoing the mood (or "unknown"
    /// when blank) with a hint message.
    pub fn lookup(&self, mood: &str) -> VibeRecord {
        let key = mood.to_lowercase();
        match self.moods.get(&key) {
            Some(vibe) => VibeRecord {
                mood: key,
                vibe: vibe.clone(),
            },
            None => VibeRecord {
                mood: if key.is_empty() {
                    "unknown".to_string()
                } else {
                    key
                },
                vibe: Vibe {
                    emoji: FALLBACK_EMOJI.to_string(),
                    message: FALLBACK_HINT.to_string(),
                },
            },
        }
    }

    pub fn all(&self) -> Vec<VibeRecord> {
        self.moods
            .iter()
            .map(|(mood, vibe)| VibeRecord {
                mood: mood.clone(),
                vibe: vibe.clone(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.moods.len()
    }

    pub fn contains(&self, mood: &str) -> bool {
        self.moods.contains_key(&mood.to_lowercase())
    }

    /// Add a new mood. All three fields are required; the mood key is
    /// lowercased, and an existing key is a conflict (use update instead).
    pub fn insert(
        &mut self,
        mood: &str,
        emoji: &str,
        message: &str,
    ) -> Result<VibeRecord, StoreError> {
        if mood.is_empty() || emoji.is_empty() || message.is_empty() {
            return Err(StoreError::InvalidInput(
                "mood, emoji, and message are required".to_string(),
            ));
        }

        let key = mood.to_lowercase();
        if self.moods.contains_key(&key) {
            return Err(StoreError::Conflict(
                "Mood already exists. Use PUT to update.".to_string(),
            ));
        }

        let vibe = Vibe {
            emoji: emoji.to_string(),
            message: message.to_string(),
        };
        self.moods.insert(key.clone(), vibe.clone());

        info!(mood = %key, "Vibe created");
        Ok(VibeRecord { mood: key, vibe })
    }

    /// Partial update: each field is applied only when provided non-empty;
    /// omitted fields keep their current value.
    pub fn update(
        &mut self,
        mood: &str,
        emoji: Option<&str>,
        message: Option<&str>,
    ) -> Result<VibeRecord, StoreError> {
        let key = mood.to_lowercase();
        let vibe = self
            .moods
            .get_mut(&key)
            .ok_or_else(|| StoreError::NotFound("Mood not found".to_string()))?;

        if let Some(emoji) = emoji.filter(|value| !value.is_empty()) {
            vibe.emoji = emoji.to_string();
        }
        if let Some(message) = message.filter(|value| !value.is_empty()) {
            vibe.message = message.to_string();
        }

        let vibe = vibe.clone();
        info!(mood = %key, "Vibe updated");
        Ok(VibeRecord { mood: key, vibe })
    }

    pub fn remove(&mut self, mood: &str) -> Result<VibeRecord, StoreError> {
        let key = mood.to_lowercase();
        let vibe = self
            .moods
            .remove(&key)
            .ok_or_else(|| StoreError::NotFound("Mood not found".to_string()))?;

        info!(mood = %key, "Vibe deleted");
        Ok(VibeRecord { mood: key, vibe })
    }
}

impl Default for VibeStore {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let mut store = VibeStore::new();
        store.insert("Happy", "😄", "yay").unwrap();

        let found = store.lookup("HAPPY");
        assert_eq!(found.mood, "happy");
        assert_eq!(found.vibe.emoji, "😄");
    }

    #[test]
    fn lookup_miss_returns_fallback_not_error() {
        let store = VibeStore::with_defaults();

        let miss = store.lookup("zzz");
        assert_eq!(miss.mood, "zzz");
        assert_eq!(miss.vibe.emoji, FALLBACK_EMOJI);
        assert_eq!(miss.vibe.message, FALLBACK_HINT);

        let blank = store.lookup("");
        assert_eq!(blank.mood, "unknown");
    }

    #[test]
    fn insert_rejects_duplicate_mood_and_leaves_store_unchanged() {
        let mut store = VibeStore::new();
        store.insert("happy", "😄", "original").unwrap();

        let err = store.insert("HaPpY", "🙃", "replacement").unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));

        assert_eq!(store.len(), 1);
        assert_eq!(store.lookup("happy").vibe.message, "original");
    }

    #[test]
    fn insert_requires_all_fields() {
        let mut store = VibeStore::new();
        let err = store.insert("calm", "", "msg").unwrap_err();
        assert!(matches!(err, StoreError::InvalidInput(_)));
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn update_applies_only_provided_fields() {
        let mut store = VibeStore::new();
        store.insert("tired", "🥱", "rest").unwrap();

        let updated = store.update("TIRED", None, Some("sleep")).unwrap();
        assert_eq!(updated.vibe.emoji, "🥱");
        assert_eq!(updated.vibe.message, "sleep");

        // Empty strings count as omitted, matching the partial-update rule.
        let unchanged = store.update("tired", Some(""), None).unwrap();
        assert_eq!(unchanged.vibe.emoji, "🥱");
    }

    #[test]
    fn update_and_remove_missing_mood_fail() {
        let mut store = VibeStore::new();
        assert!(matches!(
            store.update("nope", Some("x"), None).unwrap_err(),
            StoreError::NotFound(_)
        ));
        assert!(matches!(
            store.remove("nope").unwrap_err(),
            StoreError::NotFound(_)
        ));
    }

    #[test]
    fn remove_returns_the_deleted_record() {
        let mut store = VibeStore::with_defaults();
        let removed = store.remove("Happy").unwrap();
        assert_eq!(removed.mood, "happy");
        assert!(!store.contains("happy"));
    }

    #[test]
    fn defaults_contain_the_stock_moods() {
        let store = VibeStore::with_defaults();
        assert_eq!(store.len(), 3);
        let tired = store.lookup("tired");
        assert_eq!(tired.vibe.emoji, "🥱");
        assert_eq!(tired.vibe.message, "Hydrate. Stretch. Then commit.");
    }
}
