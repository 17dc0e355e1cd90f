use crate::models::Note;
use leptos::logging::warn;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;
use thiserror::Error;

pub(crate) const DEFAULT_NOTES_KEY: &str = "simple_notes";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to serialize value for `{key}`")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("stored value under `{key}` is not valid")]
    Parse {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A string-keyed slot store, shaped after `window.localStorage`.
pub trait StorageBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// The browser's `window.localStorage`.
///
/// The handle is looked up on every call so the adapter stays `Send + Sync`
/// and can live inside a signal.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl StorageBackend for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }
}

/// In-process slot store for headless use and tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::new();
        if let Ok(mut items) = storage.items.lock() {
            items.insert(key.to_string(), value.to_string());
        }
        storage
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self.items.lock().map_err(|_| StorageError::Unavailable)?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().map_err(|_| StorageError::Unavailable)?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub(crate) fn load_json_from_storage<B, T>(backend: &B, key: &str) -> Result<Option<T>, StorageError>
where
    B: StorageBackend + ?Sized,
    T: DeserializeOwned,
{
    let Some(json) = backend.get_item(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&json)
        .map(Some)
        .map_err(|source| StorageError::Parse {
            key: key.to_string(),
            source,
        })
}

pub(crate) fn save_json_to_storage<B, T>(backend: &B, key: &str, value: &T) -> Result<(), StorageError>
where
    B: StorageBackend + ?Sized,
    T: Serialize + ?Sized,
{
    let json = serde_json::to_string(value).map_err(|source| StorageError::Serialize {
        key: key.to_string(),
        source,
    })?;
    backend.set_item(key, &json)
}

/// Persistence adapter: the whole note list as one JSON array under one key.
#[derive(Debug)]
pub struct NoteRepository<B> {
    backend: B,
    key: String,
}

impl<B: StorageBackend> NoteRepository<B> {
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Fails only when the slot is unreadable or not a JSON array.
    /// Elements that are not valid notes are skipped.
    pub fn try_load(&self) -> Result<Vec<Note>, StorageError> {
        let Some(items) =
            load_json_from_storage::<B, Vec<serde_json::Value>>(&self.backend, &self.key)?
        else {
            return Ok(Vec::new());
        };

        let total = items.len();
        let notes: Vec<Note> = items
            .into_iter()
            .enumerate()
            .filter_map(|(idx, item)| match serde_json::from_value(item) {
                Ok(note) => Some(note),
                Err(e) => {
                    warn!("notes: skipping stored entry {idx} in `{}`: {e}", self.key);
                    None
                }
            })
            .collect();
        if notes.len() < total {
            warn!("notes: kept {} of {total} stored entries", notes.len());
        }
        Ok(notes)
    }

    /// Stored notes, or an empty list if the slot is missing or unreadable.
    pub fn load(&self) -> Vec<Note> {
        self.try_load().unwrap_or_else(|e| {
            warn!("notes: ignoring stored notes: {e}");
            Vec::new()
        })
    }

    pub fn try_save(&self, notes: &[Note]) -> Result<(), StorageError> {
        save_json_to_storage(&self.backend, &self.key, notes)
    }

    /// Fire-and-forget write; failures are logged and dropped.
    pub fn save(&self, notes: &[Note]) {
        if let Err(e) = self.try_save(notes) {
            warn!("notes: failed to persist {} notes: {e}", notes.len());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct BrokenStorage;

    impl StorageBackend for BrokenStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn set_item(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                reason: "QuotaExceededError".to_string(),
            })
        }
    }

    fn note(id: &str, title: &str, updated_at: i64) -> Note {
        Note {
            id: id.to_string(),
            title: title.to_string(),
            content: format!("body of {id}"),
            created_at: 1,
            updated_at,
        }
    }

    #[test]
    fn test_load_missing_key_is_empty() {
        let repo = NoteRepository::new(MemoryStorage::new(), "k");
        assert!(repo.load().is_empty());
        assert!(repo.try_load().expect("missing key is not an error").is_empty());
    }

    #[test]
    fn test_load_corrupted_payload_is_empty() {
        for payload in ["not json", "{\"id\":\"a\"}", "42", "[1, 2"] {
            let repo = NoteRepository::new(MemoryStorage::with_item("k", payload), "k");
            assert!(repo.load().is_empty(), "payload {payload:?} should load as empty");
            assert!(matches!(repo.try_load(), Err(StorageError::Parse { .. })));
        }
    }

    #[test]
    fn test_load_skips_invalid_entries_and_keeps_valid_ones() {
        let payload = r#"[
            {"id":"good","title":"Keep me","content":"","createdAt":1,"updatedAt":2},
            {"id":"legacy","title":null,"content":"","createdAt":1,"updatedAt":2},
            {"title":"no id"},
            {"id":"no-created","updatedAt":3},
            "stray string",
            {"id":"also-good","createdAt":4,"updatedAt":5}
        ]"#;
        let repo = NoteRepository::new(MemoryStorage::with_item("k", payload), "k");

        let loaded = repo.try_load().expect("an array payload is not a parse failure");
        let ids: Vec<_> = loaded.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["good", "also-good"]);
        assert_eq!(loaded[0].title, "Keep me");
    }

    #[test]
    fn test_load_array_of_only_invalid_entries_is_empty() {
        let repo = NoteRepository::new(MemoryStorage::with_item("k", "[{\"title\":\"no id\"}]"), "k");
        assert!(repo.try_load().expect("still an array").is_empty());
    }

    #[test]
    fn test_load_unavailable_storage_is_empty() {
        let repo = NoteRepository::new(BrokenStorage, "k");
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_save_failure_is_swallowed() {
        let repo = NoteRepository::new(BrokenStorage, "k");
        repo.save(&[note("a", "A", 1)]);
        assert!(matches!(
            repo.try_save(&[note("a", "A", 1)]),
            Err(StorageError::Write { .. })
        ));
    }

    #[test]
    fn test_save_then_load_preserves_notes() {
        let repo = NoteRepository::new(MemoryStorage::new(), "k");
        let notes = vec![note("a", "Alpha", 3), note("b", "", 2), note("c", "Gamma", 5)];
        repo.save(&notes);

        let loaded = repo.load();
        let expected: HashSet<_> = notes.iter().map(|n| n.id.clone()).collect();
        let got: HashSet<_> = loaded.iter().map(|n| n.id.clone()).collect();
        assert_eq!(got, expected);
        for n in &notes {
            assert!(loaded.contains(n));
        }
    }

    #[test]
    fn test_persisted_format_is_json_array() {
        let repo = NoteRepository::new(MemoryStorage::new(), "k");
        repo.save(&[note("a", "Alpha", 3)]);
        let raw = repo
            .backend()
            .get_item("k")
            .expect("memory storage reads")
            .expect("value was written");
        let v: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
        assert!(v.is_array());
        assert_eq!(v[0]["id"], "a");
        assert_eq!(v[0]["updatedAt"], 3);
    }
}
