use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Shown in place of an empty title.
pub const UNTITLED: &str = "Untitled";

const SNIPPET_CHARS: usize = 80;

/// A single note as persisted in local storage.
///
/// Field names follow the stored JSON (`createdAt`/`updatedAt`, ms since epoch).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Note {
    pub fn new(id: String, now: i64) -> Self {
        Self {
            id,
            title: String::new(),
            content: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            UNTITLED
        } else {
            &self.title
        }
    }

    /// First 80 characters of the content, or `None` when there is no content.
    pub fn snippet(&self) -> Option<String> {
        if self.content.is_empty() {
            return None;
        }
        Some(self.content.chars().take(SNIPPET_CHARS).collect())
    }

    /// Case-insensitive substring match against title and content.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.content.to_lowercase().contains(needle)
    }
}

/// Sorts notes so the most recently updated comes first.
pub(crate) fn sort_by_updated_desc(notes: &mut [Note]) {
    notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
}

/// Drops repeated ids, keeping the first occurrence. Returns how many were dropped.
///
/// Run after [`sort_by_updated_desc`] so the newest copy of each id survives.
pub(crate) fn dedup_by_id(notes: &mut Vec<Note>) -> usize {
    let before = notes.len();
    let mut seen = HashSet::new();
    notes.retain(|n| seen.insert(n.id.clone()));
    before - notes.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: &str, updated_at: i64) -> Note {
        Note {
            id: id.to_string(),
            title: String::new(),
            content: String::new(),
            created_at: 0,
            updated_at,
        }
    }

    #[test]
    fn test_note_json_uses_camel_case_timestamps() {
        let n = Note {
            id: "A1".to_string(),
            title: "t".to_string(),
            content: "c".to_string(),
            created_at: 1,
            updated_at: 2,
        };
        let v = serde_json::to_value(&n).expect("should serialize");
        assert_eq!(v["id"], "A1");
        assert_eq!(v["createdAt"], 1);
        assert_eq!(v["updatedAt"], 2);
        assert!(v.get("created_at").is_none());
    }

    #[test]
    fn test_note_missing_text_fields_default_to_empty() {
        let json = r#"{"id":"X","createdAt":5,"updatedAt":6}"#;
        let n: Note = serde_json::from_str(json).expect("note should parse");
        assert_eq!(n.title, "");
        assert_eq!(n.content, "");
    }

    #[test]
    fn test_display_title_falls_back_to_untitled() {
        let mut n = Note::new("a".to_string(), 10);
        assert_eq!(n.display_title(), "Untitled");
        n.title = "Groceries".to_string();
        assert_eq!(n.display_title(), "Groceries");
    }

    #[test]
    fn test_snippet_truncates_on_char_boundary() {
        let mut n = Note::new("a".to_string(), 10);
        assert_eq!(n.snippet(), None);

        n.content = "é".repeat(100);
        let s = n.snippet().expect("non-empty content has a snippet");
        assert_eq!(s.chars().count(), 80);
    }

    #[test]
    fn test_matches_lowercase_checks_title_and_content() {
        let mut n = Note::new("a".to_string(), 10);
        n.title = "Shopping List".to_string();
        n.content = "Buy MILK".to_string();
        assert!(n.matches_lowercase("shop"));
        assert!(n.matches_lowercase("milk"));
        assert!(!n.matches_lowercase("xyz"));
    }

    #[test]
    fn test_dedup_by_id_keeps_newest_after_sort() {
        let mut notes = vec![note("a", 1), note("b", 4), note("a", 7), note("a", 3)];
        sort_by_updated_desc(&mut notes);
        assert_eq!(dedup_by_id(&mut notes), 2);
        let kept: Vec<_> = notes.iter().map(|n| (n.id.as_str(), n.updated_at)).collect();
        assert_eq!(kept, vec![("a", 7), ("b", 4)]);
    }

    #[test]
    fn test_sort_by_updated_desc() {
        let mut notes = vec![note("a", 1), note("b", 3), note("c", 2)];
        sort_by_updated_desc(&mut notes);
        let ids: Vec<_> = notes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }
}
