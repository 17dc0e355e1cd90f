use crate::models::{dedup_by_id, sort_by_updated_desc, Note};
use crate::storage::{NoteRepository, StorageBackend};
use crate::util::{generate_note_id, now_ms};
use leptos::logging::{log, warn};

/// Last completed mutation, shown next to the editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum Status {
    Created,
    Saved,
    Deleted,
}

/// Asked before a note is removed.
pub trait ConfirmDelete {
    fn confirm_delete(&self, note: &Note) -> bool;
}

/// Headless default: every delete goes through.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysConfirm;

impl ConfirmDelete for AlwaysConfirm {
    fn confirm_delete(&self, _note: &Note) -> bool {
        true
    }
}

impl<F> ConfirmDelete for F
where
    F: Fn(&Note) -> bool,
{
    fn confirm_delete(&self, note: &Note) -> bool {
        self(note)
    }
}

/// The note collection plus the editing session around it.
///
/// Every mutating operation that changes `notes` writes the full list back
/// through the repository before returning.
#[derive(Debug)]
pub struct NoteStore<B> {
    repo: NoteRepository<B>,
    notes: Vec<Note>,
    selected_id: Option<String>,
    draft: Option<Note>,
    dirty: bool,
    status: Option<Status>,
    filter: String,
    clock: fn() -> i64,
    next_id: fn(i64) -> String,
}

impl<B: StorageBackend> NoteStore<B> {
    /// Loads stored notes, newest first, and selects the first one.
    pub fn open(repo: NoteRepository<B>) -> Self {
        Self::with_clock(repo, now_ms)
    }

    pub fn with_clock(repo: NoteRepository<B>, clock: fn() -> i64) -> Self {
        let mut notes = repo.load();
        sort_by_updated_desc(&mut notes);
        let dropped = dedup_by_id(&mut notes);
        if dropped > 0 {
            warn!("notes: dropped {dropped} stored notes with duplicate ids");
        }
        log!("notes: loaded {} notes from `{}`", notes.len(), repo.key());

        let mut store = Self {
            repo,
            notes,
            selected_id: None,
            draft: None,
            dirty: false,
            status: None,
            filter: String::new(),
            clock,
            next_id: generate_note_id,
        };
        if let Some(first) = store.notes.first().cloned() {
            store.selected_id = Some(first.id.clone());
            store.draft = Some(first);
        }
        store
    }

    /// Replaces the id generator used by [`NoteStore::create`].
    pub fn with_id_generator(mut self, next_id: fn(i64) -> String) -> Self {
        self.next_id = next_id;
        self
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn draft(&self) -> Option<&Note> {
        self.draft.as_ref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn status(&self) -> Option<Status> {
        self.status
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn repository(&self) -> &NoteRepository<B> {
        &self.repo
    }

    fn persist(&self) {
        self.repo.save(&self.notes);
    }

    fn fresh_id(&self, now: i64) -> String {
        loop {
            let id = (self.next_id)(now);
            if !self.notes.iter().any(|n| n.id == id) {
                return id;
            }
        }
    }

    fn select_first(&mut self) {
        match self.notes.first() {
            Some(first) => {
                self.selected_id = Some(first.id.clone());
                self.draft = Some(first.clone());
            }
            None => {
                self.selected_id = None;
                self.draft = None;
            }
        }
        self.dirty = false;
    }

    /// Adds an empty note at the top and selects it.
    pub fn create(&mut self) -> &Note {
        let now = (self.clock)();
        let note = Note::new(self.fresh_id(now), now);

        self.selected_id = Some(note.id.clone());
        self.draft = Some(note.clone());
        self.notes.insert(0, note);
        self.dirty = false;
        self.status = Some(Status::Created);
        self.persist();

        &self.notes[0]
    }

    /// Selects `id`, replacing the draft. Unsaved edits are dropped.
    pub fn select(&mut self, id: &str) {
        if self.dirty {
            if let Some(d) = &self.draft {
                log!("notes: discarding unsaved edits to {}", d.id);
            }
        }

        self.selected_id = Some(id.to_string());
        self.draft = self.notes.iter().find(|n| n.id == id).cloned();
        self.dirty = false;
        self.status = None;
    }

    pub fn update_draft_title(&mut self, value: &str) {
        let Some(draft) = self.draft.as_mut() else {
            return;
        };
        draft.title = value.to_string();
        self.dirty = true;
        self.status = None;
    }

    pub fn update_draft_content(&mut self, value: &str) {
        let Some(draft) = self.draft.as_mut() else {
            return;
        };
        draft.content = value.to_string();
        self.dirty = true;
        self.status = None;
    }

    /// Commits the draft, moving the note to its sorted position.
    pub fn save(&mut self) {
        let Some(draft) = self.draft.as_ref() else {
            return;
        };

        let mut saved = draft.clone();
        saved.updated_at = (self.clock)().max(saved.created_at);

        match self.notes.iter_mut().find(|n| n.id == saved.id) {
            Some(slot) => *slot = saved.clone(),
            None => self.notes.insert(0, saved.clone()),
        }
        sort_by_updated_desc(&mut self.notes);

        self.selected_id = Some(saved.id.clone());
        self.draft = Some(saved);
        self.dirty = false;
        self.status = Some(Status::Saved);
        self.persist();
    }

    /// Removes `id` once `confirm` agrees. Returns whether a note was removed.
    ///
    /// Unknown ids are a no-op and never prompt.
    pub fn delete(&mut self, id: &str, confirm: &impl ConfirmDelete) -> bool {
        let Some(idx) = self.notes.iter().position(|n| n.id == id) else {
            return false;
        };
        if !confirm.confirm_delete(&self.notes[idx]) {
            log!("notes: delete of {id} cancelled");
            return false;
        }

        self.notes.remove(idx);
        if self.selected_id.as_deref() == Some(id) {
            self.select_first();
        }
        self.status = Some(Status::Deleted);
        self.persist();
        true
    }

    pub fn set_filter(&mut self, value: &str) {
        self.filter = value.to_string();
    }

    /// Notes matching the filter, in collection order.
    pub fn filtered_notes(&self) -> Vec<&Note> {
        if self.filter.trim().is_empty() {
            return self.notes.iter().collect();
        }
        let needle = self.filter.to_lowercase();
        self.notes
            .iter()
            .filter(|n| n.matches_lowercase(&needle))
            .collect()
    }
}
