use crate::config::EnvConfig;
use crate::models::Note;
use crate::storage::{LocalStorage, NoteRepository};
use crate::store::{ConfirmDelete, NoteStore};
use leptos::prelude::*;

pub(crate) type BrowserNoteStore = NoteStore<LocalStorage>;

#[derive(Clone, Copy)]
pub(crate) struct AppState {
    /// Single owner of the notes; every UI mutation goes through `update`,
    /// which re-renders whatever reads it.
    pub store: RwSignal<BrowserNoteStore>,
}

impl AppState {
    pub fn new() -> Self {
        let config = EnvConfig::new();
        let repo = NoteRepository::new(LocalStorage, config.storage_key);

        Self {
            store: RwSignal::new(NoteStore::open(repo)),
        }
    }

    pub fn create(&self) {
        self.store.update(|s| {
            s.create();
        });
    }

    pub fn select(&self, id: &str) {
        self.store.update(|s| s.select(id));
    }

    pub fn update_title(&self, value: &str) {
        self.store.update(|s| s.update_draft_title(value));
    }

    pub fn update_content(&self, value: &str) {
        self.store.update(|s| s.update_draft_content(value));
    }

    pub fn save(&self) {
        self.store.update(|s| s.save());
    }

    pub fn delete(&self, id: &str) {
        self.store.update(|s| {
            s.delete(id, &BrowserConfirm);
        });
    }

    pub fn set_filter(&self, value: &str) {
        self.store.update(|s| s.set_filter(value));
    }

    pub fn filtered_notes(&self) -> Vec<Note> {
        self.store
            .with(|s| s.filtered_notes().into_iter().cloned().collect())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub(crate) struct AppContext(pub AppState);

/// Blocking `window.confirm` prompt. Without a window the delete proceeds.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrowserConfirm;

impl ConfirmDelete for BrowserConfirm {
    fn confirm_delete(&self, _note: &Note) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message("Delete this note?").ok())
            .unwrap_or(true)
    }
}
