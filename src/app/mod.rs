use crate::components::{NoteEditor, NoteList};
use crate::state::{AppContext, AppState};
use leptos::prelude::*;

const APP_TITLE: &str = "Simple Notes";

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext(AppState::new()));
    document().set_title(APP_TITLE);

    view! {
        <div class="flex h-screen bg-background text-foreground">
            <NoteList />
            <NoteEditor />
        </div>
    }
}
