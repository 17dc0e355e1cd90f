use crate::components::ui::{Button, ButtonVariant, Input, Textarea};
use crate::state::AppContext;
use crate::util::format_local_datetime;
use icons::Save;
use leptos::prelude::*;

/// Editor pane for the current draft.
#[component]
pub fn NoteEditor() -> impl IntoView {
    let app = expect_context::<AppContext>().0;
    let store = app.store;

    let has_draft = move || store.with(|s| s.draft().is_some());
    let draft_title = Signal::derive(move || {
        store.with(|s| s.draft().map(|d| d.title.clone()).unwrap_or_default())
    });
    let draft_content = Signal::derive(move || {
        store.with(|s| s.draft().map(|d| d.content.clone()).unwrap_or_default())
    });
    let dirty = move || store.with(|s| s.is_dirty());
    // Status is hidden while there are unsaved edits.
    let status = move || {
        store.with(|s| {
            if s.is_dirty() {
                None
            } else {
                s.status().map(|st| st.to_string())
            }
        })
    };
    let timestamps = move || store.with(|s| s.draft().map(|d| (d.created_at, d.updated_at)));

    // Cmd/Ctrl+S saves while focus is anywhere inside the editor.
    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if (ev.ctrl_key() || ev.meta_key()) && ev.key().eq_ignore_ascii_case("s") {
            ev.prevent_default();
            app.save();
        }
    };

    view! {
        <Show
            when=has_draft
            fallback=|| view! {
                <section class="flex flex-1 items-center justify-center" aria-label="Note editor">
                    <div class="text-sm text-muted-foreground">
                        "Select a note from the list or create a new one."
                    </div>
                </section>
            }
        >
            <section class="flex flex-1 flex-col gap-3 p-4" aria-label="Note editor" on:keydown=on_keydown>
                <div class="flex items-center gap-3">
                    <Input
                        class="text-lg font-semibold"
                        placeholder="Note title"
                        aria_label="Note title"
                        value=draft_title
                        on_input=Callback::new(move |v: String| app.update_title(&v))
                    />
                    <div class="flex shrink-0 items-center gap-2">
                        <Show when=dirty fallback=|| ()>
                            <span class="text-xs text-warning">"Unsaved"</span>
                        </Show>
                        {move || status().map(|st| view! {
                            <span class="text-xs text-muted-foreground">{st}</span>
                        })}
                        <Button variant=ButtonVariant::Accent on:click=move |_| app.save()>
                            <Save />
                            "Save"
                        </Button>
                    </div>
                </div>

                <Textarea
                    class="flex-1"
                    placeholder="Start typing your note..."
                    aria_label="Note content"
                    value=draft_content
                    on_input=Callback::new(move |v: String| app.update_content(&v))
                />

                <div class="flex justify-between text-[11px] text-muted-foreground">
                    {move || timestamps().map(|(created, updated)| view! {
                        <span>{format!("Created: {}", format_local_datetime(created))}</span>
                        <span>{format!("Last Updated: {}", format_local_datetime(updated))}</span>
                    })}
                </div>
            </section>
        </Show>
    }
}
