use crate::components::ui::{Button, ButtonSize, ButtonVariant, Input};
use crate::state::AppContext;
use crate::util::format_local_datetime;
use icons::{Plus, Trash2};
use leptos::prelude::*;

/// Sidebar: search box, "+ New" and the (filtered) note list.
#[component]
pub fn NoteList() -> impl IntoView {
    let app = expect_context::<AppContext>().0;
    let store = app.store;

    let filter = Signal::derive(move || store.with(|s| s.filter().to_string()));
    // Draft keystrokes change the store but not these, so the list stays put.
    let visible_notes = Memo::new(move |_| app.filtered_notes());
    let selected_id = Memo::new(move |_| store.with(|s| s.selected_id().map(str::to_string)));

    view! {
        <aside class="flex w-80 shrink-0 flex-col border-r border-border bg-surface" aria-label="Notes list">
            <div class="flex items-center gap-2 border-b border-border p-3">
                <Input
                    r#type="search"
                    class="h-8 text-sm"
                    placeholder="Search notes…"
                    aria_label="Search notes"
                    value=filter
                    on_input=Callback::new(move |v: String| app.set_filter(&v))
                />
                <Button size=ButtonSize::Sm on:click=move |_| app.create()>
                    <Plus />
                    "New"
                </Button>
            </div>

            <ul class="flex-1 overflow-y-auto" role="list">
                {move || {
                    let notes = visible_notes.get();
                    if notes.is_empty() {
                        return view! {
                            <li class="px-4 py-8 text-center text-xs text-muted-foreground">
                                "No notes yet. Click \"New\" to create your first note."
                            </li>
                        }
                        .into_any();
                    }

                    let selected = selected_id.get();
                    notes
                        .into_iter()
                        .map(|note| {
                            let is_selected = selected.as_deref() == Some(note.id.as_str());
                            let item_class = if is_selected {
                                "cursor-pointer border-b border-border bg-accent px-4 py-3"
                            } else {
                                "cursor-pointer border-b border-border px-4 py-3 hover:bg-accent/50"
                            };
                            let id_for_select = note.id.clone();
                            let id_for_delete = note.id.clone();
                            let title = note.display_title().to_string();
                            let delete_label = format!("Delete note {title}");
                            let snippet = note.snippet().unwrap_or_else(|| "No content".to_string());

                            view! {
                                <li
                                    role="listitem"
                                    class=item_class
                                    on:click=move |_| app.select(&id_for_select)
                                >
                                    <div class="flex items-center justify-between gap-2">
                                        <div class="truncate text-sm font-medium" title=title.clone()>
                                            {title.clone()}
                                        </div>
                                        <Button
                                            variant=ButtonVariant::Ghost
                                            size=ButtonSize::Icon
                                            attr:title="Delete note"
                                            attr:aria-label=delete_label
                                            on:click=move |ev: web_sys::MouseEvent| {
                                                ev.stop_propagation();
                                                app.delete(&id_for_delete);
                                            }
                                        >
                                            <Trash2 />
                                        </Button>
                                    </div>
                                    <div class="truncate text-xs text-muted-foreground" title=note.content.clone()>
                                        {snippet}
                                    </div>
                                    <div class="mt-1 text-[11px] text-muted-foreground">
                                        {format_local_datetime(note.updated_at)}
                                    </div>
                                </li>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </ul>
        </aside>
    }
}
