//! List row for a single note on the notes page.

use leptos::prelude::*;

use crate::util::date::display_date;
use crate::util::route_policy::note_path;

/// A clickable note row with a delete affordance.
#[component]
pub fn NoteCard(id: String, title: String, created_at: String, on_delete: Callback<String>) -> impl IntoView {
    let href = note_path(&id);
    let on_delete_click = Callback::new(move |()| on_delete.run(id.clone()));

    view! {
        <li class="note-card">
            <a class="note-card__link" href=href>
                <span class="note-card__title">{title}</span>
                <span class="note-card__date">{display_date(&created_at)}</span>
            </a>
            <button
                class="note-card__delete"
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.prevent_default();
                    ev.stop_propagation();
                    on_delete_click.run(());
                }
                title="Delete note"
                aria-label="delete"
            >
                "✕"
            </button>
        </li>
    }
}
