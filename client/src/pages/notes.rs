//! Notes list page with create and delete actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It fetches the list once the
//! session is authenticated, and every mutation refetches so the list mirrors
//! the server.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::note_card::NoteCard;
use crate::components::note_dialog::NoteDialog;
use crate::components::session_gate::Protected;
use crate::net::types::NoteForm;
use crate::state::notes::NotesState;
use crate::state::session::Session;
use crate::state::ui::UiState;
use crate::util::route_policy::HOME_PATH;

#[component]
pub fn NotesPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let notes = RwSignal::new(NotesState::default());
    let show_create = RwSignal::new(false);
    let new_note = RwSignal::new(NoteForm::default());
    let create_pending = RwSignal::new(false);

    let requested_list = RwSignal::new(false);
    Effect::new(move || {
        if !session.is_authenticated() {
            requested_list.set(false);
            return;
        }
        if requested_list.get_untracked() {
            return;
        }
        requested_list.set(true);
        spawn_refresh(notes);
    });

    let on_add = move |_| {
        new_note.set(NoteForm::default());
        show_create.set(true);
    };
    let on_cancel = Callback::new(move |()| show_create.set(false));
    let on_create = Callback::new(move |form: NoteForm| {
        create_pending.set(true);
        spawn_create(form, notes, show_create, new_note, create_pending);
    });
    let on_delete = Callback::new(move |id: String| spawn_delete(id, notes));

    // Clear the session before navigating so no protected view renders stale.
    let on_logout = Callback::new(move |()| {
        session.sign_out();
        navigate(HOME_PATH, NavigateOptions::default());
    });

    view! {
        <Protected>
            <div class="notes-page">
                <header class="notes-page__header toolbar">
                    <h1 class="notes-page__title">"My Notes"</h1>
                    <span class="toolbar__spacer"></span>
                    <button class="btn btn--primary" on:click=on_add>
                        "Add Note"
                    </button>
                    <button
                        class="btn toolbar__dark-toggle"
                        on:click=move |_| {
                            let next = crate::util::dark_mode::toggle(ui.get_untracked().dark_mode);
                            ui.update(|u| u.dark_mode = next);
                        }
                        title="Toggle dark mode"
                    >
                        {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                    </button>
                    <button class="btn btn--secondary" on:click=move |_| on_logout.run(())>
                        "Logout"
                    </button>
                </header>

                <Show when=move || notes.get().error.is_some()>
                    <p class="notes-page__error" role="alert">
                        {move || notes.get().error.unwrap_or_default()}
                    </p>
                </Show>
                <Show
                    when=move || !notes.get().loading
                    fallback=move || view! { <p class="notes-page__status">"Loading notes..."</p> }
                >
                    <Show
                        when=move || !notes.get().items.is_empty()
                        fallback=move || view! { <p class="notes-page__status">"No notes yet."</p> }
                    >
                        <ul class="notes-page__list">
                            {move || {
                                notes
                                    .get()
                                    .items
                                    .into_iter()
                                    .map(|note| {
                                        view! {
                                            <NoteCard
                                                id=note.id
                                                title=note.title
                                                created_at=note.created_at
                                                on_delete=on_delete
                                            />
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </Show>
                </Show>

                <Show when=move || show_create.get()>
                    <NoteDialog form=new_note busy=create_pending on_cancel=on_cancel on_submit=on_create/>
                </Show>
            </div>
        </Protected>
    }
}

fn spawn_refresh(notes: RwSignal<NotesState>) {
    notes.update(|s| s.loading = true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let api = crate::net::api::HttpApi::from_config();
        match crate::util::note_actions::load_notes(&api).await {
            Ok(items) => notes.update(|s| s.loaded(items)),
            Err(e) => notes.update(|s| s.failed(e.user_message())),
        }
    });
}

fn spawn_create(
    form: NoteForm,
    notes: RwSignal<NotesState>,
    show_create: RwSignal<bool>,
    new_note: RwSignal<NoteForm>,
    pending: RwSignal<bool>,
) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let api = crate::net::api::HttpApi::from_config();
        match crate::util::note_actions::create_note(&api, &form).await {
            Ok(created) => {
                // The note exists now; a failed refetch must not leave the
                // dialog open for a duplicate submit.
                show_create.set(false);
                new_note.set(NoteForm::default());
                match created.list {
                    Ok(items) => notes.update(|s| s.loaded(items)),
                    Err(e) => notes.update(|s| s.failed(e.user_message())),
                }
            }
            Err(e) => notes.update(|s| s.failed(e.user_message())),
        }
        pending.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (form, notes, show_create, new_note);
        pending.set(false);
    }
}

fn spawn_delete(id: String, notes: RwSignal<NotesState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let api = crate::net::api::HttpApi::from_config();
        match crate::util::note_actions::delete_note(&api, &id).await {
            Ok(items) => notes.update(|s| s.loaded(items)),
            Err(e) => notes.update(|s| s.failed(e.user_message())),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, notes);
    }
}
