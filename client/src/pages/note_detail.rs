//! Single-note page with view and edit modes.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::session_gate::Protected;
use crate::net::types::NoteForm;
use crate::state::notes::{CONTENT_MAX_CHARS, NoteEditorState, TITLE_MAX_CHARS, validate_note_form};
use crate::state::session::Session;
use crate::util::date::display_date_time;
use crate::util::route_policy::NOTES_PATH;

#[component]
pub fn NoteDetailPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let params = use_params_map();
    let navigate = use_navigate();

    let editor = RwSignal::new(NoteEditorState::default());
    let saving = RwSignal::new(false);

    let back_to_list = Callback::new(move |()| navigate(NOTES_PATH, NavigateOptions::default()));

    Effect::new(move || {
        if !session.is_authenticated() {
            return;
        }
        let Some(id) = params.with(|p| p.get("id")) else {
            back_to_list.run(());
            return;
        };
        spawn_fetch(id, editor, back_to_list);
    });

    let on_save = Callback::new(move |()| {
        if saving.get_untracked() {
            return;
        }
        let state = editor.get_untracked();
        let Some(note) = state.note else {
            return;
        };
        if let Err(errors) = validate_note_form(&state.draft) {
            editor.update(|e| e.error = errors.first().map(str::to_owned));
            return;
        }
        saving.set(true);
        spawn_save(note.id, state.draft, editor, saving);
    });

    let field = move |read: fn(&NoteEditorState) -> String| move || read(&editor.get());

    view! {
        <Protected>
            <Show
                when=move || editor.get().note.is_some()
                fallback=move || view! { <p class="gate-message">"Loading..."</p> }
            >
                <div class="note-page">
                    <header class="note-page__header">
                        <button class="btn note-page__back" aria-label="back" on:click=move |_| back_to_list.run(())>
                            "←"
                        </button>
                        <h1>{move || if editor.get().editing { "Edit Note" } else { "Note Details" }}</h1>
                    </header>
                    <section class="note-page__paper">
                        <Show
                            when=move || editor.get().editing
                            fallback=move || {
                                view! {
                                    <h2 class="note-page__title">
                                        {field(|e| e.note.as_ref().map(|n| n.title.clone()).unwrap_or_default())}
                                    </h2>
                                    <p class="note-page__content">
                                        {field(|e| e.note.as_ref().map(|n| n.content.clone()).unwrap_or_default())}
                                    </p>
                                    <p class="note-page__meta">
                                        "Created: "
                                        {field(|e| {
                                            e.note.as_ref().map(|n| display_date_time(&n.created_at)).unwrap_or_default()
                                        })}
                                    </p>
                                    <div class="note-page__actions">
                                        <button
                                            class="btn btn--primary"
                                            on:click=move |_| editor.update(NoteEditorState::start_editing)
                                        >
                                            "Edit"
                                        </button>
                                    </div>
                                }
                            }
                        >
                            <Show when=move || editor.get().error.is_some()>
                                <p class="note-page__error" role="alert">
                                    {move || editor.get().error.unwrap_or_default()}
                                </p>
                            </Show>
                            <label class="note-page__label">
                                "Title"
                                <input
                                    class="note-page__input"
                                    type="text"
                                    maxlength=TITLE_MAX_CHARS.to_string()
                                    prop:value=field(|e| e.draft.title.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        editor.update(|e| e.set_title(&value));
                                    }
                                />
                            </label>
                            <label class="note-page__label">
                                "Content"
                                <textarea
                                    class="note-page__textarea"
                                    rows="6"
                                    maxlength=CONTENT_MAX_CHARS.to_string()
                                    prop:value=field(|e| e.draft.content.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        editor.update(|e| e.set_content(&value));
                                    }
                                ></textarea>
                            </label>
                            <div class="note-page__actions">
                                <button
                                    class="btn"
                                    on:click=move |_| {
                                        editor.update(|e| {
                                            e.editing = false;
                                            e.error = None;
                                        });
                                    }
                                >
                                    "Cancel"
                                </button>
                                <button class="btn btn--primary" disabled=move || saving.get() on:click=move |_| on_save.run(())>
                                    "Save"
                                </button>
                            </div>
                        </Show>
                    </section>
                </div>
            </Show>
        </Protected>
    }
}

fn spawn_fetch(id: String, editor: RwSignal<NoteEditorState>, back_to_list: Callback<()>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let api = crate::net::api::HttpApi::from_config();
        match crate::util::note_actions::load_note(&api, &id).await {
            Ok(note) => editor.update(|e| e.show(note)),
            Err(_) => back_to_list.run(()),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, editor, back_to_list);
    }
}

fn spawn_save(id: String, draft: NoteForm, editor: RwSignal<NoteEditorState>, saving: RwSignal<bool>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let api = crate::net::api::HttpApi::from_config();
        match crate::util::note_actions::save_note(&api, &id, &draft).await {
            Ok(note) => editor.update(|e| e.show(note)),
            Err(e) => {
                let message = e.user_message().to_owned();
                editor.update(|state| state.error = Some(message));
            }
        }
        saving.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, draft, editor);
        saving.set(false);
    }
}
