//! Modal dialog for creating a note.

use leptos::prelude::*;

use crate::net::types::NoteForm;
use crate::state::notes::{CONTENT_MAX_CHARS, NoteFormErrors, TITLE_MAX_CHARS, clamp_chars, validate_note_form};

/// Create-note dialog. Validation runs before `on_submit` is called, with the
/// same rules the detail editor applies.
#[component]
pub fn NoteDialog(
    form: RwSignal<NoteForm>,
    #[prop(into)] busy: Signal<bool>,
    on_cancel: Callback<()>,
    on_submit: Callback<NoteForm>,
) -> impl IntoView {
    let errors = RwSignal::new(NoteFormErrors::default());

    let submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        let value = form.get_untracked();
        match validate_note_form(&value) {
            Ok(()) => {
                errors.set(NoteFormErrors::default());
                on_submit.run(value);
            }
            Err(found) => errors.set(found),
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" role="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create New Note"</h2>
                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        type="text"
                        maxlength=TITLE_MAX_CHARS.to_string()
                        autofocus=true
                        prop:value=move || form.get().title
                        on:input=move |ev| {
                            let title = clamp_chars(&event_target_value(&ev), TITLE_MAX_CHARS);
                            form.update(|f| f.title = title);
                            errors.update(|e| e.title = None);
                        }
                    />
                </label>
                <Show when=move || errors.get().title.is_some()>
                    <p class="dialog__field-error">{move || errors.get().title.unwrap_or_default()}</p>
                </Show>
                <label class="dialog__label">
                    "Content"
                    <textarea
                        class="dialog__textarea"
                        rows="4"
                        maxlength=CONTENT_MAX_CHARS.to_string()
                        prop:value=move || form.get().content
                        on:input=move |ev| {
                            let content = clamp_chars(&event_target_value(&ev), CONTENT_MAX_CHARS);
                            form.update(|f| f.content = content);
                            errors.update(|e| e.content = None);
                        }
                    ></textarea>
                </label>
                <Show when=move || errors.get().content.is_some()>
                    <p class="dialog__field-error">{move || errors.get().content.unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" disabled=move || busy.get() on:click=move |_| submit.run(())>
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}
