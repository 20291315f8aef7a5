//! Render-time session gates.
//!
//! DESIGN
//! ======
//! The router gate in `util::auth` navigates after the fact; these wrappers
//! make sure a page whose access rule is currently violated is never rendered
//! in the meantime.

use leptos::prelude::*;

use crate::state::session::Session;

/// Renders children only while the session is authenticated.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<Session>();

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=move || {
                view! {
                    <p class="gate-message">
                        {move || if session.is_checked() { "Redirecting to login..." } else { "Loading..." }}
                    </p>
                }
            }
        >
            {children()}
        </Show>
    }
}

/// Renders children only while the session is not authenticated.
#[component]
pub fn PublicOnly(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<Session>();

    view! {
        <Show when=move || !session.is_authenticated()>
            {children()}
        </Show>
    }
}
