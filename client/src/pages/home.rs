//! Public landing page.

use leptos::prelude::*;

use crate::components::session_gate::PublicOnly;
use crate::util::route_policy::LOGIN_PATH;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PublicOnly>
            <section class="landing">
                <h1 class="landing__headline">
                    "Your Notes, "
                    <span class="landing__accent">"Organized"</span>
                    " and "
                    <span class="landing__accent">"Secure"</span>
                </h1>
                <p class="landing__lead">
                    "A note-taking application that helps you capture ideas, organize thoughts, and access your notes anywhere, anytime."
                </p>
                <a class="btn btn--primary landing__cta" href=LOGIN_PATH>
                    "Get Started"
                </a>
            </section>
        </PublicOnly>
    }
}
