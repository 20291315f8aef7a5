//! Login page.

use leptos::prelude::*;

use crate::components::auth_form::{AuthForm, AuthMode};
use crate::components::session_gate::PublicOnly;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <PublicOnly>
            <AuthForm mode=AuthMode::Login/>
        </PublicOnly>
    }
}
