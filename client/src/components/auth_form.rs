//! Username/password form shared by the login and register pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! On success the issued token goes into the session (store first, then the
//! flag) and the user lands on the notes list. Failures stay on the form with
//! a generic message so the page never reveals which field was wrong.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::Credentials;
use crate::state::session::Session;
use crate::util::route_policy::{LOGIN_PATH, REGISTER_PATH};

pub const USERNAME_REQUIRED: &str = "Username is required";
pub const PASSWORD_REQUIRED: &str = "Password is required";

/// Which account operation the form performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
        }
    }

    pub fn switch_prompt(self) -> &'static str {
        match self {
            Self::Login => "Don't have an account?",
            Self::Register => "Already have an account?",
        }
    }

    pub fn switch_label(self) -> &'static str {
        match self {
            Self::Login => "Register here",
            Self::Register => "Login here",
        }
    }

    pub fn switch_href(self) -> &'static str {
        match self {
            Self::Login => REGISTER_PATH,
            Self::Register => LOGIN_PATH,
        }
    }
}

/// Inline messages for the two fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CredentialErrors {
    pub username: Option<&'static str>,
    pub password: Option<&'static str>,
}

/// Require both fields. A whitespace-only username counts as blank; both
/// values are sent exactly as typed.
///
/// # Errors
///
/// Returns the per-field messages when either field is blank.
pub fn validate_credentials(username: &str, password: &str) -> Result<Credentials, CredentialErrors> {
    let errors = CredentialErrors {
        username: username.trim().is_empty().then_some(USERNAME_REQUIRED),
        password: password.is_empty().then_some(PASSWORD_REQUIRED),
    };
    if errors == CredentialErrors::default() {
        Ok(Credentials { username: username.to_owned(), password: password.to_owned() })
    } else {
        Err(errors)
    }
}

#[component]
pub fn AuthForm(mode: AuthMode) -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let field_errors = RwSignal::new(CredentialErrors::default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match validate_credentials(&username.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };
        field_errors.set(CredentialErrors::default());
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            use crate::net::api::{AuthApi, HttpApi};
            use crate::util::route_policy::NOTES_PATH;

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let api = HttpApi::from_config();
                let result = match mode {
                    AuthMode::Login => api.login(&credentials).await,
                    AuthMode::Register => api.register(&credentials).await,
                };
                match result {
                    Ok(token) => {
                        session.sign_in(&token);
                        navigate(NOTES_PATH, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        leptos::logging::warn!("{} failed: {e}", mode.title());
                        error.set(Some(e.user_message().to_owned()));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, &navigate, session);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">{mode.title()}</h1>
                <Show when=move || error.get().is_some()>
                    <p class="auth-card__error" role="alert">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Username"
                        <input
                            class="auth-form__input"
                            type="text"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| {
                                username.set(event_target_value(&ev));
                                field_errors.update(|e| e.username = None);
                            }
                        />
                    </label>
                    <Show when=move || field_errors.get().username.is_some()>
                        <p class="auth-form__field-error">
                            {move || field_errors.get().username.unwrap_or_default()}
                        </p>
                    </Show>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            autocomplete=match mode {
                                AuthMode::Login => "current-password",
                                AuthMode::Register => "new-password",
                            }
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                password.set(event_target_value(&ev));
                                field_errors.update(|e| e.password = None);
                            }
                        />
                    </label>
                    <Show when=move || field_errors.get().password.is_some()>
                        <p class="auth-form__field-error">
                            {move || field_errors.get().password.unwrap_or_default()}
                        </p>
                    </Show>
                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {mode.title()}
                    </button>
                </form>
                <p class="auth-card__switch">
                    {mode.switch_prompt()}
                    " "
                    <a href=mode.switch_href()>{mode.switch_label()}</a>
                </p>
            </div>
        </div>
    }
}
