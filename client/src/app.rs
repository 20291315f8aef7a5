//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::hooks::use_navigate;
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    home::HomePage, login::LoginPage, note_detail::NoteDetailPage, notes::NotesPage, register::RegisterPage,
};
use crate::state::session::Session;
use crate::state::ui::UiState;
use crate::util::auth::install_session_guard;
use crate::util::dark_mode;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session and UI state and provides them to every route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::new();
    let ui = RwSignal::new(UiState::default());
    provide_context(session);
    provide_context(ui);

    // Runs once in the browser; SSR always renders the light theme.
    Effect::new(move || {
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/notes-web.css"/>
        <Title text="Notes App"/>
        <Meta
            name="description"
            content="A note-taking application that helps you capture ideas, organize thoughts, and access your notes anywhere, anytime."
        />

        <Router>
            <SessionGate/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("notes") view=NotesPage/>
                    <Route path=(StaticSegment("notes"), ParamSegment("id")) view=NoteDetailPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Installs the navigation-driven session check; renders nothing.
#[component]
fn SessionGate() -> impl IntoView {
    let session = expect_context::<Session>();
    install_session_guard(session, use_navigate());
}
