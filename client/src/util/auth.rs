//! Router-side session gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Installed once inside the `<Router>`. It re-evaluates the session on mount,
//! on every path change and on a fixed timer, and performs the navigation
//! that `route_policy::decide` asks for.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_location;

use crate::state::session::Session;
use crate::util::route_policy::{RouteDecision, normalize_path};

/// Navigation options for gate redirects: replace history so the back button
/// does not bounce through a forbidden page.
pub fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Redirect target for `decision` unless the browser is already there.
pub fn redirect_target(current_path: &str, decision: RouteDecision) -> Option<&'static str> {
    decision.target().filter(|target| normalize_path(current_path) != *target)
}

/// Evaluate the session for `path` and follow the resulting redirect.
pub fn enforce<F>(session: Session, path: &str, navigate: &F)
where
    F: Fn(&str, NavigateOptions),
{
    follow(path, session.evaluate(path), navigate);
}

/// Navigate to the redirect `decision` asks for, if any. Returns the target.
pub fn follow<F>(path: &str, decision: RouteDecision, navigate: &F) -> Option<&'static str>
where
    F: Fn(&str, NavigateOptions),
{
    let target = redirect_target(path, decision)?;
    leptos::logging::log!("session gate: {path} -> {target}");
    navigate(target, redirect_options());
    Some(target)
}

/// Wire the session gate to the current location and the revalidation timer.
pub fn install_session_guard<F>(session: Session, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let location = use_location();

    let navigate_on_change = navigate.clone();
    Effect::new(move || {
        let path = location.pathname.get();
        enforce(session, &path, &navigate_on_change);
    });

    #[cfg(feature = "hydrate")]
    {
        use crate::state::session::REVALIDATE_INTERVAL_SECS;

        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(REVALIDATE_INTERVAL_SECS)).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                let path = location.pathname.get_untracked();
                enforce(session, &path, &navigate);
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = navigate;
    }
}
