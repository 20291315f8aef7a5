//! Route classification and redirect decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session gate asks this module what to do for a given path and auth
//! flag. Everything here is pure so the decision table can be tested without a
//! router; navigation itself happens in `util::auth`.

#[cfg(test)]
#[path = "route_policy_test.rs"]
mod route_policy_test;

/// Landing page.
pub const HOME_PATH: &str = "/";
/// Login page; target for unauthenticated visitors of protected routes.
pub const LOGIN_PATH: &str = "/login";
/// Registration page.
pub const REGISTER_PATH: &str = "/register";
/// Main protected view; target for authenticated visitors of public routes.
pub const NOTES_PATH: &str = "/notes";

/// Paths reachable without a token. Every other path is protected.
const PUBLIC_PATHS: [&str; 3] = [HOME_PATH, LOGIN_PATH, REGISTER_PATH];

/// Outcome of a route check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(&'static str),
}

impl RouteDecision {
    /// Redirect target, if any.
    pub fn target(self) -> Option<&'static str> {
        match self {
            Self::Allow => None,
            Self::Redirect(target) => Some(target),
        }
    }
}

/// Strip query/fragment and trailing slashes so `/login/?next=x` classifies
/// like `/login`.
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() { HOME_PATH } else { trimmed }
}

/// Whether `path` belongs to the closed public set.
pub fn is_public(path: &str) -> bool {
    PUBLIC_PATHS.contains(&normalize_path(path))
}

/// Decide whether `path` may render for the given authentication flag.
pub fn decide(path: &str, authenticated: bool) -> RouteDecision {
    match (authenticated, is_public(path)) {
        (false, false) => RouteDecision::Redirect(LOGIN_PATH),
        (true, true) => RouteDecision::Redirect(NOTES_PATH),
        _ => RouteDecision::Allow,
    }
}

/// Detail route for a single note.
pub fn note_path(id: &str) -> String {
    format!("{NOTES_PATH}/{id}")
}
