//! Session state and the token-validity guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionGuard` is the single place that turns the stored token into an
//! authentication flag. `Session` is the observable handle the root `App`
//! provides via context; views subscribe to it and the router gate in
//! `util::auth` calls `evaluate` on mount, on navigation, and on a timer.
//!
//! DESIGN
//! ======
//! The guard only computes: token lookup, claim decode, expiry comparison and
//! the route decision. Navigation stays with the caller so the full decision
//! path is testable against an in-memory store.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::util::clock::now_secs;
use crate::util::route_policy::{self, RouteDecision};
use crate::util::token::decode_claims;
use crate::util::token_store::{LocalStorageTokenStore, TokenStore};

/// Seconds between background re-evaluations while the app is open.
pub const REVALIDATE_INTERVAL_SECS: u64 = 60;

/// Observable authentication state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub authenticated: bool,
    /// Set once the first evaluation has run in the browser.
    pub checked: bool,
}

/// Result of one guard evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Evaluation {
    pub authenticated: bool,
    pub decision: RouteDecision,
}

/// Derives the authentication flag from a token store.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionGuard<S> {
    store: S,
}

impl<S: TokenStore> SessionGuard<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Whether the stored token is present, decodable and unexpired.
    ///
    /// Malformed and expired tokens are removed from the store.
    pub fn check(&self, now_secs: f64) -> bool {
        let Some(token) = self.store.get() else {
            return false;
        };
        match decode_claims(&token) {
            Ok(claims) if claims.is_expired(now_secs) => {
                leptos::logging::log!("session token expired at {}", claims.exp);
                self.store.clear();
                false
            }
            Ok(_) => true,
            Err(e) => {
                leptos::logging::warn!("discarding unreadable session token: {e}");
                self.store.clear();
                false
            }
        }
    }

    /// Compute the authentication flag and the route decision for `path`.
    pub fn evaluate(&self, path: &str, now_secs: f64) -> Evaluation {
        let authenticated = self.check(now_secs);
        Evaluation { authenticated, decision: route_policy::decide(path, authenticated) }
    }

    /// Persist a freshly issued token, replacing any previous one.
    pub fn sign_in(&self, token: &str) {
        self.store.set(token);
    }

    /// Forget the stored token.
    pub fn sign_out(&self) {
        self.store.clear();
    }
}

/// Reactive session handle shared through context.
#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<SessionState>,
    guard: SessionGuard<LocalStorageTokenStore>,
}

impl Session {
    pub fn new() -> Self {
        Self { state: RwSignal::new(SessionState::default()), guard: SessionGuard::new(LocalStorageTokenStore) }
    }

    /// Re-derive the flag for `path` and return the route decision.
    ///
    /// The signal is only written when the state actually changes, so repeated
    /// evaluations do not wake subscribers.
    pub fn evaluate(self, path: &str) -> RouteDecision {
        let evaluation = self.guard.evaluate(path, now_secs());
        let next = SessionState { authenticated: evaluation.authenticated, checked: true };
        if self.state.get_untracked() != next {
            self.state.set(next);
        }
        evaluation.decision
    }

    /// Store a new token and mark the session authenticated.
    pub fn sign_in(self, token: &str) {
        self.guard.sign_in(token);
        self.state.set(SessionState { authenticated: true, checked: true });
    }

    /// Clear the token and the flag. Callers navigate only after this returns.
    pub fn sign_out(self) {
        self.guard.sign_out();
        self.state.set(SessionState { authenticated: false, checked: true });
    }

    /// Read-only view for components that react to session changes.
    pub fn subscribe(self) -> ReadSignal<SessionState> {
        self.state.read_only()
    }

    /// Tracked read of the authentication flag.
    pub fn is_authenticated(self) -> bool {
        self.state.get().authenticated
    }

    /// Tracked read of whether the first evaluation has happened.
    pub fn is_checked(self) -> bool {
        self.state.get().checked
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
