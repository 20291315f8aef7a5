use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::*;
use crate::util::route_policy::{LOGIN_PATH, NOTES_PATH};
use crate::util::token_store::MemoryTokenStore;

const NOW: f64 = 1_750_000_000.0;

fn token_expiring_at(exp: f64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(serde_json::json!({ "id": "u-1", "exp": exp }).to_string());
    format!("{header}.{body}.sig")
}

// =============================================================
// Token validity
// =============================================================

#[test]
fn missing_token_is_unauthenticated() {
    let store = MemoryTokenStore::new();
    let guard = SessionGuard::new(&store);
    assert!(!guard.check(NOW));
}

#[test]
fn expired_token_is_unauthenticated_and_cleared() {
    let store = MemoryTokenStore::with_token(&token_expiring_at(NOW - 60.0));
    let guard = SessionGuard::new(&store);
    assert!(!guard.check(NOW));
    assert_eq!(store.get(), None);
}

#[test]
fn future_token_is_authenticated_and_kept() {
    let token = token_expiring_at(NOW + 3600.0);
    let store = MemoryTokenStore::with_token(&token);
    let guard = SessionGuard::new(&store);
    assert!(guard.check(NOW));
    assert_eq!(store.get(), Some(token));
}

#[test]
fn malformed_token_is_treated_as_absent_and_cleared() {
    let store = MemoryTokenStore::with_token("garbage");
    let guard = SessionGuard::new(&store);
    assert!(!guard.check(NOW));
    assert_eq!(store.get(), None);
}

// =============================================================
// Evaluation
// =============================================================

#[test]
fn expired_token_on_protected_path_redirects_to_login() {
    let store = MemoryTokenStore::with_token(&token_expiring_at(NOW - 1.0));
    let guard = SessionGuard::new(&store);
    let evaluation = guard.evaluate("/notes/1", NOW);
    assert!(!evaluation.authenticated);
    assert_eq!(evaluation.decision, RouteDecision::Redirect(LOGIN_PATH));
    assert_eq!(store.get(), None);
}

#[test]
fn expired_token_on_public_path_is_allowed() {
    let store = MemoryTokenStore::with_token(&token_expiring_at(NOW - 1.0));
    let guard = SessionGuard::new(&store);
    assert_eq!(guard.evaluate("/login", NOW).decision, RouteDecision::Allow);
}

#[test]
fn valid_token_on_public_path_redirects_to_notes() {
    let store = MemoryTokenStore::with_token(&token_expiring_at(NOW + 60.0));
    let guard = SessionGuard::new(&store);
    let evaluation = guard.evaluate("/", NOW);
    assert!(evaluation.authenticated);
    assert_eq!(evaluation.decision, RouteDecision::Redirect(NOTES_PATH));
}

#[test]
fn evaluate_is_idempotent() {
    for token in [None, Some(token_expiring_at(NOW + 60.0)), Some(token_expiring_at(NOW - 60.0))] {
        let store = MemoryTokenStore::new();
        if let Some(token) = token.as_deref() {
            store.set(token);
        }
        let guard = SessionGuard::new(&store);
        for path in ["/", "/notes"] {
            let first = guard.evaluate(path, NOW);
            let second = guard.evaluate(path, NOW);
            assert_eq!(first, second, "path {path}");
        }
    }
}

#[test]
fn sign_in_then_sign_out_round_trips_store() {
    let store = MemoryTokenStore::new();
    let guard = SessionGuard::new(&store);
    guard.sign_in(&token_expiring_at(NOW + 60.0));
    assert!(guard.evaluate("/notes", NOW).authenticated);
    guard.sign_out();
    assert_eq!(store.get(), None);
    assert_eq!(guard.evaluate("/notes", NOW).decision, RouteDecision::Redirect(LOGIN_PATH));
}

#[test]
fn session_state_defaults_to_unchecked_and_unauthenticated() {
    let state = SessionState::default();
    assert!(!state.authenticated);
    assert!(!state.checked);
}
