//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, clock,
//! navigation) and pure decision logic from page and component code so both
//! can be tested without a DOM.

pub mod auth;
pub mod clock;
pub mod dark_mode;
pub mod date;
pub mod note_actions;
pub mod route_policy;
pub mod token;
pub mod token_store;
