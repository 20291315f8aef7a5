//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render forms and list rows while pages own fetching, session
//! access and navigation.

pub mod auth_form;
pub mod note_card;
pub mod note_dialog;
pub mod session_gate;
