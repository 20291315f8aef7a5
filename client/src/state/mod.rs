//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `notes`, `ui`) so individual pages
//! depend on small focused models.

pub mod notes;
pub mod session;
pub mod ui;
