//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, session access,
//! navigation) and delegates rendering details to `components`.

pub mod home;
pub mod login;
pub mod note_detail;
pub mod notes;
pub mod register;
