//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps presentation preferences out of session and note state.

/// UI preferences shared across pages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
}
