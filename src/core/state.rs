//! # View State
//!
//! Core state for pgin. Domain data only, no TUI types. Presentation
//! (colors, borders) lives in the `tui` module.
//!
//! ```text
//! ViewState
//! ├── outcome: Option<FetchResult>   // None until the fetch completes
//! ├── dimensions: Option<Dimensions> // None until the first size event
//! └── fetch_requested: bool          // one fetch per session
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

/// Outcome of exactly one fetch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult {
    Success { body: String },
    Failure { reason: String },
}

impl FetchResult {
    pub fn success(body: impl Into<String>) -> Self {
        FetchResult::Success { body: body.into() }
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        FetchResult::Failure {
            reason: reason.into(),
        }
    }
}

/// Terminal size in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u16,
    pub height: u16,
}

/// Which screen the Display Loop is showing. Derived from the stored outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Loaded,
    Errored,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub outcome: Option<FetchResult>,
    pub dimensions: Option<Dimensions>,
    /// True once `Action::Start` has asked for the fetch.
    pub fetch_requested: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        match self.outcome {
            None => Phase::Loading,
            Some(FetchResult::Success { .. }) => Phase::Loaded,
            Some(FetchResult::Failure { .. }) => Phase::Errored,
        }
    }

    /// Fetched body, or empty text while loading or after a failure.
    pub fn body(&self) -> &str {
        match &self.outcome {
            Some(FetchResult::Success { body }) => body,
            _ => "",
        }
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match &self.outcome {
            Some(FetchResult::Failure { reason }) => Some(reason),
            _ => None,
        }
    }
}
