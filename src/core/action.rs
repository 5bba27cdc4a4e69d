//! # Actions
//!
//! Everything that can happen in pgin becomes an `Action`.
//! Terminal resized? That's `Action::Resize`.
//! Server answered? That's `Action::FetchCompleted(result)`.
//!
//! The `update()` function applies an action to the state and returns the
//! `Effect` the event loop should carry out. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::state::{Dimensions, FetchResult, ViewState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Display Loop started; asks for the one fetch of this session.
    Start,
    FetchCompleted(FetchResult),
    Resize { width: u16, height: u16 },
    Quit,
}

impl Action {
    /// Variant name for logging. Never includes the fetched body.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Start => "Start",
            Action::FetchCompleted(FetchResult::Success { .. }) => "FetchCompleted(Success)",
            Action::FetchCompleted(FetchResult::Failure { .. }) => "FetchCompleted(Failure)",
            Action::Resize { .. } => "Resize",
            Action::Quit => "Quit",
        }
    }
}

/// Side effect requested by `update`, performed by the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    SpawnFetch,
    Quit,
}

pub fn update(state: &mut ViewState, action: Action) -> Effect {
    match action {
        Action::Start => {
            if state.fetch_requested {
                debug!("Fetch already requested, ignoring Start");
                return Effect::None;
            }
            state.fetch_requested = true;
            Effect::SpawnFetch
        }
        Action::FetchCompleted(result) => {
            match &result {
                FetchResult::Success { body } => {
                    info!("Fetch succeeded ({} bytes)", body.len());
                }
                FetchResult::Failure { reason } => info!("Fetch failed: {}", reason),
            }
            // Replaces any earlier outcome, never merges.
            state.outcome = Some(result);
            Effect::None
        }
        Action::Resize { width, height } => {
            state.dimensions = Some(Dimensions { width, height });
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
