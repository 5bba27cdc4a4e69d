//! # Core Application Logic
//!
//! This module contains pgin's state and update rules.
//! It knows nothing about any specific UI technology or HTTP client.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • ViewState            │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • configuration        │
//!                    └───────────┬─────────────┘
//!                                │
//!                ┌───────────────┴───────────────┐
//!                ▼                               ▼
//!         ┌────────────┐                  ┌────────────┐
//!         │    TUI     │                  │   CLIENT   │
//!         │  Adapter   │                  │  Fetcher   │
//!         │ (ratatui)  │                  │ (reqwest)  │
//!         └────────────┘                  └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `ViewState` and `FetchResult`
//! - [`action`]: The `Action` enum and `update()`
//! - [`config`]: Default settings handed to the adapters

pub mod action;
pub mod config;
pub mod state;
