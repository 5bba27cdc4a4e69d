//! # Configuration
//!
//! Every setting pgin uses, gathered into one struct that is handed to the
//! Fetcher and the Display Loop at construction. Values come from the
//! constants below; there is no file, env var or flag layer on top.

use std::time::Duration;

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_BORDER: &str = "rounded";
pub const DEFAULT_BORDER_COLOR: &str = "#808080";
pub const DEFAULT_HELP_COLOR: &str = "86";
pub const DEFAULT_ERROR_COLOR: &str = "red";
pub const DEFAULT_PADDING: u16 = 2;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

/// Style settings as plain strings. The `tui` module turns them into
/// ratatui styles so this module stays UI-agnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStyle {
    pub border: String,
    pub border_color: String,
    pub help_color: String,
    pub error_color: String,
    pub padding: u16,
}

impl Default for ResolvedStyle {
    fn default() -> Self {
        Self {
            border: DEFAULT_BORDER.to_string(),
            border_color: DEFAULT_BORDER_COLOR.to_string(),
            help_color: DEFAULT_HELP_COLOR.to_string(),
            error_color: DEFAULT_ERROR_COLOR.to_string(),
            padding: DEFAULT_PADDING,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub url: String,
    pub timeout: Duration,
    pub style: ResolvedStyle,
    pub mouse_capture: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            style: ResolvedStyle::default(),
            mouse_capture: false,
        }
    }
}
