//! Resolved ratatui styles, built once from the string settings in
//! `ResolvedStyle`. Unknown colors or border names fall back to defaults.

use std::str::FromStr;

use log::warn;
use ratatui::style::{Color, Style};
use ratatui::widgets::BorderType;

use crate::core::config::{
    DEFAULT_BORDER_COLOR, DEFAULT_ERROR_COLOR, DEFAULT_HELP_COLOR, ResolvedStyle,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border_type: BorderType,
    pub border_style: Style,
    pub help_style: Style,
    pub error_style: Style,
    /// Horizontal padding inside the message box.
    pub padding: u16,
}

impl Theme {
    pub fn from_style(style: &ResolvedStyle) -> Self {
        Self {
            border_type: parse_border(&style.border),
            border_style: Style::default().fg(parse_color(&style.border_color, DEFAULT_BORDER_COLOR)),
            help_style: Style::default().fg(parse_color(&style.help_color, DEFAULT_HELP_COLOR)),
            error_style: Style::default().fg(parse_color(&style.error_color, DEFAULT_ERROR_COLOR)),
            padding: style.padding,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_style(&ResolvedStyle::default())
    }
}

/// Accepts color names ("gray"), hex ("#808080") and 256-color indexes ("86").
fn parse_color(raw: &str, fallback: &str) -> Color {
    Color::from_str(raw.trim())
        .or_else(|_| {
            warn!("Unknown color {:?}, using {:?}", raw, fallback);
            Color::from_str(fallback)
        })
        .unwrap_or(Color::Reset)
}

fn parse_border(raw: &str) -> BorderType {
    match raw.trim().to_ascii_lowercase().as_str() {
        "plain" => BorderType::Plain,
        "rounded" => BorderType::Rounded,
        "double" => BorderType::Double,
        "thick" => BorderType::Thick,
        other => {
            warn!("Unknown border style {:?}, using rounded", other);
            BorderType::Rounded
        }
    }
}
