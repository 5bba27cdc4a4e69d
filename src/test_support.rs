//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use crate::client::{FetchError, Fetcher};
use crate::core::state::ViewState;
use crate::tui::theme::Theme;
use crate::tui::ui;

/// A simulated fetcher that answers with a canned result and counts calls.
pub struct StaticFetcher {
    result: Result<String, FetchError>,
    calls: AtomicUsize,
}

impl StaticFetcher {
    pub fn new(result: Result<String, FetchError>) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetcher for StaticFetcher {
    fn target(&self) -> &str {
        "static://test"
    }

    async fn fetch(&self) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

pub fn static_fetcher(result: Result<String, FetchError>) -> Arc<StaticFetcher> {
    Arc::new(StaticFetcher::new(result))
}

/// Renders `state` onto a `width` x `height` test terminal and returns the buffer.
pub fn render_to_buffer(state: &ViewState, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let theme = Theme::default();
    terminal
        .draw(|f| ui::draw_ui(f, state, &theme))
        .unwrap();
    terminal.backend().buffer().clone()
}

/// Concatenates every cell symbol of a buffer.
pub fn buffer_text(buffer: &Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}

/// Text of a single row, trailing spaces trimmed.
pub fn row_text(buffer: &Buffer, y: u16) -> String {
    let width = buffer.area.width;
    (0..width)
        .map(|x| buffer[(x, y)].symbol())
        .collect::<String>()
        .trim_end()
        .to_string()
}
