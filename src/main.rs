use pgin::core::config::ResolvedConfig;
use pgin::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Initialize file logger - the terminal belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("pgin.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let config = ResolvedConfig::default();

    log::info!(
        "pgin starting up: url={}, timeout={:?}",
        config.url,
        config.timeout
    );

    tui::run(config)
}
