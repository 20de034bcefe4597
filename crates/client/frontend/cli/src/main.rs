//! Terminal client entry point.
mod app;
mod config;
mod input;
mod presentation;
mod state;

use anyhow::Result;
use app::CliApp;
use config::CliConfig;

fn main() -> Result<()> {
    // Optional .env for log filters and UI tweaks.
    let _ = dotenvy::dotenv();

    // The TUI owns stdout and stderr shares the screen, so logs go to a file.
    let file_appender = tracing_appender::rolling::never(".", "field-tally.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    let config = CliConfig::from_env();

    CliApp::new(config).run()
}
