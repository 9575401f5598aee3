// Build Journal - Web Server
// Serves the journal page and its form endpoints with Axum

use anyhow::Result;
use build_journal::config::Configuration;
use build_journal::logging::init_stderr_logging;
use build_journal::server::{router, AppState};
use build_journal::Journal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    init_stderr_logging()?;

    let configuration = Configuration::new()?;
    info!(?configuration, "configuration loaded");

    let journal = if configuration.journal.seed_sample_data {
        Journal::with_sample_data()
    } else {
        Journal::new()
    };

    let state = AppState::new(journal);
    let app = router(state, &configuration.server.static_dir);

    let addr = configuration.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Images served from {}/ under /images", configuration.server.static_dir);

    axum::serve(listener, app).await?;

    Ok(())
}
