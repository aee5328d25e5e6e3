mod app;
mod events;
mod ui;

use app::App;
use color_eyre::Result;
use std::time::Duration;

use directory_rpc::DirectoryApi;
use directory_service::{DirectoryConfig, HttpUserSource};

/// Seed the directory, then hand the terminal to the UI until the operator quits.
pub async fn run(config: DirectoryConfig) -> Result<()> {
    let mut api = DirectoryApi::new();

    let timeout = Duration::from_secs(config.source.timeout_secs);
    match HttpUserSource::new(config.source.url.clone(), timeout) {
        Ok(source) => {
            api.initialize(&source).await?;
        }
        Err(e) => {
            tracing::error!(error = %e, "Could not build user source; starting empty");
            api.record_seed_failure(e.to_string())?;
        }
    }

    let terminal = ratatui::init();
    let result = App::new(api, &config.ui).run(terminal);
    ratatui::restore();
    result
}
