use color_eyre::Result;
use directory_service::{init_logging, DirectoryConfig};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = DirectoryConfig::load()?;
    let _log_guard = init_logging(&config.logging)?;

    directory_tui::run(config).await
}
