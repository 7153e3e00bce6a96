mod cli;
mod commands;

use clap::Parser;
use figment::Figment;
use notepad::cache::FileLocalCache;
use notepad::config::client_config::ClientConfig;
use notepad::config::figment::FigmentExt;
use notepad::error_exit;
use notepad::logging::init_logging;
use notepad::remote::HttpRemoteNoteStore;
use notepad::service::DocumentService;
use crate::cli::CliConfig;
use crate::commands::{log_event, run};

#[tokio::main]
async fn main() {
    init_logging();

    let cli_config = CliConfig::parse();
    let config: ClientConfig = Figment::new()
        .setup_client_config(&cli_config.config_file)
        .extract()
        .unwrap_or_else(|e| error_exit!("failed to load config: {e}"));

    let remote = HttpRemoteNoteStore::new(&config)
        .unwrap_or_else(|e| error_exit!("failed to set up the api client: {e}"));
    let cache = FileLocalCache::new(&config.cache_directory)
        .await
        .unwrap_or_else(|e| error_exit!(
            "failed to open the local cache at {}: {e}",
            config.cache_directory.display(),
        ));

    let service = DocumentService::new(remote, cache);
    service.subscribe(log_event);

    if let Err(e) = run(&service, cli_config.command).await {
        error_exit!("{e}");
    }
}
