mod cli;

use clap::{crate_name, Parser};
use figment::Figment;
use log::info;
use notepad::config::figment::FigmentExt;
use notepad::error_exit;
use notepad::logging::init_logging;
use notepad::server::build_rocket;
use crate::cli::CliConfig;

fn main() {
    init_logging();

    info!("{} starting up", crate_name!());

    let cli_config = CliConfig::parse();
    if !cli_config.config_file.exists() {
        error_exit!(
            "configuration file at {} does not exist",
            cli_config.config_file.display(),
        )
    }
    let figment = Figment::from(rocket::Config::default())
        .setup_app_config(cli_config.config_file);

    if let Err(e) = rocket::execute(build_rocket(figment).launch()) {
        error_exit!("failed to launch rocket: {e}");
    }
}
