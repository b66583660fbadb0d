mod cli;

use clap::{crate_name, Parser};
use log::info;
use notekeeper::config::app_config::data::AppConfigData;
use notekeeper::config::app_config::AppConfig;
use notekeeper::config::log_config::LogConfig;
use notekeeper::error_exit;
use notekeeper::logging::{init_daemon_logging, init_tool_logging};
use notekeeperd::{build_rocket, make_figment};
use crate::cli::CliConfig;

fn main() {
    let cli_config = CliConfig::parse();
    if !cli_config.config_file.exists() {
        init_tool_logging();
        error_exit!(
            "configuration file at {} does not exist",
            cli_config.config_file.display(),
        )
    }
    let figment = make_figment(&cli_config.config_file);

    let log_config: LogConfig = match figment.extract_inner("log") {
        Ok(log_config) => log_config,
        Err(e) => {
            init_tool_logging();
            error_exit!("invalid log configuration: {e}")
        },
    };
    if let Err(e) = init_daemon_logging(&log_config) {
        init_tool_logging();
        error_exit!("failed to set up logging: {e}")
    }

    if cli_config.check_config {
        let config_data: AppConfigData = figment.extract()
            .unwrap_or_else(|e| error_exit!("invalid configuration: {e}"));
        if let Err(e) = AppConfig::try_from(config_data) {
            error_exit!("invalid configuration: {e}");
        }
        info!("configuration at {} is valid", cli_config.config_file.display());
        return;
    }

    info!("{} starting up", crate_name!());

    let result = rocket::execute(build_rocket(figment).launch());
    if let Err(e) = result {
        error_exit!("failed to launch rocket: {e}");
    }
}
