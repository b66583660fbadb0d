use crate::cli::CliConfig;
use clap::Parser;
use data::UsernameString;
use figment::Figment;
use log::{error, info, warn};
use notekeeper::config::app_config::data::AppConfigData;
use notekeeper::config::app_config::AppConfig;
use notekeeper::config::figment::FigmentExt;
use notekeeper::error_exit;
use notekeeper::logging::init_tool_logging;
use pepper_generator::make_pepper;
use rpassword::prompt_password;
use std::process::exit;
use user_adder::add_user;

mod cli;
mod file_write;
mod pepper_generator;
mod user_adder;

fn main() {
    init_tool_logging();

    let cli_config = CliConfig::parse();

    if !cli_config.config_file.exists() {
        error_exit!(
            "configuration file at {} does not exist",
            cli_config.config_file.display()
        )
    }

    let config_data: AppConfigData = Figment::new()
        .setup_app_config(&cli_config.config_file)
        .extract()
        .unwrap_or_else(|e| {
            for e in e {
                error!("{e}");
            }
            info!("finishing due to a configuration error");
            exit(1)
        });
    let app_config = AppConfig::try_from(config_data)
        .unwrap_or_else(|e| error_exit!("invalid configuration: {e}"));

    if cli_config.generate_pepper {
        generate_pepper(&app_config)
    } else if let Some(ref username) = cli_config.add_user {
        register(&cli_config, &app_config, username)
    }
}

fn generate_pepper(app_config: &AppConfig) {
    let path = &app_config.hasher_config.pepper_path;
    make_pepper(path)
        .unwrap_or_else(|e| error_exit!("could not generate a pepper: {e}"));
    info!("pepper written to {}", path.display());
}

fn register(
    cli_config: &CliConfig,
    app_config: &AppConfig,
    username: &UsernameString,
) {
    let read_value = prompt_password("Enter the password: ")
        .unwrap_or_else(|e| error_exit!("could not read password: {}", e));
    if read_value.is_empty() {
        error_exit!("entered password is empty")
    }

    if !cli_config.no_repeat {
        let confirmation_value = prompt_password("Repeat the password: ")
            .unwrap_or_else(|e| error_exit!("could not read password: {}", e));
        if confirmation_value != read_value {
            error_exit!("the passwords do not match")
        }
    }

    if read_value.trim() != read_value {
        warn!("the password has leading or trailing whitespace characters");
    }

    let user = add_user(app_config, username, &read_value)
        .unwrap_or_else(|e| error_exit!("could not add user \"{username}\": {e}"));
    info!("user \"{}\" added with id {}", user.username, user.id);
}
