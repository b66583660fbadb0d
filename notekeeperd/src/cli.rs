use std::path::PathBuf;
use clap::Parser;
use notekeeper::bin_constants::DEFAULT_CONFIG_FILE;

/// Personal notes server.
#[derive(Clone, Debug, Eq, Parser, PartialEq)]
#[command(version, author, about)]
pub struct CliConfig {
    #[arg(short = 'c', long, value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    pub config_file: PathBuf,

    /// Validate the configuration and exit without serving.
    #[arg(long)]
    pub check_config: bool,
}
