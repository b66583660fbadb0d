use std::path::PathBuf;
use clap::{ArgGroup, Parser};
use data::UsernameString;
use notekeeper::bin_constants::DEFAULT_CONFIG_FILE;

#[derive(Clone, Debug, Eq, Parser, PartialEq)]
#[command(version, author, about)]
#[command(group(ArgGroup::new("action").required(true).args(["generate_pepper", "add_user"])))]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config_file: PathBuf,

    /// Write a new pepper to `hasher_config.pepper_path`
    #[arg(long)]
    pub generate_pepper: bool,

    /// Register a user in the database, reading the password from the terminal
    #[arg(long, value_name = "USERNAME")]
    pub add_user: Option<UsernameString>,

    /// Don't ask for the password twice
    #[arg(long, short = 'y', default_value_t = false)]
    pub no_repeat: bool,
}
