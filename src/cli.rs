use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

/// Browse and edit a user directory fetched from a remote endpoint.
#[derive(Debug, Parser)]
#[command(name = "userdir", version, about)]
pub struct Cli {
    /// Remote endpoint returning the user list (overrides USERDIR_API_URL)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Config file path (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start with an empty directory instead of fetching
    #[arg(long)]
    pub no_fetch: bool,
}

impl Cli {
    /// Resolve the effective config: flag > env > file.
    pub fn load_config(&self, env_url: Option<String>) -> Result<Config, ConfigError> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        Config::load_from(&path)?.resolve(env_url, self.api_url.clone())
    }
}
