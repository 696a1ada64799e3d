pub mod cors;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use toml_config::ServerConfig;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "niomag")]
#[command(about = "Serves SVG renders of the niomag charging dock", version)]
pub struct CliConfig {
    #[arg(long, env = "NIOMAG_HOST", help = "Interface to listen on [default: 127.0.0.1]")]
    pub host: Option<String>,

    #[arg(long, env = "NIOMAG_PORT", help = "Port to listen on [default: 8000]")]
    pub port: Option<u16>,

    #[arg(short, long, env = "NIOMAG_CONFIG", help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Builds the effective server configuration: flags override the file, the file overrides defaults.
    pub fn resolve(&self) -> Result<ServerConfig> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::from_file(path)?,
            None => ServerConfig::default(),
        };

        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }

        config.validate()?;
        Ok(config)
    }
}
