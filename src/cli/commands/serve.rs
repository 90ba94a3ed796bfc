use std::path::PathBuf;

use clap::Parser;

use crate::{
    catalog::CityCatalog,
    cli::types::{LogFormat, LogLevel},
    config::{DEFAULT_HOST, DEFAULT_PORT, ServerConfig},
    logging::{LogConfig, configure_global_tracing},
    server::start_server,
};

#[derive(Parser, Debug)]
#[command(about = "Start the café lookup HTTP server")]
pub struct ServeCommand {
    #[arg(
        short = 'H',
        long,
        default_value = DEFAULT_HOST,
        help = "Host address to bind the server"
    )]
    pub host: String,

    #[arg(
        short = 'p',
        long,
        default_value_t = DEFAULT_PORT,
        help = "Port number to bind the server"
    )]
    pub port: u16,

    #[arg(long, default_value = "false", help = "Force IPv6 usage")]
    pub ipv6: bool,

    #[arg(
        short,
        long,
        help = "Path to a TOML city catalog (built-in catalog if not specified)"
    )]
    pub catalog: Option<PathBuf>,

    #[arg(
        short,
        long,
        default_value = "info",
        value_enum,
        help = "Logging level"
    )]
    pub log_level: LogLevel,

    #[arg(long, help = "Path to log file (if not specified, logs go to stdout)")]
    pub log_file: Option<String>,

    #[arg(long, default_value = "pretty", value_enum, help = "Log output format")]
    pub log_format: LogFormat,

    #[arg(
        long,
        help = "Maximum number of log files to retain (only applies if log_file is set)"
    )]
    pub log_max_files: Option<usize>,
}

impl ServeCommand {
    pub async fn execute(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let log_config = LogConfig {
            level: self.log_level,
            format: self.log_format,
            file_path: self.log_file.clone(),
            max_log_files: self.log_max_files,
        };

        configure_global_tracing(log_config)?;

        let config = ServerConfig::from_cli(self);
        let catalog = CityCatalog::load_or_builtin(config.catalog_path.as_deref())?;

        tracing::info!(
            "Serving {} cities: {}",
            catalog.len(),
            catalog.cities().join(", ")
        );

        start_server(config, catalog).await
    }
}
