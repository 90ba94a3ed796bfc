use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub ipv6: bool,
    pub catalog_path: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_cli(cli: &crate::cli::ServeCommand) -> Self {
        Self {
            host: cli.host.clone(),
            port: cli.port,
            ipv6: cli.ipv6,
            catalog_path: cli.catalog.clone(),
        }
    }
}
