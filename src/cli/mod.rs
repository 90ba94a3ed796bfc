mod commands;
pub mod types;

pub use commands::{LookupCommand, LookupOutcome, ServeCommand};

use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "cafe-finder",
    version = env!("CARGO_PKG_VERSION"),
    about = "HTTP service listing the cafés of a city, with count and search filters",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Serve(ServeCommand),
    Lookup(LookupCommand),
}

impl Cli {
    pub async fn execute(&self) -> Result<ExitCode, Box<dyn std::error::Error + Send + Sync>> {
        match &self.command {
            Commands::Serve(cmd) => cmd.execute().await.map(|_| ExitCode::SUCCESS),
            Commands::Lookup(cmd) => cmd.execute().await,
        }
    }
}
