use std::process::ExitCode;

use cafe_finder::cli::Cli;
use clap::Parser;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    cli.execute().await
}
