//! Gazette CLI binary.
//!
//! - `gazette run`: publish one article and print the run result as JSON
//! - `gazette quota`: show today's counters against the daily ceilings
//! - `gazette next-keyword`: preview the keyword the next run would use

use clap::Parser;
use std::process::ExitCode;

mod cli;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, init_logging, next_keyword, quota, run};

    let cli = Cli::parse();

    // .env is optional
    dotenvy::dotenv().ok();

    init_logging(&cli)?;

    let code = match &cli.command {
        Commands::Run { state_out } => run(&cli, state_out.as_deref()).await?,
        Commands::Quota => quota(&cli)?,
        Commands::NextKeyword => next_keyword()?,
    };

    if cli.otel {
        gazette::shutdown_telemetry();
    }

    Ok(code)
}
