//! Command handlers.

use crate::cli::Cli;
use chrono::Utc;
use gazette::{
    GazetteConfig, GazetteResult, Orchestrator, QuotaStatus, RunConfig, RunResult, RunStats,
    may_generate, next_keyword as pick_keyword,
};
use std::path::Path;
use std::process::ExitCode;

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

fn load_settings(cli: &Cli) -> GazetteResult<GazetteConfig> {
    match &cli.config {
        Some(path) => GazetteConfig::from_file(path),
        None => GazetteConfig::load(),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Publish one article.
///
/// Prints the run result as JSON and, when `state_out` is given, writes the
/// updated state there so the caller can feed it back as `ARTICLES_DATA`.
/// Exits non-zero when no article was published.
pub async fn run(cli: &Cli, state_out: Option<&Path>) -> CliResult<ExitCode> {
    let config = RunConfig::from_env();

    let orchestrator =
        match load_settings(cli).and_then(|settings| Orchestrator::from_config(&config, settings)) {
            Ok(orchestrator) => orchestrator,
            Err(e) => {
                tracing::error!(error = %e, "Failed to set up backends");
                let stats = RunStats {
                    api_calls: 0,
                    articles_today: config.state().articles_on(Utc::now().date_naive()),
                };
                print_json(&RunResult::failure(format!("Execution error: {e}"), stats))?;
                return Ok(ExitCode::FAILURE);
            }
        };

    let outcome = orchestrator.run(&config).await;
    print_json(&outcome.result)?;

    if let Some(path) = state_out {
        std::fs::write(path, outcome.state.to_json()?)?;
        tracing::info!(path = %path.display(), "Run state written");
    }

    Ok(if outcome.result.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Print today's quota counters.
pub fn quota(cli: &Cli) -> CliResult<ExitCode> {
    // Settings are only validated here; ceilings come from BLOG_CONFIG.
    load_settings(cli)?;
    let config = RunConfig::from_env();
    let today = Utc::now().date_naive();

    let status = QuotaStatus::on(config.state(), config.blog(), today);
    print_json(&serde_json::json!({
        "status": status,
        "may_generate": may_generate(config.state(), config.blog(), today),
    }))?;
    Ok(ExitCode::SUCCESS)
}

/// Print the keyword the next run would pick.
pub fn next_keyword() -> CliResult<ExitCode> {
    let config = RunConfig::from_env();
    let mut used = config.state().used_keywords.clone();

    match pick_keyword(config.keywords(), &mut used) {
        Some(keyword) => {
            println!("{keyword}");
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("No keywords available");
            Ok(ExitCode::FAILURE)
        }
    }
}
