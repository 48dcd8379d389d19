use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use mlverif_notebooks::app::{Environment, run_trigger};
use mlverif_notebooks::cli::TriggerCli;
use mlverif_notebooks::config::Config;
use mlverif_notebooks::error::AppError;
use mlverif_notebooks::logging;

fn main() -> ExitCode {
    // Before parsing, so GITHUB_API_URL from .env reaches clap
    let dotenv = dotenvy::dotenv().ok();

    let cli = TriggerCli::parse();
    logging::init(cli.verbose);
    if let Some(path) = dotenv {
        debug!(path = %path.display(), "Loaded .env");
    }

    let config = match &cli.config {
        Some(path) => match Config::load_file(path) {
            Ok(config) => config,
            Err(e) => return fail(e.into()),
        },
        None => Config::load(),
    };
    let cli = cli.with_config(config);
    let env = Environment::from_process();

    match run_trigger(&cli, &env) {
        Ok(dispatched) => {
            println!(
                "Workflow triggered for {} on {}. View status here: {}",
                dispatched.repository,
                dispatched.git_ref,
                dispatched.repository.actions_url(env.server_url())
            );
            println!(
                "Report will be published under {}",
                dispatched.report.storage_prefix()
            );
            ExitCode::SUCCESS
        }
        Err(e) => fail(e),
    }
}

fn fail(e: AppError) -> ExitCode {
    eprintln!("Error: {e}");
    ExitCode::from(e.exit_code())
}
