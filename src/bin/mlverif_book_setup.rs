use std::process::ExitCode;

use clap::Parser;

use mlverif_notebooks::app::{Environment, run_book_setup};
use mlverif_notebooks::cli::BookSetupCli;
use mlverif_notebooks::logging;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = BookSetupCli::parse();
    logging::init(cli.verbose);

    match run_book_setup(&cli, &Environment::from_process()) {
        Ok(url) => {
            println!("Injected repository.url: {url}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
