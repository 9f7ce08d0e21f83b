use std::{env, io, process::ExitCode};

use clap::Parser;
use flinkmon::view::format::{colorize, FAIL};
use flinkmon::{Cli, Settings};

fn log_filter(verbose: bool) -> String {
    env::var("RUST_LOG").unwrap_or_else(|_| {
        if verbose {
            "flinkmon=debug,common=debug".to_string()
        } else {
            "flinkmon=warn,common=warn".to_string()
        }
    })
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose))
        .with_writer(io::stderr)
        .init();

    let settings = Settings::from_cli(&cli);
    let color = settings.color;

    match flinkmon::run(cli, settings).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", colorize(&format!("Error: {err:#}"), FAIL, color));
            ExitCode::FAILURE
        }
    }
}
