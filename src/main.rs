use clap::Parser;
use modlint::{Cli, exit_code, format_report, run_scan};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run_scan(&cli) {
        Ok(report) => {
            print!("{}", format_report(&cli, &report));
            exit_code(&cli, &report)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}
