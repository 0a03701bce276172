use std::io;

use anyhow::Result;
use clap::Parser;

use lineval::Cli;
use lineval::commands::eval_command;

fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let _cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    eval_command(stdin.lock(), stdout.lock())
}
