use clap::Parser;

/// Evaluate a single line of integer arithmetic from standard input
///
/// Reads one `<int> <op> <int>` line, prints the result, and exits.
/// Unsupported operators print `None`.
#[derive(Parser, Debug)]
#[command(name = "lineval")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {}
