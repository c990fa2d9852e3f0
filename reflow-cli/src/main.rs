//! Entry point for the reflow batch text-cleanup tool

use clap::Parser;
use reflow_cli::commands::ProcessArgs;
use reflow_cli::APP_VERSION;

/// Clean up .txt files in the current directory, in place
#[derive(Debug, Parser)]
#[command(
    name = "reflow",
    version,
    about = "Batch text cleanup: strips filler words, normalizes whitespace, \
             and reflows sentences into bounded paragraphs"
)]
struct Cli {
    #[command(flatten)]
    args: ProcessArgs,
}

fn main() {
    let cli = Cli::parse();

    println!("App version: {APP_VERSION}");

    // Per-file errors are reported inside the loop; the only error that
    // reaches here is a failed file listing. Either way the process exits
    // normally after reporting.
    if let Err(err) = cli.args.execute() {
        println!("{err}");
    }
}
