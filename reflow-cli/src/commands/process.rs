//! Batch processing loop: discover, format, overwrite

use crate::error::CliError;
use crate::input::{discover_txt_files, FileReader};
use crate::output::FileWriter;
use anyhow::Result;
use clap::Args;
use reflow_core::ParagraphFormatter;
use std::io::{self, Write};
use std::path::Path;

/// Arguments for the batch cleanup run
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Suppress diagnostic log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ProcessArgs {
    /// Execute the batch run over `*.txt` files in the working directory.
    ///
    /// Per-file failures are reported and skipped; only a failure of the
    /// initial file listing ends the run early.
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        let files = discover_txt_files()?;

        if files.is_empty() {
            println!("No .txt files found");
            return Ok(());
        }

        log::info!("found {} .txt files", files.len());

        let mut formatter = ParagraphFormatter::new();
        for path in &files {
            print!("Processing {} ", path.display());
            let _ = io::stdout().flush();

            match process_file(path, &mut formatter) {
                Ok(()) => println!("Done"),
                Err(err) => println!("Error: {err}"),
            }
        }

        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }
}

/// Read, format, and overwrite a single file.
fn process_file(path: &Path, formatter: &mut ParagraphFormatter) -> Result<(), CliError> {
    let text = FileReader::read_text(path)?;
    let formatted = formatter.format(&text);
    log::debug!(
        "{}: {} bytes in, {} bytes out",
        path.display(),
        text.len(),
        formatted.len()
    );
    FileWriter::write_text(path, &formatted)
}
