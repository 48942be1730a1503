//! cli
//!
//! Command-line interface layer for cfbs-check.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments
//! - Load the manifest and run the validation engine
//! - Format and display output
//!
//! The CLI layer is thin: it holds no validation logic of its own.
//! Validation runs non-interactively; the first error ends the run.

pub mod args;

pub use args::Cli;

use anyhow::Result;

use crate::core::document::Document;
use crate::core::validate;
use crate::ui::output::{self, Verbosity};

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`. Returns an error
/// for the first validation failure; `main` prints it and exits
/// non-zero.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let verbosity = Verbosity::from_flags(cli.quiet);

    let document = Document::load(&cli.file)?;

    // Unknown keys warn but never fail validation.
    for warning in document.unknown_key_warnings() {
        output::warn(warning, verbosity);
    }

    validate::validate_document(&document, cli.build)?;

    output::success(
        format!("{} is a valid cfbs.json manifest", cli.file.display()),
        verbosity,
    );
    Ok(())
}
