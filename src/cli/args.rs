//! cli::args
//!
//! Command-line argument definitions using clap derive.

use clap::Parser;
use std::path::PathBuf;

/// cfbs-check - Validate a cfbs.json module manifest
#[derive(Parser, Debug)]
#[command(name = "cfbs-check")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the manifest to validate
    #[arg(value_name = "FILE", default_value = "./cfbs.json")]
    pub file: PathBuf,

    /// Also require a valid, non-empty "build" field, as the build and
    /// download commands would
    #[arg(long)]
    pub build: bool,

    /// Minimal output; suppress warnings and the success line
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}
