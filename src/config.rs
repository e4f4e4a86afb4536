//! Command-line options of the `langcheck` binary.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "langcheck", version, about = "Resolve, bind and type check source files")]
pub struct Options {
    /// Source files to check, each in a fresh session
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Print every top-level statement of a checked file with its bound type
    #[arg(long)]
    pub dump_types: bool,

    /// Keep going after a failing file and print every error at the end
    #[arg(long)]
    pub record_errors: bool,
}
