//! CLI entry point for image-colored maze generation

use clap::Parser;
use mazetint::io::cli::{Cli, FileProcessor};

fn main() -> mazetint::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
