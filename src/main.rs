//! CLI entry point for filling clock face image placeholders

use clap::Parser;
use clockface::io::cli::{Cli, FileProcessor};

fn main() -> clockface::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()?;
    Ok(())
}
