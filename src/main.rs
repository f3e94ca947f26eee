//! CLI entry point for the spot pattern renderer

use clap::Parser;
use spotgen::io::cli::{Cli, RenderProcessor};
use spotgen::io::logging::init_logging;

// Written paths go to stdout so they can be piped
#[allow(clippy::print_stdout)]
fn main() -> spotgen::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    let quiet = cli.quiet;
    let mut processor = RenderProcessor::new(cli);
    let written = processor.process()?;

    if !quiet {
        for path in written {
            println!("{}", path.display());
        }
    }
    Ok(())
}
