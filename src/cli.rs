use clap::Parser;
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  mintree docs/source.tex ../MyApp        Write a subfile chapter for ../MyApp
  mintree --standalone listing.tex src    Write a self-contained article";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "mintree",
    version,
    about = "Generate a LaTeX folder-tree figure and minted listings for a source directory",
    after_help = EXAMPLES
)]
pub struct Args {
    /// LaTeX file to write
    pub output: PathBuf,

    /// Directory containing the source code to document
    pub source_dir: PathBuf,

    /// Emit a self-contained article instead of a subfiles chapter
    #[arg(long = "standalone")]
    pub standalone: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        if self.quiet {
            self.verbose = 0;
        }
        self
    }
}
