//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// Logseq namespace converter CLI.
#[derive(Parser, Debug)]
#[command(
    name = "logseq-folders",
    version,
    about = "Convert Logseq namespace pages into nested folders",
    long_about = "A CLI tool that renames flat Logseq pages encoding hierarchy with the\n\
                  '___' separator (foo___bar.md) into real nested folders (foo/bar.md).\n\n\
                  Files are moved in-place inside the given directory.",
    after_help = "Examples:\n  \
                  logseq-folders ~/logseq/pages\n  \
                  logseq-folders ./exported-pages"
)]
pub struct Args {
    /// Directory containing the Logseq pages to convert.
    pub directory: PathBuf,

    /// Skip the interactive confirmation prompt.
    #[arg(short = 'y', long = "yes")]
    pub assume_yes: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}
