use clap::error::ErrorKind;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::tokens::Mode;

#[derive(Parser, Debug)]
#[command(
    name = "vocab-harvest",
    version,
    about = "Derives a ranked token list from an arbitrary text and writes the chosen tokens to a file"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct PathArgs {
    /// Path to the source text (e.g. "in.txt"); .html/.htm files have their markup stripped
    pub source: PathBuf,
    /// Path to the destination file (e.g. "out.txt"); a .json extension writes a JSON array
    pub destination: PathBuf,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Derives tokens from a text based on word frequency analysis
    Freq(PathArgs),
    /// Derives tokens from a text based on phrase chunk frequency analysis
    Chunks(PathArgs),
    /// Derives tokens from a text based on n-gram frequency analysis
    Ngrams {
        /// Number of words per n-gram
        #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..))]
        n: u32,
        #[command(flatten)]
        paths: PathArgs,
    },
}

/// One unit of work: what to read, how to cut it, where to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub mode: Mode,
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Freq(_) => "freq",
            Commands::Chunks(_) => "chunks",
            Commands::Ngrams { .. } => "ngrams",
        }
    }

    pub fn into_job(self) -> Job {
        let (mode, paths) = match self {
            Commands::Freq(paths) => (Mode::Words, paths),
            Commands::Chunks(paths) => (Mode::Chunks, paths),
            Commands::Ngrams { n, paths } => (Mode::NGrams(n as usize), paths),
        };
        Job {
            mode,
            source: paths.source,
            destination: paths.destination,
        }
    }
}

/// Whether a parse error should be followed by the list of supported
/// subcommands: a wrong or missing subcommand, or the wrong number of paths.
/// A bare invocation already renders the full help.
pub fn lists_subcommands(err: &clap::Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::InvalidSubcommand
            | ErrorKind::MissingSubcommand
            | ErrorKind::MissingRequiredArgument
            | ErrorKind::UnknownArgument
            | ErrorKind::TooManyValues
    )
}
