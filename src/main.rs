use anyhow::Context;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::io;

use vocab_harvest::cli::{Cli, lists_subcommands};
use vocab_harvest::config::Config;
use vocab_harvest::{VocabError, session};

fn init_logging(level: &str) -> anyhow::Result<()> {
    let level = level.parse::<tracing::Level>().unwrap_or(tracing::Level::WARN);
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(true)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Bridge log crate -> tracing (so log::info! etc. work)
    tracing_log::LogTracer::init()?;
    Ok(())
}

/// Prints a clap error, then the subcommand list when the subcommand or its arguments were wrong.
fn report_usage(err: clap::Error) -> io::Result<()> {
    err.print()?;
    if lists_subcommands(&err) {
        println!();
        Cli::command().print_help()?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    init_logging(&config.log_level)?;

    println!("This is vocab-harvest: a utility for deriving token lists from arbitrary texts.\n");

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            return Ok(());
        }
        Err(err) => {
            report_usage(err)?;
            println!("Quitting...");
            return Ok(());
        }
    };

    println!(
        "You ran vocab-harvest with the command argument: {}",
        cli.command.name()
    );
    let job = cli.command.into_job();

    let stdin = io::stdin();
    match session::run(&job, &config, stdin.lock(), io::stdout()) {
        Ok(_) => Ok(()),
        Err(VocabError::InputClosed) => {
            println!("\nQuitting...");
            Ok(())
        }
        Err(e) => Err(e).with_context(|| format!("could not process {}", job.source.display())),
    }
}
