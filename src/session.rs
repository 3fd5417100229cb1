use std::io::{BufRead, Write};

use crate::cli::Job;
use crate::config::Config;
use crate::error::Result;
use crate::frequency::{FilterState, FrequencyTable};
use crate::loader::{is_html, load_text};
use crate::refine::RefinementLoop;
use crate::tokens::TokenizerAdapter;
use crate::writer::write_tokens;

/// Load, tokenize, refine interactively, then write the committed tokens.
/// Fails before prompting if the source cannot be read.
pub fn run<R: BufRead, W: Write>(
    job: &Job,
    config: &Config,
    input: R,
    mut output: W,
) -> Result<Vec<String>> {
    let text = load_text(&job.source)?;

    writeln!(output, "Tagging {}...", job.mode)?;
    let adapter = TokenizerAdapter::new().html(is_html(&job.source));
    let stream = adapter.tokenize(text, job.mode);

    let (_, units) = stream.unit_names();
    let overall = FrequencyTable::unfiltered(&stream);
    writeln!(
        output,
        "\nFrequency analysis has found {} unique {} of potential interest\nout of a total of {}.",
        overall.distinct(),
        units,
        overall.total()
    )?;

    let mut refinement = RefinementLoop::new(&stream, FilterState::from_config(config), input, output);
    let selection = refinement.run()?;

    write_tokens(&job.destination, &selection)?;
    let mut output = refinement.into_output();
    writeln!(
        output,
        "{} {} successfully saved to {}",
        selection.len(),
        units,
        job.destination.display()
    )?;
    Ok(selection)
}
