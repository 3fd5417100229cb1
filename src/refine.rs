//! Interactive refinement of the frequency selection.
//!
//! The loop owns the [`FilterState`]. Each edit re-derives the table from the
//! original token stream, then the current selection is shown again.

use std::collections::BTreeMap;
use std::io::{BufRead, Write};

use crate::error::{Result, VocabError};
use crate::frequency::{FilterState, FrequencyTable};
use crate::pos::PosClass;
use crate::tokens::TokenStream;
use crate::writer::{DISPLAY_WIDTH, wrap_for_display};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefineState {
    AwaitingCommand,
    EditingCount,
    EditingMinLength,
    EditingMaxLength,
    EditingPosFilter,
    Committed,
}

impl RefineState {
    pub fn is_editing(&self) -> bool {
        matches!(
            self,
            RefineState::EditingCount
                | RefineState::EditingMinLength
                | RefineState::EditingMaxLength
                | RefineState::EditingPosFilter
        )
    }
}

/// Single-character commands accepted at the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    MinLength,
    MaxLength,
    Count,
    PosFilter,
    Accept,
    Unknown(String),
}

impl Command {
    /// Case-insensitive; surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Command {
        let input = input.trim();
        match input.to_ascii_lowercase().as_str() {
            "m" => Command::MinLength,
            "x" => Command::MaxLength,
            "n" => Command::Count,
            "p" => Command::PosFilter,
            "a" => Command::Accept,
            _ => Command::Unknown(input.to_string()),
        }
    }
}

/// Line-oriented prompts over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Next line with surrounding whitespace removed.
    pub fn read_line(&mut self) -> Result<String> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(VocabError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Asks until a non-negative whole number is entered.
    pub fn int_prompt(&mut self, message: &str) -> Result<usize> {
        loop {
            self.say(message)?;
            let line = self.read_line()?;
            match line.parse::<usize>() {
                Ok(value) => return Ok(value),
                Err(_) => self.say("Input error: please enter a whole number.")?,
            }
        }
    }

    /// Asks until the answer is y, yes, n or no.
    pub fn yes_no_prompt(&mut self, message: &str) -> Result<bool> {
        loop {
            self.say(message)?;
            let line = self.read_line()?;
            match line.to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("Input error: please enter y or n.")?,
            }
        }
    }
}

pub struct RefinementLoop<'a, R, W> {
    stream: &'a TokenStream,
    state: FilterState,
    table: FrequencyTable,
    prompter: Prompter<R, W>,
    unit: &'static str,
    units: &'static str,
}

impl<'a, R: BufRead, W: Write> RefinementLoop<'a, R, W> {
    pub fn new(stream: &'a TokenStream, state: FilterState, input: R, output: W) -> Self {
        let (unit, units) = stream.unit_names();
        let table = FrequencyTable::build(stream, &state);
        Self {
            stream,
            state,
            table,
            prompter: Prompter::new(input, output),
            unit,
            units,
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn table(&self) -> &FrequencyTable {
        &self.table
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// The selection as it would be committed right now.
    pub fn selection(&self) -> Vec<String> {
        self.table.selection(self.state.token_count_limit())
    }

    /// Runs until the user accepts, returning the committed selection.
    pub fn run(&mut self) -> Result<Vec<String>> {
        let mut current = RefineState::AwaitingCommand;
        self.show_selection()?;
        while current != RefineState::Committed {
            let next = self.step(current)?;
            if current.is_editing() {
                self.table = FrequencyTable::build(self.stream, &self.state);
                self.show_selection()?;
            }
            current = next;
        }
        let selection = self.selection();
        log::info!("committed {} {}", selection.len(), self.units);
        Ok(selection)
    }

    /// Performs one state's work and returns the next state.
    pub fn step(&mut self, current: RefineState) -> Result<RefineState> {
        match current {
            RefineState::AwaitingCommand => self.await_command(),
            RefineState::EditingCount => {
                self.edit_count()?;
                Ok(RefineState::AwaitingCommand)
            }
            RefineState::EditingMinLength => {
                self.edit_min_length()?;
                Ok(RefineState::AwaitingCommand)
            }
            RefineState::EditingMaxLength => {
                self.edit_max_length()?;
                Ok(RefineState::AwaitingCommand)
            }
            RefineState::EditingPosFilter => {
                self.edit_pos_filter()?;
                Ok(RefineState::AwaitingCommand)
            }
            RefineState::Committed => Ok(RefineState::Committed),
        }
    }

    fn show_selection(&mut self) -> Result<()> {
        let mut intro = format!(
            "The {} most frequent {} are currently selected.\n\
             Selected {} are currently between {} and {} characters in length.\n",
            self.state.token_count_limit(),
            self.units,
            self.units,
            self.state.min_length(),
            self.state.max_length(),
        );
        if self.stream.mode_supports_pos_filter() {
            if self.state.all_classes_enabled() {
                intro.push_str("All parts-of-speech are included in the selection.\n");
            } else {
                intro.push_str(&format!(
                    "Parts-of-speech included in the selection:\n{}\n\
                     Parts-of-speech excluded from the selection:\n{}\n",
                    class_list(&self.state.included_classes()),
                    class_list(&self.state.excluded_classes()),
                ));
            }
        }
        intro.push_str(&format!(
            "Below are the selected {}, most frequent first:",
            self.units
        ));
        let selection = self.selection();
        self.prompter.say(&intro)?;
        self.prompter.say(&wrap_for_display(&selection, DISPLAY_WIDTH))?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        let (unit, units) = (self.unit, self.units);
        self.prompter
            .say(&format!("Enter M below to change the minimum {unit} length."))?;
        self.prompter
            .say(&format!("Enter X below to change the maximum {unit} length."))?;
        self.prompter
            .say(&format!("Enter N to change the total number of {units} selected."))?;
        if self.stream.mode_supports_pos_filter() {
            self.prompter
                .say("Enter P to restrict selection with part-of-speech tagging.")?;
        }
        self.prompter.say(&format!(
            "Enter A to accept the current list of {units} and continue."
        ))
    }

    fn await_command(&mut self) -> Result<RefineState> {
        self.print_menu()?;
        let line = self.prompter.read_line()?;
        let next = match Command::parse(&line) {
            Command::MinLength => RefineState::EditingMinLength,
            Command::MaxLength => RefineState::EditingMaxLength,
            Command::Count => RefineState::EditingCount,
            Command::PosFilter if self.stream.mode_supports_pos_filter() => {
                RefineState::EditingPosFilter
            }
            Command::PosFilter => {
                self.prompter.say(&format!(
                    "Part-of-speech filtering is not available for {}.",
                    self.units
                ))?;
                RefineState::AwaitingCommand
            }
            Command::Accept => RefineState::Committed,
            Command::Unknown(input) => {
                log::debug!("unrecognised command {input:?}");
                self.prompter.say("Input not recognised")?;
                RefineState::AwaitingCommand
            }
        };
        Ok(next)
    }

    fn edit_count(&mut self) -> Result<()> {
        let message = format!("\nHow many {} do you want selected?", self.units);
        loop {
            let value = self.prompter.int_prompt(&message)?;
            match self.state.set_token_count_limit(value) {
                Ok(()) => return Ok(()),
                Err(e) => self.prompter.say(&e.to_string())?,
            }
        }
    }

    fn edit_min_length(&mut self) -> Result<()> {
        let message = format!("\nEnter a new minimum {} length...", self.unit);
        loop {
            let value = self.prompter.int_prompt(&message)?;
            match self.state.set_min_length(value) {
                Ok(()) => return Ok(()),
                Err(e) => self.prompter.say(&e.to_string())?,
            }
        }
    }

    fn edit_max_length(&mut self) -> Result<()> {
        let message = format!("\nEnter a new maximum {} length...", self.unit);
        loop {
            let value = self.prompter.int_prompt(&message)?;
            match self.state.set_max_length(value) {
                Ok(()) => return Ok(()),
                Err(e) => self.prompter.say(&e.to_string())?,
            }
        }
    }

    /// Asks about every class in turn; starts over if none was included.
    fn edit_pos_filter(&mut self) -> Result<()> {
        loop {
            let mut classes = BTreeMap::new();
            for class in PosClass::ALL {
                let include = self
                    .prompter
                    .yes_no_prompt(&format!("Do you want to include {class}? (y/n)"))?;
                classes.insert(class, include);
            }
            match self.state.set_pos_classes(&classes) {
                Ok(()) => return Ok(()),
                Err(e) => {
                    self.prompter.say(&e.to_string())?;
                    self.prompter.say("Restarting selection...\n")?;
                }
            }
        }
    }
}

fn class_list(classes: &[PosClass]) -> String {
    classes
        .iter()
        .map(|c| c.name())
        .collect::<Vec<_>>()
        .join(", ")
}
