use std::collections::{BTreeMap, HashMap};

use thiserror::Error;

use crate::config::Config;
use crate::pos::PosClass;
use crate::tokens::TokenStream;

/// Filter edits the refinement loop refuses. State is left untouched when one is returned.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FilterError {
    #[error("Minimum length can't exceed maximum!")]
    MinExceedsMax,
    #[error("Maximum length cannot be less than minimum!")]
    MaxBelowMin,
    #[error("At least one token must be selected.")]
    ZeroLimit,
    #[error("Error: you must include at least one class of POS tags.")]
    NoPosClass,
}

/// The user's current selection criteria.
///
/// Invariants: `min_length <= max_length`, `token_count_limit >= 1`, and at
/// least one POS class is enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    token_count_limit: usize,
    min_length: usize,
    max_length: usize,
    pos_classes: BTreeMap<PosClass, bool>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl FilterState {
    pub fn from_config(config: &Config) -> Self {
        // Config::from_lookup validates these; clamp anything built by hand.
        Self {
            token_count_limit: config.token_limit.max(1),
            min_length: config.min_length.min(config.max_length),
            max_length: config.max_length,
            pos_classes: PosClass::ALL.into_iter().map(|c| (c, true)).collect(),
        }
    }

    pub fn token_count_limit(&self) -> usize {
        self.token_count_limit
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn set_token_count_limit(&mut self, limit: usize) -> Result<(), FilterError> {
        if limit == 0 {
            return Err(FilterError::ZeroLimit);
        }
        self.token_count_limit = limit;
        Ok(())
    }

    pub fn set_min_length(&mut self, min_length: usize) -> Result<(), FilterError> {
        if min_length > self.max_length {
            return Err(FilterError::MinExceedsMax);
        }
        self.min_length = min_length;
        Ok(())
    }

    pub fn set_max_length(&mut self, max_length: usize) -> Result<(), FilterError> {
        if max_length < self.min_length {
            return Err(FilterError::MaxBelowMin);
        }
        self.max_length = max_length;
        Ok(())
    }

    /// Replaces the whole class selection. Classes missing from `classes`
    /// are disabled.
    pub fn set_pos_classes(&mut self, classes: &BTreeMap<PosClass, bool>) -> Result<(), FilterError> {
        let selection: BTreeMap<PosClass, bool> = PosClass::ALL
            .into_iter()
            .map(|c| (c, classes.get(&c).copied().unwrap_or(false)))
            .collect();
        if !selection.values().any(|enabled| *enabled) {
            return Err(FilterError::NoPosClass);
        }
        self.pos_classes = selection;
        Ok(())
    }

    pub fn is_enabled(&self, class: PosClass) -> bool {
        self.pos_classes.get(&class).copied().unwrap_or(false)
    }

    pub fn all_classes_enabled(&self) -> bool {
        self.pos_classes.values().all(|enabled| *enabled)
    }

    pub fn included_classes(&self) -> Vec<PosClass> {
        PosClass::ALL.into_iter().filter(|c| self.is_enabled(*c)).collect()
    }

    pub fn excluded_classes(&self) -> Vec<PosClass> {
        PosClass::ALL.into_iter().filter(|c| !self.is_enabled(*c)).collect()
    }

    /// Whether a token with this tag survives the class selection. A token
    /// matching no enabled class falls through to miscellaneous.
    pub fn admits(&self, tag: Option<&str>) -> bool {
        self.is_enabled(PosClass::classify(tag)) || self.is_enabled(PosClass::Miscellaneous)
    }

    /// Inclusive at both bounds, measured in characters.
    pub fn length_in_bounds(&self, token: &str) -> bool {
        let len = token.chars().count();
        self.min_length <= len && len <= self.max_length
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyEntry {
    pub token: String,
    pub count: usize,
}

/// Distinct tokens with their counts, most frequent first, ties in order of
/// first appearance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
    total: usize,
}

impl FrequencyTable {
    /// Counts every token with no filter applied.
    pub fn unfiltered(stream: &TokenStream) -> Self {
        Self::count(stream.iter().map(|(text, _)| text))
    }

    /// Filters the original stream by class and length, then counts.
    /// Always derive from the tokenizer output, never from a previous selection.
    pub fn build(stream: &TokenStream, state: &FilterState) -> Self {
        let pos_active = stream.mode_supports_pos_filter() && !state.all_classes_enabled();
        let table = Self::count(
            stream
                .iter()
                .filter(|(_, tag)| !pos_active || state.admits(*tag))
                .filter(|(text, _)| state.length_in_bounds(text))
                .map(|(text, _)| text),
        );
        log::debug!(
            "frequency table rebuilt: {} distinct of {} tokens (pos filter active: {})",
            table.distinct(),
            table.total(),
            pos_active
        );
        table
    }

    fn count<'a, I>(tokens: I) -> Self
    where
        I: Iterator<Item = &'a str>,
    {
        let mut index: HashMap<&'a str, usize> = HashMap::new();
        let mut entries: Vec<FrequencyEntry> = Vec::new();
        let mut total = 0usize;
        for token in tokens {
            total += 1;
            match index.get(token) {
                Some(&i) => entries[i].count += 1,
                None => {
                    index.insert(token, entries.len());
                    entries.push(FrequencyEntry {
                        token: token.to_string(),
                        count: 1,
                    });
                }
            }
        }
        // sort_by is stable, so equal counts keep discovery order
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        Self { entries, total }
    }

    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    /// Number of distinct tokens.
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    /// Number of tokens counted, duplicates included.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn count_of(&self, token: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| e.token == token)
            .map(|e| e.count)
    }

    /// The `limit` most frequent tokens.
    pub fn selection(&self, limit: usize) -> Vec<String> {
        self.entries
            .iter()
            .take(limit)
            .map(|e| e.token.clone())
            .collect()
    }
}
