//! Phrase chunking over tagged words.
//!
//! Patterns, tried in order at each position of a clause:
//! - PP: IN followed by an NP
//! - NP: (DT|PRP$)? (JJ|CD)* (NN*)+
//! - ADJP: JJ+
//! - VP: MD? VB+
//! - ADVP: RB+
//!
//! A word that starts none of these becomes a single-word chunk labelled
//! with its own tag. The leading determiner of a bare NP is not kept in the
//! chunk text.

use crate::analyzer::is_stop_word;
use crate::tagger::{is_adjective, is_adverb, is_noun, is_verb};
use crate::tokens::{Chunk, TaggedWord};

#[derive(Debug, Default, Clone, Copy)]
pub struct PhraseChunker;

fn tag_of(word: &TaggedWord) -> &str {
    word.tag.as_deref().unwrap_or("")
}

fn is_determiner(tag: &str) -> bool {
    tag == "DT" || tag == "PRP$"
}

impl PhraseChunker {
    pub fn new() -> Self {
        Self
    }

    /// Chunks every clause separately, so no chunk spans a clause boundary.
    /// Chunks made only of stop words are dropped.
    pub fn chunk(&self, clauses: &[Vec<TaggedWord>]) -> Vec<Chunk> {
        clauses
            .iter()
            .flat_map(|clause| self.chunk_clause(clause))
            .filter(|chunk| !chunk.text.split(' ').all(is_stop_word))
            .collect()
    }

    pub fn chunk_clause(&self, words: &[TaggedWord]) -> Vec<Chunk> {
        let mut chunks = Vec::new();
        let mut i = 0;
        while i < words.len() {
            match self.match_phrase(words, i) {
                Some((label, text_start, end)) => {
                    chunks.push(Chunk::new(join(&words[text_start..end]), Some(label.to_string())));
                    i = end;
                }
                None => {
                    chunks.push(Chunk::new(words[i].text.clone(), words[i].tag.clone()));
                    i += 1;
                }
            }
        }
        chunks
    }

    /// Returns (label, first word kept in the text, end) for a phrase starting at `start`.
    fn match_phrase(&self, words: &[TaggedWord], start: usize) -> Option<(&'static str, usize, usize)> {
        if tag_of(&words[start]) == "IN" {
            if let Some((_, end)) = Self::match_noun_phrase(words, start + 1) {
                return Some(("PP", start, end));
            }
        }
        if let Some((text_start, end)) = Self::match_noun_phrase(words, start) {
            return Some(("NP", text_start, end));
        }
        let run = |from: usize, pred: fn(&str) -> bool| {
            words[from..].iter().take_while(|w| pred(tag_of(w))).count()
        };
        let adjectives = run(start, is_adjective);
        if adjectives > 0 {
            return Some(("ADJP", start, start + adjectives));
        }
        let verb_start = if tag_of(&words[start]) == "MD" { start + 1 } else { start };
        if verb_start < words.len() {
            let verbs = run(verb_start, is_verb);
            if verbs > 0 {
                return Some(("VP", start, verb_start + verbs));
            }
        }
        let adverbs = run(start, is_adverb);
        if adverbs > 0 {
            return Some(("ADVP", start, start + adverbs));
        }
        None
    }

    /// Returns (text start, end) of an NP starting at `start`.
    fn match_noun_phrase(words: &[TaggedWord], start: usize) -> Option<(usize, usize)> {
        let mut j = start;
        let mut text_start = start;
        if j < words.len() && is_determiner(tag_of(&words[j])) {
            j += 1;
            text_start = j;
        }
        while j < words.len() && (is_adjective(tag_of(&words[j])) || tag_of(&words[j]) == "CD") {
            j += 1;
        }
        let nouns_start = j;
        while j < words.len() && is_noun(tag_of(&words[j])) {
            j += 1;
        }
        (j > nouns_start).then_some((text_start, j))
    }
}

fn join(words: &[TaggedWord]) -> String {
    words
        .iter()
        .map(|w| w.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
