use std::fmt;

use crate::analyzer::{TextAnalyzer, TextToken, is_stop_word};
use crate::chunker::PhraseChunker;
use crate::tagger::{LexiconTagger, Tagger};

/// How the source text is cut into units of analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Words,
    Chunks,
    NGrams(usize),
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Words => write!(f, "words"),
            Mode::Chunks => write!(f, "chunks"),
            Mode::NGrams(n) => write!(f, "{n}-grams"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedWord {
    pub text: String,
    pub tag: Option<String>,
}

impl TaggedWord {
    pub fn new(text: impl Into<String>, tag: Option<String>) -> Self {
        Self {
            text: text.into(),
            tag,
        }
    }
}

/// A phrase flattened into one unit. `label` is the phrase label, or the
/// word's own tag for a word outside any phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub text: String,
    pub label: Option<String>,
}

impl Chunk {
    pub fn new(text: impl Into<String>, label: Option<String>) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

/// Anything the frequency table can count.
pub trait Classified {
    fn text(&self) -> &str;
    fn tag(&self) -> Option<&str>;
}

impl Classified for TaggedWord {
    fn text(&self) -> &str {
        &self.text
    }

    fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }
}

impl Classified for Chunk {
    fn text(&self) -> &str {
        &self.text
    }

    fn tag(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl Classified for String {
    fn text(&self) -> &str {
        self
    }

    fn tag(&self) -> Option<&str> {
        None
    }
}

/// Tokenizer output, one variant per mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenStream {
    Words(Vec<TaggedWord>),
    Chunks(Vec<Chunk>),
    NGrams(Vec<String>),
}

impl TokenStream {
    /// N-grams carry no tag, so part-of-speech filtering does not apply to them.
    pub fn mode_supports_pos_filter(&self) -> bool {
        !matches!(self, TokenStream::NGrams(_))
    }

    /// Singular and plural names of the unit, for prompts.
    pub fn unit_names(&self) -> (&'static str, &'static str) {
        match self {
            TokenStream::Words(_) => ("word", "words"),
            TokenStream::Chunks(_) => ("chunk", "chunks"),
            TokenStream::NGrams(_) => ("n-gram", "n-grams"),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            TokenStream::Words(t) => t.len(),
            TokenStream::Chunks(t) => t.len(),
            TokenStream::NGrams(t) => t.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Visits every token in source order as (text, tag).
    pub fn iter(&self) -> Box<dyn Iterator<Item = (&str, Option<&str>)> + '_> {
        fn pairs<T: Classified>(tokens: &[T]) -> impl Iterator<Item = (&str, Option<&str>)> {
            tokens.iter().map(|t| (t.text(), t.tag()))
        }
        match self {
            TokenStream::Words(t) => Box::new(pairs(t)),
            TokenStream::Chunks(t) => Box::new(pairs(t)),
            TokenStream::NGrams(t) => Box::new(pairs(t)),
        }
    }
}

/// Groups analyzed tokens into clauses, splitting after every clause-closing token.
pub fn clauses(tokens: &[TextToken]) -> Vec<&[TextToken]> {
    tokens
        .split_inclusive(|t| t.clause_end)
        .filter(|c| !c.is_empty())
        .collect()
}

/// Contiguous runs of `n` words inside each clause, joined by one space.
/// Runs made only of stop words are skipped.
pub fn ngrams(tokens: &[TextToken], n: usize) -> Vec<String> {
    if n == 0 {
        return Vec::new();
    }
    clauses(tokens)
        .into_iter()
        .flat_map(|clause| clause.windows(n))
        .filter(|window| !window.iter().all(|t| is_stop_word(&t.term)))
        .map(|window| {
            window
                .iter()
                .map(|t| t.term.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Turns raw text into a [`TokenStream`] for the requested mode.
pub struct TokenizerAdapter<T: Tagger = LexiconTagger> {
    tagger: T,
    chunker: PhraseChunker,
    html: bool,
}

impl TokenizerAdapter<LexiconTagger> {
    pub fn new() -> Self {
        Self::with_tagger(LexiconTagger::new())
    }
}

impl Default for TokenizerAdapter<LexiconTagger> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Tagger> TokenizerAdapter<T> {
    pub fn with_tagger(tagger: T) -> Self {
        Self {
            tagger,
            chunker: PhraseChunker::new(),
            html: false,
        }
    }

    /// Treat input as an HTML document and strip its markup first.
    pub fn html(mut self, html: bool) -> Self {
        self.html = html;
        self
    }

    fn tag(&self, tokens: &[TextToken]) -> Vec<TaggedWord> {
        tokens
            .iter()
            .map(|t| TaggedWord::new(t.term.clone(), self.tagger.tag(&t.term)))
            .collect()
    }

    pub fn tokenize(&self, text: String, mode: Mode) -> TokenStream {
        let stream = match mode {
            Mode::Words => {
                let tokens = TextAnalyzer::words(self.html).analyze(text);
                TokenStream::Words(self.tag(&tokens))
            }
            Mode::Chunks => {
                let tokens = TextAnalyzer::phrases(self.html).analyze(text);
                let tagged: Vec<Vec<TaggedWord>> =
                    clauses(&tokens).into_iter().map(|c| self.tag(c)).collect();
                TokenStream::Chunks(self.chunker.chunk(&tagged))
            }
            Mode::NGrams(n) => {
                let tokens = TextAnalyzer::phrases(self.html).analyze(text);
                TokenStream::NGrams(ngrams(&tokens, n))
            }
        };
        log::info!("tokenized source into {} {}", stream.len(), mode);
        stream
    }
}
