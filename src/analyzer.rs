use html5ever::tendril::TendrilSink;
use html5ever::{Attribute, LocalName, parse_document};
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use std::cell::RefCell;
use std::collections::HashSet;
use std::sync::OnceLock;

static STOP_WORDS: OnceLock<HashSet<String>> = OnceLock::new();

/// Contractions the stop word list misses, in straight and curly spellings.
const ADDITIONAL_STOPS: &[&str] = &[
    "it's", "i'm", "i'll", "i'd", "i've", "it’s", "i’m", "i’ll", "i’d", "i’ve", "he's", "he'd",
    "he'll", "he’s", "he’d", "he’ll", "she's", "she'd", "she'll", "she’s", "she’d", "she’ll",
    "you're", "you'd", "you've", "you’re", "you’d", "you’ve",
];

/// Characters deleted from inside every token.
pub const CHARS_TO_DELETE: &[char] = &[
    '"', ',', '.', '?', ':', '(', ')', '[', ']', '<', '>', '~', '!', '–', '-', '•', '—', '“', '”',
    '…', '_',
];

const CLAUSE_MARKS: &[char] = &['.', ',', '?', '!', ':', ';', '…'];
const CLOSING_WRAPPERS: &[char] = &['"', '”', '’', '\'', ')', ']', '>'];

pub fn get_stop_words() -> &'static HashSet<String> {
    STOP_WORDS.get_or_init(|| {
        stop_words::get(stop_words::LANGUAGE::English)
            .into_iter()
            .map(|x| x.to_string())
            .chain(ADDITIONAL_STOPS.iter().map(|x| x.to_string()))
            .collect()
    })
}

pub fn is_stop_word(term: &str) -> bool {
    get_stop_words().contains(term)
}

/// Readable text of a document, one section per title, heading or block, in
/// document order.
#[derive(Clone, Default, Debug)]
pub struct ExtractedText {
    sections: Vec<String>,
}

impl ExtractedText {
    fn start_section(&mut self) {
        if self.sections.last().is_none_or(|last| !last.is_empty()) {
            self.sections.push(String::new());
        }
    }

    fn push_text(&mut self, s: &str) {
        match self.sections.last_mut() {
            Some(last) => push_spaced(last, s),
            None => self.sections.push(s.to_string()),
        }
    }

    /// One section per line. Every section ends a clause, so phrases and
    /// n-grams never run from one section into the next.
    pub fn joined(&self) -> String {
        self.sections
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| {
                if PunctuationStripFilter::closes_clause(s) {
                    s.to_string()
                } else {
                    format!("{s}.")
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A character filter receives the original text and may add, remove, or change characters
/// before it reaches the tokenizer.
pub trait CharacterFilter {
    fn filter(&self, text: String) -> String;
}

/// Strips markup from an HTML document, keeping title, headings and body text.
/// Scripts, styles and navigation-like blocks are skipped.
#[derive(Debug, Default)]
pub struct HTMLTagFilter;

impl HTMLTagFilter {
    pub fn get_dom(html: &str) -> RcDom {
        parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut std::io::Cursor::new(html))
            .unwrap_or_default()
    }

    /// Looks only at `class` and `id`, matching whole class names or their
    /// `-`/`_` separated parts, so "threads" or "downloads" never match "ads".
    pub fn has_boilerplate_class_or_id(attrs: &RefCell<Vec<Attribute>>) -> bool {
        const MARKERS: &[&str] = &[
            "nav", "navbar", "navigation", "menu", "sidebar", "footer", "header", "cookie",
            "banner", "promo", "ads", "advert", "breadcrumb",
        ];
        attrs
            .borrow()
            .iter()
            .filter(|attr| matches!(&*attr.name.local, "class" | "id"))
            .any(|attr| {
                attr.value
                    .to_lowercase()
                    .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
                    .any(|part| MARKERS.contains(&part))
            })
    }

    /// Elements whose text forms a section of its own.
    pub fn is_section(local: &LocalName) -> bool {
        matches!(
            &**local,
            "title"
                | "h1"
                | "h2"
                | "h3"
                | "h4"
                | "h5"
                | "h6"
                | "p"
                | "div"
                | "section"
                | "article"
                | "main"
                | "aside"
                | "blockquote"
                | "pre"
                | "li"
                | "ul"
                | "ol"
                | "dt"
                | "dd"
                | "table"
                | "tr"
                | "td"
                | "th"
                | "caption"
                | "figcaption"
                | "header"
                | "footer"
                | "br"
        )
    }

    pub fn walk_html(handle: &Handle, out: &mut ExtractedText) {
        match &handle.data {
            NodeData::Text { contents } => {
                let s = contents.borrow();
                let s = s.trim();
                if !s.is_empty() {
                    // Inline text (links included) reads as part of the surrounding sentence.
                    out.push_text(s);
                }
            }
            NodeData::Element { name, attrs, .. } => {
                let local = &name.local;

                if matches!(&**local, "script" | "style" | "noscript") {
                    return;
                }
                if Self::has_boilerplate_class_or_id(attrs) {
                    return;
                }

                let section = Self::is_section(local);
                if section {
                    out.start_section();
                }
                for child in handle.children.borrow().iter() {
                    Self::walk_html(child, out);
                }
                if section {
                    out.start_section();
                }
            }
            _ => {
                for child in handle.children.borrow().iter() {
                    Self::walk_html(child, out);
                }
            }
        }
    }

    pub fn extract(html: &str) -> ExtractedText {
        let dom = Self::get_dom(html);
        let mut out = ExtractedText::default();
        Self::walk_html(&dom.document, &mut out);
        out
    }
}

fn push_spaced(target: &mut String, s: &str) {
    if !target.is_empty() {
        target.push(' ');
    }
    target.push_str(s);
}

impl CharacterFilter for HTMLTagFilter {
    fn filter(&self, html: String) -> String {
        Self::extract(&html).joined()
    }
}

pub struct LowerCaseCharFilter;

impl CharacterFilter for LowerCaseCharFilter {
    fn filter(&self, text: String) -> String {
        text.to_lowercase()
    }
}

/// A tokenizer breaks a stream of characters up into individual tokens.
/// For instance, a whitespace tokenizer converts "Quick brown fox!" into [Quick, brown, fox!].
pub trait Tokenizer {
    fn tokenize(&self, text: String) -> Vec<String>;
}

pub struct WhiteSpaceTokenizer;

impl Tokenizer for WhiteSpaceTokenizer {
    fn tokenize(&self, text: String) -> Vec<String> {
        text.split_whitespace()
            .map(|w| w.to_string())
            .collect::<Vec<String>>()
    }
}

/// A token filter receives the token stream and may add, remove, or change tokens.
pub trait TokenFilter {
    fn filter(&self, tokens: Vec<TextToken>) -> Vec<TextToken>;
}

/// Keeps tokens matching `keep`. A dropped token that closed a clause hands
/// the boundary to the previous surviving token.
fn retain_with_boundaries<F>(tokens: Vec<TextToken>, keep: F) -> Vec<TextToken>
where
    F: Fn(&TextToken) -> bool,
{
    let mut out: Vec<TextToken> = Vec::with_capacity(tokens.len());
    for token in tokens {
        if keep(&token) {
            out.push(token);
        } else if token.clause_end {
            if let Some(prev) = out.last_mut() {
                prev.clause_end = true;
            }
        }
    }
    out
}

/// Deletes [`CHARS_TO_DELETE`] from every token, records whether the token
/// closed a clause, and drops tokens left empty.
pub struct PunctuationStripFilter;

impl PunctuationStripFilter {
    pub fn closes_clause(term: &str) -> bool {
        term.trim_end_matches(CLOSING_WRAPPERS)
            .ends_with(CLAUSE_MARKS)
    }
}

impl TokenFilter for PunctuationStripFilter {
    fn filter(&self, tokens: Vec<TextToken>) -> Vec<TextToken> {
        let tokens = tokens
            .into_iter()
            .map(|mut token| {
                token.clause_end |= Self::closes_clause(&token.term);
                token.term.retain(|c| !CHARS_TO_DELETE.contains(&c));
                token
            })
            .collect();
        retain_with_boundaries(tokens, |t| !t.term.is_empty())
    }
}

/// Drops tokens made only of ASCII punctuation, such as "'" or "&".
pub struct PunctuationOnlyFilter;

impl TokenFilter for PunctuationOnlyFilter {
    fn filter(&self, tokens: Vec<TextToken>) -> Vec<TextToken> {
        retain_with_boundaries(tokens, |t| !t.term.chars().all(|c| c.is_ascii_punctuation()))
    }
}

pub struct StopWordTokenFilter;

impl TokenFilter for StopWordTokenFilter {
    fn filter(&self, tokens: Vec<TextToken>) -> Vec<TextToken> {
        retain_with_boundaries(tokens, |t| !is_stop_word(&t.term))
    }
}

/// Pure text analysis pipeline: character filters, then a tokenizer, then token filters.
pub struct TextAnalyzer {
    char_filters: Vec<Box<dyn CharacterFilter>>,
    tokenizer: Box<dyn Tokenizer>,
    token_filters: Vec<Box<dyn TokenFilter>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextToken {
    pub term: String,
    pub pos: usize,
    /// True when a clause-closing mark followed this token in the source.
    pub clause_end: bool,
}

impl TextAnalyzer {
    pub fn new(
        char_filters: Vec<Box<dyn CharacterFilter>>,
        tokenizer: Box<dyn Tokenizer>,
        token_filters: Vec<Box<dyn TokenFilter>>,
    ) -> Self {
        Self {
            char_filters,
            tokenizer,
            token_filters,
        }
    }

    /// Lowercased, punctuation-stripped words with stop words removed.
    pub fn words(html: bool) -> Self {
        Self::new(
            Self::char_filters_for(html),
            Box::new(WhiteSpaceTokenizer),
            vec![
                Box::new(PunctuationStripFilter),
                Box::new(PunctuationOnlyFilter),
                Box::new(StopWordTokenFilter),
            ],
        )
    }

    /// Like [`TextAnalyzer::words`] but keeps stop words, which phrase
    /// grouping and n-grams need to see.
    pub fn phrases(html: bool) -> Self {
        Self::new(
            Self::char_filters_for(html),
            Box::new(WhiteSpaceTokenizer),
            vec![Box::new(PunctuationStripFilter), Box::new(PunctuationOnlyFilter)],
        )
    }

    fn char_filters_for(html: bool) -> Vec<Box<dyn CharacterFilter>> {
        let mut filters: Vec<Box<dyn CharacterFilter>> = Vec::new();
        if html {
            filters.push(Box::new(HTMLTagFilter));
        }
        filters.push(Box::new(LowerCaseCharFilter));
        filters
    }

    pub fn char_filter(&self, mut content: String) -> String {
        for filter in self.char_filters.iter() {
            content = filter.filter(content);
        }
        content
    }

    pub fn tokenize(&self, content: String) -> Vec<TextToken> {
        self.tokenizer
            .tokenize(content)
            .into_iter()
            .enumerate()
            .map(|(idx, term)| TextToken {
                term,
                pos: idx,
                clause_end: false,
            })
            .collect()
    }

    pub fn token_filter(&self, mut tokens: Vec<TextToken>) -> Vec<TextToken> {
        for filter in self.token_filters.iter() {
            tokens = filter.filter(tokens);
        }
        tokens
    }

    /// Analyzes raw content and returns a list of tokens
    pub fn analyze(&self, raw_content: String) -> Vec<TextToken> {
        let content = self.char_filter(raw_content);
        let tokens = self.tokenize(content);
        self.token_filter(tokens)
    }
}
