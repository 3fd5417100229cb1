use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Assigns a Penn Treebank tag to a lowercased word, or `None` when the word
/// is unknown to the model.
pub trait Tagger {
    fn tag(&self, word: &str) -> Option<String>;
}

/// Unigram tagger over a built-in lexicon, backed off to affix rules.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconTagger;

static LEXICON: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    log::debug!("building tagger lexicon");
    let mut lexicon = HashMap::new();
    for &(tag, words) in LEXICON_ENTRIES {
        for word in words.split_whitespace() {
            lexicon.entry(word).or_insert(tag);
        }
    }
    log::debug!("tagger lexicon holds {} words", lexicon.len());
    lexicon
});

// Earlier rows win when a word appears twice.
const LEXICON_ENTRIES: &[(&str, &str)] = &[
    ("DT", "the a an this that these those every each some any no another all both either neither"),
    ("PRP", "i me you he him she her it we us they them myself yourself himself herself itself ourselves themselves one's"),
    ("PRP$", "my your his its our their"),
    ("WP", "who whom what whoever whatever"),
    ("WP$", "whose"),
    ("WDT", "which"),
    ("WRB", "when where why how"),
    ("EX", "there's"),
    ("TO", "to"),
    ("CC", "and or but nor yet so"),
    ("MD", "can could will would shall should may might must cannot"),
    ("IN", "in on at of for with by from about into over under after before between through during without within against among across behind beyond near since until upon toward towards around above below beside despite like than because although though while if unless whether as onto off"),
    ("RB", "not very also just only now then there here often always never sometimes really quite too again still already soon almost perhaps well even ever rather away back together maybe instead later once anyway"),
    ("VB", "be do say go get make know think take see come want look use find give tell work seem feel try leave call keep let begin show hear play run move live believe bring happen write sit stand lose pay meet include continue set learn change lead understand watch follow stop create speak read allow add spend grow open walk win offer remember love consider appear buy wait serve die send expect build stay fall cut reach kill remain need help"),
    ("VBZ", "is has does says goes gets makes knows thinks takes sees comes wants looks uses finds gives tells works seems feels tries"),
    ("VBP", "am are have"),
    ("VBD", "was were had did said went got knew thought took saw came wanted made found gave told felt tried left called kept began showed heard ran brought wrote sat stood lost paid met led understood spoke grew won bought sent built fell"),
    ("VBN", "been done gone known taken seen given shown written"),
    ("VBG", "being having doing saying going getting making"),
    ("JJ", "good new first last long great little own other old right big high different small large next early young important few public bad same able happy sad beautiful free full real sure whole true clear hard easy strong late possible special hot cold dark red blue green white black simple cheap quick slow soft warm"),
    ("JJR", "better worse more less bigger smaller larger older younger higher lower"),
    ("JJS", "best worst most least biggest smallest largest oldest highest lowest"),
    ("NN", "time year way day man thing world life hand part child woman place work week case point government company number group problem fact eye home water room mother father friend house book car cat dog tree garden city country school money night morning food family story word question head side kind area end business game music tea coffee light"),
    ("NNS", "people men women children years days things hands parts places weeks cases eyes books cars cats dogs trees words questions"),
    ("CD", "zero two three four five six seven eight nine ten eleven twelve twenty hundred thousand million"),
    ("UH", "oh yes hello hey wow"),
];

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "able", "ible", "ive", "less", "ical", "ish", "ic", "al"];
const NOUN_SUFFIXES: &[&str] = &["tion", "sion", "ness", "ment", "ity", "ance", "ence", "ship", "ism", "ist", "er", "or"];

impl LexiconTagger {
    pub fn new() -> Self {
        Self
    }

    /// Affix rules for words missing from the lexicon.
    fn backoff(word: &str) -> Option<&'static str> {
        if word.chars().any(|c| c.is_ascii_digit())
            && word.chars().all(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '%'))
        {
            return Some("CD");
        }
        let has = |suffix: &str| word.len() >= suffix.len() + 2 && word.ends_with(suffix);
        if has("ly") {
            return Some("RB");
        }
        if has("ing") {
            return Some("VBG");
        }
        if has("ed") {
            return Some("VBD");
        }
        if ADJECTIVE_SUFFIXES.iter().any(|s| has(s)) {
            return Some("JJ");
        }
        if NOUN_SUFFIXES.iter().any(|s| has(s)) {
            return Some("NN");
        }
        if has("s") && !word.ends_with("ss") && !word.ends_with("us") {
            let singular = &word[..word.len() - 1];
            if matches!(LEXICON.get(singular), Some(&"NN")) || Self::backoff(singular) == Some("NN") {
                return Some("NNS");
            }
        }
        None
    }
}

impl Tagger for LexiconTagger {
    fn tag(&self, word: &str) -> Option<String> {
        LEXICON
            .get(word)
            .copied()
            .or_else(|| Self::backoff(word))
            .map(str::to_string)
    }
}

/// Returns true if the tag belongs to the noun family (NN, NNS, NNP, NNPS).
pub fn is_noun(tag: &str) -> bool {
    tag.starts_with("NN")
}

pub fn is_verb(tag: &str) -> bool {
    tag.starts_with("VB")
}

pub fn is_adjective(tag: &str) -> bool {
    tag.starts_with("JJ")
}

pub fn is_adverb(tag: &str) -> bool {
    tag.starts_with("RB")
}
