use std::fmt;

/// Named buckets of word tags and phrase labels a user can include or exclude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PosClass {
    Untagged,
    Nouns,
    Pronouns,
    Verbs,
    Adverbs,
    Adjectives,
    Prepositions,
    Miscellaneous,
}

impl PosClass {
    /// Prompt order.
    pub const ALL: [PosClass; 8] = [
        PosClass::Untagged,
        PosClass::Nouns,
        PosClass::Pronouns,
        PosClass::Verbs,
        PosClass::Adverbs,
        PosClass::Adjectives,
        PosClass::Prepositions,
        PosClass::Miscellaneous,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PosClass::Untagged => "untagged words",
            PosClass::Nouns => "nouns",
            PosClass::Pronouns => "pronouns",
            PosClass::Verbs => "verbs",
            PosClass::Adverbs => "adverbs",
            PosClass::Adjectives => "adjectives",
            PosClass::Prepositions => "prepositions",
            PosClass::Miscellaneous => "miscellaneous words",
        }
    }

    /// Tags and phrase labels belonging to this class. `Untagged` and
    /// `Miscellaneous` own no tags; they are resolved in [`PosClass::classify`].
    pub fn tags(&self) -> &'static [&'static str] {
        match self {
            PosClass::Nouns => &["NP", "NX", "NN", "NNS", "NNP", "NNPS"],
            PosClass::Pronouns => &["PRP", "PRP$", "WP", "WP$"],
            PosClass::Verbs => &["VP", "VB", "VBD", "VBG", "VBN", "VBP", "VBZ"],
            PosClass::Adverbs => &[
                "ADVP", "WHADVP", "RB", "RBR", "RBS", "ADV", "-BNF", "-DIR", "-EXT", "-LOC",
                "-MNR", "-PRP", "-TMP",
            ],
            PosClass::Adjectives => &["ADJP", "WHADJP", "JJ", "JJR", "JJS"],
            PosClass::Prepositions => &["PP", "WHPP", "IN"],
            PosClass::Untagged | PosClass::Miscellaneous => &[],
        }
    }

    /// The class a tag falls into. A missing tag is `Untagged`; a tag no
    /// class lists is `Miscellaneous`.
    pub fn classify(tag: Option<&str>) -> PosClass {
        let Some(tag) = tag else {
            return PosClass::Untagged;
        };
        PosClass::ALL
            .into_iter()
            .find(|class| class.tags().contains(&tag))
            .unwrap_or(PosClass::Miscellaneous)
    }
}

impl fmt::Display for PosClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
