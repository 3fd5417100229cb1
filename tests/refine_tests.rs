use std::io::Cursor;

use vocab_harvest::VocabError;
use vocab_harvest::frequency::FilterState;
use vocab_harvest::pos::PosClass;
use vocab_harvest::refine::{RefineState, RefinementLoop};
use vocab_harvest::tokens::{Chunk, TaggedWord, TokenStream};

mod test_helpers {
    use super::*;

    pub fn words(tokens: &[(&str, Option<&str>)]) -> TokenStream {
        TokenStream::Words(
            tokens
                .iter()
                .map(|(t, tag)| TaggedWord::new(*t, tag.map(str::to_string)))
                .collect(),
        )
    }

    /// a:5, b:3, c:1
    pub fn abc_stream() -> TokenStream {
        let mut tokens = Vec::new();
        tokens.extend(std::iter::repeat_n(("a", Some("NN")), 5));
        tokens.extend(std::iter::repeat_n(("b", Some("VB")), 3));
        tokens.push(("c", None));
        words(&tokens)
    }

    pub fn garden_stream() -> TokenStream {
        words(&[
            ("cat", Some("NN")),
            ("cat", Some("NN")),
            ("dog", Some("NN")),
            ("elephant", Some("NN")),
            ("painted", Some("VBD")),
            ("snusnu", None),
        ])
    }

    /// Runs a scripted session and returns (selection, final state, transcript).
    pub fn session(
        stream: &TokenStream,
        script: &str,
    ) -> (Result<Vec<String>, VocabError>, FilterState, String) {
        let mut refinement = RefinementLoop::new(
            stream,
            FilterState::default(),
            Cursor::new(script.to_string()),
            Vec::new(),
        );
        let result = refinement.run();
        let state = refinement.state().clone();
        let transcript = String::from_utf8(refinement.into_output()).unwrap();
        (result, state, transcript)
    }
}

use test_helpers::*;

#[test]
fn test_accept_immediately_returns_default_selection() {
    let (result, state, transcript) = session(&abc_stream(), "a\n");
    assert_eq!(result.unwrap(), vec!["a", "b", "c"]);
    assert_eq!(state, FilterState::default());
    assert!(transcript.contains("The 100 most frequent words are currently selected."));
    assert!(transcript.contains("between 0 and 16 characters"));
    assert!(transcript.contains("All parts-of-speech are included in the selection."));
    assert!(transcript.contains("a, b, c"));
}

#[test]
fn test_count_limit_truncates_commit() {
    let (result, state, _) = session(&abc_stream(), "n\n2\nA\n");
    assert_eq!(result.unwrap(), vec!["a", "b"]);
    assert_eq!(state.token_count_limit(), 2);
}

#[test]
fn test_count_rejects_zero_and_garbage() {
    let (result, state, transcript) = session(&abc_stream(), "n\n0\ntwo\n1\na\n");
    assert_eq!(result.unwrap(), vec!["a"]);
    assert_eq!(state.token_count_limit(), 1);
    assert!(transcript.contains("At least one token must be selected."));
    assert!(transcript.contains("please enter a whole number"));
}

#[test]
fn test_length_edits_filter_from_original_tokens() {
    let (result, state, _) = session(&garden_stream(), "m\n3\nx\n5\na\n");
    assert_eq!(result.unwrap(), vec!["cat", "dog"]);
    assert_eq!(state.min_length(), 3);
    assert_eq!(state.max_length(), 5);
}

#[test]
fn test_min_above_max_is_rejected_and_reprompted() {
    let (result, state, transcript) = session(&garden_stream(), "m\n20\n4\na\n");
    assert!(transcript.contains("Minimum length can't exceed maximum!"));
    assert_eq!(state.min_length(), 4);
    assert_eq!(state.max_length(), 16);
    assert!(state.min_length() <= state.max_length());
    assert_eq!(result.unwrap(), vec!["elephant", "painted", "snusnu"]);
}

#[test]
fn test_max_below_min_is_rejected_and_reprompted() {
    let (_, state, transcript) = session(&garden_stream(), "m\n5\nx\n3\n8\na\n");
    assert!(transcript.contains("Maximum length cannot be less than minimum!"));
    assert_eq!(state.min_length(), 5);
    assert_eq!(state.max_length(), 8);
}

#[test]
fn test_pos_filter_keeps_only_enabled_classes() {
    // untagged, nouns, pronouns, verbs, adverbs, adjectives, prepositions, misc
    let script = "p\nn\ny\nn\nn\nn\nn\nn\nn\na\n";
    let (result, state, transcript) = session(&garden_stream(), script);
    assert_eq!(result.unwrap(), vec!["cat", "dog", "elephant"]);
    assert_eq!(state.included_classes(), vec![PosClass::Nouns]);
    assert!(transcript.contains("Parts-of-speech included in the selection:\nnouns\n"));
    assert!(transcript.contains("Do you want to include untagged words? (y/n)"));
}

#[test]
fn test_pos_filter_requires_one_class() {
    let all_no = "n\n".repeat(8);
    let script = format!("p\n{all_no}y\nn\nn\nn\nn\nn\nn\nn\na\n");
    let (result, state, transcript) = session(&garden_stream(), &script);
    assert!(transcript.contains("Error: you must include at least one class of POS tags."));
    assert!(transcript.contains("Restarting selection..."));
    assert_eq!(state.included_classes(), vec![PosClass::Untagged]);
    assert_eq!(result.unwrap(), vec!["snusnu"]);
}

#[test]
fn test_unknown_command_changes_nothing() {
    let (result, state, transcript) = session(&abc_stream(), "z\n\nhelp\na\n");
    assert_eq!(transcript.matches("Input not recognised").count(), 3);
    assert_eq!(state, FilterState::default());
    assert_eq!(result.unwrap(), vec!["a", "b", "c"]);
}

#[test]
fn test_ngrams_refuse_pos_filter() {
    let stream = TokenStream::NGrams(vec!["red gate".to_string(), "red gate".to_string()]);
    let (result, state, transcript) = session(&stream, "p\na\n");
    assert!(transcript.contains("Part-of-speech filtering is not available for n-grams."));
    assert!(!transcript.contains("Enter P"));
    assert!(state.all_classes_enabled());
    assert_eq!(result.unwrap(), vec!["red gate"]);
}

#[test]
fn test_chunks_filter_by_phrase_label() {
    let stream = TokenStream::Chunks(vec![
        Chunk::new("old garden", Some("NP".to_string())),
        Chunk::new("was painted", Some("VP".to_string())),
        Chunk::new("old garden", Some("NP".to_string())),
    ]);
    // verbs only
    let script = "p\nn\nn\nn\ny\nn\nn\nn\nn\na\n";
    let (result, _, transcript) = session(&stream, script);
    assert!(transcript.contains("most frequent chunks"));
    assert_eq!(result.unwrap(), vec!["was painted"]);
}

#[test]
fn test_closed_input_stops_the_loop() {
    let (result, _, _) = session(&abc_stream(), "m\n");
    assert!(matches!(result, Err(VocabError::InputClosed)));
}

#[test]
fn test_step_transitions() {
    let stream = abc_stream();
    let mut refinement =
        RefinementLoop::new(&stream, FilterState::default(), Cursor::new("x\n9\n"), Vec::new());
    let next = refinement.step(RefineState::AwaitingCommand).unwrap();
    assert_eq!(next, RefineState::EditingMaxLength);
    let next = refinement.step(next).unwrap();
    assert_eq!(next, RefineState::AwaitingCommand);
    assert_eq!(refinement.state().max_length(), 9);
    assert_eq!(
        refinement.step(RefineState::Committed).unwrap(),
        RefineState::Committed
    );
}

#[test]
fn test_invariants_hold_over_many_edits() {
    let script = "m\n10\nx\n2\n12\nm\n13\n12\nx\n0\n12\np\n".to_string()
        + &"n\n".repeat(16)
        + "n\ny\nn\nn\nn\nn\nn\nn\na\n";
    let (result, state, _) = session(&garden_stream(), &script);
    assert!(result.is_ok());
    assert!(state.min_length() <= state.max_length());
    assert_eq!(state.min_length(), 12);
    assert_eq!(state.max_length(), 12);
    assert!(!state.included_classes().is_empty());
}
