use vocab_harvest::analyzer::*;

fn mk_tokens(terms: &[&str]) -> Vec<TextToken> {
    terms
        .iter()
        .enumerate()
        .map(|(pos, term)| TextToken {
            term: (*term).to_string(),
            pos,
            clause_end: false,
        })
        .collect()
}

fn terms(tokens: &[TextToken]) -> Vec<String> {
    tokens.iter().map(|t| t.term.clone()).collect()
}

// CharacterFilter Tests

#[cfg(test)]
mod character_filter_tests {
    use super::*;

    mod html_tag_filter {
        use super::*;

        #[test]
        fn test_empty_string() {
            let filter = HTMLTagFilter;
            let result = filter.filter("".to_string());
            assert_eq!(result, "");
        }

        #[test]
        fn test_plain_text_no_html() {
            let filter = HTMLTagFilter;
            let result = filter.filter("Hello World".to_string());
            assert_eq!(result.trim(), "Hello World.");
        }

        #[test]
        fn test_nested_html() {
            let filter = HTMLTagFilter;
            let html = "<div><p>Hello <span>World</span></p></div>".to_string();
            let result = filter.filter(html);
            assert_eq!(result.trim(), "Hello World.");
        }

        #[test]
        fn test_removes_script_and_style_tags() {
            let filter = HTMLTagFilter;
            let html = "<p>Before</p><script>alert('evil')</script><style>body { color: red; }</style><p>After</p>"
                .to_string();
            let result = filter.filter(html);
            assert!(!result.contains("alert"));
            assert!(!result.contains("color"));
            assert!(result.contains("Before"));
            assert!(result.contains("After"));
        }

        #[test]
        fn test_removes_navigation() {
            let filter = HTMLTagFilter;
            let html = r#"<div class="NAVBAR">Menu</div><p>Content</p>"#.to_string();
            let result = filter.filter(html);
            assert!(!result.contains("Menu"));
            assert!(result.contains("Content"));
        }

        #[test]
        fn test_sections_keep_document_order() {
            let filter = HTMLTagFilter;
            let html = "<body><p>Intro text</p><h2>Roses</h2><p>Prune roses</p></body>".to_string();
            let result = filter.filter(html);
            let lines: Vec<&str> = result.lines().collect();
            assert_eq!(lines, vec!["Intro text.", "Roses.", "Prune roses."]);
        }

        #[test]
        fn test_link_urls_do_not_hide_text() {
            let filter = HTMLTagFilter;
            let html = r#"<p>Read the <a href="/downloads/guide">pruning guide</a> today</p>"#.to_string();
            let result = filter.filter(html);
            assert_eq!(result, "Read the pruning guide today.");
        }

        #[test]
        fn test_keeps_title_and_headings() {
            let filter = HTMLTagFilter;
            let html = "<html><head><title>Garden Notes</title></head><body><h2>Roses</h2><p>Prune in spring.</p></body></html>"
                .to_string();
            let result = filter.filter(html);
            let lines: Vec<&str> = result.lines().collect();
            assert_eq!(lines, vec!["Garden Notes.", "Roses.", "Prune in spring."]);
        }

        #[test]
        fn test_complex_real_world_html() {
            let filter = HTMLTagFilter;
            let html = r#"
                <!DOCTYPE html>
                <html>
                <head>
                    <title>Test Page</title>
                    <style>body { background: blue; }</style>
                </head>
                <body>
                    <header class="site-header">
                        <nav class="navbar">
                            <a href="/">Home</a>
                        </nav>
                    </header>
                    <main>
                        <article>
                            <h1>Main Article Title</h1>
                            <p>This is the main content that should be extracted.</p>
                            <p>Another paragraph with <strong>important</strong> information.</p>
                        </article>
                        <aside class="sidebar">
                            <div class="ads">Advertisement here</div>
                        </aside>
                    </main>
                    <footer class="site-footer">
                        <p>Copyright 2024</p>
                    </footer>
                    <script>
                        console.log('tracking code');
                    </script>
                </body>
                </html>
            "#
            .to_string();
            let result = filter.filter(html);

            assert!(result.contains("Test Page"));
            assert!(result.contains("Main Article Title"));
            assert!(result.contains("This is the main content"));
            assert!(result.contains("important"));

            assert!(!result.contains("Home"));
            assert!(!result.contains("Advertisement"));
            assert!(!result.contains("Copyright"));
            assert!(!result.contains("tracking code"));
            assert!(!result.contains("background"));
        }
    }

    mod lowercase_filter {
        use super::*;

        #[test]
        fn test_lowercases_unicode() {
            let result = LowerCaseCharFilter.filter("The ÉCOLE Garden".to_string());
            assert_eq!(result, "the école garden");
        }
    }
}

// Tokenizer Tests

#[cfg(test)]
mod tokenizer_tests {
    use super::*;

    #[test]
    fn test_empty_string() {
        let result = WhiteSpaceTokenizer.tokenize("".to_string());
        assert!(result.is_empty());
    }

    #[test]
    fn test_mixed_whitespace_types() {
        let result = WhiteSpaceTokenizer.tokenize("a\tb\nc\rd \n\t e".to_string());
        assert_eq!(result, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_punctuation_preserved() {
        let result = WhiteSpaceTokenizer.tokenize("hello, world!".to_string());
        assert_eq!(result, vec!["hello,", "world!"]);
    }
}

// TokenFilter Tests

#[cfg(test)]
mod token_filter_tests {
    use super::*;

    mod punctuation_strip_filter {
        use super::*;

        #[test]
        fn test_deletes_every_listed_character() {
            let all: String = CHARS_TO_DELETE.iter().collect();
            let term = format!("a{all}b");
            let tokens = mk_tokens(&[term.as_str()]);
            let result = PunctuationStripFilter.filter(tokens);
            assert_eq!(terms(&result), vec!["ab"]);
        }

        #[test]
        fn test_keeps_apostrophes_and_other_symbols() {
            let tokens = mk_tokens(&["don't", "it’s", "a&b", "#tag", "50%"]);
            let result = PunctuationStripFilter.filter(tokens);
            assert_eq!(terms(&result), vec!["don't", "it’s", "a&b", "#tag", "50%"]);
        }

        #[test]
        fn test_drops_tokens_left_empty() {
            let tokens = mk_tokens(&["—", "...", "garden", "“”", "-"]);
            let result = PunctuationStripFilter.filter(tokens);
            assert_eq!(terms(&result), vec!["garden"]);
        }

        #[test]
        fn test_positions_are_kept() {
            let tokens = mk_tokens(&["—", "garden"]);
            let result = PunctuationStripFilter.filter(tokens);
            assert_eq!(result[0].pos, 1);
        }

        #[test]
        fn test_marks_clause_ends() {
            let tokens = mk_tokens(&["roses,", "tulips;", "lilies", "daisies?\"", "moss"]);
            let result = PunctuationStripFilter.filter(tokens);
            let ends: Vec<bool> = result.iter().map(|t| t.clause_end).collect();
            assert_eq!(ends, vec![true, true, false, true, false]);
            assert_eq!(result[1].term, "tulips;");
        }
    }

    mod punctuation_only_filter {
        use super::*;

        #[test]
        fn test_drops_ascii_punctuation_runs() {
            let tokens = mk_tokens(&["'", "&&", "/", "*", "garden", "'tis"]);
            let result = PunctuationOnlyFilter.filter(tokens);
            assert_eq!(terms(&result), vec!["garden", "'tis"]);
        }
    }

    mod stop_word_filter {
        use super::*;

        #[test]
        fn test_removes_common_words() {
            let tokens = mk_tokens(&["the", "garden", "and", "of", "roses"]);
            let result = StopWordTokenFilter.filter(tokens);
            assert_eq!(terms(&result), vec!["garden", "roses"]);
        }

        #[test]
        fn test_removes_contractions_in_both_spellings() {
            let tokens = mk_tokens(&["she'll", "she’ll", "you're", "you’re", "garden"]);
            let result = StopWordTokenFilter.filter(tokens);
            assert_eq!(terms(&result), vec!["garden"]);
        }

        #[test]
        fn test_is_case_sensitive() {
            // lowercasing happens earlier in the pipeline
            let tokens = mk_tokens(&["The"]);
            let result = StopWordTokenFilter.filter(tokens);
            assert_eq!(terms(&result), vec!["The"]);
        }
    }
}

// Full pipeline Tests

#[cfg(test)]
mod text_analyzer_tests {
    use super::*;

    #[test]
    fn test_words_pipeline() {
        let analyzer = TextAnalyzer::words(false);
        let text = "The Roses — and the ROSES! — grew (slowly) by the wooden fence.".to_string();
        let tokens = analyzer.analyze(text);
        let result = terms(&tokens);
        assert!(result.contains(&"roses".to_string()));
        assert!(result.contains(&"wooden".to_string()));
        assert!(result.contains(&"fence".to_string()));
        assert_eq!(result.iter().filter(|t| *t == "roses").count(), 2);
        assert!(!result.contains(&"the".to_string()));
        assert!(!result.iter().any(|t| t.contains(['(', ')', '!', '—'])));
    }

    #[test]
    fn test_words_pipeline_keeps_content_words() {
        let analyzer = TextAnalyzer::words(false);
        let tokens =
            analyzer.analyze("The old house is great; new work at home matters to the world.".to_string());
        let result = terms(&tokens);
        for word in ["old", "house", "new", "work", "home", "matters", "world"] {
            assert!(result.contains(&word.to_string()), "{word} was dropped from {result:?}");
        }
        for word in ["the", "is", "at", "to"] {
            assert!(!result.contains(&word.to_string()), "{word} was kept");
        }
    }

    #[test]
    fn test_html_sections_end_clauses() {
        let analyzer = TextAnalyzer::phrases(true);
        let tokens = analyzer.analyze(
            "<title>Garden Notes</title><h2>Roses</h2><p>Prune roses</p><p>Tulips bloom</p>".to_string(),
        );
        assert_eq!(
            terms(&tokens),
            vec!["garden", "notes", "roses", "prune", "roses", "tulips", "bloom"]
        );
        let ends: Vec<bool> = tokens.iter().map(|t| t.clause_end).collect();
        assert_eq!(ends, vec![false, true, true, false, true, false, true]);
    }

    #[test]
    fn test_phrases_pipeline_marks_clauses() {
        let analyzer = TextAnalyzer::phrases(false);
        let tokens = analyzer.analyze("Roses grew. Tulips, however, did not".to_string());
        assert_eq!(
            terms(&tokens),
            vec!["roses", "grew", "tulips", "however", "did", "not"]
        );
        let ends: Vec<bool> = tokens.iter().map(|t| t.clause_end).collect();
        assert_eq!(ends, vec![false, true, true, true, false, false]);
    }

    #[test]
    fn test_html_pipeline() {
        let analyzer = TextAnalyzer::words(true);
        let tokens = analyzer.analyze(
            "<html><body><nav class=\"menu\">Garden Shop</nav><p>Roses and tulips</p></body></html>"
                .to_string(),
        );
        assert_eq!(terms(&tokens), vec!["roses", "tulips"]);
    }
}
