//! Property-based tests for the lexer, parser and counter

use proptest::prelude::*;
use texcount::tex::ast::{snapshot_from_document, AstSnapshot};
use texcount::tex::lexing::collect_tokens;
use texcount::tex::token::TokenKind;
use texcount::{count_words, parse, CountOptions, Document};

/// Strings over an alphabet rich in structural characters
fn tex_like_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-zA-Z0-9]{1,6}",
            Just(" ".to_string()),
            Just("\n".to_string()),
            Just("\t".to_string()),
            Just("\\".to_string()),
            Just("{".to_string()),
            Just("}".to_string()),
            Just("[".to_string()),
            Just("]".to_string()),
            Just("$".to_string()),
            Just("%".to_string()),
            Just("^".to_string()),
            Just("_".to_string()),
            Just("&".to_string()),
            Just("é".to_string()),
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

/// Math cannot nest and `$$` alone opens display math, so math bodies stay flat and non-empty
fn math_body() -> impl Strategy<Value = String> {
    "[a-z]{1,3}( ?[-+=^_] ?[a-z0-9]){0,3}"
}

/// Well-formed documents built from balanced pieces
fn balanced_strategy() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        "[a-z]{1,5}( [a-z]{1,5}){0,3}",
        "\\\\[a-z]{1,5}",
        Just("\\&".to_string()),
        Just("%note\n".to_string()),
        Just(" & ".to_string()),
        Just("\n".to_string()),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        let body = prop::collection::vec(inner, 0..4).prop_map(|parts| parts.concat());
        prop_oneof![
            body.clone().prop_map(|b| format!("{{{}}}", b)),
            body.clone().prop_map(|b| format!("[{}]", b)),
            body.clone().prop_map(|b| format!("\\emph{{{}}}", b)),
            body.prop_map(|b| format!("\\begin{{env}}{}\\end{{env}}", b)),
            math_body().prop_map(|b| format!("${}$", b)),
            math_body().prop_map(|b| format!("$${}$$", b)),
        ]
    })
}

fn options() -> CountOptions {
    CountOptions::new()
        .include_macro_arguments("emph")
        .exclude_environment("env")
        .macro_as_word("LaTeX")
}

proptest! {
    #[test]
    fn test_one_token_per_character(source in tex_like_strategy()) {
        let tokens = collect_tokens(&source);
        prop_assert_eq!(tokens.len(), source.chars().count() + 1);

        for (token, (offset, c)) in tokens.iter().zip(source.char_indices()) {
            prop_assert_eq!(token.offset, offset);
            prop_assert_eq!(token.character(), c);
        }

        let last = tokens.last().expect("sentinel");
        prop_assert_eq!(last.kind, TokenKind::EndOfStream);
        prop_assert_eq!(last.offset, source.len());
    }

    #[test]
    fn test_parser_never_panics(source in tex_like_strategy()) {
        if let Err(error) = parse(&source) {
            prop_assert!(error.offset <= source.len());
            let _ = error.render(&source);
        }
    }

    #[test]
    fn test_balanced_documents_parse(source in balanced_strategy()) {
        prop_assert!(parse(&source).is_ok(), "{:?}", source);
    }

    #[test]
    fn test_counting_is_deterministic(source in balanced_strategy()) {
        let first = parse(&source).expect("balanced source");
        let second = parse(&source).expect("balanced source");
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(count_words(&first, &options()), count_words(&second, &options()));
    }

    #[test]
    fn test_snapshot_round_trip(source in balanced_strategy()) {
        let document = parse(&source).expect("balanced source");
        let json = serde_json::to_string(&snapshot_from_document(&document)).expect("json");
        let snapshot: AstSnapshot = serde_json::from_str(&json).expect("snapshot");
        let rebuilt = Document::try_from(&snapshot).expect("rebuild");

        prop_assert_eq!(&rebuilt, &document);
        prop_assert_eq!(count_words(&rebuilt, &options()), count_words(&document, &options()));
    }

    #[test]
    fn test_plain_text_counts_like_split_whitespace(source in "[a-z \t\n]{0,60}") {
        let document = parse(&source).expect("plain text");
        prop_assert_eq!(
            count_words(&document, &CountOptions::default()),
            source.split_whitespace().count()
        );
    }
}
