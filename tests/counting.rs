//! Word counting integration tests

use rstest::rstest;
use texcount::{count_source, CountOptions};

/// The rule set shipped as the configuration defaults
fn standard() -> CountOptions {
    CountOptions::new()
        .exclude_environments(["equation", "equation*", "align", "align*"])
        .include_arguments_of([
            "textbf",
            "textit",
            "texttt",
            "emph",
            "caption",
            "section",
            "subsection",
            "subsubsection",
            "paragraph",
            "subparagraph",
        ])
        .macros_as_words(["TeX", "LaTeX"])
}

fn count(source: &str, options: &CountOptions) -> usize {
    count_source(source, options)
        .unwrap_or_else(|error| panic!("{:?} failed:\n{}", source, error.render(source)))
}

#[rstest]
#[case("this is a test", 4, 4)]
#[case("this is the 2nd test", 5, 5)]
#[case("", 0, 0)]
#[case("   ", 0, 0)]
#[case("a\n\nb", 2, 2)]
#[case("\\test{x}{y}", 0, 0)]
#[case("a \\test", 1, 1)]
#[case("\\begin{test}two words\\end{test}", 2, 2)]
#[case("\\textbf{bold words} and \\cite{key}", 1, 3)]
#[case("\\section[short]{A long title}", 0, 4)]
#[case("\\LaTeX{} and \\TeX", 1, 3)]
#[case("\\begin{equation}x = y\\end{equation} after", 4, 1)]
#[case("\\begin{align*}x&=y\\end{align*}", 2, 0)]
#[case("$a + b$ and $$c + d$$", 4, 4)]
#[case("x^{super script} y_z", 5, 5)]
#[case("\\footnote{not counted} yes", 1, 1)]
#[case("{grouped words} [and more]", 4, 4)]
#[case("one & two \\\\ three", 3, 3)]
#[case("\\emph{nested \\textbf{bold \\cite{k}} words}", 0, 3)]
#[case("\\begin{itemize}\\item one\\item two three\\end{itemize}", 3, 3)]
fn test_counts(#[case] source: &str, #[case] bare: usize, #[case] with_defaults: usize) {
    assert_eq!(count(source, &CountOptions::default()), bare, "bare: {:?}", source);
    assert_eq!(count(source, &standard()), with_defaults, "defaults: {:?}", source);
}

#[test]
fn test_include_macro_arguments() {
    let source = "\\test{x}{y}";
    assert_eq!(count(source, &CountOptions::new()), 0);
    assert_eq!(
        count(source, &CountOptions::new().include_macro_arguments("test")),
        2
    );
}

#[test]
fn test_macro_as_word() {
    let source = "a \\test";
    assert_eq!(count(source, &CountOptions::new()), 1);
    assert_eq!(count(source, &CountOptions::new().macro_as_word("test")), 2);
}

#[test]
fn test_exclude_environment() {
    let source = "\\begin{test}two words\\end{test}";
    assert_eq!(count(source, &CountOptions::new()), 2);
    assert_eq!(
        count(source, &CountOptions::new().exclude_environment("test")),
        0
    );
}

#[test]
fn test_excluded_environment_hides_nested_content() {
    let source = "\\begin{proof}\\begin{quote}deep words\\end{quote}\\end{proof} shown";
    let options = CountOptions::new().exclude_environment("proof");
    assert_eq!(count(source, &options), 1);
}

#[test]
fn test_fixture_document() {
    let source = include_str!("fixtures/article.tex");
    assert_eq!(count(source, &CountOptions::default()), 57);
    assert_eq!(count(source, &standard()), 54);
}
