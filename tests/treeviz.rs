//! Treeviz rendering snapshots

use texcount::tex::formats::{render, to_treeviz_str, OutputFormat};
use texcount::{parse, CountOptions};

#[test]
fn test_treeviz_document() {
    let source = "\\section{Intro}\nHello\\,world.\n\\begin{itemize}\n\\item[a]{b}\n\\end{itemize}\n$$x^{2}$$";
    let document = parse(source).expect("parse");

    insta::assert_snapshot!(to_treeviz_str(&document), @r"
    ⧉ 6 node(s)
    ├─ λ section
    │ └─ ⟨⟩ mandatory
    │   └─ ◦ Intro
    ├─ ◦ Hello
    ├─ ⧵ ,
    ├─ ◦ world.↵
    ├─ ≡ itemize
    │ └─ λ item
    │   ├─ ⟨⟩ optional
    │   │ └─ ◦ a
    │   └─ ⟨⟩ mandatory
    │     └─ ◦ b
    └─ ∑ $$
      ├─ ◦ x
      └─ ⇅ ^
        └─ ◦ 2
    ");
}

#[test]
fn test_treeviz_truncates_long_text() {
    let output = render(
        "A sentence that is much longer than thirty characters",
        OutputFormat::AstTreeviz,
        &CountOptions::default(),
    )
    .expect("render");

    insta::assert_snapshot!(output, @r"
    ⧉ 1 node(s)
    └─ ◦ A sentence that is much longer...
    ");
}
