use super::*;
use crate::parser::ast::Node;
use expect_test::expect;

fn run(source: &str) -> Analysis {
    Analysis::run(source, &LexerConfig::default())
}

#[test]
fn valid_buffer_reports_valid_status() {
    let analysis = run("x = 1 + 2");
    assert!(analysis.is_valid());
    assert_eq!(analysis.status(), Status::Valid);
    assert_eq!(analysis.status().line(), "Syntax valid.");
    assert!(matches!(
        analysis.program().unwrap().statements[0],
        Node::Assignment { .. }
    ));
}

#[test]
fn empty_buffer_is_valid() {
    let analysis = run("");
    assert!(analysis.tokens.is_empty());
    assert_eq!(analysis.program().map(|p| p.statements.len()), Some(0));
}

#[test]
fn invalid_buffer_reports_positioned_status() {
    let analysis = run("if x > 0 { }");
    expect![[r#"Syntax error (line 1, column 3): Expected OPERATOR '(' but found IDENTIFIER 'x'"#]]
        .assert_eq(&analysis.status().line());
    match analysis.status() {
        Status::Invalid { underline, .. } => assert_eq!(
            underline,
            Some(Underline {
                line: 1,
                column: 3,
                length: 1,
            })
        ),
        Status::Valid => panic!("expected an invalid status"),
    }
}

#[test]
fn end_of_input_status_has_no_position() {
    let analysis = run("def f() {");
    expect![[r#"Syntax error: Expected OPERATOR '}' but found end of input"#]]
        .assert_eq(&analysis.status().line());
}

#[test]
fn highlights_follow_tokens() {
    let analysis = run("total = 10\nprint(total)");
    let highlights = analysis.highlights();
    assert_eq!(highlights.len(), 7);
    assert_eq!(
        highlights[3],
        Highlight {
            kind: TokenKind::Identifier,
            line: 2,
            column: 0,
            length: 5,
        }
    );
}

#[test]
fn trivia_is_highlighted_when_kept() {
    let config = LexerConfig {
        block_comments: true,
        keep_trivia: true,
    };
    let analysis = Analysis::run("x = 1 # one", &config);
    let comment = analysis
        .highlights()
        .into_iter()
        .find(|h| h.kind == TokenKind::Comment)
        .unwrap();
    assert_eq!((comment.line, comment.column, comment.length), (1, 6, 5));
    assert!(analysis.is_valid());
}

#[test]
fn multiline_tokens_highlight_their_first_line() {
    let config = LexerConfig {
        block_comments: true,
        keep_trivia: true,
    };
    let analysis = Analysis::run("s = \"ab\ncd\"\n/* one\ntwo */", &config);
    let highlights = analysis.highlights();

    let string = highlights
        .iter()
        .find(|h| h.kind == TokenKind::String)
        .unwrap();
    assert_eq!((string.line, string.column, string.length), (1, 4, 3));

    let comment = highlights
        .iter()
        .find(|h| h.kind == TokenKind::BlockComment)
        .unwrap();
    assert_eq!((comment.line, comment.column, comment.length), (3, 0, 6));
    assert!(analysis.is_valid());
}

#[test]
fn reruns_are_identical() {
    let source = "for (i in range(3)) { total += i * 2 }\nif (total) { ok = 1 } else { ok = 0 }";
    assert_eq!(run(source), run(source));

    let broken = "while (x { }";
    assert_eq!(run(broken), run(broken));
}

#[test]
fn status_serializes_with_tag() {
    let json = serde_json::to_string(&run("x =").status()).unwrap();
    expect![[r#"{"status":"invalid","message":"Unexpected end of input, expected an expression","line":null,"column":null,"underline":null}"#]]
        .assert_eq(&json);
}
