//! Inline math: `\( … \)`.

use math_syntax::{math_constructs, resolve_inline, MathOptions, INLINE_MATH};
use scan_framework::{
    validate_balanced, ContentType, DefaultContext, Event, Item, Recognized, ScanContext,
    Scanner, TokenKind, Unit,
};

fn scanner(input: &str) -> Scanner<DefaultContext> {
    let table = math_constructs(&MathOptions::default()).unwrap();
    Scanner::new(DefaultContext::new(input), table)
}

fn recognize(input: &str) -> Option<Recognized> {
    scanner(input).scan_construct(ContentType::Text)
}

/// Enter events as `(kind, text)`.
fn tokens<'a>(source: &'a str, events: &[Event]) -> Vec<(TokenKind, &'a str)> {
    events
        .iter()
        .filter(|event| event.is_enter())
        .map(|event| (event.kind(), event.span.slice(source)))
        .collect()
}

#[test]
fn test_simple() {
    let source = r"\(x^2\)";
    let recognized = recognize(source).unwrap();
    assert_eq!(recognized.name, INLINE_MATH);
    assert_eq!(
        tokens(source, &recognized.events),
        vec![
            (TokenKind::MathContainer, r"\(x^2\)"),
            (TokenKind::FenceSequence, r"\("),
            (TokenKind::TextData, "x^2"),
            (TokenKind::FenceSequence, r"\)"),
        ]
    );
    assert!(validate_balanced(&recognized.events).is_ok());
}

#[test]
fn test_padding_symmetry() {
    let source = r"\( a \)";
    let recognized = recognize(source).unwrap();
    assert_eq!(
        tokens(source, &recognized.events)[2..5],
        [
            (TokenKind::TextPadding, " "),
            (TokenKind::TextData, "a"),
            (TokenKind::TextPadding, " "),
        ]
    );
}

#[test]
fn test_all_spaces_are_not_padding() {
    let source = r"\(   \)";
    let recognized = recognize(source).unwrap();
    let kinds = tokens(source, &recognized.events);
    assert!(kinds.iter().all(|(kind, _)| *kind != TokenKind::TextPadding));
    assert!(kinds.contains(&(TokenKind::Whitespace, "   ")));
}

#[test]
fn test_run_merging() {
    let source = r"\(a  b\)";
    let recognized = recognize(source).unwrap();
    assert_eq!(
        tokens(source, &recognized.events)[2],
        (TokenKind::TextData, "a  b")
    );
}

#[test]
fn test_line_ending_is_not_merged() {
    let source = "\\(a\nb\\)";
    let recognized = recognize(source).unwrap();
    assert_eq!(
        tokens(source, &recognized.events)[2..5],
        [
            (TokenKind::TextData, "a"),
            (TokenKind::LineEnding, "\n"),
            (TokenKind::TextData, "b"),
        ]
    );
}

#[test]
fn test_backslash_inside_is_data() {
    let source = r"\(\alpha + \beta\)";
    let recognized = recognize(source).unwrap();
    assert_eq!(
        tokens(source, &recognized.events)[2],
        (TokenKind::TextData, r"\alpha + \beta")
    );
}

#[test]
fn test_escaped_close_still_closes_on_paren() {
    let source = r"\(a\\)";
    let recognized = recognize(source).unwrap();
    assert_eq!(
        tokens(source, &recognized.events)[2..],
        [
            (TokenKind::TextData, r"a\"),
            (TokenKind::FenceSequence, r"\)"),
        ]
    );
}

#[test]
fn test_empty() {
    let source = r"\(\)";
    let recognized = recognize(source).unwrap();
    assert_eq!(recognized.events.len(), 6);
    assert!(validate_balanced(&recognized.events).is_ok());
}

#[test]
fn test_stops_after_first_close() {
    let source = r"\(a\) and \(b\)";
    let mut scanner = scanner(source);
    let recognized = scanner.scan_construct(ContentType::Text).unwrap();
    assert_eq!(recognized.end().unwrap().offset, 5);
    assert_eq!(scanner.context().cursor().offset(), 5);
}

#[test]
fn test_strict_termination() {
    for source in [r"\(a", r"\(a\", "\\(a\n", r"\(", r"\(a\]"] {
        let mut scanner = scanner(source);
        assert!(
            scanner.scan_construct(ContentType::Text).is_none(),
            "{source:?}"
        );
        assert_eq!(scanner.context().cursor().offset(), 0, "{source:?}");
        assert!(scanner.context().sink().is_empty(), "{source:?}");
    }
}

#[test]
fn test_wrong_opener() {
    assert!(recognize(r"\[a\)").is_none());
    assert!(recognize(r"\ (a\)").is_none());
}

#[test]
fn test_escaped_backslash_precondition() {
    let source = r"\(a\)";
    let mut scanner = scanner(&format!("\\\\{source}"));
    // Skip the escape `\\` by hand, as the host would.
    scanner.context_mut().consume();
    scanner.context_mut().consume();
    scanner
        .context_mut()
        .set_previous_unit(Some(Unit::CharacterEscape));
    assert!(scanner.scan_construct(ContentType::Text).is_none());

    // The same backslash as plain text does not block the construct.
    scanner.context_mut().set_previous_unit(Some(Unit::Text));
    assert!(scanner.scan_construct(ContentType::Text).is_some());
}

#[test]
fn test_scan_text_respects_escapes() {
    let source = r"\\\(a\) \*\(b\)";
    let items = scanner(source).scan_text();

    let names: Vec<_> = items
        .iter()
        .map(|item| match item {
            Item::Construct(recognized) => recognized.name,
            Item::Escape(_) => "escape",
            Item::Text(_) => "text",
            Item::Line(_) | Item::Blank(_) => "line",
        })
        .collect();
    // `\\` escapes a backslash, so `\(` right after it is an escape too.
    assert_eq!(
        names,
        vec!["escape", "escape", "text", "escape", "text", "escape", INLINE_MATH]
    );
}

#[test]
fn test_resolver_idempotent_on_real_runs() {
    for source in [
        r"\( a \)",
        r"\(  a  b  \)",
        "\\(\n\na\n\n\\)",
        r"\(   \)",
        r"\(\)",
        "\\( a\nb \\)",
        "\\(\n \n\\)",
        "\\( \n \\)",
        "\\(\n  \n\\)",
    ] {
        let recognized = recognize(source).unwrap();
        let again = resolve_inline(recognized.events.clone());
        assert_eq!(again, recognized.events, "{source:?}");
        assert!(validate_balanced(&again).is_ok(), "{source:?}");
    }
}

#[test]
fn test_spaces_between_line_endings_are_not_content() {
    let source = "\\(\n \n\\)";
    let recognized = recognize(source).unwrap();
    assert_eq!(
        tokens(source, &recognized.events)[2..5],
        [
            (TokenKind::LineEnding, "\n"),
            (TokenKind::Whitespace, " "),
            (TokenKind::LineEnding, "\n"),
        ]
    );
}

#[test]
fn test_multiline_positions() {
    let source = "\\(a\r\nb\\)";
    let recognized = recognize(source).unwrap();
    let last_data = recognized
        .events
        .iter()
        .filter(|event| event.is_enter() && event.kind() == TokenKind::TextData)
        .last()
        .unwrap();
    assert_eq!(last_data.span.start.line, 2);
    assert_eq!(last_data.span.start.column, 1);
    assert_eq!(last_data.span.slice(source), "b");
}
