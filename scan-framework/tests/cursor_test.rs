use scan_framework::{Code, Cursor, Position};

#[test]
fn test_cursor_new() {
    let cursor = Cursor::new("hello");
    assert_eq!(cursor.offset(), 0);
    assert_eq!(cursor.position(), Position::new());
    assert!(!cursor.is_eof());
}

#[test]
fn test_cursor_current_does_not_advance() {
    let cursor = Cursor::new("hello");
    assert_eq!(cursor.current(), Code::Char('h'));
    assert_eq!(cursor.current(), Code::Char('h'));
    assert_eq!(cursor.offset(), 0);
}

#[test]
fn test_cursor_advance() {
    let mut cursor = Cursor::new("hello");
    assert_eq!(cursor.advance(), Code::Char('h'));
    assert_eq!(cursor.offset(), 1);
    assert_eq!(cursor.position().column, 2);
    assert_eq!(cursor.current(), Code::Char('e'));
}

#[test]
fn test_cursor_eof_is_sticky() {
    let mut cursor = Cursor::new("a");
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), Code::Eof);
    assert_eq!(cursor.advance(), Code::Eof);
    assert_eq!(cursor.offset(), 1);
}

#[test]
fn test_cursor_empty_string() {
    let cursor = Cursor::new("");
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), Code::Eof);
    assert_eq!(cursor.previous(), None);
}

#[test]
fn test_cursor_line_endings_are_normalized() {
    for input in ["a\nb", "a\rb", "a\r\nb"] {
        let mut cursor = Cursor::new(input);
        cursor.advance();
        assert_eq!(cursor.current(), Code::LineEnding, "{input:?}");
        assert_eq!(cursor.advance(), Code::LineEnding, "{input:?}");
        assert_eq!(cursor.current(), Code::Char('b'), "{input:?}");
        assert_eq!(cursor.position().line, 2);
        assert_eq!(cursor.position().column, 1);
        assert_eq!(cursor.position().offset, input.len() - 1);
    }
}

#[test]
fn test_cursor_previous() {
    let mut cursor = Cursor::new("\\x\n");
    assert_eq!(cursor.previous(), None);
    cursor.advance();
    assert_eq!(cursor.previous(), Some(Code::Char('\\')));
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.previous(), Some(Code::LineEnding));
}

#[test]
fn test_cursor_advance_while_counts_codes() {
    let mut cursor = Cursor::new("  \tx");
    let count = cursor.advance_while(Code::is_space_or_tab);
    assert_eq!(count, 3);
    assert_eq!(cursor.current(), Code::Char('x'));
}

#[test]
fn test_cursor_checkpoint_restore() {
    let mut cursor = Cursor::new("ab\ncd");
    cursor.advance();
    let checkpoint = cursor.checkpoint();

    cursor.advance();
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.position().line, 2);

    cursor.restore(checkpoint);
    assert_eq!(cursor.offset(), 1);
    assert_eq!(cursor.position(), Position::at(1, 2, 1));
    assert_eq!(cursor.current(), Code::Char('b'));
}

#[test]
fn test_cursor_unicode_offsets() {
    let mut cursor = Cursor::new("é∑x");
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.position(), Position::at(1, 3, 5));
    assert_eq!(cursor.slice(0, 2), "é");
}
