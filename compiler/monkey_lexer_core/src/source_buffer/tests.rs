use super::*;

// === Construction ===

#[test]
fn empty_source() {
    let buf = SourceBuffer::new("");
    assert_eq!(buf.source_len, 0);
    assert_eq!(buf.buf[0], 0);
}

#[test]
fn ascii_source() {
    let buf = SourceBuffer::new("let x = 5;");
    assert_eq!(buf.source_len, 10);
    assert_eq!(&buf.buf[..10], b"let x = 5;");
    assert_eq!(buf.buf[10], 0);
}

#[test]
fn non_ascii_source_is_copied_verbatim() {
    let source = "let \u{e9} = 1;";
    let buf = SourceBuffer::new(source);
    assert_eq!(buf.source_len, source.len());
    assert_eq!(&buf.buf[..buf.source_len], source.as_bytes());
}

// === Padding ===

#[test]
fn buffer_aligned_to_cache_line() {
    for len in [0, 1, 10, 61, 62, 63, 64, 65, 127, 128, 1000] {
        let source = "x".repeat(len);
        let buf = SourceBuffer::new(&source);
        assert_eq!(
            buf.buf.len() % CACHE_LINE,
            0,
            "buffer length {} is not cache-line aligned for source length {len}",
            buf.buf.len(),
        );
    }
}

#[test]
fn tail_always_leaves_room_for_lookahead() {
    for len in [0, 1, 60, 61, 62, 63, 64, 125, 126, 127] {
        let source = "y".repeat(len);
        let buf = SourceBuffer::new(&source);
        assert!(
            buf.buf.len() >= len + MIN_TAIL,
            "only {} tail bytes for source length {len}",
            buf.buf.len() - len,
        );
    }
}

#[test]
fn sentinel_and_padding_are_zero() {
    let buf = SourceBuffer::new("abc");
    for &b in &buf.buf[3..] {
        assert_eq!(b, 0, "non-zero byte in sentinel/padding region");
    }
}

// === Cursor Creation ===

#[test]
fn cursor_at_start() {
    let buf = SourceBuffer::new("fn");
    let cursor = buf.cursor_at(0);
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.current(), b'f');
}

#[test]
fn cursor_at_resumes_mid_source() {
    let buf = SourceBuffer::new("let x");
    let cursor = buf.cursor_at(4);
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn cursor_at_clamps_to_sentinel() {
    let buf = SourceBuffer::new("ab");
    let cursor = buf.cursor_at(500);
    assert_eq!(cursor.pos(), 2);
    assert!(cursor.is_eof());
}
