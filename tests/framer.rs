// tests/framer.rs

use linestamp::frame::frame;

#[test]
fn empty_chunk_frames_to_nothing() {
    let framed = frame(b"");
    assert!(framed.is_empty());
    assert_eq!(framed.trailing, None);
}

#[test]
fn terminated_lines_are_all_complete() {
    let framed = frame(b"hello\nworld\n");
    assert_eq!(framed.lines, vec![&b"hello"[..], &b"world"[..]]);
    assert_eq!(framed.trailing, None);
}

#[test]
fn unterminated_tail_is_reported_as_trailing() {
    let framed = frame(b"one\ntw");
    assert_eq!(framed.lines, vec![&b"one"[..]]);
    assert_eq!(framed.trailing, Some(&b"tw"[..]));
}

#[test]
fn chunk_without_terminator_is_a_single_fragment() {
    let framed = frame(b"partial");
    assert!(framed.lines.is_empty());
    assert_eq!(framed.trailing, Some(&b"partial"[..]));
}

#[test]
fn blank_lines_are_preserved() {
    let framed = frame(b"\n\nx\n");
    assert_eq!(framed.lines, vec![&b""[..], &b""[..], &b"x"[..]]);
    assert_eq!(framed.trailing, None);
}

#[test]
fn iter_flags_only_the_trailing_fragment() {
    let framed = frame(b"a\nb\nc");
    let flagged: Vec<(&[u8], bool)> = framed.iter().collect();
    assert_eq!(
        flagged,
        vec![(&b"a"[..], false), (&b"b"[..], false), (&b"c"[..], true)]
    );
}

#[test]
fn non_utf8_bytes_pass_through() {
    let framed = frame(&[0xff, 0xfe, b'\n', 0x00]);
    assert_eq!(framed.lines, vec![&[0xffu8, 0xfe][..]]);
    assert_eq!(framed.trailing, Some(&[0x00u8][..]));
}
