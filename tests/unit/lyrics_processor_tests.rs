/*!
 * Tests for LRC line classification, splitting and assembly
 */

use lrc_translator::lyrics_processor::{LineKind, LrcLine, LyricSegments, SEPARATOR, assemble_line, classify_line};

/// Test classification of the usual LRC line shapes
#[test]
fn test_classify_line_withCommonShapes_shouldDetectBrackets() {
    assert_eq!(classify_line("[00:12.00]Hello"), LineKind::Lyric);
    assert_eq!(classify_line("[ti:Song]"), LineKind::Lyric);
    assert_eq!(classify_line("[00:12.00]"), LineKind::Lyric);
    assert_eq!(classify_line(""), LineKind::PassThrough);
    assert_eq!(classify_line("plain text"), LineKind::PassThrough);
    assert_eq!(classify_line("[unterminated"), LineKind::PassThrough);
}

/// Test that bracket order does not matter for classification
#[test]
fn test_classify_line_withReversedBrackets_shouldBeLyric() {
    assert_eq!(classify_line("a]b[c"), LineKind::Lyric);

    // The split still happens at the first `]`
    let segments = LyricSegments::split("a]b[c").unwrap();
    assert_eq!(segments.timestamp, b"a]");
    assert_eq!(segments.lyrics, b"b[c");
}

/// Test that only the first closing bracket splits the line
#[test]
fn test_split_withRepeatedTimestamps_shouldKeepSecondGroupInLyrics() {
    let segments = LyricSegments::split("[00:01.00][00:05.00]Chorus").unwrap();
    assert_eq!(segments.timestamp, b"[00:01.00]");
    assert_eq!(segments.lyrics_text(), "[00:05.00]Chorus");
}

/// Test that splitting then concatenating yields the original line
#[test]
fn test_split_shouldConcatenateBackToInput() {
    let lines: [&[u8]; 5] = [
        b"[00:12.00]Bonjour le monde",
        b"[ar:Someone]",
        b"x[y]z ",
        b"[00:01.00]  spaced  ",
        b"[00:02.00]\xc4\xe3\xba\xc3",
    ];
    for line in lines {
        let segments = LyricSegments::split(line).unwrap();
        assert_eq!([segments.timestamp, segments.lyrics].concat(), line);
        assert!(segments.timestamp.ends_with(b"]"));
    }
}

/// Test detection of lines with nothing after the timestamp
#[test]
fn test_has_lyrics_shouldOnlyRejectEmptyTail() {
    assert!(!LyricSegments::split("[00:12.00]").unwrap().has_lyrics());
    assert!(LyricSegments::split("[00:12.00]   ").unwrap().has_lyrics());
    assert!(LyricSegments::split("[00:12.00] la").unwrap().has_lyrics());
}

/// Test bilingual assembly, including separators already in the text
#[test]
fn test_assemble_line_shouldJoinWithSeparator() {
    assert_eq!(SEPARATOR, '|');
    assert_eq!(
        assemble_line(b"[00:12.00]", "Hello world", b"Bonjour le monde"),
        b"[00:12.00]Hello world|Bonjour le monde"
    );
    assert_eq!(assemble_line(b"[00:01.00]", "a|b", b"c|d"), b"[00:01.00]a|b|c|d");
    assert_eq!(assemble_line(b"[00:01.00]", "", b""), b"[00:01.00]|");
}

/// Test that parse picks the right variant
#[test]
fn test_lrc_line_parse_shouldClassifyAndSplit() {
    match LrcLine::parse("[00:12.00]Hi") {
        LrcLine::Lyric(segments) => {
            assert_eq!(segments.assemble("Salut"), b"[00:12.00]Salut|Hi");
        }
        other => panic!("expected a lyric line, got {:?}", other),
    }

    let blank = LrcLine::parse("");
    assert_eq!(blank, LrcLine::PassThrough(b""));
    assert_eq!(blank.kind(), LineKind::PassThrough);
}

/// Test that a GBK-encoded header passes through as raw bytes
#[test]
fn test_lrc_line_parse_withGbkHeader_shouldKeepBytes() {
    let header: &[u8] = b"\xb8\xe8\xca\xd6: someone";
    assert_eq!(LrcLine::parse(header), LrcLine::PassThrough(header));
}
