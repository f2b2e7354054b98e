use std::borrow::Cow;

// @module: LRC line classification, splitting and bilingual assembly
//
// Lines are handled as raw bytes. Brackets and the separator are ASCII, so a
// line in a legacy encoding (Latin-1, GBK) is classified and split the same
// way as UTF-8 and copied through untouched.

/// Separator placed between the translated text and the original lyrics
pub const SEPARATOR: char = '|';

/// Kind of an input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Line carrying a bracketed timestamp followed by lyrics
    Lyric,
    /// Header, metadata or blank line copied to the output as is
    PassThrough,
}

/// Classify a raw line
///
/// A line is a lyric line when it contains at least one `[` and at least one
/// `]`, anywhere and in any order. The timestamp shape is not validated.
pub fn classify_line<T: AsRef<[u8]> + ?Sized>(line: &T) -> LineKind {
    let line = line.as_ref();
    if line.contains(&b'[') && line.contains(&b']') {
        LineKind::Lyric
    } else {
        LineKind::PassThrough
    }
}

/// Timestamp and lyrics parts of a lyric line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LyricSegments<'a> {
    // @field: Everything up to and including the first `]`
    pub timestamp: &'a [u8],

    // @field: Everything after the first `]`, possibly empty
    pub lyrics: &'a [u8],
}

impl<'a> LyricSegments<'a> {
    /// Split a line at its first `]`
    ///
    /// Only the first bracket group is treated as the timestamp. A line such
    /// as `[00:01.00][00:05.00]text` keeps the second group in `lyrics`.
    pub fn split<T: AsRef<[u8]> + ?Sized>(line: &'a T) -> Option<Self> {
        let line = line.as_ref();
        let end = line.iter().position(|&b| b == b']')?;
        let (timestamp, lyrics) = line.split_at(end + 1);
        Some(Self { timestamp, lyrics })
    }

    /// Whether anything follows the timestamp
    pub fn has_lyrics(&self) -> bool {
        !self.lyrics.is_empty()
    }

    /// Lyrics as text for the translator; invalid UTF-8 becomes U+FFFD
    pub fn lyrics_text(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.lyrics)
    }

    /// Build the bilingual line from a translation of `lyrics`
    pub fn assemble(&self, translated: &str) -> Vec<u8> {
        assemble_line(self.timestamp, translated, self.lyrics)
    }
}

/// A classified input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LrcLine<'a> {
    /// Lyric line with its segments
    Lyric(LyricSegments<'a>),
    /// Line emitted unchanged
    PassThrough(&'a [u8]),
}

impl<'a> LrcLine<'a> {
    /// Classify and split a raw line in one step
    pub fn parse<T: AsRef<[u8]> + ?Sized>(line: &'a T) -> Self {
        let line = line.as_ref();
        match classify_line(line) {
            LineKind::Lyric => match LyricSegments::split(line) {
                Some(segments) => Self::Lyric(segments),
                None => Self::PassThrough(line),
            },
            LineKind::PassThrough => Self::PassThrough(line),
        }
    }

    /// Kind of this line
    pub fn kind(&self) -> LineKind {
        match self {
            Self::Lyric(_) => LineKind::Lyric,
            Self::PassThrough(_) => LineKind::PassThrough,
        }
    }
}

/// Compose `timestamp + translated + "|" + lyrics`
///
/// The original bytes of `timestamp` and `lyrics` are kept as they are. No
/// escaping is applied to `|` characters already present in either text.
pub fn assemble_line(timestamp: &[u8], translated: &str, lyrics: &[u8]) -> Vec<u8> {
    let mut line = Vec::with_capacity(timestamp.len() + translated.len() + lyrics.len() + 1);
    line.extend_from_slice(timestamp);
    line.extend_from_slice(translated.as_bytes());
    line.push(SEPARATOR as u8);
    line.extend_from_slice(lyrics);
    line
}
