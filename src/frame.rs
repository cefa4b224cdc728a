// src/frame.rs

//! Line framing for one chunk read from the channel.
//!
//! Framing is stateless across chunks. A line that straddles two reads is
//! reported as two lines, the first of them flagged as a trailing fragment
//! so the emitter can mark it as interrupted. Reassembling fragments would
//! change the log format consumers already parse.

pub const TERMINATOR: u8 = b'\n';

/// Result of framing one chunk.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Framed<'a> {
    /// Lines that ended at a terminator, terminator stripped.
    pub lines: Vec<&'a [u8]>,
    /// Bytes after the last terminator, if any.
    pub trailing: Option<&'a [u8]>,
}

impl<'a> Framed<'a> {
    /// All lines in order, each paired with its "incomplete" flag.
    pub fn iter(&self) -> impl Iterator<Item = (&'a [u8], bool)> + '_ {
        self.lines
            .iter()
            .map(|line| (*line, false))
            .chain(self.trailing.map(|line| (line, true)))
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.trailing.is_none()
    }
}

/// Split `chunk` at every terminator byte.
///
/// `n` terminators give exactly `n` complete lines. A trailing fragment is
/// reported iff the chunk is non-empty and does not end with a terminator.
pub fn frame(chunk: &[u8]) -> Framed<'_> {
    let mut lines = Vec::new();
    let mut rest = chunk;

    while let Some(pos) = rest.iter().position(|&b| b == TERMINATOR) {
        lines.push(&rest[..pos]);
        rest = &rest[pos + 1..];
    }

    let trailing = (!rest.is_empty()).then_some(rest);
    Framed { lines, trailing }
}
