//! Line segmentation with absolute character offsets.

use serde::Serialize;

/// A contiguous slice of the document text.
///
/// `start`/`end` are the line's half-open character-offset range within the
/// whole document, in the same char units the annotations use. The break
/// character that ended the line is consumed by segmentation and never
/// appears in `content`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line<'a> {
    pub start: usize,
    pub end: usize,
    pub content: &'a str,
}

impl<'a> Line<'a> {
    /// Char length of the line's content.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Iterator over a document's lines.
///
/// Lazy and finite; restart by calling [`segment`] again on the same
/// document. An empty document still yields one empty line.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: Option<&'a str>,
    offset: usize,
}

/// Segment `document` into lines, splitting on `\n`.
///
/// Offsets are cumulative: each line starts one char past the previous
/// line's end, accounting for the consumed break character.
pub fn segment(document: &str) -> Lines<'_> {
    Lines {
        rest: Some(document),
        offset: 0,
    }
}

/// Collecting convenience over [`segment`].
pub fn segment_lines(document: &str) -> Vec<Line<'_>> {
    segment(document).collect()
}

impl<'a> Iterator for Lines<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Line<'a>> {
        let rest = self.rest?;
        let (content, remainder) = match rest.find('\n') {
            Some(pos) => (&rest[..pos], Some(&rest[pos + 1..])),
            None => (rest, None),
        };
        let start = self.offset;
        let end = start + char_len(content);
        self.offset = end + 1; // skip the consumed break character
        self.rest = remainder;
        Some(Line { start, end, content })
    }
}

/// Length of `s` in the engine's offset units (Unicode scalar values).
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Slice `s` by char offsets `[start, end)` relative to its beginning.
///
/// Callers guarantee `start <= end` and `end <= char_len(s)`.
pub(crate) fn slice_chars(s: &str, start: usize, end: usize) -> &str {
    debug_assert!(start <= end);
    &s[byte_pos(s, start)..byte_pos(s, end)]
}

fn byte_pos(s: &str, char_pos: usize) -> usize {
    s.char_indices()
        .nth(char_pos)
        .map(|(byte, _)| byte)
        .unwrap_or(s.len())
}
