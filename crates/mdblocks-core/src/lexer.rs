//! Line splitter feeding the classifier.
//!
//! Lines borrow directly from the input and carry their byte span. Newlines
//! are located with `memchr`; a `\r` directly before a `\n` is treated as part
//! of the line terminator so CRLF input classifies the same as LF input.
//!
//! Trimming treats a byte-order mark as whitespace, so a file saved with a
//! leading BOM classifies its first line the same as one saved without.

use memchr::memchr;

use crate::span::Span;

/// A single line from the input, without its terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub text: &'a str,
    /// Byte span in the original input.
    pub span: Span,
}

impl<'a> Line<'a> {
    /// True if the line is empty or contains only whitespace.
    #[inline(always)]
    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }

    #[inline(always)]
    pub fn trimmed(&self) -> &'a str {
        trim(self.text)
    }

    #[inline(always)]
    pub fn strip_prefix(&self, prefix: &str) -> Option<&'a str> {
        self.text.strip_prefix(prefix)
    }
}

/// Trim whitespace and U+FEFF from both ends of `text`.
#[inline]
pub(crate) fn trim(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Iterator over the lines of an input string.
///
/// Empty input yields no lines, and a trailing newline does not produce a
/// final empty line.
pub struct Lexer<'a> {
    input: &'a str,
    offset: usize,
}

impl<'a> Lexer<'a> {
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self { input, offset: 0 }
    }

    #[inline(always)]
    pub fn is_eof(&self) -> bool {
        self.offset >= self.input.len()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Line<'a>> {
        if self.is_eof() {
            return None;
        }

        let bytes = self.input.as_bytes();
        let start = self.offset;
        let end = match memchr(b'\n', &bytes[start..]) {
            Some(pos) => start + pos,
            None => bytes.len(),
        };

        let text_end = if end > start && bytes[end - 1] == b'\r' {
            end - 1
        } else {
            end
        };

        self.offset = if end < bytes.len() { end + 1 } else { end };

        // `\n` and `\r` are ASCII, so both slice bounds sit on char boundaries.
        Some(Line {
            text: &self.input[start..text_end],
            span: Span::new(start as u32, text_end as u32),
        })
    }
}
