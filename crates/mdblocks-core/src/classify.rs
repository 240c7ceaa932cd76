//! Line classifier.
//!
//! Each line maps to exactly one [`Token`]. Rules are checked in a fixed
//! order and the first match wins, so a line such as `| ## x |` is a table
//! row rather than a heading.

use crate::lexer::Line;
use crate::span::Span;

/// The kind of a single classified line, with its payload text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Trimmed line starts and ends with `|`. Carries the untrimmed line.
    TableRow(Line<'a>),
    /// `## ` or `### ` heading with the prefix stripped.
    Heading {
        level: u8,
        text: &'a str,
        span: Span,
    },
    /// `* ` item with the marker stripped.
    UnorderedItem { text: &'a str, span: Span },
    /// `N. ` item with the number, dot and space stripped.
    OrderedItem { text: &'a str, span: Span },
    Blank,
    /// Any other line, kept whole.
    PlainText { text: &'a str, span: Span },
}

/// Classify one line.
pub fn classify<'a>(line: &Line<'a>) -> Token<'a> {
    let span = line.span;

    let trimmed = line.trimmed();
    if trimmed.starts_with('|') && trimmed.ends_with('|') {
        return Token::TableRow(*line);
    }

    if let Some(text) = line.strip_prefix("## ") {
        return Token::Heading {
            level: 2,
            text,
            span,
        };
    }

    if let Some(text) = line.strip_prefix("### ") {
        return Token::Heading {
            level: 3,
            text,
            span,
        };
    }

    if let Some(text) = line.strip_prefix("* ") {
        return Token::UnorderedItem { text, span };
    }

    if let Some(text) = strip_ordered_marker(line.text) {
        return Token::OrderedItem { text, span };
    }

    if line.is_blank() {
        return Token::Blank;
    }

    Token::PlainText {
        text: line.text,
        span,
    }
}

/// Strip a leading `^\d+\. ` marker, returning the rest of the line.
#[inline]
fn strip_ordered_marker(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    // Digits, `.` and ` ` are ASCII, so `digits + 2` is a char boundary.
    match bytes.get(digits..digits + 2) {
        Some(b". ") => Some(&text[digits + 2..]),
        _ => None,
    }
}
