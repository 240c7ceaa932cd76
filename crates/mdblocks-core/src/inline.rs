//! Inline emphasis transformer.
//!
//! Resolves `**...**` pairs in a leaf string into typed spans. Pairs are
//! matched left to right: an opening `**` closes at the nearest following
//! `**`, and scanning resumes after the closer. Emphasis never nests, and an
//! opening marker with no closer stays in the surrounding text.
//!
//! Output borrows from the leaf, so the transform allocates only the span
//! vector.

use memchr::memmem;

const MARKER: &[u8] = b"**";

/// A run of leaf text with its emphasis resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inline<'a> {
    /// Plain text, including any unpaired `**`.
    Text(&'a str),
    /// Text between a matched pair of `**`. May be empty.
    Strong(&'a str),
}

impl<'a> Inline<'a> {
    #[inline]
    pub fn as_str(&self) -> &'a str {
        match *self {
            Inline::Text(s) | Inline::Strong(s) => s,
        }
    }

    #[inline]
    pub fn is_strong(&self) -> bool {
        matches!(self, Inline::Strong(_))
    }
}

/// Split `text` into plain and strong spans.
///
/// ```rust
/// use mdblocks_core::inline::{emphasize, Inline};
///
/// assert_eq!(
///     emphasize("**bold** text"),
///     vec![Inline::Strong("bold"), Inline::Text(" text")]
/// );
/// assert_eq!(emphasize("a ** b"), vec![Inline::Text("a ** b")]);
/// ```
pub fn emphasize(text: &str) -> Vec<Inline<'_>> {
    let mut inlines = Vec::new();
    let mut text_start = 0;

    for (open, close) in Pairs::new(text) {
        if text_start < open {
            inlines.push(Inline::Text(&text[text_start..open]));
        }
        inlines.push(Inline::Strong(&text[open + MARKER.len()..close]));
        text_start = close + MARKER.len();
    }

    if text_start < text.len() {
        inlines.push(Inline::Text(&text[text_start..]));
    }

    inlines
}

/// True if `text` contains at least one complete `**...**` pair.
#[inline]
pub fn has_emphasis(text: &str) -> bool {
    Pairs::new(text).next().is_some()
}

/// Iterator over `(open, close)` byte offsets of matched marker pairs.
struct Pairs<'a> {
    bytes: &'a [u8],
    pos: usize,
    finder: memmem::Finder<'static>,
}

impl<'a> Pairs<'a> {
    #[inline]
    fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            pos: 0,
            finder: memmem::Finder::new(MARKER),
        }
    }

    #[inline]
    fn find_from(&self, from: usize) -> Option<usize> {
        self.bytes
            .get(from..)
            .and_then(|rest| self.finder.find(rest))
            .map(|offset| from + offset)
    }
}

impl<'a> Iterator for Pairs<'a> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<(usize, usize)> {
        let open = self.find_from(self.pos)?;
        let close = self.find_from(open + MARKER.len())?;
        self.pos = close + MARKER.len();
        Some((open, close))
    }
}
