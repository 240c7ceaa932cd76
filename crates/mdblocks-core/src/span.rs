//! Source locations for lines and blocks.
//!
//! Every line produced by the lexer and every block produced by the
//! assembler records the byte range it came from, so a presentation layer
//! can map a block back to the generated text it was built from.

/// A byte range `[start, end)` in the source text.
///
/// # Example
///
/// ```rust
/// use mdblocks_core::span::Span;
///
/// let input = "## T\n* a\n* b";
/// let list = Span::new(5, 8).merge(Span::new(9, 12));
/// assert_eq!((list.start, list.end), (5, 12));
/// assert_eq!(list.len(), 7);
/// assert_eq!(list.slice(input), Some("* a\n* b"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Starting byte offset (inclusive).
    pub start: u32,
    /// Ending byte offset (exclusive).
    pub end: u32,
}

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Length of the range in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// True for the span of an empty line. Emitted blocks never have one.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// The source text this span covers, or `None` if it does not fall on
    /// char boundaries of `source`.
    #[inline]
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start as usize..self.end as usize)
    }

    /// Smallest span covering both `self` and `other`.
    ///
    /// Used when a buffered list or table is flushed: the block spans from
    /// its first buffered line to its last.
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}
