//! Block types produced by the assembler.
//!
//! The document model is deliberately flat:
//!
//! - **Zero-copy**: leaf text is a `Cow<'a, str>` borrowed from the input
//! - **Untransformed**: leaf text is stored exactly as it appeared in the
//!   source; emphasis is resolved at presentation time by [`crate::inline`]
//! - **Span-tracked**: every block records the source lines it came from

use std::borrow::Cow;

use crate::span::Span;

/// Borrowed or owned string type for zero-copy parsing.
pub type CowStr<'a> = Cow<'a, str>;

/// A parsed document: blocks in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document<'a> {
    /// Content blocks in document order.
    pub blocks: Vec<Block<'a>>,
    /// Source span covering the entire input.
    pub span: Span,
}

impl<'a> Document<'a> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Block<'a>> {
        self.blocks.iter()
    }

    /// Detach the document from the input it was parsed from.
    pub fn into_owned(self) -> Document<'static> {
        Document {
            blocks: self.blocks.into_iter().map(Block::into_owned).collect(),
            span: self.span,
        }
    }
}

impl<'d, 'a> IntoIterator for &'d Document<'a> {
    type Item = &'d Block<'a>;
    type IntoIter = std::slice::Iter<'d, Block<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

/// One finalized structural unit of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    /// `## ` or `### ` heading.
    Heading(Heading<'a>),
    /// A single non-blank line that matched no other rule.
    Paragraph(Paragraph<'a>),
    /// A run of list items of one kind.
    List(List<'a>),
    /// A run of pipe-delimited lines with a header and body rows.
    Table(Table<'a>),
}

impl<'a> Block<'a> {
    /// Source span of the lines this block was built from.
    pub fn span(&self) -> Span {
        match self {
            Block::Heading(h) => h.span,
            Block::Paragraph(p) => p.span,
            Block::List(l) => l.span,
            Block::Table(t) => t.span,
        }
    }

    pub fn into_owned(self) -> Block<'static> {
        match self {
            Block::Heading(h) => Block::Heading(Heading {
                level: h.level,
                text: owned(h.text),
                span: h.span,
            }),
            Block::Paragraph(p) => Block::Paragraph(Paragraph {
                text: owned(p.text),
                span: p.span,
            }),
            Block::List(l) => Block::List(List {
                kind: l.kind,
                items: l.items.into_iter().map(owned).collect(),
                span: l.span,
            }),
            Block::Table(t) => Block::Table(Table {
                header: t.header.into_iter().map(owned).collect(),
                rows: t
                    .rows
                    .into_iter()
                    .map(|row| row.into_iter().map(owned).collect())
                    .collect(),
                span: t.span,
            }),
        }
    }
}

#[inline]
fn owned(text: CowStr<'_>) -> CowStr<'static> {
    Cow::Owned(text.into_owned())
}

/// Section heading. Only levels 2 and 3 are recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading<'a> {
    pub level: u8,
    /// Text after the `## ` / `### ` prefix.
    pub text: CowStr<'a>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph<'a> {
    /// The full source line.
    pub text: CowStr<'a>,
    pub span: Span,
}

/// List ordering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    /// `1. ` style items.
    Ordered,
    /// `* ` style items.
    Unordered,
}

/// A list block. All items share one [`ListKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List<'a> {
    pub kind: ListKind,
    /// Item text with the marker stripped.
    pub items: Vec<CowStr<'a>>,
    pub span: Span,
}

impl<'a> List<'a> {
    #[inline]
    pub fn ordered(&self) -> bool {
        self.kind == ListKind::Ordered
    }
}

/// Data table built from a pipe-delimited run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table<'a> {
    /// Header cells from the first line of the run.
    pub header: Vec<CowStr<'a>>,
    /// Body rows from the third line onward.
    pub rows: Vec<Vec<CowStr<'a>>>,
    pub span: Span,
}
