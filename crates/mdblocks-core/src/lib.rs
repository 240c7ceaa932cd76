//! # mdblocks core
//!
//! A line-oriented parser for the constrained markdown produced by text
//! generation and research-summary services.
//!
//! The input is split into lines, each line is classified on its own, and a
//! small state machine assembles the classified lines into a flat
//! [`Document`] of headings, paragraphs, lists and tables. `**bold**` spans
//! are left in the stored text and resolved at presentation time with
//! [`inline::emphasize`].
//!
//! ## Quick Start
//!
//! ```rust
//! use mdblocks_core::{parse, Block};
//!
//! let doc = parse("## Title\nSome **bold** text\n* one\n* two");
//!
//! assert_eq!(doc.blocks.len(), 3);
//! assert!(matches!(&doc.blocks[2], Block::List(list) if list.items.len() == 2));
//! ```
//!
//! ## Degradation instead of errors
//!
//! Parsing never fails. Unrecognized lines become paragraphs, and a single
//! pipe-delimited line is dropped rather than rendered as a table:
//!
//! ```rust
//! use mdblocks_core::parse;
//!
//! assert!(parse("|only one row|").is_empty());
//! ```

pub mod ast;
pub mod cache;
pub mod classify;
pub mod html;
pub mod inline;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod table;

pub use ast::{Block, Document, Heading, List, ListKind, Paragraph, Table};
pub use cache::DocumentCache;
pub use inline::{emphasize, Inline};
pub use parser::parse;
