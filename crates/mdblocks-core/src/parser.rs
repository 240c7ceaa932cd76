//! Block assembler.
//!
//! A left fold over classified lines. The accumulator is an explicit
//! [`State`]: either nothing is buffered, a run of same-kind list items is
//! buffered, or a run of pipe-delimited lines is buffered. Headings and
//! paragraphs are never buffered; they are emitted as soon as they are seen,
//! after flushing whatever was pending.

use std::borrow::Cow;

use tracing::{debug, trace};

use crate::ast::{Block, CowStr, Document, Heading, List, ListKind, Paragraph};
use crate::classify::{classify, Token};
use crate::lexer::{Lexer, Line};
use crate::span::Span;
use crate::table::parse_table;

/// Parse `input` into a [`Document`].
///
/// Parsing never fails. Lines that match no rule become paragraphs, and a
/// pipe-delimited run of a single line is dropped.
pub fn parse(input: &str) -> Document<'_> {
    let mut blocks = Vec::with_capacity(16);

    let state = Lexer::new(input)
        .fold(State::Idle, |state, line| step(&mut blocks, state, &line));
    flush(&mut blocks, state);

    trace!(blocks = blocks.len(), bytes = input.len(), "parsed document");

    Document {
        blocks,
        span: Span::new(0, input.len() as u32),
    }
}

/// What the assembler is holding between lines.
#[derive(Debug)]
enum State<'a> {
    Idle,
    List {
        kind: ListKind,
        items: Vec<CowStr<'a>>,
        span: Span,
    },
    Table {
        lines: Vec<Line<'a>>,
    },
}

fn step<'a>(blocks: &mut Vec<Block<'a>>, state: State<'a>, line: &Line<'a>) -> State<'a> {
    let token = classify(line);

    // Leaving a table flushes it before the line is handled from `Idle`.
    let state = match (state, token) {
        (State::Table { mut lines }, Token::TableRow(row)) => {
            lines.push(row);
            return State::Table { lines };
        }
        (table @ State::Table { .. }, _) => {
            flush(blocks, table);
            State::Idle
        }
        (state, _) => state,
    };

    match token {
        Token::TableRow(row) => {
            flush(blocks, state);
            State::Table { lines: vec![row] }
        }
        Token::UnorderedItem { text, span } => {
            push_item(blocks, state, ListKind::Unordered, text, span)
        }
        Token::OrderedItem { text, span } => {
            push_item(blocks, state, ListKind::Ordered, text, span)
        }
        Token::Heading { level, text, span } => {
            flush(blocks, state);
            blocks.push(Block::Heading(Heading {
                level,
                text: Cow::Borrowed(text),
                span,
            }));
            State::Idle
        }
        Token::Blank => {
            flush(blocks, state);
            State::Idle
        }
        Token::PlainText { text, span } => {
            flush(blocks, state);
            blocks.push(Block::Paragraph(Paragraph {
                text: Cow::Borrowed(text),
                span,
            }));
            State::Idle
        }
    }
}

/// Append an item to a list of the same kind, or start a new list.
fn push_item<'a>(
    blocks: &mut Vec<Block<'a>>,
    state: State<'a>,
    kind: ListKind,
    text: &'a str,
    span: Span,
) -> State<'a> {
    match state {
        State::List {
            kind: current,
            mut items,
            span: list_span,
        } if current == kind => {
            items.push(Cow::Borrowed(text));
            State::List {
                kind,
                items,
                span: list_span.merge(span),
            }
        }
        other => {
            flush(blocks, other);
            State::List {
                kind,
                items: vec![Cow::Borrowed(text)],
                span,
            }
        }
    }
}

/// Emit whatever `state` is buffering.
fn flush<'a>(blocks: &mut Vec<Block<'a>>, state: State<'a>) {
    match state {
        State::Idle => {}
        State::List { items, .. } if items.is_empty() => {}
        State::List { kind, items, span } => {
            trace!(?kind, items = items.len(), "flushing list");
            blocks.push(Block::List(List { kind, items, span }));
        }
        State::Table { lines } => match parse_table(&lines) {
            Some(table) => {
                trace!(
                    columns = table.header.len(),
                    rows = table.rows.len(),
                    "flushing table"
                );
                blocks.push(Block::Table(table));
            }
            None => {
                debug!(
                    lines = lines.len(),
                    start = lines.first().map(|l| l.span.start),
                    "dropping pipe-delimited run shorter than two lines"
                );
            }
        },
    }
}
