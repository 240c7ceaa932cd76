//! Table sub-parser.
//!
//! Turns a buffered run of pipe-delimited lines into a [`Table`]. The first
//! line is the header and the second is taken as the separator without
//! looking at it, so `| a | b |` followed by any pipe line still makes a
//! table. A run of one line yields nothing.

use std::borrow::Cow;

use crate::ast::{CowStr, Table};
use crate::lexer::{trim, Line};

/// Build a table from a buffered run, or `None` if the run is too short.
pub fn parse_table<'a>(lines: &[Line<'a>]) -> Option<Table<'a>> {
    let (first, rest) = lines.split_first()?;
    let (_separator, body) = rest.split_first()?;

    let header = split_cells(first.text);
    let rows = body.iter().map(|line| split_cells(line.text)).collect();

    let span = lines
        .iter()
        .fold(first.span, |span, line| span.merge(line.span));

    Some(Table { header, rows, span })
}

/// Split a row on `|`, trimming each cell and dropping empty ones.
pub fn split_cells(line: &str) -> Vec<CowStr<'_>> {
    line.split('|')
        .map(trim)
        .filter(|cell| !cell.is_empty())
        .map(Cow::Borrowed)
        .collect()
}
