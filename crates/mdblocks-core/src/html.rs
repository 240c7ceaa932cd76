//! Reference HTML rendering of a [`Document`].
//!
//! All leaf text is escaped before it is written, and emphasis is produced
//! from [`Inline`] spans rather than by splicing markup into the source text,
//! so generated content can never inject tags.
//!
//! Emphasis is resolved in paragraphs, list items and table body cells.
//! Heading text and header cells are written literally, matching the
//! rendering these documents were first displayed with: a `**` pair in a
//! `<th>` stays as two asterisks. [`render_leaf`] can be applied to header
//! cells by callers that want emphasis there too.

use html_escape::encode_text_to_string;

use crate::ast::{Block, Document, List, ListKind, Table};
use crate::inline::{emphasize, Inline};

/// Render a document to an HTML fragment, one block per line.
pub fn render(doc: &Document<'_>) -> String {
    let mut out = String::with_capacity(doc.span.len() as usize * 2);
    for block in doc {
        render_block(block, &mut out);
        out.push('\n');
    }
    out
}

/// Render a single block.
pub fn render_block(block: &Block<'_>, out: &mut String) {
    match block {
        Block::Heading(h) => {
            let tag = if h.level == 3 { "h3" } else { "h2" };
            open(out, tag);
            encode_text_to_string(&h.text, out);
            close(out, tag);
        }
        Block::Paragraph(p) => {
            open(out, "p");
            render_leaf(&p.text, out);
            close(out, "p");
        }
        Block::List(list) => render_list(list, out),
        Block::Table(table) => render_table(table, out),
    }
}

/// Render one leaf string with its emphasis resolved.
pub fn render_leaf(text: &str, out: &mut String) {
    render_inlines(&emphasize(text), out);
}

pub fn render_inlines(inlines: &[Inline<'_>], out: &mut String) {
    for inline in inlines {
        match inline {
            Inline::Text(text) => {
                encode_text_to_string(text, out);
            }
            Inline::Strong(text) => {
                open(out, "strong");
                encode_text_to_string(text, out);
                close(out, "strong");
            }
        }
    }
}

fn render_list(list: &List<'_>, out: &mut String) {
    let tag = match list.kind {
        ListKind::Ordered => "ol",
        ListKind::Unordered => "ul",
    };
    open(out, tag);
    for item in &list.items {
        open(out, "li");
        render_leaf(item, out);
        close(out, "li");
    }
    close(out, tag);
}

fn render_table(table: &Table<'_>, out: &mut String) {
    out.push_str("<table><thead><tr>");
    for cell in &table.header {
        open(out, "th");
        encode_text_to_string(cell, out);
        close(out, "th");
    }
    out.push_str("</tr></thead><tbody>");
    for row in &table.rows {
        open(out, "tr");
        for cell in row {
            open(out, "td");
            render_leaf(cell, out);
            close(out, "td");
        }
        close(out, "tr");
    }
    out.push_str("</tbody></table>");
}

#[inline]
fn open(out: &mut String, tag: &str) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
}

#[inline]
fn close(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
