//! mdblocks CLI - Inspect, render, and measure generated markdown
//!
//! Usage:
//!   mdblocks [OPTIONS] <COMMAND> [FILE]
//!
//! Commands:
//!   parse     Show the block structure (default text summary, or JSON)
//!   render    Print the HTML rendering
//!   stats     Show document statistics
//!
//! `FILE` defaults to stdin when omitted or `-`.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use mdblocks_core::inline::has_emphasis;
use mdblocks_core::{emphasize, html, parse, Block, Document, Inline, ListKind};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// mdblocks - structured blocks from generated markdown
#[derive(Parser)]
#[command(name = "mdblocks")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Show the block structure
    Parse {
        #[command(flatten)]
        input: InputArgs,

        /// Output the document as JSON
        #[arg(short, long)]
        json: bool,

        /// Print block contents, not just the outline
        #[arg(short, long, conflicts_with = "json")]
        full: bool,
    },
    /// Print the HTML rendering
    Render {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Show document statistics
    Stats {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Input file (stdin when omitted or `-`)
    file: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error("failed to serialize document: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Parse { input, json, full } => {
            let text = read_input(&input)?;
            let doc = parse(&text);
            if json {
                cmd_json(&doc)
            } else {
                print_document(&doc, full);
                Ok(())
            }
        }
        Command::Render { input } => {
            let text = read_input(&input)?;
            print!("{}", html::render(&parse(&text)));
            Ok(())
        }
        Command::Stats { input } => {
            let text = read_input(&input)?;
            cmd_stats(&parse(&text), &text);
            Ok(())
        }
    }
}

fn read_input(args: &InputArgs) -> Result<String, CliError> {
    match args.file.as_deref() {
        Some(path) if path.as_os_str() != "-" => {
            debug!(path = %path.display(), "reading input file");
            fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => {
            debug!("reading input from stdin");
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(CliError::Stdin)?;
            Ok(text)
        }
    }
}

// =============================================================================
// Text Output
// =============================================================================

fn print_document(doc: &Document, full: bool) {
    println!("Blocks: {}", doc.blocks.len());
    for (i, block) in doc.blocks.iter().enumerate() {
        println!("  [{}] {}", i + 1, describe_block(block));
        if full {
            print_block_contents(block);
        }
    }
}

fn describe_block(block: &Block) -> String {
    match block {
        Block::Heading(h) => format!("Heading (level {})", h.level),
        Block::Paragraph(_) => "Paragraph".to_string(),
        Block::List(l) => format!("List ({:?}, {} items)", l.kind, l.items.len()),
        Block::Table(t) => {
            format!("Table ({} columns, {} rows)", t.header.len(), t.rows.len())
        }
    }
}

fn print_block_contents(block: &Block) {
    let prefix = "      ";

    match block {
        Block::Heading(h) => println!("{}{}", prefix, h.text),
        Block::Paragraph(p) => println!("{}{}", prefix, format_inlines(&emphasize(&p.text))),
        Block::List(l) => {
            for (i, item) in l.items.iter().enumerate() {
                let marker = match l.kind {
                    ListKind::Ordered => format!("{}.", i + 1),
                    ListKind::Unordered => "*".to_string(),
                };
                println!("{}{} {}", prefix, marker, format_inlines(&emphasize(item)));
            }
        }
        Block::Table(t) => {
            println!("{}Header: {}", prefix, t.header.join(" | "));
            for (i, row) in t.rows.iter().enumerate() {
                let cells: Vec<String> = row
                    .iter()
                    .map(|cell| format_inlines(&emphasize(cell)))
                    .collect();
                println!("{}Row {}: {}", prefix, i + 1, cells.join(" | "));
            }
        }
    }
}

/// Strong spans are shown in upper case so emphasis survives a plain terminal.
fn format_inlines(inlines: &[Inline]) -> String {
    let mut result = String::new();
    for inline in inlines {
        match inline {
            Inline::Text(t) => result.push_str(t),
            Inline::Strong(s) => result.push_str(&s.to_uppercase()),
        }
    }
    result
}

// =============================================================================
// Stats Command
// =============================================================================

fn cmd_stats(doc: &Document, input: &str) {
    let stats = DocumentStats::from_document(doc, input);

    println!("Document Statistics");
    println!("-------------------");
    println!("Content:");
    println!("  Total blocks:   {}", stats.total_blocks);
    println!("  Headings:       {}", stats.headings);
    println!("  Paragraphs:     {}", stats.paragraphs);
    println!("  Lists:          {}", stats.lists);
    println!("  List items:     {}", stats.list_items);
    println!("  Tables:         {}", stats.tables);
    println!("  Table rows:     {}", stats.table_rows);
    println!("  Emphasized:     {}", stats.emphasized);
    println!();
    println!("Size:");
    println!("  Characters:     {}", stats.chars);
    println!("  Lines:          {}", stats.lines);
}

#[derive(Debug, Default)]
struct DocumentStats {
    total_blocks: usize,
    headings: usize,
    paragraphs: usize,
    lists: usize,
    list_items: usize,
    tables: usize,
    table_rows: usize,
    /// Leaves containing at least one `**...**` pair.
    emphasized: usize,
    chars: usize,
    lines: usize,
}

impl DocumentStats {
    fn from_document(doc: &Document, input: &str) -> Self {
        let mut stats = Self {
            total_blocks: doc.blocks.len(),
            chars: input.chars().count(),
            lines: input.lines().count(),
            ..Self::default()
        };

        for block in doc {
            match block {
                Block::Heading(_) => stats.headings += 1,
                Block::Paragraph(p) => {
                    stats.paragraphs += 1;
                    stats.count_leaf(&p.text);
                }
                Block::List(l) => {
                    stats.lists += 1;
                    stats.list_items += l.items.len();
                    for item in &l.items {
                        stats.count_leaf(item);
                    }
                }
                Block::Table(t) => {
                    stats.tables += 1;
                    stats.table_rows += t.rows.len();
                    for cell in t.rows.iter().flatten() {
                        stats.count_leaf(cell);
                    }
                }
            }
        }

        stats
    }

    fn count_leaf(&mut self, text: &str) {
        if has_emphasis(text) {
            self.emphasized += 1;
        }
    }
}

// =============================================================================
// JSON Output
// =============================================================================

#[derive(Serialize)]
struct JsonDocument<'a> {
    blocks: Vec<JsonBlock<'a>>,
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum JsonBlock<'a> {
    Heading {
        level: u8,
        text: &'a str,
    },
    Paragraph {
        content: Vec<JsonInline<'a>>,
    },
    List {
        ordered: bool,
        items: Vec<Vec<JsonInline<'a>>>,
    },
    Table {
        header: Vec<&'a str>,
        rows: Vec<Vec<Vec<JsonInline<'a>>>>,
    },
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum JsonInline<'a> {
    Text { content: &'a str },
    Strong { content: &'a str },
}

fn cmd_json(doc: &Document) -> Result<(), CliError> {
    let json_doc = JsonDocument {
        blocks: doc.blocks.iter().map(convert_block).collect(),
    };
    println!("{}", serde_json::to_string_pretty(&json_doc)?);
    Ok(())
}

fn convert_block<'a>(block: &'a Block) -> JsonBlock<'a> {
    match block {
        Block::Heading(h) => JsonBlock::Heading {
            level: h.level,
            text: &h.text,
        },
        Block::Paragraph(p) => JsonBlock::Paragraph {
            content: convert_leaf(&p.text),
        },
        Block::List(l) => JsonBlock::List {
            ordered: l.ordered(),
            items: l.items.iter().map(|item| convert_leaf(item)).collect(),
        },
        // Header cells stay literal, as in `html::render`.
        Block::Table(t) => JsonBlock::Table {
            header: t.header.iter().map(|cell| cell.as_ref()).collect(),
            rows: t
                .rows
                .iter()
                .map(|row| row.iter().map(|cell| convert_leaf(cell)).collect())
                .collect(),
        },
    }
}

fn convert_leaf(text: &str) -> Vec<JsonInline<'_>> {
    emphasize(text)
        .into_iter()
        .map(|inline| match inline {
            Inline::Text(content) => JsonInline::Text { content },
            Inline::Strong(content) => JsonInline::Strong { content },
        })
        .collect()
}
