//! Structural invariants on generated noisy documents.
//!
//! Documents are assembled from a pool of line shapes with a seeded LCG, so
//! failures are reproducible. Expected counts are derived from the classifier
//! alone and compared against what the assembler emits.

use mdblocks_core::classify::{classify, Token};
use mdblocks_core::inline::emphasize;
use mdblocks_core::lexer::Lexer;
use mdblocks_core::{parse, Block, Document, ListKind};

const SEED: u64 = 0x5eed;
const DOCUMENTS: usize = 200;
const MAX_LINES: u64 = 40;

const LINE_POOL: &[&str] = &[
    "## Heading",
    "### Sub **heading**",
    "#### too deep",
    "* bullet",
    "* **bold** bullet",
    "1. first",
    "42. answer",
    "3.no space",
    "",
    "   ",
    "\t",
    "plain text",
    "text with ** stray marker",
    "**a** and **b**",
    "| A | B |",
    "|---|---|",
    "| **1** | 2 |",
    "  | padded |  ",
    "| open row",
    "|",
    "||",
    "- dash",
    "日本語のテキスト",
];

struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state >> 33
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }
}

fn generate(rng: &mut Lcg) -> String {
    let lines = rng.below(MAX_LINES);
    let mut out = String::new();
    for i in 0..lines {
        if i > 0 {
            out.push_str(if rng.below(8) == 0 { "\r\n" } else { "\n" });
        }
        out.push_str(LINE_POOL[rng.below(LINE_POOL.len() as u64) as usize]);
    }
    out
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Counts {
    headings: usize,
    paragraphs: usize,
    list_items: usize,
    tables: usize,
    table_rows: usize,
}

fn expected_counts(input: &str) -> Counts {
    let mut counts = Counts::default();
    let mut run = 0usize;

    let close_run = |run: &mut usize, counts: &mut Counts| {
        if *run >= 2 {
            counts.tables += 1;
            counts.table_rows += *run - 2;
        }
        *run = 0;
    };

    for line in Lexer::new(input) {
        match classify(&line) {
            Token::TableRow(_) => {
                run += 1;
                continue;
            }
            Token::Heading { .. } => counts.headings += 1,
            Token::PlainText { .. } => counts.paragraphs += 1,
            Token::UnorderedItem { .. } | Token::OrderedItem { .. } => counts.list_items += 1,
            Token::Blank => {}
        }
        close_run(&mut run, &mut counts);
    }
    close_run(&mut run, &mut counts);

    counts
}

fn actual_counts(doc: &Document<'_>) -> Counts {
    let mut counts = Counts::default();
    for block in doc {
        match block {
            Block::Heading(_) => counts.headings += 1,
            Block::Paragraph(_) => counts.paragraphs += 1,
            Block::List(l) => counts.list_items += l.items.len(),
            Block::Table(t) => {
                counts.tables += 1;
                counts.table_rows += t.rows.len();
            }
        }
    }
    counts
}

fn for_each_document(mut check: impl FnMut(&str)) {
    let mut rng = Lcg::new(SEED);
    for _ in 0..DOCUMENTS {
        let input = generate(&mut rng);
        check(&input);
    }
}

#[test]
fn test_counts_match_classifier() {
    for_each_document(|input| {
        assert_eq!(
            actual_counts(&parse(input)),
            expected_counts(input),
            "input: {input:?}"
        );
    });
}

#[test]
fn test_parse_is_deterministic() {
    for_each_document(|input| assert_eq!(parse(input), parse(input), "input: {input:?}"));
}

#[test]
fn test_blocks_follow_source_order() {
    for_each_document(|input| {
        let doc = parse(input);
        for pair in doc.blocks.windows(2) {
            assert!(
                pair[0].span().end <= pair[1].span().start,
                "blocks out of order in {input:?}: {:?}",
                doc.blocks
            );
        }
    });
}

#[test]
fn test_lists_never_mix_kinds() {
    for_each_document(|input| {
        let doc = parse(input);
        for block in &doc {
            let Block::List(list) = block else { continue };
            assert!(!list.items.is_empty());

            let span = list.span;
            let source = &input[span.start as usize..span.end as usize];
            for line in Lexer::new(source) {
                let kind = match classify(&line) {
                    Token::UnorderedItem { .. } => ListKind::Unordered,
                    Token::OrderedItem { .. } => ListKind::Ordered,
                    other => panic!("non-item line {other:?} inside list in {input:?}"),
                };
                assert_eq!(kind, list.kind, "mixed list in {input:?}");
            }
        }
    });
}

#[test]
fn test_emphasis_preserves_text() {
    for_each_document(|input| {
        for line in Lexer::new(input) {
            let rebuilt: String = emphasize(line.text)
                .iter()
                .map(|span| {
                    if span.is_strong() {
                        format!("**{}**", span.as_str())
                    } else {
                        span.as_str().to_string()
                    }
                })
                .collect();
            assert_eq!(rebuilt, line.text);
        }
    });
}
