#![deny(missing_docs)]

//! # Description Normalizer
//!
//! Joins soft-wrapped lines inside markdown paragraphs of every `description`
//! field. Paragraph breaks, lists, code fences and hard breaks are kept as
//! written and no new wraps are introduced.

use crate::walk::fold_descriptions;
use derive_more::Display;
use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag};
use serde_json::Value;
use std::ops::Range;
use tracing::warn;

/// A reflow pass refused its input. The caller keeps the original text.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{message}")]
pub struct ReflowError {
    /// What was wrong with the input.
    pub message: String,
}

impl std::error::Error for ReflowError {}

/// Reformats one markdown string.
pub trait Reflow {
    /// Returns the reformatted text, or an error if the input is rejected.
    fn reflow(&self, text: &str) -> Result<String, ReflowError>;
}

/// [`Reflow`] backed by `pulldown-cmark` source offsets.
///
/// Every soft line break, including the indentation and block quote markers
/// that follow it, becomes a single space. Everything else is copied verbatim.
/// Trailing whitespace is trimmed from the result.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownReflow;

impl MarkdownReflow {
    fn options() -> Options {
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
    }
}

impl Reflow for MarkdownReflow {
    fn reflow(&self, text: &str) -> Result<String, ReflowError> {
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        let events: Vec<(Event<'_>, Range<usize>)> =
            Parser::new_ext(text, Self::options()).into_offset_iter().collect();

        let mut out = String::with_capacity(text.len());
        let mut cursor = 0;

        for (event, range) in &events {
            match event {
                Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(_))) => {
                    if !fence_is_closed(&text[range.clone()]) {
                        return Err(ReflowError {
                            message: format!("unterminated code fence at byte {}", range.start),
                        });
                    }
                }
                Event::SoftBreak => {
                    let start = text[..range.start]
                        .trim_end_matches([' ', '\t'])
                        .len()
                        .max(cursor);
                    // Indentation and block quote markers of the continuation line.
                    let rest = &text[range.end..];
                    let skipped = rest.len() - rest.trim_start_matches([' ', '\t', '>']).len();
                    let end = range.end + skipped;

                    out.push_str(&text[cursor..start]);
                    out.push(' ');
                    cursor = end;
                }
                _ => {}
            }
        }

        out.push_str(&text[cursor..]);
        Ok(out.trim_end().to_string())
    }
}

/// `block` is the source of a fenced code block; a closed block ends with a
/// fence line of the same character that is at least as long as the opener.
fn fence_is_closed(block: &str) -> bool {
    let strip = |line: &str| line.trim_start_matches([' ', '\t', '>']).trim_end().to_string();
    let mut lines = block.lines().map(strip);

    let Some(open) = lines.next() else {
        return false;
    };
    let Some(marker) = open.chars().next().filter(|c| *c == '`' || *c == '~') else {
        return true;
    };
    let width = open.chars().take_while(|c| *c == marker).count();

    lines
        .filter(|line| !line.is_empty())
        .last()
        .map(|last| last.len() >= width && last.chars().all(|c| c == marker))
        .unwrap_or(false)
}

/// Counters reported by [`clean_descriptions`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanStats {
    /// `description` strings seen.
    pub visited: usize,
    /// `description` strings whose text changed.
    pub changed: usize,
}

/// Reflows every `description` string in `value`.
///
/// A field the reflow pass rejects keeps its original text and logs a warning.
pub fn clean_descriptions(value: &Value, reflow: &impl Reflow) -> (Value, CleanStats) {
    fold_descriptions(value, |text, stats: &mut CleanStats| {
        stats.visited += 1;
        match reflow.reflow(text) {
            Ok(cleaned) => {
                if cleaned != text {
                    stats.changed += 1;
                }
                cleaned
            }
            Err(e) => {
                warn!(error = %e, "could not reflow description, keeping original");
                text.to_string()
            }
        }
    })
}
