//! Discovery of `field.Member` accesses in model source text.
//!
//! Given the name of a linked collaborator field, the scanner reports which
//! members of it the source reads or writes, in order of first appearance and
//! without duplicates. Accesses that are commented out are not reported.

use indexmap::IndexSet;
use tracing::trace;
use unicode_ident::is_xid_continue;

use super::lexer::{Token, TokenKind, tokenize};

/// How commented-out accesses are recognised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CommentDetection {
    /// Tokenize the source once; accesses inside line comments, block
    /// comments, string literals and char literals are all excluded. Holes of
    /// interpolated strings are code and are scanned.
    #[default]
    Tokenized,
    /// Plain substring matching. An access is excluded only when a `//`
    /// appears after the last newline before it, so block comments and string
    /// literals are not recognised.
    LineHeuristic,
}

/// Scans one source text for member accesses through named fields.
///
/// The text is tokenized once on construction and reused for every field
/// scanned.
pub struct UsageScanner<'s> {
    source: &'s str,
    tokens: Vec<Token<'s>>,
    mode: CommentDetection,
}

impl<'s> UsageScanner<'s> {
    pub fn new(source: &'s str, mode: CommentDetection) -> Self {
        let tokens = match mode {
            CommentDetection::Tokenized => tokenize(source),
            CommentDetection::LineHeuristic => Vec::new(),
        };
        Self {
            source,
            tokens,
            mode,
        }
    }

    /// Distinct member names accessed as `field.<member>`, first occurrence first.
    pub fn scan(&self, field: &str) -> Vec<String> {
        let found = match self.mode {
            CommentDetection::Tokenized => self.scan_tokens(field),
            CommentDetection::LineHeuristic => self.scan_text(field),
        };
        found.into_iter().map(str::to_string).collect()
    }

    fn scan_tokens(&self, field: &str) -> IndexSet<&'s str> {
        let mut found = IndexSet::new();
        for window in self.tokens.windows(3) {
            let [target, dot, member] = window else {
                continue;
            };
            if target.ident_name() != Some(field) || dot.kind != TokenKind::Dot {
                continue;
            }
            let Some(name) = member.ident_name() else {
                continue;
            };
            // Adjacency is guaranteed: whitespace and comments are tokens too.
            trace!(field, member = name, offset = u32::from(target.offset), "usage");
            found.insert(name);
        }
        found
    }

    fn scan_text(&self, field: &str) -> IndexSet<&'s str> {
        let source = self.source;
        let pattern = format!("{field}.");
        let step = field.chars().next().map_or(1, char::len_utf8);
        let mut found = IndexSet::new();
        let mut from = 0;

        while let Some(rel) = source[from..].find(&pattern) {
            let start = from + rel;
            let member_start = start + pattern.len();
            let member_len: usize = source[member_start..]
                .chars()
                .take_while(|c| is_xid_continue(*c))
                .map(char::len_utf8)
                .sum();
            if member_len == 0 {
                from = start + step;
                continue;
            }
            from = member_start + member_len;

            if is_line_commented(source, start) {
                trace!(field, offset = start, "commented-out usage skipped");
                continue;
            }
            found.insert(&source[member_start..from]);
        }
        found
    }
}

/// Scan `source` once for accesses through `field`.
pub fn scan_usages(field: &str, source: &str, mode: CommentDetection) -> Vec<String> {
    UsageScanner::new(source, mode).scan(field)
}

/// A `//` nearer than the previous newline means the position is commented out.
fn is_line_commented(source: &str, position: usize) -> bool {
    let before = &source[..position];
    match (before.rfind("//"), before.rfind('\n')) {
        (Some(comment), Some(newline)) => comment > newline,
        (Some(_), None) => true,
        (None, _) => false,
    }
}
