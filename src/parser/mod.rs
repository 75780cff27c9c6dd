//! Source text scanning.
//!
//! - `lexer` - Logos-based tokenizer that separates code from comments and literals
//! - `usage` - Finds `field.Member` accesses for linked collaborator fields

mod lexer;
mod usage;

pub use lexer::{Lexer, Token, TokenKind, tokenize};
pub use usage::{CommentDetection, UsageScanner, scan_usages};
