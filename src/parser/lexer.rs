//! Logos-based lexer for C#-family model source
//!
//! Only as much of the language as member-access scanning needs: identifiers,
//! dots, and every construct that can hide an identifier from the code
//! (comments, string and char literals). The `{...}` holes of interpolated
//! strings are code and are tokenized like the text around the string.

use std::ops::Range;

use logos::Logos;
use text_size::TextSize;

/// Coarse token classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Whitespace,
    LineComment,
    BlockComment,
    String,
    /// `$"..."`, `$@"..."` or `@$"..."`, holes included.
    InterpolatedString,
    Char,
    Ident,
    Number,
    Dot,
    Punct,
}

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl<'a> Token<'a> {
    /// Identifier text without a verbatim `@` prefix.
    pub fn ident_name(&self) -> Option<&'a str> {
        (self.kind == TokenKind::Ident).then(|| self.text.strip_prefix('@').unwrap_or(self.text))
    }

}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.inner.span().start as u32);

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => TokenKind::Punct,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
///
/// Each interpolated string is followed by the tokens of its holes, in order.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    push_tokens(input, TextSize::new(0), &mut tokens);
    tokens
}

fn push_tokens<'a>(input: &'a str, base: TextSize, out: &mut Vec<Token<'a>>) {
    for token in Lexer::new(input) {
        let token = Token {
            offset: base + token.offset,
            ..token
        };
        if token.kind != TokenKind::InterpolatedString {
            out.push(token);
            continue;
        }
        let text = token.text;
        let offset = token.offset;
        out.push(token);
        for (start, hole) in interpolation_holes(text) {
            push_tokens(hole, offset + TextSize::new(start as u32), out);
        }
    }
}

/// Holes of an interpolated string token, with their byte offset in `text`.
fn interpolation_holes(text: &str) -> Vec<(usize, &str)> {
    let Some(quote) = text.find('"') else {
        return Vec::new();
    };
    let verbatim = text[..quote].contains('@');
    let body = quote + 1;
    scan_interpolated(&text[body..], verbatim)
        .holes
        .into_iter()
        .map(|range| (body + range.start, &text[body + range.start..body + range.end]))
        .collect()
}

/// Logos token enum - maps to TokenKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum LogosToken {
    #[regex(r"\s+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    /// Runs to the end of input when unterminated.
    #[token("/*", block_comment)]
    BlockComment,

    #[token("\"", regular_string)]
    String,

    #[token("@\"", verbatim_string)]
    VerbatimString,

    #[token("$\"", interpolated_string)]
    #[token("$@\"", interpolated_string)]
    #[token("@$\"", interpolated_string)]
    InterpolatedString,

    #[token("'", char_literal)]
    Char,

    #[regex(r"@?[\p{L}_][\p{L}\p{N}_]*")]
    Ident,

    #[regex(r"[0-9][0-9a-zA-Z_]*")]
    Number,

    #[token(".")]
    Dot,

    #[regex(r#"[^\s\p{L}\p{N}_."']"#)]
    Punct,
}

impl From<LogosToken> for TokenKind {
    fn from(token: LogosToken) -> Self {
        match token {
            LogosToken::Whitespace => TokenKind::Whitespace,
            LogosToken::LineComment => TokenKind::LineComment,
            LogosToken::BlockComment => TokenKind::BlockComment,
            LogosToken::String | LogosToken::VerbatimString => TokenKind::String,
            LogosToken::InterpolatedString => TokenKind::InterpolatedString,
            LogosToken::Char => TokenKind::Char,
            LogosToken::Ident => TokenKind::Ident,
            LogosToken::Number => TokenKind::Number,
            LogosToken::Dot => TokenKind::Dot,
            LogosToken::Punct => TokenKind::Punct,
        }
    }
}

fn block_comment(lex: &mut logos::Lexer<LogosToken>) {
    let rest = lex.remainder();
    let len = rest.find("*/").map_or(rest.len(), |i| i + 2);
    lex.bump(len);
}

/// Ends at the closing quote, or before the newline when unterminated.
fn regular_string(lex: &mut logos::Lexer<LogosToken>) {
    lex.bump(quoted_len(lex.remainder(), '"'));
}

fn char_literal(lex: &mut logos::Lexer<LogosToken>) {
    lex.bump(quoted_len(lex.remainder(), '\''));
}

fn quoted_len(rest: &str, quote: char) -> usize {
    let mut chars = rest.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '\n' => return i,
            c if c == quote => return i + c.len_utf8(),
            _ => {}
        }
    }
    rest.len()
}

/// `""` is an escaped quote; newlines are allowed.
fn verbatim_string(lex: &mut logos::Lexer<LogosToken>) {
    let rest = lex.remainder();
    let bytes = rest.as_bytes();
    let mut i = 0;
    let len = loop {
        match bytes.get(i) {
            None => break rest.len(),
            Some(b'"') if bytes.get(i + 1) == Some(&b'"') => i += 2,
            Some(b'"') => break i + 1,
            Some(_) => i += 1,
        }
    };
    lex.bump(len);
}

fn interpolated_string(lex: &mut logos::Lexer<LogosToken>) {
    let verbatim = lex.slice().contains('@');
    lex.bump(scan_interpolated(lex.remainder(), verbatim).len);
}

/// Extent of an interpolated string body and the ranges of its holes.
struct Interpolation {
    len: usize,
    holes: Vec<Range<usize>>,
}

/// Walk an interpolated string body, just past its opening quote.
///
/// `{{` and `}}` are literal braces. Inside a hole, braces nest and quoted
/// literals are skipped whole. A non-verbatim string stops before a newline
/// that is not inside a hole.
fn scan_interpolated(rest: &str, verbatim: bool) -> Interpolation {
    let bytes = rest.as_bytes();
    let mut holes = Vec::new();
    let mut depth = 0usize;
    let mut hole_start = 0;
    let mut i = 0;

    while let Some(&b) = bytes.get(i) {
        if depth == 0 {
            match b {
                b'{' if bytes.get(i + 1) == Some(&b'{') => i += 2,
                b'{' => {
                    depth = 1;
                    hole_start = i + 1;
                    i += 1;
                }
                b'"' if verbatim && bytes.get(i + 1) == Some(&b'"') => i += 2,
                b'"' => return Interpolation { len: i + 1, holes },
                b'\\' if !verbatim => i += 2,
                b'\n' if !verbatim => return Interpolation { len: i, holes },
                _ => i += 1,
            }
        } else {
            match b {
                b'{' => {
                    depth += 1;
                    i += 1;
                }
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        holes.push(hole_start..i);
                    }
                    i += 1;
                }
                b'"' | b'\'' => i += 1 + quoted_len(&rest[i + 1..], char::from(b)),
                _ => i += 1,
            }
        }
    }
    Interpolation {
        len: rest.len(),
        holes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<(TokenKind, &str)> {
        tokenize(input)
            .into_iter()
            .filter(|t| t.kind != TokenKind::Whitespace)
            .map(|t| (t.kind, t.text))
            .collect()
    }

    #[test]
    fn test_member_access() {
        assert_eq!(
            kinds("weather.MinT;"),
            vec![
                (TokenKind::Ident, "weather"),
                (TokenKind::Dot, "."),
                (TokenKind::Ident, "MinT"),
                (TokenKind::Punct, ";"),
            ]
        );
    }

    #[test]
    fn test_line_comment() {
        assert_eq!(
            kinds("x // weather.MinT\ny"),
            vec![
                (TokenKind::Ident, "x"),
                (TokenKind::LineComment, "// weather.MinT"),
                (TokenKind::Ident, "y"),
            ]
        );
    }

    #[test]
    fn test_block_comment() {
        let tokens = kinds("a /* weather.MinT\n weather.VP */ b");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].0, TokenKind::BlockComment);
        assert_eq!(tokens[2], (TokenKind::Ident, "b"));
    }

    #[test]
    fn test_unterminated_block_comment_runs_to_end() {
        let tokens = kinds("a /* weather.MinT");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1], (TokenKind::BlockComment, "/* weather.MinT"));
    }

    #[test]
    fn test_strings() {
        assert_eq!(
            kinds(r#""weather.MinT \" x""#),
            vec![(TokenKind::String, r#""weather.MinT \" x""#)]
        );
        assert_eq!(
            kinds(r#"@"a ""b"" c""#),
            vec![(TokenKind::String, r#"@"a ""b"" c""#)]
        );
    }

    #[test]
    fn test_interpolation_holes_are_code() {
        assert_eq!(
            kinds(r#"$"T {weather.MinT:F1}""#),
            vec![
                (TokenKind::InterpolatedString, r#"$"T {weather.MinT:F1}""#),
                (TokenKind::Ident, "weather"),
                (TokenKind::Dot, "."),
                (TokenKind::Ident, "MinT"),
                (TokenKind::Punct, ":"),
                (TokenKind::Ident, "F1"),
            ]
        );
    }

    #[test]
    fn test_interpolation_escaped_braces_are_text() {
        assert_eq!(
            kinds(r#"$"{{weather.MinT}}" x"#),
            vec![
                (TokenKind::InterpolatedString, r#"$"{{weather.MinT}}""#),
                (TokenKind::Ident, "x"),
            ]
        );
    }

    #[test]
    fn test_interpolation_nested_literals() {
        let src = r#"$@"{d.ToString("F1")} ""mm"" {n['a']}" z"#;
        let tokens = kinds(src);
        assert_eq!(tokens[0], (TokenKind::InterpolatedString, r#"$@"{d.ToString("F1")} ""mm"" {n['a']}""#));
        assert!(tokens.contains(&(TokenKind::String, r#""F1""#)));
        assert!(tokens.contains(&(TokenKind::Char, "'a'")));
        assert_eq!(tokens.last(), Some(&(TokenKind::Ident, "z")));
    }

    #[test]
    fn test_hole_offsets() {
        let tokens = tokenize(r#"x = $"{a.b}";"#);
        let a = tokens.iter().find(|t| t.text == "a").unwrap();
        assert_eq!(a.offset, TextSize::new(7));
    }

    #[test]
    fn test_unterminated_string_stops_at_newline() {
        let tokens = kinds("\"abc\nweather");
        assert_eq!(tokens[0], (TokenKind::String, "\"abc"));
        assert_eq!(tokens[1], (TokenKind::Ident, "weather"));
    }

    #[test]
    fn test_char_literal() {
        assert_eq!(kinds("'.'"), vec![(TokenKind::Char, "'.'")]);
        assert_eq!(kinds(r"'\''"), vec![(TokenKind::Char, r"'\''")]);
    }

    #[test]
    fn test_verbatim_identifier() {
        let tokens = tokenize("@class");
        assert_eq!(tokens[0].ident_name(), Some("class"));
    }

    #[test]
    fn test_number_is_not_member_access() {
        assert_eq!(
            kinds("0.66"),
            vec![
                (TokenKind::Number, "0"),
                (TokenKind::Dot, "."),
                (TokenKind::Number, "66"),
            ]
        );
    }

    #[test]
    fn test_offsets() {
        let tokens = tokenize("ab.cd");
        assert_eq!(tokens[2].offset, TextSize::new(3));
    }
}
