use std::{iter::FusedIterator, rc::Rc};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{Position, Span, MK_TOKEN};

use super::{
    source::CharSource,
    tokens::{Token, TokenKind, TokenValue, RESERVED_LOOKUP},
};

lazy_static! {
    // The part of a run of digits and dots that reads as a decimal number,
    // the way strtod stops at the first character it cannot use.
    static ref NUMBER_PREFIX: Regex = Regex::new(r"^[0-9]*(?:\.[0-9]*)?").unwrap();
}

/// Pull scanner over a borrowed character source.
///
/// The scanner holds exactly one character of lookahead. It is primed on
/// construction, and every call to [`Scanner::next_token`] leaves it on the
/// first character after the token it returned.
pub struct Scanner<'a, S: CharSource + ?Sized> {
    source: &'a mut S,
    pending: Option<char>,
    pos: u32,
    file: Rc<String>,
}

impl<'a, S: CharSource + ?Sized> Scanner<'a, S> {
    pub fn new(source: &'a mut S) -> Scanner<'a, S> {
        Scanner::with_file(source, None)
    }

    pub fn with_file(source: &'a mut S, file: Option<String>) -> Scanner<'a, S> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let pending = source.next_char();

        Scanner {
            source,
            pending,
            pos: 0,
            file: file_name,
        }
    }

    /// Offset of the lookahead character, or of the end of input.
    pub fn position(&self) -> Position {
        Position(self.pos, Rc::clone(&self.file))
    }

    fn advance(&mut self) {
        // Once the source reports end of input it is never read again.
        if self.pending.is_some() {
            self.pos = self.pos.saturating_add(1);
            self.pending = self.source.next_char();
        }
    }

    fn span_from(&self, start: u32) -> Span {
        Span {
            start: Position(start, Rc::clone(&self.file)),
            end: self.position(),
        }
    }

    pub fn next_token(&mut self) -> Token {
        loop {
            while matches!(self.pending, Some(c) if is_space(c)) {
                self.advance();
            }

            let start = self.pos;
            let token = match self.pending {
                Some(c) if c.is_ascii_alphabetic() => self.scan_identifier(start),
                Some(c) if c.is_ascii_digit() || c == '.' => self.scan_number(start),
                Some('#') => {
                    self.skip_comment();
                    continue;
                }
                None => {
                    debug!(file = %self.file, offset = self.pos, "end of input");
                    MK_TOKEN!(TokenKind::EndOfInput, self.span_from(start))
                }
                Some(c) => {
                    self.advance();
                    MK_TOKEN!(TokenKind::Punctuation(c), self.span_from(start))
                }
            };

            trace!(offset = start, "{}", token);
            return token;
        }
    }

    fn scan_identifier(&mut self, start: u32) -> Token {
        let mut text = String::new();

        while let Some(c) = self.pending.filter(char::is_ascii_alphanumeric) {
            text.push(c);
            self.advance();
        }

        if let Some(kind) = RESERVED_LOOKUP.get(text.as_str()) {
            MK_TOKEN!(*kind, self.span_from(start))
        } else {
            MK_TOKEN!(
                TokenKind::Identifier,
                TokenValue::Text(text),
                self.span_from(start)
            )
        }
    }

    fn scan_number(&mut self, start: u32) -> Token {
        let mut text = String::new();

        while let Some(c) = self.pending.filter(|c| c.is_ascii_digit() || *c == '.') {
            text.push(c);
            self.advance();
        }

        MK_TOKEN!(
            TokenKind::Number,
            TokenValue::Number(parse_number(&text)),
            self.span_from(start)
        )
    }

    /// Drops everything up to and including the next line break.
    fn skip_comment(&mut self) {
        let start = self.pos;

        loop {
            self.advance();
            match self.pending {
                None => break,
                Some('\n' | '\r') => {
                    self.advance();
                    break;
                }
                Some(_) => {}
            }
        }

        debug!(file = %self.file, start, end = self.pos, "skipped comment");
    }
}

impl<S: CharSource + ?Sized> Iterator for Scanner<'_, S> {
    type Item = Token;

    /// Yields every token before `EndOfInput`.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();

        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

impl<S: CharSource + ?Sized> FusedIterator for Scanner<'_, S> {}

/// Space, tab, newline, vertical tab, form feed, carriage return.
fn is_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b'
}

/// Best-effort decimal parse of a run of digits and dots.
///
/// Parses the longest leading prefix that forms a number and ignores the
/// rest, so `"1.2.3"` is `1.2`. Text with no usable prefix, such as `"."`,
/// is `0.0`.
pub fn parse_number(text: &str) -> f64 {
    NUMBER_PREFIX
        .find(text)
        .and_then(|prefix| prefix.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Scans a whole string, ending with the `EndOfInput` token.
pub fn tokenize(source: &str, file: Option<String>) -> Vec<Token> {
    let mut chars = source.chars();
    let mut scanner = Scanner::with_file(&mut chars, file);
    let mut tokens = vec![];

    loop {
        let token = scanner.next_token();
        let done = token.is_eof();
        tokens.push(token);

        if done {
            break;
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::Scanner;

    #[test]
    fn test_offsets_saturate_at_u32_max() {
        let mut chars = "abc (".chars();
        let mut scanner = Scanner::new(&mut chars);
        scanner.pos = u32::MAX - 1;

        let token = scanner.next_token();
        assert_eq!(token.identifier(), Some("abc"));
        assert_eq!(token.span.start.0, u32::MAX - 1);
        assert_eq!(token.span.end.0, u32::MAX);

        let paren = scanner.next_token();
        assert_eq!(paren.span.start.0, u32::MAX);
        assert_eq!(paren.span.end.0, u32::MAX);
        assert!(scanner.next_token().is_eof());
    }
}
