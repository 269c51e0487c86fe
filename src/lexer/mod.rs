//! Lexical analysis for the expression language.
//!
//! This module contains the pull scanner that converts a character stream
//! into tokens on demand. It handles:
//!
//! - The `def` and `extern` keywords and ASCII identifiers
//! - Greedy numeric literals made of digits and dots
//! - `#` line comments and whitespace
//! - Every other character as single-character punctuation
//!
//! Characters come from any [`source::CharSource`]; string iterators work
//! directly and [`source::ReaderSource`] decodes UTF-8 from a byte reader.

pub mod scanner;
pub mod source;
pub mod tokens;
