//! Error types for the input side of the lexer.
//!
//! The scanner itself never fails: malformed numbers degrade to a
//! best-effort value and unknown characters pass through as punctuation.
//! The errors here come from reading the character source (I/O failures,
//! invalid UTF-8) and from the driver opening files. Each carries the
//! position at which it happened so it can be rendered with a caret.

pub mod errors;

#[cfg(test)]
mod tests;
