//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's TokenValue
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, TokenValue::Number(42.0), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
    ($kind:expr, $span:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $crate::lexer::tokens::TokenValue::None,
            span: $span,
        }
    };
}
