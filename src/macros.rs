//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a pattern handler for fixed-kind tokens

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The matched lexeme
/// * `$span` - The byte span in the input buffer
/// * `$position` - The line and column of the first character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), span, position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr, $position:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
            position: $position,
        }
    };
}

/// Creates a handler that emits the matched lexeme as a token of `$kind`.
///
/// # Example
///
/// ```ignore
/// RegexPattern::new("plus", r"\+", MK_DEFAULT_HANDLER!(TokenKind::Plus))
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {
        |lexer: &mut Lexer, value: &str| Some(lexer.make_token($kind, value))
    };
}
