//! Collaborator hooks a parser hands to the lexer at construction time.
//!
//! The error sink is always called for illegal characters. The brace hooks
//! and the type lookup are only called when `LexerOptions::invoke_hooks`
//! is set; otherwise they are stored for the parser to reach through
//! `Lexer::hooks`.

pub trait LexerHooks {
    /// Receives the raw message of every lexical diagnostic.
    fn on_error(&mut self, _message: &str, _line: u32, _column: u32) {}

    /// A block-opening `{` was emitted.
    fn on_lbrace(&mut self) {}

    /// A block-closing `}` was emitted.
    fn on_rbrace(&mut self) {}

    /// Whether `name` currently names a type rather than a variable.
    fn type_lookup(&self, _name: &str) -> bool {
        false
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHooks;

impl LexerHooks for NoopHooks {}
