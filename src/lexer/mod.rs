//! Lexical analysis for the matrix annotation language.
//!
//! This module contains the lexer (tokenizer) that converts annotation text
//! into a stream of tokens for the parser. It handles:
//!
//! - Tokenization using an ordered table of regex patterns
//! - Recognition of keywords, qualified identifiers, literals, and operators
//! - Line and column tracking for every token and diagnostic
//! - Non-fatal recovery from illegal characters
//! - Parser hooks for block boundaries and type names

pub mod hooks;
pub mod lexer;
pub mod options;
pub mod tokens;
