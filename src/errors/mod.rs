//! Error types and diagnostics for the lexer.
//!
//! This module defines the error types produced while scanning. It includes:
//!
//! - Error structures with line/column and filename information
//! - The illegal-character diagnostic and the table validation error
//! - Message formatting and tips for terminal display

pub mod errors;
