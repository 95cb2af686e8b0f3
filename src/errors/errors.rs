use std::{fmt::Display, rc::Rc};

use thiserror::Error;

use crate::Position;

/// Tag placed in front of every lexer message.
pub const MESSAGE_TAG: &str = "[matrixlexer]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
    offset: usize,
    file: Rc<String>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position, offset: usize, file: Rc<String>) -> Self {
        Error {
            internal_error: error_impl,
            position,
            offset,
            file,
        }
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_offset(&self) -> usize {
        self.offset
    }

    pub fn get_file(&self) -> &str {
        &self.file
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => "IllegalCharacter",
            ErrorImpl::MalformedTable { .. } => "MalformedTable",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { character } => ErrorTip::Suggestion(format!(
                "`{}` is not part of the annotation language and was skipped",
                character
            )),
            ErrorImpl::MalformedTable { .. } => ErrorTip::None,
        }
    }

    /// The raw message sent to the error sink and stored in diagnostics.
    pub fn message(&self) -> String {
        if self.file.is_empty() {
            format!(
                "{} {} at line {}, column {}",
                MESSAGE_TAG, self.internal_error, self.position.line, self.position.column
            )
        } else {
            format!(
                "{} {}: {} at line {}, column {}",
                MESSAGE_TAG, self.file, self.internal_error, self.position.line, self.position.column
            )
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("illegal character '{character}'")]
    IllegalCharacter { character: char },
    #[error("malformed lexer rule {rule}: {reason}")]
    MalformedTable { rule: String, reason: String },
}
