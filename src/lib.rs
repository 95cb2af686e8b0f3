#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

pub use lexer::{
    hooks::{LexerHooks, NoopHooks},
    lexer::{tokenize, Lexer},
    options::{BuildOptions, LexerOptions},
    tokens::{Token, TokenKind},
};

/// 1-based line and column of a token or diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

/// Byte range of a lexeme in the input buffer (half-open).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Column of `offset`, counted in characters from the preceding newline
/// (or the start of the buffer) and starting at 1.
pub fn find_column(source: &str, offset: usize) -> u32 {
    let offset = offset.min(source.len());
    let line_start = source[..offset].rfind('\n').map_or(0, |i| i + 1);

    source[line_start..offset].chars().count() as u32 + 1
}

/// Returns the line number, the text of the line and the character offset
/// within it for a byte offset into `source`.
pub fn line_at_position(source: &str, offset: usize) -> Option<(usize, String, usize)> {
    if offset >= source.len() {
        return None;
    }

    let mut start = 0;

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&offset) {
            let line_pos = source[start..offset].chars().count();
            return Some((index + 1, line.to_string(), line_pos));
        }

        start = end;
    }

    None
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_find_column() {
        let source = "ab\ncd\n\nxyz";

        assert_eq!(super::find_column(source, 0), 1);
        assert_eq!(super::find_column(source, 1), 2);
        assert_eq!(super::find_column(source, 3), 1);
        assert_eq!(super::find_column(source, 4), 2);
        assert_eq!(super::find_column(source, 9), 3);
    }

    #[test]
    fn test_find_column_counts_characters() {
        let source = "é@";
        assert_eq!(super::find_column(source, "é".len()), 2);
    }

    #[test]
    fn test_line_at_position() {
        let source = "Hello, world!\nfoo\nbar\nTesting { }\n";

        let (line_number, line, line_pos) = super::line_at_position(source, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::line_at_position(source, 30).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);

        assert!(super::line_at_position(source, source.len()).is_none());
    }

    #[test]
    fn test_render_diagnostic() {
        let (_, errors) = super::tokenize("A : matrix\n  x @ y", None);
        let rendered = super::render_diagnostic(&errors[0], "A : matrix\n  x @ y");

        assert!(rendered.starts_with("Error: IllegalCharacter"));
        assert!(rendered.contains("2 | x @ y"));
        assert!(rendered.trim_end().ends_with("--^"));
    }
}

/// Renders a diagnostic with the offending line and a caret under the column.
pub fn render_diagnostic(error: &Error, source: &str) -> String {
    /*
        Error: IllegalCharacter (...)
        -> gemver.m
           |
        20 | x = @ y
           | ----^
    */

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }

    let file = if error.get_file().is_empty() { "<input>" } else { error.get_file() };
    out.push_str(&format!("-> {}\n", file));

    let Some((line, line_text, line_pos)) = line_at_position(source, error.get_offset()) else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}
