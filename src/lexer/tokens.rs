use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::{Position, Span};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("column", TokenKind::Column);
        map.insert("for", TokenKind::For);
        map.insert("in", TokenKind::In);
        map.insert("inout", TokenKind::Inout);
        map.insert("matrix", TokenKind::Matrix);
        map.insert("format", TokenKind::Format);
        map.insert("out", TokenKind::Out);
        map.insert("row", TokenKind::Row);
        map.insert("scalar", TokenKind::Scalar);
        map.insert("vector", TokenKind::Vector);
        map.insert("orientation", TokenKind::Orientation);
        map.insert("general", TokenKind::General);
        map.insert("triangular", TokenKind::Triangular);
        map.insert("uplo", TokenKind::Uplo);
        map.insert("upper", TokenKind::Upper);
        map.insert("lower", TokenKind::Lower);
        map.insert("diag", TokenKind::Diag);
        map.insert("unit", TokenKind::Unit);
        map.insert("nonunit", TokenKind::Nonunit);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    TypeName, // only with hook invocation enabled
    Integer,
    Float,
    String,

    Plus,
    Minus,
    Times,
    Divide,
    Mod,
    Or,
    And,
    Not, // shadowed by `!` comments
    Less,
    LessEquals,
    Greater,
    GreaterEquals,
    Eq,
    NotEquals, // shadowed by `!` comments

    Equals, // =
    TimesEqual,
    DivEqual,
    ModEqual,
    PlusEqual,
    MinusEqual,

    PlusPlus,
    MinusMinus,

    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    Comma,
    Semicolon,
    Colon,
    Period,
    SingleQuote,

    LineComment,

    // Reserved
    Column,
    For,
    In,
    Inout,
    Matrix,
    Format,
    Out,
    Row,
    Scalar,
    Vector,
    Orientation,
    General,
    Triangular,
    Uplo,
    Upper,
    Lower,
    Diag,
    Unit,
    Nonunit,
}

impl TokenKind {
    /// Canonical grammar name of the kind, e.g. `ID`, `MATRIX`, `LPAREN`.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "ID",
            TokenKind::TypeName => "TYPEID",
            TokenKind::Integer => "ICONST",
            TokenKind::Float => "FCONST",
            TokenKind::String => "SCONST_D",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Times => "TIMES",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Mod => "MOD",
            TokenKind::Or => "LOR",
            TokenKind::And => "LAND",
            TokenKind::Not => "LNOT",
            TokenKind::Less => "LT",
            TokenKind::LessEquals => "LE",
            TokenKind::Greater => "GT",
            TokenKind::GreaterEquals => "GE",
            TokenKind::Eq => "EQ",
            TokenKind::NotEquals => "NE",
            TokenKind::Equals => "EQUALS",
            TokenKind::TimesEqual => "TIMESEQUAL",
            TokenKind::DivEqual => "DIVEQUAL",
            TokenKind::ModEqual => "MODEQUAL",
            TokenKind::PlusEqual => "PLUSEQUAL",
            TokenKind::MinusEqual => "MINUSEQUAL",
            TokenKind::PlusPlus => "PLUSPLUS",
            TokenKind::MinusMinus => "MINUSMINUS",
            TokenKind::OpenParen => "LPAREN",
            TokenKind::CloseParen => "RPAREN",
            TokenKind::OpenBracket => "LBRACKET",
            TokenKind::CloseBracket => "RBRACKET",
            TokenKind::OpenCurly => "LBRACE",
            TokenKind::CloseCurly => "RBRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMI",
            TokenKind::Colon => "COLON",
            TokenKind::Period => "PERIOD",
            TokenKind::SingleQuote => "SQUOTE",
            TokenKind::LineComment => "LINECOMMENT",
            TokenKind::Column => "COLUMN",
            TokenKind::For => "FOR",
            TokenKind::In => "IN",
            TokenKind::Inout => "INOUT",
            TokenKind::Matrix => "MATRIX",
            TokenKind::Format => "FORMAT",
            TokenKind::Out => "OUT",
            TokenKind::Row => "ROW",
            TokenKind::Scalar => "SCALAR",
            TokenKind::Vector => "VECTOR",
            TokenKind::Orientation => "ORIENTATION",
            TokenKind::General => "GENERAL",
            TokenKind::Triangular => "TRIANGULAR",
            TokenKind::Uplo => "UPLO",
            TokenKind::Upper => "UPPER",
            TokenKind::Lower => "LOWER",
            TokenKind::Diag => "DIAG",
            TokenKind::Unit => "UNIT",
            TokenKind::Nonunit => "NONUNIT",
        }
    }

    pub fn is_reserved(&self) -> bool {
        RESERVED_LOOKUP.values().any(|kind| kind == self)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LexToken({},'{}',{},{})",
            self.kind, self.value, self.position.line, self.position.column
        )
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn line(&self) -> u32 {
        self.position.line
    }

    pub fn column(&self) -> u32 {
        self.position.column
    }

    pub fn debug(&self) {
        if self.is_one_of_many(&[
            TokenKind::String,
            TokenKind::Identifier,
            TokenKind::TypeName,
            TokenKind::Integer,
            TokenKind::Float,
            TokenKind::LineComment,
        ]) {
            println!("{} ({})", self.kind, self.value);
        } else {
            println!("{} ()", self.kind);
        }
    }
}
