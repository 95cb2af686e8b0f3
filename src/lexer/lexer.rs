use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace, warn};

use crate::{
    errors::errors::{Error, ErrorImpl},
    find_column, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::{
    hooks::{LexerHooks, NoopHooks},
    options::{BuildOptions, LexerOptions},
    tokens::{Token, TokenKind, RESERVED_LOOKUP},
};

pub type RegexHandler = fn(&mut Lexer, &str) -> Option<Token>;

pub const IDENTIFIER_RULE: &str = "identifier";

pub struct RegexPattern {
    pub name: &'static str,
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    fn new(name: &'static str, pattern: &str, handler: RegexHandler) -> RegexPattern {
        RegexPattern {
            name,
            regex: Regex::new(&format!("^(?:{})", pattern)).expect("lexer rules are valid regexes"),
            handler,
        }
    }

    /// The prefix of `input` this rule matches, if any.
    pub fn find<'a>(&self, input: &'a str) -> Option<&'a str> {
        self.regex.find(input).map(|m| m.as_str())
    }
}

lazy_static! {
    /// Rules in priority order; the first one that matches at the cursor wins.
    pub static ref PATTERNS: Vec<RegexPattern> = vec![
        // Also takes every `!`, so there are no rules for `!` and `!=`.
        RegexPattern::new("line_comment", r"[#!][^\n\r]*", MK_DEFAULT_HANDLER!(TokenKind::LineComment)),

        RegexPattern::new("lor", r"\|\|", MK_DEFAULT_HANDLER!(TokenKind::Or)),
        RegexPattern::new("land", "&&", MK_DEFAULT_HANDLER!(TokenKind::And)),
        RegexPattern::new("le", "<=", MK_DEFAULT_HANDLER!(TokenKind::LessEquals)),
        RegexPattern::new("ge", ">=", MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals)),
        RegexPattern::new("eq", "==", MK_DEFAULT_HANDLER!(TokenKind::Eq)),
        RegexPattern::new("times_equal", r"\*=", MK_DEFAULT_HANDLER!(TokenKind::TimesEqual)),
        RegexPattern::new("div_equal", "/=", MK_DEFAULT_HANDLER!(TokenKind::DivEqual)),
        RegexPattern::new("mod_equal", "%=", MK_DEFAULT_HANDLER!(TokenKind::ModEqual)),
        RegexPattern::new("plus_equal", r"\+=", MK_DEFAULT_HANDLER!(TokenKind::PlusEqual)),
        RegexPattern::new("minus_equal", "-=", MK_DEFAULT_HANDLER!(TokenKind::MinusEqual)),
        RegexPattern::new("plus_plus", r"\+\+", MK_DEFAULT_HANDLER!(TokenKind::PlusPlus)),
        RegexPattern::new("minus_minus", "--", MK_DEFAULT_HANDLER!(TokenKind::MinusMinus)),

        RegexPattern::new("plus", r"\+", MK_DEFAULT_HANDLER!(TokenKind::Plus)),
        RegexPattern::new("minus", "-", MK_DEFAULT_HANDLER!(TokenKind::Minus)),
        RegexPattern::new("times", r"\*", MK_DEFAULT_HANDLER!(TokenKind::Times)),
        RegexPattern::new("divide", "/", MK_DEFAULT_HANDLER!(TokenKind::Divide)),
        RegexPattern::new("mod", "%", MK_DEFAULT_HANDLER!(TokenKind::Mod)),
        RegexPattern::new("lt", "<", MK_DEFAULT_HANDLER!(TokenKind::Less)),
        RegexPattern::new("gt", ">", MK_DEFAULT_HANDLER!(TokenKind::Greater)),
        RegexPattern::new("equals", "=", MK_DEFAULT_HANDLER!(TokenKind::Equals)),

        // ASCII start, Unicode word characters after it. Periods are allowed
        // inside a name but never at its end.
        RegexPattern::new(IDENTIFIER_RULE, r"[A-Za-z_](?:[\w.]*\w)?", identifier_handler),
        RegexPattern::new("fconst", r"[0-9]+\.[0-9]*(?:[eE][+-]?[0-9]+)?|[0-9]+[eE][+-]?[0-9]+", MK_DEFAULT_HANDLER!(TokenKind::Float)),
        RegexPattern::new("iconst", "[0-9]+", MK_DEFAULT_HANDLER!(TokenKind::Integer)),
        RegexPattern::new("sconst_d", r#""(?:[^\\\n]|\\.)*?""#, MK_DEFAULT_HANDLER!(TokenKind::String)),
        RegexPattern::new("squote", "'", MK_DEFAULT_HANDLER!(TokenKind::SingleQuote)),

        RegexPattern::new("lparen", r"\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen)),
        RegexPattern::new("rparen", r"\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen)),
        RegexPattern::new("lbracket", r"\[", MK_DEFAULT_HANDLER!(TokenKind::OpenBracket)),
        RegexPattern::new("rbracket", r"\]", MK_DEFAULT_HANDLER!(TokenKind::CloseBracket)),
        RegexPattern::new("lbrace", r"\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly)),
        RegexPattern::new("rbrace", r"\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly)),
        RegexPattern::new("comma", ",", MK_DEFAULT_HANDLER!(TokenKind::Comma)),
        RegexPattern::new("semi", ";", MK_DEFAULT_HANDLER!(TokenKind::Semicolon)),
        RegexPattern::new("colon", ":", MK_DEFAULT_HANDLER!(TokenKind::Colon)),
        RegexPattern::new("period", r"\.", MK_DEFAULT_HANDLER!(TokenKind::Period)),

        RegexPattern::new("whitespace", r"[ \t\r]+", skip_handler),
        RegexPattern::new("newline", r"\n+", newline_handler),
    ];
}

pub struct Lexer {
    source: String,
    pos: usize,
    line: u32,
    file: Rc<String>,
    diagnostics: Vec<Error>,
    options: LexerOptions,
    hooks: Box<dyn LexerHooks>,
}

impl Lexer {
    pub fn new<H: LexerHooks + 'static>(hooks: H, options: LexerOptions) -> Lexer {
        Lexer {
            source: String::new(),
            pos: 0,
            line: 1,
            file: Rc::new(String::new()),
            diagnostics: vec![],
            options,
            hooks: Box::new(hooks),
        }
    }

    pub fn with_defaults() -> Lexer {
        Lexer::new(NoopHooks, LexerOptions::default())
    }

    /// Applies `overrides`, forces the shared rule table and, unless
    /// optimizing, checks it.
    pub fn build(&mut self, overrides: BuildOptions) -> Result<(), Error> {
        self.options.merge(&overrides);
        lazy_static::initialize(&PATTERNS);
        lazy_static::initialize(&RESERVED_LOOKUP);

        if !self.options.optimize {
            validate_table()?;
        }

        debug!(
            rules = PATTERNS.len(),
            reserved = RESERVED_LOOKUP.len(),
            debug = self.options.debug,
            optimize = self.options.optimize,
            "lexer built"
        );
        Ok(())
    }

    /// Loads a new buffer and rewinds the cursor. The line counter is left
    /// alone; call `reset` to start counting from 1 again.
    pub fn input(&mut self, source: impl Into<String>, file: Option<&str>) {
        self.source = source.into();
        self.pos = 0;
        self.file = Rc::new(file.unwrap_or_default().to_string());
    }

    pub fn reset(&mut self) {
        self.line = 1;
    }

    /// Pulls the next token, or `None` once the buffer is exhausted.
    pub fn token(&mut self) -> Option<Token> {
        while !self.at_eof() {
            let matched = PATTERNS
                .iter()
                .find_map(|pattern| pattern.find(self.remainder()).map(|value| (pattern, value.to_string())));

            match matched {
                Some((pattern, value)) => {
                    let token = (pattern.handler)(self, &value);
                    self.advance_n(value.len());

                    if let Some(token) = token {
                        return Some(self.emit(token));
                    }
                }
                None => self.illegal_character(),
            }
        }

        None
    }

    pub fn make_token(&self, kind: TokenKind, value: &str) -> Token {
        MK_TOKEN!(
            kind,
            value.to_string(),
            Span { start: self.pos, end: self.pos + value.len() },
            self.position_at(self.pos)
        )
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.source.len());
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn cursor(&self) -> usize {
        self.pos
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn filename(&self) -> &str {
        &self.file
    }

    pub fn options(&self) -> &LexerOptions {
        &self.options
    }

    pub fn diagnostics(&self) -> &[Error] {
        &self.diagnostics
    }

    pub fn clear_diagnostics(&mut self) {
        self.diagnostics.clear();
    }

    pub fn hooks(&self) -> &dyn LexerHooks {
        self.hooks.as_ref()
    }

    pub fn hooks_mut(&mut self) -> &mut dyn LexerHooks {
        self.hooks.as_mut()
    }

    fn position_at(&self, offset: usize) -> Position {
        Position::new(self.line, find_column(&self.source, offset))
    }

    fn emit(&mut self, token: Token) -> Token {
        if self.options.invoke_hooks {
            match token.kind {
                TokenKind::OpenCurly => self.hooks.on_lbrace(),
                TokenKind::CloseCurly => self.hooks.on_rbrace(),
                _ => {}
            }
        }

        if self.options.debug > 0 {
            debug!(
                kind = %token.kind,
                value = %token.value,
                line = token.position.line,
                column = token.position.column,
                "token"
            );
        }

        token
    }

    fn illegal_character(&mut self) {
        let Some(character) = self.remainder().chars().next() else {
            return;
        };

        let error = Error::new(
            ErrorImpl::IllegalCharacter { character },
            self.position_at(self.pos),
            self.pos,
            Rc::clone(&self.file),
        );
        self.err(error);
        self.advance_n(character.len_utf8());
    }

    fn err(&mut self, error: Error) {
        let message = error.message();
        let Position { line, column } = *error.get_position();

        warn!(line, column, "{}", message);
        self.hooks.on_error(&message, line, column);

        if self.options.print_to_stderr {
            eprintln!("{}", message);
        }

        self.diagnostics.push(error);
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.token()
    }
}

impl std::iter::FusedIterator for Lexer {}

fn identifier_handler(lexer: &mut Lexer, value: &str) -> Option<Token> {
    if let Some(kind) = RESERVED_LOOKUP.get(value) {
        return Some(lexer.make_token(*kind, value));
    }

    if lexer.options.invoke_hooks && lexer.hooks.type_lookup(value) {
        Some(lexer.make_token(TokenKind::TypeName, value))
    } else {
        Some(lexer.make_token(TokenKind::Identifier, value))
    }
}

fn skip_handler(lexer: &mut Lexer, value: &str) -> Option<Token> {
    trace!(offset = lexer.pos, len = value.len(), "skipped whitespace");
    None
}

fn newline_handler(lexer: &mut Lexer, value: &str) -> Option<Token> {
    lexer.line += value.len() as u32;
    trace!(line = lexer.line, "newline");
    None
}

fn malformed(rule: &str, reason: impl Into<String>) -> Error {
    Error::new(
        ErrorImpl::MalformedTable { rule: rule.to_string(), reason: reason.into() },
        Position::new(0, 0),
        0,
        Rc::new(String::new()),
    )
}

/// Checks the rule table the way a table-driven lexer generator would
/// before accepting it.
pub fn validate_table() -> Result<(), Error> {
    for pattern in PATTERNS.iter() {
        if pattern.regex.is_match("") {
            return Err(malformed(pattern.name, "matches the empty string"));
        }
    }

    let identifier = PATTERNS
        .iter()
        .find(|pattern| pattern.name == IDENTIFIER_RULE)
        .ok_or_else(|| malformed(IDENTIFIER_RULE, "rule is missing"))?;

    for word in RESERVED_LOOKUP.keys() {
        if word.to_lowercase() != *word {
            return Err(malformed(word, "reserved words must be lowercase"));
        }

        if identifier.find(word) != Some(*word) {
            return Err(malformed(word, "reserved word is not a full identifier"));
        }
    }

    Ok(())
}

/// Scans `source` in one go with stderr echo off.
pub fn tokenize(source: &str, file: Option<&str>) -> (Vec<Token>, Vec<Error>) {
    let mut lex = Lexer::new(NoopHooks, LexerOptions::default().with_print_to_stderr(false));
    lex.input(source, file);

    let tokens = lex.by_ref().collect();
    (tokens, lex.diagnostics)
}
