//! Integration tests for scanning whole annotations.
//!
//! These tests drive the public API the way a parser does: construct with
//! hooks, build, feed text, and pull tokens until exhaustion.

use std::{cell::RefCell, rc::Rc};

use matrix_lexer::{tokenize, BuildOptions, Lexer, LexerHooks, LexerOptions, NoopHooks, Token, TokenKind};
use pretty_assertions::assert_eq;

const GEMVER: &str = "GEMVER
in
  A : matrix(column), u1 : vector(column), u2 : vector(column),
  v1 : vector(column), v2 : vector(column),
  a : scalar, b : scalar,
  y : vector(column), z : vector(column)
out
  B : matrix(column), x : vector(column), w : vector(column)
{
  B = A + u1 * v1' + u2 * v2'
  x = b * (B' * y) + z
  w = a * (B * x)
}
";

fn kinds_and_values(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
    tokens.iter().map(|token| (token.kind, token.value.as_str())).collect()
}

fn built_lexer() -> Lexer {
    let mut lexer = Lexer::new(NoopHooks, LexerOptions::default());
    lexer
        .build(BuildOptions {
            print_to_stderr: Some(false),
            ..BuildOptions::default()
        })
        .unwrap();
    lexer
}

#[test]
fn test_declaration() {
    let (tokens, errors) = tokenize("A : matrix(column)", None);

    assert!(errors.is_empty());
    assert_eq!(
        kinds_and_values(&tokens),
        vec![
            (TokenKind::Identifier, "A"),
            (TokenKind::Colon, ":"),
            (TokenKind::Matrix, "matrix"),
            (TokenKind::OpenParen, "("),
            (TokenKind::Column, "column"),
            (TokenKind::CloseParen, ")"),
        ]
    );
}

#[test]
fn test_expression_with_transpose() {
    let (tokens, errors) = tokenize("x = b * (B' * y) + z", None);

    assert!(errors.is_empty());
    assert_eq!(
        kinds_and_values(&tokens),
        vec![
            (TokenKind::Identifier, "x"),
            (TokenKind::Equals, "="),
            (TokenKind::Identifier, "b"),
            (TokenKind::Times, "*"),
            (TokenKind::OpenParen, "("),
            (TokenKind::Identifier, "B"),
            (TokenKind::SingleQuote, "'"),
            (TokenKind::Times, "*"),
            (TokenKind::Identifier, "y"),
            (TokenKind::CloseParen, ")"),
            (TokenKind::Plus, "+"),
            (TokenKind::Identifier, "z"),
        ]
    );
}

#[test]
fn test_gemver_annotation() {
    let mut lexer = built_lexer();
    lexer.input(GEMVER, Some("gemver.m"));
    let tokens: Vec<Token> = lexer.by_ref().collect();

    assert!(lexer.diagnostics().is_empty());
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "GEMVER");
    assert_eq!((tokens[1].kind, tokens[1].line()), (TokenKind::In, 2));

    let count = |kind: TokenKind| tokens.iter().filter(|token| token.kind == kind).count();
    assert_eq!(count(TokenKind::Matrix), 2);
    assert_eq!(count(TokenKind::Vector), 8);
    assert_eq!(count(TokenKind::Scalar), 2);
    assert_eq!(count(TokenKind::Column), 10);
    assert_eq!(count(TokenKind::SingleQuote), 3);
    assert_eq!(count(TokenKind::OpenCurly), 1);
    assert_eq!(count(TokenKind::CloseCurly), 1);

    let out = tokens.iter().find(|token| token.kind == TokenKind::Out).unwrap();
    assert_eq!((out.line(), out.column()), (7, 1));

    let last = tokens.last().unwrap();
    assert_eq!((last.kind, last.line(), last.column()), (TokenKind::CloseCurly, 13, 1));
}

#[test]
fn test_diagnostics_do_not_stop_the_scan() {
    let mut lexer = built_lexer();
    lexer.input("in\n  A : matrix(column) @\nout\n  x : vector(row) ~", Some("broken.m"));
    let tokens: Vec<Token> = lexer.by_ref().collect();

    assert_eq!(tokens.last().unwrap().kind, TokenKind::CloseParen);
    assert_eq!(lexer.diagnostics().len(), 2);

    let positions: Vec<(u32, u32)> = lexer
        .diagnostics()
        .iter()
        .map(|error| (error.get_position().line, error.get_position().column))
        .collect();
    assert_eq!(positions, vec![(2, 22), (4, 19)]);
    assert!(lexer.diagnostics()[0].message().starts_with("[matrixlexer] broken.m: "));
}

#[test]
fn test_render_diagnostic_points_at_character() {
    let source = "in\n  A : matrix(column) @";
    let (_, errors) = tokenize(source, Some("broken.m"));
    let rendered = matrix_lexer::render_diagnostic(&errors[0], source);

    assert!(rendered.contains("-> broken.m"));
    assert!(rendered.contains("2 | A : matrix(column) @"));
}

struct ScopeTracker {
    depth: Rc<RefCell<i32>>,
    max_depth: Rc<RefCell<i32>>,
}

impl LexerHooks for ScopeTracker {
    fn on_lbrace(&mut self) {
        *self.depth.borrow_mut() += 1;
        let depth = *self.depth.borrow();
        let mut max_depth = self.max_depth.borrow_mut();
        *max_depth = (*max_depth).max(depth);
    }

    fn on_rbrace(&mut self) {
        *self.depth.borrow_mut() -= 1;
    }
}

#[test]
fn test_parser_scope_tracking_through_hooks() {
    let depth = Rc::new(RefCell::new(0));
    let max_depth = Rc::new(RefCell::new(0));
    let hooks = ScopeTracker { depth: Rc::clone(&depth), max_depth: Rc::clone(&max_depth) };

    let mut lexer = Lexer::new(hooks, LexerOptions::default().with_print_to_stderr(false).with_invoke_hooks(true));
    lexer.build(BuildOptions::default()).unwrap();
    lexer.input(GEMVER, None);
    lexer.by_ref().for_each(drop);

    assert_eq!(*depth.borrow(), 0);
    assert_eq!(*max_depth.borrow(), 1);
}
