//! Parser for summa expressions.
//!
//! This crate provides a recursive descent parser that converts tokens
//! into an expression tree.
//!
//! ## Error Recovery
//!
//! The parser never aborts: every malformed construct degrades to a
//! best-effort partial tree (with `NaN` constants standing in for
//! unparseable pieces) plus an advisory diagnostic. Expressions are
//! typically typed at a prompt, and a wrong-but-visible answer beats a
//! crash.

mod parser;

pub use parser::Parser;

use summa_diagnostic::Diagnostic;
use summa_lexer::Lexer;
use summa_syntax::Expr;

/// Parse an expression string into a tree.
pub fn parse(source: &str) -> (Expr, Vec<Diagnostic>) {
    let lexer = Lexer::new(source);
    let (tokens, mut diagnostics) = lexer.tokenize();

    let mut parser = Parser::new(tokens);
    let expr = parser.parse_input();

    diagnostics.extend(parser.diagnostics());
    (expr, diagnostics)
}
