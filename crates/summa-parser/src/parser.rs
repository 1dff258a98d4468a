//! The summa parser.

use summa_common::Span;
use summa_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode, Label};
use summa_lexer::{MathFn, Token, TokenKind};
use summa_syntax::{Expr, OpKind};

/// Recursion ceiling for nested expressions. Parenthesized groups,
/// unary minus chains, and exponent towers each add a level.
const MAX_DEPTH: usize = 512;

/// The summa parser.
///
/// Grammar, lowest binding first:
///
/// ```text
/// expression := term { ("+" | "-") term }
/// term       := factor { ("*" | "/") factor }
/// factor     := "-" factor | primary
/// primary    := atom [ "^" factor ]
/// atom       := number | function "(" expression ")" | letter
///             | "(" expression ")"
/// ```
///
/// `^` binds its exponent through `factor`, so `a ^ -b` reads as
/// `a ^ (-b)` while `-a ^ b` reads as `-(a ^ b)`.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    diagnostics: Vec<Diagnostic>,
    /// Current nesting depth across expression/factor frames
    depth: usize,
    /// Set once the depth ceiling is hit; silences everything after
    gave_up: bool,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            diagnostics: Vec::new(),
            depth: 0,
            gave_up: false,
        }
    }

    pub fn diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Parse the whole token stream as one expression.
    ///
    /// Anything left over after the expression is reported and ignored,
    /// so `1 + 2 ) 3` still yields `1 + 2`.
    pub fn parse_input(&mut self) -> Expr {
        let expr = self.parse_expression();

        if !self.at_end() && !self.gave_up {
            let end = self.tokens[self.tokens.len() - 1].span;
            let span = self.current_span().merge(end);
            self.report(
                Diagnostic::warning(
                    DiagnosticKind::Parser,
                    span,
                    "trailing input after expression",
                )
                .with_code(ErrorCode::TrailingInput)
                .with_label(Label::new(span, "this input is ignored")),
            );
        }

        expr
    }

    fn parse_expression(&mut self) -> Expr {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return self.give_up();
        }

        let mut expr = self.parse_term();

        loop {
            let op = match self.current_kind() {
                TokenKind::Plus => OpKind::Add,
                TokenKind::Minus => OpKind::Sub,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_term();
            expr = Expr::binary(op, expr, rhs);
        }

        self.depth -= 1;
        expr
    }

    fn parse_term(&mut self) -> Expr {
        let mut expr = self.parse_factor();

        loop {
            let op = match self.current_kind() {
                TokenKind::Star => OpKind::Mul,
                TokenKind::Slash => OpKind::Div,
                _ => break,
            };
            self.advance();
            let rhs = self.parse_factor();
            expr = Expr::binary(op, expr, rhs);
        }

        expr
    }

    fn parse_factor(&mut self) -> Expr {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return self.give_up();
        }

        let expr = if self.eat(TokenKind::Minus) {
            // Unary minus chains right, so `--x` is `-(-x)`.
            Expr::unary(OpKind::Neg, self.parse_factor())
        } else {
            self.parse_primary()
        };

        self.depth -= 1;
        expr
    }

    fn parse_primary(&mut self) -> Expr {
        let atom = self.parse_atom();

        if self.eat(TokenKind::Caret) {
            // Right-associative: the exponent re-enters at factor level
            // so it can carry its own sign or tower.
            let exponent = self.parse_factor();
            return Expr::binary(OpKind::Pow, atom, exponent);
        }

        atom
    }

    fn parse_atom(&mut self) -> Expr {
        // A leading `+` is inert; tolerate it silently.
        while self.check(&TokenKind::Plus) {
            self.advance();
        }

        match self.current_kind() {
            TokenKind::Number(value) => {
                let value = *value;
                self.advance();
                Expr::constant(value)
            }
            TokenKind::Ident(name) => {
                let name = *name;
                self.advance();
                Expr::Variable(name)
            }
            TokenKind::Function(func) => {
                let func = *func;
                let name_span = self.current_span();
                self.advance();
                self.parse_call(func, name_span)
            }
            TokenKind::LParen => {
                let open_span = self.current_span();
                self.advance();
                let expr = self.parse_expression();
                self.expect_rparen(open_span);
                expr
            }
            TokenKind::Error => {
                // The lexer already reported this character.
                self.advance();
                Expr::constant(f64::NAN)
            }
            _ => {
                let span = self.current_span();
                self.report(
                    Diagnostic::error(DiagnosticKind::Parser, span, "expected an expression")
                        .with_code(ErrorCode::ExpectedExpression)
                        .with_label(Label::new(span, "expected an expression here")),
                );
                // Do not consume: the offending token may close an
                // enclosing group or belong to trailing input.
                Expr::constant(f64::NAN)
            }
        }
    }

    /// Parse the parenthesized argument of a named function.
    fn parse_call(&mut self, func: MathFn, name_span: Span) -> Expr {
        let op = function_op(func);

        if !self.check(&TokenKind::LParen) {
            self.report(
                Diagnostic::error(
                    DiagnosticKind::Parser,
                    name_span,
                    format!("`{}` requires a parenthesized argument", func.name()),
                )
                .with_code(ErrorCode::ExpectedArgument)
                .with_label(Label::new(name_span, "this function call"))
                .with_help("write the argument in parentheses, like `sin(x)`"),
            );
            // Recover by taking the next factor as the argument.
            return Expr::unary(op, self.parse_factor());
        }

        let open_span = self.current_span();
        self.advance();
        let argument = self.parse_expression();
        self.expect_rparen(open_span);

        Expr::unary(op, argument)
    }

    /// Consume a closing `)`, or warn and imply one.
    fn expect_rparen(&mut self, open_span: Span) {
        if self.eat(TokenKind::RParen) {
            return;
        }

        let span = self.current_span();
        self.report(
            Diagnostic::warning(DiagnosticKind::Parser, span, "unclosed parentheses")
                .with_code(ErrorCode::UnclosedParen)
                .with_label(Label::new(open_span, "opened here"))
                .with_note("a closing `)` is implied at the end of the group")
                .with_help("add a closing `)`"),
        );
    }

    /// Abandon the parse once nesting exceeds the ceiling: report once,
    /// drain the remaining tokens, and let the partial tree unwind.
    fn give_up(&mut self) -> Expr {
        self.depth -= 1;

        if !self.gave_up {
            let span = self.current_span();
            self.diagnostics.push(
                Diagnostic::error(
                    DiagnosticKind::Parser,
                    span,
                    format!("expression is nested more than {MAX_DEPTH} levels deep"),
                )
                .with_code(ErrorCode::NestingTooDeep)
                .with_label(Label::new(span, "nesting limit reached here")),
            );
            self.gave_up = true;
        }

        while !self.at_end() {
            self.pos += 1;
        }

        Expr::constant(f64::NAN)
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        if !self.gave_up {
            self.diagnostics.push(diagnostic);
        }
    }

    // Token helpers

    fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    fn current_span(&self) -> Span {
        self.current().span
    }

    fn at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(self.current_kind()) == std::mem::discriminant(kind)
    }

    fn advance(&mut self) {
        if !self.at_end() {
            self.pos += 1;
        }
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(&kind) {
            self.advance();
            true
        } else {
            false
        }
    }
}

fn function_op(func: MathFn) -> OpKind {
    match func {
        MathFn::Sin => OpKind::Sin,
        MathFn::Cos => OpKind::Cos,
        MathFn::Tan => OpKind::Tan,
        MathFn::Exp => OpKind::Exp,
        MathFn::Log => OpKind::Log,
    }
}
