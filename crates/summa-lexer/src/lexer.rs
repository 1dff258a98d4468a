//! The summa lexer.
//! summa 词法分析器。

use crate::token::{MathFn, Token, TokenKind};
use summa_common::{Letter, Span};
use summa_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode, Label};

/// The summa lexer.
/// summa 词法分析器。
///
/// Converts an expression string into a sequence of tokens. Lexing never
/// fails: a malformed constant becomes `Number(NaN)` and an unexpected
/// character becomes an `Error` token, each paired with a diagnostic.
/// 将表达式字符串转换为 token 序列。词法分析不会失败：
/// 非法常量变成 `Number(NaN)`，意外字符变成 `Error` token，
/// 并各自附带一条诊断信息。
pub struct Lexer<'src> {
    /// Full source text
    /// 完整源文本
    source: &'src str,
    /// Byte cursor into the source
    /// 源文本中的字节游标
    pos: usize,
    /// Collected diagnostics (errors/warnings)
    /// 收集的诊断信息（错误/警告）
    diagnostics: Vec<Diagnostic>,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given expression text.
    /// 为给定的表达式文本创建新的词法分析器。
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            diagnostics: Vec::new(),
        }
    }

    /// Tokenize the entire input and return tokens and diagnostics.
    /// 对整个输入进行词法分析，返回 token 列表和诊断信息。
    pub fn tokenize(mut self) -> (Vec<Token>, Vec<Diagnostic>) {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        (tokens, self.diagnostics)
    }

    fn next_token(&mut self) -> Token {
        // Skip whitespace - 跳过空白字符
        self.skip_whitespace();

        let start = self.pos;

        let Some(ch) = self.peek_char() else {
            return Token::new(TokenKind::Eof, Span::new(start, start));
        };

        let kind = match ch {
            '(' => {
                self.bump(ch);
                TokenKind::LParen
            }
            ')' => {
                self.bump(ch);
                TokenKind::RParen
            }
            '+' => {
                self.bump(ch);
                TokenKind::Plus
            }
            '-' => {
                self.bump(ch);
                TokenKind::Minus
            }
            '*' => {
                self.bump(ch);
                TokenKind::Star
            }
            '/' => {
                self.bump(ch);
                TokenKind::Slash
            }
            '^' => {
                self.bump(ch);
                TokenKind::Caret
            }
            '0'..='9' | '.' => self.scan_number(start),
            c if c.is_ascii_alphabetic() => self.scan_word(start),
            c => {
                self.bump(c);
                self.diagnostics.push(
                    Diagnostic::error(
                        DiagnosticKind::Lexer,
                        Span::new(start, self.pos),
                        format!("unexpected character `{c}`"),
                    )
                    .with_code(ErrorCode::UnexpectedCharacter)
                    .with_label(Label::new(Span::new(start, self.pos), "here")),
                );
                TokenKind::Error
            }
        };

        Token::new(kind, Span::new(start, self.pos))
    }

    /// Scan a numeric constant: digits, optional fraction, optional
    /// signed exponent. The exponent marker is consumed only when a
    /// digit actually follows, so `2ex` lexes as `2`, `e`, `x`.
    fn scan_number(&mut self, start: usize) -> TokenKind {
        self.eat_digits();

        if self.peek_char() == Some('.') {
            self.bump('.');
            self.eat_digits();
        }

        if let Some(e) = self.peek_char()
            && (e == 'e' || e == 'E')
        {
            let rest = &self.source[self.pos + 1..];
            let mut tail = rest.chars();
            match tail.next() {
                Some(d) if d.is_ascii_digit() => {
                    self.bump(e);
                    self.eat_digits();
                }
                Some(sign) if sign == '+' || sign == '-' => {
                    if tail.next().is_some_and(|d| d.is_ascii_digit()) {
                        self.bump(e);
                        self.bump(sign);
                        self.eat_digits();
                    }
                }
                _ => {}
            }
        }

        let literal = &self.source[start..self.pos];
        let span = Span::new(start, self.pos);

        match literal.parse::<f64>() {
            Ok(value) if value.is_infinite() => {
                // Saturated, but still accepted.
                self.diagnostics.push(
                    Diagnostic::warning(
                        DiagnosticKind::Lexer,
                        span,
                        format!("constant `{literal}` is out of range"),
                    )
                    .with_code(ErrorCode::NumberOutOfRange)
                    .with_label(Label::new(span, "does not fit in a double")),
                );
                TokenKind::Number(value)
            }
            Ok(value) => TokenKind::Number(value),
            Err(_) => {
                self.diagnostics.push(
                    Diagnostic::error(
                        DiagnosticKind::Lexer,
                        span,
                        format!("failed to parse constant from `{literal}`"),
                    )
                    .with_code(ErrorCode::InvalidNumber)
                    .with_label(Label::new(span, "not a valid constant")),
                );
                TokenKind::Number(f64::NAN)
            }
        }
    }

    /// Scan an alphabetic run. A run that is a prefix of a function name
    /// becomes a single `Function` token; anything else contributes only
    /// its first letter as a variable, and lexing resumes right after it.
    /// 扫描字母序列。函数名前缀整体成为一个 `Function` token；
    /// 其他序列只取第一个字母作为变量，词法分析从其后继续。
    fn scan_word(&mut self, start: usize) -> TokenKind {
        let mut end = start;
        for c in self.source[start..].chars() {
            if !c.is_ascii_alphabetic() {
                break;
            }
            end += c.len_utf8();
        }

        let word = &self.source[start..end];
        if let Some(func) = MathFn::match_prefix(word) {
            self.pos = end;
            return TokenKind::Function(func);
        }

        let first = self.source[start..].chars().next().unwrap_or_default();
        self.bump(first);
        match Letter::new(first) {
            Some(letter) => TokenKind::Ident(letter),
            // Unreachable: the run starts with an ASCII letter.
            None => TokenKind::Error,
        }
    }

    fn eat_digits(&mut self) {
        while let Some(c) = self.peek_char() {
            if !c.is_ascii_digit() {
                break;
            }
            self.bump(c);
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if !c.is_whitespace() {
                break;
            }
            self.bump(c);
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn bump(&mut self, c: char) {
        self.pos += c.len_utf8();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let (tokens, _) = Lexer::new(source).tokenize();
        tokens.into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_operators_and_parens() {
        assert_eq!(
            kinds("( ) + - * / ^"),
            vec![
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::Caret,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            kinds("1 0.23 2e3 1.5e-2"),
            vec![
                TokenKind::Number(1.0),
                TokenKind::Number(0.23),
                TokenKind::Number(2000.0),
                TokenKind::Number(0.015),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_exponent_needs_a_digit() {
        // `e` here is an identifier run, not an exponent.
        let (tokens, diagnostics) = Lexer::new("2ex").tokenize();
        assert_eq!(tokens[0].kind, TokenKind::Number(2.0));
        assert_eq!(tokens[1].kind, TokenKind::Function(MathFn::Exp));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_malformed_constant_is_nan() {
        let (tokens, diagnostics) = Lexer::new(".").tokenize();
        assert!(matches!(tokens[0].kind, TokenKind::Number(v) if v.is_nan()));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, Some(ErrorCode::InvalidNumber));
    }

    #[test]
    fn test_out_of_range_constant_saturates() {
        let (tokens, diagnostics) = Lexer::new("1e999").tokenize();
        assert_eq!(tokens[0].kind, TokenKind::Number(f64::INFINITY));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, Some(ErrorCode::NumberOutOfRange));
    }

    #[test]
    fn test_function_prefix_match() {
        assert_eq!(
            kinds("sin s log"),
            vec![
                TokenKind::Function(MathFn::Sin),
                TokenKind::Function(MathFn::Sin),
                TokenKind::Function(MathFn::Log),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_word_splits_after_first_letter() {
        // `xsin` is the variable `x` followed by the function `sin`.
        let (tokens, _) = Lexer::new("xsin").tokenize();
        assert!(matches!(tokens[0].kind, TokenKind::Ident(l) if l.as_char() == 'x'));
        assert_eq!(tokens[1].kind, TokenKind::Function(MathFn::Sin));
        assert_eq!(tokens[2].kind, TokenKind::Eof);
    }

    #[test]
    fn test_unexpected_character() {
        let (tokens, diagnostics) = Lexer::new("@").tokenize();
        assert_eq!(tokens[0].kind, TokenKind::Error);
        assert_eq!(diagnostics[0].code, Some(ErrorCode::UnexpectedCharacter));
    }
}
