//! Token definitions for summa expressions.

use summa_common::{Letter, Span};

/// A token with its kind and span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// The kind of a token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Numeric constant. NaN when the literal failed to scan.
    Number(f64),
    /// Single-letter variable name.
    Ident(Letter),
    /// Named function such as `sin`.
    Function(MathFn),

    // Delimiters
    LParen, // (
    RParen, // )

    // Operators
    Plus,  // +
    Minus, // -
    Star,  // *
    Slash, // /
    Caret, // ^

    // Special
    Eof,
    Error,
}

/// The fixed table of named functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathFn {
    Sin,
    Cos,
    Tan,
    Exp,
    Log,
}

/// Lookup table, in match order. An identifier that is a non-empty
/// prefix of an entry names that function, first entry winning, so
/// `s(2)` means `sin(2)`.
const FUNCTIONS: [(&str, MathFn); 5] = [
    ("sin", MathFn::Sin),
    ("cos", MathFn::Cos),
    ("tan", MathFn::Tan),
    ("exp", MathFn::Exp),
    ("log", MathFn::Log),
];

impl MathFn {
    /// Match a word against the function table by literal prefix.
    pub fn match_prefix(word: &str) -> Option<MathFn> {
        if word.is_empty() {
            return None;
        }
        FUNCTIONS
            .iter()
            .find(|(name, _)| name.starts_with(word))
            .map(|(_, func)| *func)
    }

    /// The canonical name of the function.
    pub fn name(&self) -> &'static str {
        match self {
            MathFn::Sin => "sin",
            MathFn::Cos => "cos",
            MathFn::Tan => "tan",
            MathFn::Exp => "exp",
            MathFn::Log => "log",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_prefix() {
        assert_eq!(MathFn::match_prefix("sin"), Some(MathFn::Sin));
        assert_eq!(MathFn::match_prefix("si"), Some(MathFn::Sin));
        assert_eq!(MathFn::match_prefix("s"), Some(MathFn::Sin));
        assert_eq!(MathFn::match_prefix("log"), Some(MathFn::Log));
        assert_eq!(MathFn::match_prefix("x"), None);
        assert_eq!(MathFn::match_prefix("sinx"), None);
        assert_eq!(MathFn::match_prefix(""), None);
    }
}
