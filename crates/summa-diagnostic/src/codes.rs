//! Error codes for summa diagnostics.

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Lexer (E0001 - E0099)
    UnexpectedCharacter,
    InvalidNumber,
    NumberOutOfRange,

    // Parser (E0100 - E0199)
    ExpectedExpression,
    UnclosedParen,
    ExpectedArgument,
    TrailingInput,
    NestingTooDeep,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            // Lexer
            ErrorCode::UnexpectedCharacter => "E0001",
            ErrorCode::InvalidNumber => "E0002",
            ErrorCode::NumberOutOfRange => "E0003",

            // Parser
            ErrorCode::ExpectedExpression => "E0101",
            ErrorCode::UnclosedParen => "E0102",
            ErrorCode::ExpectedArgument => "E0103",
            ErrorCode::TrailingInput => "E0104",
            ErrorCode::NestingTooDeep => "E0105",
        }
    }

    /// Get a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::UnexpectedCharacter => "unexpected character in input",
            ErrorCode::InvalidNumber => "failed to parse a numeric constant",
            ErrorCode::NumberOutOfRange => "numeric constant is out of range",

            ErrorCode::ExpectedExpression => "expected an expression",
            ErrorCode::UnclosedParen => "unclosed parentheses",
            ErrorCode::ExpectedArgument => "expected a parenthesized function argument",
            ErrorCode::TrailingInput => "trailing input after expression",
            ErrorCode::NestingTooDeep => "expression is nested too deeply",
        }
    }

    /// Get a suggested fix for the error, if available.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            ErrorCode::UnclosedParen => Some("add a closing `)`"),
            ErrorCode::ExpectedArgument => {
                Some("write the function argument in parentheses, like `sin(x)`")
            }
            ErrorCode::InvalidNumber => {
                Some("the constant is read as NaN; check the digits of the literal")
            }
            _ => None,
        }
    }
}
