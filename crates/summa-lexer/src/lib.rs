//! Lexical analysis for summa expressions.
//! summa 表达式的词法分析。

mod lexer;
mod token;

pub use lexer::Lexer;
pub use token::{MathFn, Token, TokenKind};
