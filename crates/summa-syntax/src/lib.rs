//! AST and operator definitions for summa expressions.
//!
//! This crate defines the expression tree produced by the parser and
//! consumed by the evaluator and simplifier, together with its two
//! textual renderings: the canonical minimal-parenthesization `Display`
//! form and the fully tagged `Debug` form.

mod ast;
mod op;
mod render;

pub use ast::{AstError, Expr};
pub use op::OpKind;
