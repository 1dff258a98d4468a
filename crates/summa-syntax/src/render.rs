//! Textual renderings of the expression tree.
//! 表达式树的文本渲染。
//!
//! `Display` prints the canonical minimal-parenthesization form and is
//! the exact inverse of the parser's precedence rules; `Debug` prints a
//! fully parenthesized, type-tagged form and does no precedence
//! reasoning at all.

use crate::{Expr, OpKind};
use std::fmt;

/// Whether `child` needs parentheses in a position that requires at
/// least binding strength `limit` to reparse unchanged.
///
/// Constants and variables never need parentheses, and neither do
/// function calls, whose own parentheses always bind the argument.
fn needs_parens(child: &Expr, limit: u8, strict: bool) -> bool {
    let Expr::Operation { op, .. } = child else {
        return false;
    };
    if strict {
        op.precedence() <= limit
    } else {
        op.precedence() < limit
    }
}

fn write_child(f: &mut fmt::Formatter<'_>, child: &Expr, limit: u8, strict: bool) -> fmt::Result {
    if needs_parens(child, limit, strict) {
        write!(f, "({child})")
    } else {
        write!(f, "{child}")
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Constant(value) => write!(f, "{value}"),
            Expr::Variable(name) => write!(f, "{name}"),
            Expr::Operation { op, operands } => match (op, operands.as_slice()) {
                // Left-associative binaries: the left child may share the
                // parent's precedence, the right child must exceed it.
                // 左结合二元运算：左子可与父级同优先级，右子必须更高。
                (OpKind::Add | OpKind::Sub | OpKind::Mul | OpKind::Div, [left, right]) => {
                    let limit = op.precedence();
                    write_child(f, left, limit, false)?;
                    write!(f, " {} ", op.glyph())?;
                    write_child(f, right, limit, true)
                }
                // Exponentiation is right-associative, so the rules flip.
                // 幂运算右结合，规则相反。
                (OpKind::Pow, [base, exponent]) => {
                    let limit = op.precedence();
                    write_child(f, base, limit, true)?;
                    write!(f, " ^ ")?;
                    write_child(f, exponent, limit, false)
                }
                (OpKind::Neg, [operand]) => {
                    write!(f, "-")?;
                    write_child(f, operand, op.precedence(), false)
                }
                (
                    OpKind::Sin | OpKind::Cos | OpKind::Tan | OpKind::Exp | OpKind::Log,
                    [argument],
                ) => {
                    write!(f, "{}({argument})", op.glyph())
                }
                // Only reachable through a hand-built tree with a broken
                // operand count.
                _ => write!(f, "<malformed {}>", op.glyph()),
            },
        }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Constant(value) => write!(f, "constant({value})"),
            Expr::Variable(name) => write!(f, "variable({name})"),
            Expr::Operation { op, operands } => {
                write!(f, "operation({}(", op.full_name())?;
                for (i, operand) in operands.iter().enumerate() {
                    if i != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{operand:?}")?;
                }
                write!(f, "))")
            }
        }
    }
}
