//! The expression tree.
//! 表达式树。

use crate::OpKind;
use summa_common::Letter;
use thiserror::Error;

/// Errors from the programmatic builder API.
///
/// These indicate a bug in the calling code, never malformed user input;
/// the parser cannot produce them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AstError {
    #[error("`{0}` is not a valid variable name; expected an ASCII letter")]
    InvalidName(char),

    #[error("{} takes {expected} operand(s), found {found}", op.full_name())]
    ArityMismatch {
        op: OpKind,
        expected: usize,
        found: usize,
    },
}

/// A mathematical expression.
/// 数学表达式。
///
/// The tree is a single-owner value type: `Clone` is a deep copy with no
/// sharing, and dropping a node releases its whole subtree exactly once.
/// 表达式树是单一所有者的值类型：`Clone` 是无共享的深拷贝，
/// 丢弃节点时恰好释放一次整棵子树。
#[derive(Clone)]
pub enum Expr {
    /// A numeric constant. / 数值常量。
    Constant(f64),
    /// A single-letter variable. / 单字母变量。
    Variable(Letter),
    /// An operator applied to its operands; the operand count always
    /// equals the operator's arity.
    /// 作用于操作数的运算符；操作数个数总是等于运算符的元数。
    Operation { op: OpKind, operands: Vec<Expr> },
}

impl Expr {
    /// Build a constant node.
    pub fn constant(value: f64) -> Expr {
        Expr::Constant(value)
    }

    /// Build a variable node, validating the name.
    pub fn variable(name: char) -> Result<Expr, AstError> {
        Letter::new(name)
            .map(Expr::Variable)
            .ok_or(AstError::InvalidName(name))
    }

    /// Build an operation node, validating the operand count.
    pub fn operation(op: OpKind, operands: Vec<Expr>) -> Result<Expr, AstError> {
        if operands.len() != op.arity() {
            return Err(AstError::ArityMismatch {
                op,
                expected: op.arity(),
                found: operands.len(),
            });
        }
        Ok(Expr::Operation { op, operands })
    }

    /// Build a binary operation. Arity is correct by construction.
    pub fn binary(op: OpKind, left: Expr, right: Expr) -> Expr {
        debug_assert_eq!(op.arity(), 2);
        Expr::Operation {
            op,
            operands: vec![left, right],
        }
    }

    /// Build a unary operation. Arity is correct by construction.
    pub fn unary(op: OpKind, operand: Expr) -> Expr {
        debug_assert_eq!(op.arity(), 1);
        Expr::Operation {
            op,
            operands: vec![operand],
        }
    }

    /// True for constant nodes.
    pub fn is_constant(&self) -> bool {
        matches!(self, Expr::Constant(_))
    }

    /// Structural equality with a floating-point tolerance on constants.
    /// 结构相等性，常量比较带浮点容差。
    ///
    /// Constants compare equal within an absolute tolerance of 1e-9, or
    /// within a relative tolerance scaled by the larger magnitude; the
    /// dual test absorbs both near-zero and large-magnitude comparisons.
    pub fn approx_eq(&self, other: &Expr) -> bool {
        match (self, other) {
            (Expr::Constant(a), Expr::Constant(b)) => float_eq(*a, *b),
            (Expr::Variable(a), Expr::Variable(b)) => a == b,
            (
                Expr::Operation { op, operands },
                Expr::Operation {
                    op: other_op,
                    operands: other_operands,
                },
            ) => {
                op == other_op
                    && operands.len() == other_operands.len()
                    && operands
                        .iter()
                        .zip(other_operands)
                        .all(|(a, b)| a.approx_eq(b))
            }
            _ => false,
        }
    }
}

const EXPR_EPSILON: f64 = 1e-9;

fn float_eq(a: f64, b: f64) -> bool {
    let difference = (a - b).abs();
    if difference <= EXPR_EPSILON {
        return true;
    }

    let relative = a.abs().max(b.abs()) * f64::EPSILON;
    difference <= relative
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_rejects_non_letters() {
        assert!(Expr::variable('x').is_ok());
        assert!(matches!(
            Expr::variable('3'),
            Err(AstError::InvalidName('3'))
        ));
        assert!(matches!(
            Expr::variable('+'),
            Err(AstError::InvalidName('+'))
        ));
    }

    #[test]
    fn test_operation_checks_arity() {
        let ok = Expr::operation(OpKind::Add, vec![Expr::constant(1.0), Expr::constant(2.0)]);
        assert!(ok.is_ok());

        // Never silently truncates or pads.
        let too_few = Expr::operation(OpKind::Add, vec![Expr::constant(1.0)]);
        assert!(matches!(
            too_few,
            Err(AstError::ArityMismatch {
                op: OpKind::Add,
                expected: 2,
                found: 1,
            })
        ));

        let too_many = Expr::operation(OpKind::Sin, vec![Expr::constant(1.0), Expr::constant(2.0)]);
        assert!(matches!(too_many, Err(AstError::ArityMismatch { .. })));
    }

    #[test]
    fn test_approx_eq_tolerances() {
        // Near zero: absolute tolerance.
        assert!(Expr::constant(0.0).approx_eq(&Expr::constant(1e-12)));
        // Large magnitude: relative tolerance.
        let big = 1e18;
        assert!(Expr::constant(big).approx_eq(&Expr::constant(big + 1.0)));
        assert!(!Expr::constant(1.0).approx_eq(&Expr::constant(1.1)));
        // NaN constants never compare equal.
        assert!(!Expr::constant(f64::NAN).approx_eq(&Expr::constant(f64::NAN)));
    }

    #[test]
    fn test_clone_is_deep() {
        let original = Expr::binary(
            OpKind::Add,
            Expr::variable('x').unwrap(),
            Expr::constant(2.0),
        );
        let mut copy = original.clone();
        assert!(original.approx_eq(&copy));

        copy = Expr::constant(0.0);
        // The original is unaffected by mutating the copy.
        assert!(matches!(original, Expr::Operation { .. }));
        assert!(!original.approx_eq(&copy));
    }
}
