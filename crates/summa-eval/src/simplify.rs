//! Constant folding.
//! 常量折叠。

use crate::{Environment, evaluate};
use summa_syntax::Expr;

/// Collapse every subtree that evaluates to a known number.
///
/// Works bottom up: operands are simplified first, and an operation
/// whose operands all folded to constants is replaced by its value.
/// Variables bound in `env` fold to their value; unbound variables and
/// anything containing one stay symbolic. Simplifying is idempotent.
/// 自底向上工作：先化简操作数，操作数全部折叠为常量的运算被替换为
/// 其值。`env` 中已绑定的变量折叠为其值；未绑定的变量及包含它的
/// 子树保持符号形式。化简是幂等的。
pub fn simplify(expr: &mut Expr, env: Option<&Environment>) {
    match expr {
        Expr::Constant(_) => return,
        Expr::Variable(name) => {
            let bound = env.is_some_and(|env| env.is_bound(*name));
            if !bound {
                return;
            }
        }
        Expr::Operation { operands, .. } => {
            for operand in operands.iter_mut() {
                simplify(operand, env);
            }
            if !operands.iter().all(Expr::is_constant) {
                return;
            }
        }
    }

    *expr = Expr::constant(evaluate(expr, env));
}

#[cfg(test)]
mod tests {
    use super::*;
    use summa_common::Letter;
    use summa_syntax::OpKind;

    #[test]
    fn test_folds_constant_subtrees() {
        // (1 + 2) * x folds the sum but keeps the product symbolic.
        let mut expr = Expr::binary(
            OpKind::Mul,
            Expr::binary(OpKind::Add, Expr::constant(1.0), Expr::constant(2.0)),
            Expr::variable('x').unwrap(),
        );
        simplify(&mut expr, None);
        assert_eq!(expr.to_string(), "3 * x");
    }

    #[test]
    fn test_folds_whole_constant_tree() {
        let mut expr = Expr::binary(
            OpKind::Pow,
            Expr::binary(OpKind::Sub, Expr::constant(2.0), Expr::constant(1.0)),
            Expr::constant(2.0),
        );
        simplify(&mut expr, None);
        assert!(expr.approx_eq(&Expr::constant(1.0)));
    }

    #[test]
    fn test_bound_variables_fold() {
        let mut env = Environment::new();
        env.set(Letter::new('x').unwrap(), 2.0);

        let mut expr = Expr::binary(
            OpKind::Add,
            Expr::variable('x').unwrap(),
            Expr::variable('y').unwrap(),
        );
        simplify(&mut expr, Some(&env));
        assert_eq!(expr.to_string(), "2 + y");
    }

    #[test]
    fn test_simplify_is_idempotent() {
        let mut expr = Expr::binary(
            OpKind::Add,
            Expr::binary(OpKind::Mul, Expr::constant(2.0), Expr::constant(3.0)),
            Expr::unary(OpKind::Sin, Expr::variable('t').unwrap()),
        );
        simplify(&mut expr, None);
        let once = expr.clone();
        simplify(&mut expr, None);
        assert!(expr.approx_eq(&once));
        assert_eq!(expr.to_string(), "6 + sin(t)");
    }
}
