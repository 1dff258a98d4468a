//! Tree-walking evaluation.
//! 树遍历求值。

use crate::Environment;
use summa_syntax::{Expr, OpKind};

/// Evaluate an expression to a number.
///
/// Variables read from `env`, or NaN when no environment is given.
/// Operands evaluate left to right; `/` follows IEEE semantics, so
/// `1 / 0` is infinity and `0 / 0` is NaN. Trigonometry is in radians
/// and `log` is the natural logarithm.
pub fn evaluate(expr: &Expr, env: Option<&Environment>) -> f64 {
    match expr {
        Expr::Constant(value) => *value,
        Expr::Variable(name) => env.map_or(f64::NAN, |env| env.get(*name)),
        Expr::Operation { op, operands } => match (op, operands.as_slice()) {
            (OpKind::Add, [left, right]) => evaluate(left, env) + evaluate(right, env),
            (OpKind::Sub, [left, right]) => evaluate(left, env) - evaluate(right, env),
            (OpKind::Mul, [left, right]) => evaluate(left, env) * evaluate(right, env),
            (OpKind::Div, [left, right]) => evaluate(left, env) / evaluate(right, env),
            (OpKind::Pow, [base, exponent]) => evaluate(base, env).powf(evaluate(exponent, env)),
            (OpKind::Neg, [operand]) => -evaluate(operand, env),
            (OpKind::Sin, [argument]) => evaluate(argument, env).sin(),
            (OpKind::Cos, [argument]) => evaluate(argument, env).cos(),
            (OpKind::Tan, [argument]) => evaluate(argument, env).tan(),
            (OpKind::Exp, [argument]) => evaluate(argument, env).exp(),
            (OpKind::Log, [argument]) => evaluate(argument, env).ln(),
            // Hand-built trees with a broken operand count evaluate to
            // NaN instead of panicking.
            _ => f64::NAN,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use summa_common::Letter;

    fn eval(expr: &Expr) -> f64 {
        evaluate(expr, None)
    }

    #[test]
    fn test_arithmetic() {
        let sum = Expr::binary(OpKind::Add, Expr::constant(1.0), Expr::constant(2.0));
        assert_eq!(eval(&sum), 3.0);

        let power = Expr::binary(OpKind::Pow, Expr::constant(2.0), Expr::constant(10.0));
        assert_eq!(eval(&power), 1024.0);

        let negated = Expr::unary(OpKind::Neg, Expr::constant(5.0));
        assert_eq!(eval(&negated), -5.0);
    }

    #[test]
    fn test_division_follows_ieee() {
        let by_zero = Expr::binary(OpKind::Div, Expr::constant(1.0), Expr::constant(0.0));
        assert_eq!(eval(&by_zero), f64::INFINITY);

        let indeterminate = Expr::binary(OpKind::Div, Expr::constant(0.0), Expr::constant(0.0));
        assert!(eval(&indeterminate).is_nan());
    }

    #[test]
    fn test_functions_use_radians_and_natural_log() {
        let sine = Expr::unary(OpKind::Sin, Expr::constant(std::f64::consts::FRAC_PI_2));
        assert!((eval(&sine) - 1.0).abs() < 1e-12);

        let log = Expr::unary(OpKind::Log, Expr::constant(std::f64::consts::E));
        assert!((eval(&log) - 1.0).abs() < 1e-12);

        // Out of domain reads as NaN, not an error.
        let negative_log = Expr::unary(OpKind::Log, Expr::constant(-1.0));
        assert!(eval(&negative_log).is_nan());
    }

    #[test]
    fn test_variables_read_from_environment() {
        let expr = Expr::binary(
            OpKind::Mul,
            Expr::variable('x').unwrap(),
            Expr::constant(3.0),
        );
        assert!(eval(&expr).is_nan());

        let mut env = Environment::new();
        env.set(Letter::new('x').unwrap(), 4.0);
        assert_eq!(evaluate(&expr, Some(&env)), 12.0);
    }

    #[test]
    fn test_nan_operands_propagate() {
        let sum = Expr::binary(OpKind::Add, Expr::constant(f64::NAN), Expr::constant(1.0));
        assert!(eval(&sum).is_nan());
    }
}
