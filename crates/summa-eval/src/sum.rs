//! Series summation.
//! 级数求和。

use crate::{Environment, evaluate};
use summa_common::Letter;
use summa_diagnostic::Diagnostic;
use summa_parser::parse;
use summa_syntax::Expr;

/// The summation index variable.
const INDEX: Letter = match Letter::new('i') {
    Some(letter) => letter,
    None => panic!("`i` is a letter"),
};

/// Sum `summand` over an inclusive integer range of the index `i`.
///
/// Each iteration binds `i` in a fresh view of the same environment
/// slot, so a summand that never mentions `i` just adds itself once per
/// term. An empty range (`lower > upper`) sums to zero.
pub fn sum_range(summand: &Expr, lower: i64, upper: i64) -> f64 {
    let mut env = Environment::new();
    let mut total = 0.0;

    for i in lower..=upper {
        env.set(INDEX, i as f64);
        total += evaluate(summand, Some(&env));
    }

    total
}

/// Parse a summand and sum it over `lower..=upper`.
///
/// An empty range short-circuits to zero before the summand is even
/// parsed, so `summation(5, 2, "")` is silently `0`. Otherwise the
/// summand parses with the usual best-effort recovery and the collected
/// diagnostics come back alongside the total.
pub fn summation(lower: i64, upper: i64, summand: &str) -> (f64, Vec<Diagnostic>) {
    if lower > upper {
        return (0.0, Vec::new());
    }

    let (expr, diagnostics) = parse(summand);
    (sum_range(&expr, lower, upper), diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_summand_counts_terms() {
        let (total, diagnostics) = summation(1, 10, "1");
        assert!(diagnostics.is_empty());
        assert_eq!(total, 10.0);
    }

    #[test]
    fn test_linear_summand() {
        let (total, diagnostics) = summation(1, 100, "i");
        assert!(diagnostics.is_empty());
        assert_eq!(total, 5050.0);

        let (total, _) = summation(-15, 2, "i");
        assert_eq!(total, -117.0);
    }

    #[test]
    fn test_empty_range_skips_parsing() {
        // lower > upper never looks at the summand, even a broken one.
        let (total, diagnostics) = summation(5, 2, "((");
        assert_eq!(total, 0.0);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_single_term_range() {
        let (total, diagnostics) = summation(3, 3, "i * i");
        assert!(diagnostics.is_empty());
        assert_eq!(total, 9.0);
    }

    #[test]
    fn test_malformed_summand_still_sums() {
        // The recovered tree is 1 + NaN, so every term is NaN.
        let (total, diagnostics) = summation(1, 3, "1 +");
        assert!(total.is_nan());
        assert_eq!(diagnostics.len(), 1);
    }
}
