//! Integration tests for series summation.

use summa_eval::{sum_range, summation};
use summa_parser::parse;

fn sum_ok(lower: i64, upper: i64, summand: &str) -> f64 {
    let (total, diagnostics) = summation(lower, upper, summand);
    assert!(
        diagnostics.is_empty(),
        "unexpected diagnostics for {summand:?}: {diagnostics:?}"
    );
    total
}

#[test]
fn test_summation_table() {
    let cases = [
        (1, 10, "1", 10.0),
        (1, 100, "i", 5050.0),
        (-15, 2, "i", -117.0),
        (0, 0, "i", 0.0),
        (1, 4, "i * i", 30.0),
        (1, 10, "2 * i - 1", 100.0),
    ];
    for (lower, upper, summand, expected) in cases {
        assert_eq!(
            sum_ok(lower, upper, summand),
            expected,
            "for sum of {summand:?} over {lower}..={upper}"
        );
    }
}

#[test]
fn test_power_tower_summand() {
    // Negative indices raise to negative powers: (-3)^(-3) is -1/27,
    // (-2)^(-2) is 1/4, (-1)^(-1) is -1, and 0^0 is 1.
    let expected = 873612.25 - 1.0 / 27.0;
    let total = sum_ok(-3, 7, "i ^ i");
    assert!((total - expected).abs() <= 1e-6, "got {total}");
}

#[test]
fn test_empty_range_sums_to_zero() {
    assert_eq!(sum_ok(5, 2, "i"), 0.0);

    // Even a malformed summand is never parsed for an empty range.
    let (total, diagnostics) = summation(5, 2, "((");
    assert_eq!(total, 0.0);
    assert!(diagnostics.is_empty());
}

#[test]
fn test_geometric_series() {
    let total = sum_ok(0, 10, "2 ^ i");
    assert_eq!(total, 2047.0);

    let halves = sum_ok(1, 4, "1 / 2 ^ i");
    assert!((halves - 0.9375).abs() <= 1e-12);
}

#[test]
fn test_sum_range_over_a_prebuilt_tree() {
    let (tree, diagnostics) = parse("i ^ 2");
    assert!(diagnostics.is_empty());

    assert_eq!(sum_range(&tree, 1, 5), 55.0);
    assert_eq!(sum_range(&tree, 3, 2), 0.0);
}

#[test]
fn test_summand_without_the_index() {
    // A summand that never mentions i just repeats per term.
    assert_eq!(sum_ok(1, 5, "2 ^ 2 - 1"), 15.0);
}

#[test]
fn test_malformed_summand_reports_and_sums_nan() {
    let (total, diagnostics) = summation(1, 3, "i +");
    assert!(total.is_nan());
    assert!(!diagnostics.is_empty());
}
