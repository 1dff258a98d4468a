//! The `summa sum` command.

use crate::output;
use summa_diagnostic::emit;
use summa_eval::summation;

pub fn run(lower: i64, upper: i64, summand: &str, verbose: bool) -> Result<(), String> {
    let (total, diagnostics) = summation(lower, upper, summand);

    for diag in &diagnostics {
        emit(summand, "<sum>", diag);
    }

    if verbose {
        let terms = if lower > upper { 0 } else { upper - lower + 1 };
        output::info(&format!("summed {terms} term(s) over i = {lower}..={upper}"));
    }

    output::success(&total.to_string());
    Ok(())
}
