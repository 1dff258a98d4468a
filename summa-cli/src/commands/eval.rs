//! The `summa eval` command.

use crate::output;
use summa_diagnostic::emit;
use summa_eval::{evaluate, simplify};
use summa_parser::parse;

pub fn run(expr: &str, want_simplified: bool, ast: bool, verbose: bool) -> Result<(), String> {
    let (mut tree, diagnostics) = parse(expr);

    for diag in &diagnostics {
        emit(expr, "<eval>", diag);
    }
    // Diagnostics never abort: the recovered tree still evaluates,
    // reading as NaN wherever the input was unusable.

    if ast || verbose {
        output::info(&format!("AST: {tree:?}"));
    }

    if want_simplified {
        simplify(&mut tree, None);
        output::success(&tree.to_string());
        return Ok(());
    }

    output::success(&evaluate(&tree, None).to_string());
    Ok(())
}
