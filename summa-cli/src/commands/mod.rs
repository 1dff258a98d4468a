//! CLI command implementations.

pub mod eval;
pub mod repl;
pub mod sum;
