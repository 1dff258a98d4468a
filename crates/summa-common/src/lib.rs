//! Common types shared across the summa pipeline.
//! summa 流水线各阶段共享的基础类型。

mod letter;
mod span;

pub use letter::{LETTER_COUNT, Letter};
pub use span::Span;
