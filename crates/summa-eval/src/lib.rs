//! Numeric evaluation of summa expression trees.
//! summa 表达式树的数值求值。
//!
//! Evaluation is total: anomalies such as division by zero or an
//! out-of-domain function argument surface as IEEE infinities and NaN,
//! never as errors. Diagnostics belong to the text stages upstream.
//! 求值是全函数：除零、超出定义域等异常以 IEEE 无穷和 NaN 的形式
//! 出现，而不是错误。诊断信息属于上游的文本处理阶段。

mod env;
mod eval;
mod simplify;
mod sum;

pub use env::Environment;
pub use eval::evaluate;
pub use simplify::simplify;
pub use sum::{sum_range, summation};
