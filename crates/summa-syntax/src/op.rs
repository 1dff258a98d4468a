//! Operator metadata.
//! 运算符元数据。

/// The closed set of operators and named functions.
/// 运算符和具名函数的封闭集合。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    // Binary 二元运算
    Add, // +
    Sub, // -
    Mul, // *
    Div, // /
    Pow, // ^

    // Unary 一元运算
    Neg, // -x
    Sin,
    Cos,
    Tan,
    Exp,
    Log, // natural logarithm 自然对数
}

impl OpKind {
    /// Number of operands the operator takes.
    pub fn arity(self) -> usize {
        match self {
            OpKind::Add | OpKind::Sub | OpKind::Mul | OpKind::Div | OpKind::Pow => 2,
            OpKind::Neg
            | OpKind::Sin
            | OpKind::Cos
            | OpKind::Tan
            | OpKind::Exp
            | OpKind::Log => 1,
        }
    }

    /// Binding strength, used only to decide minimal parenthesization
    /// when rendering. The parser encodes precedence in its grammar.
    /// 绑定强度，仅用于渲染时决定最小括号；解析器的优先级编码在文法里。
    pub fn precedence(self) -> u8 {
        match self {
            OpKind::Add | OpKind::Sub => 0,
            OpKind::Mul | OpKind::Div => 1,
            OpKind::Pow | OpKind::Neg => 2,
            OpKind::Sin | OpKind::Cos | OpKind::Tan | OpKind::Exp | OpKind::Log => 3,
        }
    }

    /// The operator's glyph or function name as it appears in source.
    pub fn glyph(self) -> &'static str {
        match self {
            OpKind::Add => "+",
            OpKind::Sub => "-",
            OpKind::Mul => "*",
            OpKind::Div => "/",
            OpKind::Pow => "^",
            OpKind::Neg => "-",
            OpKind::Sin => "sin",
            OpKind::Cos => "cos",
            OpKind::Tan => "tan",
            OpKind::Exp => "exp",
            OpKind::Log => "log",
        }
    }

    /// Long name used by the debug rendering.
    pub fn full_name(self) -> &'static str {
        match self {
            OpKind::Add => "addition",
            OpKind::Sub => "subtraction",
            OpKind::Mul => "multiplication",
            OpKind::Div => "division",
            OpKind::Pow => "exponentiation",
            OpKind::Neg => "negation",
            OpKind::Sin => "sine",
            OpKind::Cos => "cosine",
            OpKind::Tan => "tangent",
            OpKind::Exp => "exponential",
            OpKind::Log => "logarithm",
        }
    }
}
