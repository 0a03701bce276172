/// A recognized arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
}

impl BinaryOp {
    /// Map an operator token to its operation
    ///
    /// Returns `None` for any token outside `+`, `-`, `*`. An unrecognized
    /// operator is signaled through the return value, never as an error.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(BinaryOp::Add),
            "-" => Some(BinaryOp::Sub),
            "*" => Some(BinaryOp::Mul),
            _ => None,
        }
    }

    /// Apply the operation to two operands
    pub fn apply(self, first: i64, second: i64) -> i64 {
        match self {
            BinaryOp::Add => first + second,
            BinaryOp::Sub => first - second,
            BinaryOp::Mul => first * second,
        }
    }
}
