//! Operator application

use tracing::debug;

use crate::types::{BinaryOp, Evaluation, Expression};

/// Apply an operator symbol to two operands
///
/// Returns the sum, difference, or product for `+`, `-`, `*`, and `None`
/// for any other symbol. Pure function, no error path.
pub fn apply(operator: &str, first: i64, second: i64) -> Option<i64> {
    BinaryOp::from_symbol(operator).map(|op| op.apply(first, second))
}

/// Evaluate a parsed expression into a displayable result
pub fn evaluate(expression: &Expression) -> Evaluation {
    let result = apply(&expression.operator, expression.first, expression.second);
    debug!("Evaluated {:?} -> {:?}", expression, result);
    Evaluation::from(result)
}
