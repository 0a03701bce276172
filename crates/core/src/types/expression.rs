/// A parsed input line: two integer operands and the operator token between them
///
/// The operator is kept as the raw token so that unrecognized symbols flow
/// through to evaluation instead of failing at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub first: i64,
    pub operator: String,
    pub second: i64,
}
