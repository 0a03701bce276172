//! Input line parsing

use tracing::trace;

use crate::error::{Error, Result};
use crate::types::Expression;

/// Parse a whitespace-delimited `<first> <operator> <second>` line
///
/// The operator token is taken as-is; only the operands are required to be
/// valid decimal integers. Any other token count is a [`Error::MalformedInput`].
pub fn parse_line(line: &str) -> Result<Expression> {
    trace!("Parsing input line: {:?}", line);

    let tokens: Vec<&str> = line.split_whitespace().collect();
    let &[first, operator, second] = tokens.as_slice() else {
        return Err(Error::MalformedInput(format!(
            "expected 3 tokens, found {}",
            tokens.len()
        )));
    };

    Ok(Expression {
        first: parse_operand(first)?,
        operator: operator.to_string(),
        second: parse_operand(second)?,
    })
}

fn parse_operand(token: &str) -> Result<i64> {
    token.parse().map_err(|source| Error::InvalidOperand {
        token: token.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_line() {
        let expr = parse_line("3 + 4").unwrap();
        assert_eq!(expr.first, 3);
        assert_eq!(expr.operator, "+");
        assert_eq!(expr.second, 4);
    }

    #[test]
    fn test_parse_negative_operands() {
        let expr = parse_line("-3 * -4").unwrap();
        assert_eq!(expr.first, -3);
        assert_eq!(expr.second, -4);
    }

    #[test]
    fn test_parse_surplus_whitespace() {
        // split_whitespace collapses runs and trims the trailing newline
        let expr = parse_line("  10   -  6 \n").unwrap();
        assert_eq!(expr.first, 10);
        assert_eq!(expr.operator, "-");
        assert_eq!(expr.second, 6);
    }

    #[test]
    fn test_parse_keeps_unrecognized_operator() {
        let expr = parse_line("5 / 2").unwrap();
        assert_eq!(expr.operator, "/");
    }

    #[test]
    fn test_parse_two_tokens() {
        let err = parse_line("3 4").unwrap_err();
        assert!(matches!(err, Error::MalformedInput(_)));
        assert_eq!(err.to_string(), "Malformed input: expected 3 tokens, found 2");
    }

    #[test]
    fn test_parse_four_tokens() {
        assert!(matches!(
            parse_line("3 + 4 5").unwrap_err(),
            Error::MalformedInput(_)
        ));
    }

    #[test]
    fn test_parse_empty_line() {
        assert!(matches!(
            parse_line("").unwrap_err(),
            Error::MalformedInput(_)
        ));
    }

    #[test]
    fn test_parse_non_numeric_operand() {
        let err = parse_line("a + 4").unwrap_err();
        assert!(matches!(err, Error::InvalidOperand { .. }));
    }

    #[test]
    fn test_parse_float_operand_rejected() {
        assert!(matches!(
            parse_line("3.5 + 4").unwrap_err(),
            Error::InvalidOperand { .. }
        ));
    }
}
