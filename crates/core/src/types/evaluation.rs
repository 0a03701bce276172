use std::fmt;

/// The outcome of evaluating an expression
///
/// `Undefined` is the absent-value marker for an unrecognized operator,
/// distinct from both a numeric result and an error. It renders as the
/// literal text `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    Value(i64),
    Undefined,
}

impl From<Option<i64>> for Evaluation {
    fn from(value: Option<i64>) -> Self {
        match value {
            Some(value) => Evaluation::Value(value),
            None => Evaluation::Undefined,
        }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Evaluation::Value(value) => write!(f, "{value}"),
            Evaluation::Undefined => write!(f, "None"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_value() {
        assert_eq!(Evaluation::Value(7).to_string(), "7");
        assert_eq!(Evaluation::Value(-12).to_string(), "-12");
    }

    #[test]
    fn test_display_undefined() {
        assert_eq!(Evaluation::Undefined.to_string(), "None");
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Evaluation::from(Some(30)), Evaluation::Value(30));
        assert_eq!(Evaluation::from(None), Evaluation::Undefined);
    }
}
