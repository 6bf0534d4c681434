use thiserror::Error;

/// Broad classification of a [`CalcError`], for callers that only need to
/// distinguish malformed input from undefined arithmetic and exhausted
/// scratch storage.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Syntax,
    Math,
    Capacity,
}

/// An error raised while tokenizing, converting, or evaluating an expression.
///
/// Every operation aborts on the first error; no partial result is ever
/// returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("Expression is empty")]
    EmptyExpression,

    #[error("Unbalanced parentheses in expression")]
    UnbalancedParentheses,

    #[error("Operator '{0}' is missing an operand")]
    MissingOperand(String),

    #[error("Malformed expression: {0} operands left over")]
    LeftoverOperands(usize),

    #[error("Unrecognized token '{0}'")]
    UnrecognizedToken(String),

    #[error("Unknown function '{0}'")]
    UnknownFunction(String),

    #[error("Unexpected character '{0}' in expression")]
    UnexpectedCharacter(char),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Modulo by zero")]
    ModuloByZero,

    #[error("Square root of negative number {0}")]
    NegativeSquareRoot(f64),

    #[error("Logarithm of non-positive number {0}")]
    NonPositiveLogarithm(f64),

    #[error("Tangent is undefined at {0} degrees")]
    UndefinedTangent(f64),

    #[error("Result is not a number")]
    NotANumber,

    #[error("Stack capacity of {limit} entries exceeded")]
    CapacityExceeded { limit: usize },
}

impl CalcError {
    /// Returns the broad class this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::EmptyExpression
            | CalcError::UnbalancedParentheses
            | CalcError::MissingOperand(_)
            | CalcError::LeftoverOperands(_)
            | CalcError::UnrecognizedToken(_)
            | CalcError::UnknownFunction(_)
            | CalcError::UnexpectedCharacter(_) => ErrorKind::Syntax,
            CalcError::DivisionByZero
            | CalcError::ModuloByZero
            | CalcError::NegativeSquareRoot(_)
            | CalcError::NonPositiveLogarithm(_)
            | CalcError::UndefinedTangent(_)
            | CalcError::NotANumber => ErrorKind::Math,
            CalcError::CapacityExceeded { .. } => ErrorKind::Capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_errors_are_classified_as_syntax() {
        assert_eq!(CalcError::UnbalancedParentheses.kind(), ErrorKind::Syntax);
        assert_eq!(CalcError::LeftoverOperands(2).kind(), ErrorKind::Syntax);
    }

    #[test]
    fn domain_errors_are_classified_as_math() {
        assert_eq!(CalcError::DivisionByZero.kind(), ErrorKind::Math);
        assert_eq!(CalcError::UndefinedTangent(90.0).kind(), ErrorKind::Math);
    }

    #[test]
    fn exhaustion_is_classified_as_capacity() {
        assert_eq!(
            CalcError::CapacityExceeded { limit: 256 }.kind(),
            ErrorKind::Capacity
        );
    }
}
