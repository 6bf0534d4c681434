use crate::calculator::error::CalcError;
use crate::calculator::stack::BoundedStack;
use crate::calculator::token::Token;

/// Evaluates a space-separated postfix expression to a single value.
///
/// Numbers push onto the value stack; a binary operator pops the right
/// operand, then the left, and pushes the computed result; a function pops
/// one operand. Exactly one value must remain once the stream is exhausted.
/// The first error aborts evaluation.
pub(crate) fn evaluate(
    expression: &str,
    values: &mut BoundedStack<f64>,
) -> Result<f64, CalcError> {
    for raw_token in expression.split_whitespace() {
        match raw_token.parse::<Token>()? {
            Token::Number(value) => {
                values.push(value)?;
            }
            Token::Operator(operator) => {
                let right = values
                    .pop()
                    .ok_or_else(|| CalcError::MissingOperand(operator.to_string()))?;
                let left = values
                    .pop()
                    .ok_or_else(|| CalcError::MissingOperand(operator.to_string()))?;
                values.push(operator.apply(left, right)?)?;
            }
            Token::Function(function) => {
                let operand = values
                    .pop()
                    .ok_or_else(|| CalcError::MissingOperand(function.to_string()))?;
                values.push(function.apply(operand)?)?;
            }
            Token::OpenParenthesis | Token::CloseParenthesis => {
                return Err(CalcError::UnrecognizedToken(raw_token.to_string()));
            }
        }
    }

    let result = values.pop().ok_or(CalcError::EmptyExpression)?;
    if !values.is_empty() {
        return Err(CalcError::LeftoverOperands(values.len() + 1));
    }
    Ok(result)
}
