use crate::calculator::error::CalcError;
use crate::calculator::operator::{Associativity, BinaryOperator, Function};
use crate::calculator::stack::BoundedStack;
use crate::calculator::token::Token;

/// An entry pending on the operator stack during shunting-yard conversion:
/// a binary operator, a function marker, or the opening-parenthesis barrier.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum StackEntry {
    Operator(BinaryOperator),
    Function(Function),
    OpenParenthesis,
}

impl StackEntry {
    fn token(&self) -> Token {
        match self {
            StackEntry::Operator(operator) => Token::Operator(*operator),
            StackEntry::Function(function) => Token::Function(*function),
            StackEntry::OpenParenthesis => Token::OpenParenthesis,
        }
    }
}

/// Converts infix tokens to postfix order with the shunting-yard algorithm.
///
/// Numbers go straight to the output; operators and function markers wait on
/// the operator stack until an arriving operator of lower or equal
/// precedence, a closing parenthesis, or the end of input pops them. A
/// binary operator or closing parenthesis arriving while an operand is still
/// expected, or input ending while one is expected, is a syntax error.
pub(crate) fn infix_to_postfix(
    tokens: Vec<Token>,
    operators: &mut BoundedStack<StackEntry>,
) -> Result<Vec<Token>, CalcError> {
    if tokens.is_empty() {
        return Err(CalcError::EmptyExpression);
    }

    let mut output = Vec::new();
    let mut expecting_operand = true;

    for token in tokens {
        match token {
            Token::Number(_) => {
                output.push(token);
                expecting_operand = false;
            }
            Token::Function(function) => {
                operators.push(StackEntry::Function(function))?;
            }
            Token::OpenParenthesis => {
                operators.push(StackEntry::OpenParenthesis)?;
                expecting_operand = true;
            }
            Token::CloseParenthesis => {
                if expecting_operand {
                    return Err(CalcError::MissingOperand(")".to_string()));
                }
                drain_until_open_parenthesis(operators, &mut output)?;
            }
            Token::Operator(operator) => {
                if expecting_operand {
                    return Err(CalcError::MissingOperand(operator.to_string()));
                }
                pop_higher_precedence(operators, &mut output, operator);
                operators.push(StackEntry::Operator(operator))?;
                expecting_operand = true;
            }
        }
    }

    if expecting_operand {
        return Err(match operators.pop() {
            Some(StackEntry::Operator(operator)) => CalcError::MissingOperand(operator.to_string()),
            Some(StackEntry::Function(function)) => CalcError::MissingOperand(function.to_string()),
            _ => CalcError::UnbalancedParentheses,
        });
    }

    transfer_leftover_entries(operators, &mut output)?;

    Ok(output)
}

/// Pops entries that bind at least as tightly as the arriving operator.
/// Function markers always bind tighter; equal precedence pops only for
/// left-associative operators, which keeps `^` chains grouping rightward.
fn pop_higher_precedence(
    operators: &mut BoundedStack<StackEntry>,
    output: &mut Vec<Token>,
    operator: BinaryOperator,
) {
    loop {
        let should_pop = match operators.last() {
            None | Some(StackEntry::OpenParenthesis) => false,
            Some(StackEntry::Function(_)) => true,
            Some(StackEntry::Operator(top_operator)) => {
                top_operator.precedence() > operator.precedence()
                    || (top_operator.precedence() == operator.precedence()
                        && operator.associativity() == Associativity::Left)
            }
        };
        if !should_pop {
            return;
        }
        if let Some(entry) = operators.pop() {
            output.push(entry.token());
        }
    }
}

fn drain_until_open_parenthesis(
    operators: &mut BoundedStack<StackEntry>,
    output: &mut Vec<Token>,
) -> Result<(), CalcError> {
    loop {
        match operators.pop() {
            None => return Err(CalcError::UnbalancedParentheses),
            Some(StackEntry::OpenParenthesis) => return Ok(()),
            Some(entry) => output.push(entry.token()),
        }
    }
}

fn transfer_leftover_entries(
    operators: &mut BoundedStack<StackEntry>,
    output: &mut Vec<Token>,
) -> Result<(), CalcError> {
    while let Some(entry) = operators.pop() {
        match entry {
            StackEntry::OpenParenthesis => return Err(CalcError::UnbalancedParentheses),
            entry => output.push(entry.token()),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(tokens: Vec<Token>) -> Result<Vec<Token>, CalcError> {
        let mut operators = BoundedStack::with_limit(256);
        infix_to_postfix(tokens, &mut operators)
    }

    #[test]
    fn infix_to_postfix_simple_expression() {
        // 3 + 4
        let infix = [Token::Number(3.0), "+".parse().unwrap(), Token::Number(4.0)].to_vec();
        let postfix = [Token::Number(3.0), Token::Number(4.0), "+".parse().unwrap()].to_vec();

        let actual = convert(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_simple_parenthesised_expression() {
        // 2 * (3 + 4)
        let infix = [
            Token::Number(2.0),
            "*".parse().unwrap(),
            Token::OpenParenthesis,
            Token::Number(3.0),
            "+".parse().unwrap(),
            Token::Number(4.0),
            Token::CloseParenthesis,
        ]
        .to_vec();
        let postfix = [
            Token::Number(2.0),
            Token::Number(3.0),
            Token::Number(4.0),
            "+".parse().unwrap(),
            "*".parse().unwrap(),
        ]
        .to_vec();

        let actual = convert(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_multi_operator_expression() {
        // 7 * 2 + 4
        let infix = [
            Token::Number(7.0),
            "*".parse().unwrap(),
            Token::Number(2.0),
            "+".parse().unwrap(),
            Token::Number(4.0),
        ]
        .to_vec();
        let postfix = [
            Token::Number(7.0),
            Token::Number(2.0),
            "*".parse().unwrap(),
            Token::Number(4.0),
            "+".parse().unwrap(),
        ]
        .to_vec();

        let actual = convert(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_exponentiation_groups_rightward() {
        // 2 ^ 3 ^ 2
        let infix = [
            Token::Number(2.0),
            "^".parse().unwrap(),
            Token::Number(3.0),
            "^".parse().unwrap(),
            Token::Number(2.0),
        ]
        .to_vec();
        let postfix = [
            Token::Number(2.0),
            Token::Number(3.0),
            Token::Number(2.0),
            "^".parse().unwrap(),
            "^".parse().unwrap(),
        ]
        .to_vec();

        let actual = convert(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_function_pops_before_weaker_operator() {
        // sen(30) + 1
        let infix = [
            "sen".parse().unwrap(),
            Token::OpenParenthesis,
            Token::Number(30.0),
            Token::CloseParenthesis,
            "+".parse().unwrap(),
            Token::Number(1.0),
        ]
        .to_vec();
        let postfix = [
            Token::Number(30.0),
            "sen".parse().unwrap(),
            Token::Number(1.0),
            "+".parse().unwrap(),
        ]
        .to_vec();

        let actual = convert(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_nested_parenthesis_expression() {
        // 9 + (5 * (2 + 8 * 4))
        let infix = [
            Token::Number(9.0),
            "+".parse().unwrap(),
            Token::OpenParenthesis,
            Token::Number(5.0),
            "*".parse().unwrap(),
            Token::OpenParenthesis,
            Token::Number(2.0),
            "+".parse().unwrap(),
            Token::Number(8.0),
            "*".parse().unwrap(),
            Token::Number(4.0),
            Token::CloseParenthesis,
            Token::CloseParenthesis,
        ]
        .to_vec();
        let postfix = [
            Token::Number(9.0),
            Token::Number(5.0),
            Token::Number(2.0),
            Token::Number(8.0),
            Token::Number(4.0),
            "*".parse().unwrap(),
            "+".parse().unwrap(),
            "*".parse().unwrap(),
            "+".parse().unwrap(),
        ]
        .to_vec();

        let actual = convert(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_unclosed_parenthesis_should_return_err() {
        // (10 + 2
        let infix = [
            Token::OpenParenthesis,
            Token::Number(10.0),
            "+".parse().unwrap(),
            Token::Number(2.0),
        ]
        .to_vec();

        let error = convert(infix).unwrap_err();

        assert_eq!(error, CalcError::UnbalancedParentheses)
    }

    #[test]
    fn infix_to_postfix_extra_closing_parenthesis_should_return_err() {
        // 10 + 2)
        let infix = [
            Token::Number(10.0),
            "+".parse().unwrap(),
            Token::Number(2.0),
            Token::CloseParenthesis,
        ]
        .to_vec();

        let error = convert(infix).unwrap_err();

        assert_eq!(error, CalcError::UnbalancedParentheses)
    }

    #[test]
    fn infix_to_postfix_operator_without_operand_should_return_err() {
        // 5 + * 3
        let infix = [
            Token::Number(5.0),
            "+".parse().unwrap(),
            "*".parse().unwrap(),
            Token::Number(3.0),
        ]
        .to_vec();

        let error = convert(infix).unwrap_err();

        assert_eq!(error, CalcError::MissingOperand("*".to_string()))
    }

    #[test]
    fn infix_to_postfix_dangling_operator_should_return_err() {
        // 5 +
        let infix = [Token::Number(5.0), "+".parse().unwrap()].to_vec();

        let error = convert(infix).unwrap_err();

        assert_eq!(error, CalcError::MissingOperand("+".to_string()))
    }

    #[test]
    fn infix_to_postfix_empty_input_should_return_err() {
        let error = convert(Vec::new()).unwrap_err();

        assert_eq!(error, CalcError::EmptyExpression)
    }

    #[test]
    fn infix_to_postfix_reports_exhausted_operator_stack() {
        let infix = [
            Token::OpenParenthesis,
            Token::OpenParenthesis,
            Token::OpenParenthesis,
            Token::Number(1.0),
            Token::CloseParenthesis,
            Token::CloseParenthesis,
            Token::CloseParenthesis,
        ]
        .to_vec();
        let mut operators = BoundedStack::with_limit(2);

        let error = infix_to_postfix(infix, &mut operators).unwrap_err();

        assert_eq!(error, CalcError::CapacityExceeded { limit: 2 })
    }
}
