use crate::calculator::error::CalcError;
use crate::calculator::operator::{BinaryOperator, Function};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// Floating-point literals accepted in postfix text, e.g. `64`, `-5`, `.5`.
static NUMERIC_LITERAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[0-9]*\.?[0-9]+$").unwrap());

/// A discrete part of an expression.
#[derive(Copy, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(BinaryOperator),
    Function(Function),
    OpenParenthesis,
    CloseParenthesis,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}", value),
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::Function(function) => write!(f, "{}", function),
            Token::OpenParenthesis => write!(f, "("),
            Token::CloseParenthesis => write!(f, ")"),
        }
    }
}

/// Parses a single space-delimited postfix token: an operator symbol, a
/// function name, or a numeric literal. Parentheses never appear in postfix
/// text, so they are rejected here along with everything else unrecognized.
impl str::FromStr for Token {
    type Err = CalcError;

    fn from_str(input: &str) -> Result<Token, Self::Err> {
        let mut characters = input.chars();
        if let (Some(symbol), None) = (characters.next(), characters.next()) {
            if let Some(operator) = BinaryOperator::from_symbol(symbol) {
                return Ok(Token::Operator(operator));
            }
        }
        if let Some(function) = Function::from_name(input) {
            return Ok(Token::Function(function));
        }
        if NUMERIC_LITERAL_RE.is_match(input) {
            let value = input
                .parse::<f64>()
                .map_err(|_| CalcError::UnrecognizedToken(input.to_string()))?;
            return Ok(Token::Number(value));
        }
        Err(CalcError::UnrecognizedToken(input.to_string()))
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_symbols_parse_to_operator_tokens() {
        assert_eq!(
            "%".parse::<Token>().unwrap(),
            Token::Operator(BinaryOperator::Modulo)
        );
        assert_eq!(
            "^".parse::<Token>().unwrap(),
            Token::Operator(BinaryOperator::Exponentiate)
        );
    }

    #[test]
    fn function_names_parse_to_function_tokens() {
        assert_eq!(
            "raiz".parse::<Token>().unwrap(),
            Token::Function(Function::SquareRoot)
        );
        assert_eq!(
            "tg".parse::<Token>().unwrap(),
            Token::Function(Function::Tangent)
        );
    }

    #[test]
    fn numeric_literals_parse_to_number_tokens() {
        assert_eq!("64".parse::<Token>().unwrap(), Token::Number(64.0));
        assert_eq!("-5".parse::<Token>().unwrap(), Token::Number(-5.0));
        assert_eq!(".5".parse::<Token>().unwrap(), Token::Number(0.5));
        assert_eq!("3.14".parse::<Token>().unwrap(), Token::Number(3.14));
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        for input in ["sqrt", "(", ")", "1e5", "--5", "5.5.5", "abc", ""] {
            let error = input.parse::<Token>().unwrap_err();
            assert_eq!(error, CalcError::UnrecognizedToken(input.to_string()));
        }
    }

    #[test]
    fn whole_numbers_display_without_fraction() {
        assert_eq!(Token::Number(3.0).to_string(), "3");
        assert_eq!(Token::Number(-5.0).to_string(), "-5");
        assert_eq!(Token::Number(0.5).to_string(), "0.5");
    }
}
