use crate::calculator::error::CalcError;
use std::fmt;
use std::fmt::Formatter;

/// A binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Exponentiate,
}

/// An unary function applied with call syntax, e.g. `raiz(64)`.
///
/// The trigonometric functions take their operand in degrees.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Function {
    SquareRoot,
    Sine,
    Cosine,
    Tangent,
    Logarithm,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

impl BinaryOperator {
    pub fn from_symbol(symbol: char) -> Option<BinaryOperator> {
        match symbol {
            '+' => Some(BinaryOperator::Add),
            '-' => Some(BinaryOperator::Subtract),
            '*' => Some(BinaryOperator::Multiply),
            '/' => Some(BinaryOperator::Divide),
            '%' => Some(BinaryOperator::Modulo),
            '^' => Some(BinaryOperator::Exponentiate),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
            BinaryOperator::Modulo => '%',
            BinaryOperator::Exponentiate => '^',
        }
    }

    /// Binding strength relative to other operators; higher binds tighter.
    /// Functions sit above every operator (see [`Function::precedence`]).
    pub fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 1,
            BinaryOperator::Multiply | BinaryOperator::Divide | BinaryOperator::Modulo => 2,
            BinaryOperator::Exponentiate => 3,
        }
    }

    pub fn associativity(&self) -> Associativity {
        match self {
            BinaryOperator::Exponentiate => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    /// Applies the operator to its operands.
    ///
    /// Division and modulo by zero, and any result that is not a number,
    /// are reported as math errors.
    pub fn apply(&self, left: f64, right: f64) -> Result<f64, CalcError> {
        let result = match self {
            BinaryOperator::Add => left + right,
            BinaryOperator::Subtract => left - right,
            BinaryOperator::Multiply => left * right,
            BinaryOperator::Divide => {
                if right == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                left / right
            }
            BinaryOperator::Modulo => {
                if right == 0.0 {
                    return Err(CalcError::ModuloByZero);
                }
                left % right
            }
            BinaryOperator::Exponentiate => left.powf(right),
        };
        if result.is_nan() {
            return Err(CalcError::NotANumber);
        }
        Ok(result)
    }
}

impl Function {
    pub fn from_name(name: &str) -> Option<Function> {
        match name {
            "raiz" => Some(Function::SquareRoot),
            "sen" => Some(Function::Sine),
            "cos" => Some(Function::Cosine),
            "tg" => Some(Function::Tangent),
            "log" => Some(Function::Logarithm),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Function::SquareRoot => "raiz",
            Function::Sine => "sen",
            Function::Cosine => "cos",
            Function::Tangent => "tg",
            Function::Logarithm => "log",
        }
    }

    /// Functions bind tighter than any binary operator.
    pub fn precedence(&self) -> u8 {
        4
    }

    /// Applies the function to its operand.
    ///
    /// The square root of a negative number, the logarithm of a non-positive
    /// number, and the tangent of an angle congruent to 90 degrees modulo
    /// 180 are reported as math errors.
    pub fn apply(&self, operand: f64) -> Result<f64, CalcError> {
        let result = match self {
            Function::SquareRoot => {
                if operand < 0.0 {
                    return Err(CalcError::NegativeSquareRoot(operand));
                }
                operand.sqrt()
            }
            Function::Sine => operand.to_radians().sin(),
            Function::Cosine => operand.to_radians().cos(),
            Function::Tangent => {
                let remainder = operand % 180.0;
                if remainder == 90.0 || remainder == -90.0 {
                    return Err(CalcError::UndefinedTangent(operand));
                }
                operand.to_radians().tan()
            }
            Function::Logarithm => {
                if operand <= 0.0 {
                    return Err(CalcError::NonPositiveLogarithm(operand));
                }
                operand.log10()
            }
        };
        if result.is_nan() {
            return Err(CalcError::NotANumber);
        }
        Ok(result)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
