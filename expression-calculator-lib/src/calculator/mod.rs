pub mod error;
pub mod lexer;
pub mod operator;
pub mod token;

mod converter;
mod evaluator;
mod stack;

pub use error::{CalcError, ErrorKind};

use crate::calculator::converter::StackEntry;
use crate::calculator::stack::BoundedStack;
use itertools::Itertools;

/// Default capacity limit of each scratch stack, in entries.
pub const DEFAULT_STACK_LIMIT: usize = 256;

/// Reusable scratch context for expression conversion and evaluation.
///
/// The context owns the operator, value, and fragment stacks used by the
/// three operations. Each operation clears its stack on entry, so successive
/// calls on the same context are independent; nothing carries over between
/// calls except the allocated storage itself. Operations take `&mut self`,
/// so a context has at most one operation in flight.
pub struct Calculator {
    operators: BoundedStack<StackEntry>,
    values: BoundedStack<f64>,
    fragments: BoundedStack<String>,
}

impl Calculator {
    /// Creates a context whose stacks hold up to [`DEFAULT_STACK_LIMIT`]
    /// entries.
    pub fn new() -> Calculator {
        Calculator::with_stack_limit(DEFAULT_STACK_LIMIT)
    }

    /// Creates a context with an explicit per-stack capacity limit. An
    /// expression that needs more pending entries than `limit` fails with
    /// [`CalcError::CapacityExceeded`].
    pub fn with_stack_limit(limit: usize) -> Calculator {
        Calculator {
            operators: BoundedStack::with_limit(limit),
            values: BoundedStack::with_limit(limit),
            fragments: BoundedStack::with_limit(limit),
        }
    }

    /// Converts an infix expression to its space-separated postfix form.
    ///
    /// # Arguments
    ///
    /// * `expression`: The text of the infix expression.
    ///
    /// returns: The postfix form, tokens separated by single spaces.
    ///
    /// # Examples
    ///
    /// ```
    /// use expression_calculator::calculator::Calculator;
    /// # use expression_calculator::calculator::CalcError;
    ///
    /// # fn main() -> Result<(), CalcError> {
    /// let mut calculator = Calculator::new();
    /// let postfix = calculator.infix_to_postfix("(3 + 4) * 5")?;
    /// assert_eq!(postfix, "3 4 + 5 *");
    /// # Ok(()) }
    /// ```
    pub fn infix_to_postfix(&mut self, expression: &str) -> Result<String, CalcError> {
        self.operators.clear();
        let tokens = lexer::tokenize(expression)?;
        let postfix = converter::infix_to_postfix(tokens, &mut self.operators)?;
        Ok(postfix.iter().join(" "))
    }

    /// Rebuilds a fully parenthesized infix rendering of a postfix
    /// expression. The rendering is for display; evaluation consumes the
    /// postfix form directly.
    ///
    /// # Arguments
    ///
    /// * `expression`: The postfix expression, tokens separated by spaces.
    ///
    /// returns: The equivalent infix expression, fully parenthesized.
    ///
    /// # Examples
    ///
    /// ```
    /// use expression_calculator::calculator::Calculator;
    /// # use expression_calculator::calculator::CalcError;
    ///
    /// # fn main() -> Result<(), CalcError> {
    /// let mut calculator = Calculator::new();
    /// let infix = calculator.postfix_to_infix("3 4 + 5 *")?;
    /// assert_eq!(infix, "( ( 3 + 4 ) * 5 )");
    /// # Ok(()) }
    /// ```
    pub fn postfix_to_infix(&mut self, expression: &str) -> Result<String, CalcError> {
        self.fragments.clear();
        converter::postfix_to_infix(expression, &mut self.fragments)
    }

    /// Evaluates a postfix expression to a number.
    ///
    /// # Arguments
    ///
    /// * `expression`: The postfix expression, tokens separated by spaces.
    ///
    /// returns: The value of the expression.
    ///
    /// # Examples
    ///
    /// ```
    /// use expression_calculator::calculator::Calculator;
    /// # use expression_calculator::calculator::CalcError;
    ///
    /// # fn main() -> Result<(), CalcError> {
    /// let mut calculator = Calculator::new();
    /// let value = calculator.evaluate_postfix("3 4 + 5 *")?;
    /// assert_eq!(value, 35.0);
    /// # Ok(()) }
    /// ```
    pub fn evaluate_postfix(&mut self, expression: &str) -> Result<f64, CalcError> {
        self.values.clear();
        evaluator::evaluate(expression, &mut self.values)
    }

    /// Converts an infix expression to postfix and evaluates it in one call.
    ///
    /// # Examples
    ///
    /// ```
    /// use expression_calculator::calculator::Calculator;
    /// # use expression_calculator::calculator::CalcError;
    ///
    /// # fn main() -> Result<(), CalcError> {
    /// let mut calculator = Calculator::new();
    /// assert_eq!(calculator.evaluate_infix("raiz(64) % 3")?, 2.0);
    /// # Ok(()) }
    /// ```
    pub fn evaluate_infix(&mut self, expression: &str) -> Result<f64, CalcError> {
        let postfix = self.infix_to_postfix(expression)?;
        self.evaluate_postfix(&postfix)
    }
}

impl Default for Calculator {
    fn default() -> Calculator {
        Calculator::new()
    }
}
