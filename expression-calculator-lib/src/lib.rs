//! Stack-based calculator for infix and postfix arithmetic expressions.
//!
//! Expressions combine floating-point literals, the binary operators
//! `+ - * / % ^`, the unary functions `raiz`, `sen`, `cos`, `tg`, and `log`,
//! and parentheses. The [`calculator::Calculator`] context converts infix
//! text to postfix (Reverse Polish) form, evaluates postfix expressions to a
//! number, and rebuilds a fully parenthesized infix rendering from postfix.

pub mod calculator;
