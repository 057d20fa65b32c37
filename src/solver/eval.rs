//! Expression evaluation and answer formatting.

use std::fmt;

use crate::solver::SolveError;
use crate::solver::vocabulary::Op;

/// A fully resolved expression: two operands and one operator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedExpression {
    pub left: f64,
    pub right: f64,
    pub op: Op,
}

/// A solved answer, rounded to two decimals with ties going to the even
/// digit. Displays in the exact wire format the verifier expects ("25.00").
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Answer {
    value: f64,
}

impl Answer {
    fn from_raw(raw: f64) -> Self {
        Answer { value: (raw * 100.0).round_ties_even() / 100.0 }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.value)
    }
}

/// Apply the operator. Division by zero is an error, never an answer.
pub fn evaluate(expr: &ParsedExpression) -> Result<Answer, SolveError> {
    let raw = match expr.op {
        Op::Add => expr.left + expr.right,
        Op::Sub => expr.left - expr.right,
        Op::Mul => expr.left * expr.right,
        Op::Div => {
            if expr.right == 0.0 {
                return Err(SolveError::DivisionByZero);
            }
            expr.left / expr.right
        }
    };
    Ok(Answer::from_raw(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(left: f64, op: Op, right: f64) -> Result<Answer, SolveError> {
        evaluate(&ParsedExpression { left, right, op })
    }

    #[test]
    fn applies_each_operator() {
        assert_eq!(eval(12.0, Op::Add, 13.0).unwrap().to_string(), "25.00");
        assert_eq!(eval(10.0, Op::Sub, 3.0).unwrap().to_string(), "7.00");
        assert_eq!(eval(6.0, Op::Mul, 7.0).unwrap().to_string(), "42.00");
        assert_eq!(eval(20.0, Op::Div, 8.0).unwrap().to_string(), "2.50");
    }

    #[test]
    fn negative_results_keep_two_decimals() {
        assert_eq!(eval(3.0, Op::Sub, 10.0).unwrap().to_string(), "-7.00");
        assert_eq!(eval(-7.0, Op::Div, 2.0).unwrap().to_string(), "-3.50");
    }

    #[test]
    fn repeating_fractions_round_to_two_decimals() {
        assert_eq!(eval(100.0, Op::Div, 3.0).unwrap().to_string(), "33.33");
        assert_eq!(eval(200.0, Op::Div, 3.0).unwrap().to_string(), "66.67");
    }

    #[test]
    fn ties_round_to_the_even_digit() {
        // 0.125 and 0.375 are exact in binary, so these really are ties.
        assert_eq!(Answer::from_raw(0.125).to_string(), "0.12");
        assert_eq!(Answer::from_raw(0.375).to_string(), "0.38");
        assert_eq!(Answer::from_raw(-0.125).to_string(), "-0.12");
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert_eq!(eval(5.0, Op::Div, 0.0), Err(SolveError::DivisionByZero));
        assert_eq!(eval(0.0, Op::Div, 0.0), Err(SolveError::DivisionByZero));
    }

    #[test]
    fn zero_divided_is_fine() {
        assert_eq!(eval(0.0, Op::Div, 5.0).unwrap().to_string(), "0.00");
    }
}
