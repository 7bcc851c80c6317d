//! Admissibility of exercise expressions.
//!
//! An expression is admissible as an exercise when it evaluates, when no subtraction in it
//! (including the last) goes below zero, and when every division in it produces a proper
//! fraction or a whole number.

use crate::evaluator::{evaluate_expression, EvalError, Evaluation};
use crate::grammar::BinaryOperator;
use crate::math::ExactRational;

use thiserror::Error;

/// Why an expression is not admissible as an exercise.
#[derive(Clone, PartialEq, Debug, Error)]
pub enum Rejection {
    #[error("expression cannot be evaluated: {0}")]
    Invalid(EvalError),
    #[error("expression has a negative result")]
    Negative,
    #[error("expression has a division producing an improper fraction")]
    ImproperDivision,
}

/// Checks an evaluation against the exercise rules.
pub fn check(evaluation: &Evaluation) -> Result<(), Rejection> {
    if evaluation.value.is_negative()
        || evaluation
            .results_of(BinaryOperator::Minus)
            .any(ExactRational::is_negative)
    {
        return Err(Rejection::Negative);
    }
    if evaluation
        .results_of(BinaryOperator::Div)
        .any(ExactRational::is_improper)
    {
        return Err(Rejection::ImproperDivision);
    }
    Ok(())
}

/// Validates an expression in canonical text form, returning its value if it is admissible.
pub fn validate(expr: &str) -> Result<ExactRational, Rejection> {
    let evaluation = evaluate_expression(expr).map_err(Rejection::Invalid)?;
    check(&evaluation)?;
    Ok(evaluation.value)
}
