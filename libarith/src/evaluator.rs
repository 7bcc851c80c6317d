//! Exact evaluation of parsed expressions.
//!
//! Evaluation is bottom-up over the [grammar](crate::grammar), entirely in [`ExactRational`]
//! arithmetic. Besides the final value, the evaluator records the result of every operation it
//! performs, in evaluation order, so that constraints on intermediate results (like "no
//! division may produce an improper fraction") can be checked afterwards.

#[macro_use]
mod errors;
pub(crate) use errors::EvalErrors;
use errors::*;

use crate::common::Span;
use crate::diagnostics::Diagnostic;
use crate::grammar::*;
use crate::math::ExactRational;
use crate::parser::parse_expression;
use crate::scanner::{scan, ScanResult};
use crate::visitor::Visitor;

use thiserror::Error;

/// The result of a single binary operation performed during evaluation.
#[derive(Clone, PartialEq, Debug)]
pub struct Step {
    pub op: BinaryOperator,
    pub result: ExactRational,
}

/// The value of an expression and the operations that produced it.
#[derive(Clone, PartialEq, Debug)]
pub struct Evaluation {
    pub value: ExactRational,
    /// Every binary operation, in the order it was performed.
    pub steps: Vec<Step>,
}

impl Evaluation {
    /// Results of all operations performed with `op`.
    pub fn results_of(&self, op: BinaryOperator) -> impl Iterator<Item = &ExactRational> {
        self.steps
            .iter()
            .filter(move |step| step.op == op)
            .map(|step| &step.result)
    }
}

/// Why an expression could not be evaluated.
#[derive(Clone, PartialEq, Debug, Error)]
pub enum EvalError {
    /// The text does not form an expression.
    #[error("malformed expression")]
    Malformed(Vec<Diagnostic>),
    /// Some division in the expression has a zero divisor.
    #[error("division by zero")]
    DivisionByZero(Diagnostic),
}

impl EvalError {
    /// The diagnostics explaining the failure.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            EvalError::Malformed(diagnostics) => diagnostics,
            EvalError::DivisionByZero(diagnostic) => std::slice::from_ref(diagnostic),
        }
    }
}

/// Evaluates a parsed expression.
pub fn evaluate(expr: &Expr) -> Result<Evaluation, Diagnostic> {
    let mut evaluator = Evaluator { steps: Vec::new() };
    let value = evaluator.visit_expr(expr)?;
    Ok(Evaluation {
        value,
        steps: evaluator.steps,
    })
}

/// Scans, parses, and evaluates an expression written in canonical text form.
pub fn evaluate_expression(program: &str) -> Result<Evaluation, EvalError> {
    let ScanResult {
        tokens,
        diagnostics,
    } = scan(program);
    if !diagnostics.is_empty() {
        return Err(EvalError::Malformed(diagnostics));
    }

    let (parsed, diagnostics) = parse_expression(tokens);
    let parsed = match parsed {
        Some(parsed) if diagnostics.is_empty() => parsed,
        _ => return Err(EvalError::Malformed(diagnostics)),
    };

    evaluate(&parsed).map_err(EvalError::DivisionByZero)
}

struct Evaluator {
    steps: Vec<Step>,
}

impl<'a> Visitor<'a> for Evaluator {
    type Result = Result<ExactRational, Diagnostic>;

    fn visit_const(&mut self, item: &'a Operand, span: Span) -> Self::Result {
        item.value().map_err(|_| DivisionByZero!(span))
    }

    fn visit_binary_expr(&mut self, item: &'a BinaryExpr, _span: Span) -> Self::Result {
        let lhs = self.visit_expr(&item.lhs)?;
        let rhs = self.visit_expr(&item.rhs)?;
        let result = match item.op {
            BinaryOperator::Plus => &lhs + &rhs,
            BinaryOperator::Minus => &lhs - &rhs,
            BinaryOperator::Mult => &lhs * &rhs,
            BinaryOperator::Div => lhs
                .divide(&rhs)
                .map_err(|_| DivisionByZero!(item.rhs.span))?,
        };
        self.steps.push(Step {
            op: item.op,
            result: result.clone(),
        });
        Ok(result)
    }
}
