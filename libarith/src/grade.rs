//! Grading of submitted answers.

use crate::evaluator::{evaluate_expression, EvalError};
use crate::math::{mixed, ExactRational};

use core::fmt;
use thiserror::Error;

/// Why an answer was graded wrong.
#[derive(Clone, PartialEq, Debug, Error)]
pub enum WrongReason {
    #[error("expected {expected}")]
    Mismatch { expected: ExactRational },
    #[error("the exercise cannot be evaluated")]
    InvalidExpression(EvalError),
    #[error("the answer is not a number: {0}")]
    InvalidAnswer(mixed::MixedNumberError),
    #[error("no answer was given")]
    Missing,
    #[error("the problem could not be read")]
    Unreadable,
}

/// The outcome of grading one problem.
#[derive(Clone, PartialEq, Debug)]
pub enum Verdict {
    Correct,
    Wrong(WrongReason),
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct)
    }
}

/// Grades a submitted answer to an exercise. Answers are compared by value, so `4/2` is a
/// correct answer to `1 + 1`.
pub fn grade_answer(expression: &str, submitted: &str) -> Verdict {
    let expected = match evaluate_expression(expression) {
        Ok(evaluation) => evaluation.value,
        Err(err) => return Verdict::Wrong(WrongReason::InvalidExpression(err)),
    };
    match mixed::parse(submitted) {
        Ok(answer) if answer == expected => Verdict::Correct,
        Ok(_) => Verdict::Wrong(WrongReason::Mismatch { expected }),
        Err(err) => Verdict::Wrong(WrongReason::InvalidAnswer(err)),
    }
}

/// The 1-based indices of correctly and wrongly answered problems.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Grade {
    pub correct: Vec<usize>,
    pub wrong: Vec<usize>,
}

impl Grade {
    /// Builds a grade from verdicts listed in problem order.
    pub fn from_verdicts<'a, I>(verdicts: I) -> Self
    where
        I: IntoIterator<Item = &'a Verdict>,
    {
        let mut grade = Grade::default();
        for (i, verdict) in verdicts.into_iter().enumerate() {
            if verdict.is_correct() {
                grade.correct.push(i + 1);
            } else {
                grade.wrong.push(i + 1);
            }
        }
        grade
    }
}

fn fmt_indices(f: &mut fmt::Formatter<'_>, label: &str, indices: &[usize]) -> fmt::Result {
    let list = indices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    write!(f, "{}: {} ({})", label, indices.len(), list)
}

impl fmt::Display for Grade {
    /// Formats the grade the way it is written to a grade file.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_indices(f, "Correct", &self.correct)?;
        writeln!(f)?;
        fmt_indices(f, "Wrong", &self.wrong)
    }
}
