//! Random generation of exercises.
//!
//! A generation run repeatedly draws a random [`Candidate`], renders it, and keeps it only if
//! it is [admissible](crate::validator) and not a [duplicate](crate::dedup) of an exercise kept
//! before. Runs are bounded by an attempt budget, so that a range too small to supply the
//! requested number of distinct exercises fails instead of looping forever.

use crate::dedup::DuplicateDetector;
use crate::grammar::{BinaryOperator, Operand};
use crate::math::ExactRational;
use crate::validator::validate;

use core::fmt;
use log::{debug, info, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

/// Options of a generation run.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    range: u32,
    integer_probability: f64,
    attempts_per_exercise: usize,
    max_attempts: Option<usize>,
}

impl GeneratorConfig {
    /// Creates a config drawing operands below `range`.
    pub fn new(range: u32) -> Self {
        Self {
            range,
            integer_probability: 0.7,
            attempts_per_exercise: 1000,
            max_attempts: None,
        }
    }

    /// Sets the probability that an operand is an integer rather than a fraction. Clamped to
    /// `[0, 1]`.
    pub fn integer_probability(mut self, p: f64) -> Self {
        self.integer_probability = p.max(0.0).min(1.0);
        self
    }

    /// Sets the attempts budgeted per requested exercise, used when no total is set.
    pub fn attempts_per_exercise(mut self, attempts: usize) -> Self {
        self.attempts_per_exercise = attempts;
        self
    }

    /// Sets the total attempts of a run, regardless of the number of exercises requested.
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    fn budget(&self, count: usize) -> usize {
        self.max_attempts
            .unwrap_or_else(|| count.saturating_mul(self.attempts_per_exercise))
    }
}

/// Why a run could not produce the requested exercises.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum GenerationInfeasible {
    #[error("range {range} is too small to generate exercises; it must be at least 2")]
    DegenerateRange { range: u32 },
    #[error(
        "generated only {produced} of {requested} exercises in {attempts} attempts; \
         try a larger range or fewer exercises"
    )]
    AttemptsExhausted {
        requested: usize,
        produced: usize,
        attempts: usize,
    },
}

/// An accepted exercise.
#[derive(Clone, PartialEq, Debug)]
pub struct Exercise {
    /// The exercise in canonical display form, like `(1 + 2) × 3`.
    pub expression: String,
    pub answer: ExactRational,
}

/// Where a candidate's brackets go.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Bracketing {
    None,
    /// Around the first two operands.
    FirstPair,
    /// Around the second and third operands.
    MiddlePair,
    /// Around the first three operands.
    FirstThree,
}

impl Bracketing {
    /// Indices of the operands the brackets open before and close after.
    fn bounds(self) -> Option<(usize, usize)> {
        match self {
            Bracketing::None => None,
            Bracketing::FirstPair => Some((0, 1)),
            Bracketing::MiddlePair => Some((1, 2)),
            Bracketing::FirstThree => Some((0, 2)),
        }
    }
}

/// A randomly drawn expression, not yet checked for admissibility.
#[derive(Clone, PartialEq, Debug)]
pub struct Candidate {
    pub operands: Vec<Operand>,
    /// One fewer than the operands; `operators[i]` sits between `operands[i]` and
    /// `operands[i + 1]`.
    pub operators: Vec<BinaryOperator>,
    pub bracketing: Bracketing,
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bounds = self.bracketing.bounds();
        for (i, operand) in self.operands.iter().enumerate() {
            if i > 0 {
                write!(f, " {} ", self.operators[i - 1])?;
            }
            if matches!(bounds, Some((open, _)) if open == i) {
                write!(f, "(")?;
            }
            write!(f, "{}", operand)?;
            if matches!(bounds, Some((_, close)) if close == i) {
                write!(f, ")")?;
            }
        }
        Ok(())
    }
}

/// Generates exercises using a random number generator it owns.
pub struct Generator<R: Rng> {
    config: GeneratorConfig,
    rng: R,
}

impl Generator<ChaCha8Rng> {
    /// A generator whose output is determined by `seed`.
    pub fn seeded(config: GeneratorConfig, seed: u64) -> Self {
        Self::new(config, ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy(config: GeneratorConfig) -> Self {
        Self::new(config, ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> Generator<R> {
    pub fn new(config: GeneratorConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Draws a random candidate of one to three operators.
    ///
    /// The configured range must be at least 2; [`generate`](Self::generate) checks this.
    pub(crate) fn candidate(&mut self) -> Candidate {
        let operator_count = self.rng.gen_range(1..=3);
        let operators = (0..operator_count)
            .map(|_| BinaryOperator::ALL[self.rng.gen_range(0..BinaryOperator::ALL.len())])
            .collect();
        let operands = (0..=operator_count).map(|_| self.operand()).collect();
        let bracketing = match operator_count {
            2 if self.rng.gen_bool(0.5) => Bracketing::FirstPair,
            3 => match self.rng.gen_range(0..3) {
                0 => Bracketing::FirstPair,
                1 => Bracketing::MiddlePair,
                _ => Bracketing::FirstThree,
            },
            _ => Bracketing::None,
        };

        Candidate {
            operands,
            operators,
            bracketing,
        }
    }

    /// An integer below the range, or a proper fraction with a denominator up to the range.
    fn operand(&mut self) -> Operand {
        let range = self.config.range;
        if self.rng.gen_bool(self.config.integer_probability) {
            Operand::integer(self.rng.gen_range(0..range))
        } else {
            let denom = self.rng.gen_range(2..=range);
            let numer = self.rng.gen_range(1..denom);
            Operand::fraction(numer, denom)
        }
    }

    /// Generates `count` distinct admissible exercises.
    pub fn generate(&mut self, count: usize) -> Result<Vec<Exercise>, GenerationInfeasible> {
        let range = self.config.range;
        if range < 2 {
            return Err(GenerationInfeasible::DegenerateRange { range });
        }

        let budget = self.config.budget(count);
        let mut detector = DuplicateDetector::new();
        let mut exercises = Vec::with_capacity(count);
        let mut attempts = 0;

        while exercises.len() < count {
            if attempts == budget {
                return Err(GenerationInfeasible::AttemptsExhausted {
                    requested: count,
                    produced: exercises.len(),
                    attempts,
                });
            }
            attempts += 1;

            let expression = self.candidate().to_string();
            let answer = match validate(&expression) {
                Ok(answer) => answer,
                Err(rejection) => {
                    trace!("rejected `{}`: {}", expression, rejection);
                    continue;
                }
            };
            if !detector.admit(&expression) {
                trace!("rejected `{}`: duplicate", expression);
                continue;
            }

            debug!("accepted `{}` = {}", expression, answer);
            exercises.push(Exercise { expression, answer });
        }

        info!(
            "generated {} exercises in {} attempts (range {})",
            exercises.len(),
            attempts,
            range
        );
        Ok(exercises)
    }
}
