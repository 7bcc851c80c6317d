//! libarith generates arithmetic exercises over natural numbers and proper fractions, and
//! grades answers to them. All arithmetic is exact.

#[macro_use]
pub mod diagnostics;
pub mod common;

pub mod scanner;
pub use scanner::scan;

mod parser;
pub use parser::parse_expression;

pub mod grammar;
pub mod emit;
pub use emit::{Emit, EmitFormat};
mod visitor;

pub mod evaluator;
pub use evaluator::{evaluate, evaluate_expression, EvalError, Evaluation};

pub mod validator;
pub use validator::{validate, Rejection};

pub mod dedup;
pub use dedup::DuplicateDetector;

pub mod generator;
pub use generator::{Exercise, GenerationInfeasible, Generator, GeneratorConfig};

pub mod grade;
pub use grade::{grade_answer, Grade, Verdict, WrongReason};

pub mod math;
pub use math::{DivisionByZero, ExactRational};

mod utils;
