//! Exact arithmetic used by the [evaluator][crate::evaluator] and the [generator].
//!
//! Every value flowing through libarith is an [`ExactRational`]; floating point is never used.
//! [`mixed`] converts those values to and from the mixed-number notation students write.
//!
//! [generator]: crate::generator

mod rational;
pub use rational::*;

pub mod mixed;
