//! Detection of duplicate exercises.
//!
//! Two exercises are duplicates when they are written identically up to whitespace, or when
//! they differ only by reordering the operands of a sum or a product. The latter is checked on
//! token sequences with brackets removed, so `(1 + 2) × 3` and `3 × (1 + 2)` are recognized as
//! the same product. Removing brackets also makes `(1 + 2) × 3` look like the same sum as
//! `1 + 2 × 3`; such exercises are treated as duplicates too.

use crate::grammar::BinaryOperator;
use crate::scanner::{scan, Token, TokenType};

use core::convert::TryFrom;
use std::collections::HashSet;

/// Operand multisets of one expression, one for each commutative operator. An entry is `None`
/// when the expression does not use that operator.
#[derive(PartialEq, Debug)]
struct Operands(Vec<Option<Vec<String>>>);

impl Operands {
    fn of(expr: &str) -> Self {
        let tokens: Vec<Token> = scan(expr)
            .tokens
            .into_iter()
            .filter(|tok| {
                !matches!(tok.ty, TokenType::OpenParen | TokenType::CloseParen | TokenType::EOF)
            })
            .collect();

        Self(
            BinaryOperator::ALL
                .iter()
                .filter(|op| op.is_commutative())
                .map(|op| split_on(&tokens, *op))
                .collect(),
        )
    }

    fn commutes_with(&self, other: &Operands) -> bool {
        self.0.iter().zip(other.0.iter()).any(|pair| match pair {
            (Some(a), Some(b)) => a == b,
            _ => false,
        })
    }
}

/// Splits a token sequence on `op`, returning the sorted terms between occurrences of `op`, or
/// nothing if `op` does not occur.
fn split_on(tokens: &[Token], op: BinaryOperator) -> Option<Vec<String>> {
    let is_op = |tok: &Token| BinaryOperator::try_from(tok) == Ok(op);
    if !tokens.iter().any(is_op) {
        return None;
    }
    let mut terms: Vec<String> = tokens
        .split(is_op)
        .map(|term| term.iter().map(|tok| tok.ty.to_string()).collect())
        .collect();
    terms.sort();
    Some(terms)
}

/// Tracks accepted exercises and rejects duplicates of them.
#[derive(Default)]
pub struct DuplicateDetector {
    seen: HashSet<String>,
    operands: Vec<Operands>,
}

impl DuplicateDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// The whitespace-free form of an expression.
    pub fn normalize(expr: &str) -> String {
        expr.chars().filter(|c| !c.is_whitespace()).collect()
    }

    /// Whether `expr` duplicates an exercise accepted before.
    pub fn is_duplicate(&self, expr: &str) -> bool {
        if self.seen.contains(&Self::normalize(expr)) {
            return true;
        }
        let operands = Operands::of(expr);
        self.operands.iter().any(|seen| seen.commutes_with(&operands))
    }

    /// Records `expr` as accepted.
    pub fn insert(&mut self, expr: &str) {
        if self.seen.insert(Self::normalize(expr)) {
            self.operands.push(Operands::of(expr));
        }
    }

    /// Records `expr` as accepted if it duplicates nothing accepted before. Returns whether it
    /// was recorded.
    pub fn admit(&mut self, expr: &str) -> bool {
        if self.is_duplicate(expr) {
            return false;
        }
        self.insert(expr);
        true
    }
}
