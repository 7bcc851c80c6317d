//! The libarith expression grammar.

use crate::common::Span;
use crate::math::{DivisionByZero, ExactRational};
use crate::scanner::types::{Token, TokenType};

use core::convert::TryFrom;
use core::fmt;
use num_bigint::BigInt;

/// An operand literal.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Operand {
    /// A natural number, like `12`.
    Integer(BigInt),
    /// A fraction exactly as written, like `2/4`. It is not reduced, so that it displays the way
    /// it was written.
    Fraction { numer: BigInt, denom: BigInt },
}

impl Operand {
    pub fn integer<N: Into<BigInt>>(n: N) -> Self {
        Self::Integer(n.into())
    }

    pub fn fraction<N: Into<BigInt>, D: Into<BigInt>>(numer: N, denom: D) -> Self {
        Self::Fraction {
            numer: numer.into(),
            denom: denom.into(),
        }
    }

    /// The exact value of the operand.
    pub fn value(&self) -> Result<ExactRational, DivisionByZero> {
        match self {
            Self::Integer(n) => Ok(ExactRational::from_integer(n.clone())),
            Self::Fraction { numer, denom } => ExactRational::new(numer.clone(), denom.clone()),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{}", n),
            Self::Fraction { numer, denom } => write!(f, "{}/{}", numer, denom),
        }
    }
}

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum BinaryOperator {
    Plus,
    Minus,
    Mult,
    Div,
}

impl BinaryOperator {
    /// All operators, in the order generated expressions draw them from.
    pub const ALL: [BinaryOperator; 4] = [
        BinaryOperator::Plus,
        BinaryOperator::Minus,
        BinaryOperator::Mult,
        BinaryOperator::Div,
    ];

    /// Whether `a op b` and `b op a` always have the same value.
    pub fn is_commutative(self) -> bool {
        matches!(self, BinaryOperator::Plus | BinaryOperator::Mult)
    }
}

impl TryFrom<&Token> for BinaryOperator {
    type Error = ();

    fn try_from(token: &Token) -> Result<Self, Self::Error> {
        use BinaryOperator::*;
        match token.ty {
            TokenType::Plus => Ok(Plus),
            TokenType::Minus => Ok(Minus),
            TokenType::Mult => Ok(Mult),
            TokenType::Div => Ok(Div),
            _ => Err(()),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::*;
        write!(
            f,
            "{}",
            match self {
                Plus => "+",
                Minus => "-",
                Mult => "×",
                Div => "÷",
            }
        )
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct BinaryExpr {
    pub op: BinaryOperator,
    pub lhs: Box<Expr>,
    pub rhs: Box<Expr>,
}

#[derive(Clone, PartialEq, Debug)]
pub enum ExprKind {
    Const(Operand),
    BinaryExpr(BinaryExpr),
    /// An expression wrapped in parentheses
    Parend(Box<Expr>),
}

/// An expression together with the source span it was parsed from.
#[derive(Clone, PartialEq, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new<S: Into<Span>>(kind: ExprKind, span: S) -> Self {
        Self {
            kind,
            span: span.into(),
        }
    }

    pub fn binary(op: BinaryOperator, lhs: Expr, rhs: Expr) -> Self {
        let span = lhs.span.to(rhs.span);
        Self::new(
            ExprKind::BinaryExpr(BinaryExpr {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            }),
            span,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operand_values() {
        let half = ExactRational::new(1, 2).unwrap();
        assert_eq!(Operand::fraction(2, 4).value(), Ok(half));
        assert_eq!(Operand::fraction(2, 4).to_string(), "2/4");
        assert_eq!(Operand::integer(7).value(), Ok(ExactRational::from(7)));
        assert_eq!(Operand::fraction(1, 0).value(), Err(DivisionByZero));
    }

    #[test]
    fn commutativity() {
        let commutative = BinaryOperator::ALL
            .iter()
            .filter(|op| op.is_commutative())
            .map(|op| op.to_string())
            .collect::<Vec<_>>();
        assert_eq!(commutative, vec!["+", "×"]);
    }
}
