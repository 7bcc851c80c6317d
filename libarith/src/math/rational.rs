use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};
use thiserror::Error;

/// Raised when a rational number would be divided by zero.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Error)]
#[error("division by zero")]
pub struct DivisionByZero;

/// An exact rational number.
///
/// The value is always kept in lowest terms with a positive denominator, so equality (and
/// hashing) is value equality: `2/4 == 1/2`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ExactRational(BigRational);

impl ExactRational {
    /// Creates the rational `numer / denom`, reduced to lowest terms.
    ///
    /// Fails with [`DivisionByZero`] if `denom` is zero.
    pub fn new<N, D>(numer: N, denom: D) -> Result<Self, DivisionByZero>
    where
        N: Into<BigInt>,
        D: Into<BigInt>,
    {
        let denom = denom.into();
        if denom.is_zero() {
            return Err(DivisionByZero);
        }
        Ok(Self(BigRational::new(numer.into(), denom)))
    }

    /// Creates the rational `n / 1`.
    pub fn from_integer<N: Into<BigInt>>(n: N) -> Self {
        Self(BigRational::from_integer(n.into()))
    }

    pub fn zero() -> Self {
        Self(BigRational::zero())
    }

    /// The numerator in lowest terms; carries the sign of the value.
    pub fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    /// The denominator in lowest terms; always positive.
    pub fn denom(&self) -> &BigInt {
        self.0.denom()
    }

    /// Divides `self` by `rhs`.
    pub fn divide(&self, rhs: &ExactRational) -> Result<ExactRational, DivisionByZero> {
        if rhs.is_zero() {
            return Err(DivisionByZero);
        }
        Ok(Self(&self.0 / &rhs.0))
    }

    pub fn abs(&self) -> ExactRational {
        Self(self.0.abs())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Whether the value is a whole number.
    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    /// Whether the value is an improper fraction: its magnitude is at least one, but it is not a
    /// whole number.
    pub fn is_improper(&self) -> bool {
        !self.is_integer() && self.numer().abs() >= *self.denom()
    }
}

impl Default for ExactRational {
    fn default() -> Self {
        Self::zero()
    }
}

macro_rules! from_int_impl {
    ($($int:ty)*) => {$(
        impl From<$int> for ExactRational {
            fn from(n: $int) -> Self {
                Self::from_integer(n)
            }
        }
    )*};
}

from_int_impl! { i32 i64 u32 u64 usize BigInt }

/// Forwards an arithmetic operator to the underlying ratio, for borrowed and owned operands.
macro_rules! op_impl {
    ($($trait:ident $method:ident)*) => {$(
        impl<'a> $trait<&'a ExactRational> for &'a ExactRational {
            type Output = ExactRational;

            fn $method(self, rhs: &'a ExactRational) -> ExactRational {
                ExactRational((&self.0).$method(&rhs.0))
            }
        }

        impl $trait for ExactRational {
            type Output = ExactRational;

            fn $method(self, rhs: ExactRational) -> ExactRational {
                ExactRational(self.0.$method(rhs.0))
            }
        }
    )*};
}

op_impl! {
    Add add
    Sub sub
    Mul mul
}

impl Neg for ExactRational {
    type Output = ExactRational;

    fn neg(self) -> ExactRational {
        Self(-self.0)
    }
}

impl fmt::Display for ExactRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", super::mixed::format(self))
    }
}

impl core::str::FromStr for ExactRational {
    type Err = super::mixed::MixedNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::mixed::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cmp::Ordering;

    fn frac(n: i64, d: i64) -> ExactRational {
        ExactRational::new(n, d).unwrap()
    }

    #[test]
    fn reduces_on_construction() {
        let r = frac(6, 8);
        assert_eq!(r.numer(), &BigInt::from(3));
        assert_eq!(r.denom(), &BigInt::from(4));
        assert_eq!(frac(2, 4), frac(1, 2));
        assert_eq!(frac(0, 5), ExactRational::zero());
    }

    #[test]
    fn normalizes_sign_into_numerator() {
        let r = frac(3, -6);
        assert_eq!(r.numer(), &BigInt::from(-1));
        assert_eq!(r.denom(), &BigInt::from(2));
        assert!(r.is_negative());
        assert_eq!(frac(-3, -6), frac(1, 2));
    }

    #[test]
    fn zero_denominator_is_an_error() {
        assert_eq!(ExactRational::new(1, 0), Err(DivisionByZero));
    }

    macro_rules! arithmetic_tests {
        ($($name:ident: $lhs:expr, $op:tt, $rhs:expr => $result:expr)*) => {
        $(
            #[test]
            fn $name() {
                let (lhs, rhs): (ExactRational, ExactRational) = ($lhs, $rhs);
                assert_eq!(&lhs $op &rhs, $result);
                assert_eq!(lhs $op rhs, $result);
            }
        )*
        }
    }

    mod arithmetic {
        use super::*;

        arithmetic_tests! {
            add_integers:          frac(2, 1), +, frac(3, 1) => frac(5, 1)
            add_fractions:         frac(1, 2), +, frac(1, 3) => frac(5, 6)
            add_to_whole:          frac(1, 2), +, frac(1, 2) => frac(1, 1)
            sub_fractions:         frac(3, 4), -, frac(1, 4) => frac(1, 2)
            sub_below_zero:        frac(1, 4), -, frac(1, 2) => frac(-1, 4)
            mul_fractions:         frac(2, 3), *, frac(3, 4) => frac(1, 2)
            mul_by_zero:           frac(2, 3), *, frac(0, 1) => frac(0, 1)
        }
    }

    #[test]
    fn divide() {
        assert_eq!(frac(1, 2).divide(&frac(1, 4)), Ok(frac(2, 1)));
        assert_eq!(frac(1, 1).divide(&frac(3, 1)), Ok(frac(1, 3)));
        assert_eq!(frac(3, 1).divide(&frac(2, 1)), Ok(frac(3, 2)));
        assert_eq!(frac(3, 1).divide(&ExactRational::zero()), Err(DivisionByZero));
        assert_eq!(ExactRational::zero().divide(&frac(3, 1)), Ok(ExactRational::zero()));
    }

    #[test]
    fn compare() {
        assert!(frac(1, 3) < frac(1, 2));
        assert!(frac(-1, 2) < frac(1, 3));
        assert!(frac(7, 3) > frac(2, 1));
        assert_eq!(frac(4, 6).cmp(&frac(2, 3)), Ordering::Equal);
    }

    #[test]
    fn classification() {
        assert!(frac(3, 2).is_improper());
        assert!(frac(-3, 2).is_improper());
        assert!(!frac(2, 1).is_improper());
        assert!(!frac(1, 2).is_improper());
        assert!(frac(6, 3).is_integer());
        assert!(ExactRational::zero().is_zero());
        assert!(!ExactRational::zero().is_negative());
        assert_eq!(frac(-5, 3).abs(), frac(5, 3));
    }

    #[test]
    fn stays_exact_past_machine_integers() {
        let big = ExactRational::from_integer(i64::MAX);
        let squared = &big * &big;
        let back = squared.divide(&big).unwrap();
        assert_eq!(back, big);
    }
}
