//! Mixed-number notation for [`ExactRational`] values.
//!
//! A value is written as a whole number (`2`), a proper fraction (`2/3`), or a mixed number
//! combining the two with an apostrophe (`2'1/3` is two and one third).

use super::ExactRational;
use crate::utils::parse_digits;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};
use thiserror::Error;

/// Why a string is not a mixed number.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum MixedNumberError {
    #[error("expected a number, found nothing")]
    Empty,
    #[error(r#""{0}" is not a whole number"#)]
    NotDigits(String),
    #[error("a fraction cannot have a zero denominator")]
    ZeroDenominator,
    #[error("the fraction in a mixed number must be proper, found {numer}/{denom}")]
    ImproperPart { numer: BigInt, denom: BigInt },
}

/// Formats a value in mixed-number notation.
///
/// Reduced values with denominator one are written as integers, values between zero and one as
/// `n/d`, and everything else as `w'n/d`. A negative value is written as a `-` followed by the
/// notation of its magnitude.
pub fn format(value: &ExactRational) -> String {
    if value.is_negative() {
        return format!("-{}", format(&value.abs()));
    }

    let (numer, denom) = (value.numer(), value.denom());
    if denom.is_one() {
        return numer.to_string();
    }
    if numer < denom {
        return format!("{}/{}", numer, denom);
    }

    let (whole, remainder) = numer.div_rem(denom);
    if remainder.is_zero() {
        // Unreachable for reduced values, kept for completeness of the notation.
        whole.to_string()
    } else {
        format!("{}'{}/{}", whole, remainder, denom)
    }
}

/// Parses a value written in mixed-number notation.
///
/// Accepts `W`, `N/D`, and `W'N/D` where every part is a run of ASCII digits. `N/D` need not be
/// reduced, but the fractional part of a mixed number must be proper.
pub fn parse(input: &str) -> Result<ExactRational, MixedNumberError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(MixedNumberError::Empty);
    }

    match input.split_once('\'') {
        Some((whole, fraction)) => {
            let whole = digits(whole)?;
            let (numer, denom) = parse_fraction(fraction)?
                .ok_or_else(|| MixedNumberError::NotDigits(fraction.to_owned()))?;
            if numer.is_zero() || numer >= denom {
                return Err(MixedNumberError::ImproperPart { numer, denom });
            }
            let fraction = ExactRational::new(numer, denom)
                .map_err(|_| MixedNumberError::ZeroDenominator)?;
            Ok(&ExactRational::from_integer(whole) + &fraction)
        }
        None => match parse_fraction(input)? {
            Some((numer, denom)) => {
                ExactRational::new(numer, denom).map_err(|_| MixedNumberError::ZeroDenominator)
            }
            None => Ok(ExactRational::from_integer(digits(input)?)),
        },
    }
}

/// Parses `N/D` into its parts, or returns `None` if there is no `/`.
fn parse_fraction(input: &str) -> Result<Option<(BigInt, BigInt)>, MixedNumberError> {
    let (numer, denom) = match input.split_once('/') {
        Some(parts) => parts,
        None => return Ok(None),
    };
    let (numer, denom) = (digits(numer)?, digits(denom)?);
    if denom.is_zero() {
        return Err(MixedNumberError::ZeroDenominator);
    }
    Ok(Some((numer, denom)))
}

fn digits(input: &str) -> Result<BigInt, MixedNumberError> {
    if input.is_empty() {
        return Err(MixedNumberError::Empty);
    }
    parse_digits(input).ok_or_else(|| MixedNumberError::NotDigits(input.to_owned()))
}
