use num_bigint::BigInt;

/// Parses a non-empty run of ASCII decimal digits.
///
/// Unlike `BigInt`'s own parsing, signs and `_` separators are rejected.
pub fn parse_digits(input: &str) -> Option<BigInt> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    BigInt::parse_bytes(input.as_bytes(), 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_runs() {
        assert_eq!(parse_digits("0"), Some(BigInt::from(0)));
        assert_eq!(parse_digits("007"), Some(BigInt::from(7)));
        assert_eq!(
            parse_digits("123456789012345678901234567890"),
            "123456789012345678901234567890".parse().ok()
        );
    }

    #[test]
    fn rejects_everything_else() {
        for input in &["", "+1", "-1", "1_000", "1.5", " 1", "١"] {
            assert_eq!(parse_digits(input), None, "{:?}", input);
        }
    }
}
