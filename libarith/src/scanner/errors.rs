//! Diagnostic errors produced by the scanner.

define_errors! {
    ScanErrors;

    ///Tokens in an arithmetic expression must be one of
    ///
    ///  - a natural number, like `12`
    ///  - a fraction, like `3/4`
    ///  - an operator: `+`, `-`, `×`, or `÷`
    ///  - a parenthesis: `(` or `)`
    ///
    ///This error is fired on any other character. Note that multiplication and division are
    ///written with the `×` and `÷` glyphs; the ASCII look-alikes `*`, `x`, and `/` are not
    ///operators. A `/` only appears inside a fraction literal.
    S0001: InvalidToken {
        ($span:expr, $did_you_mean:expr) => {{
            use crate::diagnostics::*;

            let mut diag = Diagnostic::span_err(
                $span,
                "Invalid token",
                InvalidToken::CODE,
                None,
            )
            .with_note("token must be a number, an operator, or a parenthesis");
            if let Some(did_you_mean) = $did_you_mean {
                diag = diag.with_spanned_help($span, format!(r#"did you mean "{}"?"#, did_you_mean));
            }
            diag
        }}
    }

    ///A fraction literal is written as a numerator and a denominator separated by `/`, with no
    ///whitespace in between. This error is fired when the denominator is missing:
    ///
    ///```text
    ///1/ + 2
    ///^^- missing denominator
    ///```
    ///
    ///```text
    ///1/ 2
    ///^^- the denominator must follow the `/` directly
    ///```
    ///
    ///To divide two numbers, use the `÷` operator, as in `1 ÷ 2`.
    S0002: IncompleteFraction {
        ($span:expr) => {{
            use crate::diagnostics::*;

            Diagnostic::span_err(
                $span,
                "Incomplete fraction",
                IncompleteFraction::CODE,
                "expected a denominator after `/`".to_string(),
            )
        }}
    }

    ///A fraction literal cannot have a denominator of zero, because its value would be
    ///undefined:
    ///
    ///```text
    ///3/0
    ///^^^- zero denominator
    ///```
    S0003: ZeroDenominator {
        ($span:expr) => {{
            use crate::diagnostics::*;

            Diagnostic::span_err(
                $span,
                "Fraction with a zero denominator",
                ZeroDenominator::CODE,
                "denominator is zero".to_string(),
            )
        }}
    }
}
