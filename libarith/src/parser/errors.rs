//! Diagnostic errors produced by the parser.

define_errors! {
    ParseErrors;

    ///This error fires on tokens that are not connected to the rest of an expression.
    ///
    ///For example, in the expression
    ///
    ///```text
    ///1 + 2 3 + 4
    ///      ^^^^^- offending tokens
    ///```
    ///
    ///`3 + 4` is not connected to `1 + 2`, and there is no way to know how the two are intended
    ///to be combined. Most likely an operator is missing.
    P0001: ExtraTokens {
        ($span:expr) => {{
            use crate::diagnostics::*;

            Diagnostic::span_err(
                $span,
                "Unexpected extra tokens",
                ExtraTokens::CODE,
                "not connected to the expression".to_string(),
            )
        }}
    }

    ///This error fires on token sequences that are expected to form an expression, but do not.
    ///
    ///The following are examples of expressions that emit this error:
    ///
    ///```text
    ///1 + +
    ///    ^- offending token
    ///```
    ///
    ///```text
    ///1 ÷ )
    ///    ^- offending token
    ///```
    ///
    ///```text
    ///1 ÷
    ///   ^- offending token: end of file
    ///```
    ///
    ///Every operator needs a number or a parenthesized expression on both of its sides.
    P0002: ExpectedExpr {
        ($span:expr, $found:expr) => {{
            use crate::diagnostics::*;

            Diagnostic::span_err(
                $span,
                format!("Expected an expression, found {}", $found),
                ExpectedExpr::CODE,
                "expected an expression".to_string(),
            )
        }}
    }

    ///Every opening parenthesis must be closed by a matching `)`:
    ///
    ///```text
    ///(1 + 2 × 3
    ///^- this parenthesis is never closed
    ///```
    P0003: UnclosedDelimiter {
        ($span:expr, $found:expr, $open_span:expr) => {{
            use crate::diagnostics::*;

            Diagnostic::span_err(
                $span,
                format!("Expected a closing `)`, found {}", $found),
                UnclosedDelimiter::CODE,
                "expected `)`".to_string(),
            )
            .with_spanned_note($open_span, "opening `(` here")
        }}
    }

    ///Every closing parenthesis must have an opening `(` earlier in the expression:
    ///
    ///```text
    ///1 + 2 )
    ///      ^ unmatched closing delimiter
    ///```
    P0004: UnmatchedClosingDelimiter {
        ($span:expr) => {{
            use crate::diagnostics::*;

            Diagnostic::span_err(
                $span,
                "Unmatched closing delimiter `)`",
                UnmatchedClosingDelimiter::CODE,
                "has no matching opener `(`".to_string(),
            )
        }}
    }

    ///This error fires on expressions with more than 100 operators and opening parentheses
    ///combined, such as
    ///
    ///```text
    ///1 + 1 + 1 + ... + 1
    ///```
    ///
    ///with over a hundred additions. Exercises never come close to this size, so an
    ///expression this long is refused before it is parsed.
    P0005: TooComplex {
        ($span:expr, $limit:expr) => {{
            use crate::diagnostics::*;

            Diagnostic::span_err(
                $span,
                format!("Expression has more than {} operations", $limit),
                TooComplex::CODE,
                "operations past the limit start here".to_string(),
            )
        }}
    }
}
