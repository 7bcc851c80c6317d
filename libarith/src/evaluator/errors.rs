//! Diagnostic errors produced by the evaluator.

define_errors! {
    EvalErrors;

    ///Division by zero has no value, so an expression that divides by zero cannot be evaluated.
    ///
    ///The divisor may be zero literally, as in `1 ÷ 0`, or only once evaluated:
    ///
    ///```text
    ///1 ÷ (2 - 2)
    ///    ^^^^^^^- evaluates to zero
    ///```
    ///
    ///Generated exercises never divide by zero; an expression doing so is discarded before it
    ///is written out.
    E0001: DivisionByZero {
        ($span:expr) => {{
            use crate::diagnostics::*;

            Diagnostic::span_err(
                $span,
                "Division by zero",
                DivisionByZero::CODE,
                "this divisor evaluates to zero".to_string(),
            )
        }}
    }
}
