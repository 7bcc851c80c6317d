//! Emit strategies for the libarith grammar.

use crate::grammar::*;

use core::fmt;

/// The format in which an expression should be emitted.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum EmitFormat {
    /// Canonical form, as written to exercise files.
    /// For example, `(1+2)×3` is output as `(1 + 2) × 3`.
    Pretty,
    /// S-expression form, making the evaluation order explicit.
    /// For example, `1 + 2 × 3` is output as `(+ 1 (× 2 3))`.
    SExpression,
    /// Internal debug form.
    /// NB: this form is not stable, and no assumptions should be made about it.
    Debug,
}

impl From<&str> for EmitFormat {
    fn from(form: &str) -> Self {
        match form {
            "s-expression" => EmitFormat::SExpression,
            "debug" => EmitFormat::Debug,
            _ => EmitFormat::Pretty,
        }
    }
}

/// Implements the emission of a type in an [EmitFormat][EmitFormat].
pub trait Emit
where
    // These are trivially implementable using `emit_pretty` and `emit_debug`. The easiest way to
    // do this is with the `fmt_emit_impl` macro.
    Self: fmt::Display + fmt::Debug,
{
    /// Emit `self` with the given [EmitFormat][EmitFormat].
    fn emit(&self, form: EmitFormat) -> String {
        match form {
            EmitFormat::Pretty => self.emit_pretty(),
            EmitFormat::SExpression => self.emit_s_expression(),
            EmitFormat::Debug => self.emit_debug(),
        }
    }

    /// Emit `self` with the [pretty emit format][EmitFormat::Pretty]
    fn emit_pretty(&self) -> String;

    /// Emit `self` with the [debug emit format][EmitFormat::Debug]
    fn emit_debug(&self) -> String {
        format!("{:#?}", self)
    }

    /// Emit `self` with the [s_expression emit format][EmitFormat::SExpression]
    fn emit_s_expression(&self) -> String;
}

/// Implements `core::fmt::Display` for a type implementing `Emit`.
macro_rules! fmt_emit_impl {
    ($S:path) => {
        impl core::fmt::Display for $S {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.emit_pretty())
            }
        }
    };
}

fmt_emit_impl!(Expr);
impl Emit for Expr {
    fn emit_pretty(&self) -> String {
        match &self.kind {
            ExprKind::Const(operand) => operand.to_string(),
            ExprKind::BinaryExpr(binary_expr) => binary_expr.emit_pretty(),
            ExprKind::Parend(expr) => format!("({})", expr.emit_pretty()),
        }
    }

    fn emit_s_expression(&self) -> String {
        match &self.kind {
            ExprKind::Const(operand) => operand.to_string(),
            ExprKind::BinaryExpr(binary_expr) => binary_expr.emit_s_expression(),
            ExprKind::Parend(expr) => expr.emit_s_expression(),
        }
    }
}

fmt_emit_impl!(BinaryExpr);
impl Emit for BinaryExpr {
    fn emit_pretty(&self) -> String {
        format!(
            "{} {} {}",
            self.lhs.emit_pretty(),
            self.op,
            self.rhs.emit_pretty()
        )
    }

    fn emit_s_expression(&self) -> String {
        format!(
            "({} {} {})",
            self.op,
            self.lhs.emit_s_expression(),
            self.rhs.emit_s_expression()
        )
    }
}

#[cfg(test)]
mod tests {
    macro_rules! emit_tests {
        ($($name:ident: $program:expr => $pretty:expr, $s_expr:expr)*) => {
        $(
            #[test]
            fn $name() {
                use crate::emit::{Emit, EmitFormat};
                use crate::parser::parse_expression;
                use crate::scanner::scan;

                let (parsed, diagnostics) = parse_expression(scan($program).tokens);
                assert!(diagnostics.is_empty());
                let parsed = parsed.unwrap();
                assert_eq!(parsed.emit(EmitFormat::Pretty), $pretty);
                assert_eq!(parsed.to_string(), $pretty);
                assert_eq!(parsed.emit(EmitFormat::SExpression), $s_expr);
            }
        )*
        }
    }

    emit_tests! {
        integer:          "1"                   => "1", "1"
        fraction:         "3/4"                 => "3/4", "3/4"
        addition:         "1+2"                 => "1 + 2", "(+ 1 2)"
        precedence:       "1 + 2 × 3"           => "1 + 2 × 3", "(+ 1 (× 2 3))"
        left_assoc:       "8 - 3 - 1"           => "8 - 3 - 1", "(- (- 8 3) 1)"
        parenthesized:    "( 1 + 2 ) × 3"       => "(1 + 2) × 3", "(× (+ 1 2) 3)"
        middle_group:     "1 ÷ (1/2 + 3) - 0"   => "1 ÷ (1/2 + 3) - 0", "(- (÷ 1 (+ 1/2 3)) 0)"
    }

    #[test]
    fn emit_format_from_str() {
        use crate::emit::EmitFormat;

        assert_eq!(EmitFormat::from("pretty"), EmitFormat::Pretty);
        assert_eq!(EmitFormat::from("s-expression"), EmitFormat::SExpression);
        assert_eq!(EmitFormat::from("debug"), EmitFormat::Debug);
    }
}
