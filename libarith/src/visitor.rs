use crate::common::Span;
use crate::grammar::*;

/// An expression visitor.
/// This visitor borrows the expressions it visits.
pub trait Visitor<'a> {
    type Result;

    fn visit_expr(&mut self, item: &'a Expr) -> Self::Result {
        match &item.kind {
            ExprKind::Const(operand) => self.visit_const(operand, item.span),
            ExprKind::BinaryExpr(binary_expr) => self.visit_binary_expr(binary_expr, item.span),
            ExprKind::Parend(expr) => self.visit_parend(expr, item.span),
        }
    }

    fn visit_const(&mut self, item: &'a Operand, span: Span) -> Self::Result;
    fn visit_binary_expr(&mut self, item: &'a BinaryExpr, span: Span) -> Self::Result;

    fn visit_parend(&mut self, item: &'a Expr, _span: Span) -> Self::Result {
        self.visit_expr(item)
    }
}
