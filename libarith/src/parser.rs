//! Parses scanned tokens into an [expression](crate::grammar::Expr).
//!
//! The grammar is the usual two-level precedence grammar, left associative within a level:
//!
//! ```text
//! expr := term (('+' | '-') term)*
//! term := atom (('×' | '÷') atom)*
//! atom := integer | fraction | '(' expr ')'
//! ```

#[macro_use]
mod errors;
pub(crate) use errors::ParseErrors;
use errors::*;

use crate::common::Span;
use crate::diagnostics::Diagnostic;
use crate::grammar::*;
use crate::scanner::types::{Token, TokenType};
use crate::utils::PeekIter;

use core::convert::TryFrom;

/// Parses a token stream into an expression.
///
/// The expression is `None` when the tokens do not form one. Any diagnostics, including those
/// for trailing tokens after an otherwise complete expression, mean the input is malformed.
pub fn parse_expression(input: Vec<Token>) -> (Option<Expr>, Vec<Diagnostic>) {
    if let Some(span) = excess_operations(&input) {
        return (None, vec![TooComplex!(span, MAX_OPERATIONS)]);
    }
    let mut parser = ExpressionParser::new(input);
    let parsed = parser.parse();
    (parsed, parser.diagnostics)
}

/// The most operators and opening parentheses an expression may contain. Parsing and evaluation
/// recurse once per operation, so this bounds their depth.
pub const MAX_OPERATIONS: usize = 100;

/// Returns the span from the first operation past [`MAX_OPERATIONS`] to the end of the input, if
/// there is one.
fn excess_operations(tokens: &[Token]) -> Option<Span> {
    let first = tokens
        .iter()
        .filter(|tok| {
            tok.ty == TokenType::OpenParen || BinaryOperator::try_from(*tok).is_ok()
        })
        .nth(MAX_OPERATIONS)?;
    let last = tokens
        .iter()
        .rev()
        .find(|tok| tok.ty != TokenType::EOF)
        .unwrap_or(first);
    Some(first.span.to(last.span))
}

struct ExpressionParser {
    input: PeekIter<Token>,
    diagnostics: Vec<Diagnostic>,
}

impl ExpressionParser {
    fn new(input: Vec<Token>) -> Self {
        Self {
            input: PeekIter::new(input.into_iter()),
            diagnostics: vec![],
        }
    }

    /// Returns the next token without consuming it. The scanner guarantees the stream ends in
    /// EOF; past it, a synthetic EOF is returned.
    fn peek(&mut self) -> Token {
        match self.input.peek() {
            Some(tok) => tok.clone(),
            None => Token::new(TokenType::EOF, Span::default()),
        }
    }

    fn parse(&mut self) -> Option<Expr> {
        let parsed = self.expr()?;
        self.check_done();
        Some(parsed)
    }

    /// Reports every token left after a complete expression.
    fn check_done(&mut self) {
        let mut extra: Option<Span> = None;
        loop {
            let tok = self.peek();
            match tok.ty {
                TokenType::EOF => break,
                TokenType::CloseParen => {
                    self.diagnostics
                        .push(UnmatchedClosingDelimiter!(tok.span));
                }
                _ => {
                    extra = Some(match extra {
                        Some(span) => span.to(tok.span),
                        None => tok.span,
                    });
                }
            }
            self.input.next();
        }
        if let Some(span) = extra {
            self.diagnostics.push(ExtraTokens!(span));
        }
    }

    /// Parses a left-associative chain of `operand` separated by operators in `level`.
    fn chain(
        &mut self,
        level: &[BinaryOperator],
        operand: fn(&mut Self) -> Option<Expr>,
    ) -> Option<Expr> {
        let mut lhs = operand(self)?;
        loop {
            let op = match BinaryOperator::try_from(&self.peek()) {
                Ok(op) if level.contains(&op) => op,
                _ => break,
            };
            self.input.next();
            let rhs = operand(self)?;
            lhs = Expr::binary(op, lhs, rhs);
        }
        Some(lhs)
    }

    fn expr(&mut self) -> Option<Expr> {
        self.chain(&[BinaryOperator::Plus, BinaryOperator::Minus], Self::term)
    }

    fn term(&mut self) -> Option<Expr> {
        self.chain(&[BinaryOperator::Mult, BinaryOperator::Div], Self::atom)
    }

    fn atom(&mut self) -> Option<Expr> {
        let tok = self.peek();
        let kind = match tok.ty {
            TokenType::Integer(n) => ExprKind::Const(Operand::Integer(n)),
            TokenType::Fraction(numer, denom) => ExprKind::Const(Operand::Fraction { numer, denom }),
            TokenType::OpenParen => return self.parend(tok.span),
            ty => {
                self.diagnostics.push(ExpectedExpr!(tok.span, ty));
                return None;
            }
        };
        self.input.next();
        Some(Expr::new(kind, tok.span))
    }

    fn parend(&mut self, open_span: Span) -> Option<Expr> {
        self.input.next(); // eat open paren
        let inner = self.expr()?;
        let close = self.peek();
        match close.ty {
            TokenType::CloseParen => {
                self.input.next();
                Some(Expr::new(
                    ExprKind::Parend(Box::new(inner)),
                    open_span.to(close.span),
                ))
            }
            found => {
                self.diagnostics
                    .push(UnclosedDelimiter!(close.span, found, open_span));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    macro_rules! parser_tests {
        ($($name:ident: $program:expr => $s_expr:expr)*) => {
        $(
            #[test]
            fn $name() {
                use crate::emit::Emit;
                use crate::parser::parse_expression;
                use crate::scanner::scan;

                let (parsed, diagnostics) = parse_expression(scan($program).tokens);
                assert!(diagnostics.is_empty(), "{:?}", diagnostics);
                assert_eq!(parsed.unwrap().emit_s_expression(), $s_expr);
            }
        )*
        }
    }

    macro_rules! parser_error_tests {
        ($($name:ident: $program:expr => [$($code:expr),*])*) => {
        $(
            #[test]
            fn $name() {
                use crate::parser::parse_expression;
                use crate::scanner::scan;

                let (_, diagnostics) = parse_expression(scan($program).tokens);
                let codes = diagnostics
                    .into_iter()
                    .map(|diag| diag.code.unwrap_or_default())
                    .collect::<Vec<_>>();
                let expected: Vec<&str> = vec![$($code),*];
                assert_eq!(codes, expected);
            }
        )*
        }
    }

    mod parse {
        parser_tests! {
            integer:                 "5"                     => "5"
            fraction:                "5/7"                   => "5/7"
            addition:                "5 + 3"                 => "(+ 5 3)"
            mult_before_add:         "1 + 2 × 3"             => "(+ 1 (× 2 3))"
            div_before_sub:          "6 - 4 ÷ 2"             => "(- 6 (÷ 4 2))"
            left_assoc_add_sub:      "8 - 3 + 1"             => "(+ (- 8 3) 1)"
            left_assoc_mult_div:     "8 ÷ 4 × 2"             => "(× (÷ 8 4) 2)"
            first_pair_grouped:      "(1 + 2) × 3"           => "(× (+ 1 2) 3)"
            middle_pair_grouped:     "1 × (2 + 3) - 4"       => "(- (× 1 (+ 2 3)) 4)"
            first_three_grouped:     "(1 + 2 × 3) ÷ 7"       => "(÷ (+ 1 (× 2 3)) 7)"
            nested_parens:           "((1))"                 => "1"
            no_spaces_around_parens: "(1/2+1/3)×6"           => "(× (+ 1/2 1/3) 6)"
        }
    }

    mod parse_errors {
        parser_error_tests! {
            empty:                   ""                      => ["P0002"]
            dangling_operator:       "1 +"                   => ["P0002"]
            double_operator:         "1 + + 2"               => ["P0002"]
            leading_operator:        "× 2"                   => ["P0002"]
            missing_operator:        "1 + 2 3 + 4"           => ["P0001"]
            unclosed:                "(1 + 2"                => ["P0003"]
            unmatched_close:         "1 + 2)"                => ["P0004"]
            unmatched_then_extra:    "1) 2"                  => ["P0004", "P0001"]
            empty_parens:            "()"                    => ["P0002"]
        }
    }

    #[test]
    fn long_chains_are_refused_before_parsing() {
        use super::MAX_OPERATIONS;
        use crate::parser::parse_expression;
        use crate::scanner::scan;

        let at_limit = format!("{}1", "1 + ".repeat(MAX_OPERATIONS));
        let (parsed, diagnostics) = parse_expression(scan(at_limit).tokens);
        assert!(parsed.is_some());
        assert!(diagnostics.is_empty(), "{:?}", diagnostics);

        for program in &[
            format!("{}1", "1 + ".repeat(MAX_OPERATIONS + 1)),
            format!("{}1", "1 + ".repeat(20_000)),
            format!("{}1{}", "(".repeat(20_000), ")".repeat(20_000)),
        ] {
            let (parsed, diagnostics) = parse_expression(scan(program.as_str()).tokens);
            assert!(parsed.is_none());
            let codes = diagnostics
                .iter()
                .map(|diag| diag.code.unwrap_or_default())
                .collect::<Vec<_>>();
            assert_eq!(codes, vec!["P0005"]);
        }
    }

    #[test]
    fn spans_cover_parenthesized_groups() {
        use crate::common::Span;
        use crate::grammar::ExprKind;
        use crate::parser::parse_expression;
        use crate::scanner::scan;

        let (parsed, _) = parse_expression(scan("(1 + 2) × 3").tokens);
        let parsed = parsed.unwrap();
        assert_eq!(parsed.span, Span::from(0..11));
        match parsed.kind {
            ExprKind::BinaryExpr(binary) => assert_eq!(binary.lhs.span, Span::from(0..7)),
            _ => panic!("expected a binary expression"),
        }
    }
}
