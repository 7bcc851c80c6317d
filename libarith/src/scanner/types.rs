//! Definitions of types used in the libarith scanner.

use crate::common::Span;
use crate::diagnostics::Diagnostic;

use core::fmt;
use num_bigint::BigInt;

/// The type of a [Token][Token].
#[derive(PartialEq, Clone, Debug)]
pub enum TokenType {
    /// A natural number literal, like `12`.
    Integer(BigInt),

    /// A fraction literal, like `3/4`. The denominator is never zero.
    Fraction(BigInt, BigInt),

    /// + symbol
    Plus,

    /// - symbol
    Minus,

    /// × symbol
    Mult,

    /// ÷ symbol
    Div,

    /// ( symbol
    OpenParen,

    /// ) symbol
    CloseParen,

    /// An invalid token.
    Invalid(String),

    /// End of file.
    EOF,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use TokenType::*;
        match self {
            Integer(num) => write!(f, "{}", num),
            Fraction(numer, denom) => write!(f, "{}/{}", numer, denom),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Mult => write!(f, "×"),
            Div => write!(f, "÷"),
            OpenParen => write!(f, "("),
            CloseParen => write!(f, ")"),
            Invalid(s) => write!(f, "{}", s),
            EOF => write!(f, "end of file"),
        }
    }
}

/// Describes a token in an arithmetic expression.
#[derive(PartialEq, Clone, Debug)]
pub struct Token {
    /// The type of the token.
    pub ty: TokenType,
    /// The source span of the token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    pub fn new<Sp>(ty: TokenType, span: Sp) -> Self
    where
        Sp: Into<Span>,
    {
        Self {
            ty,
            span: span.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ty)
    }
}

/// The result of scanning an expression.
pub struct ScanResult {
    /// Scanned tokens, always ending with [EOF](TokenType::EOF).
    pub tokens: Vec<Token>,
    /// Diagnostics for malformed tokens.
    pub diagnostics: Vec<Diagnostic>,
}
