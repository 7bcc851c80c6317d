//! Tokenizes the canonical text form of an arithmetic expression.

pub mod types;
pub use types::*;

#[macro_use]
mod errors;
pub(crate) use errors::ScanErrors;
use errors::*;

use crate::diagnostics::Diagnostic;
use crate::utils::{parse_digits, PeekIter};

use num_bigint::BigInt;
use num_traits::Zero;

/// Scans an expression into tokens. Tokens are whitespace-separated, except that parentheses
/// need no surrounding whitespace.
pub fn scan<T: Into<String>>(input: T) -> ScanResult {
    let mut scanner = Scanner::new(input);
    scanner.scan();
    ScanResult {
        tokens: scanner.output,
        diagnostics: scanner.diagnostics,
    }
}

struct Scanner {
    input: PeekIter<char>,
    pos: usize,
    output: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
}

impl Scanner {
    fn new<T: Into<String>>(input: T) -> Scanner {
        let chars: Vec<char> = input.into().chars().collect();

        Scanner {
            input: PeekIter::new(chars.into_iter()),
            pos: 0,
            output: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.input.peek().copied()
    }

    fn next(&mut self) -> Option<char> {
        let c = self.input.next();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn collect_digits(&mut self) -> String {
        let digits: String = self.input.collect_while(|c| c.is_digit(10));
        self.pos += digits.chars().count();
        digits
    }

    fn scan(&mut self) {
        while let Some(c) = self.peek() {
            match c {
                _ if c.is_whitespace() => {
                    self.next();
                }
                _ if c.is_digit(10) => self.scan_num(),
                _ => self.scan_symbol(),
            }
        }

        self.output
            .push(Token::new(TokenType::EOF, (self.pos, self.pos + 1)));
    }

    fn scan_symbol(&mut self) {
        use TokenType::*;
        let start = self.pos;
        let c = match self.next() {
            Some(c) => c,
            None => return,
        };
        let ty = match c {
            '+' => Plus,
            '-' => Minus,
            '×' => Mult,
            '÷' => Div,
            '(' => OpenParen,
            ')' => CloseParen,
            c => {
                let did_you_mean = match c {
                    '*' | 'x' | 'X' | '·' => Some(Mult),
                    '/' | ':' => Some(Div),
                    '[' | '{' => Some(OpenParen),
                    ']' | '}' => Some(CloseParen),
                    _ => None,
                };
                self.diagnostics
                    .push(InvalidToken!((start, self.pos), did_you_mean));
                Invalid(c.to_string())
            }
        };
        self.output.push(Token::new(ty, (start, self.pos)));
    }

    /// Scans an integer, or a fraction if the digits are directly followed by `/`.
    fn scan_num(&mut self) {
        let start = self.pos;
        let numer = self.collect_digits();
        if self.peek() != Some('/') {
            let tok = Token::new(TokenType::Integer(to_int(&numer)), (start, self.pos));
            self.output.push(tok);
            return;
        }

        self.next(); // eat slash
        let denom = self.collect_digits();
        let span = (start, self.pos);
        if denom.is_empty() {
            self.diagnostics.push(IncompleteFraction!(span));
            self.output
                .push(Token::new(TokenType::Invalid(format!("{}/", numer)), span));
            return;
        }

        let (numer_int, denom_int) = (to_int(&numer), to_int(&denom));
        if denom_int.is_zero() {
            self.diagnostics.push(ZeroDenominator!(span));
            self.output.push(Token::new(
                TokenType::Invalid(format!("{}/{}", numer, denom)),
                span,
            ));
            return;
        }
        self.output
            .push(Token::new(TokenType::Fraction(numer_int, denom_int), span));
    }
}

/// Converts a collected run of digits to an integer. Collected runs are never empty.
fn to_int(digits: &str) -> BigInt {
    parse_digits(digits).unwrap_or_default()
}
