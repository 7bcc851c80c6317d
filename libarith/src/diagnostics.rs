//! Diagnostics for arithmetic expression sources.
//!
//! Every diagnostic libarith emits has a stable code (`S0001`, `P0002`, ...) and a long-form
//! explanation, collected in [`Diagnostic::all_codes_with_explanations`] so a frontend can
//! explain a code on request.

use crate::common::Span;
use std::collections::HashMap;

/// Defines a set of diagnostic records, a registry of their codes, and for each record a
/// macro of the same name that builds its [`Diagnostic`].
macro_rules! define_errors {
    ($registry:ident; $($(#[doc = $doc:expr])+ $code:ident: $error:ident $gen_macro:tt)*) => {
        $(
            $(#[doc = $doc])+
            pub(crate) struct $error;

            impl crate::diagnostics::DiagnosticRecord for $error {
                const CODE: &'static str = stringify!($code);
                const EXPLANATION: &'static str = concat!($($doc, "\n"),+);
            }
        )*

        pub(crate) struct $registry;

        impl crate::diagnostics::DiagnosticRegistry for $registry {
            fn codes_with_explanations() -> Vec<(&'static str, &'static str)> {
                use crate::diagnostics::DiagnosticRecord;
                vec![$(($error::CODE, $error::EXPLANATION)),*]
            }
        }

        $(
            macro_rules! $error $gen_macro
        )*
    };
}

/// The kind of a diagnostic.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum DiagnosticKind {
    /// An error diagnostic. The source it points to cannot be evaluated.
    Error,
    /// A note diagnostic is a generic annotation with no specific connotation like `error`. It can
    /// be particularly useful as an associated diagnostic, for example in expanding on a primary
    /// error.
    Note,
    /// A help diagnostic instructs the user how their input can be changed to work correctly.
    Help,
}

/// A secondary diagnostic associated with a primary `Diagnostic`.
#[derive(Clone, PartialEq, Debug)]
pub struct AssociatedDiagnostic {
    pub kind: DiagnosticKind,
    pub span: Span,
    pub msg: String,
}

/// A diagnostic for an arithmetic expression.
#[derive(Clone, PartialEq, Debug)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub span: Span,
    pub title: String,
    pub code: Option<&'static str>,
    pub msg: Option<String>,
    pub associated_diagnostics: Vec<AssociatedDiagnostic>,
    pub unspanned_associated_diagnostics: Vec<AssociatedDiagnostic>,
}

impl Diagnostic {
    fn new<S, M, N>(kind: DiagnosticKind, span: S, title: M, code: &'static str, msg: N) -> Self
    where
        S: Into<Span>,
        M: Into<String>,
        N: Into<Option<String>>,
    {
        Diagnostic {
            kind,
            span: span.into(),
            title: title.into(),
            code: Some(code),
            msg: msg.into(),
            associated_diagnostics: Vec::with_capacity(2),
            unspanned_associated_diagnostics: Vec::with_capacity(2),
        }
    }

    /// Creates an error diagnostic at a span.
    pub(crate) fn span_err<S, M, N>(span: S, title: M, code: &'static str, msg: N) -> Diagnostic
    where
        S: Into<Span>,
        M: Into<String>,
        N: Into<Option<String>>,
    {
        Self::new(DiagnosticKind::Error, span, title, code, msg)
    }

    /// Adds a note to the diagnostic.
    pub(crate) fn with_note<M>(mut self, note: M) -> Diagnostic
    where
        M: Into<String>,
    {
        self.unspanned_associated_diagnostics
            .push(AssociatedDiagnostic {
                kind: DiagnosticKind::Note,
                span: self.span,
                msg: note.into(),
            });
        self
    }

    /// Adds a note to the diagnostic at a different span.
    pub(crate) fn with_spanned_note<S, M>(mut self, span: S, note: M) -> Diagnostic
    where
        S: Into<Span>,
        M: Into<String>,
    {
        self.associated_diagnostics.push(AssociatedDiagnostic {
            kind: DiagnosticKind::Note,
            span: span.into(),
            msg: note.into(),
        });
        self
    }

    /// Adds a help message to the diagnostic, possibly at a different span.
    pub(crate) fn with_spanned_help<S, M>(mut self, span: S, note: M) -> Diagnostic
    where
        S: Into<Span>,
        M: Into<String>,
    {
        self.associated_diagnostics.push(AssociatedDiagnostic {
            kind: DiagnosticKind::Help,
            span: span.into(),
            msg: note.into(),
        });
        self
    }

    /// Returns all diagnostic codes libarith can emit, mapped to their explanations.
    pub fn all_codes_with_explanations() -> HashMap<&'static str, &'static str> {
        let mut codes = HashMap::new();
        codes.extend(crate::scanner::ScanErrors::codes_with_explanations());
        codes.extend(crate::parser::ParseErrors::codes_with_explanations());
        codes.extend(crate::evaluator::EvalErrors::codes_with_explanations());
        codes
    }
}

/// A diagnostic with a stable code and a long-form explanation.
pub trait DiagnosticRecord {
    /// Diagnostic code, for example "S0001".
    const CODE: &'static str;
    /// Long-form explanation of the diagnostic.
    const EXPLANATION: &'static str;
}

/// A collection of diagnostic records.
pub trait DiagnosticRegistry {
    /// Returns the codes and explanations of all records in the registry.
    fn codes_with_explanations() -> Vec<(&'static str, &'static str)>;
}
