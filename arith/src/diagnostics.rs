//! Rendering of [libarith diagnostics][libarith::diagnostics] for the terminal.

use libarith::diagnostics::{Diagnostic, DiagnosticKind};

use annotate_snippets::{
    display_list::{DisplayList, FormatOptions},
    snippet::{Annotation, AnnotationType, Slice, Snippet, SourceAnnotation},
};

/// Renders diagnostics against the expression they were emitted for.
pub struct DiagnosticEmitter<'a> {
    /// Where the expression came from, like `Exercises.txt:3`. [None](Option::None) for
    /// expressions given on the command line.
    origin: Option<&'a str>,
    /// The expression, padded so that diagnostics at its end have a character to point to.
    source: String,
    color: bool,
}

impl<'a> DiagnosticEmitter<'a> {
    pub fn new(origin: Option<&'a str>, expression: &str, color: bool) -> Self {
        Self {
            origin,
            source: format!("{} ", expression),
            color,
        }
    }

    /// Renders all diagnostics, separated by blank lines.
    pub fn emit(&self, diagnostics: &[Diagnostic]) -> String {
        diagnostics
            .iter()
            .map(|diagnostic| self.emit_one(diagnostic))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn emit_one(&self, diagnostic: &Diagnostic) -> String {
        let main_type = annotation_type(diagnostic.kind);
        let label = diagnostic.msg.clone().unwrap_or_default();

        let mut annotations = vec![SourceAnnotation {
            label: &label,
            annotation_type: main_type,
            range: diagnostic.span.into(),
        }];
        annotations.extend(diagnostic.associated_diagnostics.iter().map(|associated| {
            SourceAnnotation {
                label: &associated.msg,
                annotation_type: annotation_type(associated.kind),
                range: associated.span.into(),
            }
        }));
        let footer = diagnostic
            .unspanned_associated_diagnostics
            .iter()
            .map(|associated| Annotation {
                label: Some(&associated.msg),
                id: None,
                annotation_type: annotation_type(associated.kind),
            })
            .collect();

        let snippet = Snippet {
            title: Some(Annotation {
                label: Some(&diagnostic.title),
                id: diagnostic.code,
                annotation_type: main_type,
            }),
            footer,
            slices: vec![Slice {
                source: &self.source,
                line_start: 1,
                origin: self.origin,
                fold: true,
                annotations,
            }],
            opt: FormatOptions {
                color: self.color,
                ..Default::default()
            },
        };
        format!("{}\n", DisplayList::from(snippet))
    }
}

fn annotation_type(kind: DiagnosticKind) -> AnnotationType {
    match kind {
        DiagnosticKind::Error => AnnotationType::Error,
        DiagnosticKind::Note => AnnotationType::Note,
        DiagnosticKind::Help => AnnotationType::Help,
    }
}
