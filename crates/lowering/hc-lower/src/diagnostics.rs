//! Reporting of syntax the lowering does not handle yet
//!
//! Unsupported constructs are expected: they are recorded and skipped, and
//! lowering carries on with the next item.

use crate::error::source_span;
use hc_span::Span;
use hc_syntax::{SyntaxKind, SyntaxNode};
use miette::{Diagnostic, SourceSpan};
use thiserror::Error;
use tracing::debug;

/// Receives one event per skipped construct
///
/// Implementations must not fail and must not stop the traversal.
pub trait DiagnosticSink {
    /// Records that `node` was skipped; `label` names the handler that gave up
    fn report(&mut self, label: &str, node: &SyntaxNode);
}

/// One skipped construct
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unsupported {
    /// Handler that gave up on the node
    pub label: String,
    /// Kind of the skipped node
    pub kind: SyntaxKind,
    /// Location of the skipped node
    pub span: Span,
}

impl Unsupported {
    /// Converts the event into a renderable warning
    pub fn to_diagnostic(&self) -> UnsupportedConstruct {
        UnsupportedConstruct {
            kind: self.kind.clone(),
            label: self.label.clone(),
            span: source_span(self.span),
        }
    }
}

/// Renderable form of an [`Unsupported`] event
#[derive(Error, Debug, Clone, Diagnostic)]
#[error("`{kind}` is not supported and was skipped")]
#[diagnostic(
    code(lower::unsupported),
    severity(Warning),
    help("reported by {label}")
)]
pub struct UnsupportedConstruct {
    /// Kind of the skipped node
    pub kind: SyntaxKind,
    /// Handler that gave up on the node
    pub label: String,
    /// Location of the skipped node
    #[label("skipped")]
    pub span: SourceSpan,
}

/// Sink that keeps every event in encounter order
#[derive(Debug, Default)]
pub struct DiagnosticLog {
    entries: Vec<Unsupported>,
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far, oldest first
    pub fn entries(&self) -> &[Unsupported] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of events whose node had the given kind
    pub fn count_kind(&self, kind: &SyntaxKind) -> usize {
        self.entries.iter().filter(|entry| &entry.kind == kind).count()
    }

    pub fn into_entries(self) -> Vec<Unsupported> {
        self.entries
    }
}

impl DiagnosticSink for DiagnosticLog {
    fn report(&mut self, label: &str, node: &SyntaxNode) {
        debug!(label, kind = %node.kind, span = %node.span, "unsupported construct skipped");
        self.entries.push(Unsupported {
            label: label.to_string(),
            kind: node.kind.clone(),
            span: node.span,
        });
    }
}
