//! Structural lowering errors
//!
//! These are raised when the tree is missing something the grammar
//! guarantees. Unsupported-but-valid syntax never ends up here; it goes to
//! the [`DiagnosticSink`](crate::DiagnosticSink) instead.

use hc_span::Span;
use hc_syntax::{SyntaxKind, SyntaxNode};
use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Fatal lowering error; no partial result is returned alongside it
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum LowerError {
    /// A child required by the grammar is absent
    #[error("`{parent}` has no `{expected}`")]
    #[diagnostic(
        code(lower::missing_node),
        help("the syntax tree is malformed; the front end must emit a `{expected}` here")
    )]
    MissingNode {
        /// Kind of the incomplete node
        parent: SyntaxKind,
        /// Kind that was expected as a direct child
        expected: SyntaxKind,
        /// Location of the incomplete node
        #[label("`{expected}` expected inside")]
        span: SourceSpan,
    },

    /// A lowering entry point received the wrong kind of node
    #[error("expected `{expected}`, found `{found}`")]
    #[diagnostic(code(lower::unexpected_node))]
    UnexpectedNode {
        /// Kind the entry point handles
        expected: SyntaxKind,
        /// Kind it was given
        found: SyntaxKind,
        /// Location of the node
        #[label("this is a `{found}`")]
        span: SourceSpan,
    },

    /// A co-declaration names no identifiers
    #[error("`{construct}` declares no names")]
    #[diagnostic(
        code(lower::empty_identifier_list),
        help("declarations must name at least one object")
    )]
    EmptyIdentifierList {
        /// Kind of the declaration
        construct: SyntaxKind,
        /// Location of the declaration
        #[label("no identifiers here")]
        span: SourceSpan,
    },

    /// A mode keyword outside `in`, `out`, `inout`, `buffer`, `linkage`
    #[error("invalid mode `{text}`")]
    #[diagnostic(code(lower::invalid_mode))]
    InvalidMode {
        /// Mode as written
        text: String,
        /// Location of the mode
        #[label("not a port or parameter mode")]
        span: SourceSpan,
    },
}

impl LowerError {
    pub(crate) fn missing(parent: &SyntaxNode, expected: SyntaxKind) -> Self {
        Self::MissingNode {
            parent: parent.kind.clone(),
            expected,
            span: source_span(parent.span),
        }
    }

    pub(crate) fn unexpected(node: &SyntaxNode, expected: SyntaxKind) -> Self {
        Self::UnexpectedNode {
            expected,
            found: node.kind.clone(),
            span: source_span(node.span),
        }
    }

    /// Returns the span where the error occurred
    #[must_use]
    pub fn span(&self) -> SourceSpan {
        match self {
            Self::MissingNode { span, .. }
            | Self::UnexpectedNode { span, .. }
            | Self::EmptyIdentifierList { span, .. }
            | Self::InvalidMode { span, .. } => *span,
        }
    }
}

/// Converts a byte span to the form miette labels use
pub fn source_span(span: Span) -> SourceSpan {
    (span.start as usize, span.len() as usize).into()
}
