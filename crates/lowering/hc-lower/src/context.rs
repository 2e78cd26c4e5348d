//! State shared by every nesting level of one lowering run

use crate::diagnostics::DiagnosticSink;
use crate::parsers::{DeclarationParsers, ParseEnv};
use hc_intern::Interner;
use hc_span::{FileId, FileSpan};
use hc_syntax::SyntaxNode;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Lowering policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LowerOptions {
    /// Only extract names: skip package bodies and component clauses
    pub hierarchy_only: bool,
}

/// Context for lowering syntax to AST
///
/// Holds the collaborators only. The declarations being built live in the
/// per-level [`ScopeBuilder`](crate::ScopeBuilder), never here.
pub struct LoweringContext<'a> {
    /// String interner
    pub interner: Interner,
    /// File ID for creating spans
    file_id: FileId,
    options: LowerOptions,
    parsers: &'a dyn DeclarationParsers,
    sink: &'a mut dyn DiagnosticSink,
}

impl<'a> LoweringContext<'a> {
    /// Creates a context with a fresh interner, file 0 and default options
    pub fn new(parsers: &'a dyn DeclarationParsers, sink: &'a mut dyn DiagnosticSink) -> Self {
        Self {
            interner: Interner::new(),
            file_id: FileId(0),
            options: LowerOptions::default(),
            parsers,
            sink,
        }
    }

    /// Share an existing interner
    #[must_use]
    pub fn with_interner(mut self, interner: Interner) -> Self {
        self.interner = interner;
        self
    }

    #[must_use]
    pub fn with_file(mut self, file_id: FileId) -> Self {
        self.file_id = file_id;
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: LowerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn file_id(&self) -> FileId {
        self.file_id
    }

    pub fn options(&self) -> LowerOptions {
        self.options
    }

    pub fn hierarchy_only(&self) -> bool {
        self.options.hierarchy_only
    }

    /// Create file span from syntax node
    pub fn file_span(&self, node: &SyntaxNode) -> FileSpan {
        FileSpan::new(self.file_id, node.span)
    }

    /// View handed to the declaration sub-parsers
    pub fn env(&self) -> ParseEnv<'_> {
        ParseEnv::new(&self.interner, self.file_id)
    }

    pub(crate) fn parsers(&self) -> &'a dyn DeclarationParsers {
        self.parsers
    }

    /// Report `node` as unsupported; the caller skips it
    pub(crate) fn unsupported(&mut self, label: &str, node: &SyntaxNode) {
        trace!(label, kind = %node.kind, "skipping");
        self.sink.report(label, node);
    }
}
