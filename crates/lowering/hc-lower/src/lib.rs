//! Package lowering - converts VHDL package syntax to the HDL AST
//!
//! This crate handles:
//! - Package declarations and their nested packages
//! - Component declarations as module signatures
//! - Dispatch of package declarative items to declaration sub-parsers
//! - Reporting of unsupported syntax without aborting
//!
//! Lowering is a single depth-first pass. Every nesting level gets its own
//! [`ScopeBuilder`]; finished scopes are moved into their parent.

pub mod component;
pub mod context;
pub mod design_file;
pub mod diagnostics;
pub mod error;
pub mod item;
pub mod package;
pub mod parsers;

pub use component::lower_component;
pub use context::{LowerOptions, LoweringContext};
pub use design_file::lower_design_file;
pub use diagnostics::{DiagnosticLog, DiagnosticSink, Unsupported, UnsupportedConstruct};
pub use error::{LowerError, source_span};
pub use item::{DeclarativeItem, UnsupportedItem};
pub use package::{Accepted, ScopeBuilder, lower_package};
pub use parsers::{DeclarationParsers, ParseEnv, VhdlDeclParsers};
