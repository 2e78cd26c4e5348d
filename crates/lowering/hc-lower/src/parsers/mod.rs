//! Declaration sub-parsers
//!
//! The scope builder hands each recognized declaration to one of these and
//! takes ownership of what comes back. Sub-parsers never call back into the
//! scope builder and keep no reference to the node.

mod interface;
mod object;
mod subprogram;
mod types;

use crate::error::{LowerError, source_span};
use hc_ast::{Expr, IdDef, ObjectKind, SubprogramDecl, SubtypeDecl, TypeDecl};
use hc_intern::{Interner, Symbol};
use hc_span::{FileId, FileSpan};
use hc_syntax::{SyntaxKind, SyntaxNode};

/// One parser per declaration kind the scope builder supports
pub trait DeclarationParsers {
    /// `subprogram_declaration`
    fn subprogram_declaration(
        &self,
        env: &ParseEnv<'_>,
        node: &SyntaxNode,
    ) -> Result<SubprogramDecl, LowerError>;

    /// `type_declaration`
    fn type_declaration(&self, env: &ParseEnv<'_>, node: &SyntaxNode)
    -> Result<TypeDecl, LowerError>;

    /// `subtype_declaration`
    fn subtype_declaration(
        &self,
        env: &ParseEnv<'_>,
        node: &SyntaxNode,
    ) -> Result<SubtypeDecl, LowerError>;

    /// `constant_declaration`, one entry per declared name
    fn constant_declaration(
        &self,
        env: &ParseEnv<'_>,
        node: &SyntaxNode,
    ) -> Result<Vec<IdDef>, LowerError>;

    /// `signal_declaration`, one entry per declared name
    fn signal_declaration(
        &self,
        env: &ParseEnv<'_>,
        node: &SyntaxNode,
    ) -> Result<Vec<IdDef>, LowerError>;

    /// `variable_declaration`, one entry per declared name
    fn variable_declaration(
        &self,
        env: &ParseEnv<'_>,
        node: &SyntaxNode,
    ) -> Result<Vec<IdDef>, LowerError>;

    /// Appends the generics of a `generic_clause` in declaration order
    ///
    /// Interface declarations that are not objects are returned unlowered.
    fn generic_clause<'n>(
        &self,
        env: &ParseEnv<'_>,
        node: &'n SyntaxNode,
        generics: &mut Vec<IdDef>,
    ) -> Result<Vec<&'n SyntaxNode>, LowerError>;

    /// Appends the ports of a `port_clause` in declaration order
    fn port_clause<'n>(
        &self,
        env: &ParseEnv<'_>,
        node: &'n SyntaxNode,
        ports: &mut Vec<IdDef>,
    ) -> Result<Vec<&'n SyntaxNode>, LowerError>;
}

/// Structural sub-parsers reading the generic VHDL tree
#[derive(Debug, Default, Clone, Copy)]
pub struct VhdlDeclParsers;

impl DeclarationParsers for VhdlDeclParsers {
    fn subprogram_declaration(
        &self,
        env: &ParseEnv<'_>,
        node: &SyntaxNode,
    ) -> Result<SubprogramDecl, LowerError> {
        subprogram::lower_subprogram(env, node)
    }

    fn type_declaration(
        &self,
        env: &ParseEnv<'_>,
        node: &SyntaxNode,
    ) -> Result<TypeDecl, LowerError> {
        types::lower_type(env, node)
    }

    fn subtype_declaration(
        &self,
        env: &ParseEnv<'_>,
        node: &SyntaxNode,
    ) -> Result<SubtypeDecl, LowerError> {
        types::lower_subtype(env, node)
    }

    fn constant_declaration(
        &self,
        env: &ParseEnv<'_>,
        node: &SyntaxNode,
    ) -> Result<Vec<IdDef>, LowerError> {
        object::lower_objects(env, node, ObjectKind::Constant)
    }

    fn signal_declaration(
        &self,
        env: &ParseEnv<'_>,
        node: &SyntaxNode,
    ) -> Result<Vec<IdDef>, LowerError> {
        object::lower_objects(env, node, ObjectKind::Signal)
    }

    fn variable_declaration(
        &self,
        env: &ParseEnv<'_>,
        node: &SyntaxNode,
    ) -> Result<Vec<IdDef>, LowerError> {
        object::lower_objects(env, node, ObjectKind::Variable)
    }

    fn generic_clause<'n>(
        &self,
        env: &ParseEnv<'_>,
        node: &'n SyntaxNode,
        generics: &mut Vec<IdDef>,
    ) -> Result<Vec<&'n SyntaxNode>, LowerError> {
        interface::lower_interface_list(env, node, ObjectKind::Generic, generics)
    }

    fn port_clause<'n>(
        &self,
        env: &ParseEnv<'_>,
        node: &'n SyntaxNode,
        ports: &mut Vec<IdDef>,
    ) -> Result<Vec<&'n SyntaxNode>, LowerError> {
        interface::lower_interface_list(env, node, ObjectKind::Port, ports)
    }
}

/// What a sub-parser may use from the surrounding lowering
#[derive(Clone, Copy)]
pub struct ParseEnv<'a> {
    interner: &'a Interner,
    file_id: FileId,
}

impl<'a> ParseEnv<'a> {
    pub fn new(interner: &'a Interner, file_id: FileId) -> Self {
        Self { interner, file_id }
    }

    pub fn interner(&self) -> &'a Interner {
        self.interner
    }

    pub fn span(&self, node: &SyntaxNode) -> FileSpan {
        FileSpan::new(self.file_id, node.span)
    }

    pub fn intern(&self, text: &str) -> Symbol {
        self.interner.intern(text)
    }

    /// The node's text as an opaque fragment
    pub fn expr(&self, node: &SyntaxNode) -> Expr {
        Expr {
            text: node.source_text().into_owned(),
            span: self.span(node),
        }
    }

    /// Interns the text of `ident`; a name without text means `parent` has none
    pub fn name(&self, parent: &SyntaxNode, ident: &SyntaxNode) -> Result<Symbol, LowerError> {
        let text = ident.source_text();
        if text.is_empty() {
            return Err(LowerError::missing(parent, SyntaxKind::Identifier));
        }
        Ok(self.intern(&text))
    }

    /// Name from the first direct `identifier` child
    pub fn name_of(&self, node: &SyntaxNode) -> Result<Symbol, LowerError> {
        self.name(node, require(node, &SyntaxKind::Identifier)?)
    }

    /// Names of a co-declaration, from an `identifier_list` child or bare
    /// `identifier` children. An empty list is a structural error.
    pub fn identifiers(&self, node: &SyntaxNode) -> Result<Vec<Symbol>, LowerError> {
        let list = node.child(&SyntaxKind::IdentifierList).unwrap_or(node);
        let names = list
            .children_of(&SyntaxKind::Identifier)
            .map(|ident| self.name(node, ident))
            .collect::<Result<Vec<_>, _>>()?;
        if names.is_empty() {
            return Err(LowerError::EmptyIdentifierList {
                construct: node.kind.clone(),
                span: source_span(node.span),
            });
        }
        Ok(names)
    }
}

/// First direct child of `kind`, or a structural error naming `node`
pub(crate) fn require<'n>(
    node: &'n SyntaxNode,
    kind: &SyntaxKind,
) -> Result<&'n SyntaxNode, LowerError> {
    node.child(kind)
        .ok_or_else(|| LowerError::missing(node, kind.clone()))
}
