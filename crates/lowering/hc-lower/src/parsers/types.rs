//! Type and subtype declarations

use super::{ParseEnv, require};
use crate::error::LowerError;
use hc_ast::{SubtypeDecl, TypeDecl, TypeDef};
use hc_intern::Symbol;
use hc_syntax::{SyntaxKind, SyntaxNode};

pub(crate) fn lower_type(env: &ParseEnv<'_>, node: &SyntaxNode) -> Result<TypeDecl, LowerError> {
    // type_declaration wraps either form; accept the inner node directly too
    let decl = node
        .child(&SyntaxKind::FullTypeDeclaration)
        .or_else(|| node.child(&SyntaxKind::IncompleteTypeDeclaration))
        .unwrap_or(node);
    let name = env.name_of(decl)?;

    let definition = if decl.kind == SyntaxKind::IncompleteTypeDeclaration {
        TypeDef::Incomplete
    } else if let Some(enumeration) = decl.find_descendant(&SyntaxKind::EnumerationTypeDefinition) {
        TypeDef::Enumeration(enumeration_literals(env, enumeration))
    } else if let Some(definition) = decl.child(&SyntaxKind::TypeDefinition) {
        TypeDef::Other(env.expr(definition))
    } else {
        TypeDef::Incomplete
    };

    Ok(TypeDecl {
        name,
        definition,
        span: env.span(node),
    })
}

fn enumeration_literals(env: &ParseEnv<'_>, definition: &SyntaxNode) -> Vec<Symbol> {
    let literals: Vec<&SyntaxNode> = definition
        .children_of(&SyntaxKind::EnumerationLiteral)
        .collect();
    let literals = if literals.is_empty() {
        definition.children_of(&SyntaxKind::Identifier).collect()
    } else {
        literals
    };
    literals
        .into_iter()
        .map(|literal| env.intern(&literal.source_text()))
        .collect()
}

pub(crate) fn lower_subtype(
    env: &ParseEnv<'_>,
    node: &SyntaxNode,
) -> Result<SubtypeDecl, LowerError> {
    let name = env.name_of(node)?;
    let indication = env.expr(require(node, &SyntaxKind::SubtypeIndication)?);
    Ok(SubtypeDecl {
        name,
        indication,
        span: env.span(node),
    })
}
