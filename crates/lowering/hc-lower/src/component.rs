//! Component declarations lowered to module signatures

use crate::context::LoweringContext;
use crate::error::LowerError;
use hc_ast::ModuleDec;
use hc_syntax::{SyntaxKind, SyntaxNode};
use tracing::debug;

const INTERFACE_LABEL: &str = "InterfaceParser.visitInterface_declaration";

/// Lowers a `component_declaration` into a [`ModuleDec`]
///
/// Only the signature is kept. Generic and port lists are empty when the
/// clause is absent or when lowering hierarchy only. Generic types,
/// subprograms and packages are reported and left out of the lists.
pub fn lower_component(
    ctx: &mut LoweringContext<'_>,
    node: &SyntaxNode,
) -> Result<ModuleDec, LowerError> {
    if node.kind != SyntaxKind::ComponentDeclaration {
        return Err(LowerError::unexpected(node, SyntaxKind::ComponentDeclaration));
    }

    let env = ctx.env();
    let mut module = ModuleDec::new(env.name_of(node)?, env.span(node));
    debug!(component = env.interner().resolve(&module.name), "lowering component");

    if ctx.hierarchy_only() {
        return Ok(module);
    }

    let parsers = ctx.parsers();
    let mut skipped = Vec::new();
    if let Some(clause) = node.child(&SyntaxKind::GenericClause) {
        skipped.extend(parsers.generic_clause(&env, clause, &mut module.generics)?);
    }
    if let Some(clause) = node.child(&SyntaxKind::PortClause) {
        skipped.extend(parsers.port_clause(&env, clause, &mut module.ports)?);
    }
    for declaration in skipped {
        ctx.unsupported(INTERFACE_LABEL, declaration);
    }
    Ok(module)
}
