//! Design file traversal

use crate::context::LoweringContext;
use crate::error::LowerError;
use crate::package::lower_package;
use hc_ast::Idspace;
use hc_syntax::{SyntaxKind, SyntaxNode};
use tracing::debug;

const LIBRARY_UNIT_LABEL: &str = "DesignFileParser.visitLibrary_unit";
const CONTEXT_ITEM_LABEL: &str = "DesignFileParser.visitContext_item";

/// Lowers every package declaration of a `design_file`, in source order
///
/// Context items and every other library unit are reported and skipped.
#[tracing::instrument(level = "debug", skip_all, fields(file = %ctx.file_id()))]
pub fn lower_design_file(
    ctx: &mut LoweringContext<'_>,
    root: &SyntaxNode,
) -> Result<Vec<Idspace>, LowerError> {
    if root.kind != SyntaxKind::DesignFile {
        return Err(LowerError::unexpected(root, SyntaxKind::DesignFile));
    }

    let mut packages = Vec::new();
    for unit in root.children.iter().filter(|child| !child.is_token()) {
        if unit.kind == SyntaxKind::DesignUnit {
            for child in unit.children.iter().filter(|child| !child.is_token()) {
                lower_unit_part(ctx, child, &mut packages)?;
            }
        } else {
            lower_unit_part(ctx, unit, &mut packages)?;
        }
    }
    debug!(packages = packages.len(), "design file lowered");
    Ok(packages)
}

fn lower_unit_part(
    ctx: &mut LoweringContext<'_>,
    node: &SyntaxNode,
    packages: &mut Vec<Idspace>,
) -> Result<(), LowerError> {
    match node.kind {
        SyntaxKind::ContextClause => {
            for item in node.children.iter().filter(|child| !child.is_token()) {
                ctx.unsupported(CONTEXT_ITEM_LABEL, item);
            }
        }
        SyntaxKind::ContextItem | SyntaxKind::LibraryClause | SyntaxKind::UseClause => {
            ctx.unsupported(CONTEXT_ITEM_LABEL, node);
        }
        _ => {
            let unit = library_unit(node);
            if unit.kind == SyntaxKind::PackageDeclaration {
                packages.push(lower_package(ctx, unit)?);
            } else {
                ctx.unsupported(LIBRARY_UNIT_LABEL, unit);
            }
        }
    }
    Ok(())
}

/// Strips `library_unit`, `primary_unit` and `secondary_unit` wrappers
fn library_unit(node: &SyntaxNode) -> &SyntaxNode {
    let mut unit = node;
    while matches!(
        unit.kind,
        SyntaxKind::LibraryUnit | SyntaxKind::PrimaryUnit | SyntaxKind::SecondaryUnit
    ) {
        match unit.children.iter().find(|child| !child.is_token()) {
            Some(inner) => unit = inner,
            None => break,
        }
    }
    unit
}
