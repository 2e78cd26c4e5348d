//! Constant, signal and variable declarations

use super::{ParseEnv, require};
use crate::error::LowerError;
use hc_ast::{IdDef, ObjectKind};
use hc_syntax::{SyntaxKind, SyntaxNode};

/// Expands `kind a, b : T := v;` into one [`IdDef`] per name, in order
pub(crate) fn lower_objects(
    env: &ParseEnv<'_>,
    node: &SyntaxNode,
    kind: ObjectKind,
) -> Result<Vec<IdDef>, LowerError> {
    let names = env.identifiers(node)?;
    let ty = env.expr(require(node, &SyntaxKind::SubtypeIndication)?);
    let value = node
        .child(&SyntaxKind::Expression)
        .map(|value| env.expr(value));
    let span = env.span(node);

    Ok(names
        .into_iter()
        .map(|name| IdDef {
            name,
            kind,
            direction: None,
            ty: Some(ty.clone()),
            value: value.clone(),
            span,
        })
        .collect())
}
