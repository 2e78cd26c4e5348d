//! Function and procedure declarations

use super::{ParseEnv, interface::lower_interface_list, require};
use crate::error::LowerError;
use hc_ast::{ObjectKind, SubprogramDecl, SubprogramKind};
use hc_syntax::{SyntaxKind, SyntaxNode};

pub(crate) fn lower_subprogram(
    env: &ParseEnv<'_>,
    node: &SyntaxNode,
) -> Result<SubprogramDecl, LowerError> {
    let spec = require(node, &SyntaxKind::SubprogramSpecification)?;
    let (kind, spec) = if let Some(function) = spec.child(&SyntaxKind::FunctionSpecification) {
        (SubprogramKind::Function, function)
    } else if let Some(procedure) = spec.child(&SyntaxKind::ProcedureSpecification) {
        (SubprogramKind::Procedure, procedure)
    } else {
        return Err(LowerError::missing(spec, SyntaxKind::ProcedureSpecification));
    };

    let name = match spec.child(&SyntaxKind::Designator) {
        Some(designator) => env.name(spec, designator)?,
        None => env.name_of(spec)?,
    };

    let mut params = Vec::new();
    if let Some(list) = spec.child(&SyntaxKind::FormalParameterList) {
        let skipped = lower_interface_list(env, list, ObjectKind::Parameter, &mut params)?;
        if let Some(first) = skipped.first() {
            return Err(LowerError::unexpected(first, SyntaxKind::InterfaceObjectDeclaration));
        }
    }

    let return_type = match kind {
        SubprogramKind::Function => {
            let mark = spec
                .child(&SyntaxKind::TypeMark)
                .or_else(|| spec.child(&SyntaxKind::SubtypeIndication))
                .ok_or_else(|| LowerError::missing(spec, SyntaxKind::TypeMark))?;
            Some(env.expr(mark))
        }
        SubprogramKind::Procedure => None,
    };

    Ok(SubprogramDecl {
        name,
        kind,
        params,
        return_type,
        span: env.span(node),
    })
}
