//! Interface lists: generic clauses, port clauses and formal parameters

use super::{ParseEnv, require};
use crate::error::{LowerError, source_span};
use hc_ast::{Direction, IdDef, ObjectKind};
use hc_syntax::{SyntaxKind, SyntaxNode};

/// Appends every interface object declaration under `clause` to `out`, in order
///
/// Returns the interface declarations that are not objects (generic types,
/// subprograms and packages) so the caller can report them.
pub(crate) fn lower_interface_list<'n>(
    env: &ParseEnv<'_>,
    clause: &'n SyntaxNode,
    kind: ObjectKind,
    out: &mut Vec<IdDef>,
) -> Result<Vec<&'n SyntaxNode>, LowerError> {
    let mut skipped = Vec::new();
    collect(env, clause, kind, out, &mut skipped)?;
    Ok(skipped)
}

fn collect<'n>(
    env: &ParseEnv<'_>,
    node: &'n SyntaxNode,
    kind: ObjectKind,
    out: &mut Vec<IdDef>,
    skipped: &mut Vec<&'n SyntaxNode>,
) -> Result<(), LowerError> {
    for child in node.children.iter().filter(|child| !child.is_token()) {
        match child.kind {
            SyntaxKind::InterfaceConstantDeclaration
            | SyntaxKind::InterfaceSignalDeclaration
            | SyntaxKind::InterfaceVariableDeclaration
            | SyntaxKind::InterfaceFileDeclaration => {
                lower_interface_declaration(env, child, kind, out)?;
            }
            SyntaxKind::InterfaceList
            | SyntaxKind::InterfaceElement
            | SyntaxKind::InterfaceDeclaration
            | SyntaxKind::InterfaceObjectDeclaration => {
                if is_bare_object(child) {
                    lower_interface_declaration(env, child, kind, out)?;
                } else {
                    collect(env, child, kind, out, skipped)?;
                }
            }
            _ => skipped.push(child),
        }
    }
    Ok(())
}

/// Wrapper written without an inner `interface_*_declaration` node
fn is_bare_object(node: &SyntaxNode) -> bool {
    [
        SyntaxKind::IdentifierList,
        SyntaxKind::Identifier,
        SyntaxKind::Mode,
        SyntaxKind::SubtypeIndication,
    ]
    .iter()
    .any(|kind| node.child(kind).is_some())
}

fn lower_interface_declaration(
    env: &ParseEnv<'_>,
    node: &SyntaxNode,
    kind: ObjectKind,
    out: &mut Vec<IdDef>,
) -> Result<(), LowerError> {
    let names = env.identifiers(node)?;
    let direction = match node.child(&SyntaxKind::Mode) {
        Some(mode) => {
            let text = mode.source_text();
            Some(Direction::from_keyword(&text).ok_or_else(|| LowerError::InvalidMode {
                text: text.to_string(),
                span: source_span(mode.span),
            })?)
        }
        None => default_direction(kind),
    };
    let ty = env.expr(require(node, &SyntaxKind::SubtypeIndication)?);
    let value = node
        .child(&SyntaxKind::Expression)
        .map(|value| env.expr(value));
    let span = env.span(node);

    out.extend(names.into_iter().map(|name| IdDef {
        name,
        kind,
        direction,
        ty: Some(ty.clone()),
        value: value.clone(),
        span,
    }));
    Ok(())
}

/// Ports and parameters without an explicit mode are `in`
fn default_direction(kind: ObjectKind) -> Option<Direction> {
    match kind {
        ObjectKind::Port | ObjectKind::Parameter => Some(Direction::In),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::test_tree::*;
    use hc_intern::Interner;
    use hc_span::FileId;

    fn port_clause() -> SyntaxNode {
        node(
            SyntaxKind::PortClause,
            vec![
                leaf(SyntaxKind::from_rule_name("PORT"), "port"),
                leaf(SyntaxKind::from_rule_name("LPAREN"), "("),
                node(
                    SyntaxKind::InterfaceList,
                    vec![
                        node(
                            SyntaxKind::InterfaceElement,
                            vec![node(
                                SyntaxKind::InterfaceSignalDeclaration,
                                vec![
                                    ident_list(&["clk", "rst"]),
                                    leaf(SyntaxKind::Mode, "in"),
                                    subtype("std_logic"),
                                ],
                            )],
                        ),
                        node(
                            SyntaxKind::InterfaceElement,
                            vec![
                                ident_list(&["q"]),
                                leaf(SyntaxKind::Mode, "OUT"),
                                subtype("std_logic_vector(7 downto 0)"),
                            ],
                        ),
                    ],
                ),
                leaf(SyntaxKind::from_rule_name("RPAREN"), ")"),
            ],
        )
    }

    #[test]
    fn test_port_clause_order_and_modes() {
        let interner = Interner::new();
        let env = ParseEnv::new(&interner, FileId(0));
        let mut ports = Vec::new();
        let clause = port_clause();
        let skipped = lower_interface_list(&env, &clause, ObjectKind::Port, &mut ports).unwrap();
        assert!(skipped.is_empty());

        let summary: Vec<_> = ports
            .iter()
            .map(|port| (interner.resolve(&port.name), port.direction))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("clk", Some(Direction::In)),
                ("rst", Some(Direction::In)),
                ("q", Some(Direction::Out)),
            ]
        );
        assert_eq!(
            ports[2].ty.as_ref().map(|ty| ty.text.as_str()),
            Some("std_logic_vector(7 downto 0)")
        );
    }

    #[test]
    fn test_generics_have_no_direction() {
        let interner = Interner::new();
        let env = ParseEnv::new(&interner, FileId(0));
        let clause = node(
            SyntaxKind::GenericClause,
            vec![node(
                SyntaxKind::InterfaceConstantDeclaration,
                vec![ident_list(&["width"]), subtype("natural"), expr("8")],
            )],
        );
        let mut generics = Vec::new();
        lower_interface_list(&env, &clause, ObjectKind::Generic, &mut generics).unwrap();

        assert_eq!(generics.len(), 1);
        assert_eq!(generics[0].direction, None);
        assert_eq!(generics[0].value.as_ref().map(|value| value.text.as_str()), Some("8"));
    }

    #[test]
    fn test_parameters_default_to_in() {
        assert_eq!(default_direction(ObjectKind::Parameter), Some(Direction::In));
        assert_eq!(default_direction(ObjectKind::Generic), None);
    }

    #[test]
    fn test_invalid_mode() {
        let interner = Interner::new();
        let env = ParseEnv::new(&interner, FileId(0));
        let clause = node(
            SyntaxKind::PortClause,
            vec![node(
                SyntaxKind::InterfaceSignalDeclaration,
                vec![ident_list(&["x"]), leaf(SyntaxKind::Mode, "sideways"), subtype("bit")],
            )],
        );
        let mut ports = Vec::new();
        let err = lower_interface_list(&env, &clause, ObjectKind::Port, &mut ports).unwrap_err();
        assert!(matches!(err, LowerError::InvalidMode { ref text, .. } if text == "sideways"));
        assert!(ports.is_empty());
    }

    #[test]
    fn test_generic_type_is_returned_not_lowered() {
        let interner = Interner::new();
        let env = ParseEnv::new(&interner, FileId(0));
        let clause = node(
            SyntaxKind::GenericClause,
            vec![node(
                SyntaxKind::InterfaceList,
                vec![
                    node(
                        SyntaxKind::InterfaceElement,
                        vec![node(
                            SyntaxKind::InterfaceDeclaration,
                            vec![node(SyntaxKind::InterfaceTypeDeclaration, vec![ident("T")])],
                        )],
                    ),
                    leaf(SyntaxKind::from_rule_name("SEMI"), ";"),
                    node(
                        SyntaxKind::InterfaceElement,
                        vec![node(
                            SyntaxKind::InterfaceConstantDeclaration,
                            vec![ident_list(&["n"]), subtype("natural")],
                        )],
                    ),
                ],
            )],
        );
        let mut generics = Vec::new();
        let skipped =
            lower_interface_list(&env, &clause, ObjectKind::Generic, &mut generics).unwrap();

        assert_eq!(generics.len(), 1);
        assert_eq!(interner.resolve(&generics[0].name), "n");
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].kind, SyntaxKind::InterfaceTypeDeclaration);
    }

    #[test]
    fn test_nameless_interface_constant_is_structural() {
        let interner = Interner::new();
        let env = ParseEnv::new(&interner, FileId(0));
        let clause = node(
            SyntaxKind::GenericClause,
            vec![node(
                SyntaxKind::InterfaceList,
                vec![node(SyntaxKind::InterfaceConstantDeclaration, vec![subtype("natural")])],
            )],
        );
        let mut generics = Vec::new();
        let err =
            lower_interface_list(&env, &clause, ObjectKind::Generic, &mut generics).unwrap_err();
        assert!(matches!(
            err,
            LowerError::EmptyIdentifierList { construct: SyntaxKind::InterfaceConstantDeclaration, .. }
        ));
    }

    #[test]
    fn test_mode_from_tokens() {
        let interner = Interner::new();
        let env = ParseEnv::new(&interner, FileId(0));
        let clause = node(
            SyntaxKind::PortClause,
            vec![node(
                SyntaxKind::InterfaceSignalDeclaration,
                vec![
                    ident_list(&["d"]),
                    node(SyntaxKind::Mode, vec![leaf(SyntaxKind::from_rule_name("INOUT"), "inout")]),
                    subtype("std_logic"),
                ],
            )],
        );
        let mut ports = Vec::new();
        lower_interface_list(&env, &clause, ObjectKind::Port, &mut ports).unwrap();
        assert_eq!(ports[0].direction, Some(Direction::Inout));
    }
}
