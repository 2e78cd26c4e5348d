//! Package declarations: the scope entry point and the per-level scope builder

use crate::component::lower_component;
use crate::context::LoweringContext;
use crate::error::LowerError;
use crate::item::DeclarativeItem;
use hc_ast::{Declaration, Idspace};
use hc_syntax::{SyntaxKind, SyntaxNode};
use tracing::{debug, trace};

/// Result of feeding one item to a [`ScopeBuilder`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accepted {
    /// This many declarations were appended
    Appended(usize),
    /// The item was reported as unsupported and nothing was appended
    Skipped,
}

/// Builds the [`Idspace`] of one nesting level
///
/// Nested packages get their own builder through [`lower_package`]; a builder
/// never sees the items of another level.
#[derive(Debug)]
pub struct ScopeBuilder {
    idspace: Idspace,
}

impl ScopeBuilder {
    pub fn new(idspace: Idspace) -> Self {
        Self { idspace }
    }

    /// Dispatches one declarative item and appends what it produces
    ///
    /// Unsupported items are reported through the context and skipped.
    /// Structural errors abort the whole scope.
    pub fn accept(
        &mut self,
        ctx: &mut LoweringContext<'_>,
        item: DeclarativeItem<'_>,
    ) -> Result<Accepted, LowerError> {
        let parsers = ctx.parsers();
        let env = ctx.env();

        let declarations = match item {
            DeclarativeItem::Subprogram(node) => {
                vec![Declaration::Subprogram(parsers.subprogram_declaration(&env, node)?)]
            }
            DeclarativeItem::Package(node) => {
                vec![Declaration::Package(lower_package(ctx, node)?)]
            }
            DeclarativeItem::Type(node) => {
                vec![Declaration::Type(parsers.type_declaration(&env, node)?)]
            }
            DeclarativeItem::Subtype(node) => {
                vec![Declaration::Subtype(parsers.subtype_declaration(&env, node)?)]
            }
            DeclarativeItem::Constant(node) => parsers
                .constant_declaration(&env, node)?
                .into_iter()
                .map(Declaration::Constant)
                .collect(),
            DeclarativeItem::Signal(node) => parsers
                .signal_declaration(&env, node)?
                .into_iter()
                .map(Declaration::Signal)
                .collect(),
            DeclarativeItem::Variable(node) => parsers
                .variable_declaration(&env, node)?
                .into_iter()
                .map(Declaration::Variable)
                .collect(),
            DeclarativeItem::Component(node) => {
                vec![Declaration::Component(lower_component(ctx, node)?)]
            }
            DeclarativeItem::Unsupported(unsupported, node) => {
                ctx.unsupported(unsupported.label(), node);
                return Ok(Accepted::Skipped);
            }
        };

        let count = declarations.len();
        trace!(kind = %item.node().kind, count, "accepted");
        self.idspace.objs.extend(declarations);
        Ok(Accepted::Appended(count))
    }

    /// Declarations appended so far
    pub fn len(&self) -> usize {
        self.idspace.objs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.idspace.objs.is_empty()
    }

    pub fn finish(self) -> Idspace {
        self.idspace
    }
}

/// Lowers a `package_declaration` into an [`Idspace`]
///
/// In hierarchy-only mode the header and the declarative part are not
/// visited and the result holds no declarations.
pub fn lower_package(
    ctx: &mut LoweringContext<'_>,
    node: &SyntaxNode,
) -> Result<Idspace, LowerError> {
    if node.kind != SyntaxKind::PackageDeclaration {
        return Err(LowerError::unexpected(node, SyntaxKind::PackageDeclaration));
    }

    let name = ctx.env().name_of(node)?;
    let idspace = Idspace::new(name, ctx.file_span(node));
    debug!(
        package = ctx.interner.resolve(&name),
        hierarchy_only = ctx.hierarchy_only(),
        "lowering package"
    );

    if ctx.hierarchy_only() {
        return Ok(idspace);
    }

    if let Some(header) = node.child(&SyntaxKind::PackageHeader) {
        if let Some(clause) = header.child(&SyntaxKind::GenericClause) {
            ctx.unsupported("PackageHeaderParser.visitGeneric_clause", clause);
        }
        if let Some(aspect) = header.child(&SyntaxKind::GenericMapAspect) {
            ctx.unsupported("PackageHeaderParser.visitGeneric_map_aspect", aspect);
        }
    }

    let mut builder = ScopeBuilder::new(idspace);
    if let Some(part) = node.child(&SyntaxKind::PackageDeclarativePart) {
        for item in &part.children {
            builder.accept(ctx, DeclarativeItem::classify(item))?;
        }
    }
    Ok(builder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::test_tree::*;
    use crate::{DiagnosticLog, LowerOptions, VhdlDeclParsers};
    use pretty_assertions::assert_eq;

    fn item(decl: SyntaxNode) -> SyntaxNode {
        node(SyntaxKind::PackageDeclarativeItem, vec![decl])
    }

    fn package(name: &str, items: Vec<SyntaxNode>) -> SyntaxNode {
        node(
            SyntaxKind::PackageDeclaration,
            vec![
                leaf(SyntaxKind::from_rule_name("PACKAGE"), "package"),
                ident(name),
                leaf(SyntaxKind::from_rule_name("IS"), "is"),
                node(SyntaxKind::PackageDeclarativePart, items),
                leaf(SyntaxKind::from_rule_name("END"), "end"),
            ],
        )
    }

    fn signal(names: &[&str]) -> SyntaxNode {
        item(node(
            SyntaxKind::SignalDeclaration,
            vec![ident_list(names), subtype("bit")],
        ))
    }

    fn names(ctx: &LoweringContext<'_>, idspace: &Idspace) -> Vec<String> {
        idspace
            .objs
            .iter()
            .map(|decl| {
                format!("{} {}", decl.keyword(), ctx.interner.resolve(&decl.name()))
            })
            .collect()
    }

    #[test]
    fn test_nested_package_and_alias() {
        let tree = package(
            "outer",
            vec![
                signal(&["a", "b"]),
                item(leaf(SyntaxKind::AliasDeclaration, "alias x is a")),
                item(package(
                    "inner",
                    vec![item(node(
                        SyntaxKind::ConstantDeclaration,
                        vec![ident_list(&["c"]), subtype("integer"), expr("1")],
                    ))],
                )),
            ],
        );

        let parsers = VhdlDeclParsers;
        let mut log = DiagnosticLog::new();
        let mut ctx = LoweringContext::new(&parsers, &mut log);
        let idspace = lower_package(&mut ctx, &tree).unwrap();

        assert!(idspace.defs_only);
        assert_eq!(names(&ctx, &idspace), vec!["signal a", "signal b", "package inner"]);
        let Declaration::Package(inner) = &idspace.objs[2] else {
            panic!("expected a nested package");
        };
        assert_eq!(names(&ctx, inner), vec!["constant c"]);

        assert_eq!(log.len(), 1);
        assert_eq!(log.entries()[0].label, "PackageHeaderParser.visitAlias_declaration");
    }

    #[test]
    fn test_hierarchy_only_skips_body() {
        let tree = package("pkg", vec![signal(&["a"]), item(leaf(SyntaxKind::UseClause, "use"))]);
        let parsers = VhdlDeclParsers;
        let mut log = DiagnosticLog::new();
        let mut ctx = LoweringContext::new(&parsers, &mut log)
            .with_options(LowerOptions { hierarchy_only: true });

        let idspace = lower_package(&mut ctx, &tree).unwrap();
        assert_eq!(ctx.interner.resolve(&idspace.name), "pkg");
        assert!(idspace.defs_only);
        assert!(idspace.objs.is_empty());
        assert!(log.is_empty());
    }

    #[test]
    fn test_header_clauses_are_reported() {
        let tree = node(
            SyntaxKind::PackageDeclaration,
            vec![
                ident("generic_pkg"),
                node(
                    SyntaxKind::PackageHeader,
                    vec![
                        leaf(SyntaxKind::GenericClause, "generic (n : natural)"),
                        leaf(SyntaxKind::GenericMapAspect, "generic map (n => 4)"),
                    ],
                ),
            ],
        );
        let parsers = VhdlDeclParsers;
        let mut log = DiagnosticLog::new();
        let mut ctx = LoweringContext::new(&parsers, &mut log);
        let idspace = lower_package(&mut ctx, &tree).unwrap();
        assert!(idspace.objs.is_empty());

        let labels: Vec<_> = log.entries().iter().map(|entry| entry.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "PackageHeaderParser.visitGeneric_clause",
                "PackageHeaderParser.visitGeneric_map_aspect",
            ]
        );
    }

    #[test]
    fn test_missing_name_is_fatal() {
        let tree = node(SyntaxKind::PackageDeclaration, vec![]);
        let parsers = VhdlDeclParsers;
        let mut log = DiagnosticLog::new();
        let mut ctx = LoweringContext::new(&parsers, &mut log);
        assert!(matches!(
            lower_package(&mut ctx, &tree),
            Err(LowerError::MissingNode { expected: SyntaxKind::Identifier, .. })
        ));
    }

    #[test]
    fn test_wrong_node_kind() {
        let tree = leaf(SyntaxKind::ComponentDeclaration, "component");
        let parsers = VhdlDeclParsers;
        let mut log = DiagnosticLog::new();
        let mut ctx = LoweringContext::new(&parsers, &mut log);
        assert!(matches!(
            lower_package(&mut ctx, &tree),
            Err(LowerError::UnexpectedNode { .. })
        ));
    }

    #[test]
    fn test_accept_reports_counts() {
        let parsers = VhdlDeclParsers;
        let mut log = DiagnosticLog::new();
        let mut ctx = LoweringContext::new(&parsers, &mut log);
        let name = ctx.interner.intern("scope");
        let span = hc_span::FileSpan::new(ctx.file_id(), hc_span::Span::default());
        let mut builder = ScopeBuilder::new(Idspace::new(name, span));

        let signals = signal(&["a", "b", "c"]);
        let alias = item(leaf(SyntaxKind::AliasDeclaration, "alias"));
        assert_eq!(
            builder.accept(&mut ctx, DeclarativeItem::classify(&signals)).unwrap(),
            Accepted::Appended(3)
        );
        assert_eq!(
            builder.accept(&mut ctx, DeclarativeItem::classify(&alias)).unwrap(),
            Accepted::Skipped
        );
        assert_eq!(builder.len(), 3);
    }

    #[test]
    fn test_structural_error_in_item_aborts() {
        let tree = package(
            "broken",
            vec![
                signal(&["ok"]),
                item(node(SyntaxKind::SignalDeclaration, vec![ident_list(&["x"])])),
            ],
        );
        let parsers = VhdlDeclParsers;
        let mut log = DiagnosticLog::new();
        let mut ctx = LoweringContext::new(&parsers, &mut log);
        assert!(matches!(
            lower_package(&mut ctx, &tree),
            Err(LowerError::MissingNode { expected: SyntaxKind::SubtypeIndication, .. })
        ));
    }

    #[test]
    fn test_unknown_leaf_item_is_reported() {
        let tree = package(
            "analog",
            vec![leaf(SyntaxKind::from_rule_name("nature_declaration"), "")],
        );
        let parsers = VhdlDeclParsers;
        let mut log = DiagnosticLog::new();
        let mut ctx = LoweringContext::new(&parsers, &mut log);

        let idspace = lower_package(&mut ctx, &tree).unwrap();
        assert!(idspace.objs.is_empty());

        assert_eq!(log.len(), 1);
        assert_eq!(
            log.entries()[0].label,
            "VhdlPackageHeaderParser.visitPackage_declarative_item"
        );
        assert_eq!(log.entries()[0].kind.rule_name(), "nature_declaration");
    }
}
