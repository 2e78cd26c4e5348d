//! Generic VHDL syntax tree
//!
//! Front ends hand the lowering passes a fully materialized tree of
//! [`SyntaxNode`]s whose kinds are VHDL grammar rule names. The tree is
//! read-only input; nothing downstream mutates it.

use hc_span::Span;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Generic syntax tree node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxNode {
    /// The kind of this node
    pub kind: SyntaxKind,
    /// Source location
    pub span: Span,
    /// Source text covered by the node
    #[serde(default)]
    pub text: String,
    /// Child nodes
    #[serde(default)]
    pub children: Vec<SyntaxNode>,
}

macro_rules! syntax_kinds {
    ($($(#[$doc:meta])* $variant:ident => $rule:literal,)*) => {
        /// Grammar rule kinds the lowering passes know about
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum SyntaxKind {
            $($(#[$doc])* $variant,)*
            /// Any other rule or token, kept by name
            Unknown(String),
        }

        impl SyntaxKind {
            /// Grammar rule name of this kind
            pub fn rule_name(&self) -> &str {
                match self {
                    $(Self::$variant => $rule,)*
                    Self::Unknown(name) => name,
                }
            }

            /// Maps a grammar rule name to its kind
            pub fn from_rule_name(name: &str) -> Self {
                match name {
                    $($rule => Self::$variant,)*
                    // the 2008 grammar calls it `signal_mode`
                    "signal_mode" => Self::Mode,
                    other => Self::Unknown(other.to_string()),
                }
            }
        }
    };
}

syntax_kinds! {
    /// Root of a design file
    DesignFile => "design_file",
    /// One design unit with its context clause
    DesignUnit => "design_unit",
    /// Primary or secondary unit wrapper
    LibraryUnit => "library_unit",
    /// Primary unit wrapper
    PrimaryUnit => "primary_unit",
    /// Secondary unit wrapper
    SecondaryUnit => "secondary_unit",
    /// Context clause of a design unit
    ContextClause => "context_clause",
    /// Single context item
    ContextItem => "context_item",
    /// `library` clause
    LibraryClause => "library_clause",
    /// `use` clause
    UseClause => "use_clause",
    /// `package ... is ... end`
    PackageDeclaration => "package_declaration",
    /// Generic clause and generic map of a package
    PackageHeader => "package_header",
    /// Body of a package declaration
    PackageDeclarativePart => "package_declarative_part",
    /// Single item of a package declarative part
    PackageDeclarativeItem => "package_declarative_item",
    /// `generic ( ... );`
    GenericClause => "generic_clause",
    /// `generic map ( ... )`
    GenericMapAspect => "generic_map_aspect",
    /// `port ( ... );`
    PortClause => "port_clause",
    /// Interface list of a clause
    InterfaceList => "interface_list",
    /// Single interface list element
    InterfaceElement => "interface_element",
    /// Interface constant declaration
    InterfaceConstantDeclaration => "interface_constant_declaration",
    /// Interface signal declaration
    InterfaceSignalDeclaration => "interface_signal_declaration",
    /// Interface variable declaration
    InterfaceVariableDeclaration => "interface_variable_declaration",
    /// Interface file declaration
    InterfaceFileDeclaration => "interface_file_declaration",
    /// Any interface declaration (2008 grammar wrapper)
    InterfaceDeclaration => "interface_declaration",
    /// Interface object declaration (2008 grammar wrapper)
    InterfaceObjectDeclaration => "interface_object_declaration",
    /// Generic type
    InterfaceTypeDeclaration => "interface_type_declaration",
    /// Generic subprogram
    InterfaceSubprogramDeclaration => "interface_subprogram_declaration",
    /// Generic package
    InterfacePackageDeclaration => "interface_package_declaration",
    /// Port or parameter mode
    Mode => "mode",
    /// Identifier
    Identifier => "identifier",
    /// Comma separated identifiers
    IdentifierList => "identifier_list",
    /// Type mark with optional constraint
    SubtypeIndication => "subtype_indication",
    /// Type mark
    TypeMark => "type_mark",
    /// Expression
    Expression => "expression",
    /// Subprogram declaration
    SubprogramDeclaration => "subprogram_declaration",
    /// Subprogram specification
    SubprogramSpecification => "subprogram_specification",
    /// Procedure specification
    ProcedureSpecification => "procedure_specification",
    /// Function specification
    FunctionSpecification => "function_specification",
    /// Subprogram designator
    Designator => "designator",
    /// Subprogram parameter list
    FormalParameterList => "formal_parameter_list",
    /// Subprogram instantiation
    SubprogramInstantiationDeclaration => "subprogram_instantiation_declaration",
    /// Package instantiation
    PackageInstantiationDeclaration => "package_instantiation_declaration",
    /// Type declaration
    TypeDeclaration => "type_declaration",
    /// `type t is ...;`
    FullTypeDeclaration => "full_type_declaration",
    /// `type t;`
    IncompleteTypeDeclaration => "incomplete_type_declaration",
    /// Type definition
    TypeDefinition => "type_definition",
    /// Enumeration type definition
    EnumerationTypeDefinition => "enumeration_type_definition",
    /// Enumeration literal
    EnumerationLiteral => "enumeration_literal",
    /// Subtype declaration
    SubtypeDeclaration => "subtype_declaration",
    /// Constant declaration
    ConstantDeclaration => "constant_declaration",
    /// Signal declaration
    SignalDeclaration => "signal_declaration",
    /// Variable declaration
    VariableDeclaration => "variable_declaration",
    /// File declaration
    FileDeclaration => "file_declaration",
    /// Alias declaration
    AliasDeclaration => "alias_declaration",
    /// Component declaration
    ComponentDeclaration => "component_declaration",
    /// Attribute declaration
    AttributeDeclaration => "attribute_declaration",
    /// Attribute specification
    AttributeSpecification => "attribute_specification",
    /// Disconnection specification
    DisconnectionSpecification => "disconnection_specification",
    /// Group template declaration
    GroupTemplateDeclaration => "group_template_declaration",
    /// Group declaration
    GroupDeclaration => "group_declaration",
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.rule_name())
    }
}

impl From<String> for SyntaxKind {
    fn from(name: String) -> Self {
        Self::from_rule_name(&name)
    }
}

impl From<SyntaxKind> for String {
    fn from(kind: SyntaxKind) -> Self {
        match kind {
            SyntaxKind::Unknown(name) => name,
            known => known.rule_name().to_string(),
        }
    }
}

/// Errors raised while loading a serialized tree
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// The document is not a valid serialized tree
    #[error("malformed syntax tree: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl SyntaxNode {
    /// Creates a node without children
    pub fn leaf(kind: SyntaxKind, span: Span, text: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// Creates a node with children; the text is the children's texts joined by spaces
    pub fn branch(kind: SyntaxKind, span: Span, children: Vec<SyntaxNode>) -> Self {
        let text = children
            .iter()
            .map(|child| child.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            kind,
            span,
            text,
            children,
        }
    }

    /// Reads a tree from its JSON form
    pub fn from_json(source: &str) -> Result<Self, TreeError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Lexer token such as a keyword or punctuation
    ///
    /// Token kinds are upper case (`SEMI`, `PACKAGE`) or the punctuation
    /// itself. A childless node of an unknown lower-case kind is a grammar
    /// rule, not a token.
    pub fn is_token(&self) -> bool {
        match &self.kind {
            SyntaxKind::Unknown(name) => {
                self.children.is_empty() && !name.starts_with(|ch: char| ch.is_ascii_lowercase())
            }
            _ => false,
        }
    }

    /// First direct child of the given kind
    pub fn child(&self, kind: &SyntaxKind) -> Option<&SyntaxNode> {
        self.children.iter().find(|child| &child.kind == kind)
    }

    /// All direct children of the given kind, in source order
    pub fn children_of<'node>(
        &'node self,
        kind: &'node SyntaxKind,
    ) -> impl Iterator<Item = &'node SyntaxNode> + 'node {
        self.children.iter().filter(move |child| &child.kind == kind)
    }

    /// First descendant of the given kind in pre-order, excluding `self`
    pub fn find_descendant(&self, kind: &SyntaxKind) -> Option<&SyntaxNode> {
        self.children.iter().find_map(|child| {
            if &child.kind == kind {
                Some(child)
            } else {
                child.find_descendant(kind)
            }
        })
    }

    /// Source text with surrounding whitespace removed
    pub fn trimmed_text(&self) -> &str {
        self.text.trim()
    }

    /// Source text, rebuilt from the leaf tokens when the node carries none
    pub fn source_text(&self) -> Cow<'_, str> {
        let text = self.trimmed_text();
        if !text.is_empty() || self.children.is_empty() {
            return Cow::Borrowed(text);
        }
        let mut leaves = Vec::new();
        self.collect_leaf_text(&mut leaves);
        Cow::Owned(leaves.join(" "))
    }

    fn collect_leaf_text<'node>(&'node self, leaves: &mut Vec<&'node str>) {
        if self.children.is_empty() {
            let text = self.trimmed_text();
            if !text.is_empty() {
                leaves.push(text);
            }
        } else {
            for child in &self.children {
                child.collect_leaf_text(leaves);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ident(text: &str) -> SyntaxNode {
        SyntaxNode::leaf(SyntaxKind::Identifier, Span::default(), text)
    }

    #[test]
    fn test_rule_names_roundtrip() {
        for name in ["package_declaration", "use_clause", "group_declaration"] {
            assert_eq!(SyntaxKind::from_rule_name(name).rule_name(), name);
        }
    }

    #[test]
    fn test_unknown_rule_is_preserved() {
        let kind = SyntaxKind::from_rule_name("nature_declaration");
        assert_eq!(kind, SyntaxKind::Unknown("nature_declaration".to_string()));
        assert_eq!(kind.to_string(), "nature_declaration");
    }

    #[test]
    fn test_signal_mode_alias() {
        assert_eq!(SyntaxKind::from_rule_name("signal_mode"), SyntaxKind::Mode);
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "kind": "identifier_list",
            "span": {"start": 0, "end": 4},
            "text": "a, b",
            "children": [
                {"kind": "identifier", "span": {"start": 0, "end": 1}, "text": "a"},
                {"kind": ",", "span": {"start": 1, "end": 2}, "text": ","},
                {"kind": "identifier", "span": {"start": 3, "end": 4}, "text": "b"}
            ]
        }"#;
        let node = SyntaxNode::from_json(json).unwrap();
        assert_eq!(node.kind, SyntaxKind::IdentifierList);
        let names: Vec<_> = node
            .children_of(&SyntaxKind::Identifier)
            .map(SyntaxNode::trimmed_text)
            .collect();
        assert_eq!(names, vec!["a", "b"]);
        assert!(node.children[1].is_token());
    }

    #[test]
    fn test_malformed_json() {
        let err = SyntaxNode::from_json(r#"{"kind": 3}"#).unwrap_err();
        assert!(err.to_string().starts_with("malformed syntax tree"));
    }

    #[test]
    fn test_serialize_uses_rule_names() {
        let json = serde_json::to_value(ident("clk")).unwrap();
        assert_eq!(json["kind"], "identifier");
    }

    #[test]
    fn test_find_descendant_is_preorder() {
        let inner = SyntaxNode::branch(
            SyntaxKind::SubtypeIndication,
            Span::default(),
            vec![ident("inner")],
        );
        let node = SyntaxNode::branch(
            SyntaxKind::ConstantDeclaration,
            Span::default(),
            vec![inner, ident("outer")],
        );
        let found = node.find_descendant(&SyntaxKind::Identifier).unwrap();
        assert_eq!(found.text, "inner");
        assert_eq!(node.child(&SyntaxKind::Identifier).unwrap().text, "outer");
    }

    #[test]
    fn test_lower_case_leaf_is_not_a_token() {
        let rule = SyntaxNode::leaf(SyntaxKind::from_rule_name("nature_declaration"), Span::default(), "");
        let keyword = SyntaxNode::leaf(SyntaxKind::from_rule_name("SEMI"), Span::default(), ";");
        let punctuation = SyntaxNode::leaf(SyntaxKind::from_rule_name(","), Span::default(), ",");
        assert!(!rule.is_token());
        assert!(keyword.is_token());
        assert!(punctuation.is_token());
        assert!(!ident("x").is_token());
    }

    #[test]
    fn test_source_text_falls_back_to_leaves() {
        let json = r#"{
            "kind": "identifier", "span": {"start": 8, "end": 11},
            "children": [{"kind": "BASIC_IDENTIFIER", "span": {"start": 8, "end": 11}, "text": "pkg"}]
        }"#;
        let node = SyntaxNode::from_json(json).unwrap();
        assert_eq!(node.trimmed_text(), "");
        assert_eq!(node.source_text(), "pkg");

        let empty = SyntaxNode::branch(SyntaxKind::Identifier, Span::default(), vec![]);
        assert_eq!(empty.source_text(), "");
        assert_eq!(ident("  clk ").source_text(), "clk");
    }

    #[test]
    fn test_branch_text() {
        let node = SyntaxNode::branch(
            SyntaxKind::IdentifierList,
            Span::new(0, 4),
            vec![ident("a"), ident("b")],
        );
        assert_eq!(node.text, "a b");
    }
}
