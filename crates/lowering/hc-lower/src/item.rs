//! Classification of package declarative items

use hc_syntax::{SyntaxKind, SyntaxNode};

/// One item of a package declarative part, by what the scope builder does with it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarativeItem<'a> {
    Subprogram(&'a SyntaxNode),
    Package(&'a SyntaxNode),
    Type(&'a SyntaxNode),
    Subtype(&'a SyntaxNode),
    Constant(&'a SyntaxNode),
    Signal(&'a SyntaxNode),
    Variable(&'a SyntaxNode),
    Component(&'a SyntaxNode),
    /// Valid syntax that is reported and skipped
    Unsupported(UnsupportedItem, &'a SyntaxNode),
}

/// Recognized but unsupported item kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnsupportedItem {
    SubprogramInstantiation,
    PackageInstantiation,
    File,
    Alias,
    AttributeDeclaration,
    AttributeSpecification,
    DisconnectionSpecification,
    UseClause,
    GroupTemplate,
    Group,
    /// Anything the grammar allows that is not listed above
    Other,
}

impl UnsupportedItem {
    /// Label reported to the diagnostic sink
    pub fn label(self) -> &'static str {
        match self {
            Self::SubprogramInstantiation => {
                "PackageHeaderParser.visitPackage_declarative_item - subprogram_instantiation_declaration"
            }
            Self::PackageInstantiation => {
                "PackageHeaderParser.visitPackage_declarative_item - package_instantiation_declaration"
            }
            Self::File => "PackageHeaderParser.visitFile_declaration",
            Self::Alias => "PackageHeaderParser.visitAlias_declaration",
            Self::AttributeDeclaration => "PackageHeaderParser.visitAttribute_declaration",
            Self::AttributeSpecification => "PackageHeaderParser.visitAttribute_specification",
            Self::DisconnectionSpecification => {
                "PackageHeaderParser.visitDisconnection_specification"
            }
            Self::UseClause => "PackageHeaderParser.visitUse_clause",
            Self::GroupTemplate => "PackageHeaderParser.visitGroup_template_declaration",
            Self::Group => "PackageHeaderParser.visitGroup_declaration",
            Self::Other => "VhdlPackageHeaderParser.visitPackage_declarative_item",
        }
    }
}

/// Kinds a wrapper is searched for, in dispatch priority order
const RECOGNIZED: [SyntaxKind; 18] = [
    SyntaxKind::SubprogramDeclaration,
    SyntaxKind::SubprogramInstantiationDeclaration,
    SyntaxKind::PackageDeclaration,
    SyntaxKind::PackageInstantiationDeclaration,
    SyntaxKind::TypeDeclaration,
    SyntaxKind::SubtypeDeclaration,
    SyntaxKind::ConstantDeclaration,
    SyntaxKind::SignalDeclaration,
    SyntaxKind::VariableDeclaration,
    SyntaxKind::FileDeclaration,
    SyntaxKind::AliasDeclaration,
    SyntaxKind::AttributeDeclaration,
    SyntaxKind::AttributeSpecification,
    SyntaxKind::DisconnectionSpecification,
    SyntaxKind::UseClause,
    SyntaxKind::GroupTemplateDeclaration,
    SyntaxKind::GroupDeclaration,
    SyntaxKind::ComponentDeclaration,
];

impl<'a> DeclarativeItem<'a> {
    /// Classifies a `package_declarative_item` wrapper or a bare declaration
    ///
    /// A wrapper is classified by its first child matching the recognized
    /// kinds in priority order. A wrapper with none of them is `Other`, and
    /// so is any bare node of an unrecognized kind.
    pub fn classify(node: &'a SyntaxNode) -> Self {
        if node.kind != SyntaxKind::PackageDeclarativeItem {
            return Self::from_declaration(node);
        }
        RECOGNIZED
            .iter()
            .find_map(|kind| node.child(kind))
            .map_or(Self::Unsupported(UnsupportedItem::Other, node), Self::from_declaration)
    }

    fn from_declaration(node: &'a SyntaxNode) -> Self {
        let unsupported = |item| Self::Unsupported(item, node);
        match node.kind {
            SyntaxKind::SubprogramDeclaration => Self::Subprogram(node),
            SyntaxKind::SubprogramInstantiationDeclaration => {
                unsupported(UnsupportedItem::SubprogramInstantiation)
            }
            SyntaxKind::PackageDeclaration => Self::Package(node),
            SyntaxKind::PackageInstantiationDeclaration => {
                unsupported(UnsupportedItem::PackageInstantiation)
            }
            SyntaxKind::TypeDeclaration => Self::Type(node),
            SyntaxKind::SubtypeDeclaration => Self::Subtype(node),
            SyntaxKind::ConstantDeclaration => Self::Constant(node),
            SyntaxKind::SignalDeclaration => Self::Signal(node),
            SyntaxKind::VariableDeclaration => Self::Variable(node),
            SyntaxKind::FileDeclaration => unsupported(UnsupportedItem::File),
            SyntaxKind::AliasDeclaration => unsupported(UnsupportedItem::Alias),
            SyntaxKind::AttributeDeclaration => unsupported(UnsupportedItem::AttributeDeclaration),
            SyntaxKind::AttributeSpecification => {
                unsupported(UnsupportedItem::AttributeSpecification)
            }
            SyntaxKind::DisconnectionSpecification => {
                unsupported(UnsupportedItem::DisconnectionSpecification)
            }
            SyntaxKind::UseClause => unsupported(UnsupportedItem::UseClause),
            SyntaxKind::GroupTemplateDeclaration => unsupported(UnsupportedItem::GroupTemplate),
            SyntaxKind::GroupDeclaration => unsupported(UnsupportedItem::Group),
            SyntaxKind::ComponentDeclaration => Self::Component(node),
            _ => unsupported(UnsupportedItem::Other),
        }
    }

    /// The node the item was classified from
    pub fn node(self) -> &'a SyntaxNode {
        match self {
            Self::Subprogram(node)
            | Self::Package(node)
            | Self::Type(node)
            | Self::Subtype(node)
            | Self::Constant(node)
            | Self::Signal(node)
            | Self::Variable(node)
            | Self::Component(node)
            | Self::Unsupported(_, node) => node,
        }
    }
}
