//! Normalized HDL abstract syntax
//!
//! Every node here is owned by exactly one container: a declaration belongs to
//! the [`Idspace`] that lists it, a nested package is stored by value inside
//! its parent. Lowering passes build these bottom-up and move them upward.

pub mod pretty;

pub use pretty::{Outline, outline};

use hc_intern::Symbol;
use hc_span::FileSpan;

/// Named declaration container (a VHDL package declaration)
#[derive(Debug, PartialEq)]
pub struct Idspace {
    /// Package name
    pub name: Symbol,
    /// Holds declarations only, no executable statements
    pub defs_only: bool,
    /// Declarations in source order
    pub objs: Vec<Declaration>,
    /// Source location
    pub span: FileSpan,
}

impl Idspace {
    /// Creates an empty declaration-only scope
    pub fn new(name: Symbol, span: FileSpan) -> Self {
        Self {
            name,
            defs_only: true,
            objs: Vec::new(),
            span,
        }
    }
}

/// One entry of an [`Idspace`]
#[derive(Debug, PartialEq)]
pub enum Declaration {
    /// Function or procedure declaration
    Subprogram(SubprogramDecl),
    /// Type declaration
    Type(TypeDecl),
    /// Subtype declaration
    Subtype(SubtypeDecl),
    /// Constant, one per declared name
    Constant(IdDef),
    /// Signal, one per declared name
    Signal(IdDef),
    /// Variable, one per declared name
    Variable(IdDef),
    /// Nested package
    Package(Idspace),
    /// Component signature
    Component(ModuleDec),
}

impl Declaration {
    /// Declared name
    pub fn name(&self) -> Symbol {
        match self {
            Self::Subprogram(decl) => decl.name,
            Self::Type(decl) => decl.name,
            Self::Subtype(decl) => decl.name,
            Self::Constant(def) | Self::Signal(def) | Self::Variable(def) => def.name,
            Self::Package(idspace) => idspace.name,
            Self::Component(module) => module.name,
        }
    }

    /// Keyword naming the declaration kind
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Subprogram(decl) => decl.kind.keyword(),
            Self::Type(_) => "type",
            Self::Subtype(_) => "subtype",
            Self::Constant(_) => "constant",
            Self::Signal(_) => "signal",
            Self::Variable(_) => "variable",
            Self::Package(_) => "package",
            Self::Component(_) => "component",
        }
    }

    /// Source location
    pub fn span(&self) -> FileSpan {
        match self {
            Self::Subprogram(decl) => decl.span,
            Self::Type(decl) => decl.span,
            Self::Subtype(decl) => decl.span,
            Self::Constant(def) | Self::Signal(def) | Self::Variable(def) => def.span,
            Self::Package(idspace) => idspace.span,
            Self::Component(module) => module.span,
        }
    }
}

/// Component/module signature: generics and ports, no body
#[derive(Debug, PartialEq)]
pub struct ModuleDec {
    /// Component name
    pub name: Symbol,
    /// Generic parameters in declaration order
    pub generics: Vec<IdDef>,
    /// Ports in declaration order
    pub ports: Vec<IdDef>,
    /// Source location
    pub span: FileSpan,
}

impl ModuleDec {
    /// Creates a signature with empty generic and port lists
    pub fn new(name: Symbol, span: FileSpan) -> Self {
        Self {
            name,
            generics: Vec::new(),
            ports: Vec::new(),
            span,
        }
    }
}

/// Declaration of a single named object
#[derive(Debug, PartialEq)]
pub struct IdDef {
    /// Object name
    pub name: Symbol,
    /// Object class
    pub kind: ObjectKind,
    /// Port or parameter mode
    pub direction: Option<Direction>,
    /// Subtype indication
    pub ty: Option<Expr>,
    /// Default or initial value
    pub value: Option<Expr>,
    /// Source location of the declaring statement
    pub span: FileSpan,
}

/// Object class of an [`IdDef`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// `constant`
    Constant,
    /// `signal`
    Signal,
    /// `variable`
    Variable,
    /// Generic of a component or package
    Generic,
    /// Port of a component
    Port,
    /// Subprogram parameter
    Parameter,
}

impl ObjectKind {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Constant => "constant",
            Self::Signal => "signal",
            Self::Variable => "variable",
            Self::Generic => "generic",
            Self::Port => "port",
            Self::Parameter => "parameter",
        }
    }
}

/// Port and parameter modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    In,
    Out,
    Inout,
    Buffer,
    Linkage,
}

impl Direction {
    /// Parses a mode keyword, ignoring case
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.trim().to_ascii_lowercase().as_str() {
            "in" => Some(Self::In),
            "out" => Some(Self::Out),
            "inout" => Some(Self::Inout),
            "buffer" => Some(Self::Buffer),
            "linkage" => Some(Self::Linkage),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
            Self::Inout => "inout",
            Self::Buffer => "buffer",
            Self::Linkage => "linkage",
        }
    }
}

/// Expression or subtype indication kept as written
///
/// Expression lowering is a later pass; declarations only carry the fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expr {
    /// Source text
    pub text: String,
    /// Source location
    pub span: FileSpan,
}

/// Type declaration
#[derive(Debug, PartialEq)]
pub struct TypeDecl {
    /// Type name
    pub name: Symbol,
    /// Definition
    pub definition: TypeDef,
    /// Source location
    pub span: FileSpan,
}

/// Type definition forms
#[derive(Debug, PartialEq)]
pub enum TypeDef {
    /// Enumeration literals in declaration order
    Enumeration(Vec<Symbol>),
    /// Incomplete type declaration (`type t;`)
    Incomplete,
    /// Any other definition, kept as written
    Other(Expr),
}

/// Subtype declaration
#[derive(Debug, PartialEq)]
pub struct SubtypeDecl {
    /// Subtype name
    pub name: Symbol,
    /// Base type mark and constraint
    pub indication: Expr,
    /// Source location
    pub span: FileSpan,
}

/// Function or procedure declaration (specification only)
#[derive(Debug, PartialEq)]
pub struct SubprogramDecl {
    /// Designator
    pub name: Symbol,
    /// Function or procedure
    pub kind: SubprogramKind,
    /// Formal parameters
    pub params: Vec<IdDef>,
    /// Return type mark, functions only
    pub return_type: Option<Expr>,
    /// Source location
    pub span: FileSpan,
}

/// Subprogram flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubprogramKind {
    Function,
    Procedure,
}

impl SubprogramKind {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Function => "function",
            Self::Procedure => "procedure",
        }
    }
}
