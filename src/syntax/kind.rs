//! Node kinds of the syntax tree.
//!
//! Kinds that the classifier needs to look inside carry the ids of the
//! relevant children (the sole name of a value spec, the selected member of
//! a selector, ...). Everything else is a plain tag.

use smol_str::SmolStr;

use super::NodeId;

/// The kind of a syntax node.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// File root. The package clause name is an identifier child.
    File,
    Comment,
    CommentGroup,
    /// `import (...)`, `var (...)`, `const (...)`, `type (...)`.
    DeclGroup { specs: Vec<NodeId> },
    FuncDecl { name: NodeId },
    ImportSpec,
    /// One spec of a `var`/`const` declaration.
    ValueSpec { names: Vec<NodeId> },
    TypeSpec { name: NodeId },
    Stmt(StmtKind),
    Type(TypeKind),
    KeyValue,
    /// Case of a `select` statement.
    CommClause,
    Ellipsis,
    /// Struct field, interface method, parameter or result.
    Field { names: Vec<NodeId> },
    FieldList,
    BasicLit(LitKind),
    Selector { sel: NodeId },
    Ident(SmolStr),
    /// `*x`: a pointer type or a dereference, depending on the semantic model.
    Star,
    Expr(ExprKind),
    /// Placeholder left by error recovery.
    Bad,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StmtKind {
    Assign,
    Block,
    Branch,
    CaseClause,
    Decl,
    Defer,
    Empty,
    Expr,
    For,
    Go,
    If,
    IncDec,
    Labeled,
    Range,
    Return,
    Select,
    Send,
    Switch,
    TypeSwitch,
}

/// Composite type expressions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Array,
    Struct,
    Func,
    Interface,
    Map,
    Chan,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LitKind {
    Int,
    Float,
    Imag,
    Char,
    String,
}

/// Value-producing expressions without a dedicated kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExprKind {
    Call,
    Binary,
    Unary,
    Paren,
    Index,
    Slice,
    TypeAssert,
    CompositeLit,
    FuncLit,
}

impl NodeKind {
    /// Human readable name, used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::File => "File",
            NodeKind::Comment => "Comment",
            NodeKind::CommentGroup => "CommentGroup",
            NodeKind::DeclGroup { .. } => "DeclGroup",
            NodeKind::FuncDecl { .. } => "FuncDecl",
            NodeKind::ImportSpec => "ImportSpec",
            NodeKind::ValueSpec { .. } => "ValueSpec",
            NodeKind::TypeSpec { .. } => "TypeSpec",
            NodeKind::Stmt(kind) => kind.name(),
            NodeKind::Type(kind) => kind.name(),
            NodeKind::KeyValue => "KeyValueExpr",
            NodeKind::CommClause => "CommClause",
            NodeKind::Ellipsis => "Ellipsis",
            NodeKind::Field { .. } => "Field",
            NodeKind::FieldList => "FieldList",
            NodeKind::BasicLit(_) => "BasicLit",
            NodeKind::Selector { .. } => "SelectorExpr",
            NodeKind::Ident(_) => "Ident",
            NodeKind::Star => "StarExpr",
            NodeKind::Expr(kind) => kind.name(),
            NodeKind::Bad => "Bad",
        }
    }

    pub fn is_ident(&self) -> bool {
        matches!(self, NodeKind::Ident(_))
    }

    /// The identifier text, if this is an identifier.
    pub fn ident_text(&self) -> Option<&str> {
        match self {
            NodeKind::Ident(name) => Some(name.as_str()),
            _ => None,
        }
    }
}

impl StmtKind {
    pub fn name(self) -> &'static str {
        match self {
            StmtKind::Assign => "AssignStmt",
            StmtKind::Block => "BlockStmt",
            StmtKind::Branch => "BranchStmt",
            StmtKind::CaseClause => "CaseClause",
            StmtKind::Decl => "DeclStmt",
            StmtKind::Defer => "DeferStmt",
            StmtKind::Empty => "EmptyStmt",
            StmtKind::Expr => "ExprStmt",
            StmtKind::For => "ForStmt",
            StmtKind::Go => "GoStmt",
            StmtKind::If => "IfStmt",
            StmtKind::IncDec => "IncDecStmt",
            StmtKind::Labeled => "LabeledStmt",
            StmtKind::Range => "RangeStmt",
            StmtKind::Return => "ReturnStmt",
            StmtKind::Select => "SelectStmt",
            StmtKind::Send => "SendStmt",
            StmtKind::Switch => "SwitchStmt",
            StmtKind::TypeSwitch => "TypeSwitchStmt",
        }
    }
}

impl TypeKind {
    pub fn name(self) -> &'static str {
        match self {
            TypeKind::Array => "ArrayType",
            TypeKind::Struct => "StructType",
            TypeKind::Func => "FuncType",
            TypeKind::Interface => "InterfaceType",
            TypeKind::Map => "MapType",
            TypeKind::Chan => "ChanType",
        }
    }
}

impl ExprKind {
    pub fn name(self) -> &'static str {
        match self {
            ExprKind::Call => "CallExpr",
            ExprKind::Binary => "BinaryExpr",
            ExprKind::Unary => "UnaryExpr",
            ExprKind::Paren => "ParenExpr",
            ExprKind::Index => "IndexExpr",
            ExprKind::Slice => "SliceExpr",
            ExprKind::TypeAssert => "TypeAssertExpr",
            ExprKind::CompositeLit => "CompositeLit",
            ExprKind::FuncLit => "FuncLit",
        }
    }
}
