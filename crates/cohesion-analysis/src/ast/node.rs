//! Node types for the analysis tree.

use std::fmt;
use std::path::PathBuf;

use cohesion_core::types::collections::SmallVec8;
use serde::{Deserialize, Serialize};

/// Handle of a node inside an [`AstTree`](super::AstTree) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Cursor kind of a node, modeled on clang's declaration/expression kinds.
///
/// Only `ClassDecl`/`StructDecl`, `Method`, `Field` and `MemberRefExpr` carry
/// meaning for the engine; every other kind is structure it walks through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    TranslationUnit,
    Namespace,
    ClassDecl,
    StructDecl,
    UnionDecl,
    ClassTemplate,
    Method,
    Constructor,
    Destructor,
    Function,
    FunctionTemplate,
    Field,
    /// Static data members and other non-field variables.
    Variable,
    /// Access to a data member or member function, explicit (`p->x`) or implicit (`x`).
    MemberRefExpr,
    Other,
}

impl NodeKind {
    /// Kinds that open a class scope of their own: `class` and `struct`.
    #[inline]
    pub const fn is_class(self) -> bool {
        matches!(self, Self::ClassDecl | Self::StructDecl)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::TranslationUnit => "translation_unit",
            Self::Namespace => "namespace",
            Self::ClassDecl => "class_decl",
            Self::StructDecl => "struct_decl",
            Self::UnionDecl => "union_decl",
            Self::ClassTemplate => "class_template",
            Self::Method => "method",
            Self::Constructor => "constructor",
            Self::Destructor => "destructor",
            Self::Function => "function",
            Self::FunctionTemplate => "function_template",
            Self::Field => "field",
            Self::Variable => "variable",
            Self::MemberRefExpr => "member_ref_expr",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// File and 1-based line of a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub file: PathBuf,
    pub line: u32,
}

impl SourceLocation {
    pub fn new(file: impl Into<PathBuf>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

/// One node of the tree. Children are listed in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceNode {
    pub kind: NodeKind,
    /// Identifier text; empty for anonymous entities.
    pub spelling: String,
    pub location: SourceLocation,
    /// Enclosing node; `None` only at the root.
    pub lexical_parent: Option<NodeId>,
    pub children: SmallVec8<NodeId>,
}
