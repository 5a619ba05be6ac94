//! Document node definitions.
//!
//! Every node kind the printer understands is a variant of [`Doc`]. Payload
//! structs hold child nodes by value (boxed where recursive), so a tree is
//! owned by its root and is never mutated once built.
//!
//! The serde representation is the document interchange format read by the
//! `sdoc` CLI: each node is a JSON object tagged with `"kind"`.

use crate::kind::DocKind;
use serde::{Deserialize, Serialize};

// ============================================================================
// Document Node
// ============================================================================

/// A document node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Doc {
    // -- Expressions --
    Literal(LiteralDoc),
    Id(IdDoc),
    AttrAccess(AttrAccessDoc),
    Index(IndexDoc),
    Call(CallDoc),
    Operation(OperationDoc),
    Lambda(LambdaDoc),
    Tuple(TupleDoc),
    List(ListDoc),
    Dict(DictDoc),
    Slice(SliceDoc),

    // -- Statements --
    StmtBlock(StmtBlockDoc),
    Assign(AssignDoc),
    If(IfDoc),
    While(WhileDoc),
    For(ForDoc),
    Scope(ScopeDoc),
    ExprStmt(ExprStmtDoc),
    Assert(AssertDoc),
    Return(ReturnDoc),
    Function(FunctionDoc),
    Class(ClassDoc),
}

impl Doc {
    /// The kind tag of this node.
    pub fn kind(&self) -> DocKind {
        match self {
            Doc::Literal(_) => DocKind::Literal,
            Doc::Id(_) => DocKind::Id,
            Doc::AttrAccess(_) => DocKind::AttrAccess,
            Doc::Index(_) => DocKind::Index,
            Doc::Call(_) => DocKind::Call,
            Doc::Operation(_) => DocKind::Operation,
            Doc::Lambda(_) => DocKind::Lambda,
            Doc::Tuple(_) => DocKind::Tuple,
            Doc::List(_) => DocKind::List,
            Doc::Dict(_) => DocKind::Dict,
            Doc::Slice(_) => DocKind::Slice,
            Doc::StmtBlock(_) => DocKind::StmtBlock,
            Doc::Assign(_) => DocKind::Assign,
            Doc::If(_) => DocKind::If,
            Doc::While(_) => DocKind::While,
            Doc::For(_) => DocKind::For,
            Doc::Scope(_) => DocKind::Scope,
            Doc::ExprStmt(_) => DocKind::ExprStmt,
            Doc::Assert(_) => DocKind::Assert,
            Doc::Return(_) => DocKind::Return,
            Doc::Function(_) => DocKind::Function,
            Doc::Class(_) => DocKind::Class,
        }
    }

    pub fn is_expr(&self) -> bool {
        self.kind().is_expr()
    }

    pub fn is_stmt(&self) -> bool {
        self.kind().is_stmt()
    }

    /// The comment attached to a statement, if any. Expressions and
    /// statement blocks never carry comments.
    pub fn comment(&self) -> Option<&str> {
        let comment = match self {
            Doc::Assign(n) => &n.comment,
            Doc::If(n) => &n.comment,
            Doc::While(n) => &n.comment,
            Doc::For(n) => &n.comment,
            Doc::Scope(n) => &n.comment,
            Doc::ExprStmt(n) => &n.comment,
            Doc::Assert(n) => &n.comment,
            Doc::Return(n) => &n.comment,
            Doc::Function(n) => &n.comment,
            Doc::Class(n) => &n.comment,
            _ => return None,
        };
        comment.as_deref()
    }
}

// ============================================================================
// Expression Nodes
// ============================================================================

/// A literal value.
///
/// Serialized as a bare JSON scalar. Integers are tried before floats so that
/// `1` stays an integer and `1.0` stays a float.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LiteralValue {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LiteralDoc {
    pub value: LiteralValue,
}

/// A bare identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IdDoc {
    pub name: String,
}

/// `value.name`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttrAccessDoc {
    pub value: Box<Doc>,
    pub name: String,
}

/// `value[indices...]`. Indices are expressions or slices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IndexDoc {
    pub value: Box<Doc>,
    #[serde(default)]
    pub indices: Vec<Doc>,
}

/// A keyword argument of a call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeywordArg {
    pub key: String,
    pub value: Doc,
}

/// `callee(args..., key=value...)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CallDoc {
    pub callee: Box<Doc>,
    #[serde(default)]
    pub args: Vec<Doc>,
    #[serde(default)]
    pub kwargs: Vec<KeywordArg>,
}

/// The operator of an [`OperationDoc`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationKind {
    // Unary
    UAdd,
    USub,
    Invert,
    Not,
    // Binary
    Add,
    Sub,
    Mult,
    Div,
    FloorDiv,
    Mod,
    Pow,
    LShift,
    RShift,
    BitAnd,
    BitOr,
    BitXor,
    Lt,
    LtE,
    Eq,
    NotEq,
    Gt,
    GtE,
    And,
    Or,
    // Special
    IfThenElse,
}

impl OperationKind {
    pub fn is_unary(self) -> bool {
        matches!(
            self,
            OperationKind::UAdd | OperationKind::USub | OperationKind::Invert | OperationKind::Not
        )
    }

    pub fn is_binary(self) -> bool {
        !self.is_unary() && !self.is_special()
    }

    pub fn is_special(self) -> bool {
        self == OperationKind::IfThenElse
    }

    /// Number of operands the operator takes.
    pub fn arity(self) -> usize {
        if self.is_unary() {
            1
        } else if self.is_special() {
            3
        } else {
            2
        }
    }
}

/// An operator applied to operands.
///
/// `IfThenElse` takes `[condition, then, else]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OperationDoc {
    pub op: OperationKind,
    pub operands: Vec<Doc>,
}

/// `lambda args: body`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LambdaDoc {
    #[serde(default)]
    pub args: Vec<IdDoc>,
    pub body: Box<Doc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TupleDoc {
    #[serde(default)]
    pub elements: Vec<Doc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListDoc {
    #[serde(default)]
    pub elements: Vec<Doc>,
}

/// One `key: value` pair of a dict literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DictEntry {
    pub key: Doc,
    pub value: Doc,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DictDoc {
    #[serde(default)]
    pub entries: Vec<DictEntry>,
}

/// `start:stop:step`, each part optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SliceDoc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<Box<Doc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop: Option<Box<Doc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<Box<Doc>>,
}

// ============================================================================
// Statement Nodes
// ============================================================================

/// A sequence of statements rendered at the current indentation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StmtBlockDoc {
    #[serde(default)]
    pub stmts: Vec<Doc>,
}

/// `lhs: annotation = rhs`. At least one of `rhs` and `annotation` is
/// expected; the printer does not check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssignDoc {
    pub lhs: Box<Doc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rhs: Option<Box<Doc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<Box<Doc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IfDoc {
    pub predicate: Box<Doc>,
    #[serde(default)]
    pub then_branch: Vec<Doc>,
    #[serde(default)]
    pub else_branch: Vec<Doc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WhileDoc {
    pub predicate: Box<Doc>,
    #[serde(default)]
    pub body: Vec<Doc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// `for lhs in rhs:`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForDoc {
    pub lhs: Box<Doc>,
    pub rhs: Box<Doc>,
    #[serde(default)]
    pub body: Vec<Doc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// `with rhs as lhs:`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScopeDoc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lhs: Option<Box<Doc>>,
    pub rhs: Box<Doc>,
    #[serde(default)]
    pub body: Vec<Doc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExprStmtDoc {
    pub expr: Box<Doc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssertDoc {
    pub test: Box<Doc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<Box<Doc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReturnDoc {
    pub value: Box<Doc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// A function definition. Each argument is an [`AssignDoc`] whose `lhs` is the
/// parameter name, `annotation` its type and `rhs` its default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FunctionDoc {
    pub name: IdDoc,
    #[serde(default)]
    pub args: Vec<AssignDoc>,
    #[serde(default)]
    pub decorators: Vec<Doc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<Box<Doc>>,
    #[serde(default)]
    pub body: Vec<Doc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassDoc {
    pub name: IdDoc,
    #[serde(default)]
    pub decorators: Vec<Doc>,
    #[serde(default)]
    pub body: Vec<Doc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

// ============================================================================
// Conversions
// ============================================================================

macro_rules! impl_from_payload {
    ($($payload:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$payload> for Doc {
                fn from(node: $payload) -> Self {
                    Doc::$variant(node)
                }
            }
        )*
    };
}

impl_from_payload! {
    LiteralDoc => Literal,
    IdDoc => Id,
    AttrAccessDoc => AttrAccess,
    IndexDoc => Index,
    CallDoc => Call,
    OperationDoc => Operation,
    LambdaDoc => Lambda,
    TupleDoc => Tuple,
    ListDoc => List,
    DictDoc => Dict,
    SliceDoc => Slice,
    StmtBlockDoc => StmtBlock,
    AssignDoc => Assign,
    IfDoc => If,
    WhileDoc => While,
    ForDoc => For,
    ScopeDoc => Scope,
    ExprStmtDoc => ExprStmt,
    AssertDoc => Assert,
    ReturnDoc => Return,
    FunctionDoc => Function,
    ClassDoc => Class,
}
