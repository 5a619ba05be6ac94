//! DocKind enum - the tag of every document node.

/// The kind of a document node.
///
/// The set is closed: adding a variant here is a breaking change that must be
/// matched by a `Doc` variant, a dispatch arm and a rendering operation in
/// every printer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum DocKind {
    // ========================================================================
    // Expressions
    // ========================================================================
    Literal = 0,
    Id = 1,
    AttrAccess = 2,
    Index = 3,
    Call = 4,
    Operation = 5,
    Lambda = 6,
    Tuple = 7,
    List = 8,
    Dict = 9,
    Slice = 10,

    // ========================================================================
    // Statements
    // ========================================================================
    StmtBlock = 11,
    Assign = 12,
    If = 13,
    While = 14,
    For = 15,
    Scope = 16,
    ExprStmt = 17,
    Assert = 18,
    Return = 19,
    Function = 20,
    Class = 21,
}

impl DocKind {
    /// Every kind, in declaration order.
    pub const ALL: [DocKind; 22] = [
        DocKind::Literal,
        DocKind::Id,
        DocKind::AttrAccess,
        DocKind::Index,
        DocKind::Call,
        DocKind::Operation,
        DocKind::Lambda,
        DocKind::Tuple,
        DocKind::List,
        DocKind::Dict,
        DocKind::Slice,
        DocKind::StmtBlock,
        DocKind::Assign,
        DocKind::If,
        DocKind::While,
        DocKind::For,
        DocKind::Scope,
        DocKind::ExprStmt,
        DocKind::Assert,
        DocKind::Return,
        DocKind::Function,
        DocKind::Class,
    ];

    /// The serialized tag of this kind.
    pub fn name(self) -> &'static str {
        match self {
            DocKind::Literal => "literal",
            DocKind::Id => "id",
            DocKind::AttrAccess => "attr_access",
            DocKind::Index => "index",
            DocKind::Call => "call",
            DocKind::Operation => "operation",
            DocKind::Lambda => "lambda",
            DocKind::Tuple => "tuple",
            DocKind::List => "list",
            DocKind::Dict => "dict",
            DocKind::Slice => "slice",
            DocKind::StmtBlock => "stmt_block",
            DocKind::Assign => "assign",
            DocKind::If => "if",
            DocKind::While => "while",
            DocKind::For => "for",
            DocKind::Scope => "scope",
            DocKind::ExprStmt => "expr_stmt",
            DocKind::Assert => "assert",
            DocKind::Return => "return",
            DocKind::Function => "function",
            DocKind::Class => "class",
        }
    }

    /// Look up a kind by its serialized tag.
    pub fn from_name(name: &str) -> Option<DocKind> {
        DocKind::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    /// Whether nodes of this kind are expressions.
    ///
    /// Slices count as expressions: they only ever appear inside an index.
    pub fn is_expr(self) -> bool {
        (self as u8) <= DocKind::Slice as u8
    }

    /// Whether nodes of this kind are statements.
    pub fn is_stmt(self) -> bool {
        !self.is_expr()
    }

    /// Whether statements of this kind open an indented body.
    pub fn has_body(self) -> bool {
        matches!(
            self,
            DocKind::If
                | DocKind::While
                | DocKind::For
                | DocKind::Scope
                | DocKind::Function
                | DocKind::Class
        )
    }

    /// All kind tags joined with `", "`, for diagnostics.
    pub fn known_names() -> String {
        DocKind::ALL
            .iter()
            .map(|kind| kind.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for DocKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
