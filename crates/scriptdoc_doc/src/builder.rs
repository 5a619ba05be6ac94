//! Convenience constructors for building document trees in code.
//!
//! Producers that lower an internal representation to documents build a lot
//! of small nodes; these helpers keep that code close to the text it prints.
//!
//! # Example
//! ```
//! use scriptdoc_doc::Doc;
//! let call = Doc::id("T").attr("match_buffer").call(vec![Doc::id("a"), Doc::int(128)]);
//! let stmt = Doc::assign(Doc::id("A"), call);
//! assert!(stmt.is_stmt());
//! ```

use crate::node::*;

impl Doc {
    // ========================================================================
    // Literals and identifiers
    // ========================================================================

    pub fn none() -> Doc {
        Doc::literal(LiteralValue::None)
    }

    pub fn bool(value: bool) -> Doc {
        Doc::literal(LiteralValue::Bool(value))
    }

    pub fn int(value: i64) -> Doc {
        Doc::literal(LiteralValue::Int(value))
    }

    pub fn float(value: f64) -> Doc {
        Doc::literal(LiteralValue::Float(value))
    }

    pub fn str(value: impl Into<String>) -> Doc {
        Doc::literal(LiteralValue::Str(value.into()))
    }

    pub fn literal(value: LiteralValue) -> Doc {
        Doc::Literal(LiteralDoc { value })
    }

    pub fn id(name: impl Into<String>) -> Doc {
        Doc::Id(IdDoc::new(name))
    }

    // ========================================================================
    // Postfix expressions
    // ========================================================================

    /// `self.name`
    pub fn attr(self, name: impl Into<String>) -> Doc {
        Doc::AttrAccess(AttrAccessDoc {
            value: Box::new(self),
            name: name.into(),
        })
    }

    /// `self[indices...]`
    pub fn index(self, indices: Vec<Doc>) -> Doc {
        Doc::Index(IndexDoc {
            value: Box::new(self),
            indices,
        })
    }

    /// `self(args...)`
    pub fn call(self, args: Vec<Doc>) -> Doc {
        self.call_kw(args, Vec::new())
    }

    /// `self(args..., key=value...)`
    pub fn call_kw(self, args: Vec<Doc>, kwargs: Vec<(String, Doc)>) -> Doc {
        Doc::Call(CallDoc {
            callee: Box::new(self),
            args,
            kwargs: kwargs
                .into_iter()
                .map(|(key, value)| KeywordArg { key, value })
                .collect(),
        })
    }

    // ========================================================================
    // Operators and containers
    // ========================================================================

    pub fn op(op: OperationKind, operands: Vec<Doc>) -> Doc {
        Doc::Operation(OperationDoc { op, operands })
    }

    pub fn unary(op: OperationKind, operand: Doc) -> Doc {
        Doc::op(op, vec![operand])
    }

    pub fn binary(op: OperationKind, lhs: Doc, rhs: Doc) -> Doc {
        Doc::op(op, vec![lhs, rhs])
    }

    /// `then if cond else otherwise`
    pub fn if_then_else(cond: Doc, then: Doc, otherwise: Doc) -> Doc {
        Doc::op(OperationKind::IfThenElse, vec![cond, then, otherwise])
    }

    pub fn lambda(args: Vec<IdDoc>, body: Doc) -> Doc {
        Doc::Lambda(LambdaDoc {
            args,
            body: Box::new(body),
        })
    }

    pub fn tuple(elements: Vec<Doc>) -> Doc {
        Doc::Tuple(TupleDoc { elements })
    }

    pub fn list(elements: Vec<Doc>) -> Doc {
        Doc::List(ListDoc { elements })
    }

    pub fn dict(entries: Vec<(Doc, Doc)>) -> Doc {
        Doc::Dict(DictDoc {
            entries: entries
                .into_iter()
                .map(|(key, value)| DictEntry { key, value })
                .collect(),
        })
    }

    pub fn slice(start: Option<Doc>, stop: Option<Doc>, step: Option<Doc>) -> Doc {
        Doc::Slice(SliceDoc {
            start: start.map(Box::new),
            stop: stop.map(Box::new),
            step: step.map(Box::new),
        })
    }

    // ========================================================================
    // Statements
    // ========================================================================

    pub fn block(stmts: Vec<Doc>) -> Doc {
        Doc::StmtBlock(StmtBlockDoc { stmts })
    }

    /// `lhs = rhs`
    pub fn assign(lhs: Doc, rhs: Doc) -> Doc {
        Doc::Assign(AssignDoc::new(lhs, Some(rhs), None))
    }

    /// `expr` as a statement.
    pub fn expr_stmt(expr: Doc) -> Doc {
        Doc::ExprStmt(ExprStmtDoc {
            expr: Box::new(expr),
            comment: None,
        })
    }

    pub fn ret(value: Doc) -> Doc {
        Doc::Return(ReturnDoc {
            value: Box::new(value),
            comment: None,
        })
    }

    pub fn assert(test: Doc, msg: Option<Doc>) -> Doc {
        Doc::Assert(AssertDoc {
            test: Box::new(test),
            msg: msg.map(Box::new),
            comment: None,
        })
    }

    pub fn if_(predicate: Doc, then_branch: Vec<Doc>, else_branch: Vec<Doc>) -> Doc {
        Doc::If(IfDoc {
            predicate: Box::new(predicate),
            then_branch,
            else_branch,
            comment: None,
        })
    }

    pub fn while_(predicate: Doc, body: Vec<Doc>) -> Doc {
        Doc::While(WhileDoc {
            predicate: Box::new(predicate),
            body,
            comment: None,
        })
    }

    pub fn for_(lhs: Doc, rhs: Doc, body: Vec<Doc>) -> Doc {
        Doc::For(ForDoc {
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            body,
            comment: None,
        })
    }

    pub fn scope(lhs: Option<Doc>, rhs: Doc, body: Vec<Doc>) -> Doc {
        Doc::Scope(ScopeDoc {
            lhs: lhs.map(Box::new),
            rhs: Box::new(rhs),
            body,
            comment: None,
        })
    }

    /// Attach a comment to a statement. Expressions and statement blocks
    /// have nowhere to keep one and are returned unchanged.
    pub fn with_comment(mut self, text: impl Into<String>) -> Doc {
        let text = Some(text.into());
        match &mut self {
            Doc::Assign(n) => n.comment = text,
            Doc::If(n) => n.comment = text,
            Doc::While(n) => n.comment = text,
            Doc::For(n) => n.comment = text,
            Doc::Scope(n) => n.comment = text,
            Doc::ExprStmt(n) => n.comment = text,
            Doc::Assert(n) => n.comment = text,
            Doc::Return(n) => n.comment = text,
            Doc::Function(n) => n.comment = text,
            Doc::Class(n) => n.comment = text,
            _ => {}
        }
        self
    }
}

impl IdDoc {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl AssignDoc {
    pub fn new(lhs: Doc, rhs: Option<Doc>, annotation: Option<Doc>) -> Self {
        Self {
            lhs: Box::new(lhs),
            rhs: rhs.map(Box::new),
            annotation: annotation.map(Box::new),
            comment: None,
        }
    }

    /// A function parameter: `name: annotation = default`.
    pub fn param(name: impl Into<String>, annotation: Option<Doc>, default: Option<Doc>) -> Self {
        Self::new(Doc::id(name), default, annotation)
    }
}

impl FunctionDoc {
    pub fn new(name: impl Into<String>, args: Vec<AssignDoc>, body: Vec<Doc>) -> Self {
        Self {
            name: IdDoc::new(name),
            args,
            decorators: Vec::new(),
            return_type: None,
            body,
            comment: None,
        }
    }

    pub fn with_decorators(mut self, decorators: Vec<Doc>) -> Self {
        self.decorators = decorators;
        self
    }

    pub fn with_return_type(mut self, return_type: Doc) -> Self {
        self.return_type = Some(Box::new(return_type));
        self
    }
}

impl ClassDoc {
    pub fn new(name: impl Into<String>, body: Vec<Doc>) -> Self {
        Self {
            name: IdDoc::new(name),
            decorators: Vec::new(),
            body,
            comment: None,
        }
    }

    pub fn with_decorators(mut self, decorators: Vec<Doc>) -> Self {
        self.decorators = decorators;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::DocKind;

    #[test]
    fn test_postfix_chain_nests_inside_out() {
        let doc = Doc::id("T").attr("grid").call(vec![Doc::int(1)]);
        let Doc::Call(call) = doc else {
            panic!("expected a call");
        };
        assert_eq!(call.callee.kind(), DocKind::AttrAccess);
        assert_eq!(call.args, vec![Doc::int(1)]);
    }

    #[test]
    fn test_with_comment_ignores_expressions() {
        let doc = Doc::id("x").with_comment("ignored");
        assert_eq!(doc, Doc::id("x"));

        let stmt = Doc::ret(Doc::id("x")).with_comment("kept");
        assert_eq!(stmt.comment(), Some("kept"));
    }

    #[test]
    fn test_param_maps_default_to_rhs() {
        let param = AssignDoc::param("n", Some(Doc::id("int")), Some(Doc::int(0)));
        assert_eq!(*param.lhs, Doc::id("n"));
        assert_eq!(param.rhs.as_deref(), Some(&Doc::int(0)));
        assert_eq!(param.annotation.as_deref(), Some(&Doc::id("int")));
    }
}
