//! The document dispatcher.
//!
//! A concrete printer supplies its buffer, its indentation width and one
//! `print_*` operation per document kind. [`DocPrinter::append`] matches on
//! the node's kind and calls exactly that operation. The match is
//! exhaustive and none of the `print_*` methods has a default, so a new
//! document kind without a rendering operation fails to compile rather than
//! being skipped at runtime.

use crate::buffer::DocBuffer;
use scriptdoc_doc::node::*;

pub trait DocPrinter {
    /// Indentation width fixed at construction. Only the rendering
    /// operations interpret it.
    fn indent_spaces(&self) -> usize;

    fn buffer(&self) -> &DocBuffer;

    fn buffer_mut(&mut self) -> &mut DocBuffer;

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Render `doc` into the buffer.
    ///
    /// Children are appended by the rendering operation itself, so traversal
    /// order is whatever the operation for this kind decides.
    fn append(&mut self, doc: &Doc) {
        tracing::trace!(kind = %doc.kind(), "append");
        match doc {
            Doc::Literal(n) => self.print_literal(n),
            Doc::Id(n) => self.print_id(n),
            Doc::AttrAccess(n) => self.print_attr_access(n),
            Doc::Index(n) => self.print_index(n),
            Doc::Call(n) => self.print_call(n),
            Doc::Operation(n) => self.print_operation(n),
            Doc::Lambda(n) => self.print_lambda(n),
            Doc::Tuple(n) => self.print_tuple(n),
            Doc::List(n) => self.print_list(n),
            Doc::Dict(n) => self.print_dict(n),
            Doc::Slice(n) => self.print_slice(n),
            Doc::StmtBlock(n) => self.print_stmt_block(n),
            Doc::Assign(n) => self.print_assign(n),
            Doc::If(n) => self.print_if(n),
            Doc::While(n) => self.print_while(n),
            Doc::For(n) => self.print_for(n),
            Doc::Scope(n) => self.print_scope(n),
            Doc::ExprStmt(n) => self.print_expr_stmt(n),
            Doc::Assert(n) => self.print_assert(n),
            Doc::Return(n) => self.print_return(n),
            Doc::Function(n) => self.print_function(n),
            Doc::Class(n) => self.print_class(n),
        }
    }

    /// Append sibling nodes in order.
    fn append_all(&mut self, docs: &[Doc]) {
        for doc in docs {
            self.append(doc);
        }
    }

    // ========================================================================
    // Buffer access
    // ========================================================================

    /// Append a raw text fragment.
    fn append_text(&mut self, fragment: &str) {
        self.buffer_mut().push_str(fragment);
    }

    /// The accumulated text with one trailing newline enforced.
    fn finalize(&self) -> String {
        let text = self.buffer().finalize();
        tracing::debug!(len = text.len(), "finalized printer output");
        text
    }

    // ========================================================================
    // Rendering operations, one per kind
    // ========================================================================

    fn print_literal(&mut self, node: &LiteralDoc);
    fn print_id(&mut self, node: &IdDoc);
    fn print_attr_access(&mut self, node: &AttrAccessDoc);
    fn print_index(&mut self, node: &IndexDoc);
    fn print_call(&mut self, node: &CallDoc);
    fn print_operation(&mut self, node: &OperationDoc);
    fn print_lambda(&mut self, node: &LambdaDoc);
    fn print_tuple(&mut self, node: &TupleDoc);
    fn print_list(&mut self, node: &ListDoc);
    fn print_dict(&mut self, node: &DictDoc);
    fn print_slice(&mut self, node: &SliceDoc);
    fn print_stmt_block(&mut self, node: &StmtBlockDoc);
    fn print_assign(&mut self, node: &AssignDoc);
    fn print_if(&mut self, node: &IfDoc);
    fn print_while(&mut self, node: &WhileDoc);
    fn print_for(&mut self, node: &ForDoc);
    fn print_scope(&mut self, node: &ScopeDoc);
    fn print_expr_stmt(&mut self, node: &ExprStmtDoc);
    fn print_assert(&mut self, node: &AssertDoc);
    fn print_return(&mut self, node: &ReturnDoc);
    fn print_function(&mut self, node: &FunctionDoc);
    fn print_class(&mut self, node: &ClassDoc);
}

#[cfg(test)]
mod tests {
    use super::*;
    use scriptdoc_doc::DocKind;

    /// Writes `<kind>` for every node and recurses into statement bodies, so
    /// tests can observe exactly which operation ran and in what order.
    struct TagPrinter {
        buffer: DocBuffer,
    }

    impl TagPrinter {
        fn new() -> Self {
            Self {
                buffer: DocBuffer::new(),
            }
        }

        fn tag(&mut self, kind: DocKind) {
            self.append_text(&format!("<{kind}>"));
        }
    }

    impl DocPrinter for TagPrinter {
        fn indent_spaces(&self) -> usize {
            2
        }
        fn buffer(&self) -> &DocBuffer {
            &self.buffer
        }
        fn buffer_mut(&mut self) -> &mut DocBuffer {
            &mut self.buffer
        }

        fn print_literal(&mut self, _: &LiteralDoc) {
            self.tag(DocKind::Literal)
        }
        fn print_id(&mut self, node: &IdDoc) {
            self.append_text(&node.name)
        }
        fn print_attr_access(&mut self, _: &AttrAccessDoc) {
            self.tag(DocKind::AttrAccess)
        }
        fn print_index(&mut self, _: &IndexDoc) {
            self.tag(DocKind::Index)
        }
        fn print_call(&mut self, _: &CallDoc) {
            self.tag(DocKind::Call)
        }
        fn print_operation(&mut self, _: &OperationDoc) {
            self.tag(DocKind::Operation)
        }
        fn print_lambda(&mut self, _: &LambdaDoc) {
            self.tag(DocKind::Lambda)
        }
        fn print_tuple(&mut self, _: &TupleDoc) {
            self.tag(DocKind::Tuple)
        }
        fn print_list(&mut self, _: &ListDoc) {
            self.tag(DocKind::List)
        }
        fn print_dict(&mut self, _: &DictDoc) {
            self.tag(DocKind::Dict)
        }
        fn print_slice(&mut self, _: &SliceDoc) {
            self.tag(DocKind::Slice)
        }
        fn print_stmt_block(&mut self, node: &StmtBlockDoc) {
            self.tag(DocKind::StmtBlock);
            self.append_all(&node.stmts);
        }
        fn print_assign(&mut self, node: &AssignDoc) {
            self.tag(DocKind::Assign);
            self.append(&node.lhs);
        }
        fn print_if(&mut self, node: &IfDoc) {
            self.tag(DocKind::If);
            self.append_all(&node.then_branch);
        }
        fn print_while(&mut self, _: &WhileDoc) {
            self.tag(DocKind::While)
        }
        fn print_for(&mut self, _: &ForDoc) {
            self.tag(DocKind::For)
        }
        fn print_scope(&mut self, _: &ScopeDoc) {
            self.tag(DocKind::Scope)
        }
        fn print_expr_stmt(&mut self, _: &ExprStmtDoc) {
            self.tag(DocKind::ExprStmt)
        }
        fn print_assert(&mut self, _: &AssertDoc) {
            self.tag(DocKind::Assert)
        }
        fn print_return(&mut self, _: &ReturnDoc) {
            self.tag(DocKind::Return)
        }
        fn print_function(&mut self, _: &FunctionDoc) {
            self.tag(DocKind::Function)
        }
        fn print_class(&mut self, _: &ClassDoc) {
            self.tag(DocKind::Class)
        }
    }

    #[test]
    fn test_dispatch_routes_by_kind() {
        let mut printer = TagPrinter::new();
        printer.append(&Doc::list(vec![]));
        printer.append(&Doc::ret(Doc::none()));
        assert_eq!(printer.buffer().as_str(), "<list><return>");
    }

    #[test]
    fn test_nesting_follows_rendering_operation() {
        let tree = Doc::block(vec![Doc::if_(
            Doc::id("c"),
            vec![Doc::assign(Doc::id("x"), Doc::int(1))],
            vec![],
        )]);
        let mut printer = TagPrinter::new();
        printer.append(&tree);
        assert_eq!(printer.finalize(), "<stmt_block><if><assign>x\n");
    }

    #[test]
    fn test_append_text_is_raw() {
        let mut printer = TagPrinter::new();
        printer.append_text("a\"\tb");
        assert_eq!(printer.buffer().as_str(), "a\"\tb");
        assert_eq!(printer.indent_spaces(), 2);
    }
}
