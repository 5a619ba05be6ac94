//! Document visitor trait for traversing document trees.
//!
//! Provides a `DocVisitor` trait for customizable traversal and a
//! `for_each_child` function for generic iteration over direct children.

use crate::kind::DocKind;
use crate::node::*;
use std::collections::BTreeMap;

/// A visitor over a document tree. Implement the hooks you need; the default
/// implementations walk into every child in source order.
pub trait DocVisitor {
    fn visit_doc(&mut self, doc: &Doc) {
        self.walk_doc(doc);
    }

    /// Visit the direct children of `doc`, in the order the printer emits them.
    fn walk_doc(&mut self, doc: &Doc) {
        for_each_child(doc, |child| self.visit_doc(child));
    }
}

/// Call `f` on each direct child of `doc`, in print order.
///
/// Function parameters and lambda arguments are visited as the nodes they
/// contain (the parameter's name, annotation and default), since they are not
/// `Doc` values themselves.
pub fn for_each_child<'d>(doc: &'d Doc, mut f: impl FnMut(&'d Doc)) {
    match doc {
        Doc::Literal(_) | Doc::Id(_) => {}
        Doc::AttrAccess(n) => f(&n.value),
        Doc::Index(n) => {
            f(&n.value);
            n.indices.iter().for_each(&mut f);
        }
        Doc::Call(n) => {
            f(&n.callee);
            n.args.iter().for_each(&mut f);
            for kwarg in &n.kwargs {
                f(&kwarg.value);
            }
        }
        Doc::Operation(n) => n.operands.iter().for_each(&mut f),
        Doc::Lambda(n) => f(&n.body),
        Doc::Tuple(n) => n.elements.iter().for_each(&mut f),
        Doc::List(n) => n.elements.iter().for_each(&mut f),
        Doc::Dict(n) => {
            for entry in &n.entries {
                f(&entry.key);
                f(&entry.value);
            }
        }
        Doc::Slice(n) => {
            for part in [&n.start, &n.stop, &n.step].into_iter().flatten() {
                f(part);
            }
        }
        Doc::StmtBlock(n) => n.stmts.iter().for_each(&mut f),
        Doc::Assign(n) => walk_assign(n, &mut f),
        Doc::If(n) => {
            f(&n.predicate);
            n.then_branch.iter().for_each(&mut f);
            n.else_branch.iter().for_each(&mut f);
        }
        Doc::While(n) => {
            f(&n.predicate);
            n.body.iter().for_each(&mut f);
        }
        Doc::For(n) => {
            f(&n.lhs);
            f(&n.rhs);
            n.body.iter().for_each(&mut f);
        }
        Doc::Scope(n) => {
            f(&n.rhs);
            if let Some(lhs) = &n.lhs {
                f(lhs);
            }
            n.body.iter().for_each(&mut f);
        }
        Doc::ExprStmt(n) => f(&n.expr),
        Doc::Assert(n) => {
            f(&n.test);
            if let Some(msg) = &n.msg {
                f(msg);
            }
        }
        Doc::Return(n) => f(&n.value),
        Doc::Function(n) => {
            n.decorators.iter().for_each(&mut f);
            for arg in &n.args {
                walk_assign(arg, &mut f);
            }
            if let Some(ret) = &n.return_type {
                f(ret);
            }
            n.body.iter().for_each(&mut f);
        }
        Doc::Class(n) => {
            n.decorators.iter().for_each(&mut f);
            n.body.iter().for_each(&mut f);
        }
    }
}

fn walk_assign<'d>(node: &'d AssignDoc, f: &mut impl FnMut(&'d Doc)) {
    f(&node.lhs);
    if let Some(annotation) = &node.annotation {
        f(annotation);
    }
    if let Some(rhs) = &node.rhs {
        f(rhs);
    }
}

// ============================================================================
// Kind statistics
// ============================================================================

/// Counts nodes per kind across one or more trees.
#[derive(Debug, Default, Clone)]
pub struct KindCounter {
    counts: BTreeMap<DocKind, usize>,
    max_depth: usize,
    depth: usize,
}

impl KindCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every node of `docs` and their descendants.
    pub fn count(docs: &[Doc]) -> Self {
        let mut counter = Self::new();
        for doc in docs {
            counter.visit_doc(doc);
        }
        counter
    }

    pub fn get(&self, kind: DocKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Depth of the deepest node, with roots at depth 1.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Non-zero counts in kind order.
    pub fn iter(&self) -> impl Iterator<Item = (DocKind, usize)> + '_ {
        self.counts.iter().map(|(kind, count)| (*kind, *count))
    }
}

impl DocVisitor for KindCounter {
    fn visit_doc(&mut self, doc: &Doc) {
        *self.counts.entry(doc.kind()).or_insert(0) += 1;
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
        self.walk_doc(doc);
        self.depth -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_each_child_order() {
        let doc = Doc::id("f").call_kw(
            vec![Doc::id("a")],
            vec![("k".to_string(), Doc::int(1))],
        );
        let mut seen = Vec::new();
        for_each_child(&doc, |child| seen.push(child.clone()));
        assert_eq!(seen, vec![Doc::id("f"), Doc::id("a"), Doc::int(1)]);
    }

    #[test]
    fn test_kind_counter_counts_nested_nodes() {
        let tree = Doc::block(vec![Doc::if_(
            Doc::id("c"),
            vec![Doc::assign(Doc::id("x"), Doc::int(1))],
            vec![],
        )]);
        let counter = KindCounter::count(&[tree]);
        assert_eq!(counter.get(DocKind::StmtBlock), 1);
        assert_eq!(counter.get(DocKind::If), 1);
        assert_eq!(counter.get(DocKind::Assign), 1);
        assert_eq!(counter.get(DocKind::Id), 2);
        assert_eq!(counter.get(DocKind::Literal), 1);
        assert_eq!(counter.total(), 6);
        assert_eq!(counter.max_depth(), 4);
    }

    #[test]
    fn test_kind_counter_visits_function_params() {
        let func = Doc::Function(FunctionDoc::new(
            "f",
            vec![AssignDoc::param("a", Some(Doc::id("int")), None)],
            vec![],
        ));
        let counter = KindCounter::count(&[func]);
        assert_eq!(counter.get(DocKind::Function), 1);
        assert_eq!(counter.get(DocKind::Id), 2);
    }
}
