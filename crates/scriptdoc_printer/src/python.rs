//! Python-style rendering of document trees.
//!
//! Statements start on a fresh line at the current indentation; expressions
//! are written inline, so expression nodes appended back to back concatenate
//! with nothing in between.

use crate::buffer::DocBuffer;
use crate::precedence::{doc_precedence, operation_precedence, ExprPrecedence};
use crate::printer::DocPrinter;
use scriptdoc_doc::node::*;

/// Options for the Python printer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrinterOptions {
    /// Spaces per indentation level.
    pub indent_spaces: usize,
    /// Whether statement comments are printed.
    pub print_comments: bool,
}

impl Default for PrinterOptions {
    fn default() -> Self {
        Self {
            indent_spaces: 4,
            print_comments: true,
        }
    }
}

/// Renders documents as Python-flavoured script text.
pub struct PythonDocPrinter {
    buffer: DocBuffer,
    options: PrinterOptions,
    indent_level: usize,
}

impl PythonDocPrinter {
    pub fn new(options: PrinterOptions) -> Self {
        Self {
            buffer: DocBuffer::new(),
            options,
            indent_level: 0,
        }
    }

    pub fn with_indent(indent_spaces: usize) -> Self {
        Self::new(PrinterOptions {
            indent_spaces,
            ..PrinterOptions::default()
        })
    }

    pub fn options(&self) -> &PrinterOptions {
        &self.options
    }

    // ========================================================================
    // Core write helpers
    // ========================================================================

    fn write(&mut self, s: &str) {
        self.buffer.push_str(s);
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level * self.options.indent_spaces {
            self.buffer.push(' ');
        }
    }

    /// Move to a fresh line at the current indentation. Nothing is inserted
    /// at the very start of the output or right after a newline.
    fn new_line(&mut self) {
        if !self.buffer.is_empty() && !self.buffer.ends_with_newline() {
            self.buffer.push('\n');
        }
        self.write_indent();
    }

    fn print_joined(&mut self, docs: &[Doc], sep: &str) {
        for (i, doc) in docs.iter().enumerate() {
            if i > 0 {
                self.write(sep);
            }
            self.append(doc);
        }
    }

    // ========================================================================
    // Expression helpers
    // ========================================================================

    /// Print `doc` as an operand of an operator of precedence `parent`,
    /// wrapping it in parentheses when it binds looser (or equally loose,
    /// if `parenthesize_equal`).
    fn print_operand(&mut self, doc: &Doc, parent: ExprPrecedence, parenthesize_equal: bool) {
        let prec = doc_precedence(doc);
        if prec < parent || (parenthesize_equal && prec == parent) {
            self.write("(");
            self.append(doc);
            self.write(")");
        } else {
            self.append(doc);
        }
    }

    /// Assignment and loop targets: a non-empty tuple prints bare.
    fn print_target(&mut self, target: &Doc) {
        match target {
            Doc::Tuple(tuple) if !tuple.elements.is_empty() => {
                self.print_joined(&tuple.elements, ", ");
                if tuple.elements.len() == 1 {
                    self.write(",");
                }
            }
            other => self.append(other),
        }
    }

    // ========================================================================
    // Statement helpers
    // ========================================================================

    /// Start a statement line.
    ///
    /// A multi-line comment is written as `#` lines above the statement. A
    /// single-line comment is handed back so the caller can put it at the end
    /// of the line with [`Self::end_line`].
    fn begin_stmt<'c>(&mut self, comment: Option<&'c str>) -> Option<&'c str> {
        let print_comments = self.options.print_comments;
        let comment = comment.filter(|_| print_comments);
        if let Some(text) = comment.filter(|text| text.contains('\n')) {
            for line in text.lines() {
                self.new_line();
                if line.is_empty() {
                    self.write("#");
                } else {
                    self.write("# ");
                    self.write(line);
                }
            }
            self.new_line();
            return None;
        }
        self.new_line();
        comment
    }

    fn end_line(&mut self, comment: Option<&str>) {
        if let Some(text) = comment {
            self.write("  # ");
            self.write(text);
        }
    }

    /// A statement inside a body. Expressions found there are printed as
    /// expression statements.
    fn print_stmt_child(&mut self, doc: &Doc) {
        if doc.is_expr() {
            self.new_line();
        }
        self.append(doc);
    }

    /// An indented body. A body that prints nothing, including one made only
    /// of empty statement blocks, prints `pass`.
    fn print_body(&mut self, stmts: &[Doc], docstring: Option<&str>) {
        self.indent_level += 1;
        if let Some(text) = docstring {
            self.new_line();
            self.print_docstring(text);
        }
        let start = self.buffer.len();
        for stmt in stmts {
            self.print_stmt_child(stmt);
        }
        if self.buffer.len() == start && docstring.is_none() {
            self.new_line();
            self.write("pass");
        }
        self.indent_level -= 1;
    }

    fn print_docstring(&mut self, text: &str) {
        let mut escaped = text.replace('\\', "\\\\");
        // A quote right before the closing `"""` would end the string early.
        if escaped.ends_with('"') {
            escaped.pop();
            escaped.push_str("\\\"");
        }
        let escaped = escaped.replace("\"\"\"", "\\\"\\\"\\\"");
        self.write("\"\"\"");
        for (i, line) in escaped.lines().enumerate() {
            if i > 0 {
                self.buffer.push('\n');
                if !line.is_empty() {
                    self.write_indent();
                }
            }
            self.write(line);
        }
        self.write("\"\"\"");
    }

    fn print_decorators(&mut self, decorators: &[Doc]) {
        for decorator in decorators {
            self.new_line();
            self.write("@");
            self.append(decorator);
        }
    }

    /// `name: annotation = default`, or `name=default` without annotation.
    fn print_param(&mut self, param: &AssignDoc) {
        self.append(&param.lhs);
        if let Some(annotation) = &param.annotation {
            self.write(": ");
            self.append(annotation);
        }
        if let Some(default) = &param.rhs {
            self.write(if param.annotation.is_some() { " = " } else { "=" });
            self.append(default);
        }
    }

    fn docstring_for<'c>(&self, comment: &'c Option<String>) -> Option<&'c str> {
        comment.as_deref().filter(|_| self.options.print_comments)
    }
}

impl DocPrinter for PythonDocPrinter {
    fn indent_spaces(&self) -> usize {
        self.options.indent_spaces
    }

    fn buffer(&self) -> &DocBuffer {
        &self.buffer
    }

    fn buffer_mut(&mut self) -> &mut DocBuffer {
        &mut self.buffer
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    fn print_literal(&mut self, node: &LiteralDoc) {
        match &node.value {
            LiteralValue::None => self.write("None"),
            LiteralValue::Bool(true) => self.write("True"),
            LiteralValue::Bool(false) => self.write("False"),
            LiteralValue::Int(v) => self.write(&v.to_string()),
            LiteralValue::Float(v) => self.write(&format_float(*v)),
            LiteralValue::Str(s) => self.write(&escape_str(s)),
        }
    }

    fn print_id(&mut self, node: &IdDoc) {
        self.write(&node.name);
    }

    fn print_attr_access(&mut self, node: &AttrAccessDoc) {
        // `1.real` lexes as a float followed by a name.
        let int_base = matches!(
            &*node.value,
            Doc::Literal(LiteralDoc {
                value: LiteralValue::Int(_)
            })
        );
        self.print_operand(&node.value, ExprPrecedence::Atom, int_base);
        self.write(".");
        self.write(&node.name);
    }

    fn print_index(&mut self, node: &IndexDoc) {
        self.print_operand(&node.value, ExprPrecedence::Atom, false);
        self.write("[");
        self.print_joined(&node.indices, ", ");
        self.write("]");
    }

    fn print_call(&mut self, node: &CallDoc) {
        self.print_operand(&node.callee, ExprPrecedence::Atom, false);
        self.write("(");
        self.print_joined(&node.args, ", ");
        for (i, kwarg) in node.kwargs.iter().enumerate() {
            if i > 0 || !node.args.is_empty() {
                self.write(", ");
            }
            self.write(&kwarg.key);
            self.write("=");
            self.append(&kwarg.value);
        }
        self.write(")");
    }

    fn print_operation(&mut self, node: &OperationDoc) {
        let op = node.op;
        assert_eq!(
            node.operands.len(),
            op.arity(),
            "operator {op:?} takes {} operands",
            op.arity()
        );
        let prec = operation_precedence(op);

        if op.is_unary() {
            self.write(unary_symbol(op));
            self.print_operand(&node.operands[0], prec, false);
        } else if op.is_binary() {
            // `**` groups right to left; comparisons chain, so a nested
            // comparison needs parentheses on either side.
            let right_assoc = op == OperationKind::Pow;
            let chained = prec == ExprPrecedence::Comparison;
            self.print_operand(&node.operands[0], prec, right_assoc || chained);
            self.write(" ");
            self.write(binary_symbol(op));
            self.write(" ");
            self.print_operand(&node.operands[1], prec, !right_assoc || chained);
        } else {
            let (cond, then, otherwise) = (&node.operands[0], &node.operands[1], &node.operands[2]);
            self.print_operand(then, prec, true);
            self.write(" if ");
            self.print_operand(cond, prec, true);
            self.write(" else ");
            self.print_operand(otherwise, prec, false);
        }
    }

    fn print_lambda(&mut self, node: &LambdaDoc) {
        self.write("lambda");
        for (i, arg) in node.args.iter().enumerate() {
            self.write(if i == 0 { " " } else { ", " });
            self.write(&arg.name);
        }
        self.write(": ");
        self.append(&node.body);
    }

    fn print_tuple(&mut self, node: &TupleDoc) {
        self.write("(");
        self.print_joined(&node.elements, ", ");
        if node.elements.len() == 1 {
            self.write(",");
        }
        self.write(")");
    }

    fn print_list(&mut self, node: &ListDoc) {
        self.write("[");
        self.print_joined(&node.elements, ", ");
        self.write("]");
    }

    fn print_dict(&mut self, node: &DictDoc) {
        self.write("{");
        for (i, entry) in node.entries.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.append(&entry.key);
            self.write(": ");
            self.append(&entry.value);
        }
        self.write("}");
    }

    fn print_slice(&mut self, node: &SliceDoc) {
        if let Some(start) = &node.start {
            self.append(start);
        }
        self.write(":");
        if let Some(stop) = &node.stop {
            self.append(stop);
        }
        if let Some(step) = &node.step {
            self.write(":");
            self.append(step);
        }
    }

    // ========================================================================
    // Statements
    // ========================================================================

    fn print_stmt_block(&mut self, node: &StmtBlockDoc) {
        for stmt in &node.stmts {
            self.print_stmt_child(stmt);
        }
    }

    fn print_assign(&mut self, node: &AssignDoc) {
        let comment = self.begin_stmt(node.comment.as_deref());
        self.print_target(&node.lhs);
        if let Some(annotation) = &node.annotation {
            self.write(": ");
            self.append(annotation);
        }
        if let Some(rhs) = &node.rhs {
            self.write(" = ");
            self.append(rhs);
        }
        self.end_line(comment);
    }

    fn print_if(&mut self, node: &IfDoc) {
        let comment = self.begin_stmt(node.comment.as_deref());
        self.write("if ");
        self.append(&node.predicate);
        self.write(":");
        self.end_line(comment);
        self.print_body(&node.then_branch, None);
        if !node.else_branch.is_empty() {
            self.new_line();
            self.write("else:");
            self.print_body(&node.else_branch, None);
        }
    }

    fn print_while(&mut self, node: &WhileDoc) {
        let comment = self.begin_stmt(node.comment.as_deref());
        self.write("while ");
        self.append(&node.predicate);
        self.write(":");
        self.end_line(comment);
        self.print_body(&node.body, None);
    }

    fn print_for(&mut self, node: &ForDoc) {
        let comment = self.begin_stmt(node.comment.as_deref());
        self.write("for ");
        self.print_target(&node.lhs);
        self.write(" in ");
        self.append(&node.rhs);
        self.write(":");
        self.end_line(comment);
        self.print_body(&node.body, None);
    }

    fn print_scope(&mut self, node: &ScopeDoc) {
        let comment = self.begin_stmt(node.comment.as_deref());
        self.write("with ");
        self.append(&node.rhs);
        if let Some(lhs) = &node.lhs {
            self.write(" as ");
            self.print_target(lhs);
        }
        self.write(":");
        self.end_line(comment);
        self.print_body(&node.body, None);
    }

    fn print_expr_stmt(&mut self, node: &ExprStmtDoc) {
        let comment = self.begin_stmt(node.comment.as_deref());
        self.append(&node.expr);
        self.end_line(comment);
    }

    fn print_assert(&mut self, node: &AssertDoc) {
        let comment = self.begin_stmt(node.comment.as_deref());
        self.write("assert ");
        self.append(&node.test);
        if let Some(msg) = &node.msg {
            self.write(", ");
            self.append(msg);
        }
        self.end_line(comment);
    }

    fn print_return(&mut self, node: &ReturnDoc) {
        let comment = self.begin_stmt(node.comment.as_deref());
        self.write("return ");
        self.append(&node.value);
        self.end_line(comment);
    }

    fn print_function(&mut self, node: &FunctionDoc) {
        self.print_decorators(&node.decorators);
        self.new_line();
        self.write("def ");
        self.write(&node.name.name);
        self.write("(");
        for (i, arg) in node.args.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.print_param(arg);
        }
        self.write(")");
        if let Some(return_type) = &node.return_type {
            self.write(" -> ");
            self.append(return_type);
        }
        self.write(":");
        let docstring = self.docstring_for(&node.comment);
        self.print_body(&node.body, docstring);
    }

    fn print_class(&mut self, node: &ClassDoc) {
        self.print_decorators(&node.decorators);
        self.new_line();
        self.write("class ");
        self.write(&node.name.name);
        self.write(":");
        let docstring = self.docstring_for(&node.comment);
        self.print_body(&node.body, docstring);
    }
}

/// Render top-level documents to Python-style text with a trailing newline.
pub fn doc_to_python_script(docs: &[Doc], options: &PrinterOptions) -> String {
    let mut printer = PythonDocPrinter::new(options.clone());
    printer.append_all(docs);
    printer.finalize()
}

fn unary_symbol(op: OperationKind) -> &'static str {
    match op {
        OperationKind::UAdd => "+",
        OperationKind::USub => "-",
        OperationKind::Invert => "~",
        OperationKind::Not => "not ",
        _ => unreachable!("{op:?} is not a unary operator"),
    }
}

fn binary_symbol(op: OperationKind) -> &'static str {
    match op {
        OperationKind::Add => "+",
        OperationKind::Sub => "-",
        OperationKind::Mult => "*",
        OperationKind::Div => "/",
        OperationKind::FloorDiv => "//",
        OperationKind::Mod => "%",
        OperationKind::Pow => "**",
        OperationKind::LShift => "<<",
        OperationKind::RShift => ">>",
        OperationKind::BitAnd => "&",
        OperationKind::BitOr => "|",
        OperationKind::BitXor => "^",
        OperationKind::Lt => "<",
        OperationKind::LtE => "<=",
        OperationKind::Eq => "==",
        OperationKind::NotEq => "!=",
        OperationKind::Gt => ">",
        OperationKind::GtE => ">=",
        OperationKind::And => "and",
        OperationKind::Or => "or",
        _ => unreachable!("{op:?} is not a binary operator"),
    }
}

/// Shortest round-trip spelling; integral values keep their `.0`.
fn format_float(v: f64) -> String {
    if v.is_nan() {
        "float(\"nan\")".to_string()
    } else if v.is_infinite() {
        if v > 0.0 {
            "float(\"inf\")".to_string()
        } else {
            "float(\"-inf\")".to_string()
        }
    } else {
        format!("{v:?}")
    }
}

/// Double-quoted string literal.
fn escape_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
