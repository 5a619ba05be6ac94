//! Operator precedence for Python-style expressions.

use scriptdoc_doc::node::{Doc, LiteralValue, OperationKind};

/// Expression precedence levels, matching Python's precedence table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum ExprPrecedence {
    // Ranges from lowest to highest
    Lambda = 1,
    IfThenElse = 2,
    BooleanOr = 3,
    BooleanAnd = 4,
    BooleanNot = 5,
    Comparison = 6,
    BitwiseOr = 7,
    BitwiseXor = 8,
    BitwiseAnd = 9,
    Shift = 10,
    Additive = 11,
    Multiplicative = 12,
    Unary = 13,
    Power = 14,
    Atom = 15,
}

/// Get the precedence of an operator.
pub fn operation_precedence(op: OperationKind) -> ExprPrecedence {
    match op {
        OperationKind::UAdd | OperationKind::USub | OperationKind::Invert => ExprPrecedence::Unary,
        OperationKind::Not => ExprPrecedence::BooleanNot,
        OperationKind::Pow => ExprPrecedence::Power,
        OperationKind::Mult | OperationKind::Div | OperationKind::FloorDiv | OperationKind::Mod => {
            ExprPrecedence::Multiplicative
        }
        OperationKind::Add | OperationKind::Sub => ExprPrecedence::Additive,
        OperationKind::LShift | OperationKind::RShift => ExprPrecedence::Shift,
        OperationKind::BitAnd => ExprPrecedence::BitwiseAnd,
        OperationKind::BitXor => ExprPrecedence::BitwiseXor,
        OperationKind::BitOr => ExprPrecedence::BitwiseOr,
        OperationKind::Lt
        | OperationKind::LtE
        | OperationKind::Eq
        | OperationKind::NotEq
        | OperationKind::Gt
        | OperationKind::GtE => ExprPrecedence::Comparison,
        OperationKind::And => ExprPrecedence::BooleanAnd,
        OperationKind::Or => ExprPrecedence::BooleanOr,
        OperationKind::IfThenElse => ExprPrecedence::IfThenElse,
    }
}

/// Get the precedence of an expression node.
///
/// Negative numeric literals print with a leading `-` and bind like a unary
/// minus. Statements never appear as operands; they report `Atom` so they
/// are not wrapped.
pub fn doc_precedence(doc: &Doc) -> ExprPrecedence {
    match doc {
        Doc::Operation(n) => operation_precedence(n.op),
        Doc::Lambda(_) => ExprPrecedence::Lambda,
        Doc::Literal(n) => match n.value {
            LiteralValue::Int(v) if v < 0 => ExprPrecedence::Unary,
            LiteralValue::Float(v) if v.is_sign_negative() && v.is_finite() => ExprPrecedence::Unary,
            _ => ExprPrecedence::Atom,
        },
        _ => ExprPrecedence::Atom,
    }
}
