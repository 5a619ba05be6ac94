//! JSON codec tests: decoding, unknown kinds and encoding.

use scriptdoc_diagnostics::DocError;
use scriptdoc_doc::codec::{from_json_str, to_json_string};
use scriptdoc_doc::node::*;

/// Helper: decode text that must hold exactly one root.
fn decode_one(text: &str) -> Doc {
    let mut docs = from_json_str(text).unwrap();
    assert_eq!(docs.len(), 1);
    docs.remove(0)
}

/// Helper: the path of an `UnhandledKind` error.
fn unhandled_path(text: &str) -> (String, String) {
    match from_json_str(text) {
        Err(DocError::UnhandledKind { kind, path, .. }) => (kind, path),
        other => panic!("expected an unhandled kind, got {other:?}"),
    }
}

// ============================================================================
// Decoding
// ============================================================================

#[test]
fn test_literal_values() {
    let cases = [
        ("null", LiteralValue::None),
        ("true", LiteralValue::Bool(true)),
        ("7", LiteralValue::Int(7)),
        ("-3", LiteralValue::Int(-3)),
        ("1.5", LiteralValue::Float(1.5)),
        ("\"s\"", LiteralValue::Str("s".to_string())),
    ];
    for (json, expected) in cases {
        let doc = decode_one(&format!(r#"{{"kind": "literal", "value": {json}}}"#));
        assert_eq!(doc, Doc::literal(expected), "decoding {json}");
    }
}

#[test]
fn test_array_of_roots_keeps_order() {
    let docs = from_json_str(r#"[{"kind": "id", "name": "x"}, {"kind": "literal", "value": 1}]"#).unwrap();
    assert_eq!(docs, vec![Doc::id("x"), Doc::int(1)]);
}

#[test]
fn test_list_fields_default_to_empty() {
    let doc = decode_one(r#"{"kind": "call", "callee": {"kind": "id", "name": "f"}}"#);
    assert_eq!(doc, Doc::id("f").call(vec![]));

    let doc = decode_one(r#"{"kind": "if", "predicate": {"kind": "id", "name": "c"}}"#);
    assert_eq!(doc, Doc::if_(Doc::id("c"), vec![], vec![]));
}

#[test]
fn test_nested_statement_tree() {
    let doc = decode_one(
        r#"{
            "kind": "stmt_block",
            "stmts": [{
                "kind": "if",
                "predicate": {"kind": "id", "name": "c"},
                "then_branch": [{
                    "kind": "assign",
                    "lhs": {"kind": "id", "name": "x"},
                    "rhs": {"kind": "literal", "value": 1},
                    "comment": "set"
                }]
            }]
        }"#,
    );
    let expected = Doc::block(vec![Doc::if_(
        Doc::id("c"),
        vec![Doc::assign(Doc::id("x"), Doc::int(1)).with_comment("set")],
        vec![],
    )]);
    assert_eq!(doc, expected);
}

#[test]
fn test_missing_required_field_is_json_error() {
    let err = from_json_str(r#"{"kind": "attr_access", "name": "x"}"#).unwrap_err();
    assert!(matches!(err, DocError::Json(_)), "got {err:?}");
}

#[test]
fn test_invalid_text_is_json_error() {
    let err = from_json_str("{not json").unwrap_err();
    assert!(matches!(err, DocError::Json(_)), "got {err:?}");
}

#[test]
fn test_unknown_operator_is_json_error() {
    let err = from_json_str(
        r#"{"kind": "operation", "op": "MatMult", "operands": []}"#,
    )
    .unwrap_err();
    assert!(matches!(err, DocError::Json(_)), "got {err:?}");
}

#[test]
fn test_misspelled_field_is_json_error() {
    let err = from_json_str(
        r#"{"kind": "if", "predicate": {"kind": "id", "name": "c"},
            "then": [{"kind": "return", "value": {"kind": "id", "name": "x"}}]}"#,
    )
    .unwrap_err();
    assert!(matches!(err, DocError::Json(_)), "got {err:?}");
}

// ============================================================================
// Operand counts
// ============================================================================

#[test]
fn test_binary_operator_with_one_operand() {
    let err = from_json_str(
        r#"{"kind": "operation", "op": "Add", "operands": [{"kind": "id", "name": "a"}]}"#,
    )
    .unwrap_err();
    match err {
        DocError::OperandCount { op, expected, got, path } => {
            assert_eq!(op, "Add");
            assert_eq!((expected, got), (2, 1));
            assert_eq!(path, "$");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_nested_if_then_else_operand_count() {
    let err = from_json_str(
        r#"[{"kind": "return", "value": {"kind": "operation", "op": "IfThenElse",
            "operands": [{"kind": "id", "name": "c"}, {"kind": "id", "name": "a"}]}}]"#,
    )
    .unwrap_err();
    match err {
        DocError::OperandCount { op, expected, got, path } => {
            assert_eq!(op, "IfThenElse");
            assert_eq!((expected, got), (3, 2));
            assert_eq!(path, "$[0].value");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_well_formed_operations_decode() {
    let doc = decode_one(
        r#"{"kind": "operation", "op": "Not", "operands": [{"kind": "id", "name": "a"}]}"#,
    );
    assert_eq!(doc, Doc::unary(OperationKind::Not, Doc::id("a")));
}

// ============================================================================
// Unknown kinds
// ============================================================================

#[test]
fn test_unknown_kind_in_function_body() {
    let (kind, path) = unhandled_path(
        r#"[{
            "kind": "function",
            "name": {"name": "f"},
            "body": [
                {"kind": "return", "value": {"kind": "literal", "value": null}},
                {"kind": "goto", "label": "end"}
            ]
        }]"#,
    );
    assert_eq!(kind, "goto");
    assert_eq!(path, "$[0].body[1]");
}

#[test]
fn test_unknown_kind_deep_in_expression() {
    let (kind, path) = unhandled_path(
        r#"{"kind": "expr_stmt", "expr": {"kind": "call", "callee": {"kind": "id", "name": "f"},
            "args": [{"kind": "literal", "value": 1}, {"kind": "await", "value": null}]}}"#,
    );
    assert_eq!(kind, "await");
    assert_eq!(path, "$.expr.args[1]");
}

#[test]
fn test_unknown_kind_is_reported_before_shape_errors() {
    // The first root is malformed, but the unknown kind wins.
    let (kind, path) = unhandled_path(r#"[{"kind": "attr_access"}, {"kind": "yield"}]"#);
    assert_eq!(kind, "yield");
    assert_eq!(path, "$[1]");
}

#[test]
fn test_unhandled_kind_lists_known_kinds() {
    match from_json_str(r#"{"kind": "match"}"#) {
        Err(DocError::UnhandledKind { known, .. }) => {
            for name in ["literal", "stmt_block", "class"] {
                assert!(known.contains(name), "{name} missing from {known}");
            }
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

// ============================================================================
// Encoding
// ============================================================================

#[test]
fn test_encode_uses_kind_tags() {
    let text = to_json_string(&[Doc::id("T").attr("int32")]).unwrap();
    assert!(text.contains(r#""kind": "attr_access""#), "{text}");
    assert!(text.contains(r#""kind": "id""#), "{text}");
}

#[test]
fn test_encode_omits_unset_optionals() {
    let text = to_json_string(&[Doc::assign(Doc::id("x"), Doc::int(1))]).unwrap();
    assert!(!text.contains("comment"), "{text}");
    assert!(!text.contains("annotation"), "{text}");
}

#[test]
fn test_encoded_function_decodes_to_same_tree() {
    let func = Doc::Function(
        FunctionDoc::new(
            "add",
            vec![
                AssignDoc::param("a", Some(Doc::id("int")), None),
                AssignDoc::param("b", Some(Doc::id("int")), Some(Doc::int(1))),
            ],
            vec![Doc::ret(Doc::binary(OperationKind::Add, Doc::id("a"), Doc::id("b")))],
        )
        .with_decorators(vec![Doc::id("T").attr("prim_func")])
        .with_return_type(Doc::id("int")),
    )
    .with_comment("Adds two numbers.");

    let text = to_json_string(std::slice::from_ref(&func)).unwrap();
    assert_eq!(from_json_str(&text).unwrap(), vec![func]);
}

#[test]
fn test_non_finite_float_encodes_as_null() {
    let text = to_json_string(&[Doc::float(f64::NAN)]).unwrap();
    assert!(text.contains(r#""value": null"#), "{text}");
}
