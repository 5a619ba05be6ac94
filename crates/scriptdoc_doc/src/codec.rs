//! JSON interchange for document trees.
//!
//! Inside the process the kind set is an exhaustive enum, so an unknown kind
//! cannot reach the printer. Serialized documents are the one place where a
//! foreign producer can hand us a tag we do not know; decoding rejects such a
//! tree up front with [`DocError::UnhandledKind`] before any node is built.

use crate::kind::DocKind;
use crate::node::{Doc, OperationKind};
use scriptdoc_diagnostics::{DocError, DocResult};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Decode a document from JSON text. The input is either one node or an array
/// of top-level nodes.
pub fn from_json_str(text: &str) -> DocResult<Vec<Doc>> {
    let value: Value = serde_json::from_str(text)?;
    from_json_value(value)
}

/// Decode a document from an already parsed JSON value.
pub fn from_json_value(value: Value) -> DocResult<Vec<Doc>> {
    let mut path = String::from("$");
    check_kinds(&value, &mut path)?;

    let docs = match value {
        Value::Array(items) => items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<Doc>, _>>()?,
        other => vec![serde_json::from_value(other)?],
    };
    tracing::debug!(roots = docs.len(), "decoded document");
    Ok(docs)
}

/// Encode top-level nodes as a pretty-printed JSON array.
///
/// Non-finite float literals have no JSON spelling and are written as `null`.
pub fn to_json_string(docs: &[Doc]) -> DocResult<String> {
    Ok(serde_json::to_string_pretty(docs)?)
}

/// Depth-first scan for `kind` tags outside the known set. Object keys are
/// visited in map order, so the first offending node is deterministic.
fn check_kinds(value: &Value, path: &mut String) -> DocResult<()> {
    match value {
        Value::Object(map) => {
            if let Some(kind) = map.get("kind") {
                let Value::String(kind) = kind else {
                    return Err(DocError::MalformedKind { path: path.clone() });
                };
                if DocKind::from_name(kind).is_none() {
                    return Err(DocError::UnhandledKind {
                        kind: kind.clone(),
                        path: path.clone(),
                        known: DocKind::known_names(),
                    });
                }
                if kind == DocKind::Operation.name() {
                    check_operands(map, path)?;
                }
            }
            for (key, child) in map {
                if key == "kind" {
                    continue;
                }
                let len = path.len();
                path.push('.');
                path.push_str(key);
                check_kinds(child, path)?;
                path.truncate(len);
            }
        }
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                let len = path.len();
                path.push_str(&format!("[{i}]"));
                check_kinds(item, path)?;
                path.truncate(len);
            }
        }
        _ => {}
    }
    Ok(())
}

/// An operation's operand count must match its operator's arity. A missing or
/// unknown `op` is left to typed decoding.
fn check_operands(map: &Map<String, Value>, path: &str) -> DocResult<()> {
    let Some(op) = map
        .get("op")
        .and_then(|op| OperationKind::deserialize(op).ok())
    else {
        return Ok(());
    };
    let Some(Value::Array(operands)) = map.get("operands") else {
        return Ok(());
    };
    if operands.len() != op.arity() {
        return Err(DocError::OperandCount {
            op: format!("{op:?}"),
            expected: op.arity(),
            got: operands.len(),
            path: path.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_node_decodes_to_one_root() {
        let docs = from_json_value(json!({"kind": "id", "name": "x"})).unwrap();
        assert_eq!(docs, vec![Doc::id("x")]);
    }

    #[test]
    fn test_unknown_root_kind() {
        let err = from_json_value(json!([{"kind": "yield", "value": null}])).unwrap_err();
        match err {
            DocError::UnhandledKind { kind, path, known } => {
                assert_eq!(kind, "yield");
                assert_eq!(path, "$[0]");
                assert!(known.contains("stmt_block"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_operand_count_checked_on_decode() {
        let err = from_json_value(json!({
            "kind": "operation",
            "op": "Add",
            "operands": [{"kind": "id", "name": "a"}]
        }))
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
    fn test_non_string_kind_is_malformed() {
        let err = from_json_value(json!({"kind": 3})).unwrap_err();
        assert!(matches!(err, DocError::MalformedKind { ref path } if path == "$"));
    }
}
