//! Scalar/container type inference.
//!
//! Maps a single JSON value to a Python type-expression string. This is the
//! leaf-level guess the structure analyzer falls back to wherever it does not
//! synthesize a concrete class (scalars, scalar lists, empty lists).

use serde_json::Value;

/// Infer the Python type expression for one JSON value.
///
/// Total over all of `Value`; never fails. List element types are sampled
/// from the first element only (homogeneity assumed, not verified). Objects
/// map to a generic `Dict[str, Any]` here; the analyzer replaces object
/// positions it owns with concrete class names.
pub fn python_type(value: &Value) -> String {
    match value {
        // Bool stays ahead of Number: in dynamically typed hosts a boolean
        // is an integer subtype, and the tagged Value enum keeps the same
        // arm order even though it cannot misclassify.
        Value::Bool(_) => "bool".to_string(),
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "int".to_string()
            } else {
                "float".to_string()
            }
        }
        Value::String(_) => "str".to_string(),
        Value::Null => "None".to_string(),
        Value::Array(items) => match items.first() {
            None => "List[Any]".to_string(),
            Some(first) => format!("List[{}]", python_type(first)),
        },
        Value::Object(_) => "Dict[str, Any]".to_string(),
    }
}
