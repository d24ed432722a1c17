//! RFC 6902 JSON Patch documents.
//!
//! A patch is an ordered `Vec<JsonPatchOperation>`, sent with the
//! `application/json-patch+json` content type. Paths are RFC 6901 JSON
//! Pointers; use [`escape_pointer_token`] when building one from a key.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumString};

use crate::error::RequestError;

/// The operation kind of a patch entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PatchOp {
    /// Add a value (or replace an existing member).
    Add,
    /// Remove the value at `path`.
    Remove,
    /// Replace the value at `path`.
    Replace,
    /// Move the value at `from` to `path`.
    Move,
    /// Copy the value at `from` to `path`.
    Copy,
    /// Assert the value at `path` equals `value`.
    Test,
}

/// A single JSON Patch operation.
///
/// ## Examples
///
/// ```
/// use catalog_client::patch::JsonPatchOperation;
/// use serde_json::json;
///
/// let op = JsonPatchOperation::replace("/label", json!("Renamed"));
/// assert_eq!(
///     serde_json::to_value(&op).unwrap(),
///     json!({"op": "replace", "path": "/label", "value": "Renamed"})
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonPatchOperation {
    /// The operation kind.
    pub op: PatchOp,
    /// Target location (JSON Pointer).
    pub path: String,
    /// Source location for `move` and `copy`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// The value for `add`, `replace` and `test`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl JsonPatchOperation {
    /// An `add` operation.
    pub fn add(path: impl Into<String>, value: Value) -> Self {
        Self::with_value(PatchOp::Add, path, value)
    }

    /// A `replace` operation.
    pub fn replace(path: impl Into<String>, value: Value) -> Self {
        Self::with_value(PatchOp::Replace, path, value)
    }

    /// A `test` operation.
    pub fn test(path: impl Into<String>, value: Value) -> Self {
        Self::with_value(PatchOp::Test, path, value)
    }

    /// A `remove` operation.
    pub fn remove(path: impl Into<String>) -> Self {
        Self {
            op: PatchOp::Remove,
            path: path.into(),
            from: None,
            value: None,
        }
    }

    /// A `move` operation.
    pub fn move_from(from: impl Into<String>, path: impl Into<String>) -> Self {
        Self::with_from(PatchOp::Move, from, path)
    }

    /// A `copy` operation.
    pub fn copy_from(from: impl Into<String>, path: impl Into<String>) -> Self {
        Self::with_from(PatchOp::Copy, from, path)
    }

    fn with_value(op: PatchOp, path: impl Into<String>, value: Value) -> Self {
        Self {
            op,
            path: path.into(),
            from: None,
            value: Some(value),
        }
    }

    fn with_from(op: PatchOp, from: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            op,
            path: path.into(),
            from: Some(from.into()),
            value: None,
        }
    }
}

/// Escapes one reference token for use in a JSON Pointer.
///
/// `~` becomes `~0` and `/` becomes `~1`, in that order.
///
/// ## Examples
///
/// ```
/// use catalog_client::patch::escape_pointer_token;
///
/// assert_eq!(escape_pointer_token("a/b~c"), "a~1b~0c");
/// ```
pub fn escape_pointer_token(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}

/// Builds a patch with one `add` per present top-level field of `model`.
///
/// `model` must serialize to a JSON object. Fields serialized as `null`
/// (or skipped) produce no operation, so a model using
/// `Option` with skip-if-none yields exactly its set fields. Operations
/// are ordered by wire name.
///
/// ## Errors
///
/// Returns [`RequestError::Serialization`] if `model` cannot be serialized,
/// or [`RequestError::InvalidPatchSource`] if it is not a JSON object.
///
/// ## Examples
///
/// ```
/// use catalog_client::patch::patch_from_model;
/// use serde_json::json;
///
/// let ops = patch_from_model(&json!({"label": "Test", "short_description": null})).unwrap();
/// assert_eq!(ops.len(), 1);
/// assert_eq!(ops[0].path, "/label");
/// ```
pub fn patch_from_model<T: Serialize + ?Sized>(
    model: &T,
) -> Result<Vec<JsonPatchOperation>, RequestError> {
    let Value::Object(fields) = serde_json::to_value(model)? else {
        return Err(RequestError::InvalidPatchSource);
    };

    Ok(fields
        .into_iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| JsonPatchOperation::add(format!("/{}", escape_pointer_token(&key)), value))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn op_serializes_lowercase() {
        assert_eq!(serde_json::to_value(PatchOp::Copy).unwrap(), json!("copy"));
        assert_eq!(PatchOp::Replace.to_string(), "replace");
    }

    #[test]
    fn remove_has_no_value_or_from() {
        let op = JsonPatchOperation::remove("/tags/0");
        assert_eq!(
            serde_json::to_value(&op).unwrap(),
            json!({"op": "remove", "path": "/tags/0"})
        );
    }

    #[test]
    fn move_carries_from() {
        let op = JsonPatchOperation::move_from("/name", "/label");
        assert_eq!(
            serde_json::to_value(&op).unwrap(),
            json!({"op": "move", "path": "/label", "from": "/name"})
        );
    }

    #[test]
    fn pointer_escape_order() {
        assert_eq!(escape_pointer_token("~1"), "~01");
        assert_eq!(escape_pointer_token("plain"), "plain");
    }

    #[test]
    fn model_patch_skips_nulls_and_escapes_keys() {
        let ops = patch_from_model(&json!({
            "label": "L",
            "a/b": 1,
            "gone": null,
        }))
        .unwrap();
        let paths: Vec<_> = ops.iter().map(|o| o.path.as_str()).collect();
        assert_eq!(ops.len(), 2);
        assert!(paths.contains(&"/label"));
        assert!(paths.contains(&"/a~1b"));
        assert!(ops.iter().all(|o| o.op == PatchOp::Add));
    }

    #[test]
    fn model_patch_rejects_non_objects() {
        let err = patch_from_model(&json!(["a"])).unwrap_err();
        assert!(matches!(err, RequestError::InvalidPatchSource));
    }
}
