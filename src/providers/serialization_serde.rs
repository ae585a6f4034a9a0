//! Serde implementation of the JSON fields serialization.
//!
//! Proxy replies and server API requests carry JSON documents (`data`,
//! `info`, `meta`) inside `bytes` fields of protobuf messages. Empty
//! documents are not sent at all: the field keeps its wire default.
//!
//! # Examples
//! ```
//! use centrifugo_worker::providers::serialization_serde::serialize_json_field;
//! use serde_json::json;
//!
//! assert_eq!(serialize_json_field(&json!({"foo": "bar"})).unwrap(), b"{\"foo\":\"bar\"}".to_vec());
//! assert!(serialize_json_field(&json!({})).unwrap().is_empty());
//! ```

use crate::core::CentrifugoError;
use serde_json::Value;

/// Whether JSON document has nothing to send.
///
/// `null`, an empty object and an empty array are considered empty.
pub fn is_empty_json(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(list) => list.is_empty(),
        _ => false,
    }
}

/// Serialize JSON document for a `bytes` message field.
///
/// Returns empty buffer for empty documents (see [`is_empty_json`]).
///
/// # Errors
/// Returns [`CentrifugoError::Serialization`] if the document can't be
/// encoded.
pub fn serialize_json_field(value: &Value) -> Result<Vec<u8>, CentrifugoError> {
    if is_empty_json(value) {
        return Ok(Vec::new());
    }

    serde_json::to_vec(value).map_err(|e| CentrifugoError::Serialization {
        details: e.to_string(),
    })
}

#[cfg(test)]
mod should {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(json!(null) ; "null")]
    #[test_case(json!({}) ; "empty object")]
    #[test_case(json!([]) ; "empty array")]
    fn omit_empty_documents(value: Value) {
        assert!(serialize_json_field(&value).unwrap().is_empty());
    }

    #[test_case(json!({"foo": "bar"}), "{\"foo\":\"bar\"}" ; "object")]
    #[test_case(json!(["foo", "bar"]), "[\"foo\",\"bar\"]" ; "array")]
    #[test_case(json!(""), "\"\"" ; "empty string is a value")]
    #[test_case(json!(0), "0" ; "zero is a value")]
    fn serialize_documents(value: Value, expected: &str) {
        assert_eq!(
            String::from_utf8(serialize_json_field(&value).unwrap()).unwrap(),
            expected
        );
    }
}
