//! Serde implementation of the JSON fields deserialization.
//!
//! This module turns JSON encoded parts of the inbound proxy payloads into
//! Rust values: the payload header and the `data` / `meta` documents
//! nested in `bytes` fields of the request messages.

use crate::core::{CentrifugoError, Headers};
use serde_json::{Map, Value};

/// Deserialize JSON document from a `bytes` message field.
///
/// Empty field means that there is no document and is represented as an
/// empty object.
///
/// # Errors
/// Returns [`CentrifugoError::MalformedJson`] if the field doesn't contain
/// valid JSON.
pub fn deserialize_json_field(field: &str, bytes: &[u8]) -> Result<Value, CentrifugoError> {
    if bytes.is_empty() {
        return Ok(Value::Object(Map::new()));
    }

    serde_json::from_slice(bytes).map_err(|e| CentrifugoError::MalformedJson {
        details: format!("`{field}`: {e}"),
    })
}

/// Deserialize payload header.
///
/// Header is expected to be a JSON object with lists of strings as values.
///
/// # Errors
/// Returns [`CentrifugoError::MalformedHeader`] if the header is not a valid
/// JSON or has different shape.
pub fn deserialize_headers(header: &str) -> Result<Headers, CentrifugoError> {
    serde_json::from_str(header).map_err(|e| CentrifugoError::MalformedHeader {
        details: e.to_string(),
    })
}

#[cfg(test)]
mod should {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test]
    fn deserialize_empty_field_as_empty_object() {
        assert_eq!(deserialize_json_field("data", b"").unwrap(), json!({}));
    }

    #[test_case(b"{\"foo\":\"bar\"}", json!({"foo": "bar"}) ; "object")]
    #[test_case(b"[\"some\"]", json!(["some"]) ; "array")]
    fn deserialize_documents(bytes: &[u8], expected: Value) {
        assert_eq!(deserialize_json_field("meta", bytes).unwrap(), expected);
    }

    #[test]
    fn report_malformed_document_with_field_name() {
        let result = deserialize_json_field("meta", b"{not json");

        assert!(matches!(
            result,
            Err(CentrifugoError::MalformedJson { details }) if details.starts_with("`meta`")
        ));
    }

    #[test]
    fn deserialize_headers_with_multiple_values() {
        let headers =
            deserialize_headers(r#"{"type":["connect"],"Cookie":["a=1","b=2"]}"#).unwrap();

        assert_eq!(headers["type"], vec!["connect".to_string()]);
        assert_eq!(headers["Cookie"], vec!["a=1".to_string(), "b=2".to_string()]);
    }

    #[test_case("not json" ; "not a json")]
    #[test_case("[\"connect\"]" ; "not an object")]
    #[test_case("{\"type\":\"connect\"}" ; "value is not a list")]
    #[test_case("" ; "empty header")]
    fn reject_malformed_headers(header: &str) {
        assert!(matches!(
            deserialize_headers(header),
            Err(CentrifugoError::MalformedHeader { .. })
        ));
    }
}
