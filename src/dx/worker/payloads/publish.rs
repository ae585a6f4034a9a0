//! Reply to the client publication attempt.

use crate::{
    core::CentrifugoError, proto::proxy, providers::serialization_serde::serialize_json_field,
};
use serde_json::Value;

/// Publication accepted by the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PublishResponse {
    /// Replacement for the published data. Original data is published when
    /// empty.
    pub data: Value,

    /// Whether publication shouldn't be saved into channel history.
    pub skip_history: bool,
}

impl TryFrom<PublishResponse> for proxy::PublishResult {
    type Error = CentrifugoError;

    fn try_from(value: PublishResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            data: serialize_json_field(&value.data)?,
            skip_history: value.skip_history,
        })
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(json!({}), b"" ; "empty data")]
    #[test_case(json!({"foo": "bar"}), b"{\"foo\":\"bar\"}" ; "replaced data")]
    fn map_data(data: Value, expected: &[u8]) {
        let result = proxy::PublishResult::try_from(PublishResponse {
            data,
            skip_history: true,
        })
        .unwrap();

        assert_eq!(result.data, expected);
        assert!(result.skip_history);
    }
}
