//! Reply to the client remote procedure call.

use crate::{
    core::CentrifugoError, proto::proxy, providers::serialization_serde::serialize_json_field,
};
use serde_json::Value;

/// Remote procedure call outcome.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RpcResponse {
    /// Data returned to the caller.
    pub data: Value,
}

impl TryFrom<RpcResponse> for proxy::RpcResult {
    type Error = CentrifugoError;

    fn try_from(value: RpcResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            data: serialize_json_field(&value.data)?,
        })
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use serde_json::json;

    #[test]
    fn omit_empty_data() {
        let result = proxy::RpcResult::try_from(RpcResponse::default()).unwrap();

        assert!(result.data.is_empty());
    }

    #[test]
    fn map_data() {
        let result = proxy::RpcResult::try_from(RpcResponse {
            data: json!({"sum": 3}),
        })
        .unwrap();

        assert_eq!(result.data, b"{\"sum\":3}");
    }
}
