//! Reply to the client subscription attempt.

use super::Override;
use crate::{
    core::CentrifugoError, proto::proxy, providers::serialization_serde::serialize_json_field,
};
use serde_json::Value;

/// Subscription attempt accepted by the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubscribeResponse {
    /// Channel info attached to the subscription.
    pub info: Value,

    /// Data sent to the client on subscribe.
    pub data: Value,

    /// Channel capabilities granted to the client.
    pub allow: Vec<String>,

    /// Channel namespace options overrides.
    pub override_: Option<Override>,
}

impl TryFrom<SubscribeResponse> for proxy::SubscribeResult {
    type Error = CentrifugoError;

    fn try_from(value: SubscribeResponse) -> Result<Self, Self::Error> {
        Ok(Self {
            info: serialize_json_field(&value.info)?,
            data: serialize_json_field(&value.data)?,
            r#override: value.override_.as_ref().map(Into::into),
            allow: value.allow,
        })
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use crate::proto::proxy::BoolValue;
    use serde_json::json;

    #[test]
    fn omit_empty_documents_and_override() {
        let result = proxy::SubscribeResult::try_from(SubscribeResponse::default()).unwrap();

        assert_eq!(result, proxy::SubscribeResult::default());
    }

    #[test]
    fn map_documents_and_override() {
        let result = proxy::SubscribeResult::try_from(SubscribeResponse {
            info: json!({"foo": "bar"}),
            data: json!({"baz": 1}),
            allow: vec!["pub".into()],
            override_: Some(Override {
                presence: Some(true),
                force_positioning: Some(false),
                ..Default::default()
            }),
        })
        .unwrap();

        assert_eq!(result.info, b"{\"foo\":\"bar\"}");
        assert_eq!(result.data, b"{\"baz\":1}");
        assert_eq!(result.allow, vec!["pub".to_string()]);

        let override_ = result.r#override.unwrap();
        assert_eq!(override_.presence, Some(BoolValue { value: true }));
        assert_eq!(override_.force_positioning, Some(BoolValue { value: false }));
        assert!(override_.join_leave.is_none());
    }

    #[test]
    fn send_empty_override_when_provided() {
        let result = proxy::SubscribeResult::try_from(SubscribeResponse {
            override_: Some(Override::default()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(
            result.r#override,
            Some(proxy::SubscribeOptionOverride::default())
        );
    }
}
