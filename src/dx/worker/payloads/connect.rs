//! Reply to the client connection attempt.

use super::{expire_at_seconds, Override};
use crate::{
    core::{CentrifugoError, ExpireAt},
    proto::proxy,
    providers::serialization_serde::serialize_json_field,
};
use serde_json::Value;
use std::collections::HashMap;

/// Connection attempt accepted by the application.
///
/// # Examples
/// ```
/// use centrifugo_worker::dx::worker::payloads::{ConnectResponse, SubscribeOption};
/// use serde_json::json;
///
/// let response = ConnectResponse {
///     user: "user-1".into(),
///     info: json!({"name": "Alice"}),
///     channels: vec!["news".into()],
///     subscriptions: [("personal:user-1".into(), SubscribeOption::default())].into(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectResponse {
    /// Authenticated user identifier. Empty for anonymous connection.
    pub user: String,

    /// When connection should be refreshed.
    pub expire_at: Option<ExpireAt>,

    /// Data returned to the client in connect reply.
    pub data: Value,

    /// Connection info attached to the client.
    pub info: Value,

    /// Connection meta, not exposed to other clients.
    pub meta: Value,

    /// Channels client should be subscribed to.
    pub channels: Vec<String>,

    /// Server-side subscriptions with their options.
    pub subscriptions: HashMap<String, SubscribeOption>,
}

/// Options of the server-side subscription.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubscribeOption {
    /// When subscription should be refreshed.
    pub expire_at: Option<ExpireAt>,

    /// Channel info attached to the subscription.
    pub info: Value,

    /// Data sent to the client on subscribe.
    pub data: Value,

    /// Channel namespace options overrides.
    pub override_: Option<Override>,
}

impl TryFrom<SubscribeOption> for proxy::SubscribeOptions {
    type Error = CentrifugoError;

    fn try_from(value: SubscribeOption) -> Result<Self, Self::Error> {
        Ok(Self {
            expire_at: expire_at_seconds(value.expire_at),
            info: serialize_json_field(&value.info)?,
            data: serialize_json_field(&value.data)?,
            r#override: value.override_.as_ref().map(Into::into),
        })
    }
}

impl TryFrom<ConnectResponse> for proxy::ConnectResult {
    type Error = CentrifugoError;

    fn try_from(value: ConnectResponse) -> Result<Self, Self::Error> {
        let subs = value
            .subscriptions
            .into_iter()
            .map(|(channel, options)| Ok((channel, options.try_into()?)))
            .collect::<Result<HashMap<_, _>, CentrifugoError>>()?;

        Ok(Self {
            user: value.user,
            expire_at: expire_at_seconds(value.expire_at),
            info: serialize_json_field(&value.info)?,
            data: serialize_json_field(&value.data)?,
            channels: value.channels,
            subs,
            meta: serialize_json_field(&value.meta)?,
        })
    }
}
