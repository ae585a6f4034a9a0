//! Server API results module.
//!
//! This module contains plain values returned by the server API operations.
//! Read operations (presence, presence stats and channels) reshape protobuf
//! maps into values which serialize with the keys used by Centrifugo HTTP
//! API (`client`, `user`, `conn_info`, `chan_info`, `num_clients`,
//! `num_users`).

use crate::{core::CentrifugoError, proto::api};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// The result of a publish operation.
///
/// Position of the publication in the channel history stream. Both fields
/// are empty when publication isn't saved into history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PublishResult {
    /// Publication offset in the channel stream.
    pub offset: u64,

    /// Channel stream epoch.
    pub epoch: String,
}

impl From<api::PublishResult> for PublishResult {
    fn from(value: api::PublishResult) -> Self {
        Self {
            offset: value.offset,
            epoch: value.epoch,
        }
    }
}

/// The result of a broadcast operation.
///
/// Contains publish outcome for every channel in the order they have been
/// passed to the broadcast.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BroadcastResult {
    /// Per-channel publish outcomes.
    pub responses: Vec<Result<PublishResult, CentrifugoError>>,
}

impl From<api::BroadcastResult> for BroadcastResult {
    fn from(value: api::BroadcastResult) -> Self {
        let responses = value
            .responses
            .into_iter()
            .map(|response| match response.error {
                Some(error) => Err(CentrifugoError::API {
                    code: error.code,
                    message: error.message,
                }),
                None => Ok(response.result.unwrap_or_default().into()),
            })
            .collect();

        Self { responses }
    }
}

/// Information about client connected to the channel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientPresence {
    /// Client connection identifier.
    pub client: String,

    /// User identifier.
    pub user: String,

    /// Connection info.
    ///
    /// Decoded JSON document, or the raw string when info isn't JSON.
    pub conn_info: Value,

    /// Channel info.
    ///
    /// Decoded JSON document, or the raw string when info isn't JSON.
    pub chan_info: Value,
}

impl From<api::ClientInfo> for ClientPresence {
    fn from(value: api::ClientInfo) -> Self {
        Self {
            conn_info: info_value(&value.conn_info),
            chan_info: info_value(&value.chan_info),
            client: value.client,
            user: value.user,
        }
    }
}

/// Connection or channel info as attached by the application.
///
/// Info is opaque to Centrifugo, so anything which doesn't parse as JSON is
/// kept as is.
fn info_value(bytes: &[u8]) -> Value {
    if bytes.is_empty() {
        return Value::Object(Default::default());
    }

    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

/// Channel presence: client identifier mapped to the client information.
pub(super) fn presence_from_message(
    value: api::PresenceResult,
) -> HashMap<String, ClientPresence> {
    value
        .presence
        .into_iter()
        .map(|(client, info)| (client, info.into()))
        .collect()
}

/// Short channel presence summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PresenceStats {
    /// Number of connected clients.
    pub num_clients: u32,

    /// Number of unique users.
    pub num_users: u32,
}

impl From<api::PresenceStatsResult> for PresenceStats {
    fn from(value: api::PresenceStatsResult) -> Self {
        Self {
            num_clients: value.num_clients,
            num_users: value.num_users,
        }
    }
}

/// Information about active channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChannelInfo {
    /// Number of connected clients.
    pub num_clients: u32,
}

/// Active channels: channel name mapped to the channel information.
pub(super) fn channels_from_message(value: api::ChannelsResult) -> HashMap<String, ChannelInfo> {
    value
        .channels
        .into_iter()
        .map(|(channel, info)| {
            (
                channel,
                ChannelInfo {
                    num_clients: info.num_clients,
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod should {
    use super::*;
    use serde_json::json;

    #[test]
    fn serialize_presence_with_documented_keys() {
        let presence = presence_from_message(api::PresenceResult {
            presence: [(
                "client-1".to_string(),
                api::ClientInfo {
                    user: "user-1".into(),
                    client: "client-1".into(),
                    conn_info: br#"{"name":"Alice"}"#.to_vec(),
                    chan_info: vec![],
                },
            )]
            .into(),
        });

        assert_eq!(
            serde_json::to_value(&presence).unwrap(),
            json!({
                "client-1": {
                    "client": "client-1",
                    "user": "user-1",
                    "conn_info": {"name": "Alice"},
                    "chan_info": {}
                }
            })
        );
    }

    #[test]
    fn keep_info_which_is_not_json() {
        let presence = presence_from_message(api::PresenceResult {
            presence: [(
                "client-1".to_string(),
                api::ClientInfo {
                    conn_info: b"plain-token".to_vec(),
                    chan_info: b"{".to_vec(),
                    ..Default::default()
                },
            )]
            .into(),
        });

        assert_eq!(presence["client-1"].conn_info, json!("plain-token"));
        assert_eq!(presence["client-1"].chan_info, json!("{"));
    }

    #[test]
    fn serialize_stats_and_channels_with_documented_keys() {
        let stats = PresenceStats::from(api::PresenceStatsResult {
            num_clients: 3,
            num_users: 2,
        });
        let channels = channels_from_message(api::ChannelsResult {
            channels: [("chat".to_string(), api::ChannelInfo { num_clients: 3 })].into(),
        });

        assert_eq!(
            serde_json::to_value(stats).unwrap(),
            json!({"num_clients": 3, "num_users": 2})
        );
        assert_eq!(
            serde_json::to_value(&channels).unwrap(),
            json!({"chat": {"num_clients": 3}})
        );
    }

    #[test]
    fn keep_per_channel_broadcast_errors() {
        let result = BroadcastResult::from(api::BroadcastResult {
            responses: vec![
                api::PublishResponse {
                    error: None,
                    result: Some(api::PublishResult {
                        offset: 7,
                        epoch: "xyz".into(),
                    }),
                },
                api::PublishResponse {
                    error: Some(api::Error {
                        code: 102,
                        message: "unknown channel".into(),
                    }),
                    result: None,
                },
            ],
        });

        assert_eq!(
            result.responses,
            vec![
                Ok(PublishResult {
                    offset: 7,
                    epoch: "xyz".into()
                }),
                Err(CentrifugoError::API {
                    code: 102,
                    message: "unknown channel".into()
                }),
            ]
        );
    }
}
