//! # Centrifugo server API
//!
//! This module contains [`CentrifugoApiClient`] and request builders for the
//! Centrifugo server API methods. Every builder is created by the client
//! method named after the operation and is sent with `execute`.
//!
//! # Examples
//! ```no_run
//! use centrifugo_worker::core::{CentrifugoError, Transport, TransportRequest, TransportResponse};
//! use centrifugo_worker::dx::api::CentrifugoApiClientBuilder;
//! use serde_json::json;
//!
//! # struct MyTransport;
//! # impl Transport for MyTransport {
//! #     fn call(&self, _request: TransportRequest) -> Result<TransportResponse, CentrifugoError> {
//! #         unimplemented!()
//! #     }
//! # }
//! # fn main() -> Result<(), CentrifugoError> {
//! let client = CentrifugoApiClientBuilder::with_transport(MyTransport).build()?;
//!
//! client
//!     .publish("news")
//!     .data(json!({"text": "Hello"}))
//!     .tags(vec!["greeting".to_string()])
//!     .execute()?;
//!
//! let stats = client.presence_stats("news").execute()?;
//! println!("{} users online", stats.num_users);
//! # Ok(())
//! # }
//! ```

#[doc(inline)]
pub use client::{
    ApiConfig, CentrifugoApiClient, CentrifugoApiClientBuilder, CentrifugoApiClientConfigBuilder,
};
pub mod client;

#[doc(inline)]
pub use result::{BroadcastResult, ChannelInfo, ClientPresence, PresenceStats, PublishResult};
pub mod result;

#[doc(inline)]
pub use publish::{
    BroadcastRequest, BroadcastRequestBuilder, PublishRequest, PublishRequestBuilder,
};
pub mod publish;

#[doc(inline)]
pub use subscription::{
    SubscribeRequest, SubscribeRequestBuilder, UnsubscribeRequest, UnsubscribeRequestBuilder,
};
pub mod subscription;

#[doc(inline)]
pub use connection::{
    DisconnectReason, DisconnectRequest, DisconnectRequestBuilder, RefreshRequest,
    RefreshRequestBuilder,
};
pub mod connection;

#[doc(inline)]
pub use presence::{
    PresenceRequest, PresenceRequestBuilder, PresenceStatsRequest, PresenceStatsRequestBuilder,
};
pub mod presence;

#[doc(inline)]
pub use channels::{ChannelsRequest, ChannelsRequestBuilder};
pub mod channels;

#[doc(inline)]
pub use user_block::{
    BlockUserRequest, BlockUserRequestBuilder, UnblockUserRequest, UnblockUserRequestBuilder,
};
pub mod user_block;

use crate::{core::CentrifugoError, proto::api};

/// Server API response message with `error` and `result` fields.
pub(crate) trait ApiResponse: prost::Message + Default {
    type Result: Default;

    fn into_parts(self) -> (Option<api::Error>, Option<Self::Result>);
}

macro_rules! api_response {
    ($($response:ty => $result:ty),+ $(,)?) => {
        $(
            impl ApiResponse for $response {
                type Result = $result;

                fn into_parts(self) -> (Option<api::Error>, Option<Self::Result>) {
                    (self.error, self.result)
                }
            }
        )+
    };
}

api_response!(
    api::PublishResponse => api::PublishResult,
    api::BroadcastResponse => api::BroadcastResult,
    api::SubscribeResponse => api::SubscribeResult,
    api::UnsubscribeResponse => api::UnsubscribeResult,
    api::DisconnectResponse => api::DisconnectResult,
    api::PresenceResponse => api::PresenceResult,
    api::PresenceStatsResponse => api::PresenceStatsResult,
    api::RefreshResponse => api::RefreshResult,
    api::ChannelsResponse => api::ChannelsResult,
    api::BlockUserResponse => api::BlockUserResult,
    api::UnblockUserResponse => api::UnblockUserResult,
);

/// Ensure that required string parameter has been provided.
pub(crate) fn validate_not_empty(name: &str, value: Option<&String>) -> Result<(), String> {
    match value {
        Some(value) if !value.is_empty() => Ok(()),
        _ => Err(format!("`{name}` can't be empty")),
    }
}

/// Map request builder error into crate error.
pub(crate) fn builder_error<E>(error: E) -> CentrifugoError
where
    E: std::fmt::Display,
{
    CentrifugoError::general(error.to_string())
}
