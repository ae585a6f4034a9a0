//! Proxy protocol messages.
//!
//! Messages exchanged with Centrifugo when it proxies client events to the
//! application worker. Requests are decoded from the worker payload body and
//! replies are encoded back into it.

use std::collections::HashMap;

/// Error reply to a proxied event.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Error {
    /// Application defined error code.
    #[prost(uint32, tag = "1")]
    pub code: u32,

    /// Human readable error description.
    #[prost(string, tag = "2")]
    pub message: String,

    /// Whether the client may retry the operation.
    #[prost(bool, tag = "3")]
    pub temporary: bool,
}

/// Instruction to disconnect the client which triggered the proxied event.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Disconnect {
    /// Disconnect code.
    #[prost(uint32, tag = "1")]
    pub code: u32,

    /// Disconnect reason.
    #[prost(string, tag = "2")]
    pub reason: String,

    /// Whether the client is allowed to reconnect.
    #[prost(bool, tag = "3")]
    pub reconnect: bool,
}

/// Boolean wrapper which distinguishes `false` from absent value.
#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct BoolValue {
    /// Wrapped value.
    #[prost(bool, tag = "1")]
    pub value: bool,
}

/// Per-subscription overrides of the channel namespace options.
#[derive(Clone, PartialEq, prost::Message)]
pub struct SubscribeOptionOverride {
    /// Override `presence` channel option.
    #[prost(message, optional, tag = "1")]
    pub presence: Option<BoolValue>,

    /// Override `join_leave` channel option.
    #[prost(message, optional, tag = "2")]
    pub join_leave: Option<BoolValue>,

    /// Override `force_recovery` channel option.
    #[prost(message, optional, tag = "3")]
    pub force_recovery: Option<BoolValue>,

    /// Override `force_positioning` channel option.
    #[prost(message, optional, tag = "4")]
    pub force_positioning: Option<BoolValue>,

    /// Override `force_push_join_leave` channel option.
    #[prost(message, optional, tag = "5")]
    pub force_push_join_leave: Option<BoolValue>,
}

/// Options of the server-side subscription created on connect.
#[derive(Clone, PartialEq, prost::Message)]
pub struct SubscribeOptions {
    /// Unix time (seconds) when subscription expires.
    #[prost(int64, tag = "1")]
    pub expire_at: i64,

    /// JSON encoded channel info.
    #[prost(bytes = "vec", tag = "2")]
    pub info: Vec<u8>,

    /// JSON encoded custom data.
    #[prost(bytes = "vec", tag = "4")]
    pub data: Vec<u8>,

    /// Channel options overrides.
    #[prost(message, optional, tag = "6")]
    pub r#override: Option<SubscribeOptionOverride>,
}

/// Client connection attempt.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ConnectRequest {
    #[prost(string, tag = "1")]
    pub client: String,
    #[prost(string, tag = "2")]
    pub transport: String,
    #[prost(string, tag = "3")]
    pub protocol: String,
    #[prost(string, tag = "4")]
    pub encoding: String,

    /// JSON encoded data sent by client.
    #[prost(bytes = "vec", tag = "10")]
    pub data: Vec<u8>,

    /// Client SDK name.
    #[prost(string, tag = "12")]
    pub name: String,

    /// Client SDK version.
    #[prost(string, tag = "13")]
    pub version: String,

    /// Channels client wants to be subscribed to.
    #[prost(string, repeated, tag = "14")]
    pub channels: Vec<String>,
}

/// Application decision on the connection attempt.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ConnectResult {
    #[prost(string, tag = "1")]
    pub user: String,
    #[prost(int64, tag = "2")]
    pub expire_at: i64,
    #[prost(bytes = "vec", tag = "3")]
    pub info: Vec<u8>,
    #[prost(bytes = "vec", tag = "5")]
    pub data: Vec<u8>,
    #[prost(string, repeated, tag = "7")]
    pub channels: Vec<String>,
    #[prost(map = "string, message", tag = "8")]
    pub subs: HashMap<String, SubscribeOptions>,
    #[prost(bytes = "vec", tag = "9")]
    pub meta: Vec<u8>,
}

/// Connection refresh request.
#[derive(Clone, PartialEq, prost::Message)]
pub struct RefreshRequest {
    #[prost(string, tag = "1")]
    pub client: String,
    #[prost(string, tag = "2")]
    pub transport: String,
    #[prost(string, tag = "3")]
    pub protocol: String,
    #[prost(string, tag = "4")]
    pub encoding: String,
    #[prost(string, tag = "10")]
    pub user: String,
    #[prost(bytes = "vec", tag = "11")]
    pub meta: Vec<u8>,
}

/// Application decision on the connection refresh.
#[derive(Clone, PartialEq, prost::Message)]
pub struct RefreshResult {
    #[prost(bool, tag = "1")]
    pub expired: bool,
    #[prost(int64, tag = "2")]
    pub expire_at: i64,
    #[prost(bytes = "vec", tag = "3")]
    pub info: Vec<u8>,
}

/// Channel subscription attempt.
#[derive(Clone, PartialEq, prost::Message)]
pub struct SubscribeRequest {
    #[prost(string, tag = "1")]
    pub client: String,
    #[prost(string, tag = "2")]
    pub transport: String,
    #[prost(string, tag = "3")]
    pub protocol: String,
    #[prost(string, tag = "4")]
    pub encoding: String,
    #[prost(string, tag = "10")]
    pub user: String,
    #[prost(string, tag = "11")]
    pub channel: String,
    #[prost(string, tag = "12")]
    pub token: String,
    #[prost(bytes = "vec", tag = "13")]
    pub meta: Vec<u8>,
    #[prost(bytes = "vec", tag = "14")]
    pub data: Vec<u8>,
}

/// Application decision on the subscription attempt.
#[derive(Clone, PartialEq, prost::Message)]
pub struct SubscribeResult {
    #[prost(bytes = "vec", tag = "2")]
    pub info: Vec<u8>,
    #[prost(bytes = "vec", tag = "4")]
    pub data: Vec<u8>,
    #[prost(message, optional, tag = "6")]
    pub r#override: Option<SubscribeOptionOverride>,
    #[prost(string, repeated, tag = "7")]
    pub allow: Vec<String>,
}

/// Publication attempt.
#[derive(Clone, PartialEq, prost::Message)]
pub struct PublishRequest {
    #[prost(string, tag = "1")]
    pub client: String,
    #[prost(string, tag = "2")]
    pub transport: String,
    #[prost(string, tag = "3")]
    pub protocol: String,
    #[prost(string, tag = "4")]
    pub encoding: String,
    #[prost(string, tag = "10")]
    pub user: String,
    #[prost(string, tag = "11")]
    pub channel: String,
    #[prost(bytes = "vec", tag = "12")]
    pub data: Vec<u8>,
    #[prost(bytes = "vec", tag = "14")]
    pub meta: Vec<u8>,
}

/// Application decision on the publication attempt.
#[derive(Clone, PartialEq, prost::Message)]
pub struct PublishResult {
    #[prost(bytes = "vec", tag = "1")]
    pub data: Vec<u8>,
    #[prost(bool, tag = "3")]
    pub skip_history: bool,
}

/// Remote procedure call sent by client.
#[derive(Clone, PartialEq, prost::Message)]
pub struct RpcRequest {
    #[prost(string, tag = "1")]
    pub client: String,
    #[prost(string, tag = "2")]
    pub transport: String,
    #[prost(string, tag = "3")]
    pub protocol: String,
    #[prost(string, tag = "4")]
    pub encoding: String,
    #[prost(bytes = "vec", tag = "10")]
    pub data: Vec<u8>,
    #[prost(string, tag = "12")]
    pub user: String,
    #[prost(string, tag = "13")]
    pub method: String,
    #[prost(bytes = "vec", tag = "14")]
    pub meta: Vec<u8>,
}

/// Remote procedure call outcome.
#[derive(Clone, PartialEq, prost::Message)]
pub struct RpcResult {
    #[prost(bytes = "vec", tag = "1")]
    pub data: Vec<u8>,
}

macro_rules! proxy_response {
    ($(#[$meta:meta])* $name:ident, $result:ty) => {
        $(#[$meta])*
        ///
        /// Exactly one of `result`, `error` or `disconnect` is expected to be
        /// set.
        #[derive(Clone, PartialEq, prost::Message)]
        pub struct $name {
            /// Successful outcome.
            #[prost(message, optional, tag = "1")]
            pub result: Option<$result>,

            /// Event rejected with error.
            #[prost(message, optional, tag = "2")]
            pub error: Option<Error>,

            /// Event rejected with client disconnection.
            #[prost(message, optional, tag = "3")]
            pub disconnect: Option<Disconnect>,
        }
    };
}

proxy_response!(
    /// Reply to [`ConnectRequest`].
    ConnectResponse,
    ConnectResult
);
proxy_response!(
    /// Reply to [`RefreshRequest`].
    RefreshResponse,
    RefreshResult
);
proxy_response!(
    /// Reply to [`SubscribeRequest`].
    SubscribeResponse,
    SubscribeResult
);
proxy_response!(
    /// Reply to [`PublishRequest`].
    PublishResponse,
    PublishResult
);
proxy_response!(
    /// Reply to [`RpcRequest`].
    RpcResponse,
    RpcResult
);
