//! Server API messages.
//!
//! Requests and responses of the Centrifugo server API methods
//! (`centrifuge.Publish`, `centrifuge.Presence` and so on).

use std::collections::HashMap;

/// Error returned by the server API.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Error {
    #[prost(uint32, tag = "1")]
    pub code: u32,
    #[prost(string, tag = "2")]
    pub message: String,
}

/// Disconnect instruction sent along with user disconnection.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Disconnect {
    #[prost(uint32, tag = "1")]
    pub code: u32,
    #[prost(string, tag = "2")]
    pub reason: String,
    #[prost(bool, tag = "3")]
    pub reconnect: bool,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct PublishRequest {
    #[prost(string, tag = "1")]
    pub channel: String,
    #[prost(bytes = "vec", tag = "2")]
    pub data: Vec<u8>,
    #[prost(bool, tag = "4")]
    pub skip_history: bool,
    #[prost(string, repeated, tag = "5")]
    pub tags: Vec<String>,
}

/// Position of the publication in the channel history stream.
#[derive(Clone, PartialEq, prost::Message)]
pub struct PublishResult {
    #[prost(uint64, tag = "1")]
    pub offset: u64,
    #[prost(string, tag = "2")]
    pub epoch: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct BroadcastRequest {
    #[prost(string, repeated, tag = "1")]
    pub channels: Vec<String>,
    #[prost(bytes = "vec", tag = "2")]
    pub data: Vec<u8>,
    #[prost(bool, tag = "4")]
    pub skip_history: bool,
    #[prost(string, repeated, tag = "5")]
    pub tags: Vec<String>,
}

/// Per-channel publish outcomes in the order of broadcast channels.
#[derive(Clone, PartialEq, prost::Message)]
pub struct BroadcastResult {
    #[prost(message, repeated, tag = "1")]
    pub responses: Vec<PublishResponse>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct SubscribeRequest {
    #[prost(string, tag = "1")]
    pub channel: String,
    #[prost(string, tag = "2")]
    pub user: String,
    #[prost(int64, tag = "3")]
    pub expire_at: i64,
    #[prost(bytes = "vec", tag = "4")]
    pub info: Vec<u8>,
    #[prost(string, tag = "6")]
    pub client: String,
    #[prost(bytes = "vec", tag = "7")]
    pub data: Vec<u8>,
    #[prost(string, tag = "11")]
    pub session: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct UnsubscribeRequest {
    #[prost(string, tag = "1")]
    pub channel: String,
    #[prost(string, tag = "2")]
    pub user: String,
    #[prost(string, tag = "3")]
    pub client: String,
    #[prost(string, tag = "4")]
    pub session: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DisconnectRequest {
    #[prost(string, tag = "1")]
    pub user: String,
    #[prost(message, optional, tag = "2")]
    pub disconnect: Option<Disconnect>,
    #[prost(string, tag = "3")]
    pub client: String,
    #[prost(string, repeated, tag = "4")]
    pub whitelist: Vec<String>,
    #[prost(string, tag = "5")]
    pub session: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct PresenceRequest {
    #[prost(string, tag = "1")]
    pub channel: String,
}

/// Information about client connected to the channel.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ClientInfo {
    #[prost(string, tag = "1")]
    pub user: String,
    #[prost(string, tag = "2")]
    pub client: String,
    #[prost(bytes = "vec", tag = "3")]
    pub conn_info: Vec<u8>,
    #[prost(bytes = "vec", tag = "4")]
    pub chan_info: Vec<u8>,
}

/// Channel presence: client id mapped to the client information.
#[derive(Clone, PartialEq, prost::Message)]
pub struct PresenceResult {
    #[prost(map = "string, message", tag = "1")]
    pub presence: HashMap<String, ClientInfo>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct PresenceStatsRequest {
    #[prost(string, tag = "1")]
    pub channel: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct PresenceStatsResult {
    #[prost(uint32, tag = "1")]
    pub num_clients: u32,
    #[prost(uint32, tag = "2")]
    pub num_users: u32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct RefreshRequest {
    #[prost(string, tag = "1")]
    pub user: String,
    #[prost(string, tag = "2")]
    pub client: String,
    #[prost(bool, tag = "3")]
    pub expired: bool,
    #[prost(int64, tag = "4")]
    pub expire_at: i64,
    #[prost(bytes = "vec", tag = "5")]
    pub info: Vec<u8>,
    #[prost(string, tag = "6")]
    pub session: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ChannelsRequest {
    #[prost(string, tag = "1")]
    pub pattern: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ChannelInfo {
    #[prost(uint32, tag = "1")]
    pub num_clients: u32,
}

/// Active channels: channel name mapped to the channel information.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ChannelsResult {
    #[prost(map = "string, message", tag = "1")]
    pub channels: HashMap<String, ChannelInfo>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct BlockUserRequest {
    #[prost(int64, tag = "1")]
    pub expire_at: i64,
    #[prost(string, tag = "2")]
    pub user: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct UnblockUserRequest {
    #[prost(string, tag = "1")]
    pub user: String,
}

macro_rules! empty_result {
    ($($name:ident),+ $(,)?) => {
        $(
            #[derive(Clone, Copy, PartialEq, prost::Message)]
            pub struct $name {}
        )+
    };
}

empty_result!(
    RefreshResult,
    SubscribeResult,
    UnsubscribeResult,
    DisconnectResult,
    BlockUserResult,
    UnblockUserResult,
);

macro_rules! api_response {
    ($($name:ident => $result:ty),+ $(,)?) => {
        $(
            #[derive(Clone, PartialEq, prost::Message)]
            pub struct $name {
                #[prost(message, optional, tag = "1")]
                pub error: Option<Error>,
                #[prost(message, optional, tag = "2")]
                pub result: Option<$result>,
            }
        )+
    };
}

api_response!(
    PublishResponse => PublishResult,
    BroadcastResponse => BroadcastResult,
    SubscribeResponse => SubscribeResult,
    UnsubscribeResponse => UnsubscribeResult,
    DisconnectResponse => DisconnectResult,
    PresenceResponse => PresenceResult,
    PresenceStatsResponse => PresenceStatsResult,
    RefreshResponse => RefreshResult,
    ChannelsResponse => ChannelsResult,
    BlockUserResponse => BlockUserResult,
    UnblockUserResponse => UnblockUserResult,
);
