//! Proxy request types.
//!
//! The [`RequestType`] is the only discriminant used to pick the message
//! which should be decoded from the proxy payload body. Its value is sent by
//! the worker transport in the `type` header.

use crate::core::CentrifugoError;
use std::{fmt, str::FromStr};

/// Kind of the event proxied by Centrifugo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestType {
    /// Client connection attempt.
    Connect,

    /// Client connection refresh.
    Refresh,

    /// Client subscription attempt.
    Subscribe,

    /// Client publication attempt.
    Publish,

    /// Client remote procedure call.
    Rpc,
}

impl RequestType {
    /// Every supported request type.
    pub const ALL: [RequestType; 5] = [
        RequestType::Connect,
        RequestType::Refresh,
        RequestType::Subscribe,
        RequestType::Publish,
        RequestType::Rpc,
    ];

    /// Value used in the `type` header for this request type.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestType::Connect => "connect",
            RequestType::Refresh => "refresh",
            RequestType::Subscribe => "subscribe",
            RequestType::Publish => "publish",
            RequestType::Rpc => "rpc",
        }
    }
}

impl FromStr for RequestType {
    type Err = CentrifugoError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        RequestType::ALL
            .into_iter()
            .find(|request_type| request_type.as_str() == value)
            .ok_or_else(|| CentrifugoError::UnsupportedRequestType {
                request_type: value.into(),
            })
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
