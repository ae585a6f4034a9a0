//! # Proxy replies
//!
//! Application level replies to the proxied events and their mapping into
//! the proxy protocol result messages.
//!
//! JSON documents (`data`, `info`, `meta`) which are empty (`null`, `{}` or
//! `[]`) are not sent. Every [`Override`] flag is sent only when it has been
//! set, so `Some(false)` and `None` reach Centrifugo as different values.

#[doc(inline)]
pub use connect::{ConnectResponse, SubscribeOption};
pub mod connect;

#[doc(inline)]
pub use refresh::RefreshResponse;
pub mod refresh;

#[doc(inline)]
pub use subscribe::SubscribeResponse;
pub mod subscribe;

#[doc(inline)]
pub use publish::PublishResponse;
pub mod publish;

#[doc(inline)]
pub use rpc::RpcResponse;
pub mod rpc;

use super::RequestType;
use crate::{
    core::ExpireAt,
    proto::proxy::{BoolValue, SubscribeOptionOverride},
};

/// Channel namespace options overrides.
///
/// Every flag is tri-state: `None` keeps the namespace configuration,
/// `Some(_)` replaces it for the subscription.
///
/// # Examples
/// ```
/// use centrifugo_worker::dx::worker::payloads::Override;
///
/// let options = Override {
///     presence: Some(true),
///     join_leave: Some(false),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Override {
    /// Enable or disable presence.
    pub presence: Option<bool>,

    /// Enable or disable join / leave messages.
    pub join_leave: Option<bool>,

    /// Enable or disable join / leave messages delivered with push.
    pub force_push_join_leave: Option<bool>,

    /// Enable or disable stream positioning.
    pub force_positioning: Option<bool>,

    /// Enable or disable automatic recovery.
    pub force_recovery: Option<bool>,
}

impl From<&Override> for SubscribeOptionOverride {
    fn from(value: &Override) -> Self {
        let wrap = |flag: Option<bool>| flag.map(|value| BoolValue { value });

        Self {
            presence: wrap(value.presence),
            join_leave: wrap(value.join_leave),
            force_recovery: wrap(value.force_recovery),
            force_positioning: wrap(value.force_positioning),
            force_push_join_leave: wrap(value.force_push_join_leave),
        }
    }
}

/// Unix time in seconds, `0` (not sent) when expiration isn't set.
pub(crate) fn expire_at_seconds(expire_at: Option<ExpireAt>) -> i64 {
    expire_at.map(|moment| moment.timestamp()).unwrap_or_default()
}

/// Reply to any proxied event.
///
/// Used with [`Request::respond`] when the request kind is known only at
/// runtime.
///
/// [`Request::respond`]: crate::dx::worker::requests::Request::respond
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// Reply to the connection attempt.
    Connect(ConnectResponse),

    /// Reply to the connection refresh.
    Refresh(RefreshResponse),

    /// Reply to the subscription attempt.
    Subscribe(SubscribeResponse),

    /// Reply to the publication attempt.
    Publish(PublishResponse),

    /// Reply to the remote procedure call.
    Rpc(RpcResponse),
}

impl Response {
    /// Type of the request this reply belongs to.
    pub fn request_type(&self) -> RequestType {
        match self {
            Response::Connect(_) => RequestType::Connect,
            Response::Refresh(_) => RequestType::Refresh,
            Response::Subscribe(_) => RequestType::Subscribe,
            Response::Publish(_) => RequestType::Publish,
            Response::Rpc(_) => RequestType::Rpc,
        }
    }
}

macro_rules! response_from {
    ($($variant:ident => $response:ty),+ $(,)?) => {
        $(
            impl From<$response> for Response {
                fn from(value: $response) -> Self {
                    Response::$variant(value)
                }
            }
        )+
    };
}

response_from!(
    Connect => ConnectResponse,
    Refresh => RefreshResponse,
    Subscribe => SubscribeResponse,
    Publish => PublishResponse,
    Rpc => RpcResponse,
);

#[cfg(test)]
mod should {
    use super::*;
    use test_case::test_case;

    #[test]
    fn leave_unset_override_flags_absent() {
        let message = SubscribeOptionOverride::from(&Override::default());

        assert_eq!(message, SubscribeOptionOverride::default());
        assert!(message.presence.is_none());
        assert!(message.join_leave.is_none());
        assert!(message.force_push_join_leave.is_none());
        assert!(message.force_positioning.is_none());
        assert!(message.force_recovery.is_none());
    }

    #[test]
    fn set_only_provided_override_flags() {
        let message = SubscribeOptionOverride::from(&Override {
            presence: Some(true),
            ..Default::default()
        });

        assert_eq!(message.presence, Some(BoolValue { value: true }));
        assert!(message.join_leave.is_none());
        assert!(message.force_push_join_leave.is_none());
        assert!(message.force_positioning.is_none());
        assert!(message.force_recovery.is_none());
    }

    #[test]
    fn keep_false_override_flag_distinct_from_unset() {
        let message = SubscribeOptionOverride::from(&Override {
            force_recovery: Some(false),
            ..Default::default()
        });

        assert_eq!(message.force_recovery, Some(BoolValue { value: false }));
        assert_ne!(message, SubscribeOptionOverride::default());
    }

    #[test_case(Response::Connect(Default::default()), RequestType::Connect)]
    #[test_case(Response::Refresh(Default::default()), RequestType::Refresh)]
    #[test_case(Response::Subscribe(Default::default()), RequestType::Subscribe)]
    #[test_case(Response::Publish(Default::default()), RequestType::Publish)]
    #[test_case(Response::Rpc(Default::default()), RequestType::Rpc)]
    fn know_request_type(response: Response, request_type: RequestType) {
        assert_eq!(response.request_type(), request_type);
    }
}
