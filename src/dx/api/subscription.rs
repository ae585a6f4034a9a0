//! Server-side subscriptions module.
//!
//! The [`SubscribeRequestBuilder`] subscribes user connections to a channel
//! and the [`UnsubscribeRequestBuilder`] removes them from it.

use super::{builder_error, validate_not_empty, CentrifugoApiClient};
use crate::{
    core::{CentrifugoError, ExpireAt, Transport},
    proto::api,
    providers::serialization_serde::serialize_json_field,
};
use derive_builder::Builder;
use serde_json::Value;

impl<T> CentrifugoApiClient<T> {
    /// Create a new subscribe request builder.
    ///
    /// Subscribes all `user` connections (or one of them, see
    /// [`SubscribeRequestBuilder::client`]) to the `channel`.
    pub fn subscribe<C, U>(&self, channel: C, user: U) -> SubscribeRequestBuilder<T>
    where
        C: Into<String>,
        U: Into<String>,
    {
        SubscribeRequestBuilder {
            api_client: Some(self.clone()),
            channel: Some(channel.into()),
            user: Some(user.into()),
            ..Default::default()
        }
    }

    /// Create a new unsubscribe request builder.
    pub fn unsubscribe<C, U>(&self, channel: C, user: U) -> UnsubscribeRequestBuilder<T>
    where
        C: Into<String>,
        U: Into<String>,
    {
        UnsubscribeRequestBuilder {
            api_client: Some(self.clone()),
            channel: Some(channel.into()),
            user: Some(user.into()),
            ..Default::default()
        }
    }
}

/// The subscribe request builder.
///
/// This struct is used by the [`subscribe`] method of the
/// [`CentrifugoApiClient`].
///
/// [`subscribe`]: crate::dx::api::CentrifugoApiClient::subscribe
#[derive(Builder, Debug)]
#[builder(
    pattern = "owned",
    build_fn(vis = "pub(in crate::dx::api)", validate = "Self::validate")
)]
pub struct SubscribeRequest<T> {
    /// Current client which can provide transportation to perform the
    /// request.
    #[builder(field(vis = "pub(in crate::dx::api)"), setter(custom))]
    pub(in crate::dx::api) api_client: CentrifugoApiClient<T>,

    /// Channel to subscribe to.
    #[builder(field(vis = "pub(in crate::dx::api)"), setter(custom))]
    pub(in crate::dx::api) channel: String,

    /// User whose connections should be subscribed.
    #[builder(field(vis = "pub(in crate::dx::api)"), setter(custom))]
    pub(in crate::dx::api) user: String,

    /// When subscription expires.
    #[builder(
        field(vis = "pub(in crate::dx::api)"),
        setter(strip_option, into),
        default = "None"
    )]
    pub(in crate::dx::api) expire_at: Option<ExpireAt>,

    /// Channel info attached to the subscription.
    #[builder(
        field(vis = "pub(in crate::dx::api)"),
        setter(strip_option, into),
        default = "None"
    )]
    pub(in crate::dx::api) info: Option<Value>,

    /// Subscribe only this client connection.
    #[builder(
        field(vis = "pub(in crate::dx::api)"),
        setter(strip_option, into),
        default = "None"
    )]
    pub(in crate::dx::api) client: Option<String>,

    /// Data sent to the client on subscribe.
    #[builder(
        field(vis = "pub(in crate::dx::api)"),
        setter(strip_option, into),
        default = "None"
    )]
    pub(in crate::dx::api) data: Option<Value>,

    /// Subscribe only connections with this session.
    #[builder(
        field(vis = "pub(in crate::dx::api)"),
        setter(strip_option, into),
        default = "None"
    )]
    pub(in crate::dx::api) session: Option<String>,
}

impl<T> SubscribeRequestBuilder<T> {
    /// Validate user-provided data for request builder.
    fn validate(&self) -> Result<(), String> {
        validate_not_empty("channel", self.channel.as_ref())
            .and_then(|_| validate_not_empty("user", self.user.as_ref()))
    }
}

impl<T> SubscribeRequest<T> {
    /// Create server API message from the request builder.
    pub(in crate::dx::api) fn message(&self) -> Result<api::SubscribeRequest, CentrifugoError> {
        Ok(api::SubscribeRequest {
            channel: self.channel.clone(),
            user: self.user.clone(),
            expire_at: self.expire_at.map(i64::from).unwrap_or_default(),
            info: self
                .info
                .as_ref()
                .map_or_else(|| Ok(Vec::new()), serialize_json_field)?,
            client: self.client.clone().unwrap_or_default(),
            data: self
                .data
                .as_ref()
                .map_or_else(|| Ok(Vec::new()), serialize_json_field)?,
            session: self.session.clone().unwrap_or_default(),
        })
    }
}

impl<T> SubscribeRequestBuilder<T>
where
    T: Transport,
{
    /// Build and call the request.
    pub fn execute(self) -> Result<(), CentrifugoError> {
        let request = self.build().map_err(builder_error)?;

        request
            .api_client
            .call::<_, api::SubscribeResponse>("Subscribe", request.message()?)
            .map(|_| ())
    }
}

/// The unsubscribe request builder.
///
/// This struct is used by the [`unsubscribe`] method of the
/// [`CentrifugoApiClient`].
///
/// [`unsubscribe`]: crate::dx::api::CentrifugoApiClient::unsubscribe
#[derive(Builder, Debug)]
#[builder(
    pattern = "owned",
    build_fn(vis = "pub(in crate::dx::api)", validate = "Self::validate")
)]
pub struct UnsubscribeRequest<T> {
    /// Current client which can provide transportation to perform the
    /// request.
    #[builder(field(vis = "pub(in crate::dx::api)"), setter(custom))]
    pub(in crate::dx::api) api_client: CentrifugoApiClient<T>,

    /// Channel to unsubscribe from.
    #[builder(field(vis = "pub(in crate::dx::api)"), setter(custom))]
    pub(in crate::dx::api) channel: String,

    /// User whose connections should be unsubscribed.
    #[builder(field(vis = "pub(in crate::dx::api)"), setter(custom))]
    pub(in crate::dx::api) user: String,

    /// Unsubscribe only this client connection.
    #[builder(
        field(vis = "pub(in crate::dx::api)"),
        setter(strip_option, into),
        default = "None"
    )]
    pub(in crate::dx::api) client: Option<String>,

    /// Unsubscribe only connections with this session.
    #[builder(
        field(vis = "pub(in crate::dx::api)"),
        setter(strip_option, into),
        default = "None"
    )]
    pub(in crate::dx::api) session: Option<String>,
}

impl<T> UnsubscribeRequestBuilder<T> {
    /// Validate user-provided data for request builder.
    fn validate(&self) -> Result<(), String> {
        validate_not_empty("channel", self.channel.as_ref())
            .and_then(|_| validate_not_empty("user", self.user.as_ref()))
    }
}

impl<T> UnsubscribeRequest<T> {
    /// Create server API message from the request builder.
    pub(in crate::dx::api) fn message(&self) -> api::UnsubscribeRequest {
        api::UnsubscribeRequest {
            channel: self.channel.clone(),
            user: self.user.clone(),
            client: self.client.clone().unwrap_or_default(),
            session: self.session.clone().unwrap_or_default(),
        }
    }
}

impl<T> UnsubscribeRequestBuilder<T>
where
    T: Transport,
{
    /// Build and call the request.
    pub fn execute(self) -> Result<(), CentrifugoError> {
        let request = self.build().map_err(builder_error)?;

        request
            .api_client
            .call::<_, api::UnsubscribeResponse>("Unsubscribe", request.message())
            .map(|_| ())
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use crate::dx::api::{tests::MockTransport, CentrifugoApiClientBuilder};
    use serde_json::json;
    use time::macros::datetime;

    #[test]
    fn send_subscribe_request_with_normalized_expire_at() {
        let transport = MockTransport::replying(api::SubscribeResponse::default());
        let client = CentrifugoApiClientBuilder::with_transport(&transport)
            .build()
            .unwrap();

        client
            .subscribe("chat", "user-1")
            .expire_at(datetime!(2022-11-08 07:30:03 UTC))
            .info(json!({"role": "moderator"}))
            .client("client-1")
            .execute()
            .unwrap();

        let (method, request) = transport.request::<api::SubscribeRequest>();
        assert_eq!(method, "centrifuge.Subscribe");
        assert_eq!(
            request,
            api::SubscribeRequest {
                channel: "chat".into(),
                user: "user-1".into(),
                expire_at: 1667892603,
                info: br#"{"role":"moderator"}"#.to_vec(),
                client: "client-1".into(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn send_unsubscribe_request() {
        let transport = MockTransport::replying(api::UnsubscribeResponse::default());
        let client = CentrifugoApiClientBuilder::with_transport(&transport)
            .build()
            .unwrap();

        client
            .unsubscribe("chat", "user-1")
            .session("session-1")
            .execute()
            .unwrap();

        let (method, request) = transport.request::<api::UnsubscribeRequest>();
        assert_eq!(method, "centrifuge.Unsubscribe");
        assert_eq!(
            request,
            api::UnsubscribeRequest {
                channel: "chat".into(),
                user: "user-1".into(),
                session: "session-1".into(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn reject_subscribe_without_user() {
        let transport = MockTransport::default();
        let client = CentrifugoApiClientBuilder::with_transport(&transport)
            .build()
            .unwrap();

        let result = client.subscribe("chat", "").execute();

        assert!(matches!(result, Err(CentrifugoError::General { .. })));
        assert!(transport.calls().is_empty());
    }
}
