//! User connections management module.
//!
//! The [`RefreshRequestBuilder`] updates connection expiration and the
//! [`DisconnectRequestBuilder`] closes user connections.

use super::{builder_error, validate_not_empty, CentrifugoApiClient};
use crate::{
    core::{CentrifugoError, ExpireAt, Transport},
    proto::api,
    providers::serialization_serde::serialize_json_field,
};
use derive_builder::Builder;
use serde_json::Value;

impl<T> CentrifugoApiClient<T> {
    /// Create a new connection refresh request builder.
    pub fn refresh<U>(&self, user: U) -> RefreshRequestBuilder<T>
    where
        U: Into<String>,
    {
        RefreshRequestBuilder {
            api_client: Some(self.clone()),
            user: Some(user.into()),
            ..Default::default()
        }
    }

    /// Create a new disconnect request builder.
    pub fn disconnect<U>(&self, user: U) -> DisconnectRequestBuilder<T>
    where
        U: Into<String>,
    {
        DisconnectRequestBuilder {
            api_client: Some(self.clone()),
            user: Some(user.into()),
            ..Default::default()
        }
    }
}

/// The connection refresh request builder.
///
/// This struct is used by the [`refresh`] method of the
/// [`CentrifugoApiClient`].
///
/// [`refresh`]: crate::dx::api::CentrifugoApiClient::refresh
#[derive(Builder, Debug)]
#[builder(
    pattern = "owned",
    build_fn(vis = "pub(in crate::dx::api)", validate = "Self::validate")
)]
pub struct RefreshRequest<T> {
    /// Current client which can provide transportation to perform the
    /// request.
    #[builder(field(vis = "pub(in crate::dx::api)"), setter(custom))]
    pub(in crate::dx::api) api_client: CentrifugoApiClient<T>,

    /// User whose connections should be refreshed.
    #[builder(field(vis = "pub(in crate::dx::api)"), setter(custom))]
    pub(in crate::dx::api) user: String,

    /// Refresh only this client connection.
    #[builder(
        field(vis = "pub(in crate::dx::api)"),
        setter(strip_option, into),
        default = "None"
    )]
    pub(in crate::dx::api) client: Option<String>,

    /// Refresh only connections with this session.
    #[builder(
        field(vis = "pub(in crate::dx::api)"),
        setter(strip_option, into),
        default = "None"
    )]
    pub(in crate::dx::api) session: Option<String>,

    /// Mark connections as expired.
    #[builder(
        field(vis = "pub(in crate::dx::api)"),
        setter(strip_option),
        default = "None"
    )]
    pub(in crate::dx::api) expired: Option<bool>,

    /// When connections should be refreshed next time.
    #[builder(
        field(vis = "pub(in crate::dx::api)"),
        setter(strip_option, into),
        default = "None"
    )]
    pub(in crate::dx::api) expire_at: Option<ExpireAt>,

    /// Updated connection info.
    #[builder(
        field(vis = "pub(in crate::dx::api)"),
        setter(strip_option, into),
        default = "None"
    )]
    pub(in crate::dx::api) info: Option<Value>,
}

impl<T> RefreshRequestBuilder<T> {
    /// Validate user-provided data for request builder.
    fn validate(&self) -> Result<(), String> {
        validate_not_empty("user", self.user.as_ref())
    }
}

impl<T> RefreshRequest<T> {
    /// Create server API message from the request builder.
    pub(in crate::dx::api) fn message(&self) -> Result<api::RefreshRequest, CentrifugoError> {
        Ok(api::RefreshRequest {
            user: self.user.clone(),
            client: self.client.clone().unwrap_or_default(),
            expired: self.expired.unwrap_or_default(),
            expire_at: self.expire_at.map(i64::from).unwrap_or_default(),
            info: self
                .info
                .as_ref()
                .map_or_else(|| Ok(Vec::new()), serialize_json_field)?,
            session: self.session.clone().unwrap_or_default(),
        })
    }
}

impl<T> RefreshRequestBuilder<T>
where
    T: Transport,
{
    /// Build and call the request.
    pub fn execute(self) -> Result<(), CentrifugoError> {
        let request = self.build().map_err(builder_error)?;

        request
            .api_client
            .call::<_, api::RefreshResponse>("Refresh", request.message()?)
            .map(|_| ())
    }
}

/// Code and reason sent to the disconnected clients.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisconnectReason {
    /// Disconnect code.
    pub code: u32,

    /// Disconnect reason.
    pub reason: String,

    /// Whether clients may reconnect.
    pub reconnect: bool,
}

/// The disconnect request builder.
///
/// This struct is used by the [`disconnect`] method of the
/// [`CentrifugoApiClient`].
///
/// [`disconnect`]: crate::dx::api::CentrifugoApiClient::disconnect
#[derive(Builder, Debug)]
#[builder(
    pattern = "owned",
    build_fn(vis = "pub(in crate::dx::api)", validate = "Self::validate")
)]
pub struct DisconnectRequest<T> {
    /// Current client which can provide transportation to perform the
    /// request.
    #[builder(field(vis = "pub(in crate::dx::api)"), setter(custom))]
    pub(in crate::dx::api) api_client: CentrifugoApiClient<T>,

    /// User whose connections should be closed.
    #[builder(field(vis = "pub(in crate::dx::api)"), setter(custom))]
    pub(in crate::dx::api) user: String,

    /// Disconnect only this client connection.
    #[builder(
        field(vis = "pub(in crate::dx::api)"),
        setter(strip_option, into),
        default = "None"
    )]
    pub(in crate::dx::api) client: Option<String>,

    /// Client connections which should stay connected.
    #[builder(
        field(vis = "pub(in crate::dx::api)"),
        setter(into),
        default = "vec![]"
    )]
    pub(in crate::dx::api) whitelist: Vec<String>,

    /// Disconnect only connections with this session.
    #[builder(
        field(vis = "pub(in crate::dx::api)"),
        setter(strip_option, into),
        default = "None"
    )]
    pub(in crate::dx::api) session: Option<String>,

    /// Code and reason sent to the clients.
    #[builder(
        field(vis = "pub(in crate::dx::api)"),
        setter(strip_option),
        default = "None"
    )]
    pub(in crate::dx::api) disconnect: Option<DisconnectReason>,
}

impl<T> DisconnectRequestBuilder<T> {
    /// Validate user-provided data for request builder.
    fn validate(&self) -> Result<(), String> {
        validate_not_empty("user", self.user.as_ref())
    }
}

impl<T> DisconnectRequest<T> {
    /// Create server API message from the request builder.
    pub(in crate::dx::api) fn message(&self) -> api::DisconnectRequest {
        api::DisconnectRequest {
            user: self.user.clone(),
            disconnect: self
                .disconnect
                .as_ref()
                .map(|disconnect| api::Disconnect {
                    code: disconnect.code,
                    reason: disconnect.reason.clone(),
                    reconnect: disconnect.reconnect,
                }),
            client: self.client.clone().unwrap_or_default(),
            whitelist: self.whitelist.clone(),
            session: self.session.clone().unwrap_or_default(),
        }
    }
}

impl<T> DisconnectRequestBuilder<T>
where
    T: Transport,
{
    /// Build and call the request.
    pub fn execute(self) -> Result<(), CentrifugoError> {
        let request = self.build().map_err(builder_error)?;

        request
            .api_client
            .call::<_, api::DisconnectResponse>("Disconnect", request.message())
            .map(|_| ())
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use crate::dx::api::{tests::MockTransport, CentrifugoApiClientBuilder};

    #[test]
    fn send_refresh_request() {
        let transport = MockTransport::replying(api::RefreshResponse::default());
        let client = CentrifugoApiClientBuilder::with_transport(&transport)
            .build()
            .unwrap();

        client
            .refresh("user-1")
            .expired(true)
            .expire_at(1667892603_i64)
            .execute()
            .unwrap();

        let (method, request) = transport.request::<api::RefreshRequest>();
        assert_eq!(method, "centrifuge.Refresh");
        assert_eq!(
            request,
            api::RefreshRequest {
                user: "user-1".into(),
                expired: true,
                expire_at: 1667892603,
                ..Default::default()
            }
        );
    }

    #[test]
    fn send_disconnect_request() {
        let transport = MockTransport::replying(api::DisconnectResponse::default());
        let client = CentrifugoApiClientBuilder::with_transport(&transport)
            .build()
            .unwrap();

        client
            .disconnect("user-1")
            .whitelist(vec!["client-2".to_string()])
            .disconnect(DisconnectReason {
                code: 4000,
                reason: "Banned".into(),
                reconnect: true,
            })
            .execute()
            .unwrap();

        let (method, request) = transport.request::<api::DisconnectRequest>();
        assert_eq!(method, "centrifuge.Disconnect");
        assert_eq!(
            request,
            api::DisconnectRequest {
                user: "user-1".into(),
                disconnect: Some(api::Disconnect {
                    code: 4000,
                    reason: "Banned".into(),
                    reconnect: true,
                }),
                whitelist: vec!["client-2".into()],
                ..Default::default()
            }
        );
    }

    #[test]
    fn propagate_api_error() {
        let transport = MockTransport::replying(api::DisconnectResponse {
            error: Some(api::Error {
                code: 104,
                message: "not found".into(),
            }),
            result: None,
        });
        let client = CentrifugoApiClientBuilder::with_transport(&transport)
            .build()
            .unwrap();

        assert_eq!(
            client.disconnect("user-1").execute(),
            Err(CentrifugoError::API {
                code: 104,
                message: "not found".into()
            })
        );
    }
}
