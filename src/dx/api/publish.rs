//! Publish and broadcast module.
//!
//! The [`PublishRequestBuilder`] lets you publish data into a channel and
//! the [`BroadcastRequestBuilder`] lets you publish the same data into
//! multiple channels at once.

use super::{
    builder_error, validate_not_empty, BroadcastResult, CentrifugoApiClient, PublishResult,
};
use crate::{
    core::{CentrifugoError, Transport},
    proto::api,
    providers::serialization_serde::serialize_json_field,
};
use derive_builder::Builder;
use serde_json::Value;

impl<T> CentrifugoApiClient<T> {
    /// Create a new publish request builder.
    ///
    /// Instance of [`PublishRequestBuilder`] is returned.
    ///
    /// # Example
    /// ```no_run
    /// # use centrifugo_worker::core::{CentrifugoError, Transport, TransportRequest, TransportResponse};
    /// # use centrifugo_worker::dx::api::CentrifugoApiClientBuilder;
    /// use serde_json::json;
    /// # struct MyTransport;
    /// # impl Transport for MyTransport {
    /// #     fn call(&self, _request: TransportRequest) -> Result<TransportResponse, CentrifugoError> {
    /// #         unimplemented!()
    /// #     }
    /// # }
    /// # fn main() -> Result<(), CentrifugoError> {
    /// # let client = CentrifugoApiClientBuilder::with_transport(MyTransport).build()?;
    /// let result = client
    ///     .publish("news")
    ///     .data(json!({"text": "Hello"}))
    ///     .skip_history(true)
    ///     .execute()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn publish<S>(&self, channel: S) -> PublishRequestBuilder<T>
    where
        S: Into<String>,
    {
        PublishRequestBuilder {
            api_client: Some(self.clone()),
            channel: Some(channel.into()),
            ..Default::default()
        }
    }

    /// Create a new broadcast request builder.
    ///
    /// Instance of [`BroadcastRequestBuilder`] is returned.
    pub fn broadcast<I, S>(&self, channels: I) -> BroadcastRequestBuilder<T>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        BroadcastRequestBuilder {
            api_client: Some(self.clone()),
            channels: Some(channels.into_iter().map(Into::into).collect()),
            ..Default::default()
        }
    }
}

/// The publish request builder.
///
/// Allows you to build a publish request that is sent to the Centrifugo
/// server API.
///
/// This struct is used by the [`publish`] method of the
/// [`CentrifugoApiClient`].
///
/// [`publish`]: crate::dx::api::CentrifugoApiClient::publish
#[derive(Builder, Debug)]
#[builder(
    pattern = "owned",
    build_fn(vis = "pub(in crate::dx::api)", validate = "Self::validate")
)]
pub struct PublishRequest<T> {
    /// Current client which can provide transportation to perform the
    /// request.
    #[builder(field(vis = "pub(in crate::dx::api)"), setter(custom))]
    pub(in crate::dx::api) api_client: CentrifugoApiClient<T>,

    /// Channel to publish into.
    #[builder(field(vis = "pub(in crate::dx::api)"), setter(custom))]
    pub(in crate::dx::api) channel: String,

    /// Data to publish.
    #[builder(
        field(vis = "pub(in crate::dx::api)"),
        setter(strip_option, into),
        default = "None"
    )]
    pub(in crate::dx::api) data: Option<Value>,

    /// Whether publication shouldn't be saved into channel history.
    ///
    /// History is skipped unless set to `false`.
    #[builder(
        field(vis = "pub(in crate::dx::api)"),
        setter(strip_option),
        default = "None"
    )]
    pub(in crate::dx::api) skip_history: Option<bool>,

    /// Publication tags.
    #[builder(
        field(vis = "pub(in crate::dx::api)"),
        setter(into),
        default = "vec![]"
    )]
    pub(in crate::dx::api) tags: Vec<String>,
}

impl<T> PublishRequestBuilder<T> {
    /// Validate user-provided data for request builder.
    fn validate(&self) -> Result<(), String> {
        validate_not_empty("channel", self.channel.as_ref())
    }
}

impl<T> PublishRequest<T> {
    /// Create server API message from the request builder.
    pub(in crate::dx::api) fn message(&self) -> Result<api::PublishRequest, CentrifugoError> {
        Ok(api::PublishRequest {
            channel: self.channel.clone(),
            data: self
                .data
                .as_ref()
                .map_or_else(|| Ok(Vec::new()), serialize_json_field)?,
            skip_history: self.skip_history.unwrap_or(true),
            tags: self.tags.clone(),
        })
    }
}

impl<T> PublishRequestBuilder<T>
where
    T: Transport,
{
    /// Build and call the request.
    pub fn execute(self) -> Result<PublishResult, CentrifugoError> {
        let request = self.build().map_err(builder_error)?;

        request
            .api_client
            .call::<_, api::PublishResponse>("Publish", request.message()?)
            .map(Into::into)
    }
}

/// The broadcast request builder.
///
/// This struct is used by the [`broadcast`] method of the
/// [`CentrifugoApiClient`].
///
/// [`broadcast`]: crate::dx::api::CentrifugoApiClient::broadcast
#[derive(Builder, Debug)]
#[builder(
    pattern = "owned",
    build_fn(vis = "pub(in crate::dx::api)", validate = "Self::validate")
)]
pub struct BroadcastRequest<T> {
    /// Current client which can provide transportation to perform the
    /// request.
    #[builder(field(vis = "pub(in crate::dx::api)"), setter(custom))]
    pub(in crate::dx::api) api_client: CentrifugoApiClient<T>,

    /// Channels to publish into.
    #[builder(field(vis = "pub(in crate::dx::api)"), setter(custom))]
    pub(in crate::dx::api) channels: Vec<String>,

    /// Data to publish.
    #[builder(
        field(vis = "pub(in crate::dx::api)"),
        setter(strip_option, into),
        default = "None"
    )]
    pub(in crate::dx::api) data: Option<Value>,

    /// Whether publications shouldn't be saved into channels history.
    ///
    /// History is skipped unless set to `false`.
    #[builder(
        field(vis = "pub(in crate::dx::api)"),
        setter(strip_option),
        default = "None"
    )]
    pub(in crate::dx::api) skip_history: Option<bool>,

    /// Publication tags.
    #[builder(
        field(vis = "pub(in crate::dx::api)"),
        setter(into),
        default = "vec![]"
    )]
    pub(in crate::dx::api) tags: Vec<String>,
}

impl<T> BroadcastRequestBuilder<T> {
    /// Validate user-provided data for request builder.
    fn validate(&self) -> Result<(), String> {
        match &self.channels {
            Some(channels) if !channels.is_empty() => Ok(()),
            _ => Err("At least one channel should be provided".into()),
        }
    }
}

impl<T> BroadcastRequest<T> {
    /// Create server API message from the request builder.
    pub(in crate::dx::api) fn message(&self) -> Result<api::BroadcastRequest, CentrifugoError> {
        Ok(api::BroadcastRequest {
            channels: self.channels.clone(),
            data: self
                .data
                .as_ref()
                .map_or_else(|| Ok(Vec::new()), serialize_json_field)?,
            skip_history: self.skip_history.unwrap_or(true),
            tags: self.tags.clone(),
        })
    }
}

impl<T> BroadcastRequestBuilder<T>
where
    T: Transport,
{
    /// Build and call the request.
    pub fn execute(self) -> Result<BroadcastResult, CentrifugoError> {
        let request = self.build().map_err(builder_error)?;

        request
            .api_client
            .call::<_, api::BroadcastResponse>("Broadcast", request.message()?)
            .map(Into::into)
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use crate::dx::api::{tests::MockTransport, CentrifugoApiClientBuilder};
    use serde_json::json;

    #[test]
    fn send_publish_request() {
        let transport = MockTransport::replying(api::PublishResponse {
            error: None,
            result: Some(api::PublishResult {
                offset: 42,
                epoch: "abc".into(),
            }),
        });
        let client = CentrifugoApiClientBuilder::with_transport(&transport)
            .build()
            .unwrap();

        let result = client
            .publish("foo-channel")
            .data(json!({"foo": "bar"}))
            .skip_history(true)
            .tags(vec!["baz".to_string(), "baf".to_string()])
            .execute()
            .unwrap();

        let (method, request) = transport.request::<api::PublishRequest>();
        assert_eq!(method, "centrifuge.Publish");
        assert_eq!(
            request,
            api::PublishRequest {
                channel: "foo-channel".into(),
                data: br#"{"foo":"bar"}"#.to_vec(),
                skip_history: true,
                tags: vec!["baz".into(), "baf".into()],
            }
        );
        assert_eq!(
            result,
            PublishResult {
                offset: 42,
                epoch: "abc".into()
            }
        );
    }

    #[test]
    fn fail_with_api_error() {
        let transport = MockTransport::replying(api::PublishResponse {
            error: Some(api::Error {
                code: 500,
                message: "Error message".into(),
            }),
            result: None,
        });
        let client = CentrifugoApiClientBuilder::with_transport(&transport)
            .build()
            .unwrap();

        let result = client.publish("foo-channel").execute();

        assert_eq!(
            result,
            Err(CentrifugoError::API {
                code: 500,
                message: "Error message".into()
            })
        );
    }

    #[test]
    fn send_only_required_fields_by_default() {
        let transport = MockTransport::replying(api::PublishResponse::default());
        let client = CentrifugoApiClientBuilder::with_transport(&transport)
            .build()
            .unwrap();

        client.publish("chat").execute().unwrap();

        let (_, request) = transport.request::<api::PublishRequest>();
        assert_eq!(
            request,
            api::PublishRequest {
                channel: "chat".into(),
                skip_history: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn keep_history_when_asked() {
        let transport = MockTransport::replying(api::PublishResponse::default());
        let client = CentrifugoApiClientBuilder::with_transport(&transport)
            .build()
            .unwrap();

        client.publish("chat").skip_history(false).execute().unwrap();

        let (_, request) = transport.request::<api::PublishRequest>();
        assert!(!request.skip_history);
    }

    #[test]
    fn reject_empty_channel_without_call() {
        let transport = MockTransport::default();
        let client = CentrifugoApiClientBuilder::with_transport(&transport)
            .build()
            .unwrap();

        let result = client.publish("").execute();

        assert!(matches!(result, Err(CentrifugoError::General { .. })));
        assert!(transport.calls().is_empty());
    }

    #[test]
    fn send_broadcast_request() {
        let transport = MockTransport::replying(api::BroadcastResponse {
            error: None,
            result: Some(api::BroadcastResult {
                responses: vec![api::PublishResponse::default(); 2],
            }),
        });
        let client = CentrifugoApiClientBuilder::with_transport(&transport)
            .build()
            .unwrap();

        let result = client
            .broadcast(["news", "chat"])
            .data(json!({"text": "Hello"}))
            .execute()
            .unwrap();

        let (method, request) = transport.request::<api::BroadcastRequest>();
        assert_eq!(method, "centrifuge.Broadcast");
        assert_eq!(request.channels, vec!["news".to_string(), "chat".to_string()]);
        assert_eq!(request.data, br#"{"text":"Hello"}"#.to_vec());
        assert!(request.skip_history);
        assert_eq!(result.responses.len(), 2);
    }

    #[test]
    fn reject_broadcast_without_channels() {
        let transport = MockTransport::default();
        let client = CentrifugoApiClientBuilder::with_transport(&transport)
            .build()
            .unwrap();

        let result = client.broadcast(Vec::<String>::new()).execute();

        assert!(matches!(result, Err(CentrifugoError::General { .. })));
    }
}
