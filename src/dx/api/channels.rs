//! Active channels module.
//!
//! The [`ChannelsRequestBuilder`] lets you list channels with at least one
//! connected client.

use super::{
    builder_error,
    result::{channels_from_message, ChannelInfo},
    CentrifugoApiClient,
};
use crate::{
    core::{CentrifugoError, Transport},
    proto::api,
};
use derive_builder::Builder;
use std::collections::HashMap;

impl<T> CentrifugoApiClient<T> {
    /// Create a new channels request builder.
    pub fn channels(&self) -> ChannelsRequestBuilder<T> {
        ChannelsRequestBuilder {
            api_client: Some(self.clone()),
            ..Default::default()
        }
    }
}

/// The channels request builder.
///
/// This struct is used by the [`channels`] method of the
/// [`CentrifugoApiClient`].
///
/// [`channels`]: crate::dx::api::CentrifugoApiClient::channels
#[derive(Builder, Debug)]
#[builder(pattern = "owned", build_fn(vis = "pub(in crate::dx::api)"))]
pub struct ChannelsRequest<T> {
    /// Current client which can provide transportation to perform the
    /// request.
    #[builder(field(vis = "pub(in crate::dx::api)"), setter(custom))]
    pub(in crate::dx::api) api_client: CentrifugoApiClient<T>,

    /// Channel name pattern (for example `chat:*`).
    #[builder(
        field(vis = "pub(in crate::dx::api)"),
        setter(strip_option, into),
        default = "None"
    )]
    pub(in crate::dx::api) pattern: Option<String>,
}

impl<T> ChannelsRequestBuilder<T>
where
    T: Transport,
{
    /// Build and call the request.
    ///
    /// Returns channel names mapped to the channel information.
    pub fn execute(self) -> Result<HashMap<String, ChannelInfo>, CentrifugoError> {
        let request = self.build().map_err(builder_error)?;
        let message = api::ChannelsRequest {
            pattern: request.pattern.clone().unwrap_or_default(),
        };

        request
            .api_client
            .call::<_, api::ChannelsResponse>("Channels", message)
            .map(channels_from_message)
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use crate::dx::api::{tests::MockTransport, CentrifugoApiClientBuilder};

    #[test]
    fn list_channels_matching_pattern() {
        let transport = MockTransport::replying(api::ChannelsResponse {
            error: None,
            result: Some(api::ChannelsResult {
                channels: [
                    ("chat:1".to_string(), api::ChannelInfo { num_clients: 2 }),
                    ("chat:2".to_string(), api::ChannelInfo { num_clients: 1 }),
                ]
                .into(),
            }),
        });
        let client = CentrifugoApiClientBuilder::with_transport(&transport)
            .build()
            .unwrap();

        let channels = client.channels().pattern("chat:*").execute().unwrap();

        let (method, request) = transport.request::<api::ChannelsRequest>();
        assert_eq!(method, "centrifuge.Channels");
        assert_eq!(request.pattern, "chat:*");
        assert_eq!(channels.len(), 2);
        assert_eq!(channels["chat:1"], ChannelInfo { num_clients: 2 });
    }

    #[test]
    fn list_all_channels_without_pattern() {
        let transport = MockTransport::replying(api::ChannelsResponse::default());
        let client = CentrifugoApiClientBuilder::with_transport(&transport)
            .build()
            .unwrap();

        client.channels().execute().unwrap();

        let (_, request) = transport.request::<api::ChannelsRequest>();
        assert!(request.pattern.is_empty());
    }
}
