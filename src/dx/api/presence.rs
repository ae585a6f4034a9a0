//! Channel presence module.
//!
//! The [`PresenceRequestBuilder`] lets you get information about clients
//! connected to the channel and the [`PresenceStatsRequestBuilder`] lets you
//! get short summary of it.

use super::{
    builder_error,
    result::{presence_from_message, ClientPresence, PresenceStats},
    validate_not_empty, CentrifugoApiClient,
};
use crate::{
    core::{CentrifugoError, Transport},
    proto::api,
};
use derive_builder::Builder;
use std::collections::HashMap;

impl<T> CentrifugoApiClient<T> {
    /// Create a new presence request builder.
    pub fn presence<S>(&self, channel: S) -> PresenceRequestBuilder<T>
    where
        S: Into<String>,
    {
        PresenceRequestBuilder {
            api_client: Some(self.clone()),
            channel: Some(channel.into()),
        }
    }

    /// Create a new presence stats request builder.
    pub fn presence_stats<S>(&self, channel: S) -> PresenceStatsRequestBuilder<T>
    where
        S: Into<String>,
    {
        PresenceStatsRequestBuilder {
            api_client: Some(self.clone()),
            channel: Some(channel.into()),
        }
    }
}

/// The presence request builder.
///
/// This struct is used by the [`presence`] method of the
/// [`CentrifugoApiClient`].
///
/// [`presence`]: crate::dx::api::CentrifugoApiClient::presence
#[derive(Builder, Debug)]
#[builder(
    pattern = "owned",
    build_fn(vis = "pub(in crate::dx::api)", validate = "Self::validate")
)]
pub struct PresenceRequest<T> {
    /// Current client which can provide transportation to perform the
    /// request.
    #[builder(field(vis = "pub(in crate::dx::api)"), setter(custom))]
    pub(in crate::dx::api) api_client: CentrifugoApiClient<T>,

    /// Channel for which presence should be retrieved.
    #[builder(field(vis = "pub(in crate::dx::api)"), setter(custom))]
    pub(in crate::dx::api) channel: String,
}

impl<T> PresenceRequestBuilder<T> {
    /// Validate user-provided data for request builder.
    fn validate(&self) -> Result<(), String> {
        validate_not_empty("channel", self.channel.as_ref())
    }
}

impl<T> PresenceRequestBuilder<T>
where
    T: Transport,
{
    /// Build and call the request.
    ///
    /// Returns client identifiers mapped to the client information.
    pub fn execute(self) -> Result<HashMap<String, ClientPresence>, CentrifugoError> {
        let request = self.build().map_err(builder_error)?;
        let message = api::PresenceRequest {
            channel: request.channel.clone(),
        };

        request
            .api_client
            .call::<_, api::PresenceResponse>("Presence", message)
            .map(presence_from_message)
    }
}

/// The presence stats request builder.
///
/// This struct is used by the [`presence_stats`] method of the
/// [`CentrifugoApiClient`].
///
/// [`presence_stats`]: crate::dx::api::CentrifugoApiClient::presence_stats
#[derive(Builder, Debug)]
#[builder(
    pattern = "owned",
    build_fn(vis = "pub(in crate::dx::api)", validate = "Self::validate")
)]
pub struct PresenceStatsRequest<T> {
    /// Current client which can provide transportation to perform the
    /// request.
    #[builder(field(vis = "pub(in crate::dx::api)"), setter(custom))]
    pub(in crate::dx::api) api_client: CentrifugoApiClient<T>,

    /// Channel for which presence stats should be retrieved.
    #[builder(field(vis = "pub(in crate::dx::api)"), setter(custom))]
    pub(in crate::dx::api) channel: String,
}

impl<T> PresenceStatsRequestBuilder<T> {
    /// Validate user-provided data for request builder.
    fn validate(&self) -> Result<(), String> {
        validate_not_empty("channel", self.channel.as_ref())
    }
}

impl<T> PresenceStatsRequestBuilder<T>
where
    T: Transport,
{
    /// Build and call the request.
    pub fn execute(self) -> Result<PresenceStats, CentrifugoError> {
        let request = self.build().map_err(builder_error)?;
        let message = api::PresenceStatsRequest {
            channel: request.channel.clone(),
        };

        request
            .api_client
            .call::<_, api::PresenceStatsResponse>("PresenceStats", message)
            .map(Into::into)
    }
}
