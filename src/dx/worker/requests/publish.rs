//! Client publication attempt.

use super::{proxy_request, RequestContext, Responder};
use crate::{
    core::{CentrifugoError, Headers},
    dx::worker::{payloads::PublishResponse, RequestType},
    proto::proxy,
    providers::deserialization_serde::deserialize_json_field,
};
use serde_json::Value;

/// Client publication attempt.
#[derive(Debug)]
pub struct PublishRequest<W> {
    pub(crate) context: RequestContext,
    pub(crate) user: String,
    pub(crate) channel: String,
    pub(crate) meta: Value,
    pub(crate) data: Value,
    pub(crate) responder: Responder<W>,
}

impl<W> PublishRequest<W> {
    pub(crate) fn from_message(
        message: proxy::PublishRequest,
        headers: Headers,
        responder: Responder<W>,
    ) -> Result<Self, CentrifugoError> {
        Ok(Self {
            meta: deserialize_json_field("meta", &message.meta)?,
            data: deserialize_json_field("data", &message.data)?,
            user: message.user,
            channel: message.channel,
            context: RequestContext::new(
                message.client,
                message.transport,
                message.protocol,
                message.encoding,
                headers,
            ),
            responder,
        })
    }

    /// Connected user identifier.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Target channel.
    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Connection meta set on connect.
    pub fn meta(&self) -> &Value {
        &self.meta
    }

    /// Data client wants to publish.
    pub fn data(&self) -> &Value {
        &self.data
    }
}

proxy_request!(
    PublishRequest,
    RequestType::Publish,
    PublishResponse,
    proxy::PublishResponse
);
