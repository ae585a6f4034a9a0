//! Client subscription attempt.

use super::{proxy_request, RequestContext, Responder};
use crate::{
    core::{CentrifugoError, Headers},
    dx::worker::{payloads::SubscribeResponse, RequestType},
    proto::proxy,
    providers::deserialization_serde::deserialize_json_field,
};
use serde_json::Value;

/// Client subscription attempt.
#[derive(Debug)]
pub struct SubscribeRequest<W> {
    pub(crate) context: RequestContext,
    pub(crate) user: String,
    pub(crate) channel: String,
    pub(crate) token: String,
    pub(crate) meta: Value,
    pub(crate) data: Value,
    pub(crate) responder: Responder<W>,
}

impl<W> SubscribeRequest<W> {
    pub(crate) fn from_message(
        message: proxy::SubscribeRequest,
        headers: Headers,
        responder: Responder<W>,
    ) -> Result<Self, CentrifugoError> {
        Ok(Self {
            meta: deserialize_json_field("meta", &message.meta)?,
            data: deserialize_json_field("data", &message.data)?,
            user: message.user,
            channel: message.channel,
            token: message.token,
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

    /// Channel client wants to subscribe to.
    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Subscription token sent by client.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Connection meta set on connect.
    pub fn meta(&self) -> &Value {
        &self.meta
    }

    /// Data sent by client with subscribe command.
    pub fn data(&self) -> &Value {
        &self.data
    }
}

proxy_request!(
    SubscribeRequest,
    RequestType::Subscribe,
    SubscribeResponse,
    proxy::SubscribeResponse
);
