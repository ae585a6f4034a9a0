//! Client connection refresh.

use super::{proxy_request, RequestContext, Responder};
use crate::{
    core::{CentrifugoError, Headers},
    dx::worker::{payloads::RefreshResponse, RequestType},
    proto::proxy,
    providers::deserialization_serde::deserialize_json_field,
};
use serde_json::Value;

/// Client connection refresh.
///
/// Sent by Centrifugo when connection `expire_at` moment has been reached.
#[derive(Debug)]
pub struct RefreshRequest<W> {
    pub(crate) context: RequestContext,
    pub(crate) user: String,
    pub(crate) meta: Value,
    pub(crate) responder: Responder<W>,
}

impl<W> RefreshRequest<W> {
    pub(crate) fn from_message(
        message: proxy::RefreshRequest,
        headers: Headers,
        responder: Responder<W>,
    ) -> Result<Self, CentrifugoError> {
        Ok(Self {
            meta: deserialize_json_field("meta", &message.meta)?,
            user: message.user,
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

    /// Connection meta set on connect.
    pub fn meta(&self) -> &Value {
        &self.meta
    }
}

proxy_request!(
    RefreshRequest,
    RequestType::Refresh,
    RefreshResponse,
    proxy::RefreshResponse
);
