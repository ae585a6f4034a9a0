//! Client remote procedure call.

use super::{non_empty, proxy_request, RequestContext, Responder};
use crate::{
    core::{CentrifugoError, Headers},
    dx::worker::{payloads::RpcResponse, RequestType},
    proto::proxy,
    providers::deserialization_serde::deserialize_json_field,
};
use serde_json::Value;

/// Client remote procedure call.
#[derive(Debug)]
pub struct RpcRequest<W> {
    pub(crate) context: RequestContext,
    pub(crate) user: String,
    pub(crate) method: Option<String>,
    pub(crate) meta: Value,
    pub(crate) data: Value,
    pub(crate) responder: Responder<W>,
}

impl<W> RpcRequest<W> {
    pub(crate) fn from_message(
        message: proxy::RpcRequest,
        headers: Headers,
        responder: Responder<W>,
    ) -> Result<Self, CentrifugoError> {
        Ok(Self {
            meta: deserialize_json_field("meta", &message.meta)?,
            data: deserialize_json_field("data", &message.data)?,
            user: message.user,
            method: non_empty(message.method),
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

    /// Name of the called method.
    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    /// Connection meta set on connect.
    pub fn meta(&self) -> &Value {
        &self.meta
    }

    /// Call arguments.
    pub fn data(&self) -> &Value {
        &self.data
    }
}

proxy_request!(RpcRequest, RequestType::Rpc, RpcResponse, proxy::RpcResponse);
