//! Proxy request decoder.
//!
//! [`RequestFactory`] turns raw worker [`Payload`] into one of the typed
//! [`Request`] variants. Decoding is all-or-nothing: any malformed part of
//! the payload fails the whole request.

use super::{
    requests::{
        ConnectRequest, PublishRequest, RefreshRequest, Request, Responder, RpcRequest,
        SubscribeRequest,
    },
    RequestType,
};
use crate::{
    core::{CentrifugoError, Payload},
    providers::deserialization_serde::deserialize_headers,
};
use std::sync::Arc;

/// Header which carries request type.
const TYPE_HEADER: &str = "type";

/// Request type used when payload doesn't have `type` header.
const UNKNOWN_TYPE: &str = "unknown";

/// Proxy request decoder.
///
/// Every decoded request gets handle of the worker transport, so it can
/// send reply on its own.
#[derive(Debug)]
pub struct RequestFactory<W> {
    worker: Arc<W>,
}

impl<W> Clone for RequestFactory<W> {
    fn clone(&self) -> Self {
        Self {
            worker: Arc::clone(&self.worker),
        }
    }
}

impl<W> RequestFactory<W> {
    /// Create decoder which attaches `worker` to decoded requests.
    pub fn new(worker: Arc<W>) -> Self {
        Self { worker }
    }

    /// Decode proxy request from payload.
    ///
    /// # Errors
    /// * [`CentrifugoError::MalformedHeader`] when header isn't a JSON object
    ///   of string lists,
    /// * [`CentrifugoError::UnsupportedRequestType`] when `type` header is
    ///   unknown or missing,
    /// * [`CentrifugoError::MalformedBody`] when body is empty or can't be
    ///   decoded,
    /// * [`CentrifugoError::MalformedJson`] when embedded JSON is invalid.
    pub fn create_from_payload(&self, payload: &Payload) -> Result<Request<W>, CentrifugoError> {
        let headers = deserialize_headers(&payload.header)?;
        let request_type = headers
            .get(TYPE_HEADER)
            .and_then(|values| values.first())
            .filter(|value| !value.is_empty())
            .map_or(UNKNOWN_TYPE, String::as_str)
            .parse::<RequestType>()?;
        let responder = Responder::new(Arc::clone(&self.worker));
        let body = payload.body.as_slice();

        Ok(match request_type {
            RequestType::Connect => Request::Connect(ConnectRequest::from_message(
                decode_body(body)?,
                headers,
                responder,
            )?),
            RequestType::Refresh => Request::Refresh(RefreshRequest::from_message(
                decode_body(body)?,
                headers,
                responder,
            )?),
            RequestType::Subscribe => Request::Subscribe(SubscribeRequest::from_message(
                decode_body(body)?,
                headers,
                responder,
            )?),
            RequestType::Publish => Request::Publish(PublishRequest::from_message(
                decode_body(body)?,
                headers,
                responder,
            )?),
            RequestType::Rpc => Request::Rpc(RpcRequest::from_message(
                decode_body(body)?,
                headers,
                responder,
            )?),
        })
    }
}

fn decode_body<M>(body: &[u8]) -> Result<M, CentrifugoError>
where
    M: prost::Message + Default,
{
    if body.is_empty() {
        return Err(CentrifugoError::MalformedBody {
            details: "Payload body is empty".into(),
        });
    }

    M::decode(body).map_err(|e| CentrifugoError::MalformedBody {
        details: e.to_string(),
    })
}
