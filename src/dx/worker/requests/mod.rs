//! # Proxy requests
//!
//! Typed representation of the events proxied by Centrifugo.
//!
//! Every request owns the handle which allows it to send exactly one reply:
//! [`respond`], [`error`] and [`disconnect`] consume the request.
//!
//! [`respond`]: ProxyRequest::respond
//! [`error`]: ProxyRequest::error
//! [`disconnect`]: ProxyRequest::disconnect

#[doc(inline)]
pub use connect::ConnectRequest;
pub mod connect;

#[doc(inline)]
pub use refresh::RefreshRequest;
pub mod refresh;

#[doc(inline)]
pub use subscribe::SubscribeRequest;
pub mod subscribe;

#[doc(inline)]
pub use publish::PublishRequest;
pub mod publish;

#[doc(inline)]
pub use rpc::RpcRequest;
pub mod rpc;

use super::{payloads::Response, RequestType};
use crate::{
    core::{CentrifugoError, Headers, Payload, Worker},
    proto::proxy,
};
use serde_json::Value;
use std::{collections::HashMap, sync::Arc};

/// Data shared by all proxy requests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestContext {
    pub(crate) client: String,
    pub(crate) transport: String,
    pub(crate) protocol: String,
    pub(crate) encoding: String,
    pub(crate) headers: Headers,
    pub(crate) attributes: HashMap<String, Value>,
}

impl RequestContext {
    pub(crate) fn new(
        client: String,
        transport: String,
        protocol: String,
        encoding: String,
        headers: Headers,
    ) -> Self {
        Self {
            client,
            transport,
            protocol,
            encoding,
            headers,
            attributes: HashMap::new(),
        }
    }

    /// Client connection identifier.
    pub fn client(&self) -> &str {
        &self.client
    }

    /// Client transport name (`websocket`, `sse` and so on).
    pub fn transport(&self) -> &str {
        &self.transport
    }

    /// Client protocol (`json` or `protobuf`).
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// Client encoding.
    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    /// All headers received with the payload, including `type`.
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// First value of the header.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Application attribute attached to the request.
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// All application attributes attached to the request.
    pub fn attributes(&self) -> &HashMap<String, Value> {
        &self.attributes
    }
}

/// Reply to the proxied event.
///
/// Centrifugo expects exactly one of successful result, error or client
/// disconnection.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply<R> {
    /// Event accepted.
    Result(R),

    /// Event rejected with error.
    Error {
        /// Error code.
        code: u32,

        /// Error description.
        message: String,

        /// Whether the client may retry.
        temporary: bool,
    },

    /// Event rejected with client disconnection.
    Disconnect {
        /// Disconnect code.
        code: u32,

        /// Disconnect reason.
        reason: String,

        /// Whether the client may reconnect.
        reconnect: bool,
    },
}

impl<R> Reply<R> {
    /// Build proxy protocol reply message.
    pub(crate) fn into_message<M>(self) -> Result<M, CentrifugoError>
    where
        M: ReplyMessage,
        R: TryInto<M::Result, Error = CentrifugoError>,
    {
        Ok(match self {
            Reply::Result(result) => M::with_result(result.try_into()?),
            Reply::Error {
                code,
                message,
                temporary,
            } => M::with_error(proxy::Error {
                code,
                message,
                temporary,
            }),
            Reply::Disconnect {
                code,
                reason,
                reconnect,
            } => M::with_disconnect(proxy::Disconnect {
                code,
                reason,
                reconnect,
            }),
        })
    }
}

/// Proxy protocol reply message with `result`, `error` and `disconnect`
/// fields.
pub(crate) trait ReplyMessage: prost::Message + Default {
    type Result;

    fn with_result(result: Self::Result) -> Self;

    fn with_error(error: proxy::Error) -> Self;

    fn with_disconnect(disconnect: proxy::Disconnect) -> Self;
}

macro_rules! reply_message {
    ($($message:ty => $result:ty),+ $(,)?) => {
        $(
            impl ReplyMessage for $message {
                type Result = $result;

                fn with_result(result: Self::Result) -> Self {
                    Self {
                        result: Some(result),
                        ..Default::default()
                    }
                }

                fn with_error(error: proxy::Error) -> Self {
                    Self {
                        error: Some(error),
                        ..Default::default()
                    }
                }

                fn with_disconnect(disconnect: proxy::Disconnect) -> Self {
                    Self {
                        disconnect: Some(disconnect),
                        ..Default::default()
                    }
                }
            }
        )+
    };
}

reply_message!(
    proxy::ConnectResponse => proxy::ConnectResult,
    proxy::RefreshResponse => proxy::RefreshResult,
    proxy::SubscribeResponse => proxy::SubscribeResult,
    proxy::PublishResponse => proxy::PublishResult,
    proxy::RpcResponse => proxy::RpcResult,
);

/// Handle which sends reply back to the worker transport.
#[derive(Debug)]
pub(crate) struct Responder<W> {
    worker: Arc<W>,
}

impl<W> Responder<W> {
    pub(crate) fn new(worker: Arc<W>) -> Self {
        Self { worker }
    }
}

impl<W> Responder<W>
where
    W: Worker,
{
    /// Encode reply message and send it with empty header.
    pub(crate) fn send<M>(
        self,
        request_type: RequestType,
        message: M,
    ) -> Result<(), CentrifugoError>
    where
        M: prost::Message,
    {
        let body = message.encode_to_vec();
        log::debug!("Sending `{request_type}` reply ({} bytes)", body.len());

        self.worker.respond(Payload::new(body, String::new()))
    }
}

/// Operations shared by all proxy requests.
pub trait ProxyRequest: Sized {
    /// Successful reply type.
    type Response;

    /// Type of the request.
    fn request_type(&self) -> RequestType;

    /// Data shared by all proxy requests.
    fn context(&self) -> &RequestContext;

    /// Attach application attribute to the request.
    ///
    /// Existing attribute with the same name is replaced.
    fn with_attribute<N, V>(self, name: N, value: V) -> Self
    where
        N: Into<String>,
        V: Into<Value>;

    /// Send reply to the worker transport.
    ///
    /// # Errors
    /// Returns [`CentrifugoError::Serialization`] when the reply can't be
    /// encoded and propagates worker transport errors.
    fn reply(self, reply: Reply<Self::Response>) -> Result<(), CentrifugoError>;

    /// Accept the event.
    fn respond(self, response: Self::Response) -> Result<(), CentrifugoError> {
        self.reply(Reply::Result(response))
    }

    /// Reject the event with error.
    fn error<S>(self, code: u32, message: S, temporary: bool) -> Result<(), CentrifugoError>
    where
        S: Into<String>,
    {
        self.reply(Reply::Error {
            code,
            message: message.into(),
            temporary,
        })
    }

    /// Reject the event and disconnect the client.
    fn disconnect<S>(self, code: u32, reason: S, reconnect: bool) -> Result<(), CentrifugoError>
    where
        S: Into<String>,
    {
        self.reply(Reply::Disconnect {
            code,
            reason: reason.into(),
            reconnect,
        })
    }

    /// Client connection identifier.
    fn client(&self) -> &str {
        self.context().client()
    }

    /// Client transport name.
    fn transport(&self) -> &str {
        self.context().transport()
    }

    /// Client protocol.
    fn protocol(&self) -> &str {
        self.context().protocol()
    }

    /// Client encoding.
    fn encoding(&self) -> &str {
        self.context().encoding()
    }

    /// All headers received with the payload.
    fn headers(&self) -> &Headers {
        self.context().headers()
    }

    /// Application attribute attached to the request.
    fn attribute(&self, name: &str) -> Option<&Value> {
        self.context().attribute(name)
    }
}

/// Implement [`ProxyRequest`] for request type which has `context` and
/// `responder` fields.
macro_rules! proxy_request {
    ($request:ident, $request_type:expr, $response:ty, $message:ty) => {
        impl<W> $crate::dx::worker::requests::ProxyRequest for $request<W>
        where
            W: $crate::core::Worker,
        {
            type Response = $response;

            fn request_type(&self) -> $crate::dx::worker::RequestType {
                $request_type
            }

            fn context(&self) -> &$crate::dx::worker::requests::RequestContext {
                &self.context
            }

            fn with_attribute<N, V>(mut self, name: N, value: V) -> Self
            where
                N: Into<String>,
                V: Into<serde_json::Value>,
            {
                self.context.attributes.insert(name.into(), value.into());
                self
            }

            fn reply(
                self,
                reply: $crate::dx::worker::requests::Reply<Self::Response>,
            ) -> Result<(), $crate::core::CentrifugoError> {
                let message: $message = reply.into_message()?;
                self.responder.send($request_type, message)
            }
        }
    };
}
pub(crate) use proxy_request;

/// Wire string, `None` when empty.
pub(crate) fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

/// Any proxied event.
#[derive(Debug)]
pub enum Request<W> {
    /// Client connection attempt.
    Connect(ConnectRequest<W>),

    /// Client connection refresh.
    Refresh(RefreshRequest<W>),

    /// Client subscription attempt.
    Subscribe(SubscribeRequest<W>),

    /// Client publication attempt.
    Publish(PublishRequest<W>),

    /// Client remote procedure call.
    Rpc(RpcRequest<W>),
}

impl<W> Request<W>
where
    W: Worker,
{
    /// Type of the request.
    pub fn request_type(&self) -> RequestType {
        match self {
            Request::Connect(_) => RequestType::Connect,
            Request::Refresh(_) => RequestType::Refresh,
            Request::Subscribe(_) => RequestType::Subscribe,
            Request::Publish(_) => RequestType::Publish,
            Request::Rpc(_) => RequestType::Rpc,
        }
    }

    /// Data shared by all proxy requests.
    pub fn context(&self) -> &RequestContext {
        match self {
            Request::Connect(request) => request.context(),
            Request::Refresh(request) => request.context(),
            Request::Subscribe(request) => request.context(),
            Request::Publish(request) => request.context(),
            Request::Rpc(request) => request.context(),
        }
    }

    /// Attach application attribute to the request.
    pub fn with_attribute<N, V>(self, name: N, value: V) -> Self
    where
        N: Into<String>,
        V: Into<Value>,
    {
        match self {
            Request::Connect(request) => Request::Connect(request.with_attribute(name, value)),
            Request::Refresh(request) => Request::Refresh(request.with_attribute(name, value)),
            Request::Subscribe(request) => {
                Request::Subscribe(request.with_attribute(name, value))
            }
            Request::Publish(request) => Request::Publish(request.with_attribute(name, value)),
            Request::Rpc(request) => Request::Rpc(request.with_attribute(name, value)),
        }
    }

    /// Accept the event.
    ///
    /// # Panics
    /// Panics when `response` doesn't belong to this request type.
    pub fn respond(self, response: Response) -> Result<(), CentrifugoError> {
        match (self, response) {
            (Request::Connect(request), Response::Connect(response)) => request.respond(response),
            (Request::Refresh(request), Response::Refresh(response)) => request.respond(response),
            (Request::Subscribe(request), Response::Subscribe(response)) => {
                request.respond(response)
            }
            (Request::Publish(request), Response::Publish(response)) => request.respond(response),
            (Request::Rpc(request), Response::Rpc(response)) => request.respond(response),
            (request, response) => panic!(
                "`{}` reply can't be sent in response to `{}` request",
                response.request_type(),
                request.request_type()
            ),
        }
    }

    /// Reject the event with error.
    pub fn error<S>(self, code: u32, message: S, temporary: bool) -> Result<(), CentrifugoError>
    where
        S: Into<String>,
    {
        match self {
            Request::Connect(request) => request.error(code, message, temporary),
            Request::Refresh(request) => request.error(code, message, temporary),
            Request::Subscribe(request) => request.error(code, message, temporary),
            Request::Publish(request) => request.error(code, message, temporary),
            Request::Rpc(request) => request.error(code, message, temporary),
        }
    }

    /// Reject the event and disconnect the client.
    pub fn disconnect<S>(self, code: u32, reason: S, reconnect: bool) -> Result<(), CentrifugoError>
    where
        S: Into<String>,
    {
        match self {
            Request::Connect(request) => request.disconnect(code, reason, reconnect),
            Request::Refresh(request) => request.disconnect(code, reason, reconnect),
            Request::Subscribe(request) => request.disconnect(code, reason, reconnect),
            Request::Publish(request) => request.disconnect(code, reason, reconnect),
            Request::Rpc(request) => request.disconnect(code, reason, reconnect),
        }
    }
}
