//! Client connection attempt.

use super::{non_empty, proxy_request, RequestContext, Responder};
use crate::{
    core::{CentrifugoError, Headers},
    dx::worker::{payloads::ConnectResponse, RequestType},
    proto::proxy,
    providers::deserialization_serde::deserialize_json_field,
};
use serde_json::Value;

/// Client connection attempt.
///
/// Reply with [`ConnectResponse`] to accept the connection.
#[derive(Debug)]
pub struct ConnectRequest<W> {
    pub(crate) context: RequestContext,
    pub(crate) data: Value,
    pub(crate) name: Option<String>,
    pub(crate) version: Option<String>,
    pub(crate) channels: Vec<String>,
    pub(crate) responder: Responder<W>,
}

impl<W> ConnectRequest<W> {
    pub(crate) fn from_message(
        message: proxy::ConnectRequest,
        headers: Headers,
        responder: Responder<W>,
    ) -> Result<Self, CentrifugoError> {
        Ok(Self {
            data: deserialize_json_field("data", &message.data)?,
            name: non_empty(message.name),
            version: non_empty(message.version),
            channels: message.channels,
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

    /// Data sent by client with connect command.
    pub fn data(&self) -> &Value {
        &self.data
    }

    /// Client SDK name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Client SDK version.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Channels client asks to be subscribed to.
    pub fn channels(&self) -> &[String] {
        &self.channels
    }
}

proxy_request!(
    ConnectRequest,
    RequestType::Connect,
    ConnectResponse,
    proxy::ConnectResponse
);

#[cfg(test)]
mod should {
    use super::*;
    use crate::{
        core::{ExpireAt, Payload},
        dx::worker::{
            factory::RequestFactory,
            requests::{ProxyRequest, Request},
            tests::MockWorker,
        },
    };
    use prost::Message;
    use serde_json::json;
    use std::sync::Arc;

    fn connect_request(message: proxy::ConnectRequest) -> (Arc<MockWorker>, ConnectRequest<MockWorker>) {
        let worker = Arc::new(MockWorker::default());
        let payload = Payload::new(message.encode_to_vec(), r#"{"type":["connect"]}"#);

        match RequestFactory::new(Arc::clone(&worker))
            .create_from_payload(&payload)
            .unwrap()
        {
            Request::Connect(request) => (worker, request),
            request => panic!("Unexpected request: {request:?}"),
        }
    }

    #[test]
    fn treat_empty_name_and_version_as_absent() {
        let (_, request) = connect_request(proxy::ConnectRequest {
            client: "client-1".into(),
            ..Default::default()
        });

        assert_eq!(request.name(), None);
        assert_eq!(request.version(), None);
        assert_eq!(request.data(), &json!({}));
        assert!(request.channels().is_empty());
    }

    #[test]
    fn reply_with_connect_result() {
        let (worker, request) = connect_request(proxy::ConnectRequest {
            client: "client-1".into(),
            name: "centrifuge-js".into(),
            ..Default::default()
        });

        request
            .respond(ConnectResponse {
                user: "user-1".into(),
                expire_at: Some(ExpireAt::from(1667892603)),
                ..Default::default()
            })
            .unwrap();

        let responses = worker.responses();
        assert_eq!(responses.len(), 1);

        let message = proxy::ConnectResponse::decode(responses[0].body.as_slice()).unwrap();
        assert_eq!(
            message.result,
            Some(proxy::ConnectResult {
                user: "user-1".into(),
                expire_at: 1667892603,
                ..Default::default()
            })
        );
        assert!(message.error.is_none());
        assert!(message.disconnect.is_none());
    }
}
