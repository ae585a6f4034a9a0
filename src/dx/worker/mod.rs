//! # Proxy worker
//!
//! This module contains [`CentrifugoWorker`] which receives events proxied by
//! Centrifugo through the worker transport and hands them out as typed
//! [`Request`]s.
//!
//! # Examples
//! ```no_run
//! use centrifugo_worker::core::{CentrifugoError, Payload, Worker};
//! use centrifugo_worker::dx::worker::{
//!     payloads::{ConnectResponse, PublishResponse},
//!     requests::{ProxyRequest, Request},
//!     CentrifugoWorker, WaitResult,
//! };
//!
//! # struct MyWorker;
//! # impl Worker for MyWorker {
//! #     fn wait_payload(&self) -> Result<Option<Payload>, CentrifugoError> { Ok(None) }
//! #     fn respond(&self, _payload: Payload) -> Result<(), CentrifugoError> { Ok(()) }
//! # }
//! # fn main() -> Result<(), CentrifugoError> {
//! let mut worker = CentrifugoWorker::new(MyWorker);
//!
//! loop {
//!     match worker.wait_request()? {
//!         WaitResult::Request(Request::Connect(request)) => {
//!             let user = request.client().to_string();
//!             request.respond(ConnectResponse {
//!                 user,
//!                 ..Default::default()
//!             })?;
//!         }
//!         WaitResult::Request(Request::Publish(request)) => {
//!             request.respond(PublishResponse::default())?;
//!         }
//!         WaitResult::Request(request) => request.error(404, "Not found", false)?,
//!         WaitResult::Invalid(invalid) => eprintln!("{}", invalid.error),
//!         WaitResult::Stopped => break,
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#[doc(inline)]
pub use request_type::RequestType;
pub mod request_type;

#[doc(inline)]
pub use factory::RequestFactory;
pub mod factory;

#[doc(inline)]
pub use requests::{ProxyRequest, Reply, Request, RequestContext};
pub mod requests;

#[doc(inline)]
pub use payloads::{Override, Response};
pub mod payloads;

use crate::core::{CentrifugoError, Payload, Worker};
use log::{debug, info, warn};
use std::sync::Arc;

/// Outcome of waiting for the next proxied event.
#[derive(Debug)]
pub enum WaitResult<W> {
    /// Successfully decoded event.
    Request(Request<W>),

    /// Worker transport has been stopped. No more events will be delivered.
    Stopped,

    /// Payload which can't be decoded.
    ///
    /// Worker keeps running and can be asked for the next event.
    Invalid(InvalidRequest),
}

/// Payload which can't be decoded into proxy request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRequest {
    /// Received payload.
    pub payload: Payload,

    /// Decode failure.
    pub error: CentrifugoError,
}

/// Centrifugo proxy worker.
///
/// Pulls payloads from the [`Worker`] one at a time and decodes them. Once
/// the worker transport signals termination, the worker stays stopped and
/// doesn't touch the transport anymore.
#[derive(Debug)]
pub struct CentrifugoWorker<W> {
    worker: Arc<W>,
    factory: RequestFactory<W>,
    stopped: bool,
}

impl<W> CentrifugoWorker<W>
where
    W: Worker,
{
    /// Create proxy worker on top of the worker transport.
    pub fn new(worker: W) -> Self {
        let worker = Arc::new(worker);

        Self {
            factory: RequestFactory::new(Arc::clone(&worker)),
            worker,
            stopped: false,
        }
    }

    /// Underlying worker transport.
    pub fn worker(&self) -> &W {
        &self.worker
    }

    /// Whether worker transport signalled termination.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Wait for the next proxied event.
    ///
    /// Blocks until the worker transport delivers a payload.
    ///
    /// # Errors
    /// Propagates worker transport errors. Payload decode failures are
    /// reported with [`WaitResult::Invalid`].
    pub fn wait_request(&mut self) -> Result<WaitResult<W>, CentrifugoError> {
        if self.stopped {
            return Ok(WaitResult::Stopped);
        }

        let payload = match self.worker.wait_payload()? {
            Some(payload) if !payload.is_empty() => payload,
            _ => {
                info!("Worker transport stopped");
                self.stopped = true;
                return Ok(WaitResult::Stopped);
            }
        };
        debug!(
            "Received payload (body: {} bytes, header: {})",
            payload.body.len(),
            payload.header
        );

        match self.factory.create_from_payload(&payload) {
            Ok(request) => Ok(WaitResult::Request(request)),
            Err(error) => {
                warn!("Unable to decode proxy request: {error}");
                Ok(WaitResult::Invalid(InvalidRequest { payload, error }))
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::{cell::RefCell, collections::VecDeque};

    /// Worker transport which replays prepared payloads and records replies.
    #[derive(Debug, Default)]
    pub(crate) struct MockWorker {
        payloads: RefCell<VecDeque<Result<Option<Payload>, CentrifugoError>>>,
        responses: RefCell<Vec<Payload>>,
        waits: RefCell<usize>,
    }

    impl MockWorker {
        pub(crate) fn with_payloads<I>(payloads: I) -> Self
        where
            I: IntoIterator<Item = Result<Option<Payload>, CentrifugoError>>,
        {
            Self {
                payloads: RefCell::new(payloads.into_iter().collect()),
                ..Default::default()
            }
        }

        pub(crate) fn responses(&self) -> Vec<Payload> {
            self.responses.borrow().clone()
        }

        pub(crate) fn waits(&self) -> usize {
            *self.waits.borrow()
        }
    }

    impl Worker for MockWorker {
        fn wait_payload(&self) -> Result<Option<Payload>, CentrifugoError> {
            *self.waits.borrow_mut() += 1;
            self.payloads.borrow_mut().pop_front().unwrap_or(Ok(None))
        }

        fn respond(&self, payload: Payload) -> Result<(), CentrifugoError> {
            self.responses.borrow_mut().push(payload);
            Ok(())
        }
    }

    mod should {
        use super::*;
        use crate::proto::proxy;
        use prost::Message;

        fn publish_payload() -> Payload {
            let body = proxy::PublishRequest {
                channel: "chat".into(),
                ..Default::default()
            }
            .encode_to_vec();

            Payload::new(body, r#"{"type":["publish"]}"#)
        }

        #[test]
        fn hand_out_decoded_request() {
            let mut worker =
                CentrifugoWorker::new(MockWorker::with_payloads([Ok(Some(publish_payload()))]));

            let result = worker.wait_request().unwrap();

            assert!(matches!(result, WaitResult::Request(Request::Publish(_))));
            assert!(!worker.is_stopped());
        }

        #[test]
        fn continue_after_invalid_payload() {
            let invalid = Payload::new(vec![1, 2, 3], r#"{"type":["bogus"]}"#);
            let mut worker = CentrifugoWorker::new(MockWorker::with_payloads([
                Ok(Some(invalid.clone())),
                Ok(Some(publish_payload())),
            ]));

            let WaitResult::Invalid(failure) = worker.wait_request().unwrap() else {
                panic!("Expected invalid request");
            };
            assert_eq!(failure.payload, invalid);
            assert!(failure.error.is_decode_error());

            assert!(matches!(
                worker.wait_request().unwrap(),
                WaitResult::Request(Request::Publish(_))
            ));
            assert!(worker.worker().responses().is_empty());
        }

        #[test]
        fn stop_on_empty_payload_and_stay_stopped() {
            let mut worker = CentrifugoWorker::new(MockWorker::with_payloads([
                Ok(Some(Payload::default())),
                Ok(Some(publish_payload())),
            ]));

            assert!(matches!(worker.wait_request().unwrap(), WaitResult::Stopped));
            assert!(matches!(worker.wait_request().unwrap(), WaitResult::Stopped));
            assert!(worker.is_stopped());
            assert_eq!(worker.worker().waits(), 1);
        }

        #[test]
        fn stop_when_transport_has_no_payload() {
            let mut worker = CentrifugoWorker::new(MockWorker::default());

            assert!(matches!(worker.wait_request().unwrap(), WaitResult::Stopped));
        }

        #[test]
        fn propagate_transport_errors() {
            let mut worker = CentrifugoWorker::new(MockWorker::with_payloads([
                Err(CentrifugoError::transport("Pipe closed")),
                Ok(Some(publish_payload())),
            ]));

            assert_eq!(
                worker.wait_request().err(),
                Some(CentrifugoError::transport("Pipe closed"))
            );
            assert!(!worker.is_stopped());
            assert!(matches!(
                worker.wait_request().unwrap(),
                WaitResult::Request(_)
            ));
        }
    }
}
