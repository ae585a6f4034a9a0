//! # Worker module
//!
//! This module contains the [`Worker`] trait and the [`Payload`] type.
//!
//! [`Worker`] is the process boundary between the application and the
//! RoadRunner server which proxies Centrifugo events: it hands out one
//! payload at a time and accepts exactly one reply for it.

use super::CentrifugoError;

/// Unit of data exchanged with the worker transport.
///
/// Inbound payloads carry a protobuf encoded proxy request in `body` and
/// a JSON encoded map of header lists in `header` (at least
/// `{"type":["<request type>"]}`). Outbound payloads carry a protobuf
/// encoded reply and no header.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Payload {
    /// Binary body.
    pub body: Vec<u8>,

    /// JSON encoded header.
    pub header: String,
}

impl Payload {
    /// Create payload from its parts.
    pub fn new<B, H>(body: B, header: H) -> Self
    where
        B: Into<Vec<u8>>,
        H: Into<String>,
    {
        Self {
            body: body.into(),
            header: header.into(),
        }
    }

    /// Whether both body and header are empty.
    ///
    /// Empty payload is how the worker transport signals termination.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty() && self.header.is_empty()
    }
}

/// This trait is used to exchange payloads with the worker transport.
///
/// Calls are blocking: [`wait_payload`] waits until the next payload
/// arrives (or the transport is shut down).
///
/// # Examples
/// ```
/// use centrifugo_worker::core::{CentrifugoError, Payload, Worker};
///
/// struct MyWorker;
///
/// impl Worker for MyWorker {
///     fn wait_payload(&self) -> Result<Option<Payload>, CentrifugoError> {
///         // Read next frame here
///         Ok(None)
///     }
///
///     fn respond(&self, payload: Payload) -> Result<(), CentrifugoError> {
///         // Write reply frame here
///         Ok(())
///     }
/// }
/// ```
///
/// [`wait_payload`]: #tymethod.wait_payload
pub trait Worker {
    /// Wait for the next payload.
    ///
    /// `None` means that the transport has been stopped and no more
    /// payloads will be delivered.
    ///
    /// # Errors
    /// Should return an [`CentrifugoError::Transport`] if the payload can't
    /// be received.
    fn wait_payload(&self) -> Result<Option<Payload>, CentrifugoError>;

    /// Send reply for the last received payload.
    ///
    /// # Errors
    /// Should return an [`CentrifugoError::Transport`] if the payload can't
    /// be sent.
    fn respond(&self, payload: Payload) -> Result<(), CentrifugoError>;
}
