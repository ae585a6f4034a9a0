//! # Transport module
//!
//! This module contains the [`Transport`] trait and the [`TransportRequest`]
//! and [`TransportResponse`] types.
//!
//! You can implement this trait for your own types to deliver server API
//! calls to [`Centrifugo`] (for example over RoadRunner's RPC socket).
//!
//! [`Centrifugo`]: https://centrifugal.dev/docs/server/server_api

use super::{CentrifugoError, TransportRequest, TransportResponse};

/// This trait is used to send remote procedure calls to the [`Centrifugo`]
/// server API.
///
/// The call is synchronous: implementation should block until the remote
/// side responds or fails. Request and response bodies are already encoded
/// with the protobuf codec.
///
/// # Examples
/// ```
/// use centrifugo_worker::core::{
///     CentrifugoError, Transport, TransportRequest, TransportResponse,
/// };
///
/// struct MyTransport;
///
/// impl Transport for MyTransport {
///    fn call(&self, req: TransportRequest) -> Result<TransportResponse, CentrifugoError> {
///         // Send your request here
///
///         Ok(TransportResponse::default())
///    }
/// }
/// ```
///
/// [`Centrifugo`]: https://centrifugal.dev/docs/server/server_api
pub trait Transport {
    /// Call remote `method` with encoded request body.
    ///
    /// # Errors
    /// Should return an [`CentrifugoError::Transport`] if the request cannot
    /// be delivered.
    fn call(&self, req: TransportRequest) -> Result<TransportResponse, CentrifugoError>;
}

impl<T> Transport for &T
where
    T: Transport + ?Sized,
{
    fn call(&self, req: TransportRequest) -> Result<TransportResponse, CentrifugoError> {
        (**self).call(req)
    }
}
