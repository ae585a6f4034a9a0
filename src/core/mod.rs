//! # Centrifugo Core
//!
//! Core functionality of the Centrifugo worker.
//!
//! The `core` module contains the error type, the collaborator traits
//! ([`Worker`] for proxy payloads and [`Transport`] for server API calls)
//! and the types shared by the proxy worker and the server API client.

#[doc(inline)]
pub use error::CentrifugoError;
pub mod error;

#[doc(inline)]
pub use worker::{Payload, Worker};
pub mod worker;

#[doc(inline)]
pub use transport::Transport;
pub mod transport;

#[doc(inline)]
pub use transport_request::TransportRequest;
pub mod transport_request;

#[doc(inline)]
pub use transport_response::TransportResponse;
pub mod transport_response;

#[doc(inline)]
pub use types::{ExpireAt, Headers};
pub mod types;
