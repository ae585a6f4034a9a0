//! This module contains the `TransportResponse` struct.
//!
//! This struct is used to represent the response from a call to the
//! Centrifugo server API. It is used as the response type for the
//! [`Transport`] trait.
//!
//! [`Transport`]: ../transport/trait.Transport.html

/// Raw response of the remote call.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct TransportResponse {
    /// Protobuf encoded response message.
    pub body: Vec<u8>,
}
