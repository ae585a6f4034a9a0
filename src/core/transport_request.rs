//! # Transport Request
//!
//! This module contains the `TransportRequest` struct.
//!
//! It is the unit of work handed to the [`Transport`] by the server API
//! client.
//!
//! [`Transport`]: ../transport/trait.Transport.html

/// This struct represents a remote call to be sent to the Centrifugo server
/// API.
///
/// It is used by the [`Transport`] trait.
///
/// [`Transport`]: ../transport/trait.Transport.html
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct TransportRequest {
    /// Fully qualified method name (for example `centrifuge.Publish`).
    pub method: String,

    /// Protobuf encoded request message.
    pub body: Vec<u8>,
}
