//! # Centrifugo Developer Experience
//!
//! This module provides structures and methods used by application code to
//! work with the [Centrifugo] server: the proxy worker which answers proxied
//! client events and the server API client.
//!
//! [Centrifugo]: https://centrifugal.dev/

#[cfg(feature = "worker")]
pub mod worker;

#[cfg(feature = "api")]
pub mod api;
