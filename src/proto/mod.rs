//! # Centrifugo message schema
//!
//! [`prost`] declarations of the binary messages used by the proxy protocol
//! ([`proxy`]) and by the server API ([`api`]). Encoding and decoding is
//! provided by [`prost::Message`].

#[allow(missing_docs)]
pub mod proxy;

#[allow(missing_docs)]
pub mod api;
