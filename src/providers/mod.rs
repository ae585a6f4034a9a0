//! # Providers module
//!
//! This module contains the `serde` based JSON boundary used by the proxy
//! worker and the server API client: every JSON document which crosses the
//! protobuf messages is encoded or decoded here.

pub mod serialization_serde;

pub mod deserialization_serde;
