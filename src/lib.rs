//! # Centrifugo worker
//!
//! Rust building blocks for applications which sit behind the [Centrifugo]
//! realtime messaging server.
//!
//! The crate consists of two parts:
//! * proxy worker ([`dx::worker`]) which receives `connect`, `refresh`,
//!   `subscribe`, `publish` and `rpc` events proxied by Centrifugo and lets
//!   application reply to each of them exactly once,
//! * server API client ([`dx::api`]) which issues administrative calls
//!   (publish, broadcast, presence, disconnect and others) to the Centrifugo
//!   server API.
//!
//! Both parts talk protobuf to Centrifugo and JSON to the application. The
//! byte-level transport stays with the application and is plugged in
//! through the [`Worker`] and [`Transport`] traits.
//!
//! ## Features
//!
//! * `worker` - proxy worker (enabled by default),
//! * `api` - server API client (enabled by default),
//! * `full` - all of the above.
//!
//! ## Logging
//!
//! Crate uses [`log`] facade. Install any logger implementation (for example
//! `env_logger`) to see how requests are dispatched and replied.
//!
//! [Centrifugo]: https://centrifugal.dev/
//! [`Worker`]: crate::core::Worker
//! [`Transport`]: crate::core::Transport

#![warn(missing_docs)]

#[cfg(feature = "worker")]
#[doc(inline)]
pub use dx::worker::{CentrifugoWorker, WaitResult};

#[cfg(feature = "api")]
#[doc(inline)]
pub use dx::api::{CentrifugoApiClient, CentrifugoApiClientBuilder};

#[doc(inline)]
pub use self::core::{CentrifugoError, ExpireAt, Payload, Transport, Worker};

pub mod core;
pub mod dx;
pub mod proto;
pub mod providers;
