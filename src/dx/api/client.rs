//! Centrifugo server API client module.
//!
//! This module contains the [`CentrifugoApiClient`] struct which is used to
//! call the Centrifugo server API over the user provided [`Transport`].

use super::ApiResponse;
use crate::core::{CentrifugoError, Transport, TransportRequest};
use derive_builder::Builder;
use log::{debug, warn};
use prost::Message;
use std::{ops::Deref, sync::Arc};

/// Service name used by default in remote method names.
const DEFAULT_SERVICE: &str = "centrifuge";

/// Centrifugo server API client.
///
/// Client is cheap to clone: all clones share the same transport.
///
/// # Examples
/// ```
/// use centrifugo_worker::core::{CentrifugoError, Transport, TransportRequest, TransportResponse};
/// use centrifugo_worker::dx::api::CentrifugoApiClientBuilder;
///
/// # struct MyTransport;
/// # impl Transport for MyTransport {
/// #     fn call(&self, _request: TransportRequest) -> Result<TransportResponse, CentrifugoError> {
/// #         unimplemented!()
/// #     }
/// # }
/// # fn main() -> Result<(), CentrifugoError> {
/// // note that MyTransport must implement the `Transport` trait
/// let client = CentrifugoApiClientBuilder::with_transport(MyTransport).build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct CentrifugoApiClient<T> {
    pub(crate) inner: Arc<CentrifugoApiClientRef<T>>,
}

impl<T> Deref for CentrifugoApiClient<T> {
    type Target = CentrifugoApiClientRef<T>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> Clone for CentrifugoApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Client reference
///
/// This struct contains the actual client state.
/// It's wrapped in `Arc` by [`CentrifugoApiClient`].
///
/// Not intended to be used directly. Use [`CentrifugoApiClient`] instead.
#[derive(Builder, Debug)]
#[builder(
    pattern = "owned",
    name = "CentrifugoApiClientConfigBuilder",
    build_fn(private, name = "build_internal"),
    setter(prefix = "with")
)]
pub struct CentrifugoApiClientRef<T> {
    /// Remote procedure call transport.
    #[builder(setter(custom))]
    pub(crate) transport: T,

    /// Configuration
    #[builder(default)]
    pub(crate) config: ApiConfig,
}

impl<T> CentrifugoApiClientConfigBuilder<T> {
    /// Build a [`CentrifugoApiClient`] from the builder
    pub fn build(self) -> Result<CentrifugoApiClient<T>, CentrifugoError> {
        self.build_internal()
            .map_err(|err| CentrifugoError::ClientInitialization {
                details: err.to_string(),
            })
            .and_then(|client| {
                if client.config.service.is_empty() {
                    return Err(CentrifugoError::ClientInitialization {
                        details: "Service name can't be empty".into(),
                    });
                }

                Ok(CentrifugoApiClient {
                    inner: Arc::new(client),
                })
            })
    }
}

/// Server API client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Name of the RPC service which exposes Centrifugo API.
    ///
    /// Remote methods are called as `<service>.<Operation>`.
    pub service: String,
}

impl ApiConfig {
    /// Full remote method name for the API operation.
    pub fn method(&self, operation: &str) -> String {
        format!("{}.{operation}", self.service)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            service: DEFAULT_SERVICE.into(),
        }
    }
}

/// Centrifugo server API client builder.
///
/// The builder provides method to set the transport layer and returns the
/// next step of the builder with the remaining parameters.
#[derive(Debug, Clone)]
pub struct CentrifugoApiClientBuilder;

impl CentrifugoApiClientBuilder {
    /// Set the transport layer for the client.
    ///
    /// Returns [`CentrifugoApiClientConfigBuilder`] where configuration can
    /// be changed.
    pub fn with_transport<T>(transport: T) -> CentrifugoApiClientConfigBuilder<T>
    where
        T: Transport,
    {
        CentrifugoApiClientConfigBuilder {
            transport: Some(transport),
            config: None,
        }
    }
}

impl<T> CentrifugoApiClient<T>
where
    T: Transport,
{
    /// Call server API `operation` and unwrap its result.
    ///
    /// Response with `error` is turned into [`CentrifugoError::API`].
    pub(crate) fn call<Req, Res>(
        &self,
        operation: &str,
        request: Req,
    ) -> Result<Res::Result, CentrifugoError>
    where
        Req: Message,
        Res: ApiResponse,
    {
        let method = self.config.method(operation);
        debug!("Calling `{method}`");

        let response = self.transport.call(TransportRequest {
            method: method.clone(),
            body: request.encode_to_vec(),
        })?;
        let response =
            Res::decode(response.body.as_slice()).map_err(|e| CentrifugoError::Deserialization {
                details: format!("`{method}` response: {e}"),
            })?;

        match response.into_parts() {
            (Some(error), _) => {
                warn!("`{method}` failed with {}: {}", error.code, error.message);
                Err(CentrifugoError::API {
                    code: error.code,
                    message: error.message,
                })
            }
            (None, result) => Ok(result.unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use crate::core::TransportResponse;

    #[derive(Debug, Default)]
    struct MockTransport;

    impl Transport for MockTransport {
        fn call(&self, _req: TransportRequest) -> Result<TransportResponse, CentrifugoError> {
            Ok(TransportResponse::default())
        }
    }

    #[test]
    fn use_default_service() {
        let client = CentrifugoApiClientBuilder::with_transport(MockTransport)
            .build()
            .unwrap();

        assert_eq!(client.config.method("Publish"), "centrifuge.Publish");
    }

    #[test]
    fn use_configured_service() {
        let client = CentrifugoApiClientBuilder::with_transport(MockTransport)
            .with_config(ApiConfig {
                service: "centrifugo".into(),
            })
            .build()
            .unwrap();

        assert_eq!(client.config.method("Presence"), "centrifugo.Presence");
    }

    #[test]
    fn reject_empty_service() {
        let result = CentrifugoApiClientBuilder::with_transport(MockTransport)
            .with_config(ApiConfig {
                service: String::new(),
            })
            .build();

        assert!(matches!(
            result,
            Err(CentrifugoError::ClientInitialization { .. })
        ));
    }
}
