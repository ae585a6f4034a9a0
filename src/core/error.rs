//! # Error types
//!
//! This module contains the error types for the [`centrifugo_worker`] crate.
//!
//! [`centrifugo_worker`]: ../index.html

use snafu::Snafu;

/// Centrifugo error type
///
/// This type is used to represent errors that can occur while decoding proxy
/// requests, encoding replies or talking to the server API. It is used as the
/// error type for the [`Result`] type.
///
/// # Examples
/// ```
/// use centrifugo_worker::core::CentrifugoError;
///
/// fn foo() -> Result<(), CentrifugoError> {
///   Ok(())
/// }
///
/// foo().map_err(|e| match e {
///   CentrifugoError::Transport { .. } => println!("Transport error"),
///   CentrifugoError::API { .. } => println!("API error"),
///   _ => println!("Other error"),
/// });
/// ```
///
/// [`Result`]: https://doc.rust-lang.org/std/result/enum.Result.html
#[derive(Snafu, Debug, Clone, PartialEq, Eq)]
pub enum CentrifugoError {
    /// this error is returned when the payload header is not a JSON object of
    /// string lists
    #[snafu(display("Malformed header: {details}"))]
    MalformedHeader {
        /// Detailed information about the failure.
        details: String,
    },

    /// this error is returned when the `type` header names an unknown request
    #[snafu(display("Request type `{request_type}` is not supported"))]
    UnsupportedRequestType {
        /// Value of the `type` header (or `unknown` when it is missing).
        request_type: String,
    },

    /// this error is returned when the payload body can't be decoded into the
    /// request message
    #[snafu(display("Malformed body: {details}"))]
    MalformedBody {
        /// Detailed information about the failure.
        details: String,
    },

    /// this error is returned when embedded `data`, `meta` or `info` isn't a
    /// valid JSON
    #[snafu(display("Malformed JSON: {details}"))]
    MalformedJson {
        /// Detailed information about the failure.
        details: String,
    },

    /// this error is returned when the serialization of the response fails
    #[snafu(display("Serialization error: {details}"))]
    Serialization {
        /// Detailed information about the failure.
        details: String,
    },

    /// this error is returned when the deserialization of the response fails
    #[snafu(display("Deserialization error: {details}"))]
    Deserialization {
        /// Detailed information about the failure.
        details: String,
    },

    /// this error is returned when the worker or RPC transport fails
    #[snafu(display("Transport error: {details}"))]
    Transport {
        /// Detailed information about the failure.
        details: String,
    },

    /// this error is returned when the server API responds with an error
    #[snafu(display("API error ({code}): {message}"))]
    API {
        /// Error code reported by the server.
        code: u32,

        /// Error description reported by the server.
        message: String,
    },

    /// this error is returned when the initialization of client fails
    #[snafu(display("Client initialization error: {details}"))]
    ClientInitialization {
        /// Detailed information about the failure.
        details: String,
    },

    /// this error is returned when a request can't be built
    #[snafu(display("General error: {details}"))]
    General {
        /// Detailed information about the failure.
        details: String,
    },
}

impl CentrifugoError {
    /// Create general error from any displayable reason.
    #[cfg(feature = "api")]
    pub(crate) fn general<S>(details: S) -> Self
    where
        S: Into<String>,
    {
        Self::General {
            details: details.into(),
        }
    }

    /// Create transport error.
    ///
    /// Meant for [`Worker`] and [`Transport`] implementations which want to
    /// report an I/O failure.
    ///
    /// [`Worker`]: crate::core::Worker
    /// [`Transport`]: crate::core::Transport
    pub fn transport<S>(details: S) -> Self
    where
        S: Into<String>,
    {
        Self::Transport {
            details: details.into(),
        }
    }

    /// Whether error happened while decoding inbound payload.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedHeader { .. }
                | Self::UnsupportedRequestType { .. }
                | Self::MalformedBody { .. }
                | Self::MalformedJson { .. }
        )
    }
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn display_api_error_with_code() {
        let error = CentrifugoError::API {
            code: 500,
            message: "Error message".into(),
        };

        assert_eq!(error.to_string(), "API error (500): Error message");
    }

    #[test]
    fn display_unsupported_request_type() {
        let error = CentrifugoError::UnsupportedRequestType {
            request_type: "bogus".into(),
        };

        assert_eq!(error.to_string(), "Request type `bogus` is not supported");
    }

    #[test]
    fn classify_decode_errors() {
        assert!(CentrifugoError::MalformedJson {
            details: "eof".into()
        }
        .is_decode_error());
        assert!(!CentrifugoError::transport("closed").is_decode_error());
    }
}
