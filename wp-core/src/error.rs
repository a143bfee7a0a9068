//! Error types for WordPress XML-RPC client operations.
//!
//! Two failure surfaces exist, matching the two phases of a client's life:
//!
//! - [`ConnectionError`]: the endpoint handle could not be set up (malformed
//!   URL, HTTP client construction failure). Raised at construction time only.
//! - [`RemoteError`]: an individual call failed: a transport/network error,
//!   an XML-RPC fault returned by the server, or a response that parsed as
//!   XML-RPC but did not match the declared shape.
//!
//! Both propagate unchanged to the caller. The client never retries and never
//! recovers locally; fault codes and messages are the caller's to interpret.

use thiserror::Error;
use xmlrpc::Fault;

/// The main error type for all client operations.
#[derive(Error, Debug)]
pub enum WpError {
    /// Endpoint/client construction failures.
    #[error("connection error: {0}")]
    Connection(#[from] ConnectionError),

    /// Failures of an individual RPC call.
    #[error("remote error: {0}")]
    Remote(#[from] RemoteError),
}

/// Errors raised while setting up the HTTP endpoint handle.
#[derive(Error, Debug)]
pub enum ConnectionError {
    /// The endpoint URL did not parse.
    #[error("invalid endpoint URL '{url}': {source}")]
    InvalidEndpoint {
        /// The URL as supplied by the caller.
        url: String,
        /// The underlying parse failure.
        #[source]
        source: url::ParseError,
    },

    /// The endpoint URL parsed but is not an HTTP(S) target.
    #[error("unsupported endpoint scheme '{scheme}', expected http or https")]
    UnsupportedScheme {
        /// The offending scheme.
        scheme: String,
    },

    /// No endpoint URL was configured on the builder.
    #[error("no endpoint URL configured")]
    MissingEndpoint,

    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Failures of an individual RPC call, surfaced verbatim to the caller.
#[derive(Error, Debug)]
pub enum RemoteError {
    /// Transport failure or an XML-RPC fault returned by the server.
    ///
    /// Use [`WpError::fault`] to reach a fault's code and message.
    #[error("XML-RPC call failed: {0}")]
    Rpc(#[from] xmlrpc::Error),

    /// The response parsed as XML-RPC but did not match the expected shape.
    #[error("malformed response for '{method}': {source}")]
    Response {
        /// The remote method whose response was malformed.
        method: &'static str,
        /// What did not line up.
        #[source]
        source: DecodeError,
    },
}

/// A mismatch between a response value and the declared record shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The outer response value had the wrong type.
    #[error("expected {expected}, got {got}")]
    Unexpected {
        /// The declared response shape.
        expected: &'static str,
        /// The wire type actually received.
        got: &'static str,
    },

    /// A struct member was present with the wrong type.
    #[error("member '{member}': expected {expected}, got {got}")]
    Member {
        /// The struct member name.
        member: &'static str,
        /// The declared member type.
        expected: &'static str,
        /// The wire type actually received.
        got: &'static str,
    },
}

/// Convenience type alias for Results using [`WpError`].
pub type WpResult<T> = Result<T, WpError>;

impl WpError {
    /// The XML-RPC fault carried by this error, if the server returned one.
    ///
    /// Network failures and shape mismatches carry no fault.
    pub fn fault(&self) -> Option<&Fault> {
        match self {
            WpError::Remote(RemoteError::Rpc(err)) => err.fault(),
            _ => None,
        }
    }

    /// Whether this error is an XML-RPC fault response.
    pub fn is_fault(&self) -> bool {
        self.fault().is_some()
    }
}
