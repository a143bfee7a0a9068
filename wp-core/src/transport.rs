//! Transport seam between the client and the `xmlrpc` crate.
//!
//! The `xmlrpc` crate's transports are single-use: [`xmlrpc::Request::call`]
//! consumes one per round trip. [`Endpoint`] is the handle a client keeps
//! instead; it produces a fresh transport for every outgoing call. The one
//! real implementation is [`HttpEndpoint`]; tests substitute in-memory
//! endpoints at the same seam.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use tracing::debug;
use url::Url;

use crate::error::ConnectionError;

/// A factory for single-use call transports.
///
/// Implementations carry whatever long-lived state the transport needs
/// (connection pool, target URL) and hand out one [`xmlrpc::Transport`]
/// per call.
pub trait Endpoint {
    /// The transport type performing one request/response exchange.
    type Transport: xmlrpc::Transport;

    /// Produce a fresh transport for one outgoing call.
    fn transport(&self) -> Self::Transport;
}

/// An XML-RPC endpoint reached by HTTP(S) POST.
///
/// Holds the parsed target URL and a pooled [`reqwest`] blocking client;
/// both are validated once at construction so that per-call work is a plain
/// POST. Calls block the calling thread until the server responds or the
/// underlying HTTP request fails.
#[derive(Debug, Clone)]
pub struct HttpEndpoint {
    url: Url,
    http: Client,
}

impl HttpEndpoint {
    /// Create an endpoint for `url` with a default HTTP client.
    ///
    /// # Errors
    ///
    /// [`ConnectionError`] if `url` does not parse, is not an HTTP(S)
    /// target, or the HTTP client cannot be built.
    pub fn new(url: &str) -> Result<Self, ConnectionError> {
        Self::with_timeout(url, None)
    }

    /// Create an endpoint whose HTTP client enforces a per-request timeout.
    ///
    /// `None` disables the timeout; calls then block until the server
    /// responds or the connection drops.
    pub fn with_timeout(url: &str, timeout: Option<Duration>) -> Result<Self, ConnectionError> {
        let http = Client::builder().timeout(timeout).build()?;
        Self::with_client(url, http)
    }

    /// Create an endpoint around a caller-supplied HTTP client.
    ///
    /// Useful when the consumer already configures proxies, TLS, or
    /// connection pooling on its own client.
    pub fn with_client(url: &str, http: Client) -> Result<Self, ConnectionError> {
        let parsed = Url::parse(url).map_err(|source| ConnectionError::InvalidEndpoint {
            url: url.to_owned(),
            source,
        })?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ConnectionError::UnsupportedScheme {
                    scheme: other.to_owned(),
                })
            }
        }
        debug!("using XML-RPC endpoint {}", parsed);
        Ok(Self { url: parsed, http })
    }

    /// The parsed endpoint URL.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl Endpoint for HttpEndpoint {
    type Transport = RequestBuilder;

    fn transport(&self) -> RequestBuilder {
        self.http.post(self.url.clone())
    }
}
