//! # WordPress XML-RPC Client Core
//!
//! `wp-core` is a thin, synchronous binding to the WordPress XML-RPC API:
//! typed method wrappers over the generic call primitive the [`xmlrpc`]
//! crate provides. It marshals positional and optional arguments, prepends
//! the credential triple every WordPress method expects, and decodes the
//! replies into plain records.
//!
//! ## Features
//!
//! - **Typed method surface**: taxonomies, terms, posts, and media uploads
//!   as ordinary functions returning ordinary structs
//! - **Optional-field bags**: sparse content structs built fluently, with
//!   empty/default fields omitted from the wire
//! - **One invariant, one place**: the (blog id, username, password) prefix
//!   is assembled by a single function shared by every call
//! - **Structured error handling**: construction failures and per-call
//!   failures as separate typed errors; faults carry code and message
//! - **Pluggable endpoint**: HTTP(S) by default, any [`xmlrpc::Transport`]
//!   factory for testing
//!
//! ## Quick Start
//!
//! ```no_run
//! use wp_core::{Optional, WpClient};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = WpClient::new(1, "admin", "secret", "https://blog.example.org/xmlrpc.php")?;
//!
//!     let post_id = client.new_post(
//!         "post",
//!         "draft",
//!         "Hello",
//!         "First draft body",
//!         "",
//!         Optional::new().set("comment_status", "closed"),
//!     )?;
//!     println!("created post {post_id}");
//!
//!     for term in client.get_terms("category", None)? {
//!         println!("{} ({})", term.name, term.count);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`optional`]: the fluent optional-field builder
//! - [`transport`]: the endpoint seam over the `xmlrpc` crate's transports
//! - [`client`]: credentials, the generic call core, and the typed methods
//! - [`responses`]: typed response records and their decoding
//! - [`error`]: connection-time and call-time error types
//!
//! The crate performs no XML encoding or decoding itself and keeps no state
//! between calls: each method is one blocking round trip whose outcome is
//! handed straight back to the caller, fault or not, with no retries.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod error;
pub mod optional;
pub mod responses;
pub mod transport;

// Re-export commonly used types for convenience
pub use client::{Credentials, WpClient, WpClientBuilder};
pub use error::{ConnectionError, DecodeError, RemoteError, WpError, WpResult};
pub use optional::Optional;
pub use responses::{FromValue, Taxonomy, Term, UploadedFile};
pub use transport::{Endpoint, HttpEndpoint};

// Method arguments and fault responses are expressed in the wire types of
// the `xmlrpc` crate; re-export them so consumers need no direct dependency.
pub use xmlrpc::{Fault, Value};

/// Current version of the wp-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
