//! The WordPress XML-RPC client.
//!
//! [`WpClient`] pairs a set of [`Credentials`] with an [`Endpoint`] and
//! exposes one typed method per remote operation. Every method reduces to
//! the same shape: assemble the positional argument list, prepend the three
//! credential values, perform one synchronous transport call, decode the
//! reply into its record type. The client holds no other state; calls are
//! independent and a shared reference is all any of them needs.

use std::fmt;
use std::time::Duration;

use tracing::{debug, trace};
use xmlrpc::{Request, Value};

use crate::error::{ConnectionError, RemoteError, WpResult};
use crate::optional::Optional;
use crate::responses::{FromValue, Taxonomy, Term, UploadedFile};
use crate::transport::{Endpoint, HttpEndpoint};

/// Connection identity sent with every call.
///
/// WordPress expects (blog id, username, password) as the first three
/// positional parameters of every method; [`Credentials::request_args`] is
/// the single place that invariant lives. The values are fixed at
/// construction and never mutated.
#[derive(Clone)]
pub struct Credentials {
    blog_id: i32,
    username: String,
    password: String,
}

impl Credentials {
    /// Create credentials for one blog on the target installation.
    pub fn new(blog_id: i32, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            blog_id,
            username: username.into(),
            password: password.into(),
        }
    }

    /// The blog id these credentials address.
    pub fn blog_id(&self) -> i32 {
        self.blog_id
    }

    /// The account name these credentials authenticate.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Full positional parameter list for one call: blog id, username,
    /// password, then the method-specific arguments in their fixed order.
    fn request_args(&self, args: Vec<Value>) -> Vec<Value> {
        let mut params = Vec::with_capacity(3 + args.len());
        params.push(Value::Int(self.blog_id));
        params.push(Value::String(self.username.clone()));
        params.push(Value::String(self.password.clone()));
        params.extend(args);
        params
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("blog_id", &self.blog_id)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A client bound to one WordPress installation and one account.
///
/// Generic over its [`Endpoint`] so tests can substitute in-memory
/// transports; consumers normally use the [`HttpEndpoint`] default via
/// [`WpClient::new`] or [`WpClient::builder`].
#[derive(Debug)]
pub struct WpClient<E = HttpEndpoint> {
    credentials: Credentials,
    endpoint: E,
}

impl WpClient<HttpEndpoint> {
    /// Create a client for the XML-RPC endpoint at `url`.
    ///
    /// # Errors
    ///
    /// [`WpError::Connection`](crate::WpError::Connection) if the endpoint
    /// cannot be initialized (malformed URL, HTTP client build failure).
    pub fn new(blog_id: i32, username: &str, password: &str, url: &str) -> WpResult<Self> {
        let endpoint = HttpEndpoint::new(url)?;
        Ok(Self::with_endpoint(
            Credentials::new(blog_id, username, password),
            endpoint,
        ))
    }

    /// Start building a client with non-default transport settings.
    pub fn builder() -> WpClientBuilder {
        WpClientBuilder::new()
    }
}

impl<E: Endpoint> WpClient<E> {
    /// Create a client around an already-constructed endpoint.
    pub fn with_endpoint(credentials: Credentials, endpoint: E) -> Self {
        Self {
            credentials,
            endpoint,
        }
    }

    /// The credentials this client sends with every call.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Perform one call: credentials + `args`, one round trip, one decode.
    ///
    /// Transport failures, fault responses, and shape mismatches all surface
    /// as [`WpError::Remote`](crate::WpError::Remote), untouched.
    fn call<T: FromValue>(&self, method: &'static str, args: Vec<Value>) -> WpResult<T> {
        let params = self.credentials.request_args(args);
        debug!("calling {} with {} parameters", method, params.len());
        let mut request = Request::new(method);
        for param in params {
            request = request.arg(param);
        }
        let value = request
            .call(self.endpoint.transport())
            .map_err(RemoteError::from)?;
        trace!("{} returned {:?}", method, value);
        Ok(T::from_value(&value).map_err(|source| RemoteError::Response { method, source })?)
    }

    /// Upload a file to the media library (`wp.uploadFile`).
    ///
    /// `name` and `mime` are included only when non-empty; the raw `data`
    /// travels base64-encoded under the `bits` member. `optional` members
    /// (e.g. `overwrite`, `post_id`) are merged in last and win collisions.
    pub fn upload_file(
        &self,
        name: &str,
        mime: &str,
        data: &[u8],
        optional: impl Into<Option<Optional>>,
    ) -> WpResult<UploadedFile> {
        let content = upload_args(name, mime, data, optional.into());
        self.call("wp.uploadFile", vec![content.into()])
    }

    /// Fetch one taxonomy definition by machine name (`wp.getTaxonomy`).
    pub fn get_taxonomy(&self, taxonomy: &str) -> WpResult<Taxonomy> {
        self.call("wp.getTaxonomy", vec![taxonomy.into()])
    }

    /// Fetch every taxonomy the account can see (`wp.getTaxonomies`).
    pub fn get_taxonomies(&self) -> WpResult<Vec<Taxonomy>> {
        self.call("wp.getTaxonomies", Vec::new())
    }

    /// Fetch one term by id (`wp.getTerm`).
    pub fn get_term(&self, taxonomy: &str, term_id: i32) -> WpResult<Term> {
        self.call("wp.getTerm", vec![taxonomy.into(), term_id.into()])
    }

    /// Fetch terms of a taxonomy (`wp.getTerms`).
    ///
    /// When `filter` is `None` the filter argument is omitted from the call
    /// entirely, as opposed to sending an empty struct.
    pub fn get_terms(
        &self,
        taxonomy: &str,
        filter: impl Into<Option<Optional>>,
    ) -> WpResult<Vec<Term>> {
        let mut args: Vec<Value> = vec![taxonomy.into()];
        if let Some(filter) = filter.into() {
            args.push(filter.into());
        }
        self.call("wp.getTerms", args)
    }

    /// Create a term and return its id (`wp.newTerm`).
    ///
    /// `slug`, `description`, and `parent` go in `optional`; the content
    /// struct is always sent, even when `optional` is `None`.
    pub fn new_term(
        &self,
        name: &str,
        taxonomy: &str,
        optional: impl Into<Option<Optional>>,
    ) -> WpResult<String> {
        let content = term_args(name, taxonomy, optional.into());
        self.call("wp.newTerm", vec![content.into()])
    }

    /// Create a post and return its id (`wp.newPost`).
    ///
    /// Each of the five positional fields is included only when non-empty,
    /// so server defaults apply to whatever the caller leaves blank.
    pub fn new_post(
        &self,
        post_type: &str,
        status: &str,
        title: &str,
        content: &str,
        slug: &str,
        optional: impl Into<Option<Optional>>,
    ) -> WpResult<String> {
        let post = post_args(post_type, status, title, content, slug, optional.into());
        self.call("wp.newPost", vec![post.into()])
    }

    /// Apply `changes` to an existing post (`wp.editPost`).
    ///
    /// The changes struct is always sent, even when empty. Returns the
    /// server's success flag.
    pub fn edit_post(&self, post_id: i32, changes: Optional) -> WpResult<bool> {
        self.call("wp.editPost", vec![post_id.into(), changes.into()])
    }
}

/// Content struct for `wp.uploadFile`.
fn upload_args(name: &str, mime: &str, data: &[u8], optional: Option<Optional>) -> Optional {
    Optional::new()
        .set_if(!name.is_empty(), "name", name)
        .set_if(!mime.is_empty(), "type", mime)
        .set("bits", Value::Base64(data.to_vec()))
        .merge(optional)
}

/// Content struct for `wp.newTerm`; `name` and `taxonomy` are mandatory.
fn term_args(name: &str, taxonomy: &str, optional: Option<Optional>) -> Optional {
    Optional::new()
        .set("name", name)
        .set("taxonomy", taxonomy)
        .merge(optional)
}

/// Content struct for `wp.newPost`; empty fields are omitted.
fn post_args(
    post_type: &str,
    status: &str,
    title: &str,
    content: &str,
    slug: &str,
    optional: Option<Optional>,
) -> Optional {
    Optional::new()
        .set_if(!post_type.is_empty(), "post_type", post_type)
        .set_if(!status.is_empty(), "post_status", status)
        .set_if(!title.is_empty(), "post_title", title)
        .set_if(!content.is_empty(), "post_content", content)
        .set_if(!slug.is_empty(), "post_name", slug)
        .merge(optional)
}

/// Builder for clients with non-default transport settings.
///
/// ```no_run
/// use std::time::Duration;
/// use wp_core::WpClient;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = WpClient::builder()
///     .blog_id(1)
///     .username("admin")
///     .password("secret")
///     .url("https://blog.example.org/xmlrpc.php")
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// # let _ = client;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct WpClientBuilder {
    blog_id: i32,
    username: String,
    password: String,
    url: Option<String>,
    timeout: Option<Duration>,
    http: Option<reqwest::blocking::Client>,
}

impl WpClientBuilder {
    /// Create a builder with no endpoint and empty credentials.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the blog id.
    pub fn blog_id(mut self, blog_id: i32) -> Self {
        self.blog_id = blog_id;
        self
    }

    /// Set the account name.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Set the account password.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Set the XML-RPC endpoint URL (required).
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set a per-request timeout on the default HTTP client.
    ///
    /// Ignored when a caller-supplied client is set via
    /// [`http_client`](Self::http_client); that client carries its own
    /// timeout configuration.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a caller-supplied HTTP client instead of building one.
    pub fn http_client(mut self, http: reqwest::blocking::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// [`WpError::Connection`](crate::WpError::Connection) if no URL was
    /// set or the endpoint cannot be initialized.
    pub fn build(self) -> WpResult<WpClient<HttpEndpoint>> {
        let url = self.url.ok_or(ConnectionError::MissingEndpoint)?;
        let endpoint = match self.http {
            Some(http) => HttpEndpoint::with_client(&url, http)?,
            None => HttpEndpoint::with_timeout(&url, self.timeout)?,
        };
        Ok(WpClient::with_endpoint(
            Credentials::new(self.blog_id, self.username, self.password),
            endpoint,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WpError;
    use assert_matches::assert_matches;

    #[test]
    fn test_request_args_prepends_credentials_in_order() {
        let credentials = Credentials::new(42, "admin", "secret");
        let params = credentials.request_args(vec![Value::from("category"), Value::Int(7)]);
        assert_eq!(params.len(), 5);
        assert_eq!(params[0], Value::Int(42));
        assert_eq!(params[1], Value::from("admin"));
        assert_eq!(params[2], Value::from("secret"));
        assert_eq!(params[3], Value::from("category"));
        assert_eq!(params[4], Value::Int(7));
    }

    #[test]
    fn test_request_args_with_no_method_args() {
        let credentials = Credentials::new(1, "admin", "secret");
        let params = credentials.request_args(Vec::new());
        assert_eq!(params.len(), 3);
        assert_eq!(params[0], Value::Int(1));
    }

    #[test]
    fn test_upload_args_encode_bits_and_names() {
        let content = upload_args("photo.png", "image/png", b"pixels", None);
        assert_eq!(content.get("name"), Some(&Value::from("photo.png")));
        assert_eq!(content.get("type"), Some(&Value::from("image/png")));
        assert_eq!(content.get("bits"), Some(&Value::Base64(b"pixels".to_vec())));
    }

    #[test]
    fn test_upload_args_omit_empty_name_and_mime() {
        let content = upload_args("", "", b"pixels", None);
        assert!(content.get("name").is_none());
        assert!(content.get("type").is_none());
        assert_eq!(content.len(), 1);
    }

    #[test]
    fn test_post_args_omit_empty_slug() {
        let content = post_args("post", "draft", "Hello", "Body", "", None);
        assert!(content.get("post_name").is_none());
        assert_eq!(content.get("post_type"), Some(&Value::from("post")));
        assert_eq!(content.get("post_status"), Some(&Value::from("draft")));
        assert_eq!(content.get("post_title"), Some(&Value::from("Hello")));
        assert_eq!(content.get("post_content"), Some(&Value::from("Body")));
    }

    #[test]
    fn test_post_args_optional_wins_collisions() {
        let content = post_args(
            "post",
            "draft",
            "Hello",
            "Body",
            "hello",
            Some(Optional::new().set("post_status", "publish")),
        );
        assert_eq!(content.get("post_status"), Some(&Value::from("publish")));
        assert_eq!(content.get("post_name"), Some(&Value::from("hello")));
    }

    #[test]
    fn test_term_args_always_carry_base_members() {
        let content = term_args("Releases", "category", None);
        assert_eq!(content.len(), 2);
        assert_eq!(content.get("name"), Some(&Value::from("Releases")));
        assert_eq!(content.get("taxonomy"), Some(&Value::from("category")));

        let with_slug = term_args("Releases", "category", Some(Optional::new().set("slug", "rel")));
        assert_eq!(with_slug.get("slug"), Some(&Value::from("rel")));
    }

    #[test]
    fn test_new_rejects_malformed_url() {
        let err = WpClient::new(1, "admin", "secret", "::not a url::").unwrap_err();
        assert_matches!(err, WpError::Connection(_));
    }

    #[test]
    fn test_builder_requires_url() {
        let err = WpClient::builder().blog_id(1).build().unwrap_err();
        assert_matches!(
            err,
            WpError::Connection(ConnectionError::MissingEndpoint)
        );
    }

    #[test]
    fn test_builder_builds_with_timeout() {
        let client = WpClient::builder()
            .blog_id(3)
            .username("admin")
            .password("secret")
            .url("https://blog.example.org/xmlrpc.php")
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(client.credentials().blog_id(), 3);
        assert_eq!(client.credentials().username(), "admin");
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let rendered = format!("{:?}", Credentials::new(1, "admin", "hunter2"));
        assert!(rendered.contains("admin"));
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }
}
