//! Main client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{redirect, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::api::{ContactsApi, NotesApi, UsersApi};
use crate::error::{Error, Result};
use crate::route::UserRouter;
use crate::selection::Selection;

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default backend URL; the path component is the API root.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8082/api";

/// Statuses accepted as GET success. 302 is a compatibility shim for a
/// backend defect that answers some reads with a redirect-like status and a
/// normal JSON body; redirects are not followed so the status stays visible.
const GET_OK: [StatusCode; 2] = [StatusCode::OK, StatusCode::FOUND];

/// Statuses accepted as POST success.
const POST_OK: [StatusCode; 2] = [StatusCode::OK, StatusCode::CREATED];

/// CRM admin API client.
///
/// Provides typed access to the user, contact, and note endpoints. Contact
/// and note requests are user-scoped: they take an optional explicit user id
/// and otherwise fall back to the selection the client was built with.
///
/// # Example
///
/// ```no_run
/// use crmctl_client::CrmClient;
///
/// # async fn example() -> crmctl_client::Result<()> {
/// let client = CrmClient::builder()
///     .base_url("http://localhost:8082/api")
///     .auth_token("secret")
///     .build()?;
///
/// let users = client.users().list().await?;
/// let contacts = client.contacts().list(Some("42")).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CrmClient {
    /// Inner shared state.
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
struct ClientInner {
    /// HTTP client.
    http: reqwest::Client,
    /// Normalized API root.
    api_root: Url,
    /// Resolver for user-scoped paths.
    router: UserRouter,
    /// Request timeout.
    timeout: Duration,
}

impl CrmClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Get the API root URL.
    pub fn api_root(&self) -> &Url {
        &self.inner.api_root
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the users API.
    pub fn users(&self) -> UsersApi {
        UsersApi::new(self.clone())
    }

    /// Access the contacts API.
    pub fn contacts(&self) -> ContactsApi {
        ContactsApi::new(self.clone())
    }

    /// Access the notes API.
    pub fn notes(&self) -> NotesApi {
        NotesApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal HTTP methods
    // ─────────────────────────────────────────────────────────────────────────

    /// Build a URL directly under the API root (endpoints that are not
    /// user-scoped, like `user` and `user/{id}`).
    pub(crate) fn url(&self, path: &str) -> Result<Url> {
        let path = path.trim_start_matches('/');
        self.inner.api_root.join(path).map_err(Error::from)
    }

    /// Build a URL for a user-scoped suffix, routing through the explicit id
    /// or the selection.
    pub(crate) fn user_url(&self, explicit: Option<&str>, suffix: &str) -> Result<Url> {
        self.inner.router.resolve(explicit, suffix)
    }

    /// Make a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = self
            .inner
            .http
            .get(url)
            .timeout(self.inner.timeout)
            .send()
            .await?;
        Self::decode(Self::check_status(response, &GET_OK).await?).await
    }

    /// Make a POST request.
    pub(crate) async fn post<T, B>(&self, url: Url, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self
            .inner
            .http
            .post(url)
            .json(body)
            .timeout(self.inner.timeout)
            .send()
            .await?;
        Self::decode(Self::check_status(response, &POST_OK).await?).await
    }

    /// Make a POST request where the backend hands back the new resource id
    /// in the `id` response header instead of the body.
    pub(crate) async fn post_for_header_id<B>(&self, url: Url, body: &B) -> Result<String>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .inner
            .http
            .post(url)
            .json(body)
            .timeout(self.inner.timeout)
            .send()
            .await?;
        let response = Self::check_status(response, &POST_OK).await?;
        response
            .headers()
            .get("id")
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
            .ok_or_else(|| Error::MalformedResponse("response is missing the `id` header".into()))
    }

    /// Make a PUT request.
    pub(crate) async fn put<T, B>(&self, url: Url, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self
            .inner
            .http
            .put(url)
            .json(body)
            .timeout(self.inner.timeout)
            .send()
            .await?;
        Self::decode(Self::check_status(response, &[StatusCode::OK]).await?).await
    }

    /// Make a DELETE request.
    pub(crate) async fn delete(&self, url: Url) -> Result<()> {
        let response = self
            .inner
            .http
            .delete(url)
            .timeout(self.inner.timeout)
            .send()
            .await?;
        Self::check_status(response, &[StatusCode::OK]).await?;
        Ok(())
    }

    /// Pass the response through when its status is accepted, otherwise turn
    /// it into an API error carrying the status and raw body.
    async fn check_status(
        response: reqwest::Response,
        accepted: &[StatusCode],
    ) -> Result<reqwest::Response> {
        let status = response.status();
        if accepted.contains(&status) {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), "request rejected by backend");
        Err(Error::Api {
            status: status.as_u16(),
            body,
        })
    }

    /// Decode a response body into `T`.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| Error::MalformedResponse(format!("failed to decode body: {e}")))
    }
}

/// Builder for creating a [`CrmClient`].
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Option<String>,
    auth_token: String,
    selection: Option<Selection>,
    timeout: Duration,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            base_url: None,
            auth_token: String::new(),
            selection: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the backend URL. The path component is the API root; defaults to
    /// [`DEFAULT_BASE_URL`].
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the bearer token. An empty token is still sent as an empty
    /// credential; rejecting it is the server's call.
    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = token.into();
        self
    }

    /// Route flag-free user-scoped requests through `selection`.
    pub fn selection(mut self, selection: Option<Selection>) -> Self {
        self.selection = selection;
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<CrmClient> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        // Parse and normalize the API root; a trailing slash keeps joins
        // appending instead of replacing the last path segment.
        let mut api_root = Url::parse(&base_url)?;
        if !api_root.path().ends_with('/') {
            api_root.set_path(&format!("{}/", api_root.path()));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let value = HeaderValue::from_str(&format!("Bearer {}", self.auth_token))
            .map_err(|_| Error::Config("invalid auth token".to_string()))?;
        headers.insert(AUTHORIZATION, value);

        // Redirects stay unfollowed so the legacy GET status is observable.
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .redirect(redirect::Policy::none())
            .user_agent(format!("crmctl/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        let router = UserRouter::new(api_root.clone(), self.selection.as_ref())?;

        Ok(CrmClient {
            inner: Arc::new(ClientInner {
                http,
                api_root,
                router,
                timeout: self.timeout,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_to_localhost() {
        let client = ClientBuilder::new().build().unwrap();
        assert_eq!(client.api_root().as_str(), "http://localhost:8082/api/");
    }

    #[test]
    fn test_builder_normalizes_trailing_slash() {
        let client = ClientBuilder::new()
            .base_url("http://localhost:8082/api/")
            .build()
            .unwrap();
        assert_eq!(client.api_root().as_str(), "http://localhost:8082/api/");
    }

    #[test]
    fn test_builder_rejects_bad_url() {
        let result = ClientBuilder::new().base_url("not a url").build();
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_url_building() {
        let client = ClientBuilder::new()
            .base_url("http://localhost:8082/api")
            .build()
            .unwrap();

        let url = client.url("user").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8082/api/user");

        let url = client.url("/user/42").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8082/api/user/42");
    }

    #[test]
    fn test_user_url_routes_through_selection() {
        let client = ClientBuilder::new()
            .base_url("http://h/api")
            .selection(Some(Selection {
                user_id: "42".to_string(),
                username: "joe".to_string(),
            }))
            .build()
            .unwrap();

        let url = client.user_url(None, "contacts").unwrap();
        assert_eq!(url.as_str(), "http://h/api/users/42/contacts");

        let url = client.user_url(Some("7"), "contacts").unwrap();
        assert_eq!(url.as_str(), "http://h/api/users/7/contacts");
    }
}
