//! REST client for the remote notes service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns `ApiError::Unavailable` since the
//! token lives in browser storage and these endpoints are only meaningful in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Each call is fire-once: no retries, no timeouts, no backoff. Non-success
//! statuses and transport failures come back as typed errors and the calling
//! view decides how to present them.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use super::types::AuthResponse;
use super::types::{Credentials, Note, NoteForm};
use crate::config;
use crate::util::token_store::{LocalStorageTokenStore, TokenStore};

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Login/register outcome other than success.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("auth request failed: {0}")]
    Network(String),
}

impl AuthError {
    /// Message shown next to the login/register form.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "Invalid credentials",
            Self::Network(_) => "Unable to reach the server",
        }
    }
}

impl From<ApiError> for AuthError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status(status) if (400..500).contains(&status) => Self::InvalidCredentials,
            other => Self::Network(other.to_string()),
        }
    }
}

/// Join the API base with an endpoint path.
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

/// Path of a single note resource. The id is percent-encoded as one segment.
pub fn note_resource(id: &str) -> String {
    // form encoding writes spaces as `+`; a literal `+` is already `%2B`.
    let segment: String = url::form_urlencoded::byte_serialize(id.as_bytes()).collect();
    format!("/notes/{}", segment.replace('+', "%20"))
}

/// `Authorization` header value for a stored token.
pub fn bearer_header(token: Option<&str>) -> Option<String> {
    token.filter(|t| !t.is_empty()).map(|t| format!("Bearer {t}"))
}

/// Account operations.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// # Errors
    ///
    /// [`AuthError::InvalidCredentials`] on a 4xx response, otherwise
    /// [`AuthError::Network`].
    async fn login(&self, credentials: &Credentials) -> Result<String, AuthError>;

    /// # Errors
    ///
    /// Same mapping as [`AuthApi::login`].
    async fn register(&self, credentials: &Credentials) -> Result<String, AuthError>;
}

/// Note CRUD operations.
#[allow(async_fn_in_trait)]
pub trait NotesApi {
    async fn list_notes(&self) -> Result<Vec<Note>, ApiError>;
    async fn get_note(&self, id: &str) -> Result<Note, ApiError>;
    async fn create_note(&self, form: &NoteForm) -> Result<Note, ApiError>;
    async fn update_note(&self, id: &str, form: &NoteForm) -> Result<Note, ApiError>;
    async fn delete_note(&self, id: &str) -> Result<(), ApiError>;
}

/// HTTP implementation of [`AuthApi`] and [`NotesApi`].
#[derive(Clone, Debug)]
pub struct HttpApi<S = LocalStorageTokenStore> {
    base_url: String,
    store: S,
}

impl HttpApi {
    /// Client for the configured base URL using the browser token store.
    pub fn from_config() -> Self {
        Self::new(config::api_base_url(), LocalStorageTokenStore)
    }
}

impl<S: TokenStore> HttpApi<S> {
    pub fn new(base_url: impl Into<String>, store: S) -> Self {
        Self { base_url: base_url.into(), store }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `path`.
    pub fn url(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }

    /// Bearer header for the token currently in the store.
    pub fn authorization(&self) -> Option<String> {
        bearer_header(self.store.get().as_deref())
    }

    async fn authenticate(&self, path: &str, credentials: &Credentials) -> Result<String, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let builder = with_auth(gloo_net::http::Request::post(&self.url(path)), self.authorization());
            let resp = send_json(builder, credentials).await?;
            let body: AuthResponse = decode(resp).await?;
            Ok(body.token)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, credentials);
            Err(ApiError::Unavailable.into())
        }
    }
}

impl<S: TokenStore> AuthApi for HttpApi<S> {
    async fn login(&self, credentials: &Credentials) -> Result<String, AuthError> {
        self.authenticate("/auth/login", credentials).await
    }

    async fn register(&self, credentials: &Credentials) -> Result<String, AuthError> {
        self.authenticate("/auth/register", credentials).await
    }
}

impl<S: TokenStore> NotesApi for HttpApi<S> {
    async fn list_notes(&self) -> Result<Vec<Note>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let builder = with_auth(gloo_net::http::Request::get(&self.url("/notes")), self.authorization());
            decode(send_empty(builder).await?).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn get_note(&self, id: &str) -> Result<Note, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.url(&note_resource(id));
            let builder = with_auth(gloo_net::http::Request::get(&url), self.authorization());
            decode(send_empty(builder).await?).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(ApiError::Unavailable)
        }
    }

    async fn create_note(&self, form: &NoteForm) -> Result<Note, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let builder = with_auth(gloo_net::http::Request::post(&self.url("/notes")), self.authorization());
            decode(send_json(builder, form).await?).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = form;
            Err(ApiError::Unavailable)
        }
    }

    async fn update_note(&self, id: &str, form: &NoteForm) -> Result<Note, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.url(&note_resource(id));
            let builder = with_auth(gloo_net::http::Request::put(&url), self.authorization());
            decode(send_json(builder, form).await?).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, form);
            Err(ApiError::Unavailable)
        }
    }

    async fn delete_note(&self, id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.url(&note_resource(id));
            let builder = with_auth(gloo_net::http::Request::delete(&url), self.authorization());
            send_empty(builder).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
fn with_auth(
    builder: gloo_net::http::RequestBuilder,
    authorization: Option<String>,
) -> gloo_net::http::RequestBuilder {
    match authorization {
        Some(value) => builder.header("Authorization", &value),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn send_json<B: serde::Serialize>(
    builder: gloo_net::http::RequestBuilder,
    body: &B,
) -> Result<gloo_net::http::Response, ApiError> {
    let request = builder.json(body).map_err(|e| ApiError::Network(e.to_string()))?;
    let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(resp)
}

#[cfg(feature = "hydrate")]
async fn send_empty(builder: gloo_net::http::RequestBuilder) -> Result<gloo_net::http::Response, ApiError> {
    let resp = builder.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_ok(resp)
}

#[cfg(feature = "hydrate")]
fn ensure_ok(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() { Ok(resp) } else { Err(ApiError::Status(resp.status())) }
}

#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}
