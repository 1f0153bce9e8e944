use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use crate::filters::{codec, FilterSet};
use crate::models::{Appointment, LoginResponse, NewAppointment, Property, RegisterRequest, User};

use super::token::TokenStore;
use super::traits::ListingSource;

/// Where the user is sent when the session dies. Like the token slot, the
/// real navigation surface lives outside this crate.
pub trait Navigator: Send + Sync {
    fn goto_login(&self);
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend rejected the bearer token. The session is over: the token
    /// has been cleared and the user sent to the login view. Never retried.
    #[error("session expired, login required")]
    SessionExpired,
    #[error("backend returned status {0}")]
    Status(StatusCode),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid backend URL: {0}")]
    BadUrl(#[from] url::ParseError),
}

mod endpoints {
    pub const LOGIN: &str = "auth/login";
    pub const REGISTER: &str = "auth/register";
    pub const ME: &str = "users/me";
    pub const PROPERTIES: &str = "properties";
    pub const APPOINTMENTS: &str = "appointments";
}

/// HTTP client for the listing platform backend. Attaches the stored bearer
/// token to every request and tears the session down on the first 401.
pub struct ApiClient<T, N> {
    http: Client,
    base: Url,
    tokens: T,
    navigator: N,
}

impl<T: TokenStore, N: Navigator> ApiClient<T, N> {
    pub fn new(base_url: &str, tokens: T, navigator: N) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        // Url::join treats a base without a trailing slash as a file, which
        // would drop the last path segment.
        let mut base_url = base_url.to_owned();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Ok(Self {
            http,
            base: Url::parse(&base_url)?,
            tokens,
            navigator,
        })
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let url = self.endpoint(endpoints::LOGIN)?;
        let response: LoginResponse = self
            .post_json(url, &json!({ "email": email, "password": password }))
            .await?;
        self.tokens.set(&response.token);
        Ok(response)
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<User, ApiError> {
        let url = self.endpoint(endpoints::REGISTER)?;
        self.post_json(url, request).await
    }

    /// Drops the session locally and sends the user to the login view.
    pub fn logout(&self) {
        self.tokens.clear();
        self.navigator.goto_login();
    }

    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.get_json(self.endpoint(endpoints::ME)?).await
    }

    pub async fn search_properties(&self, filters: &FilterSet) -> Result<Vec<Property>, ApiError> {
        let mut url = self.endpoint(endpoints::PROPERTIES)?;
        let query = codec::encode(filters);
        if !query.is_empty() {
            url.set_query(Some(&query));
        }
        debug!(%url, "searching properties");
        self.get_json(url).await
    }

    pub async fn property(&self, id: i64) -> Result<Property, ApiError> {
        self.get_json(self.endpoint(&format!("{}/{id}", endpoints::PROPERTIES))?)
            .await
    }

    pub async fn appointments(&self) -> Result<Vec<Appointment>, ApiError> {
        self.get_json(self.endpoint(endpoints::APPOINTMENTS)?).await
    }

    pub async fn create_appointment(&self, request: &NewAppointment) -> Result<Appointment, ApiError> {
        let url = self.endpoint(endpoints::APPOINTMENTS)?;
        self.post_json(url, request).await
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base.join(path)?)
    }

    async fn get_json<R: DeserializeOwned>(&self, url: Url) -> Result<R, ApiError> {
        let response = self.authorized(self.http.get(url)).send().await?;
        self.accept(response).await
    }

    async fn post_json<B, R>(&self, url: Url, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self.authorized(self.http.post(url)).json(body).send().await?;
        self.accept(response).await
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match self.tokens.get() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn accept<R: DeserializeOwned>(&self, response: Response) -> Result<R, ApiError> {
        if response.status() == StatusCode::UNAUTHORIZED {
            self.end_session();
            return Err(ApiError::SessionExpired);
        }
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response.json().await?)
    }

    // Clear the token first so no later request reuses it, then redirect.
    fn end_session(&self) {
        warn!("backend rejected the session token, forcing re-login");
        self.tokens.clear();
        self.navigator.goto_login();
    }
}

#[async_trait]
impl<T: TokenStore, N: Navigator> ListingSource for ApiClient<T, N> {
    async fn search(&self, filters: &FilterSet) -> Result<Vec<Property>> {
        Ok(self.search_properties(filters).await?)
    }

    fn source_name(&self) -> &'static str {
        "backend"
    }
}
