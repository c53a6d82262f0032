//! Blocking HTTP client for the PantoneChecker backend.
//!
//! One client per command invocation; the session token is attached to
//! every request as the `X-API-TOKEN` header. No retries, no caching:
//! every failure is terminal for that single user action.

use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::core::request::ColorRequest;
use crate::errors::{AppError, AppResult};
use crate::models::ColorCheck;
use crate::models::responses::{
    ApiErrorBody, LoginResponse, RequestAccepted, UserCreated, UserInfo,
};

pub const TOKEN_HEADER: &str = "x-api-token";

pub struct ApiClient {
    http: Client,
    base: String,
}

impl ApiClient {
    /// Build a client for `server`, attaching `token` to all requests
    /// when given.
    pub fn new(server: &str, token: Option<&str>) -> AppResult<Self> {
        let mut headers = HeaderMap::new();
        if let Some(token) = token {
            let value = HeaderValue::from_str(token)
                .map_err(|_| AppError::Other("session token is not a valid header value".into()))?;
            headers.insert(HeaderName::from_static(TOKEN_HEADER), value);
        }

        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            base: server.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Turn a non-success response into the backend's `error` field,
    /// defaulting to empty text when the body carries none.
    fn api_error(resp: Response) -> AppError {
        let status = resp.status();
        let body: ApiErrorBody = resp.json().unwrap_or(ApiErrorBody { error: None });
        let message = body.error.unwrap_or_default();
        tracing::debug!(%status, error = %message, "backend returned an error");
        AppError::Api(message)
    }

    /// `POST /login` — exchange credentials for a session token and role.
    pub fn login(&self, username: &str, password: &str) -> AppResult<LoginResponse> {
        let body = serde_json::json!({
            "username": username,
            "password": password,
        });
        let resp = self.http.post(self.url("/login")).json(&body).send()?;
        if !resp.status().is_success() {
            return Err(Self::api_error(resp));
        }
        Ok(resp.json()?)
    }

    /// `GET /colorchecks` — full listing in server-provided order.
    pub fn list_checks(&self) -> AppResult<Vec<ColorCheck>> {
        let resp = self.http.get(self.url("/colorchecks")).send()?;
        if !resp.status().is_success() {
            return Err(Self::api_error(resp));
        }
        Ok(resp.json()?)
    }

    /// `POST /colorchecks/request` — submit a new color request.
    ///
    /// The request body is forwarded as-is; emptiness of pantone or points
    /// is the server's call, and its verdict is surfaced verbatim.
    pub fn request_check(&self, req: &ColorRequest) -> AppResult<RequestAccepted> {
        let resp = self
            .http
            .post(self.url("/colorchecks/request"))
            .json(req)
            .send()?;
        if !resp.status().is_success() {
            return Err(Self::api_error(resp));
        }
        Ok(resp.json()?)
    }

    /// `GET /users` — admin-only user listing.
    pub fn list_users(&self) -> AppResult<Vec<UserInfo>> {
        let resp = self.http.get(self.url("/users")).send()?;
        if !resp.status().is_success() {
            return Err(Self::api_error(resp));
        }
        Ok(resp.json()?)
    }

    /// `POST /users` — admin-only user creation.
    pub fn add_user(&self, username: &str, password: &str, role: &str) -> AppResult<UserCreated> {
        let body = serde_json::json!({
            "username": username,
            "password": password,
            "role": role,
        });
        let resp = self.http.post(self.url("/users")).json(&body).send()?;
        if !resp.status().is_success() {
            return Err(Self::api_error(resp));
        }
        Ok(resp.json()?)
    }
}
