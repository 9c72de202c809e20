//! Authentication client for the hosted backend.
//!
//! The admin console signs in with email and password, keeps the returned
//! session, and refreshes it with the refresh token when the access token
//! expires. All operations talk to the project's auth endpoints; failures
//! surface as [`GatewayError::Auth`].

use log::debug;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tourdesk_core::errors::{Error, GatewayError, Result};

use crate::config::GatewayConfig;

/// Path prefix of the auth endpoints, relative to the project base URL.
const AUTH_PATH: &str = "/auth/v1";

/// A signed-in admin session.
#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    pub user: AuthUser,
}

/// The authenticated user attached to a session.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub last_sign_in_at: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct AuthErrorResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    msg: Option<String>,
}

/// Client for the hosted auth endpoints.
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl AuthClient {
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                Error::Gateway(GatewayError::RequestFailed(format!(
                    "Failed to initialize HTTP client: {}",
                    e
                )))
            })?;

        Ok(Self {
            http,
            base_url: config.url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Signs in with email and password, returning a fresh session.
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session> {
        self.token_request(
            "password",
            serde_json::json!({ "email": email, "password": password }),
        )
        .await
    }

    /// Exchanges a refresh token for a fresh session.
    pub async fn refresh_session(&self, refresh_token: &str) -> Result<Session> {
        self.token_request(
            "refresh_token",
            serde_json::json!({ "refresh_token": refresh_token }),
        )
        .await
    }

    /// Revokes the session behind the given access token.
    pub async fn sign_out(&self, access_token: &str) -> Result<()> {
        let url = format!("{}{}/logout", self.base_url, AUTH_PATH);
        debug!("[Auth] POST {}", url);

        let response = self
            .http
            .post(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| auth_err(format!("Sign-out request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response
            .text()
            .await
            .map_err(|e| auth_err(format!("Failed to read auth response: {}", e)))?;
        Err(auth_err(auth_error_message(&body, status.as_u16())))
    }

    /// Fetches the user behind the given access token.
    pub async fn get_user(&self, access_token: &str) -> Result<AuthUser> {
        let url = format!("{}{}/user", self.base_url, AUTH_PATH);
        debug!("[Auth] GET {}", url);

        let response = self
            .http
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| auth_err(format!("User request failed: {}", e)))?;

        parse_auth_response(response).await
    }

    /// Sets a new password for the signed-in user.
    pub async fn update_password(&self, access_token: &str, new_password: &str) -> Result<AuthUser> {
        let url = format!("{}{}/user", self.base_url, AUTH_PATH);
        debug!("[Auth] PUT {}", url);

        let response = self
            .http
            .put(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(access_token)
            .json(&serde_json::json!({ "password": new_password }))
            .send()
            .await
            .map_err(|e| auth_err(format!("Password update request failed: {}", e)))?;

        parse_auth_response(response).await
    }

    async fn token_request(&self, grant_type: &str, body: serde_json::Value) -> Result<Session> {
        let url = format!("{}{}/token?grant_type={}", self.base_url, AUTH_PATH, grant_type);
        debug!("[Auth] POST {}", url);

        let response = self
            .http
            .post(&url)
            .header("apikey", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| auth_err(format!("Token request failed: {}", e)))?;

        parse_auth_response(response).await
    }
}

async fn parse_auth_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| auth_err(format!("Failed to read auth response: {}", e)))?;

    if !status.is_success() {
        return Err(auth_err(auth_error_message(&body, status.as_u16())));
    }

    serde_json::from_str(&body)
        .map_err(|e| auth_err(format!("Failed to parse auth response: {}", e)))
}

fn auth_err(message: String) -> Error {
    Error::Gateway(GatewayError::Auth(message))
}

/// Extracts the most specific message the auth endpoint provided.
fn auth_error_message(body: &str, status: u16) -> String {
    let parsed: AuthErrorResponse = serde_json::from_str(body).unwrap_or_default();
    parsed
        .error_description
        .or(parsed.msg)
        .or(parsed.error)
        .unwrap_or_else(|| format!("HTTP {}", status))
}
