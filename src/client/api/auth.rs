//! Calls to the managed auth API.
//!
//! Credential handling is delegated entirely to the backend: this module
//! only exchanges email/password pairs for sessions and revokes them.

use crate::client::api::query::encode_component;

/// Path prefix of the managed auth API.
pub const AUTH_PREFIX: &str = "/auth/v1";

/// Username recorded in sign-up metadata: the caller's choice, or the
/// email local part when none was given.
pub fn default_username<'a>(email: &'a str, username: Option<&'a str>) -> &'a str {
    match username {
        Some(name) if !name.trim().is_empty() => name,
        _ => email.split('@').next().unwrap_or(email),
    }
}

/// Sign-up path carrying the post-verification redirect target.
pub fn signup_path(redirect_to: &str) -> String {
    format!(
        "{AUTH_PREFIX}/signup?redirect_to={}",
        encode_component(redirect_to)
    )
}

#[cfg(feature = "web")]
mod requests {
    use serde::Serialize;

    use super::{default_username, signup_path, AUTH_PREFIX};
    use crate::client::api::{anon_key, backend_url, http, ApiError};
    use crate::model::api::AuthErrorDto;
    use crate::model::auth::Session;

    #[derive(Serialize)]
    struct SignUpBody<'a> {
        email: &'a str,
        password: &'a str,
        data: SignUpMetadata<'a>,
    }

    #[derive(Serialize)]
    struct SignUpMetadata<'a> {
        username: &'a str,
    }

    #[derive(Serialize)]
    struct PasswordGrantBody<'a> {
        email: &'a str,
        password: &'a str,
    }

    /// Create a new account.
    ///
    /// Returns the issued session when the backend signs the account in
    /// immediately, or `None` when email verification is pending. Either
    /// way the profile row is provisioned asynchronously by a server-side
    /// trigger, not by this call.
    pub async fn sign_up(
        email: &str,
        password: &str,
        username: Option<&str>,
        redirect_to: &str,
    ) -> Result<Option<Session>, ApiError> {
        let body = SignUpBody {
            email,
            password,
            data: SignUpMetadata {
                username: default_username(email, username),
            },
        };
        let response = post_auth(&signup_path(redirect_to), &body).await?;
        match response.status() {
            200..=299 => {
                let text = response
                    .text()
                    .await
                    .map_err(|e| ApiError::Decode(e.to_string()))?;
                // The body is a session when the account is usable at once,
                // or a bare account record while verification is pending.
                Ok(serde_json::from_str::<Session>(&text).ok())
            }
            _ => Err(auth_error(response).await),
        }
    }

    /// Exchange an email/password pair for a session.
    pub async fn sign_in(email: &str, password: &str) -> Result<Session, ApiError> {
        let body = PasswordGrantBody { email, password };
        let response =
            post_auth(&format!("{AUTH_PREFIX}/token?grant_type=password"), &body).await?;
        match response.status() {
            200..=299 => response
                .json::<Session>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string())),
            _ => Err(auth_error(response).await),
        }
    }

    /// Revoke the session behind the given access token.
    pub async fn sign_out(access_token: &str) -> Result<(), ApiError> {
        let request = http::post(&format!("{AUTH_PREFIX}/logout"), Some(access_token));
        let response = http::send(request).await?;
        match response.status() {
            200..=299 => Ok(()),
            _ => Err(auth_error(response).await),
        }
    }

    async fn post_auth<B: Serialize>(
        path: &str,
        body: &B,
    ) -> Result<reqwasm::http::Response, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let request = reqwasm::http::Request::post(&format!("{}{path}", backend_url()))
            .header("apikey", anon_key())
            .header("Content-Type", "application/json")
            .body(body);
        http::send(request).await
    }

    /// Decode the error body of a failed auth-API response.
    async fn auth_error(response: reqwasm::http::Response) -> ApiError {
        let status = response.status();
        let message = match response.json::<AuthErrorDto>().await {
            Ok(dto) => dto.message(),
            Err(_) => None,
        };
        let message = match message {
            Some(message) => message,
            None => {
                let text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                format!("Request failed with status {status}: {text}")
            }
        };
        ApiError::Status { status, message }
    }
}

#[cfg(feature = "web")]
pub use requests::{sign_in, sign_out, sign_up};
