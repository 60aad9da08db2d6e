//! Shared request plumbing for the hosted backend.

use reqwasm::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::api::query::SelectQuery;
use crate::client::api::{anon_key, backend_url, ApiError};
use crate::model::api::DataErrorDto;

/// GET request with the API key and bearer credentials attached.
///
/// Anonymous reads authenticate with the publishable key; authenticated
/// calls pass the session's access token instead.
pub fn get(path: &str, access_token: Option<&str>) -> Request {
    authed(Request::get(&format!("{}{path}", backend_url())), access_token)
}

/// POST request with the API key and bearer credentials attached.
pub fn post(path: &str, access_token: Option<&str>) -> Request {
    authed(Request::post(&format!("{}{path}", backend_url())), access_token)
}

fn authed(request: Request, access_token: Option<&str>) -> Request {
    let bearer = format!("Bearer {}", access_token.unwrap_or_else(|| anon_key()));
    request
        .header("apikey", anon_key())
        .header("Authorization", &bearer)
}

pub async fn send(request: Request) -> Result<Response, ApiError> {
    request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

/// Fetch all rows matched by a select query.
pub async fn get_rows<T: DeserializeOwned>(
    query: &SelectQuery,
    access_token: Option<&str>,
) -> Result<Vec<T>, ApiError> {
    let response = send(get(&query.path(), access_token)).await?;
    match response.status() {
        200 => response
            .json::<Vec<T>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string())),
        404 => Ok(Vec::new()),
        _ => Err(status_error(response).await),
    }
}

/// Fetch the single object matched by a select query, `None` when no row
/// matches. The data API reports an empty single-object result as 406.
pub async fn get_single<T: DeserializeOwned>(
    query: &SelectQuery,
    access_token: Option<&str>,
) -> Result<Option<T>, ApiError> {
    let mut request = get(&query.path(), access_token);
    if query.is_single() {
        request = request.header("Accept", "application/vnd.pgrst.object+json");
    }
    let response = send(request).await?;
    match response.status() {
        200 => response
            .json::<T>()
            .await
            .map(Some)
            .map_err(|e| ApiError::Decode(e.to_string())),
        404 | 406 => Ok(None),
        _ => Err(status_error(response).await),
    }
}

/// POST a JSON payload, discarding the response body.
pub async fn post_json<B: Serialize>(
    path: &str,
    body: &B,
    access_token: Option<&str>,
) -> Result<(), ApiError> {
    let body = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let request = post(path, access_token)
        .header("Content-Type", "application/json")
        .header("Prefer", "return=minimal")
        .body(body);
    let response = send(request).await?;
    match response.status() {
        200..=299 => Ok(()),
        _ => Err(status_error(response).await),
    }
}

/// Decode the error body of a failed data-API response.
pub async fn status_error(response: Response) -> ApiError {
    let status = response.status();
    if let Ok(dto) = response.json::<DataErrorDto>().await {
        ApiError::Status {
            status,
            message: dto.message,
        }
    } else {
        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        ApiError::Status {
            status,
            message: format!("Request failed with status {status}: {text}"),
        }
    }
}
