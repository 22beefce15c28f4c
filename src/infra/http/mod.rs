pub mod bookings_api;
pub mod events_api;
pub mod image_search;
pub mod users_api;
pub mod venues_api;

use std::time::Duration;

use reqwest::{Client, Response};
use serde_json::Value;

use crate::error::AppError;

/// One shared client with a bounded timeout; a request that hangs past it
/// surfaces as a retryable transport error.
pub fn build_client(timeout_secs: u64) -> Client {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Maps a non-2xx response to an error. Error bodies are sometimes JSON with
/// a `message` field and sometimes plain text, so this branches on content
/// rather than trusting the content type.
pub(crate) async fn error_from_response(endpoint: &str, response: Response) -> AppError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or(body);
    AppError::Status {
        endpoint: endpoint.to_string(),
        status,
        message,
    }
}
