//! Authenticated JSON calls against the external REST services.
//!
//! Every call attaches `Authorization: Bearer <token>` when a token is stored
//! and unwraps the `{ success, data, message }` envelope.

use contracts::shared::api::{Ack, ApiEnvelope};
use gloo_net::http::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::api_utils::api_url;
use crate::system::auth::storage;

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    let builder = builder.header("Accept", "application/json");
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Non-2xx responses usually still carry a `message`; fall back to the status.
async fn error_from(response: Response) -> String {
    let status = response.status();
    match response.json::<Ack>().await {
        Ok(Ack {
            message: Some(message),
            ..
        }) if !message.is_empty() => message,
        _ => format!("Request failed: {}", status),
    }
}

async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(error_from(response).await);
    }
    response
        .json::<ApiEnvelope<T>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?
        .into_result()
}

async fn read_ack(response: Response) -> Result<(), String> {
    if !response.ok() {
        return Err(error_from(response).await);
    }
    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;
    Ack::from_body(&text)
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = with_auth(gloo_net::http::Request::get(&api_url(path)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_envelope(response).await
}

/// POST whose reply carries no payload the caller needs.
pub async fn post_ack<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let response = with_auth(gloo_net::http::Request::post(&api_url(path)))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_ack(response).await
}

/// POST carrying an `Idempotency-Key`, so a retried submit cannot create a second record.
pub async fn post_json_once<B: Serialize>(
    path: &str,
    body: &B,
    idempotency_key: &str,
) -> Result<(), String> {
    let response = with_auth(gloo_net::http::Request::post(&api_url(path)))
        .header("Idempotency-Key", idempotency_key)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_ack(response).await
}

pub async fn put_json<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let response = with_auth(gloo_net::http::Request::put(&api_url(path)))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_ack(response).await
}

pub async fn patch_json<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let response = with_auth(gloo_net::http::Request::patch(&api_url(path)))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_ack(response).await
}

pub async fn delete(path: &str) -> Result<(), String> {
    let response = with_auth(gloo_net::http::Request::delete(&api_url(path)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    read_ack(response).await
}
