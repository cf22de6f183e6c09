use contracts::shared::api::ApiEnvelope;
use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};
use gloo_net::http::Request;

use crate::shared::api_client;
use crate::shared::api_utils::api_url;

/// Login with email and password
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, String> {
    let response = Request::post(&api_url("/auth/login"))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if response.status() == 401 {
        return Err("Invalid email or password".to_string());
    }
    if !response.ok() {
        return Err(format!("Login failed: {}", response.status()));
    }

    response
        .json::<ApiEnvelope<LoginResponse>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?
        .into_result()
}

/// Get current user info for the stored token
pub async fn get_current_user() -> Result<UserInfo, String> {
    api_client::get_json("/auth/me").await
}
