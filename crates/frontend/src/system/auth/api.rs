use contracts::shared::error::{flatten_error_body, ApiError};
use contracts::system::auth::{LoginRequest, LoginResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Login with mobile number and password. The only unauthenticated call in
/// the app, so it bypasses the bearer-attaching helpers.
pub async fn login(mobile: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { mobile, password };

    let response = Request::post(&api_url("/auth/login/"))
        .json(&request)
        .map_err(|e| ApiError::transport(format!("Failed to serialize request: {e}")))?
        .send()
        .await
        .map_err(|e| ApiError::transport(format!("Failed to send request: {e}")))?;

    if !response.ok() {
        let status = response.status();
        let body = response
            .text()
            .await
            .ok()
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or(serde_json::Value::Null);
        return Err(ApiError::http(status, flatten_error_body(&body)));
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| ApiError::transport(format!("Failed to parse response: {e}")))
}
