//! Authorized HTTP helpers for the backend API.
//!
//! Every call attaches the bearer token read from local storage at send
//! time, aborts after a fixed 15 second timeout, and funnels error bodies
//! through the Django error flattener. A 401 wipes the session and hard
//! redirects to the login route — it never surfaces as a message.

use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::JsValue;
use web_sys::AbortController;

use contracts::shared::envelope::decode_list;
use contracts::shared::error::{flatten_error_body, ApiError};

use crate::shared::api_utils::api_url;
use crate::system::auth::storage;

const REQUEST_TIMEOUT_MS: u32 = 15_000;

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

/// Arm a timeout that aborts the request after [`REQUEST_TIMEOUT_MS`].
/// Firing after completion is harmless.
fn arm_timeout() -> Option<AbortController> {
    let controller = AbortController::new().ok()?;
    let aborter = controller.clone();
    Timeout::new(REQUEST_TIMEOUT_MS, move || aborter.abort()).forget();
    Some(controller)
}

fn handle_unauthorized() {
    storage::clear_session();
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/");
    }
}

async fn check(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if response.ok() {
        return Ok(response);
    }

    if status == 401 {
        handle_unauthorized();
        return Err(ApiError::http(401, "Unauthorized"));
    }

    let body: Value = match response.text().await {
        Ok(text) => serde_json::from_str(&text).unwrap_or(Value::Null),
        Err(_) => Value::Null,
    };
    Err(ApiError::http(status, flatten_error_body(&body)))
}

async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    let controller = arm_timeout();
    let builder = with_auth(builder).abort_signal(controller.as_ref().map(|c| c.signal()).as_ref());
    let request = builder
        .build()
        .map_err(|e| ApiError::transport(format!("Failed to build request: {e}")))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::transport(format!("Request failed: {e}")))?;
    check(response).await
}

async fn send_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Response, ApiError> {
    let controller = arm_timeout();
    let builder = with_auth(builder).abort_signal(controller.as_ref().map(|c| c.signal()).as_ref());
    let request = builder
        .json(body)
        .map_err(|e| ApiError::transport(format!("Failed to serialize request: {e}")))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::transport(format!("Request failed: {e}")))?;
    check(response).await
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::transport(format!("Failed to parse response: {e}")))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = send(Request::get(&api_url(path))).await?;
    parse(response).await
}

/// GET a list endpoint, accepting any of the three envelope shapes.
pub async fn get_list<T: DeserializeOwned>(path: &str) -> Result<(Vec<T>, Option<u64>), ApiError> {
    let response = send(Request::get(&api_url(path))).await?;
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::transport(format!("Failed to read response: {e}")))?;
    decode_list(&text).map_err(ApiError::transport)
}

pub async fn post_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = send_json(Request::post(&api_url(path)), body).await?;
    parse(response).await
}

pub async fn patch_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = send_json(Request::patch(&api_url(path)), body).await?;
    parse(response).await
}

pub async fn put_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = send_json(Request::put(&api_url(path)), body).await?;
    parse(response).await
}

/// Multipart POST for file-carrying endpoints (documents, payment proofs).
pub async fn post_form<T: DeserializeOwned>(
    path: &str,
    form: &web_sys::FormData,
) -> Result<T, ApiError> {
    let controller = arm_timeout();
    let builder = with_auth(Request::post(&api_url(path)))
        .abort_signal(controller.as_ref().map(|c| c.signal()).as_ref());
    let request = builder
        .body(JsValue::from(form))
        .map_err(|e| ApiError::transport(format!("Failed to build request: {e}")))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::transport(format!("Request failed: {e}")))?;
    let response = check(response).await?;
    parse(response).await
}

/// Multipart PATCH, used by the cash payment capture flow.
pub async fn patch_form<T: DeserializeOwned>(
    path: &str,
    form: &web_sys::FormData,
) -> Result<T, ApiError> {
    let controller = arm_timeout();
    let builder = with_auth(Request::patch(&api_url(path)))
        .abort_signal(controller.as_ref().map(|c| c.signal()).as_ref());
    let request = builder
        .body(JsValue::from(form))
        .map_err(|e| ApiError::transport(format!("Failed to build request: {e}")))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::transport(format!("Request failed: {e}")))?;
    let response = check(response).await?;
    parse(response).await
}
