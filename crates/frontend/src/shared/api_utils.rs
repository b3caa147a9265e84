//! Authenticated requests to the asset registry API.
//!
//! Every helper injects `Authorization: Bearer <token>`, decodes bare or
//! `{"data": ...}` bodies, logs failures before returning them, and turns a
//! 401 into the end of the session.

use contracts::shared::api_error::ApiError;
use contracts::shared::envelope;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::Blob;

use crate::shared::config::app_config;
use crate::shared::download::blob_from_bytes;
use crate::system::auth::storage;

/// API origin, derived from the page location unless configured.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    app_config().api_base(&protocol, &hostname)
}

/// Full URL for an endpoint path such as `/furniture/12`.
pub fn api_url(path: &str) -> String {
    app_config().endpoint(&api_base(), path)
}

fn bearer() -> Result<String, ApiError> {
    storage::get_token()
        .map(|token| format!("Bearer {}", token))
        .ok_or(ApiError::NotAuthenticated)
}

/// Ends the session: stored token and user go away and the browser moves to
/// the sign-in route, which also drops every page's in-memory state.
pub fn on_unauthorized() {
    log::warn!("Session rejected by the API, signing out");
    storage::clear_session();
    if let Some(window) = web_sys::window() {
        let _ = window.location().replace(&app_config().auth.sign_in_route);
    }
}

async fn send(method: &str, path: &str, builder: RequestBuilder) -> Result<Response, ApiError> {
    let request = builder.header("Authorization", &bearer()?);
    dispatch(method, path, request.build().map_err(|e| ApiError::Encode(e.to_string()))?).await
}

async fn send_json<B: Serialize>(
    method: &str,
    path: &str,
    builder: RequestBuilder,
    body: &B,
) -> Result<Response, ApiError> {
    let request = builder
        .header("Authorization", &bearer()?)
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    dispatch(method, path, request).await
}

async fn dispatch(method: &str, path: &str, request: Request) -> Result<Response, ApiError> {
    let response = request.send().await.map_err(|e| {
        log::error!("{} {} failed: {}", method, path, e);
        ApiError::Network(e.to_string())
    })?;
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let error = ApiError::from_status(status, &body);
    log::error!("{} {} -> {}", method, path, error);
    if error.is_unauthorized() {
        on_unauthorized();
    }
    Err(error)
}

async fn decode_body<T: DeserializeOwned>(path: &str, response: Response) -> Result<T, ApiError> {
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    envelope::decode(&text).inspect_err(|e| log::error!("Decoding {} failed: {}", path, e))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = send("GET", path, Request::get(&api_url(path))).await?;
    decode_body(path, response).await
}

/// POST/PUT whose response body is irrelevant.
pub async fn post_empty<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    send_json("POST", path, Request::post(&api_url(path)), body).await?;
    Ok(())
}

pub async fn put_empty<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    send_json("PUT", path, Request::put(&api_url(path)), body).await?;
    Ok(())
}

pub async fn patch_empty(path: &str) -> Result<(), ApiError> {
    send("PATCH", path, Request::patch(&api_url(path))).await?;
    Ok(())
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    send("DELETE", path, Request::delete(&api_url(path))).await?;
    Ok(())
}

async fn into_blob(response: Response, mime: &str) -> Result<Blob, ApiError> {
    let bytes = response
        .binary()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    blob_from_bytes(&bytes, mime)
}

/// GET a server-generated file (`query` is an already encoded query string).
pub async fn get_blob(path: &str, query: &str, mime: &str) -> Result<Blob, ApiError> {
    let url = if query.is_empty() {
        api_url(path)
    } else {
        format!("{}?{}", api_url(path), query)
    };
    let response = send("GET", path, Request::get(&url)).await?;
    into_blob(response, mime).await
}

pub async fn post_blob<B: Serialize>(path: &str, body: &B, mime: &str) -> Result<Blob, ApiError> {
    let response = send_json("POST", path, Request::post(&api_url(path)), body).await?;
    into_blob(response, mime).await
}

/// Sign-in and registration go out without a token.
pub async fn post_anonymous<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let request = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    let response = request.send().await.map_err(|e| {
        log::error!("POST {} failed: {}", path, e);
        ApiError::Network(e.to_string())
    })?;
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let error = match ApiError::from_status(status, &body) {
            // wrong credentials, not an expired session
            ApiError::Unauthorized => ApiError::Http {
                status,
                message: "Usuario o contraseña incorrectos".to_string(),
            },
            other => other,
        };
        log::error!("POST {} -> {}", path, error);
        return Err(error);
    }
    decode_body(path, response).await
}
