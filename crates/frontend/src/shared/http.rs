//! HTTP client for the payroll API
//!
//! Thin wrappers over `gloo_net` that attach the bearer token, log each
//! request and map failures into [`ApiError`].

use contracts::shared::ApiErrorPayload;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::shared::config::config;
use crate::system::auth::storage;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("No se pudo conectar con el servidor: {0}")]
    Network(String),
    #[error("La solicitud falló ({status}).")]
    Status {
        status: u16,
        payload: Option<ApiErrorPayload>,
    },
    #[error("Respuesta inválida del servidor: {0}")]
    Decode(String),
    #[error("No se pudo preparar la solicitud: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Status {
            status,
            payload: ApiErrorPayload::parse(body),
        }
    }

    /// Text for the user: the server's `detail` when there is one.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status {
                payload: Some(payload),
                ..
            } => payload.pretty(),
            other => other.to_string(),
        }
    }
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", config().api_base_url, path)
}

fn authorize(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn send(method: &str, path: &str, request: Request) -> Result<Response, ApiError> {
    log::debug!("{} {}", method, path);
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        log::warn!("{} {} -> {}", method, path, status);
        return Err(ApiError::from_status(status, &body));
    }
    Ok(response)
}

/// Parse a success body; an empty body reads as `null`.
fn parse_body(text: &str) -> Result<Value, ApiError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let request = authorize(Request::get(&api_url(path)))
        .build()
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    send("GET", path, request)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<Value, ApiError> {
    let request = authorize(Request::post(&api_url(path)))
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    let response = send("POST", path, request).await?;
    let text = response.text().await.unwrap_or_default();
    parse_body(&text)
}

pub async fn put_json<B: Serialize>(path: &str, body: &B) -> Result<Value, ApiError> {
    let request = authorize(Request::put(&api_url(path)))
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    let response = send("PUT", path, request).await?;
    let text = response.text().await.unwrap_or_default();
    parse_body(&text)
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let request = authorize(Request::delete(&api_url(path)))
        .build()
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    send("DELETE", path, request).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_detail_reaches_user() {
        let err = ApiError::from_status(
            422,
            r#"{"detail":[{"loc":["body","IDBanco"],"msg":"field required"}]}"#,
        );
        assert!(err.user_message().contains("IDBanco: field required"));
    }

    #[test]
    fn test_status_without_detail() {
        let err = ApiError::from_status(500, "Internal Server Error");
        assert_eq!(
            err,
            ApiError::Status {
                status: 500,
                payload: None
            }
        );
        assert_eq!(err.user_message(), "La solicitud falló (500).");
    }

    #[test]
    fn test_network_message() {
        let err = ApiError::Network("Failed to fetch".into());
        assert_eq!(
            err.user_message(),
            "No se pudo conectar con el servidor: Failed to fetch"
        );
    }

    #[test]
    fn test_empty_success_body() {
        assert_eq!(parse_body(""), Ok(Value::Null));
        assert_eq!(parse_body(r#"{"PKID":3}"#).unwrap()["PKID"], 3);
        assert!(parse_body("<html>").is_err());
    }
}
