//! Custom extractors for the HTTP server.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Extractor for JSON request bodies.
///
/// Like `axum::Json`, but every rejection is reported as an [`AppError`] so
/// clients always get the same error body. A missing content type is treated
/// as JSON.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if !content_type.is_empty() && !content_type.contains("json") {
            return Err(AppError::InvalidInput(format!(
                "Invalid content type: expected application/json, got {content_type}"
            )));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::InvalidInput(format!("Failed to read request body: {e}")))?;

        serde_json::from_slice(&bytes)
            .map(ApiJson)
            .map_err(|e| AppError::InvalidInput(format!("Invalid JSON body: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        name: String,
    }

    fn request(content_type: Option<&str>, body: &'static str) -> Request {
        let mut builder = Request::builder().method("POST").uri("/");
        if let Some(ct) = content_type {
            builder = builder.header(CONTENT_TYPE, ct);
        }
        builder.body(Body::from(body)).unwrap()
    }

    #[tokio::test]
    async fn test_extracts_json() {
        let req = request(Some("application/json"), r#"{"name": "calm"}"#);
        let ApiJson(payload) = ApiJson::<Payload>::from_request(req, &()).await.unwrap();
        assert_eq!(payload.name, "calm");
    }

    #[tokio::test]
    async fn test_missing_content_type_is_json() {
        let req = request(None, r#"{"name": "sad"}"#);
        assert!(ApiJson::<Payload>::from_request(req, &()).await.is_ok());
    }

    #[tokio::test]
    async fn test_rejects_other_content_types() {
        let req = request(Some("text/plain"), r#"{"name": "sad"}"#);
        let err = ApiJson::<Payload>::from_request(req, &()).await.err().unwrap();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_rejects_malformed_json() {
        let req = request(Some("application/json"), "{not json");
        let err = ApiJson::<Payload>::from_request(req, &()).await.err().unwrap();
        assert!(err.to_string().starts_with("Invalid JSON body"));
    }
}
