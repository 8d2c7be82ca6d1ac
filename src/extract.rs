use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// JSON body extractor whose rejection names the offending field.
///
/// Axum's own `Json` reports a flat serde message; this one walks the
/// document with `serde_path_to_error` so a client sees e.g.
/// `email: invalid type: integer, expected a string`.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(&req) {
            return Err(AppError::bad_request("expected `Content-Type: application/json`"));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|err| AppError::bad_request(err.body_text()))?;

        parse_json(&bytes).map(ValidatedJson)
    }
}

fn has_json_content_type(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| {
            let mime = mime.trim();
            mime.eq_ignore_ascii_case("application/json")
                || (mime.starts_with("application/") && mime.ends_with("+json"))
        })
        .unwrap_or(false)
}

pub(crate) fn parse_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    let deserializer = &mut serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(deserializer).map_err(|err| {
        let path = err.path().to_string();
        let inner = err.into_inner();
        if inner.is_syntax() || inner.is_eof() {
            AppError::unprocessable(format!("malformed JSON: {inner}"))
        } else if path == "." {
            AppError::unprocessable(inner.to_string())
        } else {
            AppError::unprocessable(format!("{path}: {inner}"))
        }
    })
}
