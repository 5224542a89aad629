use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;
use super::csrf::{self, CarriesCsrfToken};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionKind {
    Json,
    Form,
    /// No content type and no body, e.g. a bare `PUT`.
    Empty,
}

impl SubmissionKind {
    fn from_headers(headers: &HeaderMap) -> Result<Self, AppError> {
        let content_type = headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_ascii_lowercase);

        match content_type.as_deref() {
            None | Some("") => Ok(SubmissionKind::Empty),
            Some(ct) if ct.starts_with("application/json") => Ok(SubmissionKind::Json),
            Some(ct) if ct.starts_with("application/x-www-form-urlencoded") => {
                Ok(SubmissionKind::Form)
            }
            Some(_) => Err(AppError::UnsupportedMediaType),
        }
    }
}

/// A JSON or form body whose anti-forgery token has already been checked.
///
/// Form posts must carry a `_csrf` field matching the cookie. JSON bodies are
/// only checked when they include the field.
pub struct Submission<T> {
    pub body: T,
    pub kind: SubmissionKind,
}

impl<S, T> FromRequest<S> for Submission<T>
where
    S: Send + Sync,
    T: DeserializeOwned + CarriesCsrfToken + Send,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let cookie_token = csrf::token_from_cookies(req.headers());
        let kind = SubmissionKind::from_headers(req.headers()).map_err(IntoResponse::into_response)?;

        let body = match kind {
            SubmissionKind::Json => {
                let Json(body) = Json::<T>::from_request(req, state)
                    .await
                    .map_err(IntoResponse::into_response)?;
                body
            }
            SubmissionKind::Form => {
                let Form(body) = Form::<T>::from_request(req, state)
                    .await
                    .map_err(IntoResponse::into_response)?;
                body
            }
            SubmissionKind::Empty => {
                let bytes = Bytes::from_request(req, state)
                    .await
                    .map_err(IntoResponse::into_response)?;
                if !bytes.iter().all(u8::is_ascii_whitespace) {
                    return Err(AppError::UnsupportedMediaType.into_response());
                }
                serde_json::from_str::<T>("{}").map_err(|e| {
                    AppError::Validation(format!("missing request body: {e}")).into_response()
                })?
            }
        };

        let checked = match (kind, body.csrf_token()) {
            (SubmissionKind::Form, submitted) => csrf::verify(cookie_token.as_deref(), submitted),
            (_, Some(submitted)) => csrf::verify(cookie_token.as_deref(), Some(submitted)),
            (_, None) => Ok(()),
        };
        checked.map_err(IntoResponse::into_response)?;

        Ok(Self { body, kind })
    }
}
