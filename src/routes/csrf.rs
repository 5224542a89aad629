use axum::http::{header::COOKIE, HeaderMap};
use rand::{distributions::Alphanumeric, Rng};

use crate::error::AppError;

pub const CSRF_COOKIE: &str = "_csrf";
const TOKEN_LEN: usize = 32;

/// Request bodies that may echo the anti-forgery token back as `_csrf`.
pub trait CarriesCsrfToken {
    fn csrf_token(&self) -> Option<&str>;
}

pub fn generate_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LEN)
        .map(char::from)
        .collect()
}

pub fn token_from_cookies(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == CSRF_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_string())
}

pub fn set_cookie_value(token: &str) -> String {
    format!("{CSRF_COOKIE}={token}; Path=/; HttpOnly; SameSite=Strict")
}

/// Both sides must be present and equal.
pub fn verify(cookie: Option<&str>, submitted: Option<&str>) -> Result<(), AppError> {
    match (cookie, submitted) {
        (Some(expected), Some(actual)) if constant_time_eq(expected, actual) => Ok(()),
        _ => {
            tracing::warn!("rejected submission with a bad anti-forgery token");
            Err(AppError::Forbidden)
        }
    }
}

fn constant_time_eq(a: &str, b: &str) -> bool {
    a.len() == b.len()
        && a
            .bytes()
            .zip(b.bytes())
            .fold(0u8, |acc, (x, y)| acc | (x ^ y))
            == 0
}
