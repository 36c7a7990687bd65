use http::header::AUTHORIZATION;
use http::HeaderMap;
use thiserror::Error;

const BEARER_PREFIX: &str = "Bearer ";
const TOKEN_PADDING: &[char] = &[' ', '\t', '\r', '\n'];

/// Errors raised while pulling a bearer token out of request headers.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum BearerError {
    #[error("Authorization header is missing")]
    MissingHeader,

    #[error("Authorization header does not use the Bearer scheme")]
    NoBearerScheme,
}

/// Extract a bearer token from the values of a multi-valued `Authorization` header.
///
/// The first value starting with `"Bearer "` wins. Its remainder is trimmed of
/// surrounding spaces, tabs and line breaks. The scheme match is case-sensitive.
///
/// # Errors
/// * `MissingHeader` - No values were supplied
/// * `NoBearerScheme` - No value carries the Bearer prefix
pub fn extract_bearer_token<'a, I>(values: I) -> Result<String, BearerError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = false;

    for value in values {
        seen = true;
        if let Some(token) = value.strip_prefix(BEARER_PREFIX) {
            return Ok(token.trim_matches(TOKEN_PADDING).to_string());
        }
    }

    if seen {
        Err(BearerError::NoBearerScheme)
    } else {
        Err(BearerError::MissingHeader)
    }
}

/// Extract a bearer token from an HTTP header map.
///
/// Values that are not visible ASCII count as present but never match.
pub fn extract_from_headers(headers: &HeaderMap) -> Result<String, BearerError> {
    extract_bearer_token(
        headers
            .get_all(AUTHORIZATION)
            .iter()
            .map(|value| value.to_str().unwrap_or_default()),
    )
}
