/**
 * Credential Codec
 *
 * Pure decoding of the two Authorization header shapes the API accepts:
 *
 * - `Basic <base64(email:password)>` on the exchange route
 * - `Token token="<base64(raw_token)>"` on every protected route
 *
 * No side effects; the resolver and the session gate build on these.
 */

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::ApiError;

/// Decode a Basic Authorization header into an (email, password) pair
///
/// Splits the base64 payload on the first colon, so passwords containing
/// colons survive. An absent or malformed header is reported as
/// `CredentialsRequired`.
pub fn decode_basic(header: Option<&str>) -> Result<(String, String), ApiError> {
    let header = header.ok_or(ApiError::CredentialsRequired)?;

    let payload = header
        .strip_prefix("Basic ")
        .ok_or(ApiError::CredentialsRequired)?;

    let decoded = STANDARD
        .decode(payload)
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .ok_or(ApiError::CredentialsRequired)?;

    let (email, password) = decoded
        .split_once(':')
        .ok_or(ApiError::CredentialsRequired)?;

    Ok((email.to_string(), password.to_string()))
}

/// Decode a bearer token header into the raw token string
///
/// The header carries the token base64-encoded inside a quoted parameter:
/// `Token token="<base64>"`. An absent header is `TokenRequired`; a header
/// that is present but will not parse is `InvalidToken`.
pub fn decode_token(header: Option<&str>) -> Result<String, ApiError> {
    let header = header.ok_or(ApiError::TokenRequired)?;

    let payload = header
        .strip_prefix("Token token=\"")
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or(ApiError::InvalidToken)?;

    STANDARD
        .decode(payload)
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .ok_or(ApiError::InvalidToken)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic_header(email: &str, password: &str) -> String {
        format!("Basic {}", STANDARD.encode(format!("{}:{}", email, password)))
    }

    #[test]
    fn test_decode_basic() {
        let header = basic_header("user@example.com", "hunter2");
        let (email, password) = decode_basic(Some(&header)).unwrap();
        assert_eq!(email, "user@example.com");
        assert_eq!(password, "hunter2");
    }

    #[test]
    fn test_decode_basic_password_with_colon() {
        let header = basic_header("user@example.com", "pa:ss:word");
        let (_, password) = decode_basic(Some(&header)).unwrap();
        assert_eq!(password, "pa:ss:word");
    }

    #[test]
    fn test_decode_basic_missing_header() {
        let result = decode_basic(None);
        assert!(matches!(result, Err(ApiError::CredentialsRequired)));
    }

    #[test]
    fn test_decode_basic_wrong_scheme() {
        let result = decode_basic(Some("Bearer abcdef"));
        assert!(matches!(result, Err(ApiError::CredentialsRequired)));
    }

    #[test]
    fn test_decode_basic_not_base64() {
        let result = decode_basic(Some("Basic !!!not-base64!!!"));
        assert!(matches!(result, Err(ApiError::CredentialsRequired)));
    }

    #[test]
    fn test_decode_basic_no_colon() {
        let header = format!("Basic {}", STANDARD.encode("no-colon-here"));
        let result = decode_basic(Some(&header));
        assert!(matches!(result, Err(ApiError::CredentialsRequired)));
    }

    #[test]
    fn test_decode_token() {
        let raw = "opaque-session-token";
        let header = format!("Token token=\"{}\"", STANDARD.encode(raw));
        assert_eq!(decode_token(Some(&header)).unwrap(), raw);
    }

    #[test]
    fn test_decode_token_missing_header() {
        let result = decode_token(None);
        assert!(matches!(result, Err(ApiError::TokenRequired)));
    }

    #[test]
    fn test_decode_token_wrong_shape() {
        let result = decode_token(Some("Bearer abcdef"));
        assert!(matches!(result, Err(ApiError::InvalidToken)));

        let result = decode_token(Some("Token token=unquoted"));
        assert!(matches!(result, Err(ApiError::InvalidToken)));
    }

    #[test]
    fn test_decode_token_not_base64() {
        let result = decode_token(Some("Token token=\"###\""));
        assert!(matches!(result, Err(ApiError::InvalidToken)));
    }
}
