//! DTOs for the shorten endpoint.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Accepted URL schemes; anything else is rejected at the boundary.
static HTTP_URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://.*").unwrap());

/// Request to shorten a single long URL.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    #[validate(
        length(
            min = 1,
            max = 2048,
            message = "URL must be between 1 and 2048 characters"
        ),
        regex(
            path = *HTTP_URL_REGEX,
            message = "URL must start with http:// or https://"
        )
    )]
    pub original_url: String,
}

/// Result of a successful shorten operation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_url: String,
    pub short_code: String,
    pub original_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(url: &str) -> ShortenRequest {
        ShortenRequest {
            original_url: url.to_string(),
        }
    }

    #[test]
    fn test_http_url_accepted() {
        assert!(request("http://example.com").validate().is_ok());
    }

    #[test]
    fn test_https_url_accepted() {
        assert!(request("https://example.com/path?q=1").validate().is_ok());
    }

    #[test]
    fn test_blank_url_rejected() {
        assert!(request("").validate().is_err());
    }

    #[test]
    fn test_other_scheme_rejected() {
        assert!(request("ftp://example.com").validate().is_err());
        assert!(request("javascript:alert(1)").validate().is_err());
    }

    #[test]
    fn test_missing_scheme_rejected() {
        assert!(request("example.com").validate().is_err());
    }

    #[test]
    fn test_overlong_url_rejected() {
        let url = format!("https://example.com/{}", "a".repeat(2048));
        assert!(request(&url).validate().is_err());
    }

    #[test]
    fn test_url_at_limit_accepted() {
        let prefix = "https://example.com/";
        let url = format!("{}{}", prefix, "a".repeat(2048 - prefix.len()));
        assert_eq!(url.len(), 2048);
        assert!(request(&url).validate().is_ok());
    }
}
