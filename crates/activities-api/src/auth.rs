//! Bearer token handling for the activities API client.

/// Builds the `Authorization` header value. A missing or empty token still
/// produces `"Bearer "` — the server treats that as an anonymous call, and
/// nothing like `null`/`None` may ever leak into the header.
pub(crate) fn bearer_header(access_token: Option<&str>) -> String {
    format!("Bearer {}", access_token.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_appended() {
        assert_eq!(bearer_header(Some("abc123")), "Bearer abc123");
    }

    #[test]
    fn missing_token_yields_empty_bearer() {
        assert_eq!(bearer_header(None), "Bearer ");
    }

    #[test]
    fn empty_token_yields_empty_bearer() {
        assert_eq!(bearer_header(Some("")), "Bearer ");
    }
}
