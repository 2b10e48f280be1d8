//! Per-turn request URL construction.

use url::Url;

/// Query parameter that carries the user's message.
pub const MESSAGE_PARAM: &str = "message";

/// Append `message` to `endpoint` as a URL-encoded `message` query parameter.
///
/// Query parameters already present on the endpoint are preserved.
pub fn build_request_url(endpoint: &Url, message: &str) -> Url {
    let mut url = endpoint.clone();
    url.query_pairs_mut().append_pair(MESSAGE_PARAM, message);
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint(raw: &str) -> Url {
        Url::parse(raw).expect("valid url")
    }

    #[test]
    fn appends_message_parameter() {
        let url = build_request_url(&endpoint("https://example.com/chat"), "hello");
        assert_eq!(url.as_str(), "https://example.com/chat?message=hello");
    }

    #[test]
    fn encodes_reserved_and_non_ascii_characters() {
        let url = build_request_url(&endpoint("http://localhost/chat"), "a&b=c 안녕?");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![("message".to_string(), "a&b=c 안녕?".to_string())]
        );
        assert!(!url.query().unwrap_or_default().contains('&'));
    }

    #[test]
    fn preserves_existing_query_parameters() {
        let url = build_request_url(&endpoint("http://localhost/chat?lang=ko"), "hi");
        assert_eq!(url.query(), Some("lang=ko&message=hi"));
    }
}
