use std::collections::HashMap;
use std::fmt::{self, Display};

use super::method::HttpMethod;

/// Raw user input for one exchange, straight from the request form.
#[derive(Debug, Clone)]
pub struct ExchangeInput {
    pub method: HttpMethod,
    pub url: String,
    pub headers: String,
    pub body: String,
}

/// A validated request, ready to hand to the transport.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub method: HttpMethod,
    pub url: reqwest::Url,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    EmptyUrl,
    InvalidUrl(String),
}

impl Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::EmptyUrl => write!(f, "URL cannot be empty"),
            BuildError::InvalidUrl(reason) => write!(f, "Invalid URL: {reason}"),
        }
    }
}

/// Validate form input into a [`PreparedRequest`]. No network traffic
/// happens here; an `Err` means the exchange was never issued.
pub fn build(input: &ExchangeInput) -> Result<PreparedRequest, BuildError> {
    let raw_url = input.url.trim();
    if raw_url.is_empty() {
        return Err(BuildError::EmptyUrl);
    }
    let url = reqwest::Url::parse(raw_url).map_err(|e| BuildError::InvalidUrl(e.to_string()))?;

    let headers = parse_headers(&input.headers);

    // GET and DELETE ignore the body editor entirely, even when non-empty.
    let body = if input.method.allows_body() && !input.body.is_empty() {
        Some(input.body.clone())
    } else {
        None
    };

    Ok(PreparedRequest {
        method: input.method,
        url,
        headers,
        body,
    })
}

/// Headers are entered as a JSON object of strings. Anything that fails to
/// parse as a flat string-to-string object falls back to no headers; the
/// request is still issued. Intentional lenience, not an oversight.
fn parse_headers(text: &str) -> HashMap<String, String> {
    serde_json::from_str(text).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(method: HttpMethod, url: &str, headers: &str, body: &str) -> ExchangeInput {
        ExchangeInput {
            method,
            url: url.to_string(),
            headers: headers.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn empty_url_rejected() {
        let err = build(&input(HttpMethod::Get, "   ", "", "")).unwrap_err();
        assert_eq!(err, BuildError::EmptyUrl);
    }

    #[test]
    fn non_absolute_url_rejected() {
        let err = build(&input(HttpMethod::Get, "not a url", "", "")).unwrap_err();
        assert!(matches!(err, BuildError::InvalidUrl(_)));
    }

    #[test]
    fn relative_path_rejected() {
        let err = build(&input(HttpMethod::Get, "/just/a/path", "", "")).unwrap_err();
        assert!(matches!(err, BuildError::InvalidUrl(_)));
    }

    #[test]
    fn get_and_delete_never_carry_a_body() {
        for method in [HttpMethod::Get, HttpMethod::Delete] {
            let prepared =
                build(&input(method, "https://api.example.com/x", "", "ignored payload")).unwrap();
            assert_eq!(prepared.body, None);
        }
    }

    #[test]
    fn post_body_is_sent_verbatim() {
        let prepared = build(&input(
            HttpMethod::Post,
            "https://api.example.com/x",
            r#"{"Content-Type":"application/json"}"#,
            r#"{"key":"value"}"#,
        ))
        .unwrap();

        assert_eq!(prepared.body.as_deref(), Some(r#"{"key":"value"}"#));
        assert_eq!(
            prepared.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn empty_body_text_attaches_nothing() {
        let prepared = build(&input(HttpMethod::Put, "https://api.example.com/x", "", "")).unwrap();
        assert_eq!(prepared.body, None);
    }

    #[test]
    fn malformed_header_json_falls_back_to_empty() {
        let prepared = build(&input(
            HttpMethod::Get,
            "https://api.example.com/x",
            "not json",
            "",
        ))
        .unwrap();
        assert!(prepared.headers.is_empty());
    }

    #[test]
    fn nested_header_json_falls_back_to_empty() {
        let prepared = build(&input(
            HttpMethod::Get,
            "https://api.example.com/x",
            r#"{"outer": {"inner": "nope"}}"#,
            "",
        ))
        .unwrap();
        assert!(prepared.headers.is_empty());
    }

    #[test]
    fn url_is_trimmed_before_parsing() {
        let prepared =
            build(&input(HttpMethod::Get, "  https://api.example.com/x  ", "", "")).unwrap();
        assert_eq!(prepared.url.as_str(), "https://api.example.com/x");
    }
}
