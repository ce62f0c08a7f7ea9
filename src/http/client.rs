use std::time::{Duration, Instant};

use reqwest::header::{HeaderName, HeaderValue};

use super::request::PreparedRequest;
use super::response::{FailureKind, HttpResponse, Outcome};

/// Every exchange gets the same fixed upper bound; not user-configurable.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Perform exactly one network call. No retries, no cancellation; the
/// caller keeps its in-flight guard up until this resolves either way.
pub async fn execute(request: PreparedRequest) -> Outcome {
    let client = reqwest::Client::new();
    let mut builder = client
        .request(request.method.into(), request.url)
        .timeout(REQUEST_TIMEOUT);

    // Entries that cannot form a valid wire header are skipped, matching
    // the lenient headers contract of the request form.
    for (key, value) in &request.headers {
        let Ok(name) = HeaderName::from_bytes(key.as_bytes()) else {
            continue;
        };
        let Ok(value) = HeaderValue::from_str(value) else {
            continue;
        };
        builder = builder.header(name, value);
    }

    if let Some(body) = request.body {
        builder = builder.body(body);
    }

    let started = Instant::now();
    let response = match builder.send().await {
        Ok(response) => response,
        Err(e) => {
            return Outcome::Failure {
                kind: FailureKind::Transport,
                elapsed_ms: started.elapsed().as_millis(),
                message: e.to_string(),
            };
        }
    };

    let status = response.status();
    let headers = collect_headers(response.headers());
    let bytes = match response.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            return Outcome::Failure {
                kind: FailureKind::MalformedResponse,
                elapsed_ms: started.elapsed().as_millis(),
                message: format!("Failed to read response body: {e}"),
            };
        }
    };
    let elapsed_ms = started.elapsed().as_millis();

    Outcome::Response(HttpResponse {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        elapsed_ms,
        headers,
        body: bytes.to_vec(),
    })
}

fn collect_headers(headers: &reqwest::header::HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                value.to_str().unwrap_or("<binary>").to_string(),
            )
        })
        .collect()
}
