/// One successful HTTP round trip, kept raw so rendering can decide how to
/// present the payload.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub reason: String,
    pub elapsed_ms: u128,
    /// Response headers in the order they arrived.
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

/// Terminal result of one exchange. There is no intermediate state beyond
/// "in flight", which lives in the caller.
#[derive(Debug, Clone)]
pub enum Outcome {
    Response(HttpResponse),
    Failure {
        kind: FailureKind,
        elapsed_ms: u128,
        message: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Network, DNS, TLS, or timeout error before a response arrived.
    Transport,
    /// A response arrived but its payload could not be read.
    MalformedResponse,
}

/// Exactly one display form per payload: pretty-printed JSON if the bytes
/// parse as JSON, the decoded text if they are UTF-8, else a byte count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyDisplay {
    Json(String),
    Text(String),
    Binary(usize),
}

pub fn classify_body(bytes: &[u8]) -> BodyDisplay {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(bytes) {
        if let Ok(pretty) = serde_json::to_string_pretty(&value) {
            return BodyDisplay::Json(pretty);
        }
    }
    match std::str::from_utf8(bytes) {
        Ok(text) => BodyDisplay::Text(text.to_string()),
        Err(_) => BodyDisplay::Binary(bytes.len()),
    }
}
