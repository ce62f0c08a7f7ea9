use super::request::BuildError;
use super::response::{BodyDisplay, HttpResponse, Outcome, classify_body};

/// How the display surface should color the rendered text. Presentation
/// only; nothing downstream branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Attention,
}

/// The single display buffer content for one exchange. Each new exchange
/// overwrites the previous one.
#[derive(Debug, Clone)]
pub struct RenderedExchange {
    pub text: String,
    pub tone: Tone,
}

pub fn render(outcome: &Outcome) -> RenderedExchange {
    match outcome {
        Outcome::Response(response) => render_response(response),
        Outcome::Failure {
            elapsed_ms,
            message,
            ..
        } => RenderedExchange {
            text: format!("ERROR ({elapsed_ms}ms)\n\n{message}"),
            tone: Tone::Attention,
        },
    }
}

/// Build errors are reported inline; no call was issued.
pub fn render_invalid(error: &BuildError) -> RenderedExchange {
    RenderedExchange {
        text: error.to_string(),
        tone: Tone::Attention,
    }
}

fn render_response(response: &HttpResponse) -> RenderedExchange {
    let mut text = format!(
        "{} {} ({}ms)\n\n=== HEADERS ===\n",
        response.status, response.reason, response.elapsed_ms
    );
    for (name, value) in &response.headers {
        text.push_str(&format!("{name}: {value}\n"));
    }

    text.push_str("\n=== BODY ===\n");
    match classify_body(&response.body) {
        BodyDisplay::Json(pretty) => text.push_str(&pretty),
        BodyDisplay::Text(plain) => text.push_str(&plain),
        BodyDisplay::Binary(len) => text.push_str(&format!("Binary data ({len} bytes)")),
    }

    let tone = if response.status < 400 {
        Tone::Neutral
    } else {
        Tone::Attention
    };

    RenderedExchange { text, tone }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::response::FailureKind;

    fn response(status: u16, reason: &str, body: &[u8]) -> HttpResponse {
        HttpResponse {
            status,
            reason: reason.to_string(),
            elapsed_ms: 42,
            headers: vec![
                ("content-type".to_string(), "application/json".to_string()),
                ("x-request-id".to_string(), "abc123".to_string()),
            ],
            body: body.to_vec(),
        }
    }

    #[test]
    fn created_with_json_body_renders_neutral_and_pretty() {
        let rendered = render(&Outcome::Response(response(201, "Created", br#"{"ok":true}"#)));

        assert_eq!(rendered.tone, Tone::Neutral);
        assert!(rendered.text.contains("201"));
        assert!(rendered.text.contains("{\n  \"ok\": true\n}"));
    }

    #[test]
    fn headers_render_one_per_line_in_received_order() {
        let rendered = render(&Outcome::Response(response(200, "OK", b"")));
        let headers_block = rendered
            .text
            .split("=== HEADERS ===\n")
            .nth(1)
            .and_then(|rest| rest.split("\n=== BODY ===").next())
            .unwrap();

        assert_eq!(
            headers_block,
            "content-type: application/json\nx-request-id: abc123\n"
        );
    }

    #[test]
    fn client_error_status_renders_attention() {
        let rendered = render(&Outcome::Response(response(404, "Not Found", b"gone")));
        assert_eq!(rendered.tone, Tone::Attention);
        assert!(rendered.text.contains("404 Not Found"));
    }

    #[test]
    fn utf8_body_renders_verbatim() {
        let rendered = render(&Outcome::Response(response(200, "OK", b"just some text")));
        assert!(rendered.text.ends_with("=== BODY ===\njust some text"));
    }

    #[test]
    fn binary_body_renders_exact_byte_count() {
        let rendered = render(&Outcome::Response(response(
            200,
            "OK",
            &[0xde, 0xad, 0xbe, 0xef, 0xff, 0xfe, 0x80],
        )));
        assert!(rendered.text.contains("Binary data (7 bytes)"));
    }

    #[test]
    fn transport_failure_renders_error_line() {
        let rendered = render(&Outcome::Failure {
            kind: FailureKind::Transport,
            elapsed_ms: 30000,
            message: "connection timed out".to_string(),
        });

        assert_eq!(rendered.tone, Tone::Attention);
        assert_eq!(rendered.text, "ERROR (30000ms)\n\nconnection timed out");
    }

    #[test]
    fn build_error_renders_inline_attention() {
        let rendered = render_invalid(&BuildError::EmptyUrl);
        assert_eq!(rendered.tone, Tone::Attention);
        assert_eq!(rendered.text, "URL cannot be empty");
    }
}
