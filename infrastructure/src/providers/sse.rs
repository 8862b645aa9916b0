//! Incremental server-sent events parser for streamed chat completions.
//!
//! Bytes arrive in arbitrary chunks; lines (and UTF-8 sequences) may be
//! split across them, so undecoded bytes are buffered until a newline.

use serde::Deserialize;
use tracing::debug;

/// A meaningful event extracted from the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SseEvent {
    /// Text content from `choices[0].delta.content`.
    Delta(String),
    /// An error object sent inside the stream.
    Error(String),
    /// The `[DONE]` sentinel.
    Done,
}

#[derive(Debug, Deserialize)]
struct ChunkPayload {
    #[serde(default)]
    choices: Vec<ChunkChoice>,
    error: Option<ErrorPayload>,
}

#[derive(Debug, Deserialize)]
struct ChunkChoice {
    #[serde(default)]
    delta: ChunkDelta,
}

#[derive(Debug, Default, Deserialize)]
struct ChunkDelta {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorPayload {
    message: String,
}

/// Line-buffering parser
#[derive(Debug, Default)]
pub struct SseParser {
    buffer: Vec<u8>,
}

impl SseParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk of bytes and return every complete event it finished.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<SseEvent> {
        self.buffer.extend_from_slice(chunk);

        let mut events = Vec::new();
        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            let line = String::from_utf8_lossy(&line);
            if let Some(event) = Self::parse_line(line.trim_end_matches(['\r', '\n'])) {
                events.push(event);
            }
        }
        events
    }

    /// Parse whatever is left once the body has ended without a newline.
    pub fn finish(&mut self) -> Option<SseEvent> {
        if self.buffer.is_empty() {
            return None;
        }
        let rest = std::mem::take(&mut self.buffer);
        let line = String::from_utf8_lossy(&rest);
        Self::parse_line(line.trim_end_matches('\r'))
    }

    fn parse_line(line: &str) -> Option<SseEvent> {
        // Blank lines separate events; lines starting with ':' are comments.
        if line.is_empty() || line.starts_with(':') {
            return None;
        }
        let data = line.strip_prefix("data:")?.trim_start();
        if data == "[DONE]" {
            return Some(SseEvent::Done);
        }

        let payload: ChunkPayload = match serde_json::from_str(data) {
            Ok(payload) => payload,
            Err(e) => {
                debug!("Skipping unparseable stream line: {}", e);
                return None;
            }
        };

        if let Some(error) = payload.error {
            return Some(SseEvent::Error(error.message));
        }

        payload
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.delta.content)
            .filter(|content| !content.is_empty())
            .map(SseEvent::Delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(content: &str) -> String {
        format!(
            "data: {}\n\n",
            serde_json::json!({"choices": [{"index": 0, "delta": {"content": content}}]})
        )
    }

    #[test]
    fn test_parses_deltas_and_done() {
        let mut parser = SseParser::new();
        let body = format!("{}{}data: [DONE]\n\n", chunk("Hello"), chunk(", world"));
        assert_eq!(
            parser.feed(body.as_bytes()),
            vec![
                SseEvent::Delta("Hello".to_string()),
                SseEvent::Delta(", world".to_string()),
                SseEvent::Done,
            ]
        );
    }

    #[test]
    fn test_handles_lines_split_across_chunks() {
        let mut parser = SseParser::new();
        let body = chunk("split");
        let (a, b) = body.as_bytes().split_at(10);
        assert!(parser.feed(a).is_empty());
        assert_eq!(parser.feed(b), vec![SseEvent::Delta("split".to_string())]);
    }

    #[test]
    fn test_handles_utf8_split_across_chunks() {
        let mut parser = SseParser::new();
        let body = chunk("très ✓");
        let bytes = body.as_bytes();
        let cut = body.find('✓').unwrap() + 1;
        let mut events = parser.feed(&bytes[..cut]);
        events.extend(parser.feed(&bytes[cut..]));
        assert_eq!(events, vec![SseEvent::Delta("très ✓".to_string())]);
    }

    #[test]
    fn test_ignores_comments_roles_and_null_content() {
        let mut parser = SseParser::new();
        let body = concat!(
            ": keep-alive\n\n",
            "data: {\"choices\":[{\"delta\":{\"role\":\"assistant\"}}]}\n\n",
            "data: {\"choices\":[{\"delta\":{\"content\":null}}]}\n\n",
            "data: {\"choices\":[]}\n\n",
            "event: ping\n\n",
            "data: not json\n\n",
        );
        assert!(parser.feed(body.as_bytes()).is_empty());
    }

    #[test]
    fn test_crlf_line_endings() {
        let mut parser = SseParser::new();
        let body = chunk("win").replace('\n', "\r\n");
        assert_eq!(
            parser.feed(body.as_bytes()),
            vec![SseEvent::Delta("win".to_string())]
        );
    }

    #[test]
    fn test_in_stream_error() {
        let mut parser = SseParser::new();
        let body = "data: {\"error\":{\"message\":\"Rate limit reached\",\"type\":\"tokens\"}}\n\n";
        assert_eq!(
            parser.feed(body.as_bytes()),
            vec![SseEvent::Error("Rate limit reached".to_string())]
        );
    }

    #[test]
    fn test_finish_parses_trailing_line() {
        let mut parser = SseParser::new();
        assert!(parser.feed(b"data: [DONE]").is_empty());
        assert_eq!(parser.finish(), Some(SseEvent::Done));
        assert_eq!(parser.finish(), None);
    }
}
