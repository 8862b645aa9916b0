//! OpenAI-compatible streaming chat gateway
//!
//! Works against any endpoint exposing `POST {base_url}/chat/completions`
//! with `stream: true` (OpenAI, Groq, Ollama, vLLM, ...).

use super::sse::{SseEvent, SseParser};
use crate::credentials::ApiKey;
use async_trait::async_trait;
use debate_application::ports::chat_gateway::{
    ChatGateway, ChatRequest, GatewayError, StreamHandle,
};
use debate_domain::{Message, StreamEvent};
use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{debug, warn};

const STREAM_BUFFER: usize = 64;

#[derive(Debug, Serialize)]
struct CompletionBody<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f32,
    max_tokens: u32,
    stream: bool,
}

/// Streaming gateway for one endpoint and one API key
pub struct OpenAiCompatibleGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: ApiKey,
}

impl OpenAiCompatibleGateway {
    pub fn new(base_url: impl Into<String>, api_key: ApiKey) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, api_key)
    }

    /// Share a client (and its connection pool) between gateways.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>, api_key: ApiKey) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Read the body chunk by chunk, forwarding parsed events.
    async fn pump(mut response: reqwest::Response, tx: mpsc::Sender<StreamEvent>) {
        let mut parser = SseParser::new();
        let mut full_text = String::new();

        loop {
            match response.chunk().await {
                Ok(Some(bytes)) => {
                    for event in parser.feed(&bytes) {
                        if !Self::forward(event, &mut full_text, &tx).await {
                            return;
                        }
                    }
                }
                Ok(None) => {
                    if let Some(event) = parser.finish()
                        && !Self::forward(event, &mut full_text, &tx).await
                    {
                        return;
                    }
                    break;
                }
                Err(e) => {
                    warn!("Chat stream read failed: {}", e);
                    let _ = tx.send(StreamEvent::Error(e.to_string())).await;
                    return;
                }
            }
        }

        // Body ended without [DONE]; whatever arrived is the reply.
        let _ = tx.send(StreamEvent::Completed(full_text)).await;
    }

    /// Forward one event. Returns false once the stream is finished.
    async fn forward(
        event: SseEvent,
        full_text: &mut String,
        tx: &mpsc::Sender<StreamEvent>,
    ) -> bool {
        match event {
            SseEvent::Delta(text) => {
                full_text.push_str(&text);
                if tx.send(StreamEvent::Delta(text)).await.is_err() {
                    debug!("Stream receiver dropped; stopping");
                    return false;
                }
                true
            }
            SseEvent::Error(message) => {
                warn!("Endpoint reported an error mid-stream: {}", message);
                let _ = tx.send(StreamEvent::Error(message)).await;
                false
            }
            SseEvent::Done => {
                let _ = tx
                    .send(StreamEvent::Completed(std::mem::take(full_text)))
                    .await;
                false
            }
        }
    }
}

#[async_trait]
impl ChatGateway for OpenAiCompatibleGateway {
    async fn stream_chat(&self, request: &ChatRequest) -> Result<StreamHandle, GatewayError> {
        let body = CompletionBody {
            model: request.model.as_str(),
            messages: &request.messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            stream: true,
        };

        debug!(
            url = %self.completions_url(),
            model = %request.model,
            messages = request.messages.len(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(self.api_key.expose())
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(GatewayError::RequestFailed(format!(
                "HTTP {}: {}",
                status,
                text.trim()
            )));
        }

        let (tx, rx) = mpsc::channel(STREAM_BUFFER);
        tokio::spawn(Self::pump(response, tx));
        Ok(StreamHandle::new(rx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use debate_domain::ModelId;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    /// Serve one canned HTTP response; the task yields the raw request.
    async fn serve_once(response: String) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let task = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            request
        });
        (format!("http://{}/v1/", addr), task)
    }

    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&buf);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|line| {
                        let line = line.to_ascii_lowercase();
                        line.strip_prefix("content-length:")
                            .and_then(|v| v.trim().parse::<usize>().ok())
                    })
                    .unwrap_or(0);
                if buf.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8(buf).unwrap()
    }

    fn sse_response(body: &str) -> String {
        format!(
            "HTTP/1.1 200 OK\r\nContent-Type: text/event-stream\r\nConnection: close\r\n\r\n{}",
            body
        )
    }

    fn delta_line(content: &str) -> String {
        format!(
            "data: {}\n\n",
            serde_json::json!({"choices": [{"delta": {"content": content}}]})
        )
    }

    fn request() -> ChatRequest {
        ChatRequest::new(
            ModelId::try_new("gpt-4o-mini").unwrap(),
            vec![Message::system("Be brief."), Message::user("Trains or planes?")],
        )
    }

    async fn drain(handle: StreamHandle) -> Vec<StreamEvent> {
        let mut receiver = handle.receiver;
        let mut events = Vec::new();
        while let Some(event) = receiver.recv().await {
            events.push(event);
        }
        events
    }

    #[tokio::test]
    async fn test_streams_deltas_and_sends_expected_request() {
        let body = format!(
            "{}{}data: [DONE]\n\n",
            delta_line("Trains, "),
            delta_line("obviously.")
        );
        let (base_url, server) = serve_once(sse_response(&body)).await;
        let gateway = OpenAiCompatibleGateway::new(base_url, ApiKey::new("sk-test"));

        let handle = gateway.stream_chat(&request()).await.unwrap();
        assert_eq!(
            drain(handle).await,
            vec![
                StreamEvent::Delta("Trains, ".to_string()),
                StreamEvent::Delta("obviously.".to_string()),
                StreamEvent::Completed("Trains, obviously.".to_string()),
            ]
        );

        let raw = server.await.unwrap();
        assert!(raw.starts_with("POST /v1/chat/completions HTTP/1.1"));
        assert!(raw.to_ascii_lowercase().contains("authorization: bearer sk-test"));

        let json_start = raw.find("\r\n\r\n").unwrap() + 4;
        let sent: serde_json::Value = serde_json::from_str(&raw[json_start..]).unwrap();
        assert_eq!(sent["model"], "gpt-4o-mini");
        assert_eq!(sent["stream"], true);
        assert_eq!(sent["max_tokens"], 1024);
        assert_eq!(sent["temperature"], 0.75);
        assert_eq!(
            sent["messages"],
            serde_json::json!([
                {"role": "system", "content": "Be brief."},
                {"role": "user", "content": "Trains or planes?"}
            ])
        );
    }

    #[tokio::test]
    async fn test_body_without_done_still_completes() {
        let (base_url, _server) = serve_once(sse_response(&delta_line("cut short"))).await;
        let gateway = OpenAiCompatibleGateway::new(base_url, ApiKey::new("k"));

        let events = drain(gateway.stream_chat(&request()).await.unwrap()).await;
        assert_eq!(
            events,
            vec![
                StreamEvent::Delta("cut short".to_string()),
                StreamEvent::Completed("cut short".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_in_stream_error_becomes_error_event() {
        let body = format!(
            "{}data: {{\"error\":{{\"message\":\"Rate limit reached\"}}}}\n\n",
            delta_line("partial")
        );
        let (base_url, _server) = serve_once(sse_response(&body)).await;
        let gateway = OpenAiCompatibleGateway::new(base_url, ApiKey::new("k"));

        let events = drain(gateway.stream_chat(&request()).await.unwrap()).await;
        assert_eq!(
            events,
            vec![
                StreamEvent::Delta("partial".to_string()),
                StreamEvent::Error("Rate limit reached".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_http_error_status_is_request_failure() {
        let body = r#"{"error":{"message":"Invalid API key"}}"#;
        let response = format!(
            "HTTP/1.1 401 Unauthorized\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        let (base_url, _server) = serve_once(response).await;
        let gateway = OpenAiCompatibleGateway::new(base_url, ApiKey::new("bad"));

        let err = gateway.stream_chat(&request()).await.err().unwrap();
        let message = err.to_string();
        assert!(matches!(err, GatewayError::RequestFailed(_)));
        assert!(message.contains("401"), "{message}");
        assert!(message.contains("Invalid API key"), "{message}");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_connection_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let gateway = OpenAiCompatibleGateway::new(format!("http://{}/v1", addr), ApiKey::new("k"));
        let err = gateway.stream_chat(&request()).await.err().unwrap();
        assert!(matches!(err, GatewayError::ConnectionError(_)));
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let gateway = OpenAiCompatibleGateway::new("https://api.openai.com/v1/", ApiKey::new("k"));
        assert_eq!(gateway.base_url(), "https://api.openai.com/v1");
        assert_eq!(
            gateway.completions_url(),
            "https://api.openai.com/v1/chat/completions"
        );
    }
}
