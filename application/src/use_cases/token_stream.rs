//! Token stream adapter
//!
//! Turns one streaming chat call into a lazy sequence of text fragments.
//! Failures never escape: they become a single inline error fragment.

use crate::ports::chat_gateway::{ChatGateway, ChatRequest, StreamHandle};
use debate_domain::StreamEvent;
use debate_domain::debate::transcript::stream_error_fragment;
use futures::stream::{self, Stream};
use tracing::{debug, warn};

enum State<'a> {
    Pending {
        gateway: &'a dyn ChatGateway,
        request: ChatRequest,
    },
    Streaming {
        handle: StreamHandle,
        yielded: bool,
    },
    Done,
}

/// Stream text fragments for a single chat call.
///
/// Nothing is sent until the stream is first polled. The sequence is finite
/// and cannot be restarted. A gateway error, at call time or mid-stream,
/// produces exactly one `"\n\n**Error:** ..."` fragment and ends the stream.
pub fn token_stream<'a>(
    gateway: &'a dyn ChatGateway,
    request: ChatRequest,
) -> impl Stream<Item = String> + Send + 'a {
    stream::unfold(State::Pending { gateway, request }, |state| async move {
        let (mut handle, mut yielded) = match state {
            State::Pending { gateway, request } => {
                debug!(model = %request.model, messages = request.messages.len(), "Starting chat stream");
                match gateway.stream_chat(&request).await {
                    Ok(handle) => (handle, false),
                    Err(e) => {
                        warn!(model = %request.model, error = %e, "Chat call failed");
                        return Some((stream_error_fragment(&e.to_string()), State::Done));
                    }
                }
            }
            State::Streaming { handle, yielded } => (handle, yielded),
            State::Done => return None,
        };

        loop {
            match handle.receiver.recv().await {
                Some(StreamEvent::Delta(chunk)) => {
                    if chunk.is_empty() {
                        continue;
                    }
                    yielded = true;
                    return Some((chunk, State::Streaming { handle, yielded }));
                }
                // Providers that cannot stream deliver everything at once.
                Some(StreamEvent::Completed(text)) if !yielded && !text.is_empty() => {
                    return Some((text, State::Done));
                }
                Some(StreamEvent::Completed(_)) | None => return None,
                Some(StreamEvent::Error(e)) => {
                    warn!(error = %e, "Chat stream failed");
                    return Some((stream_error_fragment(&e), State::Done));
                }
            }
        }
    })
}
