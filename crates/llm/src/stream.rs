//! Streamed completions: SSE framing and delta extraction.

use std::pin::Pin;

use folio_core::SSE_MAX_LINE_BYTES;
use futures_util::{Stream, StreamExt};

use crate::ai_types::{ChatChunk, ChatRequest};
use crate::client::{LlmClient, truncate};
use crate::error::LlmError;

/// Incremental text deltas of one completion.
pub type TokenStream = Pin<Box<dyn Stream<Item = Result<String, LlmError>> + Send>>;

const DONE_MARKER: &str = "[DONE]";

/// Splits a byte stream into SSE `data:` payloads.
///
/// Bytes are buffered until a full line is available, so multi-byte
/// characters split across network chunks decode correctly. A pending line
/// may not grow past `max_line` bytes.
#[derive(Debug)]
pub struct SseDecoder {
    buffer: Vec<u8>,
    max_line: usize,
}

impl Default for SseDecoder {
    fn default() -> Self {
        Self::with_max_line(SSE_MAX_LINE_BYTES)
    }
}

impl SseDecoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_line(max_line: usize) -> Self {
        Self { buffer: Vec::new(), max_line }
    }

    /// Feeds raw bytes, returning the `data:` payloads of every completed line.
    ///
    /// # Errors
    /// [`LlmError::StreamLineTooLong`] once the unterminated remainder exceeds
    /// the line limit. The buffer is cleared.
    pub fn push(&mut self, bytes: &[u8]) -> Result<Vec<String>, LlmError> {
        self.buffer.extend_from_slice(bytes);
        let mut payloads = Vec::new();
        while let Some(pos) = self.buffer.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            let line = String::from_utf8_lossy(&line);
            let line = line.trim_end_matches(['\n', '\r']);
            if let Some(data) = line.strip_prefix("data:") {
                payloads.push(data.trim_start().to_owned());
            }
        }
        if self.buffer.len() > self.max_line {
            self.buffer.clear();
            return Err(LlmError::StreamLineTooLong { limit: self.max_line });
        }
        Ok(payloads)
    }

    /// Payload of a trailing line that was never newline-terminated.
    pub fn finish(&mut self) -> Option<String> {
        let rest = std::mem::take(&mut self.buffer);
        let rest = String::from_utf8_lossy(&rest);
        rest.trim_end_matches(['\n', '\r'])
            .strip_prefix("data:")
            .map(|data| data.trim_start().to_owned())
    }
}

/// What a single `data:` payload contributes to the stream.
enum Payload {
    Text(String),
    Skip,
    Done,
}

fn parse_payload(data: &str) -> Result<Payload, LlmError> {
    if data == DONE_MARKER {
        return Ok(Payload::Done);
    }
    let chunk: ChatChunk = serde_json::from_str(data).map_err(|e| LlmError::JsonParse {
        context: format!("stream chunk (data: {})", truncate(data, 200)),
        source: e,
    })?;
    let text: String = chunk.choices.into_iter().filter_map(|c| c.delta.content).collect();
    Ok(if text.is_empty() { Payload::Skip } else { Payload::Text(text) })
}

impl LlmClient {
    /// Send a streaming chat completion and yield content deltas as they arrive.
    ///
    /// Dropping the returned stream drops the underlying connection.
    ///
    /// # Errors
    /// Returns an error before streaming if the request fails or the API
    /// answers with a non-success status. Later failures are yielded as
    /// stream items, after which the stream ends.
    pub async fn chat_completion_stream(
        &self,
        request: &ChatRequest,
    ) -> Result<TokenStream, LlmError> {
        let mut request = request.clone();
        request.stream = true;
        let response = self.send(&request).await?;
        let mut bytes = Box::pin(response.bytes_stream());

        let stream = async_stream::stream! {
            let mut decoder = SseDecoder::new();
            'outer: while let Some(chunk) = bytes.next().await {
                let chunk = match chunk {
                    Ok(c) => c,
                    Err(e) => {
                        yield Err(LlmError::HttpRequest(e));
                        break;
                    },
                };
                let payloads = match decoder.push(&chunk) {
                    Ok(p) => p,
                    Err(e) => {
                        yield Err(e);
                        break;
                    },
                };
                for data in payloads {
                    match parse_payload(&data) {
                        Ok(Payload::Text(text)) => yield Ok(text),
                        Ok(Payload::Skip) => {},
                        Ok(Payload::Done) => break 'outer,
                        Err(e) => {
                            yield Err(e);
                            break 'outer;
                        },
                    }
                }
            }
            if let Some(data) = decoder.finish() {
                if let Ok(Payload::Text(text)) = parse_payload(&data) {
                    yield Ok(text);
                }
            }
        };
        Ok(Box::pin(stream))
    }
}
