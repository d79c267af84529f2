//! Line framing for the streamed chat protocol consumed by the web chat UI.
//!
//! Each line is `<type>:<json>\n`. Text deltas use type `0`, errors `3`,
//! and the finish marker `d`.

use std::convert::Infallible;

use axum::body::Body;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use futures_util::StreamExt;

use folio_llm::TokenStream;

pub const PROTOCOL_HEADER: &str = "x-vercel-ai-data-stream";
const CONTENT_TYPE: &str = "text/plain; charset=utf-8";
const STREAM_ERROR_MESSAGE: &str = "An error occurred.";

pub fn text_part(text: &str) -> String {
    format!("0:{}\n", serde_json::Value::String(text.to_owned()))
}

pub fn error_part(message: &str) -> String {
    format!("3:{}\n", serde_json::Value::String(message.to_owned()))
}

pub fn finish_part() -> String {
    format!("d:{}\n", serde_json::json!({ "finishReason": "stop" }))
}

/// Wraps completion deltas into a streaming response, flushing each delta
/// as soon as it arrives. A failure mid-stream ends the body with an error
/// line instead of the finish marker.
pub fn into_response(mut tokens: TokenStream) -> Response {
    let body = async_stream::stream! {
        let mut failed = false;
        while let Some(piece) = tokens.next().await {
            match piece {
                Ok(text) => yield Ok::<_, Infallible>(text_part(&text)),
                Err(e) => {
                    tracing::error!(error = %e, "chat stream failed");
                    yield Ok(error_part(STREAM_ERROR_MESSAGE));
                    failed = true;
                    break;
                },
            }
        }
        if !failed {
            yield Ok(finish_part());
        }
    };

    (
        [(header::CONTENT_TYPE, CONTENT_TYPE), (header::HeaderName::from_static(PROTOCOL_HEADER), "v1")],
        Body::from_stream(body),
    )
        .into_response()
}
