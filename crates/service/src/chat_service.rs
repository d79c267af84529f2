use std::sync::Arc;

use folio_core::{ChatMessage, LLM_NOT_CONFIGURED, last_message_text};
use folio_llm::{LlmClient, TokenStream};

use crate::{SearchLogger, ServiceError};

/// Streamed guide chat with best-effort search logging.
pub struct ChatService {
    llm: Option<Arc<LlmClient>>,
    search_log: SearchLogger,
}

impl ChatService {
    #[must_use]
    pub fn new(llm: Option<Arc<LlmClient>>, search_log: SearchLogger) -> Self {
        Self { llm, search_log }
    }

    /// Starts a streamed reply. The last message is queued for the search
    /// log before the completion call; its outcome never affects the stream.
    pub async fn stream_chat(&self, messages: &[ChatMessage]) -> Result<TokenStream, ServiceError> {
        if messages.is_empty() {
            return Err(ServiceError::InvalidInput("messages must not be empty".to_owned()));
        }
        if let Some(game_name) = last_message_text(messages) {
            self.search_log.log(game_name);
        }

        let llm =
            self.llm.as_ref().ok_or_else(|| ServiceError::NotConfigured(LLM_NOT_CONFIGURED.to_owned()))?;
        llm.stream_guide_chat(messages).await.map_err(ServiceError::from_completion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FailingStore;
    use folio_storage::InMemoryStorage;
    use futures_util::StreamExt;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sse(pieces: &[&str]) -> ResponseTemplate {
        let mut body = String::new();
        for piece in pieces {
            let chunk = serde_json::json!({ "choices": [{ "delta": { "content": piece } }] });
            body.push_str(&format!("data: {chunk}\n\n"));
        }
        body.push_str("data: [DONE]\n\n");
        ResponseTemplate::new(200).insert_header("content-type", "text/event-stream").set_body_string(body)
    }

    async fn collect(stream: TokenStream) -> String {
        stream.map(|piece| piece.unwrap()).collect::<Vec<_>>().await.concat()
    }

    #[tokio::test]
    async fn streams_and_logs_last_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST")).respond_with(sse(&["## ", "Hades"])).mount(&server).await;

        let store = Arc::new(InMemoryStorage::new());
        let (logger, worker) = SearchLogger::spawn(store.clone());
        let llm = Arc::new(LlmClient::new("key".to_owned(), server.uri()).unwrap());
        let service = ChatService::new(Some(llm), logger);

        let stream = service.stream_chat(&[ChatMessage::user("Hades")]).await.unwrap();
        assert_eq!(collect(stream).await, "## Hades");

        drop(service);
        worker.await.unwrap();
        let logs = store.search_logs().await;
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].game_name, "Hades");
    }

    #[tokio::test]
    async fn failing_search_log_does_not_change_the_stream() {
        let server = MockServer::start().await;
        Mock::given(method("POST")).respond_with(sse(&["## ", "Hades"])).mount(&server).await;
        let llm = Arc::new(LlmClient::new("key".to_owned(), server.uri()).unwrap());

        let failing = Arc::new(FailingStore::default());
        let (logger, worker) = SearchLogger::spawn(failing.clone());
        let service = ChatService::new(Some(llm), logger);

        let stream = service.stream_chat(&[ChatMessage::user("Hades")]).await.unwrap();
        assert_eq!(collect(stream).await, "## Hades");

        drop(service);
        worker.await.unwrap();
        assert_eq!(failing.attempts(), 1);
    }

    #[tokio::test]
    async fn empty_messages_are_invalid() {
        let (logger, _worker) = SearchLogger::spawn(Arc::new(InMemoryStorage::new()));
        let service = ChatService::new(None, logger);
        let err = service.stream_chat(&[]).await.err().unwrap();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn missing_api_key_still_logs_the_search() {
        let store = Arc::new(InMemoryStorage::new());
        let (logger, worker) = SearchLogger::spawn(store.clone());
        let service = ChatService::new(None, logger);

        let err = service.stream_chat(&[ChatMessage::user("Celeste")]).await.err().unwrap();
        assert!(matches!(err, ServiceError::NotConfigured(_)));

        drop(service);
        worker.await.unwrap();
        assert_eq!(store.search_logs().await.len(), 1);
    }
}
