use std::sync::Arc;

use chrono::Utc;
use folio_core::{GuideOutcome, GuideUpsert, LLM_NOT_CONFIGURED, normalize_game_name};
use folio_llm::LlmClient;
use folio_storage::GuideStore;

use crate::ServiceError;

/// Cache-or-generate for game guides.
pub struct GuideService {
    store: Arc<dyn GuideStore>,
    llm: Option<Arc<LlmClient>>,
}

impl GuideService {
    /// `llm` is `None` when no API key is configured; cached guides are still served.
    #[must_use]
    pub fn new(store: Arc<dyn GuideStore>, llm: Option<Arc<LlmClient>>) -> Self {
        Self { store, llm }
    }

    /// Returns the cached guide for `raw_name`, or generates, stores and returns a new one.
    ///
    /// Lookup and store failures are logged and do not fail the request.
    /// Nothing is stored when generation fails.
    pub async fn get_or_generate(&self, raw_name: &str) -> Result<GuideOutcome, ServiceError> {
        let game_name = normalize_game_name(raw_name)
            .ok_or_else(|| ServiceError::InvalidInput("gameName must not be empty".to_owned()))?;

        match self.store.find_guide(game_name).await {
            Ok(Some(record)) if !record.content.trim().is_empty() => {
                tracing::info!(game_name, cached = true, "serving cached guide");
                return Ok(GuideOutcome::from_cache(record));
            },
            Ok(_) => {},
            Err(e) => {
                tracing::warn!(game_name, error = %e, "guide cache lookup failed, generating");
            },
        }

        let llm =
            self.llm.as_ref().ok_or_else(|| ServiceError::NotConfigured(LLM_NOT_CONFIGURED.to_owned()))?;
        let content = llm.generate_guide(game_name).await.map_err(ServiceError::from_completion)?;

        let created_at = Utc::now();
        let upsert = GuideUpsert { game_name: game_name.to_owned(), content, created_at };
        if let Err(e) = self.store.upsert_guide(&upsert).await {
            tracing::error!(game_name, error = %e, "failed to cache generated guide");
        }
        tracing::info!(game_name, cached = false, "generated guide");

        Ok(GuideOutcome {
            content: upsert.content,
            cached: false,
            game_name: upsert.game_name,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{CountingStore, FailingStore};
    use folio_storage::InMemoryStorage;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn completion(content: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "choices": [{ "message": { "role": "assistant", "content": content } }]
        }))
    }

    fn llm_for(server: &MockServer) -> Option<Arc<LlmClient>> {
        Some(Arc::new(LlmClient::new("key".to_owned(), server.uri()).unwrap()))
    }

    #[tokio::test]
    async fn blank_name_is_invalid_input() {
        let service = GuideService::new(Arc::new(InMemoryStorage::new()), None);
        for name in ["", "   ", "\n\t"] {
            let err = service.get_or_generate(name).await.unwrap_err();
            assert!(matches!(err, ServiceError::InvalidInput(_)), "{name:?}");
        }
    }

    #[tokio::test]
    async fn cached_guide_skips_generation_for_any_case() {
        let server = MockServer::start().await;
        Mock::given(method("POST")).respond_with(completion("fresh")).expect(0).mount(&server).await;

        let store = Arc::new(InMemoryStorage::new());
        store
            .upsert_guide(&GuideUpsert {
                game_name: "Elden Ring".to_owned(),
                content: "## Cached".to_owned(),
                created_at: Utc::now(),
            })
            .await
            .unwrap();
        let service = GuideService::new(store, llm_for(&server));

        let outcome = service.get_or_generate("  eLDEN rING ").await.unwrap();
        assert!(outcome.cached);
        assert_eq!(outcome.content, "## Cached");
        assert_eq!(outcome.game_name, "Elden Ring");
    }

    #[tokio::test]
    async fn miss_generates_once_then_serves_cache() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(completion("## Guide"))
            .expect(1)
            .mount(&server)
            .await;

        let store = Arc::new(CountingStore::default());
        let service = GuideService::new(store.clone(), llm_for(&server));

        let first = service.get_or_generate(" Hollow Knight ").await.unwrap();
        assert!(!first.cached);
        assert_eq!(first.game_name, "Hollow Knight");
        assert_eq!(first.content, "## Guide");
        assert_eq!(store.upserts(), 1);
        assert_eq!(store.upserted_names(), vec!["Hollow Knight"]);

        let second = service.get_or_generate("Hollow Knight").await.unwrap();
        assert!(second.cached);
        assert_eq!(second.content, "## Guide");
        assert_eq!(store.upserts(), 1);
    }

    #[tokio::test]
    async fn miss_without_api_key_is_not_configured() {
        let service = GuideService::new(Arc::new(InMemoryStorage::new()), None);
        let err = service.get_or_generate("Hades").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotConfigured(_)));
    }

    #[tokio::test]
    async fn empty_generation_persists_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST")).respond_with(completion("   ")).mount(&server).await;

        let store = Arc::new(CountingStore::default());
        let service = GuideService::new(store.clone(), llm_for(&server));

        let err = service.get_or_generate("Hades").await.unwrap_err();
        assert!(matches!(err, ServiceError::GenerationFailed));
        assert_eq!(store.upserts(), 0);
    }

    #[tokio::test]
    async fn upstream_status_is_propagated_and_nothing_persisted() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(402).set_body_string("Insufficient Balance"))
            .mount(&server)
            .await;

        let store = Arc::new(CountingStore::default());
        let service = GuideService::new(store.clone(), llm_for(&server));

        match service.get_or_generate("Hades").await.unwrap_err() {
            ServiceError::Upstream { status, message } => {
                assert_eq!(status, 402);
                assert!(message.contains("Insufficient Balance"));
            },
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(store.upserts(), 0);
    }

    #[tokio::test]
    async fn store_failures_do_not_fail_the_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST")).respond_with(completion("## Guide")).mount(&server).await;

        let store = Arc::new(FailingStore::default());
        let service = GuideService::new(store.clone(), llm_for(&server));

        let outcome = service.get_or_generate("Hades").await.unwrap();
        assert!(!outcome.cached);
        assert_eq!(outcome.content, "## Guide");
        assert_eq!(store.attempts(), 2, "one lookup and one upsert");
    }
}
