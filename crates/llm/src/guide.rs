use folio_core::{ChatMessage, GUIDE_MAX_TOKENS, GUIDE_TEMPERATURE};

use crate::ai_types::ChatRequest;
use crate::client::LlmClient;
use crate::error::LlmError;
use crate::prompts::{guide_system_prompt, guide_user_prompt};

impl LlmClient {
    /// Generate a Markdown guide for `game_name`.
    ///
    /// # Errors
    /// Propagates [`LlmError`] from the completion call; blank output is
    /// reported as [`LlmError::EmptyResponse`].
    pub async fn generate_guide(&self, game_name: &str) -> Result<String, LlmError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(guide_system_prompt(game_name)),
                ChatMessage::user(guide_user_prompt(game_name)),
            ],
            temperature: Some(GUIDE_TEMPERATURE),
            max_tokens: Some(GUIDE_MAX_TOKENS),
            stream: false,
        };
        tracing::debug!(game_name, model = %self.model, "generating guide");
        self.chat_completion(&request).await
    }
}
