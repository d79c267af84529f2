use folio_core::{ChatMessage, Role};

use crate::ai_types::ChatRequest;
use crate::client::LlmClient;
use crate::error::LlmError;
use crate::prompts::CHAT_SYSTEM_PROMPT;
use crate::stream::TokenStream;

impl LlmClient {
    /// Stream a guide-assistant reply to `messages`.
    ///
    /// The chat system prompt replaces any system messages supplied by the caller.
    ///
    /// # Errors
    /// Fails before any token is produced if the request cannot be sent or
    /// the API answers with a non-success status.
    pub async fn stream_guide_chat(
        &self,
        messages: &[ChatMessage],
    ) -> Result<TokenStream, LlmError> {
        let mut conversation = Vec::with_capacity(messages.len() + 1);
        conversation.push(ChatMessage::system(CHAT_SYSTEM_PROMPT));
        conversation.extend(messages.iter().filter(|m| m.role != Role::System).cloned());

        let request = ChatRequest {
            model: self.model.clone(),
            messages: conversation,
            temperature: None,
            max_tokens: None,
            stream: true,
        };
        self.chat_completion_stream(&request).await
    }
}
