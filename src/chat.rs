//! Chat-model collaborator interface
//!
//! Evaluators can hold a chat model for LLM-judged metrics computed by
//! surrounding code. The agreement metrics in this crate never call it;
//! timeout and retry policy for real models is the caller's concern.

use crate::Result;

/// Trait for chat-model collaborators
pub trait ChatModel: Send + Sync {
    /// Produce a completion for the given prompt
    fn complete(&self, prompt: &str) -> Result<String>;

    /// Get model identifier
    fn model_id(&self) -> &str;
}

/// Mock chat model for testing (returns a canned reply)
#[derive(Debug, Clone)]
pub struct MockChatModel {
    reply: String,
    model_id: String,
}

impl MockChatModel {
    /// Create a mock that answers every prompt with `reply`
    #[must_use]
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            model_id: "mock-chat-model".to_string(),
        }
    }

    /// Set the model ID
    #[must_use]
    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }
}

impl ChatModel for MockChatModel {
    fn complete(&self, _prompt: &str) -> Result<String> {
        Ok(self.reply.clone())
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_returns_canned_reply() {
        let model = MockChatModel::new("yes");
        assert_eq!(model.complete("is this relevant?").unwrap(), "yes");
    }

    #[test]
    fn test_mock_model_id() {
        let model = MockChatModel::new("ok").with_model_id("judge-v1");
        assert_eq!(model.model_id(), "judge-v1");
    }
}
