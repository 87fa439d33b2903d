//! Wire types for OpenAI-compatible chat completions.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Chat message role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// System message
    System,
    /// User message
    User,
    /// Assistant message
    Assistant,
}

/// One message in a chat completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ChatMessage {
    /// Message role
    role: ChatRole,
    /// Message content
    content: String,
}

impl ChatMessage {
    /// A user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// Chat completion request body.
#[derive(Debug, Clone, PartialEq, Serialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ChatCompletionRequest {
    /// Model identifier
    model: String,
    /// Conversation so far
    messages: Vec<ChatMessage>,
    /// Sampling temperature
    temperature: f32,
    /// Completion token cap
    max_tokens: u32,
}

impl ChatCompletionRequest {
    /// Creates a new builder for `ChatCompletionRequest`.
    pub fn builder() -> ChatCompletionRequestBuilder {
        ChatCompletionRequestBuilder::default()
    }
}

/// Assistant message inside a completion choice.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct ChoiceMessage {
    /// Generated text; providers may send `null`
    #[serde(default)]
    content: Option<String>,
}

/// One completion alternative.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct ChatChoice {
    /// Index among the returned choices
    #[serde(default)]
    index: u32,
    /// Generated message
    message: ChoiceMessage,
    /// Why generation stopped
    #[serde(default)]
    finish_reason: Option<String>,
}

/// Chat completion response body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct ChatCompletionResponse {
    /// Returned alternatives
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

impl ChatCompletionResponse {
    /// Content of the first choice, if it holds any non-blank text.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookwright_models::ChatCompletionResponse;
    ///
    /// let body = r#"{"choices":[{"index":0,"message":{"content":"Hi"}}]}"#;
    /// let response: ChatCompletionResponse = serde_json::from_str(body).unwrap();
    /// assert_eq!(response.first_text(), Some("Hi"));
    /// ```
    pub fn first_text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .filter(|text| !text.trim().is_empty())
    }
}
