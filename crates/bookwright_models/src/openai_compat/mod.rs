//! Shared client for providers exposing the OpenAI chat completions API.

mod client;
mod dto;

pub use client::{OpenAICompatibleClient, classify_status};
pub use dto::{
    ChatChoice, ChatCompletionRequest, ChatCompletionRequestBuilder, ChatCompletionResponse,
    ChatMessage, ChatRole, ChoiceMessage,
};
