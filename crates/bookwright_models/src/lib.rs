//! LLM provider integrations for Bookwright.
//!
//! Generators implement [`bookwright_interface::ContentGenerator`] on top of
//! the shared [`OpenAICompatibleClient`]. Prompt wording lives in one place
//! so every provider asks for the same thing.
//!
//! # Example
//!
//! ```rust,ignore
//! use bookwright_models::{GeneratorSettings, GroqGenerator};
//!
//! let generator = GroqGenerator::new(GeneratorSettings::default())?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod groq;
mod openai_compat;
mod prompts;
mod settings;

pub use groq::GroqGenerator;
pub use openai_compat::{
    ChatChoice, ChatCompletionRequest, ChatCompletionRequestBuilder, ChatCompletionResponse,
    ChatMessage, ChatRole, ChoiceMessage, OpenAICompatibleClient, classify_status,
};
pub use prompts::{chapter_prompt, outline_prompt, summary_prompt};
pub use settings::{
    DEFAULT_MODEL, GROQ_ENDPOINT, GeneratorSettings, RetryPolicy, SamplingSettings,
};
