//! Groq LPU inference, driven through the OpenAI-compatible client.

mod generator;

pub use generator::GroqGenerator;
