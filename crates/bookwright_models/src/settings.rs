//! Sampling and transport settings for hosted generators.

use serde::{Deserialize, Serialize};

/// Default chat completions endpoint for Groq.
pub const GROQ_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Default model used for every generation call.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Temperature and output cap for one kind of call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplingSettings {
    /// Sampling temperature
    pub temperature: f32,
    /// Maximum number of completion tokens
    pub max_tokens: u32,
}

impl SamplingSettings {
    /// Create sampling settings.
    pub const fn new(temperature: f32, max_tokens: u32) -> Self {
        Self {
            temperature,
            max_tokens,
        }
    }
}

/// Exponential backoff applied to transient provider errors.
///
/// # Examples
///
/// ```
/// use bookwright_models::RetryPolicy;
///
/// let policy = RetryPolicy::default();
/// assert_eq!(policy.max_retries, 3);
/// assert!(RetryPolicy::disabled().is_disabled());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Attempts after the first failure; zero disables retry
    pub max_retries: usize,
    /// First backoff delay in milliseconds
    pub initial_backoff_ms: u64,
    /// Upper bound on any single delay, in seconds
    pub max_delay_secs: u64,
}

impl RetryPolicy {
    /// A policy that never retries.
    pub const fn disabled() -> Self {
        Self {
            max_retries: 0,
            initial_backoff_ms: 0,
            max_delay_secs: 0,
        }
    }

    /// Whether failed calls are returned immediately.
    pub fn is_disabled(&self) -> bool {
        self.max_retries == 0
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff_ms: 2000,
            max_delay_secs: 60,
        }
    }
}

/// Everything needed to build a hosted generator.
///
/// Deserializes from the `[generator]` configuration table; every field
/// has a default so a partial table is enough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Model identifier sent with every request
    pub model: String,
    /// Chat completions URL
    pub endpoint: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Outline drafting
    pub outline: SamplingSettings,
    /// Chapter drafting
    pub chapter: SamplingSettings,
    /// Chapter summarization
    pub summary: SamplingSettings,
    /// Backoff for rate limits and server errors
    pub retry: RetryPolicy,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            endpoint: GROQ_ENDPOINT.to_string(),
            timeout_secs: 120,
            outline: SamplingSettings::new(0.4, 1024),
            chapter: SamplingSettings::new(0.5, 2000),
            summary: SamplingSettings::new(0.3, 400),
            retry: RetryPolicy::default(),
        }
    }
}
