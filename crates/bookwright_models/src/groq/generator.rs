//! Groq-backed content generator.

use crate::{
    GeneratorSettings, OpenAICompatibleClient, chapter_prompt, outline_prompt, summary_prompt,
};
use async_trait::async_trait;
use bookwright_core::{ChapterRequest, OutlineRequest};
use bookwright_error::{BookwrightResult, ConfigError};
use bookwright_interface::ContentGenerator;
use std::time::Duration;
use tracing::{debug, instrument};

/// Drafts outlines, chapters and summaries with a Groq-hosted model.
#[derive(Debug, Clone)]
pub struct GroqGenerator {
    inner: OpenAICompatibleClient,
    settings: GeneratorSettings,
}

impl GroqGenerator {
    /// Creates a new Groq generator.
    ///
    /// Reads API token from `GROQ_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns error if API token is not set.
    #[instrument(skip_all, fields(model = %settings.model))]
    pub fn new(settings: GeneratorSettings) -> BookwrightResult<Self> {
        let api_key = std::env::var("GROQ_API_KEY")
            .map_err(|e| ConfigError::new(format!("GROQ_API_KEY not set: {}", e)))?;

        Self::with_api_key(api_key, settings)
    }

    /// Creates a new Groq generator with explicit API key.
    ///
    /// # Errors
    ///
    /// Returns error if the key is blank or the client cannot be initialized.
    #[instrument(skip(api_key, settings), fields(model = %settings.model))]
    pub fn with_api_key(api_key: String, settings: GeneratorSettings) -> BookwrightResult<Self> {
        if api_key.trim().is_empty() {
            return Err(ConfigError::new("GROQ_API_KEY is empty").into());
        }

        let inner = OpenAICompatibleClient::new(
            api_key,
            settings.model.clone(),
            settings.endpoint.clone(),
            "groq",
            Duration::from_secs(settings.timeout_secs),
        )?
        .with_retry(settings.retry);

        Ok(Self { inner, settings })
    }

    /// Model identifier sent with every request.
    pub fn model_name(&self) -> &str {
        self.inner.model_name()
    }
}

#[async_trait]
impl ContentGenerator for GroqGenerator {
    #[instrument(skip(self, request), fields(provider = "groq", title = %request.title()))]
    async fn generate_outline(&self, request: &OutlineRequest) -> BookwrightResult<String> {
        let prompt = outline_prompt(request);
        let outline = self.inner.complete(&prompt, &self.settings.outline).await?;
        debug!(chars = outline.len(), "Outline generated");
        Ok(outline)
    }

    #[instrument(
        skip(self, request),
        fields(provider = "groq", chapter = *request.chapter_number(), rewrite = request.notes().is_some())
    )]
    async fn generate_chapter(&self, request: &ChapterRequest) -> BookwrightResult<String> {
        let prompt = chapter_prompt(request);
        let text = self.inner.complete(&prompt, &self.settings.chapter).await?;
        debug!(chars = text.len(), "Chapter generated");
        Ok(text)
    }

    #[instrument(skip(self, chapter_text), fields(provider = "groq", chars = chapter_text.len()))]
    async fn summarize_chapter(&self, chapter_text: &str) -> BookwrightResult<String> {
        let prompt = summary_prompt(chapter_text);
        Ok(self.inner.complete(&prompt, &self.settings.summary).await?)
    }

    fn provider_name(&self) -> &'static str {
        self.inner.provider_name()
    }
}
