use anyhow::{bail, Context, Result};
use std::path::Path;
use tracing::info;

use crate::config::WhisperConfig;
use crate::formatter::TranscriptFormatter;

pub mod providers;

pub use providers::{mime_type_for_extension, OpenAIProvider, TranscriptionProvider};

pub struct Transcriber {
    provider: Box<dyn TranscriptionProvider>,
    language: String,
}

impl Transcriber {
    pub fn with_provider(provider_name: &str, config: ProviderConfig) -> Result<Self> {
        let language = config.language.clone().unwrap_or_else(|| "en".to_string());

        let provider: Box<dyn TranscriptionProvider> = match provider_name {
            "openai-api" => {
                let api_key = config
                    .api_key
                    .context("api_key is required for OpenAI API provider")?;

                let model = config.model.unwrap_or_else(|| "whisper-1".to_string());
                Box::new(OpenAIProvider::new(api_key, config.api_endpoint, model)?)
            }
            _ => bail!(
                "Unknown transcription provider '{}'. Supported providers: openai-api",
                provider_name
            ),
        };

        info!("Using {} for transcription", provider.name());

        Ok(Self { provider, language })
    }

    pub async fn transcribe(&self, audio_path: &Path) -> Result<String> {
        info!(
            "Transcribing audio file: {:?} with {}",
            audio_path,
            self.provider.name()
        );
        self.provider.transcribe(audio_path, &self.language).await
    }

    pub fn formatter(&self) -> Result<Box<dyn TranscriptFormatter>> {
        self.provider.formatter()
    }
}

#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub model: Option<String>,
    pub language: Option<String>,
    pub api_endpoint: Option<String>,
    pub api_key: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: None,
            language: Some("en".to_string()),
            api_endpoint: None,
            api_key: None,
        }
    }
}

impl From<&WhisperConfig> for ProviderConfig {
    fn from(whisper: &WhisperConfig) -> Self {
        Self {
            model: whisper.model.clone(),
            language: whisper.language.clone(),
            api_endpoint: whisper.api_endpoint.clone(),
            api_key: whisper.api_key.clone(),
        }
    }
}
