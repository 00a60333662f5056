//! Google Translate API provider for machine translation
//!
//! This module integrates with Google Translate API v2 to provide real
//! machine translation capabilities.
//!
//! # Authentication
//!
//! The provider loads the API key from the `GOOGLE_TRANSLATE_API_KEY`
//! environment variable. Obtain a key from:
//! https://console.cloud.google.com/
//!
//! # Example
//!
//! ```ignore
//! use loca_mt::mt::{Translator, GoogleTranslate};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load from environment
//!     let provider = GoogleTranslate::from_env()?;
//!
//!     let phrases = vec!["Hello".to_string(), "Goodbye".to_string()];
//!     let results = provider.translate("fr", &phrases).await?;
//!     println!("{:?}", results);
//!
//!     Ok(())
//! }
//! ```

use crate::mt::error::{MtError, MtResult};
use crate::mt::translator::{Translator, validate_language_code};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

/// Google Translate API v2 provider
///
/// Communicates with Google's translation API. The source language is left
/// for the API to detect; only the target is sent. Large batches are chunked
/// transparently.
#[derive(Clone)]
pub struct GoogleTranslate {
    /// API key for authentication
    api_key: String,
    /// HTTP client for async requests
    client: reqwest::Client,
    /// Base URL for Google Translate API
    base_url: String,
}

/// Response shape of the v2 endpoint: `{"data": {"translations": [...]}}`.
#[derive(Debug, Deserialize)]
struct TranslateResponse {
    data: TranslationList,
}

#[derive(Debug, Deserialize)]
struct TranslationList {
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
struct Translation {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

impl GoogleTranslate {
    /// Maximum number of texts per API request
    /// Google Translate v2 API accepts up to 128 texts per request
    const MAX_BATCH_SIZE: usize = 128;

    /// Maximum characters per string (30KB per Google Translate API limits)
    const MAX_CHARS_PER_STRING: usize = 30_000;

    /// Create a new GoogleTranslate provider with an explicit API key
    ///
    /// # Arguments
    ///
    /// * `api_key` - Google Translate API key
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` - New provider instance
    /// * `Err(MtError)` - If API key is empty or HTTP client creation fails
    pub fn new(api_key: String) -> MtResult<Self> {
        if api_key.trim().is_empty() {
            return Err(MtError::ConfigError("API key cannot be empty".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| MtError::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            client,
            base_url: "https://translation.googleapis.com/language/translate/v2".to_string(),
        })
    }

    /// Create a GoogleTranslate provider from the `GOOGLE_TRANSLATE_API_KEY`
    /// environment variable
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` - New provider instance
    /// * `Err(MtError)` - If environment variable is not set or creation fails
    pub fn from_env() -> MtResult<Self> {
        let api_key = std::env::var("GOOGLE_TRANSLATE_API_KEY").map_err(|_| {
            MtError::ConfigError(
                "GOOGLE_TRANSLATE_API_KEY environment variable not set".to_string(),
            )
        })?;

        Self::new(api_key)
    }

    /// Chunk a batch of texts into API-safe sizes
    ///
    /// Google Translate API has a limit of 128 texts per request.
    /// This method chunks large batches transparently.
    fn chunk_batch(texts: &[String]) -> Vec<&[String]> {
        texts.chunks(Self::MAX_BATCH_SIZE).collect()
    }

    /// Translate a single chunk of texts via the API
    ///
    /// # Arguments
    ///
    /// * `target` - Target language code
    /// * `texts` - Texts to translate (should be ≤ MAX_BATCH_SIZE)
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<String>)` - Translated texts
    /// * `Err(MtError)` - If API call fails
    async fn translate_chunk(&self, target: &str, texts: &[String]) -> MtResult<Vec<String>> {
        // Build request URL with API key
        let url = format!("{}?key={}", self.base_url, self.api_key);

        // Source language is omitted so the API detects it
        let body = json!({
            "q": texts,
            "target": target,
            "format": "text"
        });

        // Send POST request
        let response = self.client.post(&url).json(&body).send().await?;

        // Check HTTP status
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(if status.is_client_error() {
                MtError::ConfigError(format!("API client error ({}): {}", status, error_text))
            } else {
                MtError::TranslationError(format!("API server error ({}): {}", status, error_text))
            });
        }

        // Parse response JSON
        let parsed: TranslateResponse = response.json().await.map_err(|e| {
            MtError::TranslationError(format!("Failed to parse API response: {}", e))
        })?;

        Ok(parsed
            .data
            .translations
            .into_iter()
            .map(|t| t.translated_text)
            .collect())
    }
}

impl std::fmt::Debug for GoogleTranslate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleTranslate")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl Translator for GoogleTranslate {
    async fn translate(&self, target: &str, phrases: &[String]) -> MtResult<Vec<String>> {
        validate_language_code(target)?;

        if phrases.is_empty() {
            return Ok(Vec::new());
        }

        // Validate each phrase against the per-string limit
        for (i, phrase) in phrases.iter().enumerate() {
            if phrase.len() > Self::MAX_CHARS_PER_STRING {
                return Err(MtError::TranslationError(format!(
                    "Text at index {} exceeds maximum length of {} characters",
                    i,
                    Self::MAX_CHARS_PER_STRING
                )));
            }
        }

        // Chunk texts for API limits, process sequentially
        let mut all_results = Vec::with_capacity(phrases.len());
        for chunk in Self::chunk_batch(phrases) {
            let chunk_results = self.translate_chunk(target, chunk).await?;
            all_results.extend(chunk_results);
        }

        // The API answers one translation per input; anything else is unusable
        if all_results.len() != phrases.len() {
            return Err(MtError::TranslationError(format!(
                "API returned {} translations for {} inputs",
                all_results.len(),
                phrases.len()
            )));
        }

        Ok(all_results)
    }

    fn provider_name(&self) -> &str {
        "Google Translate"
    }
}
