//! Mock Machine Translator for testing
//!
//! This module provides a deterministic, API-free translator for testing
//! the translation pipeline without requiring API keys or network access.
//!
//! # Example
//!
//! ```ignore
//! use loca_mt::mt::{Translator, MockTranslator, MockMode};
//!
//! #[tokio::test]
//! async fn test_translation() {
//!     let mock = MockTranslator::new(MockMode::Suffix);
//!     let results = mock.translate("fr", &["hello".to_string()]).await.unwrap();
//!     assert_eq!(results, vec!["hello_fr"]);
//! }
//! ```

use crate::mt::error::MtResult;
use crate::mt::translator::Translator;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

/// Mock translation modes for testing different scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Append the target code: "hello" → "hello_fr"
    /// Makes it obvious in output files which lines were touched
    Suffix,

    /// Use predefined mappings for realistic translations
    /// (text, target) → translation
    Mappings(HashMap<(String, String), String>),

    /// Wrap each phrase in `&#39;` entities, simulating providers that
    /// return HTML-escaped text
    Quoted,

    /// Simulate API errors
    Error(String),

    /// No-op: return input unchanged
    NoOp,
}

/// Mock translator that simulates various translation scenarios
///
/// Useful for testing the pipeline without external API dependencies.
/// Each mode simulates different provider behaviors.
#[derive(Debug, Clone)]
pub struct MockTranslator {
    mode: MockMode,
    /// Optional simulated network delay (in milliseconds)
    delay_ms: u64,
}

impl MockTranslator {
    /// Create a new MockTranslator with the given mode
    pub fn new(mode: MockMode) -> Self {
        Self { mode, delay_ms: 0 }
    }

    /// Create a MockTranslator with simulated network delay
    ///
    /// # Arguments
    ///
    /// * `mode` - The translation mode
    /// * `delay_ms` - Simulated delay in milliseconds, applied per batch
    pub fn with_delay(mode: MockMode, delay_ms: u64) -> Self {
        Self { mode, delay_ms }
    }

    /// Internal helper to apply the simulated delay
    async fn apply_delay(&self) {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }

    /// Apply translation logic based on the mode
    fn apply_translation(&self, text: &str, target: &str) -> MtResult<String> {
        use crate::mt::error::MtError;

        match &self.mode {
            MockMode::Suffix => Ok(format!("{}_{}", text, target)),
            MockMode::Mappings(map) => {
                // Look up in predefined mappings
                let key = (text.to_string(), target.to_string());
                Ok(map
                    .get(&key)
                    .cloned()
                    .unwrap_or_else(|| format!("{}_{}", text, target)))
            }
            MockMode::Quoted => Ok(format!("&#39;{}&#39;", text)),
            MockMode::Error(msg) => Err(MtError::TranslationError(msg.clone())),
            MockMode::NoOp => Ok(text.to_string()),
        }
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(&self, target: &str, phrases: &[String]) -> MtResult<Vec<String>> {
        // Apply simulated delay (per batch, not per string)
        self.apply_delay().await;

        let mut results = Vec::with_capacity(phrases.len());
        for phrase in phrases {
            results.push(self.apply_translation(phrase, target)?);
        }
        Ok(results)
    }

    fn provider_name(&self) -> &str {
        "Mock Translator"
    }
}
