//! Machine Translation trait and utilities
//!
//! This module defines the `Translator` trait for provider abstraction,
//! enabling support for different MT backends (Google Translate, mock, etc.)
//! without coupling the batch driver to any specific implementation.
//!
//! # Example
//!
//! ```ignore
//! use loca_mt::mt::{Translator, GoogleTranslate};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = GoogleTranslate::from_env()?;
//!
//!     let phrases = vec!["Hello".to_string(), "Goodbye".to_string()];
//!     let results = provider.translate("fr", &phrases).await?;
//!     println!("{:?}", results);
//!
//!     Ok(())
//! }
//! ```

use crate::mt::error::MtResult;
use async_trait::async_trait;

/// Generic trait for machine translation providers
///
/// Implementations of this trait handle the actual translation work, whether
/// through an API (Google Translate) or deterministic logic (Mock). The
/// source language is never given; providers detect it from the text, which
/// lets the same input file be translated to any target.
///
/// All methods are async to support I/O-bound operations like network requests.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate a batch of phrases into the target language
    ///
    /// # Arguments
    ///
    /// * `target` - Target language code (e.g., "fr", "zh-CN")
    /// * `phrases` - The phrases to translate, usually the sub-phrases of one
    ///   localisation value
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<String>)` - Translated phrases in the same order as input
    /// * `Err(MtError)` - If translation fails
    ///
    /// # Guarantees
    ///
    /// - Output order matches input order
    /// - Output length equals input length
    /// - Each translation is independent
    async fn translate(&self, target: &str, phrases: &[String]) -> MtResult<Vec<String>>;

    /// Get the name of this translation provider
    ///
    /// Used for logging and reports to identify which provider handled a
    /// translation.
    fn provider_name(&self) -> &str;
}

/// Validate that a language code is in acceptable format
///
/// Checks that the code contains only alphanumeric characters, hyphens, and
/// underscores (following ISO 639 conventions). Region suffixes like the one
/// in `zh-CN` are kept; the provider needs them.
pub fn validate_language_code(code: &str) -> MtResult<()> {
    if code.is_empty() {
        return Err(crate::mt::error::MtError::InvalidLanguage(
            "Language code is empty".to_string(),
        ));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(crate::mt::error::MtError::InvalidLanguage(format!(
            "Invalid characters in language code: {}",
            code
        )));
    }

    Ok(())
}
