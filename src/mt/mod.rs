/// Machine Translation Module
///
/// This module provides the translation side of the pipeline: a generic
/// provider trait, the Google Translate implementation, a deterministic mock
/// for offline use, and the retry schedule wrapped around every batch.
///
/// # Overview
///
/// 1. **Translator trait** - Generic batch interface over MT providers
/// 2. **Google Translate** - Real provider against the v2 REST API
/// 3. **Mock translator** - Deterministic provider for tests and dry runs
/// 4. **Retry policy** - Geometric backoff applied per batch
///
/// # Example
///
/// ```ignore
/// use loca_mt::mt::{GoogleTranslate, RetryPolicy, translate_with_retry};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let provider = GoogleTranslate::from_env()?;
///     let policy = RetryPolicy::default();
///
///     let phrases = vec!["A toast to the happy couple!".to_string()];
///     let translated = translate_with_retry(&provider, &policy, "fr", &phrases).await?;
///
///     println!("{:?}", translated);
///     Ok(())
/// }
/// ```
pub mod error;
pub mod google;
pub mod mock;
pub mod retry;
pub mod translator;

pub use error::{MtError, MtResult};
pub use google::GoogleTranslate;
pub use mock::{MockMode, MockTranslator};
pub use retry::{RetryPolicy, translate_with_retry};
pub use translator::{Translator, validate_language_code};
