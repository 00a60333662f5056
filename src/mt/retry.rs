//! Retry policy for translation requests.
//!
//! Provider calls fail transiently under rate limiting, so each batch is
//! retried as a unit with a growing delay between attempts. The schedule is
//! a pure value; the only side effect is the sleep between attempts.

use std::time::Duration;

use crate::mt::error::{MtError, MtResult};
use crate::mt::translator::Translator;

/// Geometric backoff schedule: up to `max_attempts` tries, multiplying the
/// delay after each failure. No jitter, no cap.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_delay: Duration,
    pub multiplier: f64,
}

impl Default for RetryPolicy {
    /// Ten attempts starting at 100ms, growing by half each time. The last
    /// wait is under four seconds, so a stuck provider holds a line for
    /// about ten seconds total.
    fn default() -> Self {
        RetryPolicy {
            max_attempts: 10,
            initial_delay: Duration::from_millis(100),
            multiplier: 1.5,
        }
    }
}

impl RetryPolicy {
    /// A policy that never waits between attempts, for tests.
    pub fn immediate(max_attempts: u32) -> Self {
        RetryPolicy {
            max_attempts,
            initial_delay: Duration::ZERO,
            multiplier: 1.0,
        }
    }

    /// Delay before the retry that follows the given failed attempt
    /// (0-indexed).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        Duration::from_secs_f64(
            self.initial_delay.as_secs_f64() * self.multiplier.powi(attempt as i32),
        )
    }
}

/// Run one batch through the translator, retrying the whole batch as a unit.
///
/// A batch succeeds only when the provider returns exactly one translation
/// per input phrase; a short or long answer counts as a failed attempt. When
/// every attempt fails the last error is surfaced inside
/// [`MtError::ProviderExhausted`] and the caller decides what to do with the
/// untranslated line.
pub async fn translate_with_retry(
    translator: &dyn Translator,
    policy: &RetryPolicy,
    target: &str,
    phrases: &[String],
) -> MtResult<Vec<String>> {
    let mut last_error = None;

    for attempt in 0..policy.max_attempts {
        match translator.translate(target, phrases).await {
            Ok(translated) if translated.len() == phrases.len() => return Ok(translated),
            Ok(translated) => {
                last_error = Some(MtError::TranslationError(format!(
                    "Provider returned {} translations for {} phrases",
                    translated.len(),
                    phrases.len()
                )));
            }
            Err(err) => last_error = Some(err),
        }
        if attempt + 1 < policy.max_attempts {
            tokio::time::sleep(policy.delay_for(attempt)).await;
        }
    }

    Err(MtError::ProviderExhausted {
        attempts: policy.max_attempts,
        last: Box::new(last_error.unwrap_or_else(|| {
            MtError::TranslationError("No attempts were made".to_string())
        })),
    })
}
