//! Batch machine translation for Paradox-style localisation files.
//!
//! Localisation files pair keys with quoted values, one per line, under a
//! language tag:
//!
//! ```text
//! l_english:
//!  wedding_greeting:0 "A toast to the happy couple!"
//!  wedding_toast:0 "To $GUEST$, our honoured friend!"
//! ```
//!
//! The crate reads such files, decides line by line whether the quoted value
//! is safe to machine translate, sends safe values through a provider with
//! retries, and writes a sibling file under the target language's name.
//! Values that embed `$KEY$` references or formatting the reconstructor
//! could not put back are passed through untouched; a conservative output
//! beats a corrupted one the game cannot parse.
//!
//! # Workflow Example
//!
//! ```ignore
//! use loca_mt::driver::{self, RunOptions};
//! use loca_mt::mt::{GoogleTranslate, RetryPolicy};
//! use std::path::PathBuf;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = GoogleTranslate::from_env()?;
//!     let files = vec![PathBuf::from("events_l_english.yml")];
//!     let options = RunOptions {
//!         language: "l_french".to_string(),
//!         output_dir: None,
//!         verbose: false,
//!     };
//!     let stats = driver::run(&provider, &RetryPolicy::default(), &files, &options).await?;
//!     println!("{} lines translated", stats.lines_translated);
//!     Ok(())
//! }
//! ```

pub mod driver;
pub mod languages;
pub mod loca;
pub mod mt;

#[cfg(test)]
mod integration_tests;

pub use driver::{BatchError, RunOptions, TranslationStats, run, translate_file};
pub use languages::KNOWN_LANGUAGES;
pub use loca::{
    FormatTag, LocaFileName, LocaLine, PhraseGroup, TranslationDecision, classify, rebuild_line,
};
pub use mt::{
    GoogleTranslate, MockMode, MockTranslator, MtError, MtResult, RetryPolicy, Translator,
    translate_with_retry,
};
