//! Batch driver: translates localisation files line by line.
//!
//! For each input file the driver checks the filename convention and the
//! language tag on the first line, classifies every following line, sends
//! translatable values through the provider with retries, and writes the
//! rebuilt file under the target language's name. Bad files are reported
//! and skipped; the rest of the batch keeps going.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::languages;
use crate::loca::classify::{self, TranslationDecision};
use crate::loca::file::{self, LocaFileName};
use crate::loca::line::LocaLine;
use crate::loca::reassembly;
use crate::mt::retry::{self, RetryPolicy};
use crate::mt::translator::Translator;

/// Options for one batch run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Target language identifier, e.g. `l_french`.
    pub language: String,
    /// Directory translated files are written to. `None` writes to the
    /// current directory.
    pub output_dir: Option<PathBuf>,
    /// Print per-file progress.
    pub verbose: bool,
}

/// Counters accumulated over a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationStats {
    /// Files read, translated and written.
    pub files_translated: usize,
    /// Files rejected for a bad name or language tag.
    pub files_skipped: usize,
    /// Lines whose value was translated.
    pub lines_translated: usize,
    /// Lines kept untranslated because the provider was exhausted.
    pub lines_failed: usize,
    /// Characters submitted to the provider, for quota tracking.
    pub translated_chars: u64,
}

/// Errors surfaced by the batch driver.
#[derive(Debug)]
pub enum BatchError {
    /// Target language identifier is not in the table.
    UnknownLanguage(String),
    /// Input filename does not follow `<stem>_<l_language>.yml`.
    MalformedFilename(PathBuf),
    /// The language tag inside the file disagrees with its filename.
    LanguageMismatch {
        path: PathBuf,
        declared: Option<String>,
        expected: String,
    },
    /// Unrecoverable read or write failure.
    Io { path: PathBuf, source: io::Error },
}

impl BatchError {
    /// Whether this error aborts the whole run instead of skipping one file.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            BatchError::UnknownLanguage(_) | BatchError::Io { .. }
        )
    }
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchError::UnknownLanguage(id) => {
                write!(f, "Unknown target language: {}", id)
            }
            BatchError::MalformedFilename(path) => {
                write!(f, "Filename is wrong format: {}", path.display())
            }
            BatchError::LanguageMismatch {
                path,
                declared,
                expected,
            } => match declared {
                Some(tag) => write!(
                    f,
                    "Filename language mismatch: {} declares '{}' but filename says '{}'",
                    path.display(),
                    tag,
                    expected
                ),
                None => write!(
                    f,
                    "Filename language mismatch: {} is empty but filename says '{}'",
                    path.display(),
                    expected
                ),
            },
            BatchError::Io { path, source } => {
                write!(f, "I/O error on {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for BatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Translate a batch of files.
///
/// The target language is validated once up front. Files with a bad name or
/// language tag are reported to stderr and skipped; I/O failures abort the
/// run with the partial stats lost.
pub async fn run(
    translator: &dyn Translator,
    policy: &RetryPolicy,
    files: &[PathBuf],
    options: &RunOptions,
) -> Result<TranslationStats, BatchError> {
    if languages::provider_code(&options.language).is_none() {
        return Err(BatchError::UnknownLanguage(options.language.clone()));
    }

    let mut stats = TranslationStats::default();
    for path in files {
        match translate_file(translator, policy, path, options, &mut stats).await {
            Ok(()) => stats.files_translated += 1,
            Err(err) if err.is_fatal() => return Err(err),
            Err(err) => {
                eprintln!("{}", err);
                stats.files_skipped += 1;
            }
        }
    }
    Ok(stats)
}

/// Translate one file and write the result.
///
/// The output file is `<stem>_<target>.yml` inside the output directory,
/// starting with a BOM and the target language tag. Lines the classifier
/// passes through and lines the provider gave up on are emitted verbatim.
pub async fn translate_file(
    translator: &dyn Translator,
    policy: &RetryPolicy,
    path: &Path,
    options: &RunOptions,
    stats: &mut TranslationStats,
) -> Result<(), BatchError> {
    let target_code = languages::provider_code(&options.language)
        .ok_or_else(|| BatchError::UnknownLanguage(options.language.clone()))?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    let Some(loca_name) = LocaFileName::parse(&file_name) else {
        return Err(BatchError::MalformedFilename(path.to_path_buf()));
    };

    if options.verbose {
        println!("🔄 Translating {}", path.display());
    }

    let lines = file::read_lines(path).map_err(|source| BatchError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    // The first line must declare the same language the filename does.
    let expected_tag = format!("{}:", loca_name.language);
    match lines.first() {
        Some(first) if *first == expected_tag => {}
        first => {
            return Err(BatchError::LanguageMismatch {
                path: path.to_path_buf(),
                declared: first.cloned(),
                expected: loca_name.language.clone(),
            });
        }
    }

    let mut output = Vec::with_capacity(lines.len());
    output.push(format!("{}:", options.language));

    for (number, line) in lines.iter().enumerate().skip(1) {
        let Some(entry) = LocaLine::parse(line) else {
            output.push(line.clone());
            continue;
        };
        let TranslationDecision::Translatable { phrases, tag } = classify::classify(entry.value)
        else {
            output.push(line.clone());
            continue;
        };

        match retry::translate_with_retry(translator, policy, target_code, phrases.phrases()).await
        {
            Ok(translated) => {
                stats.lines_translated += 1;
                stats.translated_chars += phrases
                    .phrases()
                    .iter()
                    .map(|p| p.chars().count() as u64)
                    .sum::<u64>();
                output.push(reassembly::rebuild_line(
                    &entry,
                    &phrases,
                    tag.as_ref(),
                    &translated,
                ));
            }
            Err(err) => {
                eprintln!(
                    "{}:{}: line left untranslated: {}",
                    path.display(),
                    number + 1,
                    err
                );
                stats.lines_failed += 1;
                output.push(line.clone());
            }
        }
    }

    let out_name = loca_name.with_language(&options.language);
    let out_path = match &options.output_dir {
        Some(dir) => dir.join(&out_name),
        None => PathBuf::from(&out_name),
    };
    if options.verbose {
        println!("💾 Saving {}", out_path.display());
    }
    file::write_lines(&out_path, &output).map_err(|source| BatchError::Io {
        path: out_path.clone(),
        source,
    })?;

    Ok(())
}
