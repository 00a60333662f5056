use std::env;
use std::path::PathBuf;

use clap::{Arg, Command};
use loca_mt::driver::{self, RunOptions};
use loca_mt::languages;
use loca_mt::mt::google::GoogleTranslate;
use loca_mt::mt::mock::{MockMode, MockTranslator};
use loca_mt::mt::retry::RetryPolicy;
use loca_mt::mt::translator::Translator;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("loca-mt")
        .version("0.1.0")
        .about("Machine translation for Paradox-style localisation files")
        .arg(
            Arg::new("input")
                .help("Input file(s); glob patterns like 'loc/*_l_english.yml' work")
                .required(true)
                .num_args(1..),
        )
        .arg(
            Arg::new("language")
                .long("language")
                .short('l')
                .help("Target language identifier")
                .default_value("l_english")
                .value_parser(languages::language_ids()),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output directory (default: current directory)"),
        )
        .arg(
            Arg::new("api-key")
                .long("api-key")
                .short('k')
                .help("Google Translate API key (default: GOOGLE_TRANSLATE_API_KEY)"),
        )
        .arg(
            Arg::new("mock")
                .long("mock")
                .short('m')
                .help("Use mock translator instead of Google Translate")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show detailed translation progress")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let patterns: Vec<&String> = matches.get_many::<String>("input").unwrap().collect();
    let language = matches.get_one::<String>("language").unwrap().clone();
    let output_dir = matches.get_one::<String>("output").map(PathBuf::from);
    let api_key = matches.get_one::<String>("api-key").cloned();
    let use_mock = matches.get_flag("mock");
    let verbose = matches.get_flag("verbose");

    // Expand glob patterns into the file list
    let mut files: Vec<PathBuf> = Vec::new();
    for pattern in patterns {
        let mut matched = false;
        for entry in glob::glob(pattern)? {
            files.push(entry?);
            matched = true;
        }
        if !matched {
            eprintln!("No files match: {}", pattern);
        }
    }
    if files.is_empty() {
        return Err("No input files".into());
    }

    if verbose {
        println!("🌍 Target language: {}", language);
        println!("📚 Translating {} file(s):", files.len());
        for file in &files {
            println!("   {}", file.display());
        }
        println!();
    }

    let translator: Box<dyn Translator> = if use_mock {
        Box::new(MockTranslator::new(MockMode::Suffix))
    } else if let Some(key) = api_key {
        Box::new(GoogleTranslate::new(key)?)
    } else {
        // Check for API key
        if env::var("GOOGLE_TRANSLATE_API_KEY").is_err() {
            eprintln!("❌ GOOGLE_TRANSLATE_API_KEY environment variable not set");
            eprintln!("   Set it with: export GOOGLE_TRANSLATE_API_KEY=your_api_key");
            eprintln!("   Or pass --api-key, or use --mock");
            return Err("Missing API key".into());
        }
        Box::new(GoogleTranslate::from_env()?)
    };

    if verbose {
        println!("🔌 Provider: {}", translator.provider_name());
    }

    let options = RunOptions {
        language,
        output_dir,
        verbose,
    };
    let stats = driver::run(
        translator.as_ref(),
        &RetryPolicy::default(),
        &files,
        &options,
    )
    .await?;

    println!(
        "✅ {} file(s) translated, {} skipped",
        stats.files_translated, stats.files_skipped
    );
    println!(
        "   {} line(s) translated, {} left untranslated",
        stats.lines_translated, stats.lines_failed
    );
    println!(
        "   {} characters translated by {}",
        stats.translated_chars,
        translator.provider_name()
    );

    Ok(())
}
