//! End-to-end tests for the batch translation pipeline.
//!
//! These tests drive whole files through [`crate::driver::run`] with mock
//! providers, checking the written output byte for byte: BOM, language tag,
//! untouched pass-through lines, rebuilt translated lines.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::fs;
    use std::path::PathBuf;

    use crate::driver::{self, BatchError, RunOptions, TranslationStats};
    use crate::mt::mock::{MockMode, MockTranslator};
    use crate::mt::retry::RetryPolicy;
    use crate::mt::translator::Translator;

    fn options(dir: &tempfile::TempDir, language: &str) -> RunOptions {
        RunOptions {
            language: language.to_string(),
            output_dir: Some(dir.path().to_path_buf()),
            verbose: false,
        }
    }

    async fn run_one(
        translator: &dyn Translator,
        input: &PathBuf,
        options: &RunOptions,
    ) -> Result<TranslationStats, BatchError> {
        driver::run(
            translator,
            &RetryPolicy::immediate(3),
            std::slice::from_ref(input),
            options,
        )
        .await
    }

    fn french_mappings() -> MockTranslator {
        let mut map = HashMap::new();
        map.insert(
            ("A toast to the happy couple!".to_string(), "fr".to_string()),
            "Un toast aux heureux mariés !".to_string(),
        );
        map.insert(("Dance".to_string(), "fr".to_string()), "Dansez".to_string());
        map.insert(("Drink".to_string(), "fr".to_string()), "Buvez".to_string());
        map.insert(
            ("Be merry".to_string(), "fr".to_string()),
            "Soyez joyeux".to_string(),
        );
        MockTranslator::new(MockMode::Mappings(map))
    }

    #[tokio::test]
    async fn test_full_file_translation() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("wedding_l_english.yml");
        fs::write(
            &input,
            "\u{feff}l_english:\n \
             wedding_greeting:0 \"#bold A toast to the happy couple!#!\"\n \
             wedding_toast:0 \"To $GUEST$, our honoured friend!\" # keep the reference\n \
             wedding_song:0 \"Dance\\nDrink\\nBe merry\"\n",
        )
        .unwrap();

        let stats = run_one(&french_mappings(), &input, &options(&dir, "l_french"))
            .await
            .unwrap();

        let output = fs::read_to_string(dir.path().join("wedding_l_french.yml")).unwrap();
        assert_eq!(
            output,
            "\u{feff}l_french:\n \
             wedding_greeting:0 \"#bold Un toast aux heureux mariés !#!\"\n \
             wedding_toast:0 \"To $GUEST$, our honoured friend!\" # keep the reference\n \
             wedding_song:0 \"Dansez\\nBuvez\\nSoyez joyeux\"\n",
        );

        assert_eq!(stats.files_translated, 1);
        assert_eq!(stats.files_skipped, 0);
        assert_eq!(stats.lines_translated, 2);
        assert_eq!(stats.lines_failed, 0);
        // "A toast to the happy couple!" is 28 chars, the three song phrases 18.
        assert_eq!(stats.translated_chars, 46);
    }

    #[tokio::test]
    async fn test_input_file_is_left_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("t_l_english.yml");
        let content = "\u{feff}l_english:\n key:0 \"Hello\"\n";
        fs::write(&input, content).unwrap();

        run_one(&french_mappings(), &input, &options(&dir, "l_french"))
            .await
            .unwrap();

        assert_eq!(fs::read_to_string(&input).unwrap(), content);
    }

    #[tokio::test]
    async fn test_noop_translation_only_changes_language_tag() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("mixed_l_english.yml");
        fs::write(
            &input,
            "\u{feff}l_english:\n\
             # section header\n\
             \n \
             plain:0 \"Hello there\"\n \
             tagged:0 \"#italic Stay a while\\nand listen#!\"\n \
             reference:0 \"Greetings, $TITLE$\"\n \
             odd_line_without_value\n",
        )
        .unwrap();

        let mock = MockTranslator::new(MockMode::NoOp);
        let stats = run_one(&mock, &input, &options(&dir, "l_german"))
            .await
            .unwrap();

        let output = fs::read_to_string(dir.path().join("mixed_l_german.yml")).unwrap();
        assert_eq!(
            output,
            "\u{feff}l_german:\n\
             # section header\n\
             \n \
             plain:0 \"Hello there\"\n \
             tagged:0 \"#italic Stay a while\\nand listen#!\"\n \
             reference:0 \"Greetings, $TITLE$\"\n \
             odd_line_without_value\n",
        );
        assert_eq!(stats.lines_translated, 2);
        assert_eq!(stats.lines_failed, 0);
    }

    #[tokio::test]
    async fn test_entity_escaped_answers_are_decoded() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("q_l_english.yml");
        fs::write(&input, "\u{feff}l_english:\n greeting:0 \"Hello\"\n").unwrap();

        let mock = MockTranslator::new(MockMode::Quoted);
        run_one(&mock, &input, &options(&dir, "l_spanish"))
            .await
            .unwrap();

        let output = fs::read_to_string(dir.path().join("q_l_spanish.yml")).unwrap();
        assert_eq!(output, "\u{feff}l_spanish:\n greeting:0 \"'Hello'\"\n");
    }

    #[tokio::test]
    async fn test_language_mismatch_skips_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("lies_l_english.yml");
        fs::write(&input, "\u{feff}l_french:\n key:0 \"Hello\"\n").unwrap();

        let mock = MockTranslator::new(MockMode::NoOp);
        let stats = run_one(&mock, &input, &options(&dir, "l_french"))
            .await
            .unwrap();

        assert_eq!(stats.files_translated, 0);
        assert_eq!(stats.files_skipped, 1);
        assert!(!dir.path().join("lies_l_french.yml").exists());
    }

    #[tokio::test]
    async fn test_empty_file_counts_as_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("empty_l_english.yml");
        fs::write(&input, "").unwrap();

        let mock = MockTranslator::new(MockMode::NoOp);
        let stats = run_one(&mock, &input, &options(&dir, "l_french"))
            .await
            .unwrap();
        assert_eq!(stats.files_skipped, 1);
    }

    #[tokio::test]
    async fn test_malformed_filename_skips_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("notes.txt");
        fs::write(&input, "l_english:\n key:0 \"Hello\"\n").unwrap();

        let mock = MockTranslator::new(MockMode::NoOp);
        let stats = run_one(&mock, &input, &options(&dir, "l_french"))
            .await
            .unwrap();

        assert_eq!(stats.files_translated, 0);
        assert_eq!(stats.files_skipped, 1);
    }

    #[tokio::test]
    async fn test_unknown_target_language_aborts_run() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("a_l_english.yml");
        fs::write(&input, "\u{feff}l_english:\n key:0 \"Hello\"\n").unwrap();

        let mock = MockTranslator::new(MockMode::NoOp);
        let result = run_one(&mock, &input, &options(&dir, "l_klingon")).await;
        match result {
            Err(BatchError::UnknownLanguage(id)) => assert_eq!(id, "l_klingon"),
            other => panic!("Expected UnknownLanguage, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_exhausted_provider_keeps_lines_untranslated() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("b_l_english.yml");
        fs::write(
            &input,
            "\u{feff}l_english:\n one:0 \"Hello\"\n two:0 \"$REF$\"\n",
        )
        .unwrap();

        let mock = MockTranslator::new(MockMode::Error("quota exceeded".to_string()));
        let stats = run_one(&mock, &input, &options(&dir, "l_russian"))
            .await
            .unwrap();

        // The file is still written; the failed line stays in English.
        let output = fs::read_to_string(dir.path().join("b_l_russian.yml")).unwrap();
        assert_eq!(
            output,
            "\u{feff}l_russian:\n one:0 \"Hello\"\n two:0 \"$REF$\"\n"
        );
        assert_eq!(stats.files_translated, 1);
        assert_eq!(stats.lines_translated, 0);
        assert_eq!(stats.lines_failed, 1);
        assert_eq!(stats.translated_chars, 0);
    }

    #[tokio::test]
    async fn test_stats_accumulate_across_files() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good_l_english.yml");
        fs::write(&good, "\u{feff}l_english:\n a:0 \"One\"\n b:0 \"Two\"\n").unwrap();
        let bad = dir.path().join("bad_l_english.yml");
        fs::write(&bad, "\u{feff}l_spanish:\n a:0 \"Uno\"\n").unwrap();

        let mock = MockTranslator::new(MockMode::Suffix);
        let stats = driver::run(
            &mock,
            &RetryPolicy::immediate(3),
            &[good, bad],
            &options(&dir, "l_korean"),
        )
        .await
        .unwrap();

        assert_eq!(stats.files_translated, 1);
        assert_eq!(stats.files_skipped, 1);
        assert_eq!(stats.lines_translated, 2);

        let output = fs::read_to_string(dir.path().join("good_l_korean.yml")).unwrap();
        assert_eq!(
            output,
            "\u{feff}l_korean:\n a:0 \"One_ko\"\n b:0 \"Two_ko\"\n"
        );
    }

    #[tokio::test]
    async fn test_output_goes_to_requested_directory() {
        let in_dir = tempfile::tempdir().unwrap();
        let out_dir = tempfile::tempdir().unwrap();
        let input = in_dir.path().join("c_l_english.yml");
        fs::write(&input, "\u{feff}l_english:\n key:0 \"Hello\"\n").unwrap();

        let mock = MockTranslator::new(MockMode::NoOp);
        run_one(&mock, &input, &options(&out_dir, "l_simp_chinese"))
            .await
            .unwrap();

        assert!(out_dir.path().join("c_l_simp_chinese.yml").exists());
        assert!(!in_dir.path().join("c_l_simp_chinese.yml").exists());
    }

    #[tokio::test]
    async fn test_same_language_roundtrip_rewrites_file() {
        // Translating english to english is allowed; the provider decides
        // what to do with it.
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("d_l_english.yml");
        fs::write(&input, "\u{feff}l_english:\n key:0 \"Hello\"\n").unwrap();

        let mock = MockTranslator::new(MockMode::Suffix);
        let stats = run_one(&mock, &input, &options(&dir, "l_english"))
            .await
            .unwrap();

        assert_eq!(stats.files_translated, 1);
        let output = fs::read_to_string(dir.path().join("d_l_english.yml")).unwrap();
        assert_eq!(output, "\u{feff}l_english:\n key:0 \"Hello_en\"\n");
    }
}
