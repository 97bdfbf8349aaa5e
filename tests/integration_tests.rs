//! Integration tests for input sourcing and the end-to-end CLI pipeline

use resume_screener::error::ScreenerError;
use resume_screener::input::file_detector::FileType;
use resume_screener::input::{InputManager, TextSource};
use resume_screener::output::formatter::{save_report_to_file, ReportGenerator};
use resume_screener::config::OutputFormat;
use resume_screener::{Decision, ScreeningEngine};
use std::path::Path;

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("Jane Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("internship"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("Jane Doe"));
    assert!(text.contains("Docker and AWS"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(ScreenerError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(ScreenerError::InvalidInput(_))));
}

#[tokio::test]
async fn test_resolve_file_and_inline() {
    let mut manager = InputManager::new();

    let (text, source) = manager.resolve("tests/fixtures/sample_job.txt").await.unwrap();
    assert_eq!(source, TextSource::File(FileType::Text));
    assert!(text.contains("Kubernetes"));

    let (text, source) = manager.resolve("python sql git").await.unwrap();
    assert_eq!(source, TextSource::Inline);
    assert_eq!(text, "python sql git");

    // Missing .txt path falls back to inline text, as pasted input would
    let (text, source) = manager.resolve("tests/fixtures/nonexistent.txt").await.unwrap();
    assert_eq!(source, TextSource::Inline);
    assert_eq!(text, "tests/fixtures/nonexistent.txt");
}

#[tokio::test]
async fn test_resolve_without_inline_fallback() {
    let mut manager = InputManager::new().with_inline_fallback(false);

    assert!(manager.resolve("tests/fixtures/sample_resume.md").await.is_ok());
    let result = manager.resolve("python sql git").await;
    assert!(matches!(result, Err(ScreenerError::InvalidInput(_))));
}

#[tokio::test]
async fn test_end_to_end_from_fixtures() {
    let mut manager = InputManager::new();
    let (resume, _) = manager.resolve("tests/fixtures/sample_resume.txt").await.unwrap();
    let (job, _) = manager.resolve("tests/fixtures/sample_job.txt").await.unwrap();

    let report = ScreeningEngine::default().screen(&resume, &job);

    // core 4/5, soft 2/3, optional 2/3
    assert!((report.scores.skill_score - (40.0 + 20.0 + 40.0 / 3.0)).abs() < 1e-9);
    assert_eq!(report.scores.experience_score, 30);
    assert_eq!(report.scores.keyword_score, 20.0);
    assert_eq!(report.decision, Decision::Shortlisted);
    assert_eq!(report.highlights, vec!["Good communication", "Teamwork skills"]);

    let core = report.skills.category("core").unwrap();
    assert_eq!(core.missing, vec!["data structures"]);
}

#[tokio::test]
async fn test_saved_report_matches_plain_output() {
    let mut manager = InputManager::new();
    let (resume, _) = manager.resolve("tests/fixtures/sample_resume.md").await.unwrap();
    let report = ScreeningEngine::default().screen(&resume, "python docker");

    let generator = ReportGenerator::with_options(false, true, true);
    let rendered = generator.generate_report(&report, &OutputFormat::Plain).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("jane_screening.txt");
    save_report_to_file(&rendered, &target).unwrap();

    let saved = std::fs::read_to_string(&target).unwrap();
    assert_eq!(saved, rendered);
    assert!(saved.starts_with("--- Candidate Screening Result ---\n\n"));
    assert!(saved.contains("Final Decision: "));
}
