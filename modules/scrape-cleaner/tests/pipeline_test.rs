//! End-to-end runs of the cleaning pipeline against temporary directories
//! and a stub text generator.

mod harness;

use std::fs;

use harness::{cleaner, read_output, write_input, StubGenerator};
use scrape_cleaner::{process_all, CleanerError, RunSummary};
use tempfile::TempDir;

fn dirs() -> (TempDir, TempDir) {
    (TempDir::new().unwrap(), TempDir::new().unwrap())
}

#[tokio::test]
async fn every_txt_input_gets_a_same_named_output() {
    let (input, output) = dirs();
    write_input(input.path(), "one.txt", "First article.");
    write_input(input.path(), "two.txt", "SOURCE: x\n---\n\nSecond article.");
    write_input(input.path(), "image.png", "not text");
    let generator = StubGenerator::replying("Clean.");

    let summary = process_all(input.path(), output.path(), &cleaner(&generator))
        .await
        .unwrap();

    assert_eq!(
        summary,
        RunSummary {
            processed: 2,
            skipped: 0,
            fallbacks: 0
        }
    );
    assert_eq!(generator.calls(), 2);

    let mut names: Vec<String> = fs::read_dir(output.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    assert_eq!(names, ["one.txt", "two.txt"]);
}

#[tokio::test]
async fn deduplicated_reply_is_written_verbatim() {
    let (input, output) = dirs();
    write_input(input.path(), "a.txt", "Hello   world.\n\nHello   world.");
    let generator = StubGenerator::replying("Hello world.");

    process_all(input.path(), output.path(), &cleaner(&generator))
        .await
        .unwrap();

    assert_eq!(read_output(output.path(), "a.txt"), "Hello world.");
    assert!(generator.prompts()[0].contains("Hello   world.\n\nHello   world."));
}

#[tokio::test]
async fn header_is_preserved_and_only_body_is_sent() {
    let (input, output) = dirs();
    write_input(input.path(), "article.txt", "META: x\n---\n\nBody text");
    let generator = StubGenerator::replying("  Cleaned body\n");

    process_all(input.path(), output.path(), &cleaner(&generator))
        .await
        .unwrap();

    assert_eq!(
        read_output(output.path(), "article.txt"),
        "META: x\n---\n\nCleaned body"
    );
    let prompt = &generator.prompts()[0];
    assert!(prompt.contains("Body text"));
    assert!(!prompt.contains("META: x"));
}

#[tokio::test]
async fn headerless_file_gets_no_header() {
    let (input, output) = dirs();
    write_input(input.path(), "plain.txt", "Just body text, no delimiter");
    let generator = StubGenerator::replying("Just body text.");

    process_all(input.path(), output.path(), &cleaner(&generator))
        .await
        .unwrap();

    assert_eq!(read_output(output.path(), "plain.txt"), "Just body text.");
}

#[tokio::test]
async fn failed_generation_keeps_original_body_and_continues() {
    let (input, output) = dirs();
    write_input(input.path(), "a.txt", "META: a\n---\n\n  Raw   body A\n");
    write_input(input.path(), "b.txt", "Raw body B");
    let generator = StubGenerator::failing();

    let summary = process_all(input.path(), output.path(), &cleaner(&generator))
        .await
        .unwrap();

    assert_eq!(summary.processed, 2);
    assert_eq!(summary.fallbacks, 2);
    assert_eq!(generator.calls(), 2);
    assert_eq!(
        read_output(output.path(), "a.txt"),
        "META: a\n---\n\n  Raw   body A\n"
    );
    assert_eq!(read_output(output.path(), "b.txt"), "Raw body B");
}

#[tokio::test]
async fn existing_output_is_left_alone_without_a_model_call() {
    let (input, output) = dirs();
    write_input(input.path(), "report.txt", "new scrape");
    write_input(output.path(), "report.txt", "cleaned last week");
    let generator = StubGenerator::replying("should not be used");

    let summary = process_all(input.path(), output.path(), &cleaner(&generator))
        .await
        .unwrap();

    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.processed, 0);
    assert_eq!(generator.calls(), 0);
    assert_eq!(read_output(output.path(), "report.txt"), "cleaned last week");
}

#[tokio::test]
async fn second_run_is_a_no_op() {
    let (input, output) = dirs();
    write_input(input.path(), "a.txt", "alpha");
    write_input(input.path(), "b.txt", "beta");

    let first = StubGenerator::replying("clean");
    process_all(input.path(), output.path(), &cleaner(&first))
        .await
        .unwrap();
    let after_first: Vec<(String, String)> = ["a.txt", "b.txt"]
        .iter()
        .map(|n| (n.to_string(), read_output(output.path(), n)))
        .collect();

    let second = StubGenerator::replying("different");
    let summary = process_all(input.path(), output.path(), &cleaner(&second))
        .await
        .unwrap();

    assert_eq!(second.calls(), 0);
    assert_eq!(summary.skipped, 2);
    let after_second: Vec<(String, String)> = ["a.txt", "b.txt"]
        .iter()
        .map(|n| (n.to_string(), read_output(output.path(), n)))
        .collect();
    assert_eq!(after_first, after_second);
}

#[tokio::test]
async fn output_dir_is_created_when_missing() {
    let (input, root) = dirs();
    write_input(input.path(), "a.txt", "alpha");
    let output = root.path().join("nested").join("out");
    let generator = StubGenerator::replying("Alpha.");

    process_all(input.path(), &output, &cleaner(&generator))
        .await
        .unwrap();

    assert_eq!(read_output(&output, "a.txt"), "Alpha.");
}

#[tokio::test]
async fn missing_input_dir_aborts_the_run() {
    let (root, output) = dirs();
    let missing = root.path().join("input_files");
    let generator = StubGenerator::replying("unused");

    let err = process_all(&missing, output.path(), &cleaner(&generator))
        .await
        .unwrap_err();

    assert!(matches!(err, CleanerError::Filesystem { ref path, .. } if *path == missing));
    assert_eq!(generator.calls(), 0);
}

#[tokio::test]
async fn unreadable_source_aborts_the_run() {
    let (input, output) = dirs();
    fs::write(input.path().join("bad.txt"), [0xff, 0xfe, 0x00, 0x80]).unwrap();
    let generator = StubGenerator::replying("unused");

    let err = process_all(input.path(), output.path(), &cleaner(&generator))
        .await
        .unwrap_err();

    assert!(matches!(err, CleanerError::Filesystem { .. }));
    assert!(!output.path().join("bad.txt").exists());
    assert_eq!(generator.calls(), 0);
}
