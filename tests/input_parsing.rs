//! Tests for input source selection and domain list parsing

use std::path::Path;

use spoofx::app::{parse_domain_lines, read_domains, resolve_input_source, InputSource};
use spoofx::InputError;
use tempfile::TempDir;

#[test]
fn test_domain_wins_over_file_and_stdin() {
    let source = resolve_input_source(Some("example.com"), Some(Path::new("domains.txt")), false)
        .expect("domain should be accepted");
    assert_eq!(source, InputSource::Domain("example.com".to_string()));
}

#[test]
fn test_file_wins_over_piped_stdin() {
    let source = resolve_input_source(None, Some(Path::new("domains.txt")), false)
        .expect("file should be accepted");
    assert_eq!(source, InputSource::File("domains.txt".into()));
}

#[test]
fn test_piped_stdin_used_without_domain_or_file() {
    let source = resolve_input_source(None, None, false).expect("stdin should be accepted");
    assert_eq!(source, InputSource::Stdin);
}

#[test]
fn test_no_input_on_terminal() {
    let result = resolve_input_source(None, None, true);
    assert!(matches!(result, Err(InputError::NoInput)));
}

#[tokio::test]
async fn test_read_domains_from_file_skips_blank_lines() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input_file = temp_dir.path().join("domains.txt");
    std::fs::write(
        &input_file,
        "example.com\n\n   \n  example.org  \r\n\texample.net\nexample.com\n",
    )
    .expect("Failed to write input file");

    let domains = read_domains(&InputSource::File(input_file))
        .await
        .expect("file should be readable");

    // Duplicates are kept; each entry is scanned
    assert_eq!(
        domains,
        vec!["example.com", "example.org", "example.net", "example.com"]
    );
}

#[tokio::test]
async fn test_read_domains_missing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let missing = temp_dir.path().join("nope.txt");

    let err = read_domains(&InputSource::File(missing.clone()))
        .await
        .expect_err("missing file should fail");

    match err {
        InputError::Open { path, .. } => assert_eq!(path, missing),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_read_single_domain_is_trimmed() {
    let domains = read_domains(&InputSource::Domain("  example.com ".to_string()))
        .await
        .expect("domain should be readable");
    assert_eq!(domains, vec!["example.com"]);
}

#[tokio::test]
async fn test_read_blank_single_domain_yields_nothing() {
    let domains = read_domains(&InputSource::Domain("   ".to_string()))
        .await
        .expect("domain should be readable");
    assert!(domains.is_empty());
}

#[tokio::test]
async fn test_parse_domain_lines_without_trailing_newline() {
    let input: &[u8] = b"a.example\nb.example";
    let domains = parse_domain_lines(input, "test")
        .await
        .expect("in-memory input should parse");
    assert_eq!(domains, vec!["a.example", "b.example"]);
}

#[tokio::test]
async fn test_parse_domain_lines_keeps_comment_like_lines() {
    // No syntax validation happens before resolution
    let input: &[u8] = b"# not a comment\nexample.com\n";
    let domains = parse_domain_lines(input, "test")
        .await
        .expect("in-memory input should parse");
    assert_eq!(domains, vec!["# not a comment", "example.com"]);
}
