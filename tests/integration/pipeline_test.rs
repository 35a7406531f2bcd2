//! Full-pipeline tests: file in, triples out.

use crate::common::{generate_whitespace_lines, write_input, CollectingWriter};
use std::sync::Arc;
use std::time::Duration;
use tp_error::{DecodeError, ErrorKind, PipelineError};
use tp_pipeline::{PipelineConfig, TriplePipeline};
use tp_types::{MalformedPolicy, ParseMode, Triple};

fn whitespace_config() -> PipelineConfig {
    PipelineConfig::new().with_parse_mode(ParseMode::Whitespace)
}

#[tokio::test]
async fn test_preserves_line_order() {
    let lines = generate_whitespace_lines(500);
    let input = write_input(&lines);
    let writer = CollectingWriter::new();

    let report = TriplePipeline::new(
        whitespace_config().with_channel_capacity(2),
        Arc::new(writer.clone()),
    )
    .run([input.path().to_string_lossy().into_owned()])
    .await
    .unwrap();

    let triples = writer.triples();
    assert_eq!(triples.len(), 500);
    for (i, triple) in triples.iter().enumerate() {
        assert_eq!(
            triple,
            &Triple::new(format!("s{i}"), format!("p{i}"), format!("o{i}"))
        );
    }
    assert_eq!(report.stats.lines_emitted, 500);
    assert_eq!(report.stats.triples_written, 500);
    assert_eq!(writer.flush_count(), 1);
}

#[tokio::test]
async fn test_capacity_one_still_completes() {
    let input = write_input(&generate_whitespace_lines(50));
    let writer = CollectingWriter::new();

    let report = tokio::time::timeout(
        Duration::from_secs(10),
        TriplePipeline::new(
            whitespace_config().with_channel_capacity(1),
            Arc::new(writer.clone()),
        )
        .run([input.path().to_string_lossy().into_owned()]),
    )
    .await
    .expect("pipeline should not deadlock")
    .unwrap();

    assert_eq!(report.stats.triples_written, 50);
}

#[tokio::test]
async fn test_turtle_file() {
    let input = write_input(&[
        "@prefix ex: <http://example.org/> .",
        "<ex:a> <ex:b> <ex:c> .",
        "",
        "# comment",
        r#"<ex:s> <ex:label> "hello"@en ; <ex:seeAlso> <ex:t> ."#,
    ]);
    let writer = CollectingWriter::new();

    TriplePipeline::new(PipelineConfig::new(), Arc::new(writer.clone()))
        .run([input.path().to_string_lossy().into_owned()])
        .await
        .unwrap();

    assert_eq!(
        writer.triples(),
        vec![
            Triple::new("ex:a", "ex:b", "ex:c"),
            Triple::new("ex:s", "ex:label", "hello"),
            Triple::new("ex:s", "ex:seeAlso", "ex:t"),
        ]
    );
}

#[tokio::test]
async fn test_multiple_inputs_in_order() {
    let first = write_input(&["a1 p a2", "a3 p a4"]);
    let second = write_input(&["b1 p b2"]);
    let writer = CollectingWriter::new();

    let report = TriplePipeline::new(whitespace_config(), Arc::new(writer.clone()))
        .run([
            first.path().to_string_lossy().into_owned(),
            second.path().to_string_lossy().into_owned(),
        ])
        .await
        .unwrap();

    let subjects: Vec<_> = writer.triples().into_iter().map(|t| t.subject).collect();
    assert_eq!(subjects, vec!["a1", "a3", "b1"]);
    assert_eq!(report.stats.inputs_opened, 2);
}

#[tokio::test]
async fn test_no_inputs_completes_cleanly() {
    let writer = CollectingWriter::new();

    let report = TriplePipeline::new(PipelineConfig::new(), Arc::new(writer.clone()))
        .run(Vec::<String>::new())
        .await
        .unwrap();

    assert!(writer.triples().is_empty());
    assert_eq!(report.stats.lines_emitted, 0);
    assert_eq!(writer.flush_count(), 1);
}

#[tokio::test]
async fn test_missing_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.ttl").to_string_lossy().into_owned();
    let writer = CollectingWriter::new();

    let err = tokio::time::timeout(
        Duration::from_secs(10),
        TriplePipeline::new(PipelineConfig::new(), Arc::new(writer.clone())).run([missing.clone()]),
    )
    .await
    .expect("pipeline should not deadlock")
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Resource);
    assert!(err.to_string().contains(&missing));
    assert!(writer.triples().is_empty());
}

#[tokio::test]
async fn test_malformed_line_fails_by_default() {
    let input = write_input(&["alice knows bob", "alice knows", "carol knows dave"]);
    let writer = CollectingWriter::new();

    let err = TriplePipeline::new(whitespace_config(), Arc::new(writer.clone()))
        .run([input.path().to_string_lossy().into_owned()])
        .await
        .unwrap_err();

    match err {
        PipelineError::Decode(DecodeError::Malformed { line, found, .. }) => {
            assert_eq!(line, 2);
            assert_eq!(found, 2);
        }
        other => panic!("Expected Malformed, got {other:?}"),
    }
    assert!(!writer
        .triples()
        .iter()
        .any(|t| t.subject == "carol"));
}

#[tokio::test]
async fn test_malformed_line_skipped_with_policy() {
    let input = write_input(&["alice knows bob", "alice knows", "carol knows dave"]);
    let writer = CollectingWriter::new();

    let report = TriplePipeline::new(
        whitespace_config().with_malformed_policy(MalformedPolicy::Skip),
        Arc::new(writer.clone()),
    )
    .run([input.path().to_string_lossy().into_owned()])
    .await
    .unwrap();

    assert_eq!(
        writer.triples(),
        vec![
            Triple::new("alice", "knows", "bob"),
            Triple::new("carol", "knows", "dave"),
        ]
    );
    assert_eq!(report.stats.lines_skipped, 1);
    assert_eq!(report.stats.lines_emitted, 3);
}

#[tokio::test]
async fn test_zero_capacity_is_usage_error() {
    let err = TriplePipeline::new(
        PipelineConfig::new().with_channel_capacity(0),
        Arc::new(CollectingWriter::new()),
    )
    .run(["in.ttl"])
    .await
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Usage);
}
