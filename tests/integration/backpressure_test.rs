//! Bounded channels hold the source back when the sink stops reading.

use crate::common::{generate_whitespace_lines, write_input};
use std::time::Duration;
use tokio::sync::mpsc;
use tp_decoder::WhitespaceParser;
use tp_error::ErrorKind;
use tp_pipeline::{Feeder, LineSource, PipelineRunner, TripleDecoder};

/// With capacity C and a consumer that never reads, the source can hand out
/// C lines to its own channel, C + 1 to the decoder (C triples queued plus
/// one held in a pending send), and then blocks.
#[tokio::test]
async fn test_stalled_sink_bounds_source() {
    const CAPACITY: usize = 3;

    let input = write_input(&generate_whitespace_lines(100));
    let (name_tx, name_rx) = mpsc::channel(CAPACITY);
    let (line_tx, line_rx) = mpsc::channel(CAPACITY);
    let (triple_tx, _stalled_rx) = mpsc::channel(CAPACITY);

    let mut runner = PipelineRunner::new();
    runner
        .add_stage(Feeder::single(
            input.path().to_string_lossy().into_owned(),
            name_tx,
        ))
        .add_stage(LineSource::new(name_rx, line_tx))
        .add_stage(TripleDecoder::new(
            Box::new(WhitespaceParser::new()),
            line_rx,
            triple_tx,
        ));

    let stats = runner.stats();
    let cancel = runner.cancellation_token();
    let run = tokio::spawn(runner.run());

    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(stats.lines_emitted(), (2 * CAPACITY + 1) as u64);
    assert_eq!(stats.triples_decoded(), CAPACITY as u64);
    assert_eq!(stats.triples_written(), 0);

    // Still blocked a while later
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(stats.lines_emitted(), (2 * CAPACITY + 1) as u64);

    cancel.cancel();
    let err = tokio::time::timeout(Duration::from_secs(5), run)
        .await
        .expect("cancel should unblock every stage")
        .unwrap()
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Shutdown);
}
