//! Input files and an in-memory writer for pipeline tests.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;
use tp_error::Result;
use tp_traits::TripleWriter;
use tp_types::Triple;

/// Write `lines` to a temporary file, one per line.
pub fn write_input<S: AsRef<str>>(lines: &[S]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{}", line.as_ref()).unwrap();
    }
    file.flush().unwrap();
    file
}

/// Generate `count` whitespace-mode lines: `s{i} p{i} o{i}`.
pub fn generate_whitespace_lines(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("s{i} p{i} o{i}")).collect()
}

/// Keeps every written triple in order.
#[derive(Debug, Clone, Default)]
pub struct CollectingWriter {
    triples: Arc<Mutex<Vec<Triple>>>,
    flushes: Arc<Mutex<usize>>,
}

impl CollectingWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn triples(&self) -> Vec<Triple> {
        self.triples.lock().clone()
    }

    pub fn flush_count(&self) -> usize {
        *self.flushes.lock()
    }
}

#[async_trait]
impl TripleWriter for CollectingWriter {
    async fn write(&self, triple: &Triple) -> Result<()> {
        self.triples.lock().push(triple.clone());
        Ok(())
    }

    async fn flush(&self) -> Result<()> {
        *self.flushes.lock() += 1;
        Ok(())
    }
}
