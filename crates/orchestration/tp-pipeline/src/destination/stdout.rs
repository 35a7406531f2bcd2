//! Text block destination.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;
use tp_error::{PipelineError, Result};
use tp_traits::TripleWriter;
use tp_types::Triple;

/// Render a triple as its output block.
///
/// ```
/// use tp_pipeline::destination::format_block;
/// use tp_types::Triple;
///
/// let block = format_block(&Triple::new("alice", "knows", "bob"));
/// assert_eq!(block, "S: alice\nP: knows\nO: bob\n\n");
/// ```
pub fn format_block(triple: &Triple) -> String {
    format!(
        "S: {}\nP: {}\nO: {}\n\n",
        triple.subject, triple.predicate, triple.object
    )
}

/// Writer that prints each triple as a four-line block.
///
/// Blocks are written as they arrive; nothing is held back beyond what the
/// underlying `Write` buffers itself.
pub struct BlockWriter {
    out: Mutex<Box<dyn Write + Send>>,
}

impl BlockWriter {
    /// Create a block writer over any `Write`.
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Create a block writer on standard output.
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }
}

#[async_trait]
impl TripleWriter for BlockWriter {
    async fn write(&self, triple: &Triple) -> Result<()> {
        let block = format_block(triple);
        self.out
            .lock()
            .write_all(block.as_bytes())
            .map_err(PipelineError::Write)
    }

    async fn flush(&self) -> Result<()> {
        self.out.lock().flush().map_err(PipelineError::Write)
    }
}

/// Cloneable in-memory `Write`, for capturing a writer's output.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
