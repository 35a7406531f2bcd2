//! Integration tests for triplepipe.
//!
//! These run the full four-stage pipeline against temporary files on disk.
//!
//! ```bash
//! cargo test -p integration-tests
//! ```

mod backpressure_test;
mod common;
mod pipeline_test;
