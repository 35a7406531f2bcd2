//! Core types for triplepipe.
//!
//! This crate provides the foundational types used throughout the system:
//! - [`Line`] - One numbered line of input
//! - [`Triple`] - One decoded RDF statement
//! - [`ParseMode`] - Which line notation the decoder expects
//! - [`MalformedPolicy`] - What to do with a line that cannot be decoded

pub mod line;
pub mod mode;
pub mod triple;

pub use line::*;
pub use mode::*;
pub use triple::*;
