//! core/mod.rs
//!
//! Everything that touches audio files:
//! - Sniff the container and read/write its tag (tags)
//! - Measure the audio stream (metrics)
//! - Load the cover image (mime)
//!
//! Returns plain data structs; formatting them is the CLI's job.

pub mod error;
pub mod metrics;
pub mod mime;
pub mod tags;
pub mod types;
