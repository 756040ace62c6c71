//! # Filter Composition & Transcoding
//!
//! Turns a decade preset into a single ffmpeg filtergraph expression and
//! drives the external transcoder with it. The composer is pure string
//! work; the processor owns the subprocess boundary and converts exit
//! status and stderr into typed errors.

pub mod compose;
pub mod processor;

// Re-exports for convenience
pub use compose::{compose, validate_options};
pub use processor::VideoProcessor;
