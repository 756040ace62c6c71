//! # Oldfilms
//!
//! Give your videos an authentic decade look, from 1900s silent film to
//! 1990s camcorder.
//!
//! This library powers a small local web service: a client uploads a video,
//! picks one of ten decade presets, and gets the processed file streamed
//! back with that era's color grading, grain, vignetting, frame rate and
//! resolution baked in by an external ffmpeg invocation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use oldfilms::{
//!     config::Config,
//!     presets::{Decade, PresetCatalog},
//!     processing::VideoProcessor,
//! };
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let config = Config::default();
//! let catalog = Arc::new(PresetCatalog::new());
//! let processor = VideoProcessor::new(config.encoder.clone(), catalog);
//!
//! processor
//!     .process(
//!         "home_movie.mp4".as_ref(),
//!         "home_movie_1950s.mp4".as_ref(),
//!         Decade::D1950s,
//!         None,
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several key modules:
//!
//! - [`presets`] - The immutable decade preset catalog
//! - [`processing`] - Filtergraph composition and transcoder invocation
//! - [`server`] - The HTTP boundary (upload intake, routes, shutdown)
//! - [`config`] - Configuration management

pub mod config;
pub mod error;
pub mod presets;
pub mod processing;
pub mod server;

// Re-export commonly used types for convenience
pub use crate::{
    config::Config,
    error::{OldfilmsError, Result},
    presets::{Decade, DecadePreset, PresetCatalog},
    processing::VideoProcessor,
};
