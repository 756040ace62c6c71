//! # Decade Preset Catalog
//!
//! This module holds the fixed set of decade looks the product ships with:
//! ten presets, 1900s through 1990s, each an independently authored bundle
//! of ffmpeg filter expressions plus frame rate, output height and declared
//! customization knobs.
//!
//! The catalog is pure data with lookup; composing the filtergraph and
//! driving the transcoder live in [`crate::processing`].
//!
//! ## Usage
//!
//! ```rust
//! use oldfilms::presets::PresetCatalog;
//!
//! let catalog = PresetCatalog::new();
//! let preset = catalog.get_by_key("1980s").unwrap();
//! assert_eq!(preset.fps, 25);
//! ```

pub mod catalog;
pub mod types;

mod decades;

// Re-exports for convenience
pub use catalog::PresetCatalog;
pub use types::{CustomOptions, Decade, DecadePreset, OptionDescriptor, OptionValue};
