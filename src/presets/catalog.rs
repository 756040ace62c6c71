use std::collections::BTreeMap;

use crate::error::PresetError;

use super::decades;
use super::types::{Decade, DecadePreset};

/// Immutable lookup table of the ten decade presets
///
/// The catalog is built once at startup and never mutated afterwards, so it
/// can be shared across request handlers without locking.
#[derive(Debug, Clone)]
pub struct PresetCatalog {
    presets: BTreeMap<Decade, DecadePreset>,
}

impl PresetCatalog {
    /// Create the catalog with all ten built-in decade presets
    pub fn new() -> Self {
        let mut presets = BTreeMap::new();

        presets.insert(Decade::D1900s, decades::early_cinema());
        presets.insert(Decade::D1910s, decades::silent_films());
        presets.insert(Decade::D1920s, decades::jazz_age());
        presets.insert(Decade::D1930s, decades::golden_age());
        presets.insert(Decade::D1940s, decades::war_era());
        presets.insert(Decade::D1950s, decades::technicolor());
        presets.insert(Decade::D1960s, decades::kodachrome());
        presets.insert(Decade::D1970s, decades::super8());
        presets.insert(Decade::D1980s, decades::vhs());
        presets.insert(Decade::D1990s, decades::camcorder());

        Self { presets }
    }

    /// The full catalog, keyed by decade and chronologically ordered
    pub fn decades(&self) -> &BTreeMap<Decade, DecadePreset> {
        &self.presets
    }

    /// Look up one preset
    pub fn get(&self, decade: Decade) -> Result<&DecadePreset, PresetError> {
        self.presets
            .get(&decade)
            .ok_or_else(|| PresetError::UnknownDecade {
                key: decade.to_string(),
            })
    }

    /// Look up one preset by its wire key, e.g. "1950s"
    ///
    /// Fails with [`PresetError::UnknownDecade`] for any key outside the
    /// fixed set; a partially populated preset is never returned.
    pub fn get_by_key(&self, key: &str) -> Result<&DecadePreset, PresetError> {
        self.get(key.parse()?)
    }

    /// Number of presets in the catalog
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Check every preset's invariants
    ///
    /// Run once at startup: a catalog that fails here is a programming
    /// error, not a runtime condition.
    pub fn validate(&self) -> Result<(), PresetError> {
        for (decade, preset) in &self.presets {
            let invalid = |detail: String| PresetError::InvalidPreset {
                decade: decade.to_string(),
                detail,
            };

            if preset.fps == 0 {
                return Err(invalid("fps must be positive".to_string()));
            }
            if preset.max_height == 0 {
                return Err(invalid("max_height must be positive".to_string()));
            }
            if preset.filters.is_empty() {
                return Err(invalid("empty filter chain".to_string()));
            }

            // The chain must end by pinning the frame rate declared above.
            let expected_tail = format!("fps={}", preset.fps);
            let tail = preset.filters.last().map(String::as_str).unwrap_or("");
            if tail != expected_tail {
                return Err(invalid(format!(
                    "chain ends with '{}', expected '{}'",
                    tail, expected_tail
                )));
            }

            for (key, descriptor) in &preset.options {
                descriptor
                    .validate()
                    .map_err(|detail| invalid(format!("option '{}': {}", key, detail)))?;
            }
        }

        Ok(())
    }
}

impl Default for PresetCatalog {
    fn default() -> Self {
        Self::new()
    }
}
