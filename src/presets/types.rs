use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PresetError;

/// The ten supported decade looks, 1900s through 1990s
///
/// Serializes to the same string keys the HTTP clients use ("1900s" etc.),
/// so the enum can key the catalog map directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Decade {
    #[serde(rename = "1900s")]
    D1900s,
    #[serde(rename = "1910s")]
    D1910s,
    #[serde(rename = "1920s")]
    D1920s,
    #[serde(rename = "1930s")]
    D1930s,
    #[serde(rename = "1940s")]
    D1940s,
    #[serde(rename = "1950s")]
    D1950s,
    #[serde(rename = "1960s")]
    D1960s,
    #[serde(rename = "1970s")]
    D1970s,
    #[serde(rename = "1980s")]
    D1980s,
    #[serde(rename = "1990s")]
    D1990s,
}

impl Decade {
    /// All decades, in chronological order
    pub const ALL: [Decade; 10] = [
        Decade::D1900s,
        Decade::D1910s,
        Decade::D1920s,
        Decade::D1930s,
        Decade::D1940s,
        Decade::D1950s,
        Decade::D1960s,
        Decade::D1970s,
        Decade::D1980s,
        Decade::D1990s,
    ];

    /// The wire key for this decade, e.g. "1950s"
    pub fn as_str(&self) -> &'static str {
        match self {
            Decade::D1900s => "1900s",
            Decade::D1910s => "1910s",
            Decade::D1920s => "1920s",
            Decade::D1930s => "1930s",
            Decade::D1940s => "1940s",
            Decade::D1950s => "1950s",
            Decade::D1960s => "1960s",
            Decade::D1970s => "1970s",
            Decade::D1980s => "1980s",
            Decade::D1990s => "1990s",
        }
    }
}

impl fmt::Display for Decade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Decade {
    type Err = PresetError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Decade::ALL
            .iter()
            .find(|decade| decade.as_str() == s)
            .copied()
            .ok_or_else(|| PresetError::UnknownDecade { key: s.to_string() })
    }
}

/// A fixed bundle of filter parameters approximating one decade's look
///
/// The filter list is ordered: later expressions operate on the output of
/// earlier ones, and the list always ends with a frame-rate expression.
/// A scaling step for [`max_height`](Self::max_height) is appended at
/// composition time, not stored here.
#[derive(Debug, Clone, Serialize)]
pub struct DecadePreset {
    /// Display name shown in the client, e.g. "1980s - VHS Era"
    pub name: String,

    /// One-line description of the look
    pub description: String,

    /// Target output frame rate
    pub fps: u32,

    /// Maximum output height in pixels; width follows the aspect ratio
    pub max_height: u32,

    /// Ordered ffmpeg filter expressions making up the look
    pub filters: Vec<String>,

    /// Whether the client may offer customization knobs for this preset
    pub customizable: bool,

    /// Declared customization knobs, keyed by option name
    pub options: BTreeMap<String, OptionDescriptor>,
}

/// One customization knob declared by a preset
///
/// Exactly one shape applies per descriptor. Serialization is untagged so
/// each shape keeps its natural JSON form: ranges as
/// `{min, max, default, label}`, choices as `{options, default, label}`,
/// toggles as `{enabled, label}` and texts as `{default, label}`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum OptionDescriptor {
    /// Numeric range with an in-bounds default
    Range {
        min: f64,
        max: f64,
        default: f64,
        label: String,
    },

    /// Enumerated choice; the default is one of the listed options
    Choice {
        options: Vec<String>,
        default: String,
        label: String,
    },

    /// Boolean toggle
    Toggle { enabled: bool, label: String },

    /// Free-text value, e.g. a timestamp overlay caption
    Text { default: String, label: String },
}

impl OptionDescriptor {
    /// Human-readable label for this knob
    pub fn label(&self) -> &str {
        match self {
            OptionDescriptor::Range { label, .. }
            | OptionDescriptor::Choice { label, .. }
            | OptionDescriptor::Toggle { label, .. }
            | OptionDescriptor::Text { label, .. } => label,
        }
    }

    /// Check the descriptor's own declared bounds
    pub fn validate(&self) -> std::result::Result<(), String> {
        match self {
            OptionDescriptor::Range {
                min, max, default, ..
            } => {
                if min > max {
                    return Err(format!("empty range {}..{}", min, max));
                }
                if default < min || default > max {
                    return Err(format!("default {} outside {}..{}", default, min, max));
                }
                Ok(())
            }
            OptionDescriptor::Choice {
                options, default, ..
            } => {
                if options.is_empty() {
                    return Err("no choices listed".to_string());
                }
                if !options.contains(default) {
                    return Err(format!("default '{}' not among the choices", default));
                }
                Ok(())
            }
            OptionDescriptor::Toggle { .. } | OptionDescriptor::Text { .. } => Ok(()),
        }
    }

    /// Whether a user-supplied value satisfies this descriptor
    pub fn accepts(&self, value: &OptionValue) -> bool {
        match self {
            OptionDescriptor::Range { min, max, .. } => value
                .as_f64()
                .map(|v| v >= *min && v <= *max)
                .unwrap_or(false),
            OptionDescriptor::Choice { options, .. } => value
                .as_str()
                .map(|v| options.iter().any(|o| o == v))
                .unwrap_or(false),
            OptionDescriptor::Toggle { .. } => value.as_bool().is_some(),
            OptionDescriptor::Text { .. } => value.as_str().is_some(),
        }
    }
}

/// A user-supplied customization value, as decoded from the request payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl OptionValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            OptionValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Number(value)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

/// The optional `custom_options` payload of a processing request
pub type CustomOptions = BTreeMap<String, OptionValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decade_roundtrip() {
        for decade in Decade::ALL {
            let parsed: Decade = decade.as_str().parse().unwrap();
            assert_eq!(parsed, decade);
        }
    }

    #[test]
    fn test_unknown_decade_key_rejected() {
        let err = "1850s".parse::<Decade>().unwrap_err();
        assert!(matches!(err, PresetError::UnknownDecade { key } if key == "1850s"));
    }

    #[test]
    fn test_decade_serializes_to_wire_key() {
        let json = serde_json::to_string(&Decade::D1980s).unwrap();
        assert_eq!(json, "\"1980s\"");
    }

    #[test]
    fn test_range_descriptor_bounds() {
        let good = OptionDescriptor::Range {
            min: 0.5,
            max: 1.5,
            default: 1.0,
            label: "Sepia Intensity".to_string(),
        };
        assert!(good.validate().is_ok());

        let bad = OptionDescriptor::Range {
            min: 0.5,
            max: 1.5,
            default: 2.0,
            label: "Sepia Intensity".to_string(),
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_choice_descriptor_default_membership() {
        let bad = OptionDescriptor::Choice {
            options: vec!["classic".to_string(), "none".to_string()],
            default: "art_deco".to_string(),
            label: "Vignette Style".to_string(),
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_descriptor_accepts() {
        let range = OptionDescriptor::Range {
            min: 5.0,
            max: 25.0,
            default: 12.0,
            label: "VHS Static".to_string(),
        };
        assert!(range.accepts(&OptionValue::from(12.0)));
        assert!(!range.accepts(&OptionValue::from(40.0)));
        assert!(!range.accepts(&OptionValue::from(true)));

        let toggle = OptionDescriptor::Toggle {
            enabled: true,
            label: "VHS Scanlines".to_string(),
        };
        assert!(toggle.accepts(&OptionValue::from(false)));
        assert!(!toggle.accepts(&OptionValue::from("yes")));

        let choice = OptionDescriptor::Choice {
            options: vec!["classic".to_string(), "art_deco".to_string()],
            default: "classic".to_string(),
            label: "Vignette Style".to_string(),
        };
        assert!(choice.accepts(&OptionValue::from("art_deco")));
        assert!(!choice.accepts(&OptionValue::from("grunge")));
    }

    #[test]
    fn test_descriptor_wire_shapes() {
        let range = OptionDescriptor::Range {
            min: 0.5,
            max: 1.5,
            default: 1.0,
            label: "Sepia Intensity".to_string(),
        };
        let value = serde_json::to_value(&range).unwrap();
        assert_eq!(value["min"], 0.5);
        assert_eq!(value["label"], "Sepia Intensity");
        assert!(value.get("enabled").is_none());

        let toggle = OptionDescriptor::Toggle {
            enabled: true,
            label: "Film Flicker Effect".to_string(),
        };
        let value = serde_json::to_value(&toggle).unwrap();
        assert_eq!(value["enabled"], true);
        assert!(value.get("min").is_none());
    }

    #[test]
    fn test_custom_options_decoding() {
        let decoded: CustomOptions =
            serde_json::from_str(r#"{"static_level": 14, "scanlines_enabled": false, "timestamp_text": "01/01/88 09:00"}"#)
                .unwrap();
        assert_eq!(decoded["static_level"], OptionValue::Number(14.0));
        assert_eq!(decoded["scanlines_enabled"], OptionValue::Bool(false));
        assert_eq!(
            decoded["timestamp_text"],
            OptionValue::Text("01/01/88 09:00".to_string())
        );
    }
}
