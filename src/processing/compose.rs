use tracing::{debug, warn};

use crate::presets::{CustomOptions, DecadePreset};

/// Separator between filter expressions in an ffmpeg `-vf` graph
const FILTER_SEPARATOR: &str = ",";

/// Build the complete `-vf` expression for a preset
///
/// The preset's static filter chain is copied, one aspect-preserving scale
/// step (`scale=-1:<max_height>`) is appended, and the result is joined into
/// a single expression. The output therefore always has exactly one more
/// element than the preset's stored chain.
///
/// Customization values, when present, are validated against the preset's
/// descriptors and logged; the emitted filter values are fixed per decade.
/// See [`validate_options`].
pub fn compose(preset: &DecadePreset, custom_options: Option<&CustomOptions>) -> String {
    let mut chain = preset.filters.clone();
    chain.push(format!("scale=-1:{}", preset.max_height));

    if let Some(options) = custom_options {
        let accepted = validate_options(preset, options);
        debug!(
            "{} of {} customization value(s) accepted for '{}'",
            accepted.len(),
            options.len(),
            preset.name
        );
    }

    chain.join(FILTER_SEPARATOR)
}

/// Filter user-supplied values down to those satisfying the preset's
/// declared descriptors
///
/// Unknown keys and mistyped or out-of-bounds values are dropped with a
/// warning; nothing here fails a request. The accepted set is informational:
/// the composed chain uses the preset's fixed values regardless, and the
/// public contract documents the knobs as declarative metadata for clients.
pub fn validate_options(preset: &DecadePreset, options: &CustomOptions) -> CustomOptions {
    if !preset.customizable {
        warn!(
            "'{}' does not allow customization; ignoring {} value(s)",
            preset.name,
            options.len()
        );
        return CustomOptions::new();
    }

    let mut accepted = CustomOptions::new();
    for (key, value) in options {
        match preset.options.get(key) {
            None => {
                warn!("ignoring unknown customization option '{}'", key);
            }
            Some(descriptor) if !descriptor.accepts(value) => {
                warn!(
                    "ignoring out-of-range value {:?} for option '{}' ({})",
                    value,
                    key,
                    descriptor.label()
                );
            }
            Some(_) => {
                accepted.insert(key.clone(), value.clone());
            }
        }
    }
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::{OptionValue, PresetCatalog};

    #[test]
    fn test_compose_appends_exactly_one_scale_step() {
        let catalog = PresetCatalog::new();

        for (_, preset) in catalog.decades() {
            let graph = compose(preset, None);
            let elements: Vec<&str> = graph.split(',').collect();
            assert_eq!(elements.len(), preset.filters.len() + 1);
        }
    }

    #[test]
    fn test_compose_scales_to_max_height_preserving_aspect() {
        let catalog = PresetCatalog::new();

        for (_, preset) in catalog.decades() {
            let graph = compose(preset, None);
            let expected = format!("scale=-1:{}", preset.max_height);
            assert!(
                graph.ends_with(&expected),
                "'{}' does not end with '{}'",
                graph,
                expected
            );
        }
    }

    #[test]
    fn test_compose_does_not_mutate_the_preset() {
        let catalog = PresetCatalog::new();
        let preset = catalog.get_by_key("1940s").unwrap();
        let before = preset.filters.clone();

        let _ = compose(preset, None);
        let _ = compose(preset, None);

        assert_eq!(preset.filters, before);
    }

    #[test]
    fn test_early_cinema_graph_contents() {
        let catalog = PresetCatalog::new();
        let preset = catalog.get_by_key("1900s").unwrap();
        let graph = compose(preset, None);

        assert!(graph.contains("colorchannelmixer=.393:.769:.189"));
        assert!(graph.contains("noise=alls=20:allf=t"));
        assert!(graph.contains("eq=brightness=0.1:contrast=1.3:gamma=1.2"));
        assert!(graph.contains("vignette="));
        assert!(graph.contains("fps=12"));
        assert!(graph.ends_with("scale=-1:240"));
    }

    #[test]
    fn test_custom_options_leave_the_chain_unchanged() {
        let catalog = PresetCatalog::new();
        let preset = catalog.get_by_key("1980s").unwrap();

        let mut options = CustomOptions::new();
        options.insert("static_level".to_string(), OptionValue::from(20.0));
        options.insert("scanlines_enabled".to_string(), OptionValue::from(false));

        assert_eq!(compose(preset, Some(&options)), compose(preset, None));
    }

    #[test]
    fn test_validate_options_accepts_in_bounds_values() {
        let catalog = PresetCatalog::new();
        let preset = catalog.get_by_key("1980s").unwrap();

        let mut options = CustomOptions::new();
        options.insert("static_level".to_string(), OptionValue::from(20.0));
        options.insert("timestamp_enabled".to_string(), OptionValue::from(false));
        options.insert("timestamp_text".to_string(), OptionValue::from("01/01/88"));

        let accepted = validate_options(preset, &options);
        assert_eq!(accepted.len(), 3);
    }

    #[test]
    fn test_validate_options_drops_unknown_and_out_of_bounds() {
        let catalog = PresetCatalog::new();
        let preset = catalog.get_by_key("1980s").unwrap();

        let mut options = CustomOptions::new();
        // static_level tops out at 25
        options.insert("static_level".to_string(), OptionValue::from(90.0));
        // toggles take booleans, not strings
        options.insert("scanlines_enabled".to_string(), OptionValue::from("on"));
        options.insert("not_a_real_knob".to_string(), OptionValue::from(1.0));

        let accepted = validate_options(preset, &options);
        assert!(accepted.is_empty());
    }

    #[test]
    fn test_validate_options_checks_choice_membership() {
        let catalog = PresetCatalog::new();
        let preset = catalog.get_by_key("1920s").unwrap();

        let mut options = CustomOptions::new();
        options.insert("vignette_style".to_string(), OptionValue::from("art_deco"));
        assert_eq!(validate_options(preset, &options).len(), 1);

        options.insert("vignette_style".to_string(), OptionValue::from("grunge"));
        assert!(validate_options(preset, &options).is_empty());
    }
}
