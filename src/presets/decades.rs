//! The ten hand-tuned decade presets.
//!
//! Every constant here (frame rate, max output height, filter expressions,
//! option ranges) is part of the product's visible behavior. The entries are
//! independently authored; none is derived from another.

use std::collections::BTreeMap;

use super::types::{DecadePreset, OptionDescriptor};

fn filters(list: &[&str]) -> Vec<String> {
    list.iter().map(|f| f.to_string()).collect()
}

fn options(entries: Vec<(&str, OptionDescriptor)>) -> BTreeMap<String, OptionDescriptor> {
    entries
        .into_iter()
        .map(|(key, descriptor)| (key.to_string(), descriptor))
        .collect()
}

fn range(min: f64, max: f64, default: f64, label: &str) -> OptionDescriptor {
    OptionDescriptor::Range {
        min,
        max,
        default,
        label: label.to_string(),
    }
}

fn toggle(enabled: bool, label: &str) -> OptionDescriptor {
    OptionDescriptor::Toggle {
        enabled,
        label: label.to_string(),
    }
}

fn choice(choices: &[&str], default: &str, label: &str) -> OptionDescriptor {
    OptionDescriptor::Choice {
        options: choices.iter().map(|c| c.to_string()).collect(),
        default: default.to_string(),
        label: label.to_string(),
    }
}

fn text(default: &str, label: &str) -> OptionDescriptor {
    OptionDescriptor::Text {
        default: default.to_string(),
        label: label.to_string(),
    }
}

pub(super) fn early_cinema() -> DecadePreset {
    DecadePreset {
        name: "1900s - Early Cinema".to_string(),
        description: "Hand-cranked cameras, sepia tone, heavy scratches".to_string(),
        fps: 12,
        max_height: 240,
        filters: filters(&[
            // sepia tone mix
            "colorchannelmixer=.393:.769:.189:0:.349:.686:.168:0:.272:.534:.131",
            "noise=alls=20:allf=t",
            "eq=brightness=0.1:contrast=1.3:gamma=1.2",
            "vignette=angle=3.14/2",
            "fps=12",
        ]),
        customizable: true,
        options: options(vec![
            ("sepia_intensity", range(0.5, 1.5, 1.0, "Sepia Intensity")),
            ("scratches_level", range(30.0, 70.0, 50.0, "Film Scratches")),
            ("vignette_strength", range(0.3, 1.0, 0.7, "Vignette Effect")),
            ("flicker_enabled", toggle(true, "Film Flicker Effect")),
            ("frame_rate", range(8.0, 18.0, 12.0, "Playback Speed (fps)")),
        ]),
    }
}

pub(super) fn silent_films() -> DecadePreset {
    DecadePreset {
        name: "1910s - Silent Films".to_string(),
        description: "Charlie Chaplin era, flickering, title cards".to_string(),
        fps: 16,
        max_height: 360,
        filters: filters(&[
            // monochrome mix
            "colorchannelmixer=.3:.6:.1:0:.3:.6:.1:0:.3:.6:.1",
            "noise=alls=40:allf=t",
            "eq=brightness=0.15:contrast=1.35:gamma=1.25",
            "fps=16",
        ]),
        customizable: true,
        options: options(vec![
            ("contrast_level", range(1.0, 2.0, 1.35, "Film Contrast")),
            ("grain_intensity", range(20.0, 60.0, 40.0, "Film Grain")),
            ("flicker_enabled", toggle(true, "Silent Film Flicker")),
            ("title_card_enabled", toggle(false, "Add Title Card")),
            ("title_card_text", text("SILENT FILM", "Title Card Text")),
        ]),
    }
}

pub(super) fn jazz_age() -> DecadePreset {
    DecadePreset {
        name: "1920s - Jazz Age Films".to_string(),
        description: "Art deco style, high contrast black & white".to_string(),
        fps: 18,
        max_height: 480,
        filters: filters(&[
            "hue=s=0",
            "noise=alls=35:allf=t",
            "eq=brightness=0.1:contrast=1.3:gamma=1.2",
            "vignette=angle=PI/3",
            "fps=18",
        ]),
        customizable: true,
        options: options(vec![
            ("contrast_boost", range(1.1, 1.8, 1.3, "Art Deco Contrast")),
            ("grain_level", range(15.0, 50.0, 35.0, "Film Grain")),
            (
                "vignette_style",
                choice(&["classic", "art_deco", "none"], "classic", "Vignette Style"),
            ),
            ("glamour_glow", toggle(false, "Hollywood Glamour Glow")),
        ]),
    }
}

pub(super) fn golden_age() -> DecadePreset {
    DecadePreset {
        name: "1930s - Golden Age".to_string(),
        description: "Early talkies, soft focus, dramatic lighting".to_string(),
        fps: 24,
        max_height: 540,
        filters: filters(&[
            "hue=s=0",
            "noise=alls=25:allf=t",
            "eq=brightness=0.05:contrast=1.25:gamma=1.15",
            "gblur=sigma=0.5",
            "fps=24",
        ]),
        customizable: true,
        options: options(vec![
            ("soft_focus", range(0.2, 1.5, 0.5, "Soft Focus Intensity")),
            ("dramatic_lighting", range(0.8, 1.5, 1.25, "Dramatic Contrast")),
            ("film_quality", range(10.0, 40.0, 25.0, "Film Grain")),
            ("golden_tone", toggle(false, "Subtle Golden Tint")),
        ]),
    }
}

pub(super) fn war_era() -> DecadePreset {
    DecadePreset {
        name: "1940s - War Era".to_string(),
        description: "Film noir style, high contrast, dramatic shadows".to_string(),
        fps: 24,
        max_height: 540,
        filters: filters(&[
            "hue=s=0",
            "noise=alls=20:allf=t",
            "eq=brightness=0.0:contrast=1.4:gamma=1.1",
            "fps=24",
        ]),
        customizable: true,
        options: options(vec![
            ("noir_contrast", range(1.2, 2.0, 1.4, "Film Noir Contrast")),
            ("shadow_depth", range(-0.3, 0.1, 0.0, "Shadow Intensity")),
            ("film_grain", range(10.0, 35.0, 20.0, "Wartime Film Quality")),
            ("cigarette_haze", toggle(false, "Atmospheric Haze Effect")),
        ]),
    }
}

pub(super) fn technicolor() -> DecadePreset {
    DecadePreset {
        name: "1950s - Technicolor Era".to_string(),
        description: "Early color films, saturated colors, film grain".to_string(),
        fps: 24,
        max_height: 540,
        filters: filters(&[
            "colorbalance=rs=0.1:gs=-0.05:bs=-0.1",
            "hue=s=1.3:h=5",
            "noise=alls=18:allf=t",
            "eq=brightness=0.08:contrast=1.2",
            "fps=24",
        ]),
        customizable: true,
        options: options(vec![
            (
                "technicolor_saturation",
                range(1.0, 2.0, 1.3, "Technicolor Saturation"),
            ),
            ("color_shift", range(-10.0, 15.0, 5.0, "Color Temperature Shift")),
            ("film_grain", range(8.0, 30.0, 18.0, "Color Film Grain")),
            ("vibrant_reds", toggle(true, "Enhanced Red Channel")),
            ("golden_glow", toggle(false, "Hollywood Golden Glow")),
        ]),
    }
}

pub(super) fn kodachrome() -> DecadePreset {
    DecadePreset {
        name: "1960s - Kodachrome".to_string(),
        description: "Vibrant colors, slight oversaturation, film texture".to_string(),
        fps: 24,
        max_height: 720,
        filters: filters(&[
            // gentle warm tone
            "colorbalance=rs=0.1:gs=0.05:bs=-0.05",
            "hue=s=1.2:h=-3",
            "noise=alls=15:allf=t",
            "eq=brightness=0.05:contrast=1.15",
            "fps=24",
        ]),
        customizable: true,
        options: options(vec![
            ("kodachrome_look", range(1.0, 1.8, 1.2, "Kodachrome Saturation")),
            ("warm_tone", range(-8.0, 5.0, -3.0, "Warm Color Cast")),
            ("film_texture", range(5.0, 25.0, 15.0, "Film Texture")),
            ("psychedelic_boost", toggle(false, "Psychedelic Color Boost")),
            ("fade_edges", toggle(false, "Vintage Photo Fade")),
        ]),
    }
}

pub(super) fn super8() -> DecadePreset {
    DecadePreset {
        name: "1970s - Super 8 / 16mm".to_string(),
        description: "Home movies, warm tones, heavy grain".to_string(),
        fps: 18,
        max_height: 720,
        filters: filters(&[
            "colorbalance=rs=0.05:gs=0.1:bs=-0.2",
            "hue=s=0.9:h=-8",
            "noise=alls=22:allf=t",
            "vignette=angle=PI/4",
            "eq=brightness=0.06:contrast=1.12",
            "fps=18",
        ]),
        customizable: true,
        options: options(vec![
            ("super8_grain", range(10.0, 40.0, 22.0, "Super 8 Grain")),
            ("warm_vintage", range(-15.0, 0.0, -8.0, "Warm Vintage Tone")),
            ("home_movie_feel", range(0.7, 1.2, 0.9, "Home Movie Saturation")),
            ("light_leaks", toggle(false, "Light Leak Effects")),
            ("handheld_shake", toggle(false, "Handheld Camera Shake")),
        ]),
    }
}

pub(super) fn vhs() -> DecadePreset {
    DecadePreset {
        name: "1980s - VHS Era".to_string(),
        description: "VHS tapes, scanlines, color bleeding, timestamps".to_string(),
        fps: 25,
        max_height: 480,
        filters: filters(&[
            "colorbalance=rs=0.1:gs=0.1:bs=0.1",
            "noise=alls=12:allf=t",
            "hue=s=1.25:h=8",
            "eq=brightness=0.03:contrast=1.08",
            "fps=25",
        ]),
        customizable: true,
        options: options(vec![
            ("static_level", range(5.0, 25.0, 12.0, "VHS Static")),
            ("color_bleeding", range(1.0, 1.8, 1.25, "Color Bleeding")),
            ("timestamp_enabled", toggle(true, "VHS Timestamp")),
            ("timestamp_text", text("12/25/85 14:30", "Custom Timestamp")),
            ("scanlines_enabled", toggle(true, "VHS Scanlines")),
            ("tracking_issues", toggle(false, "Tracking Problems")),
        ]),
    }
}

pub(super) fn camcorder() -> DecadePreset {
    DecadePreset {
        name: "1990s - Camcorder".to_string(),
        description: "Digital camcorders, auto-focus hunting, date stamps".to_string(),
        fps: 30,
        max_height: 480,
        filters: filters(&[
            "colorbalance=rs=0.05:gs=0.05:bs=0.05",
            "noise=alls=8:allf=t",
            "hue=s=1.1:h=2",
            "eq=brightness=0.02:contrast=1.05",
            "fps=30",
        ]),
        customizable: true,
        options: options(vec![
            ("digital_noise", range(3.0, 15.0, 8.0, "Digital Artifacts")),
            (
                "camcorder_saturation",
                range(0.9, 1.4, 1.1, "Camcorder Color"),
            ),
            ("timestamp_enabled", toggle(true, "Digital Date Stamp")),
            (
                "timestamp_text",
                text("12/25/1995 14:30:45", "Custom Date/Time"),
            ),
            ("auto_focus_enabled", toggle(true, "Auto-focus Hunting")),
            ("zoom_artifacts", toggle(false, "Digital Zoom Artifacts")),
        ]),
    }
}
