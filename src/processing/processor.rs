use std::path::Path;
use std::process::Stdio;
use std::sync::Arc;

use tokio::process::Command;
use tracing::{debug, info};

use crate::config::EncoderConfig;
use crate::error::{ConfigError, ProcessError, Result};
use crate::presets::{CustomOptions, Decade, PresetCatalog};

use super::compose;

/// Drives the external transcoder
///
/// Each [`process`](Self::process) call resolves a preset, composes its
/// filtergraph and runs one ffmpeg subprocess to completion. There is no
/// retry, timeout or cancellation; the caller's task is suspended until the
/// subprocess exits. Concurrent calls are independent as long as their
/// output paths differ.
pub struct VideoProcessor {
    encoder: EncoderConfig,
    catalog: Arc<PresetCatalog>,
}

impl VideoProcessor {
    pub fn new(encoder: EncoderConfig, catalog: Arc<PresetCatalog>) -> Self {
        Self { encoder, catalog }
    }

    /// Confirm the transcoder binary can be started at all
    ///
    /// Called once at startup; failure here must block the processing path
    /// from ever being invoked. Returns the encoder's version banner.
    pub async fn probe(&self) -> Result<String> {
        let program =
            which::which(&self.encoder.ffmpeg).map_err(|_| ConfigError::EncoderMissing {
                program: self.encoder.ffmpeg.clone(),
            })?;

        let output = Command::new(&program)
            .arg("-version")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|err| ProcessError::Launch {
                program: self.encoder.ffmpeg.clone(),
                reason: err.to_string(),
            })?;

        if !output.status.success() {
            return Err(ConfigError::EncoderMissing {
                program: self.encoder.ffmpeg.clone(),
            }
            .into());
        }

        let banner = String::from_utf8_lossy(&output.stdout)
            .lines()
            .next()
            .unwrap_or_default()
            .to_string();
        Ok(banner)
    }

    /// Apply `decade`'s look to `input`, writing the result to `output`
    ///
    /// The preset is resolved before anything is launched, so an unknown
    /// decade never spawns a subprocess or touches `output`. Any existing
    /// file at `output` is overwritten. A non-zero exit maps to
    /// [`ProcessError::Transcode`] carrying the transcoder's diagnostics; a
    /// subprocess that cannot be started maps to [`ProcessError::Launch`].
    pub async fn process(
        &self,
        input: &Path,
        output: &Path,
        decade: Decade,
        custom_options: Option<&CustomOptions>,
    ) -> Result<()> {
        let preset = self.catalog.get(decade)?;
        let filtergraph = compose::compose(preset, custom_options);

        info!(
            "Processing {} with {} filter",
            input.display(),
            decade
        );
        debug!("Filtergraph: {}", filtergraph);

        let result = Command::new(&self.encoder.ffmpeg)
            .arg("-i")
            .arg(input)
            .arg("-vf")
            .arg(&filtergraph)
            .args(["-c:v", self.encoder.video_codec.as_str()])
            .args(["-preset", self.encoder.preset.as_str()])
            .args(["-crf", self.encoder.crf.to_string().as_str()])
            .args(["-c:a", self.encoder.audio_codec.as_str()])
            .args(["-b:a", self.encoder.audio_bitrate.as_str()])
            .arg("-y")
            .arg(output)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|err| ProcessError::Launch {
                program: self.encoder.ffmpeg.clone(),
                reason: err.to_string(),
            })?;

        if !result.status.success() {
            let detail = String::from_utf8_lossy(&result.stderr).trim().to_string();
            return Err(ProcessError::Transcode { detail }.into());
        }

        info!("Transcode complete: {}", output.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OldfilmsError;
    use tempfile::tempdir;

    fn processor_with(program: &str) -> VideoProcessor {
        let encoder = EncoderConfig {
            ffmpeg: program.to_string(),
            ..EncoderConfig::default()
        };
        VideoProcessor::new(encoder, Arc::new(PresetCatalog::new()))
    }

    #[tokio::test]
    async fn test_zero_exit_is_success() {
        // `true` ignores its arguments and exits 0, standing in for a
        // transcoder run that succeeded.
        let dir = tempdir().unwrap();
        let processor = processor_with("true");

        let result = processor
            .process(
                &dir.path().join("in.mp4"),
                &dir.path().join("out.mp4"),
                Decade::D1980s,
                None,
            )
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_nonzero_exit_is_transcode_failure() {
        let dir = tempdir().unwrap();
        let processor = processor_with("false");

        let err = processor
            .process(
                &dir.path().join("in.mp4"),
                &dir.path().join("out.mp4"),
                Decade::D1900s,
                None,
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            OldfilmsError::Process(ProcessError::Transcode { .. })
        ));
    }

    #[tokio::test]
    async fn test_unlaunchable_binary_is_launch_failure() {
        let dir = tempdir().unwrap();
        let processor = processor_with("/nonexistent/ffmpeg-missing");
        let output = dir.path().join("out.mp4");

        let err = processor
            .process(&dir.path().join("in.mp4"), &output, Decade::D1960s, None)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            OldfilmsError::Process(ProcessError::Launch { .. })
        ));
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_probe_missing_binary_fails() {
        let processor = processor_with("oldfilms-no-such-encoder");
        let err = processor.probe().await.unwrap_err();
        assert!(matches!(
            err,
            OldfilmsError::Config(ConfigError::EncoderMissing { .. })
        ));
    }

    #[tokio::test]
    async fn test_probe_reports_a_banner() {
        // Any resolvable program that exits 0 will do for the probe itself.
        let processor = processor_with("true");
        assert!(processor.probe().await.is_ok());
    }
}
