use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Main configuration for the oldfilms server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP listener settings
    pub server: ServerConfig,

    /// Working directories for transient files
    pub storage: StorageConfig,

    /// External transcoder invocation settings
    pub encoder: EncoderConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            storage: StorageConfig::default(),
            encoder: EncoderConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|_| ConfigError::ParseFailed {
            path: path.display().to_string(),
        })?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            key: "config".to_string(),
            value: e.to_string(),
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.server.validate()?;
        self.storage.validate()?;
        self.encoder.validate()?;
        Ok(())
    }
}

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to; 0.0.0.0 also serves other devices on the network
    pub host: String,

    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl ServerConfig {
    fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "server.host".to_string(),
                value: self.host.clone(),
            }
            .into());
        }

        if self.port == 0 {
            return Err(ConfigError::InvalidValue {
                key: "server.port".to_string(),
                value: self.port.to_string(),
            }
            .into());
        }

        Ok(())
    }
}

/// Working-directory configuration
///
/// Uploaded inputs and processed outputs land in separate directories.
/// Neither is cleaned up automatically.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory for uploaded source videos
    pub upload_dir: PathBuf,

    /// Directory for processed output videos
    pub processed_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("uploads"),
            processed_dir: PathBuf::from("processed"),
        }
    }
}

impl StorageConfig {
    fn validate(&self) -> Result<()> {
        if self.upload_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "storage.upload_dir".to_string(),
                value: String::new(),
            }
            .into());
        }

        if self.processed_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "storage.processed_dir".to_string(),
                value: String::new(),
            }
            .into());
        }

        Ok(())
    }
}

/// External transcoder configuration
///
/// Defaults reproduce the fixed encoding parameters the product ships with;
/// overriding them changes the quality/size trade-off of every output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Program name or path of the ffmpeg binary
    pub ffmpeg: String,

    /// Video codec passed as `-c:v`
    pub video_codec: String,

    /// Encoding preset passed as `-preset`
    pub preset: String,

    /// Constant rate factor passed as `-crf` (0-51, lower is better)
    pub crf: u8,

    /// Audio codec passed as `-c:a`
    pub audio_codec: String,

    /// Audio bitrate passed as `-b:a`
    pub audio_bitrate: String,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            ffmpeg: "ffmpeg".to_string(),
            video_codec: "libx264".to_string(),
            preset: "medium".to_string(),
            crf: 23,
            audio_codec: "aac".to_string(),
            audio_bitrate: "128k".to_string(),
        }
    }
}

impl EncoderConfig {
    fn validate(&self) -> Result<()> {
        if self.ffmpeg.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "encoder.ffmpeg".to_string(),
                value: String::new(),
            }
            .into());
        }

        if self.crf > 51 {
            return Err(ConfigError::InvalidValue {
                key: "encoder.crf".to_string(),
                value: self.crf.to_string(),
            }
            .into());
        }

        if self.video_codec.is_empty() || self.audio_codec.is_empty() || self.audio_bitrate.is_empty()
        {
            return Err(ConfigError::InvalidValue {
                key: "encoder.codecs".to_string(),
                value: format!(
                    "{}/{}/{}",
                    self.video_codec, self.audio_codec, self.audio_bitrate
                ),
            }
            .into());
        }

        Ok(())
    }
}
