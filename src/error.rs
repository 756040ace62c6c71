use thiserror::Error;

/// Main error type for the oldfilms library
#[derive(Error, Debug)]
pub enum OldfilmsError {
    #[error("Preset error: {0}")]
    Preset(#[from] PresetError),

    #[error("Upload error: {0}")]
    Upload(#[from] UploadError),

    #[error("Processing error: {0}")]
    Process(#[from] ProcessError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Generic error: {0}")]
    Generic(String),
}

/// Preset-catalog errors
#[derive(Error, Debug)]
pub enum PresetError {
    #[error("Unknown decade: {key}")]
    UnknownDecade { key: String },

    #[error("Invalid preset for {decade}: {detail}")]
    InvalidPreset { decade: String, detail: String },
}

/// Upload-intake errors
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Invalid file type: .{extension}")]
    InvalidFileType { extension: String },

    #[error("Missing input: {field}")]
    MissingInput { field: String },
}

/// Transcoding errors
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Failed to launch {program}: {reason}")]
    Launch { program: String, reason: String },

    #[error("Transcoding failed: {detail}")]
    Transcode { detail: String },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse configuration file: {path}")]
    ParseFailed { path: String },

    #[error("Invalid configuration value: {key} = {value}")]
    InvalidValue { key: String, value: String },

    #[error("Video encoder not found: {program}")]
    EncoderMissing { program: String },
}

/// Convenience type alias for Results using OldfilmsError
pub type Result<T> = std::result::Result<T, OldfilmsError>;

impl OldfilmsError {
    /// Create a generic error with a custom message
    pub fn generic<S: Into<String>>(message: S) -> Self {
        Self::Generic(message.into())
    }

    /// Whether the request that produced this error was at fault,
    /// as opposed to a server-side failure
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Preset(PresetError::UnknownDecade { .. }) | Self::Upload(_)
        )
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Preset(PresetError::UnknownDecade { key }) => {
                format!(
                    "Decade '{}' is not available. Pick one of the decades between 1900s and 1990s.",
                    key
                )
            }
            Self::Upload(UploadError::InvalidFileType { extension }) => {
                format!(
                    "'.{}' files are not supported. Please upload an mp4, mov, avi, webm or mkv video.",
                    extension
                )
            }
            Self::Upload(UploadError::MissingInput { field }) => {
                format!("No {} was provided.", field)
            }
            Self::Process(ProcessError::Launch { program, .. }) => {
                format!(
                    "The video encoder '{}' could not be started. Check that FFmpeg is installed and on your PATH.",
                    program
                )
            }
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_are_classified() {
        let unknown: OldfilmsError = PresetError::UnknownDecade {
            key: "1850s".to_string(),
        }
        .into();
        assert!(unknown.is_client_error());

        let bad_type: OldfilmsError = UploadError::InvalidFileType {
            extension: "txt".to_string(),
        }
        .into();
        assert!(bad_type.is_client_error());

        let transcode: OldfilmsError = ProcessError::Transcode {
            detail: "boom".to_string(),
        }
        .into();
        assert!(!transcode.is_client_error());
    }

    #[test]
    fn user_messages_name_the_problem() {
        let err: OldfilmsError = UploadError::InvalidFileType {
            extension: "txt".to_string(),
        }
        .into();
        assert!(err.user_message().contains(".txt"));

        let err: OldfilmsError = PresetError::UnknownDecade {
            key: "2020s".to_string(),
        }
        .into();
        assert!(err.user_message().contains("2020s"));
    }
}
