use std::path::{Path, PathBuf};

use actix_multipart::{Field, Multipart};
use chrono::Local;
use futures_util::StreamExt;
use sanitize_filename::sanitize;
use tokio::{fs::File, io::AsyncWriteExt};
use tracing::warn;
use uuid::Uuid;

use crate::error::{OldfilmsError, Result, UploadError};
use crate::presets::{CustomOptions, Decade};

/// Upload extensions accepted, checked case-insensitively against the
/// filename's final extension before anything is written to disk
pub const ALLOWED_EXTENSIONS: [&str; 5] = ["mp4", "mov", "avi", "webm", "mkv"];

/// Decade applied when the form omits one
pub const DEFAULT_DECADE: Decade = Decade::D1980s;

/// One decoded `/api/process-video` submission
///
/// The timestamp and id are generated per request and embedded in every
/// derived filename, which is what keeps concurrent requests from
/// colliding on disk.
pub struct ProcessingRequest {
    pub input_path: PathBuf,
    pub decade: Decade,
    pub custom_options: Option<CustomOptions>,
    pub timestamp: String,
    pub id: String,
}

/// Whether a client filename passes the extension allow-list
pub fn allowed_file(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Working filename for an uploaded input
pub fn input_filename(timestamp: &str, id: &str) -> String {
    format!("{}_{}_input.mp4", timestamp, id)
}

/// Working filename for a processed output
pub fn output_filename(timestamp: &str, id: &str, decade: Decade) -> String {
    format!("{}_{}_{}_output.mp4", timestamp, id, decade)
}

/// Attachment name offered to the client on success
pub fn download_filename(decade: Decade, timestamp: &str) -> String {
    format!("{}-vintage-{}.mp4", decade, timestamp)
}

/// Drain a multipart payload into a [`ProcessingRequest`]
///
/// The extension allow-list is enforced before the first byte of the video
/// is written. A missing video field fails with
/// [`UploadError::MissingInput`]; a malformed `custom_options` payload is
/// tolerated and ignored with a warning.
pub async fn receive(mut payload: Multipart, upload_dir: &Path) -> Result<ProcessingRequest> {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
    let id = Uuid::new_v4().simple().to_string();

    let mut input_path: Option<PathBuf> = None;
    let mut decade: Option<Decade> = None;
    let mut custom_options: Option<CustomOptions> = None;

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|err| OldfilmsError::generic(err.to_string()))?;
        let disposition = field.content_disposition().clone();
        let name = disposition.get_name().unwrap_or("").to_string();

        match name.as_str() {
            "video" => {
                let filename = disposition.get_filename().map(sanitize).unwrap_or_default();
                if !allowed_file(&filename) {
                    let extension = Path::new(&filename)
                        .extension()
                        .and_then(|ext| ext.to_str())
                        .unwrap_or("")
                        .to_ascii_lowercase();
                    return Err(UploadError::InvalidFileType { extension }.into());
                }

                let path = upload_dir.join(input_filename(&timestamp, &id));
                let mut file = File::create(&path).await?;
                while let Some(chunk) = field.next().await {
                    let bytes = chunk.map_err(|err| OldfilmsError::generic(err.to_string()))?;
                    file.write_all(&bytes).await?;
                }
                file.flush().await?;
                input_path = Some(path);
            }
            "decade" => {
                let value = read_text_field(&mut field).await?;
                if !value.is_empty() {
                    decade = Some(value.parse::<Decade>()?);
                }
            }
            "custom_options" => {
                let value = read_text_field(&mut field).await?;
                match serde_json::from_str::<CustomOptions>(&value) {
                    Ok(options) => custom_options = Some(options),
                    Err(err) => warn!("Ignoring malformed custom_options payload: {}", err),
                }
            }
            other => {
                warn!("Ignoring unexpected multipart field '{}'", other);
                while let Some(chunk) = field.next().await {
                    chunk.map_err(|err| OldfilmsError::generic(err.to_string()))?;
                }
            }
        }
    }

    let input_path = input_path.ok_or(UploadError::MissingInput {
        field: "video file".to_string(),
    })?;

    Ok(ProcessingRequest {
        input_path,
        decade: decade.unwrap_or(DEFAULT_DECADE),
        custom_options,
        timestamp,
        id,
    })
}

async fn read_text_field(field: &mut Field) -> Result<String> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.next().await {
        let data = chunk.map_err(|err| OldfilmsError::generic(err.to_string()))?;
        bytes.extend_from_slice(&data);
    }
    Ok(String::from_utf8_lossy(&bytes).trim().to_string())
}
