use std::fs;
use std::path::{Path, PathBuf};

use actix_multipart::form::tempfile::TempFile;

use crate::error::ApiError;

/// Directory uploaded images are persisted to, wired through app data.
#[derive(Clone)]
pub struct UploadDir(pub PathBuf);

impl UploadDir {
    pub fn from_env() -> Self {
        let dir = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "./uploads".to_string());
        Self(PathBuf::from(dir))
    }
}

/// Build the stored file name: `image-<millis><ext>`, keeping the original
/// extension when there is one.
fn image_file_name(original: Option<&str>, now_millis: i64) -> String {
    let ext = original
        .and_then(|name| Path::new(name).extension())
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default();

    format!("image-{now_millis}{ext}")
}

/// Persist an uploaded image under the uploads directory and return the
/// relative path stored on the service record. Non-image uploads are
/// rejected before anything touches disk.
pub fn save_image(dir: &UploadDir, file: &TempFile) -> Result<String, ApiError> {
    let is_image = file
        .content_type
        .as_ref()
        .map(|mime| mime.essence_str().starts_with("image/"))
        .unwrap_or(false);

    if !is_image {
        return Err(ApiError::Validation(
            "Uploaded file must be an image".to_string(),
        ));
    }

    fs::create_dir_all(&dir.0)
        .map_err(|e| ApiError::Internal(format!("Failed to create upload directory: {e}")))?;

    let name = image_file_name(
        file.file_name.as_deref(),
        chrono::Utc::now().timestamp_millis(),
    );
    let dest = dir.0.join(&name);

    // The temp file may sit on another filesystem; copy instead of rename.
    fs::copy(file.file.path(), &dest)
        .map_err(|e| ApiError::Internal(format!("Failed to store upload: {e}")))?;

    Ok(format!("uploads/{name}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_the_original_extension() {
        assert_eq!(
            image_file_name(Some("cover photo.png"), 1700000000123),
            "image-1700000000123.png"
        );
        assert_eq!(
            image_file_name(Some("logo.JPEG"), 42),
            "image-42.JPEG"
        );
    }

    #[test]
    fn no_extension_when_the_original_has_none() {
        assert_eq!(image_file_name(Some("cover"), 42), "image-42");
        assert_eq!(image_file_name(None, 42), "image-42");
    }
}
