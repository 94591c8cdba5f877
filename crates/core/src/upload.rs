//! Stamp upload validation and naming.
//!
//! Uploaded stamp images are stored under a server-generated UUID filename
//! (the original name is client-controlled and untrusted); only the
//! extension survives, and only if it belongs to an allowed image type.

use crate::error::CoreError;
use uuid::Uuid;

/// Content types accepted for stamp images.
pub const ALLOWED_CONTENT_TYPES: &[&str] = &["image/png", "image/jpeg"];

/// File extensions accepted for stamp images (lowercase).
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Validate an upload's declared content type.
pub fn validate_content_type(content_type: &str) -> Result<(), CoreError> {
    if ALLOWED_CONTENT_TYPES.contains(&content_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "File type {content_type} is not allowed. Allowed types: {}",
            ALLOWED_CONTENT_TYPES.join(", ")
        )))
    }
}

/// Validate an upload's size against the configured cap.
pub fn validate_size(size_bytes: usize, max_bytes: usize) -> Result<(), CoreError> {
    if size_bytes == 0 {
        return Err(CoreError::Validation("Uploaded file is empty".to_string()));
    }
    if size_bytes > max_bytes {
        return Err(CoreError::Validation(format!(
            "File size exceeds maximum allowed size of {} bytes",
            max_bytes
        )));
    }
    Ok(())
}

/// Generate a unique storage filename, keeping the original extension.
///
/// Fails if the original filename has no extension or an extension outside
/// the allowlist.
pub fn unique_filename(original: &str) -> Result<String, CoreError> {
    let ext = original
        .rsplit_once('.')
        .map(|(_, e)| e.to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .ok_or_else(|| {
            CoreError::Validation(format!("Filename '{original}' has no extension"))
        })?;

    if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        return Err(CoreError::Validation(format!(
            "File extension '.{ext}' is not allowed. Allowed extensions: {}",
            ALLOWED_EXTENSIONS.join(", ")
        )));
    }

    Ok(format!("{}.{ext}", Uuid::new_v4()))
}
