//! core/mime.rs
//! Cover image loading: extension -> MIME type, plus the raw bytes.

use std::path::Path;

use super::error::CoverError;
use super::types::CoverImage;

/// MIME type for an image file extension (case-insensitive, no leading dot).
pub fn mime_for_extension(ext: &str) -> Option<&'static str> {
    let mime = match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" | "jpe" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        "tif" | "tiff" => "image/tiff",
        _ => return None,
    };
    Some(mime)
}

/// Read a cover image from disk and tag it with its MIME type.
///
/// The extension is checked first so an unknown type fails without any IO.
pub fn load_cover(path: &Path) -> Result<CoverImage, CoverError> {
    let mime_type = path
        .extension()
        .and_then(|e| e.to_str())
        .and_then(mime_for_extension)
        .ok_or_else(|| CoverError::UnknownExtension {
            path: path.to_path_buf(),
        })?;

    let data = std::fs::read(path).map_err(|source| CoverError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(CoverImage {
        data,
        mime_type: mime_type.to_string(),
    })
}
