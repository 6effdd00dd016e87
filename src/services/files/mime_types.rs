//! MIME type derivation for file uploads.
//!
//! The platform accepts a fixed set of media and document types. Extensions
//! are resolved through a curated table first, then through `mime_guess`;
//! anything the platform does not list degrades to `application/octet-stream`,
//! except audio/video/image types, which are sent as-is since newer codecs
//! may be accepted before this table catches up.

use std::path::Path;
use tracing::warn;

/// MIME types the platform documents as supported
const SUPPORTED_MIME_TYPES: &[&str] = &[
    "audio/mpeg",
    "audio/mp4",
    "audio/ogg",
    "audio/aac",
    "audio/webm",
    "audio/wav",
    "audio/3gpp",
    "audio/amr",
    "video/mp4",
    "video/mpeg",
    "video/quicktime",
    "video/webm",
    "video/3gpp",
    "video/H264",
    "video/x-m4v",
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/bmp",
    "image/tiff",
    "image/webp",
    "application/pdf",
    "text/csv",
    "application/rtf",
    "text/vcard",
    "text/calendar",
];

/// Extension-to-MIME table for types `mime_guess` resolves differently
/// than the platform expects
const MIME_TYPES: &[(&str, &str)] = &[
    ("mp3", "audio/mpeg"),
    ("mp4", "video/mp4"),
    ("ogg", "audio/ogg"),
    ("aac", "audio/aac"),
    ("webm", "video/webm"),
    ("wav", "audio/wav"),
    ("3gp", "video/3gpp"),
    ("3gpp", "video/3gpp"),
    ("amr", "audio/amr"),
    ("mpeg", "video/mpeg"),
    ("mpg", "video/mpeg"),
    ("mov", "video/quicktime"),
    ("m4v", "video/x-m4v"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("bmp", "image/bmp"),
    ("tiff", "image/tiff"),
    ("tif", "image/tiff"),
    ("webp", "image/webp"),
    ("pdf", "application/pdf"),
    ("csv", "text/csv"),
    ("rtf", "application/rtf"),
    ("vcf", "text/vcard"),
    ("vcard", "text/vcard"),
    ("ics", "text/calendar"),
];

/// Derive the MIME type to upload a file under
pub fn mime_for_path(path: &Path) -> String {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let mime_type = ext
        .as_deref()
        .and_then(|ext| {
            MIME_TYPES
                .iter()
                .find(|(known, _)| *known == ext)
                .map(|(_, mime)| mime.to_string())
        })
        .or_else(|| {
            mime_guess::from_path(path)
                .first()
                .map(|mime| mime.to_string())
        });

    let mime_type = match mime_type {
        Some(mime_type) => mime_type,
        None => return mime::APPLICATION_OCTET_STREAM.to_string(),
    };

    if SUPPORTED_MIME_TYPES.contains(&mime_type.as_str()) {
        return mime_type;
    }

    let base_type = mime_type.split('/').next().unwrap_or_default();
    if matches!(base_type, "audio" | "video" | "image") {
        warn!(
            mime_type = %mime_type,
            "MIME type may not be fully supported, proceeding anyway"
        );
        mime_type
    } else {
        mime::APPLICATION_OCTET_STREAM.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curated_table_lookup() {
        assert_eq!(mime_for_path(Path::new("photo.JPG")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("clip.mov")), "video/quicktime");
        assert_eq!(mime_for_path(Path::new("contact.vcf")), "text/vcard");
        assert_eq!(mime_for_path(Path::new("doc.pdf")), "application/pdf");
    }

    #[test]
    fn test_unknown_extension_falls_back_to_octet_stream() {
        assert_eq!(
            mime_for_path(Path::new("data.xyzzy")),
            "application/octet-stream"
        );
        assert_eq!(mime_for_path(Path::new("no_extension")), "application/octet-stream");
    }

    #[test]
    fn test_unsupported_document_type_degrades() {
        // text/plain is resolvable but not on the supported list.
        assert_eq!(mime_for_path(Path::new("notes.txt")), "application/octet-stream");
    }

    #[test]
    fn test_unlisted_media_type_is_kept() {
        // SVG is an image type the table does not list; sent as-is.
        assert_eq!(mime_for_path(Path::new("logo.svg")), "image/svg+xml");
    }
}
