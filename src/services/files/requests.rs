//! Request types for the files service.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Request for a presigned upload URL
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    /// MIME type of the file
    pub content_type: String,
    /// File size in bytes
    pub size: u64,
    /// Filename to store the upload under
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Upload options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<UploadOptions>,
}

impl UploadRequest {
    /// Create a new upload request
    pub fn new(content_type: impl Into<String>, size: u64) -> Self {
        Self {
            content_type: content_type.into(),
            size,
            name: None,
            options: None,
        }
    }

    /// Set the stored filename
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set upload options
    pub fn options(mut self, options: UploadOptions) -> Self {
        self.options = Some(options);
        self
    }
}

/// Options applied to an upload
#[derive(Debug, Clone, Default, Serialize)]
pub struct UploadOptions {
    /// Download URL options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download: Option<DownloadOptions>,
}

/// Options applied to the presigned download URL
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadOptions {
    /// When the presigned download URL expires
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_upload_request_serialization() {
        let request = UploadRequest::new("image/png", 1024).name("photo.png");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({"contentType": "image/png", "size": 1024, "name": "photo.png"})
        );
    }
}
