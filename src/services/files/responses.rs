//! Response types for the files service.

use serde::Deserialize;

/// Presigned URL pair returned by `POST tools/files/upload`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResults {
    /// URL to PUT the file bytes to; absent when the platform already
    /// hosts the content
    #[serde(default)]
    pub upload_url: Option<String>,
    /// URL the uploaded file can be downloaded from
    pub download_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_upload_results_deserialization() {
        let results: UploadResults = serde_json::from_value(json!({
            "uploadUrl": "https://storage.example/put/key",
            "downloadUrl": "https://storage.example/get/key"
        }))
        .unwrap();
        assert_eq!(
            results.upload_url.as_deref(),
            Some("https://storage.example/put/key")
        );

        let hosted: UploadResults = serde_json::from_value(json!({
            "downloadUrl": "https://storage.example/get/key"
        }))
        .unwrap();
        assert!(hosted.upload_url.is_none());
    }
}
