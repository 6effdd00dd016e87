//! Files service implementation.

use super::{mime_for_path, UploadRequest, UploadResults};
use crate::auth::AuthManager;
use crate::errors::{NetworkError, PinnacleError, PinnacleResult};
use crate::transport::{HttpTransport, JsonRequest, RawPutRequest};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::instrument;

/// Trait for files service operations
#[async_trait]
pub trait FilesServiceTrait: Send + Sync {
    /// Request a presigned upload/download URL pair
    async fn upload(&self, request: UploadRequest) -> PinnacleResult<UploadResults>;

    /// Upload a local file and return its download URL
    ///
    /// Derives the MIME type from the file extension, requests a presigned
    /// URL, and PUTs the file bytes to storage.
    async fn upload_from_path(
        &self,
        path: PathBuf,
        name: Option<String>,
    ) -> PinnacleResult<String>;
}

/// Files service implementation
pub struct FilesService {
    transport: Arc<dyn HttpTransport>,
    auth: AuthManager,
    base_url: String,
}

impl FilesService {
    /// Create a new files service
    pub fn new(transport: Arc<dyn HttpTransport>, auth: AuthManager, base_url: String) -> Self {
        Self {
            transport,
            auth,
            base_url,
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint)
    }

    async fn read_file(&self, path: &Path) -> PinnacleResult<Vec<u8>> {
        tokio::fs::read(path)
            .await
            .map_err(|e| PinnacleError::Network(NetworkError::Io(e.to_string())))
    }
}

#[async_trait]
impl FilesServiceTrait for FilesService {
    #[instrument(skip(self), fields(content_type = %request.content_type, size = request.size))]
    async fn upload(&self, request: UploadRequest) -> PinnacleResult<UploadResults> {
        let url = self.build_url("tools/files/upload");
        let headers = self.auth.get_headers()?;
        let body = serde_json::to_value(&request)
            .map_err(|e| PinnacleError::Response(e.into()))?;

        let value = self
            .transport
            .send_json(JsonRequest::post(url, headers, body))
            .await?;

        serde_json::from_value(value).map_err(|e| PinnacleError::Response(e.into()))
    }

    #[instrument(skip(self), fields(path = %path.display()))]
    async fn upload_from_path(
        &self,
        path: PathBuf,
        name: Option<String>,
    ) -> PinnacleResult<String> {
        let metadata = tokio::fs::metadata(&path).await.map_err(|_| {
            PinnacleError::not_found(format!("file not found: {}", path.display()))
        })?;

        if metadata.is_dir() {
            return Err(PinnacleError::bad_request(format!(
                "path is a directory, not a file: {}",
                path.display()
            )));
        }

        let content_type = mime_for_path(&path);
        let file_name = name.or_else(|| {
            path.file_name()
                .and_then(|n| n.to_str())
                .map(String::from)
        });

        let mut request = UploadRequest::new(content_type.clone(), metadata.len());
        if let Some(file_name) = file_name {
            request = request.name(file_name);
        }

        let results = self.upload(request).await?;

        if let Some(upload_url) = &results.upload_url {
            let content = self.read_file(&path).await?;
            self.transport
                .put_raw(RawPutRequest::new(upload_url, content_type, content))
                .await?;
        }

        Ok(results.download_url)
    }
}
