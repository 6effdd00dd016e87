//! Files service for the Pinnacle API.
//!
//! Wraps the presigned-URL upload flow: `POST tools/files/upload` returns
//! an upload/download URL pair, and the file bytes are PUT directly to
//! object storage.

mod mime_types;
mod requests;
mod responses;
mod service;

pub use mime_types::mime_for_path;
pub use requests::{DownloadOptions, UploadOptions, UploadRequest};
pub use responses::UploadResults;
pub use service::{FilesService, FilesServiceTrait};
