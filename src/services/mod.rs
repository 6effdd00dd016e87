//! Service layer for the Pinnacle API.

pub mod files;

pub use files::{FilesService, FilesServiceTrait};
