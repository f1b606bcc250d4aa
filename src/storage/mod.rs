//! Garden data loading.
//!
//! The view layer never persists anything. This module reads the JSON
//! snapshot the data layer exports and checks the invariants the derivations
//! rely on (unique ids per collection, crop positions within 0-100).

pub mod snapshot;

pub use snapshot::{load_or_empty, load_snapshot, parse_snapshot, GardenSnapshot};

use crate::entities::ModuleId;
use std::path::PathBuf;

/// Errors raised while loading or validating a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to read snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate id '{id}' in {module}")]
    DuplicateId { module: ModuleId, id: String },

    #[error("Item '{id}' in {module} has image position {position}, expected 0-100")]
    InvalidImagePosition { module: ModuleId, id: String, position: u8 },
}

pub type StorageResult<T> = Result<T, StorageError>;
