use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use super::{StorageError, StorageResult};
use crate::constants::{LOG_SNAPSHOT_LOADED, LOG_SNAPSHOT_MISSING, MAX_IMAGE_POSITION};
use crate::entities::{CalendarTask, Collections, ModuleId, RecentView};

/// Everything the application shell hands to the view layer, as exported by
/// the data layer. Missing arrays default to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GardenSnapshot {
    #[serde(flatten)]
    pub collections: Collections,
    pub calendar: Vec<CalendarTask>,
    /// Most recent first
    pub recent_views: Vec<RecentView>,
}

impl GardenSnapshot {
    /// Check the per-collection invariants.
    pub fn validate(&self) -> StorageResult<()> {
        for module in ModuleId::CATALOGS {
            let mut seen = HashSet::new();
            for item in self.collections.items(module) {
                if !seen.insert(item.id()) {
                    return Err(StorageError::DuplicateId {
                        module,
                        id: item.id().to_string(),
                    });
                }
                if item.image_position() > MAX_IMAGE_POSITION {
                    return Err(StorageError::InvalidImagePosition {
                        module,
                        id: item.id().to_string(),
                        position: item.image_position(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Parse and validate a snapshot from JSON text
pub fn parse_snapshot(json: &str) -> StorageResult<GardenSnapshot> {
    let snapshot: GardenSnapshot = serde_json::from_str(json)?;
    snapshot.validate()?;
    Ok(snapshot)
}

/// Read, parse and validate a snapshot file
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> StorageResult<GardenSnapshot> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let snapshot = parse_snapshot(&content)?;
    log::info!(
        "{}: {} ({} plants, {} fertilizers, {} composting methods, {} growing grounds, {} tips, {} tasks)",
        LOG_SNAPSHOT_LOADED,
        path.display(),
        snapshot.collections.plants.len(),
        snapshot.collections.fertilizers.len(),
        snapshot.collections.composting_methods.len(),
        snapshot.collections.growing_grounds.len(),
        snapshot.collections.seasonal_tips.len(),
        snapshot.calendar.len()
    );
    Ok(snapshot)
}

/// Like [`load_snapshot`], but a missing file gives an empty garden.
pub fn load_or_empty<P: AsRef<Path>>(path: P) -> StorageResult<GardenSnapshot> {
    let path = path.as_ref();
    if !path.exists() {
        log::warn!("{}: {}", LOG_SNAPSHOT_MISSING, path.display());
        return Ok(GardenSnapshot::default());
    }
    load_snapshot(path)
}
