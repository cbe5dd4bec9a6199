//! Camera device enumeration.

use nokhwa::query;
use nokhwa::utils::ApiBackend;

use super::types::{CameraError, CameraInfo};

/// Enumerate the cameras attached to the system, ordered by device index.
///
/// A machine without cameras yields an empty list, not an error; only a
/// failed backend query reports [`CameraError::QueryFailed`]. The index
/// in each entry is what `--device` selects.
pub fn list_devices() -> Result<Vec<CameraInfo>, CameraError> {
    let found = query(ApiBackend::Auto).map_err(|e| CameraError::QueryFailed(e.to_string()))?;

    let mut devices: Vec<CameraInfo> = found
        .into_iter()
        .map(|d| CameraInfo {
            index: d.index().as_index().unwrap_or(0),
            name: d.human_name(),
            description: d.description().to_string(),
        })
        .collect();

    // Backend enumeration order is not guaranteed; present a stable one
    devices.sort_by_key(|d| d.index);
    Ok(devices)
}
