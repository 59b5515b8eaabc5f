use std::io::Cursor;

use image::{ImageFormat, RgbaImage};
use tracing::debug;

use crate::{AnimationState, NodeId, SceneError};

pub const SNAPSHOT_FILE_NAME: &str = "app-icon.png";

/// Marks `id` as hovered or not. Repeating the same request is a no-op.
pub fn set_hovered(state: &mut AnimationState, id: NodeId, hovered: bool) {
    let changed = if hovered {
        state.hovered.insert(id)
    } else {
        state.hovered.remove(&id)
    };
    if changed {
        debug!(node = id.0, hovered, "hover changed");
    }
}

/// Flips auto-rotation and returns the new setting.
pub fn toggle_auto_rotate(state: &mut AnimationState) -> bool {
    state.auto_rotate = !state.auto_rotate;
    state.auto_rotate
}

/// Encodes a captured frame as PNG.
///
/// `None` means there is no render surface to read from.
pub fn export_snapshot(frame: Option<&RgbaImage>) -> Result<Vec<u8>, SceneError> {
    let Some(frame) = frame else {
        return Err(SceneError::NoCanvasAvailable);
    };

    let mut bytes = Cursor::new(Vec::new());
    frame.write_to(&mut bytes, ImageFormat::Png)?;
    Ok(bytes.into_inner())
}
