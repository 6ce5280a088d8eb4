use crate::models::booking::RoomInfo;
use crate::models::glance::{GlanceSnapshot, SurfaceKind};

use super::{countdown_sentence, SurfaceContent};

/// Full lock-screen card: room details, countdown sentence, progress track,
/// and the EXTEND affordance.
pub(super) fn render(room: &RoomInfo, snapshot: &GlanceSnapshot) -> SurfaceContent {
    let body = format!(
        "Room: {}\nFloor: {}\n{}",
        room.name,
        room.floor,
        countdown_sentence(snapshot)
    );
    SurfaceContent {
        kind: SurfaceKind::LockScreen,
        body,
        accessibility_label: Some(format!("Room: {}. {}", room.name, countdown_sentence(snapshot))),
        pointer_position: Some(snapshot.pointer_position),
        shows_extend_button: true,
    }
}
