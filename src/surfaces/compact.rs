use crate::models::booking::RoomInfo;
use crate::models::glance::{GlanceSnapshot, SurfaceKind};

use super::{clock_remaining, SurfaceContent};

/// Compact glance region: room name on the leading side, second-granularity
/// countdown on the trailing side. No progress track, no extend affordance.
pub(super) fn render(room: &RoomInfo, snapshot: &GlanceSnapshot) -> SurfaceContent {
    let remaining = clock_remaining(snapshot);
    SurfaceContent {
        kind: SurfaceKind::Compact,
        body: format!("{} {}", room.name, remaining),
        accessibility_label: Some(format!(
            "Room: {}. Remaining time {}",
            room.name, remaining
        )),
        pointer_position: None,
        shows_extend_button: false,
    }
}
