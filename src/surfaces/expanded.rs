use crate::models::booking::RoomInfo;
use crate::models::glance::{GlanceSnapshot, SurfaceKind};

use super::{countdown_sentence, SurfaceContent};

/// Expanded glance region: compact room header, countdown sentence, progress
/// track, EXTEND affordance.
pub(super) fn render(room: &RoomInfo, snapshot: &GlanceSnapshot) -> SurfaceContent {
    let body = format!(
        "{}\n{}\n{}",
        room.name,
        room.floor,
        countdown_sentence(snapshot)
    );
    SurfaceContent {
        kind: SurfaceKind::Expanded,
        body,
        accessibility_label: None,
        pointer_position: Some(snapshot.pointer_position),
        shows_extend_button: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    #[test]
    fn test_expanded_region_contents() {
        let room = RoomInfo::new("Pankhurst", "Ground Floor");
        let snapshot = GlanceSnapshot {
            now: Local.with_ymd_and_hms(2025, 3, 14, 14, 45, 0).unwrap(),
            countdown_target: Local.with_ymd_and_hms(2025, 3, 14, 15, 0, 0).unwrap(),
            pointer_position: 0.75,
        };

        let content = render(&room, &snapshot);
        assert_eq!(content.kind, SurfaceKind::Expanded);
        assert_eq!(content.body, "Pankhurst\nGround Floor\nYour booking ends in 15 min");
        assert_eq!(content.pointer_position, Some(0.75));
        assert!(content.shows_extend_button);
    }
}
