use crate::models::booking::RoomInfo;
use crate::models::glance::{GlanceSnapshot, SurfaceKind};

use super::{clock_remaining, SurfaceContent};

/// Minimal glance region: the bare countdown.
pub(super) fn render(_room: &RoomInfo, snapshot: &GlanceSnapshot) -> SurfaceContent {
    SurfaceContent {
        kind: SurfaceKind::Minimal,
        body: clock_remaining(snapshot),
        accessibility_label: None,
        pointer_position: None,
        shows_extend_button: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    #[test]
    fn test_minimal_region_is_countdown_only() {
        let room = RoomInfo::new("Pankhurst", "Ground Floor");
        let snapshot = GlanceSnapshot {
            now: Local.with_ymd_and_hms(2025, 3, 14, 14, 59, 55).unwrap(),
            countdown_target: Local.with_ymd_and_hms(2025, 3, 14, 15, 0, 0).unwrap(),
            pointer_position: 0.99,
        };

        let content = render(&room, &snapshot);
        assert_eq!(content.body, "0:05");
        assert_eq!(content.pointer_position, None);
        assert!(!content.shows_extend_button);
    }
}
