use chrono::Duration;

use crate::models::booking::RoomInfo;
use crate::models::glance::{GlanceSnapshot, SurfaceKind};
use crate::services::timeline::remaining_until;

pub mod compact;
pub mod expanded;
pub mod lock_screen;
pub mod minimal;

/// What one surface asks the host to draw for one tick.
///
/// Pure data; the host owns layout, styling, and the actual widgets. A `None`
/// pointer means the variant has no progress track.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceContent {
    pub kind: SurfaceKind,
    pub body: String,
    pub accessibility_label: Option<String>,
    pub pointer_position: Option<f64>,
    pub shows_extend_button: bool,
}

/// Render one surface variant from the shared snapshot.
///
/// Every variant formats the same `snapshot.now`; none of them read the clock,
/// so concurrently visible surfaces always agree on the remaining time.
pub fn render(kind: SurfaceKind, room: &RoomInfo, snapshot: &GlanceSnapshot) -> SurfaceContent {
    match kind {
        SurfaceKind::LockScreen => lock_screen::render(room, snapshot),
        SurfaceKind::Expanded => expanded::render(room, snapshot),
        SurfaceKind::Compact => compact::render(room, snapshot),
        SurfaceKind::Minimal => minimal::render(room, snapshot),
    }
}

/// Render every variant at once, in host enumeration order.
pub fn render_all(room: &RoomInfo, snapshot: &GlanceSnapshot) -> Vec<SurfaceContent> {
    SurfaceKind::ALL
        .iter()
        .map(|kind| render(*kind, room, snapshot))
        .collect()
}

/// Whole minutes left until the countdown target, floored, never negative.
pub(crate) fn minutes_remaining(snapshot: &GlanceSnapshot) -> i64 {
    remaining_until(snapshot.countdown_target, snapshot.now).num_minutes()
}

/// Remaining time as `M:SS`, never negative.
pub(crate) fn clock_remaining(snapshot: &GlanceSnapshot) -> String {
    let remaining = remaining_until(snapshot.countdown_target, snapshot.now);
    format_clock(remaining)
}

fn format_clock(remaining: Duration) -> String {
    let total_seconds = remaining.num_seconds();
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// The countdown sentence shared by the lock-screen and expanded variants.
pub(crate) fn countdown_sentence(snapshot: &GlanceSnapshot) -> String {
    format!("Your booking ends in {} min", minutes_remaining(snapshot))
}
