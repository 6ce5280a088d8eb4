// Glance module
// Per-tick derived values shared by every rendering surface

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Which presentation variant a surface renders.
///
/// Several of these can be visible at once (lock screen plus a glance island);
/// all of them consume the same [`GlanceSnapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceKind {
    /// Full lock-screen card.
    LockScreen,
    /// Expanded glance region with room details and the extend affordance.
    Expanded,
    /// Compact glance region: room name plus a short countdown.
    Compact,
    /// Minimal glance region: countdown only.
    Minimal,
}

impl SurfaceKind {
    /// All variants, in the order the host enumerates its surfaces.
    pub const ALL: [SurfaceKind; 4] = [
        SurfaceKind::LockScreen,
        SurfaceKind::Expanded,
        SurfaceKind::Compact,
        SurfaceKind::Minimal,
    ];
}

/// One tick's worth of display values.
///
/// `now` is the scheduler's single clock reading for the tick; surfaces format
/// time remaining from it rather than reading the wall clock themselves, so
/// concurrently visible surfaces can never drift apart. The snapshot is
/// recreated every tick and discarded after the redraw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlanceSnapshot {
    /// The shared clock reading this snapshot was computed from.
    pub now: DateTime<Local>,
    /// The instant every surface counts down to (booking end).
    pub countdown_target: DateTime<Local>,
    /// Normalized `[0, 1]` offset of `now` within the display timeline.
    pub pointer_position: f64,
}
