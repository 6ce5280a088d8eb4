// Booking module
// Room metadata and the validated booking interval delivered by the host

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// The room a booking occupies, shown on every glance surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomInfo {
    pub name: String,
    pub floor: String,
}

impl RoomInfo {
    pub fn new(name: impl Into<String>, floor: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            floor: floor.into(),
        }
    }
}

/// Validation failures for host-delivered booking data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    #[error("booking end time must not be before start time")]
    EndBeforeStart,
    #[error("room name cannot be empty")]
    EmptyRoomName,
}

/// The interval a booking occupies. Invariant: `start <= end`.
///
/// Constructed only through [`BookingWindow::new`], so a value of this type is
/// always well-formed; the rendering side never sees a negative countdown.
/// Deliberately not deserializable; the wire format is [`BookingPayload`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingWindow {
    start: DateTime<Local>,
    end: DateTime<Local>,
}

impl BookingWindow {
    /// Create a booking window, rejecting `end < start` at the boundary.
    pub fn new(start: DateTime<Local>, end: DateTime<Local>) -> Result<Self, BookingError> {
        if end < start {
            return Err(BookingError::EndBeforeStart);
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<Local> {
        self.start
    }

    pub fn end(&self) -> DateTime<Local> {
        self.end
    }

    /// Duration of the booking.
    pub fn duration(&self) -> chrono::Duration {
        self.end - self.start
    }
}

/// Push payload the host runtime delivers whenever booking state changes.
///
/// Kept separate from [`BookingWindow`] so deserialization cannot bypass
/// validation: the payload is plain data, `into_parts` is the checkpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingPayload {
    pub room: RoomInfo,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
}

impl BookingPayload {
    /// Validate the payload and split it into renderable parts.
    pub fn into_parts(self) -> Result<(RoomInfo, BookingWindow), BookingError> {
        if self.room.name.trim().is_empty() {
            return Err(BookingError::EmptyRoomName);
        }
        let window = BookingWindow::new(self.start, self.end)?;
        Ok((self.room, window))
    }
}

/// Stub handler for the EXTEND affordance.
///
/// The button is rendered on the lock-screen and expanded surfaces but the
/// extension workflow lives in the host's booking service, so a press is only
/// acknowledged here.
pub fn extend_requested(room: &RoomInfo) {
    log::info!("extend requested for room '{}'; not handled here", room.name);
}
