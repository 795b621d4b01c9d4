use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::RoomId;
use crate::error::{Error, Result};
use crate::status::BookingStatus;

fn required(value: &str, message: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::Precondition(message.to_string()));
    }
    Ok(())
}

/// Create/update payload for a room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDraft {
    pub name: String,
    pub location: String,
    pub capacity: u32,
    pub is_active: bool,
}

impl RoomDraft {
    /// Local precondition checks, run before any network call.
    pub fn validate(&self) -> Result<()> {
        required(&self.name, "Room name is required.")?;
        required(&self.location, "Room location is required.")?;
        if self.capacity == 0 {
            return Err(Error::Precondition("Capacity must be a positive number.".to_string()));
        }
        Ok(())
    }
}

/// Create/update payload for a booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub room_id: RoomId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_name: Option<String>,
    pub booker_name: String,
    pub purpose_of_booking: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: BookingStatus,
}

impl BookingDraft {
    /// Local precondition checks, run before any network call.
    /// The server remains the source of truth for overlap and other
    /// business rules not modeled here.
    pub fn validate(&self) -> Result<()> {
        if self.room_id.as_i64() <= 0 {
            return Err(Error::Precondition("Select a room first.".to_string()));
        }
        required(&self.booker_name, "Booker name is required.")?;
        required(&self.purpose_of_booking, "Purpose of booking is required.")?;
        if self.end_time <= self.start_time {
            return Err(Error::Precondition(
                "End time must be after start time.".to_string(),
            ));
        }
        Ok(())
    }
}
