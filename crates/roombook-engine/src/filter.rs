use chrono::NaiveDate;
use roombook_types::{BookingStatus, Room, RoomId};

/// Client-local filter criteria for the room list.
///
/// All criteria are conjunctive: every active criterion must match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoomFilter {
    /// Case-insensitive substring matched against name OR location.
    /// Blank (or whitespace-only) matches everything.
    pub keyword: String,
    /// Exact match against the room's active flag; unset matches everything.
    pub is_active: Option<bool>,
    /// Exact match against a single room identifier; unset matches everything.
    pub room_id: Option<RoomId>,
}

impl RoomFilter {
    pub fn is_empty(&self) -> bool {
        self.keyword.trim().is_empty() && self.is_active.is_none() && self.room_id.is_none()
    }

    fn matches(&self, room: &Room) -> bool {
        let keyword = self.keyword.trim().to_lowercase();
        if !keyword.is_empty()
            && !room.name.to_lowercase().contains(&keyword)
            && !room.location.to_lowercase().contains(&keyword)
        {
            return false;
        }
        if let Some(active) = self.is_active {
            if room.is_active != active {
                return false;
            }
        }
        if let Some(id) = self.room_id {
            if room.id != id {
                return false;
            }
        }
        true
    }
}

/// Derive the visible subset of `rooms` under `filter`.
///
/// Pure and idempotent: never mutates the input, and repeated calls with
/// unchanged inputs yield the same result.
pub fn visible_rooms<'a>(rooms: &'a [Room], filter: &RoomFilter) -> Vec<&'a Room> {
    rooms.iter().filter(|room| filter.matches(room)).collect()
}

/// Booking-side filtering is delegated to the server's dedicated query
/// endpoints rather than evaluated client-side.
#[derive(Debug, Clone, PartialEq)]
pub enum BookingQuery {
    All,
    ByStatus(BookingStatus),
    ByRoom(RoomId),
    ByDate(NaiveDate),
}
