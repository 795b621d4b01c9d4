use roombook_types::{Booking, BookingId, BookingStatus, Result, Room, RoomId};

use crate::filter::BookingQuery;

/// Read/delete surface the room list controller needs from the remote API.
///
/// The production implementation lives in `roombook-api`; tests drive the
/// controllers with an in-memory fake.
pub trait RoomGateway {
    fn list_rooms(&self) -> Result<Vec<Room>>;
    fn delete_room(&self, id: RoomId) -> Result<()>;
}

/// Surface the booking list controller needs. Rooms are included because the
/// bookings screen also fetches rooms to resolve display names.
pub trait BookingGateway: RoomGateway {
    /// Fetch bookings; filtering by status/room/date is delegated to the
    /// server's query endpoints.
    fn query_bookings(&self, query: &BookingQuery) -> Result<Vec<Booking>>;

    fn list_bookings(&self) -> Result<Vec<Booking>> {
        self.query_bookings(&BookingQuery::All)
    }

    fn delete_booking(&self, id: BookingId) -> Result<()>;
    fn update_booking_status(&self, id: BookingId, status: BookingStatus) -> Result<Booking>;
}
