//! In-memory gateway fake for driving the list view controllers in tests.

use std::cell::RefCell;

use roombook_engine::{BookingGateway, BookingQuery, RoomGateway};
use roombook_types::{
    Booking, BookingId, BookingStatus, Error, NormalizedStatus, Result, Room, RoomId, StatusValue,
};

use crate::fixtures;

/// In-memory store implementing the engine's gateway traits.
///
/// Records every call so tests can assert "no network call was issued", and
/// can be scripted to fail the next call with a given error.
pub struct FakeGateway {
    rooms: RefCell<Vec<Room>>,
    bookings: RefCell<Vec<Booking>>,
    calls: RefCell<Vec<String>>,
    fail_next: RefCell<Option<Error>>,
}

impl FakeGateway {
    pub fn new(rooms: Vec<Room>, bookings: Vec<Booking>) -> Self {
        Self {
            rooms: RefCell::new(rooms),
            bookings: RefCell::new(bookings),
            calls: RefCell::new(Vec::new()),
            fail_next: RefCell::new(None),
        }
    }

    /// Gateway seeded with the canonical fixtures: two rooms, one booking in
    /// each status.
    pub fn seeded() -> Self {
        Self::new(fixtures::sample_rooms(), fixtures::sample_bookings())
    }

    /// Make the next gateway call fail with `err`.
    pub fn fail_next(&self, err: Error) {
        *self.fail_next.borrow_mut() = Some(err);
    }

    /// Calls recorded so far, oldest first.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    /// Insert or replace a booking in the store without recording a call.
    pub fn put_booking(&self, booking: Booking) {
        let mut bookings = self.bookings.borrow_mut();
        match bookings.iter_mut().find(|b| b.id == booking.id) {
            Some(existing) => *existing = booking,
            None => bookings.push(booking),
        }
    }

    /// Insert or replace a room in the store without recording a call.
    pub fn put_room(&self, room: Room) {
        let mut rooms = self.rooms.borrow_mut();
        match rooms.iter_mut().find(|r| r.id == room.id) {
            Some(existing) => *existing = room,
            None => rooms.push(room),
        }
    }

    fn enter(&self, call: impl Into<String>) -> Result<()> {
        if let Some(err) = self.fail_next.borrow_mut().take() {
            return Err(err);
        }
        self.calls.borrow_mut().push(call.into());
        Ok(())
    }
}

impl RoomGateway for FakeGateway {
    fn list_rooms(&self) -> Result<Vec<Room>> {
        self.enter("list_rooms")?;
        Ok(self.rooms.borrow().clone())
    }

    fn delete_room(&self, id: RoomId) -> Result<()> {
        self.enter(format!("delete_room:{}", id))?;
        let mut rooms = self.rooms.borrow_mut();
        let before = rooms.len();
        rooms.retain(|r| r.id != id);
        if rooms.len() == before {
            return Err(Error::NotFound(format!("room {}", id)));
        }
        Ok(())
    }
}

impl BookingGateway for FakeGateway {
    fn query_bookings(&self, query: &BookingQuery) -> Result<Vec<Booking>> {
        match query {
            BookingQuery::All => self.enter("list_bookings")?,
            BookingQuery::ByStatus(status) => {
                self.enter(format!("list_bookings_by_status:{}", status))?
            }
            BookingQuery::ByRoom(room_id) => {
                self.enter(format!("list_bookings_by_room:{}", room_id))?
            }
            BookingQuery::ByDate(date) => self.enter(format!("list_bookings_by_date:{}", date))?,
        }

        let bookings = self.bookings.borrow();
        let matched = bookings
            .iter()
            .filter(|b| match query {
                BookingQuery::All => true,
                BookingQuery::ByStatus(status) => match (b.status.normalized(), status) {
                    (NormalizedStatus::Pending, BookingStatus::Pending) => true,
                    (NormalizedStatus::Approved, BookingStatus::Approved) => true,
                    (NormalizedStatus::Rejected, BookingStatus::Rejected) => true,
                    _ => false,
                },
                BookingQuery::ByRoom(room_id) => b.room_id == *room_id,
                BookingQuery::ByDate(date) => b.start_time.date_naive() == *date,
            })
            .cloned()
            .collect();
        Ok(matched)
    }

    fn delete_booking(&self, id: BookingId) -> Result<()> {
        self.enter(format!("delete_booking:{}", id))?;
        let mut bookings = self.bookings.borrow_mut();
        let before = bookings.len();
        bookings.retain(|b| b.id != id);
        if bookings.len() == before {
            return Err(Error::NotFound(format!("booking {}", id)));
        }
        Ok(())
    }

    fn update_booking_status(&self, id: BookingId, status: BookingStatus) -> Result<Booking> {
        self.enter(format!("update_booking_status:{}:{}", id, status))?;
        let mut bookings = self.bookings.borrow_mut();
        let booking = bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| Error::NotFound(format!("booking {}", id)))?;
        booking.status = StatusValue::canonical(status);
        Ok(booking.clone())
    }
}
