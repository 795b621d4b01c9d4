use std::collections::BTreeSet;

use roombook_types::{Booking, BookingId, Result, Room};

use super::{
    Confirmation, DeleteOutcome, LoadState, RowActions, StatusAction, TransitionOutcome,
    TransitionRequest,
};
use crate::filter::BookingQuery;
use crate::gateway::BookingGateway;

/// View model for the bookings screen.
///
/// Fetches bookings together with rooms (to resolve room names for display)
/// and tracks a per-item in-flight marker for status transitions.
pub struct BookingListView {
    state: LoadState,
    query: BookingQuery,
    bookings: Vec<Booking>,
    rooms: Vec<Room>,
    in_flight: BTreeSet<BookingId>,
}

impl BookingListView {
    pub fn new() -> Self {
        Self {
            state: LoadState::Idle,
            query: BookingQuery::All,
            bookings: Vec::new(),
            rooms: Vec::new(),
            in_flight: BTreeSet::new(),
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn query(&self) -> &BookingQuery {
        &self.query
    }

    /// Set the server-delegated query used by the next fetch (and by every
    /// refetch after a mutation).
    pub fn set_query(&mut self, query: BookingQuery) {
        self.query = query;
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn booking(&self, id: BookingId) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    /// Populate both raw collections from the gateway. The screen enters
    /// `Ready` only once both are available.
    pub fn fetch<G: BookingGateway>(&mut self, gateway: &G) -> Result<()> {
        self.state = LoadState::Loading;
        let fetched = gateway
            .query_bookings(&self.query)
            .and_then(|bookings| gateway.list_rooms().map(|rooms| (bookings, rooms)));
        match fetched {
            Ok((bookings, rooms)) => {
                self.bookings = bookings;
                self.rooms = rooms;
                self.state = LoadState::Ready;
                Ok(())
            }
            Err(err) => {
                self.state = LoadState::Failed("Failed to fetch bookings / rooms.".to_string());
                Err(err)
            }
        }
    }

    /// Display name for a booking's room: the booking's own denormalized
    /// name when present, else the fetched room, else an id placeholder.
    pub fn room_name(&self, booking: &Booking) -> String {
        if let Some(name) = booking.room_name.as_deref() {
            if !name.trim().is_empty() {
                return name.to_string();
            }
        }
        self.rooms
            .iter()
            .find(|r| r.id == booking.room_id)
            .map(|r| r.name.clone())
            .unwrap_or_else(|| format!("Room #{}", booking.room_id))
    }

    /// Controls offered for a row. Approve/reject appear only while the
    /// normalized status is Pending, and are disabled while that row's
    /// transition is in flight.
    pub fn row_actions(&self, booking: &Booking) -> RowActions {
        RowActions {
            offer_transitions: booking.status.normalized().is_pending(),
            transitions_enabled: !self.in_flight.contains(&booking.id),
        }
    }

    /// Commit to a status transition for `id`, setting its in-flight marker.
    ///
    /// Returns `None` (a no-op, not queued) when the booking is unknown, not
    /// pending, or already has a transition in flight.
    pub fn begin_transition(
        &mut self,
        id: BookingId,
        action: StatusAction,
    ) -> Option<TransitionRequest> {
        let booking = self.bookings.iter().find(|b| b.id == id)?;
        if !booking.status.normalized().is_pending() {
            return None;
        }
        if !self.in_flight.insert(id) {
            return None;
        }
        Some(TransitionRequest {
            id,
            next: action.target(),
        })
    }

    /// Report the gateway's answer for an in-flight transition.
    ///
    /// The marker is cleared either way. Success triggers a full refetch to
    /// resynchronize from server state; failure assumes no local change.
    pub fn finish_transition<G: BookingGateway>(
        &mut self,
        gateway: &G,
        id: BookingId,
        result: Result<Booking>,
    ) -> Result<()> {
        self.in_flight.remove(&id);
        result?;
        self.fetch(gateway)
    }

    /// Full approve/reject flow: begin, call the gateway, finish.
    pub fn transition<G: BookingGateway>(
        &mut self,
        gateway: &G,
        id: BookingId,
        action: StatusAction,
    ) -> Result<TransitionOutcome> {
        let Some(request) = self.begin_transition(id, action) else {
            return Ok(TransitionOutcome::NoOp);
        };
        let result = gateway.update_booking_status(request.id, request.next);
        self.finish_transition(gateway, id, result)?;
        Ok(TransitionOutcome::Applied)
    }

    /// Delete a booking after the confirmation gate; deletable in any state.
    /// Same reconciliation as every other mutation: full refetch on success.
    pub fn delete<G: BookingGateway>(
        &mut self,
        gateway: &G,
        id: BookingId,
        confirmation: Confirmation,
    ) -> Result<DeleteOutcome> {
        if confirmation == Confirmation::Declined {
            return Ok(DeleteOutcome::Cancelled);
        }
        gateway.delete_booking(id)?;
        self.fetch(gateway)?;
        Ok(DeleteOutcome::Deleted)
    }
}

impl Default for BookingListView {
    fn default() -> Self {
        Self::new()
    }
}
