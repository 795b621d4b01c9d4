use std::time::Instant;

use roombook_types::{Result, Room, RoomId};

use super::{Confirmation, DeleteOutcome, LoadState};
use crate::debounce::KeywordDebouncer;
use crate::filter::{visible_rooms, RoomFilter};
use crate::gateway::RoomGateway;

/// View model for the room list screen.
pub struct RoomListView {
    state: LoadState,
    rooms: Vec<Room>,
    filter: RoomFilter,
    keyword: KeywordDebouncer,
}

impl RoomListView {
    pub fn new() -> Self {
        Self {
            state: LoadState::Idle,
            rooms: Vec::new(),
            filter: RoomFilter::default(),
            keyword: KeywordDebouncer::new(),
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn filter(&self) -> &RoomFilter {
        &self.filter
    }

    /// Populate the raw collection from the gateway.
    ///
    /// On failure the view enters `Failed` with a generic message; the
    /// returned error carries the diagnostic detail for logging.
    pub fn fetch<G: RoomGateway>(&mut self, gateway: &G) -> Result<()> {
        self.state = LoadState::Loading;
        match gateway.list_rooms() {
            Ok(rooms) => {
                self.rooms = rooms;
                self.state = LoadState::Ready;
                Ok(())
            }
            Err(err) => {
                self.state = LoadState::Failed("Failed to fetch rooms.".to_string());
                Err(err)
            }
        }
    }

    /// Visible subset under the current filter. Pure with respect to the
    /// raw collection.
    pub fn visible(&self) -> Vec<&Room> {
        visible_rooms(&self.rooms, &self.filter)
    }

    pub fn set_filter(&mut self, filter: RoomFilter) {
        self.filter = filter;
    }

    pub fn reset_filter(&mut self) {
        self.filter = RoomFilter::default();
        self.keyword = KeywordDebouncer::new();
    }

    /// Record keyword input; it is applied once the quiet period elapses.
    pub fn type_keyword(&mut self, text: impl Into<String>, at: Instant) {
        self.keyword.input(text, at);
    }

    /// Apply pending keyword input if its quiet period has elapsed.
    /// Returns true when the filter changed.
    pub fn poll_keyword(&mut self, now: Instant) -> bool {
        match self.keyword.poll(now) {
            Some(keyword) => {
                self.filter.keyword = keyword;
                true
            }
            None => false,
        }
    }

    /// Apply pending keyword input immediately.
    pub fn flush_keyword(&mut self) -> bool {
        match self.keyword.flush() {
            Some(keyword) => {
                self.filter.keyword = keyword;
                true
            }
            None => false,
        }
    }

    /// Delete a room after the confirmation gate. A declined confirmation
    /// issues no network call and leaves the collection untouched. After a
    /// successful delete the list is refetched to resynchronize with server
    /// state.
    pub fn delete<G: RoomGateway>(
        &mut self,
        gateway: &G,
        id: RoomId,
        confirmation: Confirmation,
    ) -> Result<DeleteOutcome> {
        if confirmation == Confirmation::Declined {
            return Ok(DeleteOutcome::Cancelled);
        }
        gateway.delete_room(id)?;
        self.fetch(gateway)?;
        Ok(DeleteOutcome::Deleted)
    }
}

impl Default for RoomListView {
    fn default() -> Self {
        Self::new()
    }
}
