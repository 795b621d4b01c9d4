//! roombook-engine: the view-model layer of the roombook front end.
//!
//! Owns the pure list-filtering rules, the keyword debouncer, and the
//! per-screen list view controllers that orchestrate fetch, delete, and
//! status-transition flows against a [`gateway`] implementation.

pub mod debounce;
pub mod filter;
pub mod gateway;
pub mod view;

pub use debounce::KeywordDebouncer;
pub use filter::{visible_rooms, BookingQuery, RoomFilter};
pub use gateway::{BookingGateway, RoomGateway};
pub use view::{
    BookingListView, Confirmation, DeleteOutcome, LoadState, RoomListView, RowActions,
    StatusAction, TransitionOutcome, TransitionRequest,
};
