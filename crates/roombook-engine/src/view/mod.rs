//! List view controllers: one explicit, owned view-model object per screen.
//!
//! Each controller exclusively owns its raw collection and filter state, and
//! funnels all mutation through named operations (fetch, delete, transition).

mod bookings;
mod rooms;

pub use bookings::BookingListView;
pub use rooms::RoomListView;

use roombook_types::BookingId;
use roombook_types::BookingStatus;

/// Per-screen load state machine.
///
/// `Idle -> Loading -> Ready` on success, `Loading -> Failed` on failure;
/// `Ready` re-enters `Loading` on an explicit refresh. No automatic retry.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Idle,
    Loading,
    Ready,
    /// Generic, non-leaking message for display; diagnostic detail travels
    /// separately through the returned error.
    Failed(String),
}

/// Answer to the yes/no gate shown before a delete is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// Confirmation declined; nothing was sent to the server.
    Cancelled,
}

/// Approver action on a pending booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusAction {
    Approve,
    Reject,
}

impl StatusAction {
    pub fn target(&self) -> BookingStatus {
        match self {
            StatusAction::Approve => BookingStatus::Approved,
            StatusAction::Reject => BookingStatus::Rejected,
        }
    }
}

/// A status-transition the view has committed to; the caller performs the
/// gateway call and reports back through `finish_transition`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRequest {
    pub id: BookingId,
    pub next: BookingStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    Applied,
    /// Ignored: the row was not pending, or a transition for this id was
    /// already in flight. Not queued.
    NoOp,
}

/// Which controls a booking row offers, derived from normalized status and
/// the per-item in-flight marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowActions {
    /// Approve/reject shown only while normalized status is Pending.
    pub offer_transitions: bool,
    /// Disabled while this row's transition is in flight; other rows are
    /// unaffected.
    pub transitions_enabled: bool,
}
