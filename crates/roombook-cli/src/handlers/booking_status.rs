use anyhow::{anyhow, bail, Result};

use roombook_api::ApiClient;
use roombook_engine::{BookingListView, StatusAction, TransitionOutcome};
use roombook_types::BookingId;

pub fn handle(client: &ApiClient, id: i64, action: StatusAction) -> Result<()> {
    let id = BookingId::new(id);

    let mut view = BookingListView::new();
    view.fetch(client)?;

    let booking = view
        .booking(id)
        .ok_or_else(|| anyhow!("Booking {} not found.", id))?;
    if !view.row_actions(booking).offer_transitions {
        bail!(
            "Booking {} is not pending (status: {}).",
            id,
            booking.status.label()
        );
    }

    let verb = match action {
        StatusAction::Approve => "approved",
        StatusAction::Reject => "rejected",
    };

    match view.transition(client, id, action)? {
        TransitionOutcome::Applied => {
            println!("Booking {} {}.", id, verb);
            Ok(())
        }
        TransitionOutcome::NoOp => {
            println!("No change: booking {} is no longer pending.", id);
            Ok(())
        }
    }
}
