use anyhow::{anyhow, Result};

use roombook_api::ApiClient;
use roombook_engine::{BookingListView, DeleteOutcome};
use roombook_types::BookingId;

use crate::prompt;

pub fn handle(client: &ApiClient, id: i64, assume_yes: bool) -> Result<()> {
    let id = BookingId::new(id);

    let mut view = BookingListView::new();
    view.fetch(client)?;
    let booking = view
        .booking(id)
        .ok_or_else(|| anyhow!("Booking {} not found.", id))?;

    let what = format!(
        "booking {} ('{}' by {})",
        id, booking.purpose_of_booking, booking.booker_name
    );
    let confirmation = prompt::confirm_delete(&what, assume_yes);
    match view.delete(client, id, confirmation)? {
        DeleteOutcome::Deleted => {
            println!("Booking {} deleted.", id);
            Ok(())
        }
        DeleteOutcome::Cancelled => {
            println!("Aborted.");
            Ok(())
        }
    }
}
