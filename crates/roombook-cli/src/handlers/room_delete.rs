use anyhow::{anyhow, Result};

use roombook_api::ApiClient;
use roombook_engine::{DeleteOutcome, RoomListView};
use roombook_types::RoomId;

use crate::prompt;

pub fn handle(client: &ApiClient, id: i64, assume_yes: bool) -> Result<()> {
    let id = RoomId::new(id);

    let mut view = RoomListView::new();
    view.fetch(client)?;
    let room = view
        .rooms()
        .iter()
        .find(|r| r.id == id)
        .ok_or_else(|| anyhow!("Room {} not found.", id))?;

    let confirmation = prompt::confirm_delete(&format!("room '{}'", room.name), assume_yes);
    match view.delete(client, id, confirmation)? {
        DeleteOutcome::Deleted => {
            println!("Room {} deleted.", id);
            Ok(())
        }
        DeleteOutcome::Cancelled => {
            println!("Aborted.");
            Ok(())
        }
    }
}
