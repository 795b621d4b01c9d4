use std::time::Instant;

use anyhow::{anyhow, Result};

use roombook_api::ApiClient;
use roombook_engine::{LoadState, RoomFilter, RoomListView};
use roombook_types::RoomId;

use crate::args::OutputFormat;
use crate::output;

pub fn handle(
    client: &ApiClient,
    keyword: &str,
    active: Option<bool>,
    room: Option<i64>,
    format: OutputFormat,
) -> Result<()> {
    let mut view = RoomListView::new();
    if let Err(err) = view.fetch(client) {
        // Diagnostic detail on stderr; the user-facing message stays generic
        eprintln!("{}", err);
        let message = match view.state() {
            LoadState::Failed(msg) => msg.clone(),
            _ => "Failed to fetch rooms.".to_string(),
        };
        return Err(anyhow!(message));
    }

    view.set_filter(RoomFilter {
        keyword: String::new(),
        is_active: active,
        room_id: room.map(RoomId::new),
    });
    view.type_keyword(keyword, Instant::now());
    view.flush_keyword();

    output::print_rooms(&view.visible(), format)
}
