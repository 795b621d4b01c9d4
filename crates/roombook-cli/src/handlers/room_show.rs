use anyhow::Result;

use roombook_api::ApiClient;
use roombook_types::RoomId;

use crate::args::OutputFormat;
use crate::output;

pub fn handle(client: &ApiClient, id: i64, format: OutputFormat) -> Result<()> {
    let room = client.room(RoomId::new(id))?;
    output::print_room(&room, format)
}
