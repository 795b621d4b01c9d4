use anyhow::Result;

use roombook_api::ApiClient;
use roombook_types::BookingId;

use crate::args::OutputFormat;
use crate::output;

pub fn handle(client: &ApiClient, id: i64, format: OutputFormat) -> Result<()> {
    let booking = client.booking(BookingId::new(id))?;
    output::print_booking(&booking, format)
}
