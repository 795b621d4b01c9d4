use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;

use roombook_api::ApiClient;
use roombook_engine::{BookingListView, BookingQuery, LoadState};
use roombook_types::RoomId;

use crate::args::{OutputFormat, StatusArg};
use crate::output;

pub fn handle(
    client: &ApiClient,
    status: Option<StatusArg>,
    room: Option<i64>,
    date: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let query = if let Some(status) = status {
        BookingQuery::ByStatus(status.into())
    } else if let Some(room) = room {
        BookingQuery::ByRoom(RoomId::new(room))
    } else if let Some(date) = date {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .with_context(|| format!("Invalid date '{}'; expected YYYY-MM-DD.", date))?;
        BookingQuery::ByDate(date)
    } else {
        BookingQuery::All
    };

    let mut view = BookingListView::new();
    view.set_query(query);
    if let Err(err) = view.fetch(client) {
        eprintln!("{}", err);
        let message = match view.state() {
            LoadState::Failed(msg) => msg.clone(),
            _ => "Failed to fetch bookings / rooms.".to_string(),
        };
        return Err(anyhow!(message));
    }

    output::print_bookings(&view, format)
}
