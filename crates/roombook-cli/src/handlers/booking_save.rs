use anyhow::{anyhow, bail, Result};
use chrono::{DateTime, NaiveDateTime, Utc};

use roombook_api::ApiClient;
use roombook_types::{BookingDraft, BookingId, BookingStatus, NormalizedStatus, RoomId};

use crate::args::{OutputFormat, StatusArg};
use crate::output;

/// Parse a user-supplied instant: RFC 3339, or the datetime-local form
/// `YYYY-MM-DDTHH:MM` (seconds optional) interpreted as UTC.
fn parse_instant(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc());
        }
    }
    Err(anyhow!(
        "Invalid time '{}'; expected YYYY-MM-DDTHH:MM or RFC 3339.",
        value
    ))
}

#[allow(clippy::too_many_arguments)]
pub fn add(
    client: &ApiClient,
    room: i64,
    booker: String,
    purpose: String,
    start: &str,
    end: &str,
    format: OutputFormat,
) -> Result<()> {
    let start_time = parse_instant(start)?;
    let end_time = parse_instant(end)?;
    // Ordering check runs before any network call
    if end_time <= start_time {
        bail!("End time must be after start time.");
    }

    // The add flow offers only active rooms
    let rooms = client.rooms()?;
    let room = rooms
        .iter()
        .find(|r| r.id == RoomId::new(room))
        .ok_or_else(|| anyhow!("Room {} not found.", room))?;
    if !room.is_active {
        bail!("Room '{}' is not active.", room.name);
    }

    let draft = BookingDraft {
        room_id: room.id,
        room_name: Some(room.name.clone()),
        booker_name: booker,
        purpose_of_booking: purpose,
        start_time,
        end_time,
        status: BookingStatus::Pending,
    };
    draft.validate()?;

    let booking = client.create_booking(&draft)?;
    if format == OutputFormat::Json {
        return output::print_booking(&booking, format);
    }
    println!(
        "Booking {} created for '{}' (Pending).",
        booking.id, room.name
    );
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn edit(
    client: &ApiClient,
    id: i64,
    room: Option<i64>,
    booker: Option<String>,
    purpose: Option<String>,
    start: Option<&str>,
    end: Option<&str>,
    status: Option<StatusArg>,
    format: OutputFormat,
) -> Result<()> {
    let id = BookingId::new(id);
    let current = client.booking(id)?;
    let rooms = client.rooms()?;

    let room_id = room.map(RoomId::new).unwrap_or(current.room_id);
    let room_name = rooms
        .iter()
        .find(|r| r.id == room_id)
        .map(|r| r.name.clone())
        .or(current.room_name);

    // Manual status override is allowed in any state; without one, the
    // current status is kept (and must be recognizable to round-trip).
    let status = match status {
        Some(arg) => arg.into(),
        None => match current.status.normalized() {
            NormalizedStatus::Pending => BookingStatus::Pending,
            NormalizedStatus::Approved => BookingStatus::Approved,
            NormalizedStatus::Rejected => BookingStatus::Rejected,
            NormalizedStatus::Unknown => bail!(
                "Booking {} has unrecognized status '{}'; pass --status to set one.",
                id,
                current.status.label()
            ),
        },
    };

    let start_time = match start {
        Some(value) => parse_instant(value)?,
        None => current.start_time,
    };
    let end_time = match end {
        Some(value) => parse_instant(value)?,
        None => current.end_time,
    };

    let draft = BookingDraft {
        room_id,
        room_name,
        booker_name: booker.unwrap_or(current.booker_name),
        purpose_of_booking: purpose.unwrap_or(current.purpose_of_booking),
        start_time,
        end_time,
        status,
    };
    draft.validate()?;

    let booking = client.update_booking(id, &draft)?;
    if format == OutputFormat::Json {
        return output::print_booking(&booking, format);
    }
    println!("Booking {} updated.", booking.id);
    Ok(())
}
