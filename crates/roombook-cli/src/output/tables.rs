use anyhow::Result;
use chrono::{DateTime, Utc};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

use roombook_engine::BookingListView;
use roombook_types::{Booking, NormalizedStatus, Room};

use crate::args::OutputFormat;

fn use_color() -> bool {
    std::io::stdout().is_terminal()
}

fn format_instant(instant: &DateTime<Utc>) -> String {
    instant.format("%Y-%m-%d %H:%M").to_string()
}

/// Color the status label per state; unknown statuses render the raw value.
fn status_badge(booking: &Booking) -> String {
    let label = booking.status.label();
    if !use_color() {
        return label;
    }
    match booking.status.normalized() {
        NormalizedStatus::Pending => label.yellow().to_string(),
        NormalizedStatus::Approved => label.green().to_string(),
        NormalizedStatus::Rejected => label.red().to_string(),
        NormalizedStatus::Unknown => label,
    }
}

fn active_badge(room: &Room) -> String {
    let label = if room.is_active { "active" } else { "inactive" };
    if !use_color() {
        return label.to_string();
    }
    if room.is_active {
        label.green().to_string()
    } else {
        label.dimmed().to_string()
    }
}

/// Print a padded table; color is applied per cell after padding so column
/// widths stay aligned.
fn print_table(header: &[&str], rows: &[Vec<String>], colored: &[Vec<String>]) {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let head = header
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:<width$}", h, width = widths[i]))
        .collect::<Vec<_>>()
        .join("  ");
    if use_color() {
        println!("{}", head.bold());
    } else {
        println!("{}", head);
    }

    for (row, colored_row) in rows.iter().zip(colored.iter()) {
        let line = row
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let padding = widths[i].saturating_sub(cell.chars().count());
                format!("{}{}", colored_row[i], " ".repeat(padding))
            })
            .collect::<Vec<_>>()
            .join("  ");
        println!("{}", line.trim_end());
    }
}

pub fn print_rooms(rooms: &[&Room], format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(rooms)?);
        return Ok(());
    }

    if rooms.is_empty() {
        println!("No rooms.");
        return Ok(());
    }

    let header = ["ID", "NAME", "LOCATION", "CAPACITY", "ACTIVE"];
    let mut rows = Vec::new();
    let mut colored = Vec::new();
    for room in rooms {
        let plain = vec![
            room.id.to_string(),
            room.name.clone(),
            room.location.clone(),
            room.capacity.to_string(),
            if room.is_active { "active" } else { "inactive" }.to_string(),
        ];
        let mut cells = plain.clone();
        cells[4] = active_badge(room);
        rows.push(plain);
        colored.push(cells);
    }
    print_table(&header, &rows, &colored);
    Ok(())
}

pub fn print_room(room: &Room, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(room)?);
        return Ok(());
    }

    println!("Room {}", room.id);
    println!("  Name:     {}", room.name);
    println!("  Location: {}", room.location);
    println!("  Capacity: {}", room.capacity);
    println!("  Active:   {}", if room.is_active { "yes" } else { "no" });
    Ok(())
}

pub fn print_bookings(view: &BookingListView, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(view.bookings())?);
        return Ok(());
    }

    if view.bookings().is_empty() {
        println!("No bookings.");
        return Ok(());
    }

    let header = ["ID", "BOOKER", "ROOM", "PURPOSE", "START", "END", "STATUS", "ACTIONS"];
    let mut rows = Vec::new();
    let mut colored = Vec::new();
    for booking in view.bookings() {
        let actions = if view.row_actions(booking).offer_transitions {
            "approve, reject"
        } else {
            "-"
        };
        let plain = vec![
            booking.id.to_string(),
            booking.booker_name.clone(),
            view.room_name(booking),
            booking.purpose_of_booking.clone(),
            format_instant(&booking.start_time),
            format_instant(&booking.end_time),
            booking.status.label(),
            actions.to_string(),
        ];
        let mut cells = plain.clone();
        cells[6] = status_badge(booking);
        rows.push(plain);
        colored.push(cells);
    }
    print_table(&header, &rows, &colored);
    Ok(())
}

pub fn print_booking(booking: &Booking, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(booking)?);
        return Ok(());
    }

    let room = booking
        .room_name
        .clone()
        .unwrap_or_else(|| format!("Room #{}", booking.room_id));

    println!("Booking {}", booking.id);
    println!("  Booker:  {}", booking.booker_name);
    println!("  Room:    {}", room);
    println!("  Purpose: {}", booking.purpose_of_booking);
    println!("  Start:   {}", format_instant(&booking.start_time));
    println!("  End:     {}", format_instant(&booking.end_time));
    println!("  Status:  {}", status_badge(booking));
    Ok(())
}
