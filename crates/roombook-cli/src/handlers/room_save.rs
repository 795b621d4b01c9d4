use anyhow::Result;

use roombook_api::ApiClient;
use roombook_types::{RoomDraft, RoomId};

use crate::args::OutputFormat;
use crate::output;

pub fn add(
    client: &ApiClient,
    name: String,
    location: String,
    capacity: u32,
    inactive: bool,
    format: OutputFormat,
) -> Result<()> {
    let draft = RoomDraft {
        name,
        location,
        capacity,
        is_active: !inactive,
    };
    // create_room re-validates; checking here keeps the failure local
    draft.validate()?;

    let room = client.create_room(&draft)?;
    if format == OutputFormat::Json {
        return output::print_room(&room, format);
    }
    println!("Created room {} ('{}').", room.id, room.name);
    Ok(())
}

pub fn edit(
    client: &ApiClient,
    id: i64,
    name: Option<String>,
    location: Option<String>,
    capacity: Option<u32>,
    active: Option<bool>,
    format: OutputFormat,
) -> Result<()> {
    let current = client.room(RoomId::new(id))?;

    let draft = RoomDraft {
        name: name.unwrap_or(current.name),
        location: location.unwrap_or(current.location),
        capacity: capacity.unwrap_or(current.capacity),
        is_active: active.unwrap_or(current.is_active),
    };
    draft.validate()?;

    let room = client.update_room(RoomId::new(id), &draft)?;
    if format == OutputFormat::Json {
        return output::print_room(&room, format);
    }
    println!("Updated room {} ('{}').", room.id, room.name);
    Ok(())
}
