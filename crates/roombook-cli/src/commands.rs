use anyhow::Result;

use roombook_api::ApiClient;

use crate::args::{BookingCommand, Cli, Commands, ConfigCommand, RoomCommand};
use crate::config::{self, Config};
use crate::handlers;

pub fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        show_guidance();
        return Ok(());
    };

    // Config commands never touch the network
    if let Commands::Config { command } = &command {
        return match command {
            ConfigCommand::Show => handlers::config::show(cli.base_url.as_deref()),
            ConfigCommand::SetUrl { url } => handlers::config::set_url(url),
        };
    }

    let file_config = Config::load()?;
    let base_url = config::resolve_base_url(cli.base_url.as_deref(), &file_config);
    let client = ApiClient::new(base_url)?;

    match command {
        Commands::Room { command } => match command {
            RoomCommand::List {
                keyword,
                active,
                room,
            } => handlers::room_list::handle(&client, &keyword, active, room, cli.format),
            RoomCommand::Show { id } => handlers::room_show::handle(&client, id, cli.format),
            RoomCommand::Add {
                name,
                location,
                capacity,
                inactive,
            } => handlers::room_save::add(&client, name, location, capacity, inactive, cli.format),
            RoomCommand::Edit {
                id,
                name,
                location,
                capacity,
                active,
            } => handlers::room_save::edit(&client, id, name, location, capacity, active, cli.format),
            RoomCommand::Rm { id } => handlers::room_delete::handle(&client, id, cli.yes),
        },

        Commands::Booking { command } => match command {
            BookingCommand::List { status, room, date } => {
                handlers::booking_list::handle(&client, status, room, date.as_deref(), cli.format)
            }
            BookingCommand::Show { id } => handlers::booking_show::handle(&client, id, cli.format),
            BookingCommand::Add {
                room,
                booker,
                purpose,
                start,
                end,
            } => handlers::booking_save::add(&client, room, booker, purpose, &start, &end, cli.format),
            BookingCommand::Edit {
                id,
                room,
                booker,
                purpose,
                start,
                end,
                status,
            } => handlers::booking_save::edit(
                &client,
                id,
                room,
                booker,
                purpose,
                start.as_deref(),
                end.as_deref(),
                status,
                cli.format,
            ),
            BookingCommand::Approve { id } => {
                handlers::booking_status::handle(&client, id, roombook_engine::StatusAction::Approve)
            }
            BookingCommand::Reject { id } => {
                handlers::booking_status::handle(&client, id, roombook_engine::StatusAction::Reject)
            }
            BookingCommand::Rm { id } => handlers::booking_delete::handle(&client, id, cli.yes),
        },

        Commands::Config { .. } => unreachable!("handled above"),
    }
}

fn show_guidance() {
    println!("roombook: manage rooms and room-booking requests");
    println!();
    println!("Common commands:");
    println!("  roombook room list                 List rooms");
    println!("  roombook booking list              List booking requests");
    println!("  roombook booking approve <id>      Approve a pending booking");
    println!("  roombook config set-url <url>      Point the CLI at your API");
    println!();
    println!("Run 'roombook --help' for the full command reference.");
}
