use clap::Subcommand;

use super::enums::StatusArg;

#[derive(Subcommand)]
pub enum Commands {
    /// Manage rooms
    Room {
        #[command(subcommand)]
        command: RoomCommand,
    },
    /// Manage room-booking requests
    Booking {
        #[command(subcommand)]
        command: BookingCommand,
    },
    /// Show or edit CLI configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum RoomCommand {
    /// List rooms, filtered client-side
    List {
        /// Keyword matched (case-insensitively) against name or location
        #[arg(long, default_value = "")]
        keyword: String,

        /// Only active (true) or inactive (false) rooms
        #[arg(long)]
        active: Option<bool>,

        /// Only the room with this id
        #[arg(long)]
        room: Option<i64>,
    },

    /// Show a single room
    Show { id: i64 },

    /// Create a room
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        location: String,

        #[arg(long)]
        capacity: u32,

        /// Create the room as inactive
        #[arg(long)]
        inactive: bool,
    },

    /// Edit a room; omitted fields keep their current value
    Edit {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        capacity: Option<u32>,

        #[arg(long)]
        active: Option<bool>,
    },

    /// Delete a room (asks for confirmation)
    Rm { id: i64 },
}

#[derive(Subcommand)]
pub enum BookingCommand {
    /// List bookings; status/room/date filters are served by the API
    List {
        #[arg(long, conflicts_with_all = ["room", "date"])]
        status: Option<StatusArg>,

        /// Bookings for a single room id
        #[arg(long, conflicts_with = "date")]
        room: Option<i64>,

        /// Bookings starting on a calendar date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },

    /// Show a single booking
    Show { id: i64 },

    /// Submit a booking request (created as Pending)
    Add {
        /// Room id; the room must exist and be active
        #[arg(long)]
        room: i64,

        #[arg(long)]
        booker: String,

        #[arg(long)]
        purpose: String,

        /// Start instant (YYYY-MM-DDTHH:MM or RFC 3339)
        #[arg(long)]
        start: String,

        /// End instant; must be strictly after start
        #[arg(long)]
        end: String,
    },

    /// Edit a booking; omitted fields keep their current value
    Edit {
        id: i64,

        #[arg(long)]
        room: Option<i64>,

        #[arg(long)]
        booker: Option<String>,

        #[arg(long)]
        purpose: Option<String>,

        #[arg(long)]
        start: Option<String>,

        #[arg(long)]
        end: Option<String>,

        /// Manual status override, allowed in any state
        #[arg(long)]
        status: Option<StatusArg>,
    },

    /// Approve a pending booking
    Approve { id: i64 },

    /// Reject a pending booking
    Reject { id: i64 },

    /// Delete a booking (asks for confirmation)
    Rm { id: i64 },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the resolved configuration
    Show,

    /// Persist the API base URL
    SetUrl { url: String },
}
