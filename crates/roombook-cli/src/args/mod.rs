// NOTE: Command Organization Rationale
//
// Each screen of the original front end maps to a namespaced subcommand:
// `room list`, `room add`, `room edit`, `booking list`, `booking add`,
// `booking edit`, plus the approver actions `booking approve/reject`.
// Namespaces keep --help discoverable as the surface grows.

mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "roombook")]
#[command(about = "Manage rooms and room-booking requests", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Base URL of the room-booking API (overrides config and env)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Assume "yes" at confirmation prompts
    #[arg(long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
