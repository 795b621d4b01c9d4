mod args;
mod commands;
mod config;
mod handlers;
mod output;
mod prompt;

pub use args::Cli;
pub use commands::run;
