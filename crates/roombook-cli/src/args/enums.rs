use clap::ValueEnum;
use roombook_types::BookingStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

/// Canonical status as a CLI argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Pending,
    Approved,
    Rejected,
}

impl From<StatusArg> for BookingStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Pending => BookingStatus::Pending,
            StatusArg::Approved => BookingStatus::Approved,
            StatusArg::Rejected => BookingStatus::Rejected,
        }
    }
}
