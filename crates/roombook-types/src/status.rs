use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical booking status as the server stores it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Pending,
    Approved,
    Rejected,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Approved => "Approved",
            BookingStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" | "0" => Ok(BookingStatus::Pending),
            "approved" | "1" => Ok(BookingStatus::Approved),
            "rejected" | "2" => Ok(BookingStatus::Rejected),
            other => Err(format!("unrecognized status '{}'", other)),
        }
    }
}

/// Booking status as it appears on the wire: either the canonical text or a
/// legacy numeric code (0=Pending, 1=Approved, 2=Rejected).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatusValue {
    Text(String),
    Code(i64),
}

impl StatusValue {
    pub fn canonical(status: BookingStatus) -> Self {
        StatusValue::Text(status.as_str().to_string())
    }

    /// Normalize the loose wire value into one of the four canonical
    /// outcomes. Total: never fails, never panics.
    pub fn normalized(&self) -> NormalizedStatus {
        match self {
            StatusValue::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
                "pending" | "0" => NormalizedStatus::Pending,
                "approved" | "1" => NormalizedStatus::Approved,
                "rejected" | "2" => NormalizedStatus::Rejected,
                _ => NormalizedStatus::Unknown,
            },
            StatusValue::Code(0) => NormalizedStatus::Pending,
            StatusValue::Code(1) => NormalizedStatus::Approved,
            StatusValue::Code(2) => NormalizedStatus::Rejected,
            StatusValue::Code(_) => NormalizedStatus::Unknown,
        }
    }

    /// Display label: canonical text when recognized, otherwise the raw
    /// value as a fallback ("-" when blank).
    pub fn label(&self) -> String {
        match self.normalized() {
            NormalizedStatus::Pending => "Pending".to_string(),
            NormalizedStatus::Approved => "Approved".to_string(),
            NormalizedStatus::Rejected => "Rejected".to_string(),
            NormalizedStatus::Unknown => match self {
                StatusValue::Text(s) if s.trim().is_empty() => "-".to_string(),
                StatusValue::Text(s) => s.clone(),
                StatusValue::Code(n) => n.to_string(),
            },
        }
    }
}

impl From<BookingStatus> for StatusValue {
    fn from(status: BookingStatus) -> Self {
        StatusValue::canonical(status)
    }
}

/// Outcome of status normalization, the single gate for offering the
/// approve/reject actions on a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizedStatus {
    Pending,
    Approved,
    Rejected,
    Unknown,
}

impl NormalizedStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, NormalizedStatus::Pending)
    }
}
