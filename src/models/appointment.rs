use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One bookable (or cancelled) entry in the appointment reference table.
/// Rows are identified by position; the table is immutable after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub doctor_name: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub status: AppointmentStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }

    /// Strict parse: reference data with an unknown status must fail the
    /// load, not be silently coerced.
    pub fn parse(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "scheduled" => Ok(AppointmentStatus::Scheduled),
            "completed" => Ok(AppointmentStatus::Completed),
            "cancelled" => Ok(AppointmentStatus::Cancelled),
            other => Err(anyhow::anyhow!("unrecognized appointment status: {other}")),
        }
    }
}

/// A slot as reported to the caller: time + location for one open entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    pub time: String,
    pub location: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_statuses() {
        assert_eq!(
            AppointmentStatus::parse("scheduled").unwrap(),
            AppointmentStatus::Scheduled
        );
        assert_eq!(
            AppointmentStatus::parse("Cancelled").unwrap(),
            AppointmentStatus::Cancelled
        );
        assert_eq!(
            AppointmentStatus::parse(" COMPLETED ").unwrap(),
            AppointmentStatus::Completed
        );
    }

    #[test]
    fn test_parse_unknown_status_is_error() {
        assert!(AppointmentStatus::parse("no-show").is_err());
        assert!(AppointmentStatus::parse("").is_err());
    }

    #[test]
    fn test_as_str_round_trip() {
        for status in [
            AppointmentStatus::Scheduled,
            AppointmentStatus::Completed,
            AppointmentStatus::Cancelled,
        ] {
            assert_eq!(AppointmentStatus::parse(status.as_str()).unwrap(), status);
        }
    }
}
