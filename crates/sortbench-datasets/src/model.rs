//! Record types.
//!
//! The three record shapes share no trait or base type. Each exposes the key
//! the benchmark suite sorts it by as a plain function, usable directly as a
//! key extractor.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Text format of appointment timestamps, e.g. `2025-03-14T09:30`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// A scheduled appointment.
///
/// # Example
///
/// ```
/// use sortbench_datasets::Appointment;
///
/// let appointment = Appointment::parse("APT-001", "Torres", "2025-03-14T09:30").unwrap();
/// assert_eq!(appointment.to_string(), "APT-001 Torres (2025-03-14T09:30)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub last_name: String,
    #[serde(with = "timestamp")]
    pub date_time: NaiveDateTime,
}

impl Appointment {
    /// Creates an appointment.
    pub fn new(id: impl Into<String>, last_name: impl Into<String>, date_time: NaiveDateTime) -> Self {
        Self {
            id: id.into(),
            last_name: last_name.into(),
            date_time,
        }
    }

    /// Creates an appointment from a [`TIMESTAMP_FORMAT`] timestamp.
    pub fn parse(
        id: impl Into<String>,
        last_name: impl Into<String>,
        date_time: &str,
    ) -> Result<Self, chrono::ParseError> {
        let date_time = NaiveDateTime::parse_from_str(date_time, TIMESTAMP_FORMAT)?;
        Ok(Self::new(id, last_name, date_time))
    }

    /// Sort key: the appointment time.
    pub fn date_time_key(appointment: &Appointment) -> NaiveDateTime {
        appointment.date_time
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({})",
            self.id,
            self.last_name,
            self.date_time.format(TIMESTAMP_FORMAT)
        )
    }
}

/// A patient waiting for care.
///
/// Priority 1 is the most urgent, 3 the least.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    pub last_name: String,
    pub priority: i32,
}

impl Patient {
    /// Creates a patient.
    pub fn new(id: impl Into<String>, last_name: impl Into<String>, priority: i32) -> Self {
        Self {
            id: id.into(),
            last_name: last_name.into(),
            priority,
        }
    }

    /// Sort key: the priority.
    pub fn priority_key(patient: &Patient) -> i32 {
        patient.priority
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.last_name, self.priority)
    }
}

/// A stocked medical supply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub supply: String,
    pub stock: i32,
}

impl InventoryItem {
    /// Creates an inventory item.
    pub fn new(id: impl Into<String>, supply: impl Into<String>, stock: i32) -> Self {
        Self {
            id: id.into(),
            supply: supply.into(),
            stock,
        }
    }

    /// Sort key: the units in stock.
    pub fn stock_key(item: &InventoryItem) -> i32 {
        item.stock
    }
}

impl fmt::Display for InventoryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Stock: {})", self.supply, self.stock)
    }
}

mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&text, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
