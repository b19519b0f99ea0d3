use chrono::{Datelike, Duration, NaiveDate, Utc};

use crate::error::{MenuError, Result};

/// Buenos Aires runs at UTC-3 all year; Argentina observes no DST.
const UTC_OFFSET_HOURS: i64 = -3;

/// Canonical day names, Monday first, as the menu book spells them.
pub const DAY_NAMES: [&str; 7] = [
    "LUNES", "MARTES", "MIERCOLES", "JUEVES", "VIERNES", "SABADO", "DOMINGO",
];

/// Weekly menu partition: A covers Monday through Thursday, B the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetKey {
    A,
    B,
}

impl SetKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SetKey::A => "A",
            SetKey::B => "B",
        }
    }
}

/// Read-only facts about the day a run is for.
#[derive(Debug, Clone)]
pub struct DayContext {
    pub day_name: &'static str,

    /// dd/mm/yyyy, for people.
    pub display_date: String,

    /// yyyy-mm-dd, for the state record.
    pub iso_date: String,

    pub set_key: SetKey,
}

impl DayContext {
    /// Context for the current Buenos Aires date.
    pub fn today() -> Self {
        let local = Utc::now() + Duration::hours(UTC_OFFSET_HOURS);
        Self::for_date(local.date_naive())
    }

    /// Context for an explicit date.
    pub fn for_date(date: NaiveDate) -> Self {
        let day_index = date.weekday().num_days_from_monday() as usize;
        let set_key = if day_index >= 4 { SetKey::B } else { SetKey::A };

        DayContext {
            day_name: DAY_NAMES[day_index],
            display_date: date.format("%d/%m/%Y").to_string(),
            iso_date: date.format("%Y-%m-%d").to_string(),
            set_key,
        }
    }

    /// Parse a yyyy-mm-dd override into a context.
    pub fn parse_date(value: &str) -> Result<Self> {
        let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map_err(|e| MenuError::InvalidInput(format!("bad date '{value}': {e}")))?;
        Ok(Self::for_date(date))
    }
}
