use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use crate::constants::{DEFAULT_TRAVEL_TIME, DEPARTURE_END_HOUR, DEPARTURE_MINUTES, FIRST_DEPARTURE_HOUR};

/// A departure slot on the fixed daily grid, sent to the backend as `HH:MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TravelTime(NaiveTime);

impl TravelTime {
    /// All bookable slots in order: 06:00, 06:45, 07:00, ... 21:00, 21:45
    #[must_use]
    pub fn slots() -> Vec<Self> {
        (FIRST_DEPARTURE_HOUR..DEPARTURE_END_HOUR)
            .flat_map(|hour| {
                DEPARTURE_MINUTES
                    .into_iter()
                    .filter_map(move |minute| NaiveTime::from_hms_opt(hour, minute, 0))
            })
            .map(Self)
            .collect()
    }

    /// Parse an `HH:MM` string, accepting only slots on the grid
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid time or is not one of the bookable slots.
    pub fn parse(s: &str) -> Result<Self, String> {
        let time = NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map_err(|e| format!("Invalid travel time '{s}': {e}"))?;
        Self::from_time(time).ok_or_else(|| format!("No departure at {s}"))
    }

    /// Wrap a time if it falls on the departure grid
    #[must_use]
    pub fn from_time(time: NaiveTime) -> Option<Self> {
        let on_grid = (FIRST_DEPARTURE_HOUR..DEPARTURE_END_HOUR).contains(&time.hour())
            && DEPARTURE_MINUTES.contains(&time.minute())
            && time.second() == 0
            && time.nanosecond() == 0;
        on_grid.then_some(Self(time))
    }

    #[must_use]
    pub fn time(self) -> NaiveTime {
        self.0
    }
}

impl Default for TravelTime {
    fn default() -> Self {
        Self(DEFAULT_TRAVEL_TIME)
    }
}

impl fmt::Display for TravelTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl Serialize for TravelTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TravelTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
