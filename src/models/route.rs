use serde::{Deserialize, Serialize};

/// Seat count used when the backend reports no capacity for a route
pub const DEFAULT_CAPACITY: u32 = 40;

/// A scheduled bus service as returned by `GET /api/routes`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: u64,
    pub bus_name: String,
    pub origin: String,
    pub destination: String,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<String>,
}

impl Route {
    /// Number of seats to lay out for this route. A missing, null or zero
    /// capacity lays out the default bus.
    #[must_use]
    pub fn seat_capacity(&self) -> u32 {
        self.capacity.filter(|&seats| seats > 0).unwrap_or(DEFAULT_CAPACITY)
    }

    /// "Bus name (Capacity: N)" using the capacity exactly as reported
    #[must_use]
    pub fn capacity_label(&self) -> String {
        match self.capacity {
            Some(seats) => format!("{} (Capacity: {seats})", self.bus_name),
            None => self.bus_name.clone(),
        }
    }

    /// Case-insensitive substring match over bus name, origin and destination.
    /// An empty term matches every route.
    #[must_use]
    pub fn matches_search(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        if needle.is_empty() {
            return true;
        }

        self.bus_name.to_lowercase().contains(&needle)
            || self.origin.to_lowercase().contains(&needle)
            || self.destination.to_lowercase().contains(&needle)
    }

    /// "Origin → Destination"
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} → {}", self.origin, self.destination)
    }

    /// Departure and arrival display string, when the backend supplies both
    #[must_use]
    pub fn schedule_label(&self) -> Option<String> {
        match (&self.departure_time, &self.arrival_time) {
            (Some(departure), Some(arrival)) => Some(format!("{departure} - {arrival}")),
            (Some(departure), None) => Some(departure.clone()),
            (None, Some(arrival)) => Some(format!("Arrives {arrival}")),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_route(id: u64, bus_name: &str, origin: &str, destination: &str) -> Route {
    Route {
        id,
        bus_name: bus_name.to_string(),
        origin: origin.to_string(),
        destination: destination.to_string(),
        capacity: Some(40),
        price: None,
        departure_time: None,
        arrival_time: None,
    }
}
