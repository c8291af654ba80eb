use chrono::NaiveTime;

/// First hour of the departure grid (06:00)
pub const FIRST_DEPARTURE_HOUR: u32 = 6;

/// Hour at which the departure grid stops (last slot is 21:45)
pub const DEPARTURE_END_HOUR: u32 = 22;

/// Minute marks offered within each hour of the departure grid
pub const DEPARTURE_MINUTES: [u32; 2] = [0, 45];

/// Travel time preselected when the booking form opens
pub const DEFAULT_TRAVEL_TIME: NaiveTime = match NaiveTime::from_hms_opt(9, 0, 0) {
    Some(time) => time,
    None => panic!("Invalid default travel time"),
};

/// Seats per bus row: two pairs separated by the aisle
pub const SEATS_PER_ROW: u32 = 4;

/// Marker the backend puts in a cancellation body that actually removed a booking
pub const CANCELLED_MARKER: &str = "cancelled";
