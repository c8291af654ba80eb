mod booking;
mod route;
mod seat;
mod travel_time;

pub use booking::{BookingRequest, CancellationRequest};
pub use route::{Route, DEFAULT_CAPACITY};
pub use seat::{seat_rows, OccupiedSeats, SeatRow, SeatStatus};
pub use travel_time::TravelTime;

#[cfg(test)]
pub(crate) use route::sample_route;
