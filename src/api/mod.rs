mod http;

pub use http::HttpReservationApi;

use crate::models::{BookingRequest, CancellationRequest, OccupiedSeats, Route, TravelTime};

/// Client side of the reservation backend.
///
/// Every error is the text shown to the user: the transport error, or the body the
/// backend sent back with a non-success status.
#[allow(async_fn_in_trait)]
pub trait ReservationApi {
    /// `GET /api/routes`
    async fn list_routes(&self) -> Result<Vec<Route>, String>;

    /// `GET /api/reservations/occupied` for one route at one travel time
    async fn occupied_seats(&self, route_id: u64, travel_time: TravelTime) -> Result<OccupiedSeats, String>;

    /// `POST /api/reservations`, returning the backend's confirmation text
    async fn create_booking(&self, request: &BookingRequest) -> Result<String, String>;

    /// `DELETE /api/reservations`, returning the raw body of a success response.
    ///
    /// A success status alone does not mean a booking was removed; see
    /// [`crate::flow::cancellation::interpret_cancel_response`].
    async fn cancel_booking(&self, request: &CancellationRequest) -> Result<String, String>;
}
