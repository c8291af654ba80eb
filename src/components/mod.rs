#![allow(clippy::needless_pass_by_value)]

pub mod app;
pub mod book_seat;
pub mod cancel_booking;
pub mod route_catalog;
pub mod seat_grid;

use crate::api::HttpReservationApi;
use crate::config::ApiConfig;
use leptos::use_context;

/// HTTP client for the backend configured by the enclosing [`app::App`]
pub(crate) fn use_reservation_api() -> HttpReservationApi {
    let config = use_context::<ApiConfig>().unwrap_or_else(ApiConfig::from_environment);
    HttpReservationApi::new(config)
}
