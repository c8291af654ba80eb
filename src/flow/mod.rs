//! Screen state machines, kept free of Leptos so they can be driven directly in tests.
//! Components own one of these in a signal and feed it network results.

pub mod booking;
pub mod cancellation;
pub mod catalog;

use std::cell::Cell;
use std::rc::Rc;

/// Whether the component that started a request is still on screen.
///
/// Cloned into each spawned request; the owning component retires it on cleanup
/// so late responses are dropped instead of written into disposed signals.
#[derive(Debug, Clone)]
pub struct Liveness(Rc<Cell<bool>>);

impl Liveness {
    #[must_use]
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    pub fn retire(&self) {
        self.0.set(false);
    }

    /// Hand `response` to `apply` while the owner is alive. Once retired the
    /// response is dropped and `state` is left as it was.
    pub fn deliver<S, T>(&self, state: &mut S, response: T, apply: impl FnOnce(&mut S, T)) -> bool {
        if !self.is_alive() {
            return false;
        }
        apply(state, response);
        true
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::booking::{BookingFlow, BookingPhase};
    use super::cancellation::CancellationFlow;
    use crate::api::ReservationApi;
    use crate::models::{
        sample_route, BookingRequest, CancellationRequest, OccupiedSeats, Route, TravelTime,
    };
    use std::cell::RefCell;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    /// Canned backend that records every booking it receives
    #[derive(Default)]
    struct FakeApi {
        occupied: Vec<u32>,
        booking_reply: Option<Result<String, String>>,
        cancel_reply: Option<Result<String, String>>,
        bookings: RefCell<Vec<BookingRequest>>,
    }

    impl ReservationApi for FakeApi {
        async fn list_routes(&self) -> Result<Vec<Route>, String> {
            Ok(vec![sample_route(5, "Express 1", "Chennai", "Madurai")])
        }

        async fn occupied_seats(&self, _route_id: u64, _travel_time: TravelTime) -> Result<OccupiedSeats, String> {
            Ok(self.occupied.iter().copied().collect())
        }

        async fn create_booking(&self, request: &BookingRequest) -> Result<String, String> {
            self.bookings.borrow_mut().push(request.clone());
            self.booking_reply.clone().unwrap_or_else(|| Err("no reply configured".to_string()))
        }

        async fn cancel_booking(&self, _request: &CancellationRequest) -> Result<String, String> {
            self.cancel_reply.clone().unwrap_or_else(|| Err(String::new()))
        }
    }

    async fn book(api: &FakeApi, name: &str, seat: u32) -> BookingFlow {
        let routes = api.list_routes().await.expect("fake routes");
        let mut flow = BookingFlow::new(routes[0].clone());

        let ticket = flow.select_time(TravelTime::default()).expect("time can change");
        let occupied = api.occupied_seats(ticket.route_id, ticket.travel_time).await;
        flow.apply_occupancy(ticket, occupied);

        flow.set_customer_name(name);
        flow.select_seat(seat);
        if let Ok(request) = flow.begin_submit() {
            let reply = api.create_booking(&request).await;
            flow.finish_submit(reply);
        }
        flow
    }

    #[wasm_bindgen_test]
    async fn test_booking_against_fake_backend() {
        let api = FakeApi {
            occupied: vec![1, 2, 3],
            booking_reply: Some(Ok("Booking confirmed for Alice".to_string())),
            ..FakeApi::default()
        };

        let flow = book(&api, "Alice", 4).await;

        assert_eq!(
            flow.phase(),
            BookingPhase::Booked { message: "Booking confirmed for Alice".to_string() }
        );
        assert_eq!(api.bookings.borrow().len(), 1);
        assert_eq!(api.bookings.borrow()[0].seat_number, 4);
    }

    #[wasm_bindgen_test]
    async fn test_occupied_seat_never_reaches_backend() {
        let api = FakeApi {
            occupied: vec![1, 2, 3],
            booking_reply: Some(Ok("Booking confirmed for Alice".to_string())),
            ..FakeApi::default()
        };

        let flow = book(&api, "Alice", 2).await;

        assert!(api.bookings.borrow().is_empty());
        assert!(flow.booking_error().is_some());
    }

    #[wasm_bindgen_test]
    async fn test_conflict_keeps_form() {
        let api = FakeApi {
            booking_reply: Some(Err("Seat already taken".to_string())),
            ..FakeApi::default()
        };

        let flow = book(&api, "Alice", 10).await;

        assert_eq!(flow.phase(), BookingPhase::BookingError("Seat already taken".to_string()));
        assert_eq!(flow.customer_name(), "Alice");
        assert_eq!(flow.travel_time(), TravelTime::default());
    }

    #[wasm_bindgen_test]
    async fn test_cancellation_against_fake_backend() {
        let api = FakeApi {
            cancel_reply: Some(Ok("No reservation found".to_string())),
            ..FakeApi::default()
        };

        let mut flow = CancellationFlow::new();
        flow.set_customer_name("Bob");
        flow.set_route_id("5");
        let request = flow.begin_submit().expect("valid form");
        flow.finish_submit(api.cancel_booking(&request).await);

        assert_eq!(flow.error(), Some("No reservation found"));
    }
}
