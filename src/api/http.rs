use super::ReservationApi;
use crate::config::ApiConfig;
use crate::logging::log;
use crate::models::{BookingRequest, CancellationRequest, OccupiedSeats, Route, TravelTime};

const ROUTES_UNAVAILABLE: &str = "Network response was not ok. Is the backend running?";
const SEATS_UNAVAILABLE: &str = "Could not fetch seat data from backend.";

/// [`ReservationApi`] over HTTP with `reqwest`
#[derive(Debug, Clone)]
pub struct HttpReservationApi {
    config: ApiConfig,
    client: reqwest::Client,
}

impl HttpReservationApi {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

/// Read a plain-text body, turning a non-success status into an error carrying that body
async fn text_or_error(response: reqwest::Response) -> Result<String, String> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {e}"))?;

    if status.is_success() {
        Ok(body)
    } else {
        log!("Backend answered {}: {}", status, body);
        Err(body)
    }
}

impl ReservationApi for HttpReservationApi {
    async fn list_routes(&self) -> Result<Vec<Route>, String> {
        let response = self
            .client
            .get(self.config.routes_url())
            .send()
            .await
            .map_err(|e| format!("Request failed: {e}"))?;

        if !response.status().is_success() {
            return Err(ROUTES_UNAVAILABLE.to_string());
        }

        response
            .json::<Vec<Route>>()
            .await
            .map_err(|e| format!("Failed to deserialize routes: {e}"))
    }

    async fn occupied_seats(&self, route_id: u64, travel_time: TravelTime) -> Result<OccupiedSeats, String> {
        let response = self
            .client
            .get(self.config.occupied_seats_url(route_id, travel_time))
            .send()
            .await
            .map_err(|e| format!("Request failed: {e}"))?;

        if !response.status().is_success() {
            return Err(SEATS_UNAVAILABLE.to_string());
        }

        response
            .json::<OccupiedSeats>()
            .await
            .map_err(|e| format!("Failed to deserialize seat data: {e}"))
    }

    async fn create_booking(&self, request: &BookingRequest) -> Result<String, String> {
        let response = self
            .client
            .post(self.config.reservations_url())
            .json(request)
            .send()
            .await
            .map_err(|e| format!("Request failed: {e}"))?;

        text_or_error(response).await
    }

    async fn cancel_booking(&self, request: &CancellationRequest) -> Result<String, String> {
        let response = self
            .client
            .delete(self.config.reservations_url())
            .json(request)
            .send()
            .await
            .map_err(|e| format!("Request failed: {e}"))?;

        text_or_error(response).await
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn unreachable_backend() -> HttpReservationApi {
        // Port 9 (discard) is never served by a browser-reachable HTTP server
        HttpReservationApi::new(ApiConfig::new("http://127.0.0.1:9"))
    }

    #[wasm_bindgen_test]
    async fn test_transport_failure_surfaces_as_error_text() {
        let api = unreachable_backend();
        let result = api.list_routes().await;

        let err = result.expect_err("no backend should be listening");
        assert!(err.starts_with("Request failed"));
    }

    #[wasm_bindgen_test]
    async fn test_booking_transport_failure_is_not_a_confirmation() {
        let api = unreachable_backend();
        let request = BookingRequest {
            customer_name: "Alice".to_string(),
            route_id: 5,
            travel_time: TravelTime::default(),
            seat_number: 4,
        };

        assert!(api.create_booking(&request).await.is_err());
    }
}
