use serde::{Deserialize, Serialize};
use super::travel_time::TravelTime;

/// Body of `POST /api/reservations`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub customer_name: String,
    pub route_id: u64,
    pub travel_time: TravelTime,
    pub seat_number: u32,
}

/// Body of `DELETE /api/reservations`.
///
/// A booking is identified by customer and route only; the backend is assumed to
/// hold at most one booking per customer per route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancellationRequest {
    pub customer_name: String,
    pub route_id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_booking_request_wire_format() {
        let request = BookingRequest {
            customer_name: "Alice".to_string(),
            route_id: 5,
            travel_time: TravelTime::parse("09:00").expect("valid slot"),
            seat_number: 12,
        };

        let value = serde_json::to_value(&request).expect("should serialize");
        assert_eq!(
            value,
            json!({
                "customerName": "Alice",
                "routeId": 5,
                "travelTime": "09:00",
                "seatNumber": 12
            })
        );
    }

    #[test]
    fn test_cancellation_request_wire_format() {
        let request = CancellationRequest {
            customer_name: "Bob".to_string(),
            route_id: 7,
        };

        let value = serde_json::to_value(&request).expect("should serialize");
        assert_eq!(value, json!({ "customerName": "Bob", "routeId": 7 }));
    }
}
