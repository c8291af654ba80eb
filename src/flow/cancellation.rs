use crate::constants::CANCELLED_MARKER;
use crate::models::CancellationRequest;

pub const FIELDS_REQUIRED: &str = "Please provide both Customer Name and Route ID.";
pub const ROUTE_ID_NOT_A_NUMBER: &str = "Route ID must be a number.";
pub const CANCELLATION_FAILED: &str = "Cancellation failed. Please check details and try again.";

/// Check the form and build the deletion request.
///
/// # Errors
///
/// Returns a message for the user when a field is missing or the route id is not an integer.
pub fn validate_cancellation(customer_name: &str, route_id: &str) -> Result<CancellationRequest, String> {
    let customer_name = customer_name.trim();
    let route_id = route_id.trim();
    if customer_name.is_empty() || route_id.is_empty() {
        return Err(FIELDS_REQUIRED.to_string());
    }

    let route_id = route_id
        .parse::<u64>()
        .map_err(|_| ROUTE_ID_NOT_A_NUMBER.to_string())?;

    Ok(CancellationRequest {
        customer_name: customer_name.to_string(),
        route_id,
    })
}

/// Decide whether a cancellation really happened.
///
/// The backend answers "not found" style outcomes with a success status, so a
/// success body only counts when it contains `cancelled`.
///
/// # Errors
///
/// Returns the text to show when the booking was not cancelled.
pub fn interpret_cancel_response(response: Result<String, String>) -> Result<String, String> {
    match response {
        Ok(body) if body.contains(CANCELLED_MARKER) => Ok(body),
        Ok(body) => Err(body),
        Err(body) if body.trim().is_empty() => Err(CANCELLATION_FAILED.to_string()),
        Err(body) => Err(body),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum Status {
    #[default]
    Editing,
    Submitting,
    Failed(String),
    Confirmed(String),
}

/// The cancel-booking form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CancellationFlow {
    customer_name: String,
    route_id: String,
    status: Status,
}

impl CancellationFlow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    #[must_use]
    pub fn route_id(&self) -> &str {
        &self.route_id
    }

    pub fn set_customer_name(&mut self, name: impl Into<String>) {
        self.customer_name = name.into();
    }

    pub fn set_route_id(&mut self, route_id: impl Into<String>) {
        self.route_id = route_id.into();
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            Status::Failed(err) => Some(err),
            _ => None,
        }
    }

    #[must_use]
    pub fn confirmation(&self) -> Option<&str> {
        match &self.status {
            Status::Confirmed(message) => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.status == Status::Submitting
    }

    /// Validate the form and enter the submitting state.
    ///
    /// # Errors
    ///
    /// Returns the validation message (also kept as the displayed error) when
    /// nothing should be sent.
    pub fn begin_submit(&mut self) -> Result<CancellationRequest, String> {
        if matches!(self.status, Status::Submitting | Status::Confirmed(_)) {
            return Err("A cancellation is already in progress.".to_string());
        }

        match validate_cancellation(&self.customer_name, &self.route_id) {
            Ok(request) => {
                self.status = Status::Submitting;
                Ok(request)
            }
            Err(err) => {
                self.status = Status::Failed(err.clone());
                Err(err)
            }
        }
    }

    /// Record the backend's answer to the request from [`Self::begin_submit`]
    pub fn finish_submit(&mut self, response: Result<String, String>) {
        if !self.is_submitting() {
            return;
        }

        self.status = match interpret_cancel_response(response) {
            Ok(message) => Status::Confirmed(message),
            Err(err) => Status::Failed(err),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_both_fields() {
        assert_eq!(validate_cancellation("", "5"), Err(FIELDS_REQUIRED.to_string()));
        assert_eq!(validate_cancellation("Bob", ""), Err(FIELDS_REQUIRED.to_string()));
        assert_eq!(validate_cancellation("  ", " "), Err(FIELDS_REQUIRED.to_string()));
    }

    #[test]
    fn test_validate_parses_route_id() {
        let request = validate_cancellation("Bob", " 42 ").expect("valid form");
        assert_eq!(request.customer_name, "Bob");
        assert_eq!(request.route_id, 42);

        assert_eq!(validate_cancellation("Bob", "abc"), Err(ROUTE_ID_NOT_A_NUMBER.to_string()));
        assert_eq!(validate_cancellation("Bob", "-3"), Err(ROUTE_ID_NOT_A_NUMBER.to_string()));
    }

    #[test]
    fn test_cancelled_body_is_success() {
        let outcome = interpret_cancel_response(Ok("Reservation cancelled for Bob".to_string()));
        assert_eq!(outcome, Ok("Reservation cancelled for Bob".to_string()));
    }

    #[test]
    fn test_success_status_without_marker_is_error() {
        let outcome = interpret_cancel_response(Ok("No reservation found".to_string()));
        assert_eq!(outcome, Err("No reservation found".to_string()));
    }

    #[test]
    fn test_failure_status_uses_body_or_fallback() {
        assert_eq!(
            interpret_cancel_response(Err("Route not found".to_string())),
            Err("Route not found".to_string())
        );
        assert_eq!(
            interpret_cancel_response(Err(String::new())),
            Err(CANCELLATION_FAILED.to_string())
        );
    }

    #[test]
    fn test_flow_confirms_cancellation() {
        let mut flow = CancellationFlow::new();
        flow.set_customer_name("Bob");
        flow.set_route_id("5");

        let request = flow.begin_submit().expect("valid form");
        assert_eq!(request.route_id, 5);
        assert!(flow.is_submitting());

        flow.finish_submit(Ok("Reservation cancelled for Bob".to_string()));
        assert_eq!(flow.confirmation(), Some("Reservation cancelled for Bob"));
        assert_eq!(flow.error(), None);
    }

    #[test]
    fn test_flow_reports_not_found_as_error() {
        let mut flow = CancellationFlow::new();
        flow.set_customer_name("Bob");
        flow.set_route_id("5");
        flow.begin_submit().expect("valid form");

        flow.finish_submit(Ok("No reservation found".to_string()));
        assert_eq!(flow.confirmation(), None);
        assert_eq!(flow.error(), Some("No reservation found"));

        // The form stays editable for another attempt
        assert!(flow.begin_submit().is_ok());
    }

    #[test]
    fn test_flow_rejects_missing_fields_locally() {
        let mut flow = CancellationFlow::new();
        flow.set_customer_name("Bob");

        assert!(flow.begin_submit().is_err());
        assert_eq!(flow.error(), Some(FIELDS_REQUIRED));
        assert!(!flow.is_submitting());
    }

    #[test]
    fn test_confirmed_flow_is_terminal() {
        let mut flow = CancellationFlow::new();
        flow.set_customer_name("Bob");
        flow.set_route_id("5");
        flow.begin_submit().expect("valid form");
        flow.finish_submit(Ok("Reservation cancelled for Bob".to_string()));

        assert!(flow.begin_submit().is_err());
        assert_eq!(flow.confirmation(), Some("Reservation cancelled for Bob"));
    }
}
