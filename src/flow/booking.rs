use crate::models::{BookingRequest, OccupiedSeats, Route, SeatStatus, TravelTime};

pub const NAME_REQUIRED: &str = "Please enter your name.";
pub const SEAT_REQUIRED: &str = "Please select a seat.";
pub const SEATS_NOT_LOADED: &str = "Seat data is not available for this time.";
pub const ALREADY_SUBMITTING: &str = "A booking is already being submitted.";

/// Logical state of the booking screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingPhase {
    SelectingTime,
    LoadingSeats,
    Ready,
    SeatError(String),
    Submitting,
    BookingError(String),
    Booked { message: String },
}

/// Identifies one occupancy fetch.
///
/// Only the response to the most recently issued ticket is applied; anything
/// older belongs to a time slot the user already moved away from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccupancyTicket {
    pub route_id: u64,
    pub travel_time: TravelTime,
    generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SeatLoad {
    Idle,
    Loading,
    Loaded(OccupiedSeats),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Submission {
    Idle,
    InFlight,
    Failed(String),
    Booked(String),
}

/// Booking screen for a single route: time slot, occupancy, seat, name, submission.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingFlow {
    route: Route,
    customer_name: String,
    travel_time: TravelTime,
    selected_seat: Option<u32>,
    seats: SeatLoad,
    submission: Submission,
    generation: u64,
}

impl BookingFlow {
    #[must_use]
    pub fn new(route: Route) -> Self {
        Self {
            route,
            customer_name: String::new(),
            travel_time: TravelTime::default(),
            selected_seat: None,
            seats: SeatLoad::Idle,
            submission: Submission::Idle,
            generation: 0,
        }
    }

    #[must_use]
    pub fn route(&self) -> &Route {
        &self.route
    }

    #[must_use]
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    #[must_use]
    pub fn travel_time(&self) -> TravelTime {
        self.travel_time
    }

    #[must_use]
    pub fn selected_seat(&self) -> Option<u32> {
        self.selected_seat
    }

    #[must_use]
    pub fn phase(&self) -> BookingPhase {
        match (&self.submission, &self.seats) {
            (Submission::Booked(message), _) => BookingPhase::Booked { message: message.clone() },
            (Submission::InFlight, _) => BookingPhase::Submitting,
            (_, SeatLoad::Failed(err)) => BookingPhase::SeatError(err.clone()),
            (_, SeatLoad::Loading) => BookingPhase::LoadingSeats,
            (Submission::Failed(err), _) => BookingPhase::BookingError(err.clone()),
            (Submission::Idle, SeatLoad::Idle) => BookingPhase::SelectingTime,
            (Submission::Idle, SeatLoad::Loaded(_)) => BookingPhase::Ready,
        }
    }

    #[must_use]
    pub fn seat_error(&self) -> Option<&str> {
        match &self.seats {
            SeatLoad::Failed(err) => Some(err),
            _ => None,
        }
    }

    #[must_use]
    pub fn booking_error(&self) -> Option<&str> {
        match &self.submission {
            Submission::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Backend confirmation text once the booking went through
    #[must_use]
    pub fn confirmation(&self) -> Option<&str> {
        match &self.submission {
            Submission::Booked(message) => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_loading_seats(&self) -> bool {
        self.seats == SeatLoad::Loading
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submission == Submission::InFlight
    }

    #[must_use]
    pub fn is_booked(&self) -> bool {
        matches!(self.submission, Submission::Booked(_))
    }

    /// Whether the "Book Now" button should be enabled
    #[must_use]
    pub fn can_submit(&self) -> bool {
        matches!(self.seats, SeatLoad::Loaded(_))
            && matches!(self.submission, Submission::Idle | Submission::Failed(_))
            && self.selected_seat.is_some()
            && !self.customer_name.trim().is_empty()
    }

    /// Status of one seat for rendering. Seats are only shown once occupancy has loaded.
    #[must_use]
    pub fn seat_status(&self, seat: u32) -> SeatStatus {
        match &self.seats {
            SeatLoad::Loaded(occupied) => occupied.status_of(seat, self.selected_seat),
            _ => SeatStatus::Occupied,
        }
    }

    pub fn set_customer_name(&mut self, name: impl Into<String>) {
        self.customer_name = name.into();
    }

    /// Switch to `travel_time` and start a fresh occupancy fetch for it.
    ///
    /// Clears the seat selection and every error before returning the ticket for
    /// the new fetch. Returns `None` while a booking is in flight or after it
    /// completed, since the time can no longer change.
    pub fn select_time(&mut self, travel_time: TravelTime) -> Option<OccupancyTicket> {
        if matches!(self.submission, Submission::InFlight | Submission::Booked(_)) {
            return None;
        }

        self.travel_time = travel_time;
        self.selected_seat = None;
        self.submission = Submission::Idle;
        self.seats = SeatLoad::Loading;
        self.generation += 1;

        Some(OccupancyTicket {
            route_id: self.route.id,
            travel_time,
            generation: self.generation,
        })
    }

    /// Apply the outcome of the fetch identified by `ticket`.
    ///
    /// Returns `false` and leaves the state untouched when the ticket is stale.
    pub fn apply_occupancy(&mut self, ticket: OccupancyTicket, result: Result<OccupiedSeats, String>) -> bool {
        let current = ticket.generation == self.generation
            && ticket.route_id == self.route.id
            && ticket.travel_time == self.travel_time
            && self.seats == SeatLoad::Loading;
        if !current {
            return false;
        }

        self.seats = match result {
            Ok(occupied) => SeatLoad::Loaded(occupied),
            Err(err) => SeatLoad::Failed(err),
        };
        // Only a "seats not loaded" rejection can be pending here
        self.submission = Submission::Idle;
        true
    }

    /// Make `seat` the only selected seat. Occupied or out-of-range seats are ignored.
    pub fn select_seat(&mut self, seat: u32) -> bool {
        if matches!(self.submission, Submission::InFlight | Submission::Booked(_)) {
            return false;
        }
        if !(1..=self.route.seat_capacity()).contains(&seat) {
            return false;
        }

        match &self.seats {
            SeatLoad::Loaded(occupied) if !occupied.contains(seat) => {
                self.selected_seat = Some(seat);
                true
            }
            _ => false,
        }
    }

    /// Validate the form and, if it passes, enter `Submitting` and return the request to send.
    ///
    /// # Errors
    ///
    /// Returns the validation message when no request should be sent. Unless a
    /// submission is already under way, the message is also recorded as the booking
    /// error shown next to the form.
    pub fn begin_submit(&mut self) -> Result<BookingRequest, String> {
        if self.is_submitting() || self.is_booked() {
            return Err(ALREADY_SUBMITTING.to_string());
        }

        match self.validate() {
            Ok(request) => {
                self.submission = Submission::InFlight;
                Ok(request)
            }
            Err(err) => {
                self.submission = Submission::Failed(err.clone());
                Err(err)
            }
        }
    }

    fn validate(&self) -> Result<BookingRequest, String> {
        match &self.seats {
            SeatLoad::Loaded(_) => {}
            SeatLoad::Failed(err) => return Err(err.clone()),
            SeatLoad::Idle | SeatLoad::Loading => return Err(SEATS_NOT_LOADED.to_string()),
        }

        let customer_name = self.customer_name.trim();
        if customer_name.is_empty() {
            return Err(NAME_REQUIRED.to_string());
        }
        let seat_number = self.selected_seat.ok_or_else(|| SEAT_REQUIRED.to_string())?;

        Ok(BookingRequest {
            customer_name: customer_name.to_string(),
            route_id: self.route.id,
            travel_time: self.travel_time,
            seat_number,
        })
    }

    /// Record the backend's answer to the request returned by [`Self::begin_submit`]
    pub fn finish_submit(&mut self, result: Result<String, String>) {
        if !self.is_submitting() {
            return;
        }

        self.submission = match result {
            Ok(message) => Submission::Booked(message),
            Err(err) => Submission::Failed(err),
        };
    }
}
