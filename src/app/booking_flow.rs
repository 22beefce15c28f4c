use chrono::{DateTime, Utc};
use tracing::info;

use crate::domain::models::event::Event;
use crate::domain::services::booking_service::{BookingOutcome, SubmitBooking};
use crate::domain::services::eligibility;
use crate::domain::services::presentation::{action_state, ActionState, SubmissionState, Toast};
use crate::error::AppError;
use crate::state::AppState;

/// Sales tax applied on top of the base ticket price, display only.
pub const TAX_RATE: f64 = 0.10;

#[derive(Debug, Clone, Default)]
pub struct Attendee {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceSummary {
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Price summary for `count` tickets: subtotal plus 10% tax, each rounded to
/// cents before the sum so the displayed lines always add up.
pub fn quote(base_price: f64, count: u32) -> PriceSummary {
    let subtotal = round_cents(base_price * count as f64);
    let tax = round_cents(subtotal * TAX_RATE);
    PriceSummary {
        subtotal,
        tax,
        total: round_cents(subtotal + tax),
    }
}

/// State of the ticket-booking screen: the attendee list and the submission
/// lifecycle for one event. The attendee list and ticket count move in
/// lockstep; the count never drops below one.
pub struct BookingFlow {
    event: Event,
    attendees: Vec<Attendee>,
    submission: SubmissionState,
}

impl BookingFlow {
    pub fn new(event: Event) -> Self {
        Self {
            event,
            attendees: vec![Attendee::default()],
            submission: SubmissionState::Idle,
        }
    }

    pub fn event(&self) -> &Event {
        &self.event
    }

    pub fn attendees(&self) -> &[Attendee] {
        &self.attendees
    }

    pub fn ticket_count(&self) -> u32 {
        self.attendees.len() as u32
    }

    pub fn submission(&self) -> SubmissionState {
        self.submission
    }

    pub fn set_ticket_count(&mut self, count: u32) {
        let count = count.max(1) as usize;
        if count > self.attendees.len() {
            self.attendees.resize_with(count, Attendee::default);
        } else {
            self.attendees.truncate(count);
        }
    }

    pub fn add_attendee(&mut self) {
        self.attendees.push(Attendee::default());
    }

    /// Removing the last remaining attendee is a no-op.
    pub fn remove_attendee(&mut self, index: usize) {
        if self.attendees.len() > 1 && index < self.attendees.len() {
            self.attendees.remove(index);
        }
    }

    pub fn set_attendee(&mut self, index: usize, attendee: Attendee) {
        if let Some(slot) = self.attendees.get_mut(index) {
            *slot = attendee;
        }
    }

    pub fn price_summary(&self) -> PriceSummary {
        quote(self.event.base_price().unwrap_or(0.0), self.ticket_count())
    }

    /// Free events skip the card fields entirely.
    pub fn requires_payment_details(&self) -> bool {
        !self.event.is_free()
    }

    pub fn action(&self, now: DateTime<Utc>) -> ActionState {
        let eligibility = eligibility::evaluate(&self.event, now);
        action_state(&eligibility, self.submission)
    }

    /// Drives one submission attempt and returns the toast to show.
    ///
    /// The flow itself enforces the double-click contract: while a request is
    /// in flight or after a registered terminal state, further calls return
    /// without contacting the API. A failed attempt resets to Idle so the
    /// user can retry manually.
    pub async fn submit(&mut self, state: &AppState) -> Result<Toast, AppError> {
        match self.submission {
            SubmissionState::InFlight => {
                return Ok(Toast::error("A booking is already in progress."))
            }
            SubmissionState::Registered => {
                return Ok(Toast::success("You are already registered for this event."))
            }
            SubmissionState::Idle => {}
        }

        let user = state.auth.require_user()?;

        self.submission = SubmissionState::InFlight;
        let request = SubmitBooking::for_event(user.id, &self.event, self.ticket_count());
        match state.booking_service.submit(request).await {
            Ok(BookingOutcome::Confirmed(booking)) => {
                self.submission = SubmissionState::Registered;
                info!(booking_id = %booking.id, "booking flow complete");
                Ok(Toast::success("Booking successful!"))
            }
            Ok(BookingOutcome::AlreadyRegistered) => {
                self.submission = SubmissionState::Registered;
                Ok(Toast::success("You are already registered for this event."))
            }
            Err(e) => {
                self.submission = SubmissionState::Idle;
                Ok(Toast::from_error(&e))
            }
        }
    }
}
