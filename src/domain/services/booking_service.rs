use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::domain::models::booking::{Booking, BookingStatus, NewBooking, NewBookingParams};
use crate::domain::models::event::Event;
use crate::domain::ports::BookingsApi;
use crate::error::AppError;

/// Terminal result of a submission attempt. Transport and server failures
/// come back as `Err`; `AppError::is_retryable` tells the caller whether a
/// manual re-click is worth offering.
#[derive(Debug, Clone)]
pub enum BookingOutcome {
    Confirmed(Booking),
    AlreadyRegistered,
}

pub struct SubmitBooking {
    pub user_id: String,
    pub event_id: String,
    pub ticket_count: u32,
    pub unit_price: f64,
    pub free_event: bool,
}

impl SubmitBooking {
    pub fn for_event(user_id: impl Into<String>, event: &Event, ticket_count: u32) -> Self {
        Self {
            user_id: user_id.into(),
            event_id: event.id.clone(),
            ticket_count,
            unit_price: event.base_price().unwrap_or(0.0),
            free_event: event.is_free(),
        }
    }
}

/// Orchestrates booking creation and cancellation against the remote API.
///
/// Eligibility is the caller's problem: the submitter assumes it was checked
/// beforehand and the server is not assumed to re-validate either.
pub struct BookingService {
    bookings: Arc<dyn BookingsApi>,
}

impl BookingService {
    pub fn new(bookings: Arc<dyn BookingsApi>) -> Self {
        Self { bookings }
    }

    /// Submits one booking. The prior-registration read completes before the
    /// create is issued, so a repeat invocation after a success short-circuits
    /// to `AlreadyRegistered` instead of double-booking.
    pub async fn submit(&self, request: SubmitBooking) -> Result<BookingOutcome, AppError> {
        if request.ticket_count == 0 {
            return Err(AppError::Validation(
                "At least one ticket is required".into(),
            ));
        }

        let existing = self.bookings.list().await?;
        let already_registered = existing.iter().any(|b| {
            b.user_id == request.user_id
                && b.event_id == request.event_id
                && b.booking_status == BookingStatus::Confirmed
        });
        if already_registered {
            info!(
                user_id = %request.user_id,
                event_id = %request.event_id,
                "submit: user already holds a confirmed booking"
            );
            return Ok(BookingOutcome::AlreadyRegistered);
        }

        let payload = NewBooking::new(NewBookingParams {
            user_id: request.user_id,
            event_id: request.event_id,
            ticket_count: request.ticket_count,
            unit_price: request.unit_price,
            free_event: request.free_event,
            now: Utc::now(),
        });

        let booking = self.bookings.create(&payload).await?;
        info!(booking_id = %booking.id, "submit: booking confirmed");
        Ok(BookingOutcome::Confirmed(booking))
    }

    /// Cancels a confirmed booking. The returned projection is only flipped
    /// to CANCELLED after the server acknowledged the write.
    pub async fn cancel(&self, booking_id: &str) -> Result<Booking, AppError> {
        let existing = self.bookings.list().await?;
        let booking = existing
            .into_iter()
            .find(|b| b.id == booking_id)
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", booking_id)))?;

        if booking.booking_status == BookingStatus::Cancelled {
            warn!(booking_id, "cancel: booking already cancelled");
            return Ok(booking);
        }

        let mut cancelled = booking;
        cancelled.booking_status = BookingStatus::Cancelled;
        self.bookings.cancel(&cancelled).await?;
        Ok(cancelled)
    }
}
