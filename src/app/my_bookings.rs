use chrono::{DateTime, Utc};
use tracing::warn;

use crate::app::discovery::UNKNOWN_VENUE;
use crate::domain::models::booking::{Booking, BookingStatus};
use crate::domain::services::presentation::Toast;
use crate::error::AppError;
use crate::state::AppState;

pub const UNKNOWN_EVENT: &str = "Unknown Event";
const FALLBACK_IMAGE: &str = "https://source.unsplash.com/400x200/?event";

/// A booking enriched with event and venue details for display.
#[derive(Debug, Clone)]
pub struct BookingCard {
    pub booking: Booking,
    pub event_name: String,
    pub event_image: String,
    pub venue_name: String,
    pub event_date: DateTime<Utc>,
    pub cancellable: bool,
}

/// Loads the session user's bookings and enriches each card. Identity is a
/// hard precondition here; enrichment lookups are not — any that fail leave
/// fallback labels behind.
pub async fn load_my_bookings(
    state: &AppState,
    now: DateTime<Utc>,
) -> Result<Vec<BookingCard>, AppError> {
    let user = state.auth.require_user()?;

    let bookings = state.bookings_api.list().await?;
    let mine = bookings.into_iter().filter(|b| b.user_id == user.id);

    let mut cards = Vec::new();
    for booking in mine {
        cards.push(enrich(state, booking, now).await);
    }
    Ok(cards)
}

async fn enrich(state: &AppState, booking: Booking, now: DateTime<Utc>) -> BookingCard {
    let confirmed = booking.booking_status == BookingStatus::Confirmed;

    match state.events_api.get(&booking.event_id).await {
        Ok(event) => {
            let venue_name = match &event.venue_id {
                Some(id) => match state.venues_api.get(id).await {
                    Ok(venue) => venue.venue_name,
                    Err(e) => {
                        warn!(venue_id = %id, "Failed to fetch venue: {}", e);
                        UNKNOWN_VENUE.to_string()
                    }
                },
                None => UNKNOWN_VENUE.to_string(),
            };
            BookingCard {
                event_name: event.event_name,
                event_image: event
                    .event_photo_url
                    .unwrap_or_else(|| FALLBACK_IMAGE.to_string()),
                venue_name,
                event_date: event.start_date_time,
                // Cancelling an event that already started is pointless;
                // the action is hidden once the start date passes.
                cancellable: confirmed && event.start_date_time >= now,
                booking,
            }
        }
        Err(e) => {
            warn!(event_id = %booking.event_id, "Failed to fetch event: {}", e);
            BookingCard {
                event_name: UNKNOWN_EVENT.to_string(),
                event_image: FALLBACK_IMAGE.to_string(),
                venue_name: UNKNOWN_VENUE.to_string(),
                event_date: booking.booking_date,
                cancellable: confirmed,
                booking,
            }
        }
    }
}

/// Cancels a booking and reports the outcome as a toast. The local card is
/// only flipped to CANCELLED when the server confirmed the write.
pub async fn cancel_booking(state: &AppState, card: &mut BookingCard) -> Toast {
    match state.booking_service.cancel(&card.booking.id).await {
        Ok(cancelled) => {
            card.booking = cancelled;
            card.cancellable = false;
            Toast::success("Booking cancelled successfully.")
        }
        Err(e) => {
            warn!(booking_id = %card.booking.id, "Cancel failed: {}", e);
            Toast::error("Failed to cancel booking. Try again.")
        }
    }
}
