use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Bookings are cancellable for a fixed window after they are placed.
pub const CANCELLATION_WINDOW_HOURS: i64 = 2;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Paid,
    Unpaid,
}

/// Read-only projection of a server-owned booking.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub user_id: String,
    pub event_id: String,
    pub number_of_tickets: u32,
    pub total_amount: f64,
    pub booking_status: BookingStatus,
    pub payment_status: PaymentStatus,
    pub booking_date: DateTime<Utc>,
    pub cancellation_deadline: DateTime<Utc>,
    #[serde(default)]
    pub booking_payment_ids: Vec<String>,
}

pub struct NewBookingParams {
    pub user_id: String,
    pub event_id: String,
    pub ticket_count: u32,
    pub unit_price: f64,
    pub free_event: bool,
    pub now: DateTime<Utc>,
}

/// Creation payload, sent once; from then on the server owns the record.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub user_id: String,
    pub event_id: String,
    pub number_of_tickets: u32,
    pub total_amount: f64,
    pub booking_status: BookingStatus,
    pub payment_status: PaymentStatus,
    pub booking_date: DateTime<Utc>,
    pub cancellation_deadline: DateTime<Utc>,
    pub booking_payment_ids: Vec<String>,
}

impl NewBooking {
    /// Free events are booked as already paid; paid events stay UNPAID until
    /// the (decorative) payment step completes out of band.
    pub fn new(params: NewBookingParams) -> Self {
        Self {
            user_id: params.user_id,
            event_id: params.event_id,
            number_of_tickets: params.ticket_count,
            total_amount: params.unit_price * params.ticket_count as f64,
            booking_status: BookingStatus::Confirmed,
            payment_status: if params.free_event {
                PaymentStatus::Paid
            } else {
                PaymentStatus::Unpaid
            },
            booking_date: params.now,
            cancellation_deadline: params.now + Duration::hours(CANCELLATION_WINDOW_HOURS),
            booking_payment_ids: Vec::new(),
        }
    }
}
